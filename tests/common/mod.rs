use assert_cmd::Command;
use tempfile::TempDir;

pub fn moodlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodlog").unwrap();
    cmd.env_remove("MOODLOG_ROOT");
    cmd.env_remove("MOODLOG_LOCALE");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[allow(dead_code)]
pub fn init_journal(locale: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    moodlog_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--locale")
        .arg(locale)
        .assert()
        .success();
    temp
}
