//! Initialize journal use case

use crate::domain::Locale;
use crate::error::Result;
use crate::infrastructure::{Config, EntryRepository, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path, locale: Locale) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new(locale))?;

    log::info!("initialized journal at {}", path.display());
    println!("Initialized moodlog journal at {}", path.display());
    println!("Locale: {}", locale);

    Ok(())
}
