//! File system repository

use crate::domain::JournalEntry;
use crate::error::{MoodlogError, Result};
use crate::infrastructure::Config;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const ENTRIES_FILE: &str = "entries.toml";
const LEGACY_FILE: &str = "legacy.toml";

/// On-disk shape of an entries file
#[derive(Debug, Default, Serialize, Deserialize)]
struct EntryFile {
    #[serde(default)]
    entries: Vec<JournalEntry>,
}

/// Abstract storage for configuration and journal entries
pub trait EntryRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodlog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodlog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodlog directory structure
    fn initialize(&self) -> Result<()>;

    /// Canonical entries, in stored order
    fn load_entries(&self) -> Result<Vec<JournalEntry>>;

    /// Entries from the legacy local source; never written by moodlog
    fn load_legacy_entries(&self) -> Result<Vec<JournalEntry>>;

    /// Append one entry to the canonical store
    fn append_entry(&self, entry: &JournalEntry) -> Result<()>;
}

/// File system implementation of EntryRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MOODLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_moodlog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodlogError::Config(format!(
                    "MOODLOG_ROOT is set to '{}' but no .moodlog directory found. \
                    Run 'moodlog init' in that directory or unset MOODLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_moodlog_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(MoodlogError::NotMoodlogDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_moodlog_dir(path: &Path) -> bool {
        path.join(".moodlog").is_dir()
    }

    fn data_path(&self, file: &str) -> PathBuf {
        self.root.join(".moodlog").join(file)
    }

    /// Read an entries file; a missing file is an empty list
    fn read_entry_file(&self, file: &str) -> Result<Vec<JournalEntry>> {
        let path = self.data_path(file);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)?;
        let parsed: EntryFile = toml::from_str(&contents).map_err(|e| {
            MoodlogError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        log::debug!("loaded {} entries from {}", parsed.entries.len(), path.display());
        Ok(parsed.entries)
    }
}

impl EntryRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_moodlog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let moodlog_dir = self.root.join(".moodlog");

        if moodlog_dir.exists() {
            return Err(MoodlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&moodlog_dir)?;
        Ok(())
    }

    fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        self.read_entry_file(ENTRIES_FILE)
    }

    fn load_legacy_entries(&self) -> Result<Vec<JournalEntry>> {
        self.read_entry_file(LEGACY_FILE)
    }

    fn append_entry(&self, entry: &JournalEntry) -> Result<()> {
        let mut entries = self.load_entries()?;
        entries.push(entry.clone());

        let contents = toml::to_string(&EntryFile { entries })?;
        fs::write(self.data_path(ENTRIES_FILE), contents)?;
        Ok(())
    }
}
