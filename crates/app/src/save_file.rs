use delve_core::WorldSnapshot;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

/// Filename of the single save slot inside the platform data directory.
pub const SAVE_SLOT: &str = "save.json";

/// File-backed store for the one named snapshot the game persists.
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn at_default_location() -> Option<Self> {
        ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| Self::new(dirs.data_dir().join(SAVE_SLOT)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write via a temp file and rename so a crash never leaves a torn save.
    pub fn save(&self, snapshot: &WorldSnapshot) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(snapshot).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// `NotFound` means no snapshot was ever saved; anything else is a
    /// damaged or unreadable file.
    pub fn load(&self) -> io::Result<WorldSnapshot> {
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
