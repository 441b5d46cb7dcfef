//! Store thresholds and their JSON persistence

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{QError, Result};

pub const DEFAULT_MIN_STORE_SIZE: usize = 400;
pub const DEFAULT_TARGET_STORE_SIZE: usize = 800;

/// Thresholds governing when and how far the store is refilled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Below this many bytes the store is refilled after an observe
    pub min_store_size: usize,
    /// Size the store is refilled to
    pub target_store_size: usize,
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            min_store_size: DEFAULT_MIN_STORE_SIZE,
            target_store_size: DEFAULT_TARGET_STORE_SIZE,
        }
    }
}

impl StoreSettings {
    /// Read settings from `path`; a missing file yields `None`
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let settings = serde_json::from_str(&text)
            .map_err(|e| QError::ParseSettingsError(format!("{}: {e}", path.display())))?;
        Ok(Some(settings))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| QError::ParseSettingsError(e.to_string()))?;
        fs::write(path, text)?;
        log::debug!("wrote settings to {}", path.display());
        Ok(())
    }
}
