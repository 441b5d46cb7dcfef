//! Persistent store of random bytes
//! Keeps fetched bytes on disk and refills them according to the thresholds
//!
//! ## store/ Invariants
//!
//! - Every mutation is written through to disk before the call returns.
//! - Bytes leave the store only through `observe`, oldest first.
//! - A failed fetch leaves the store untouched.
//! - Settings are read from disk once, in `open`; later operations work on
//!   the in-memory copy and only ever write the file. A settings file edited
//!   by hand while the console runs is overwritten on the next settings change.

pub mod settings;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::anu::{QrnSource, MAX_FETCH_LEN};
use crate::error::{QrnError, Result};

pub use settings::{StoreSettings, DEFAULT_MIN_STORE_SIZE, DEFAULT_TARGET_STORE_SIZE};

pub const STORE_FILE_NAME: &str = "qrn_store.bin";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Handle on the on-disk store and its settings
#[derive(Debug)]
pub struct Store {
    bytes: Vec<u8>,
    settings: StoreSettings,
    store_file: PathBuf,
    settings_file: PathBuf,
}

impl Store {
    /// Open (or create) the store rooted at `dir`
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        let store_file = dir.join(STORE_FILE_NAME);
        let settings_file = dir.join(SETTINGS_FILE_NAME);

        let settings = match StoreSettings::load(&settings_file)? {
            Some(settings) => settings,
            None => {
                log::info!("no settings at {}, writing defaults", settings_file.display());
                let settings = StoreSettings::default();
                settings.save(&settings_file)?;
                settings
            }
        };

        let bytes = match fs::read(&store_file) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        log::debug!("opened store with {} bytes", bytes.len());

        Ok(Store {
            bytes,
            settings,
            store_file,
            settings_file,
        })
    }

    /// Fetch `count` fresh bytes and append them
    pub fn add_to_store<S: QrnSource + ?Sized>(&mut self, source: &S, count: usize) -> Result<()> {
        let fresh = source.fetch(count)?;
        self.bytes.extend_from_slice(&fresh);
        self.persist_bytes()
    }

    /// Top the store up to the target size
    pub fn fill<S: QrnSource + ?Sized>(&mut self, source: &S) -> Result<()> {
        let target = self.settings.target_store_size;
        if self.bytes.len() < target {
            self.add_to_store(source, target - self.bytes.len())?;
        }
        Ok(())
    }

    pub fn restore_defaults(&mut self) -> Result<()> {
        self.settings = StoreSettings::default();
        self.persist_settings()
    }

    /// Restore default settings, discard the current bytes and refill
    pub fn reinitialize<S: QrnSource + ?Sized>(&mut self, source: &S) -> Result<()> {
        self.restore_defaults()?;
        let fresh = source.fetch(self.settings.target_store_size)?;
        self.bytes = fresh;
        self.persist_bytes()
    }

    /// Take `count` bytes from the front of the store, removing them
    ///
    /// A shortfall is fetched live. If the store would drop below the minimum
    /// size it is refilled to the target size in the same fetch.
    pub fn observe<S: QrnSource + ?Sized>(&mut self, source: &S, count: usize) -> Result<Vec<u8>> {
        let taken = count.min(self.bytes.len());
        let shortfall = count - taken;
        let remaining = self.bytes.len() - taken;
        let refill = if remaining < self.settings.min_store_size {
            self.settings.target_store_size.saturating_sub(remaining)
        } else {
            0
        };

        let wanted = shortfall
            .checked_add(refill)
            .ok_or(QrnError::RequestTooLarge {
                requested: count,
                max: MAX_FETCH_LEN,
            })?;
        let fresh = source.fetch(wanted)?;
        if refill > 0 {
            log::debug!("store below minimum after observe, refilling {refill} bytes");
        }
        let (live, refill_bytes) = fresh.split_at(shortfall.min(fresh.len()));

        let mut observed: Vec<u8> = self.bytes.drain(..taken).collect();
        observed.extend_from_slice(live);
        self.bytes.extend_from_slice(refill_bytes);
        self.persist_bytes()?;
        Ok(observed)
    }

    /// The first `count` bytes, without removing them
    pub fn peek(&self, count: usize) -> &[u8] {
        &self.bytes[..count.min(self.bytes.len())]
    }

    pub fn peek_all(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn min_store_size(&self) -> usize {
        self.settings.min_store_size
    }

    pub fn target_store_size(&self) -> usize {
        self.settings.target_store_size
    }

    pub fn settings(&self) -> StoreSettings {
        self.settings
    }

    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    pub fn set_min_store_size(&mut self, size: usize) -> Result<()> {
        self.settings.min_store_size = size;
        self.persist_settings()
    }

    pub fn set_target_store_size(&mut self, size: usize) -> Result<()> {
        self.settings.target_store_size = size;
        self.persist_settings()
    }

    fn persist_bytes(&self) -> Result<()> {
        fs::write(&self.store_file, &self.bytes)?;
        log::debug!("wrote {} bytes to {}", self.bytes.len(), self.store_file.display());
        Ok(())
    }

    fn persist_settings(&self) -> Result<()> {
        self.settings.save(&self.settings_file)
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
