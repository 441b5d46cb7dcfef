//! Command-line options for the `qrn` binary

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::anu::DEFAULT_ENDPOINT;

const DATA_DIR_NAME: &str = ".qrn";

#[derive(Debug, Parser)]
#[command(name = "qrn", version, about = "Interactive console for a local store of quantum random bytes")]
pub struct Options {
    /// Directory holding the byte store and settings [default: $HOME/.qrn]
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Randomness service endpoint
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Seconds to wait on the randomness service
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl Options {
    pub fn data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => std::env::var_os("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DATA_DIR_NAME),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
