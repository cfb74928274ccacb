//! Subcommand implementations.

pub mod account;
pub mod answers;
pub mod ask;
pub mod connections;
pub mod correct;
pub mod init;
pub mod memory;
pub mod profile;
pub mod prompt;
pub mod select;
pub mod status;

use std::path::PathBuf;
use std::sync::Arc;
use twinvoice_config::AppConfig;
use twinvoice_store::{FileStore, ProfileRepository};

/// Loaded config plus the repository over the data directory.
pub struct Workspace {
    pub config: AppConfig,
    pub repo: ProfileRepository<Arc<FileStore>>,
}

impl Workspace {
    /// Load config and open the file store. `data_dir` overrides the config.
    pub fn open(data_dir: Option<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = AppConfig::load().map_err(twinvoice_core::Error::from)?;
        if let Some(dir) = data_dir {
            config.store.data_dir = dir;
        }
        let store = Arc::new(FileStore::new(config.store.data_dir.clone()));
        let repo = ProfileRepository::new(store);
        Ok(Self { config, repo })
    }
}
