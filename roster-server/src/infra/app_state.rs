use std::{fmt, sync::Arc};

use roster_core::{FileStore, UsersRepository};

use crate::infra::config::Config;
use crate::infra::flash::FlashStore;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UsersRepository>,
    pub files: Arc<FileStore>,
    pub flash: FlashStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(users: Arc<dyn UsersRepository>, files: FileStore, config: Config) -> Self {
        Self {
            users,
            files: Arc::new(files),
            flash: FlashStore::default(),
            config: Arc::new(config),
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
