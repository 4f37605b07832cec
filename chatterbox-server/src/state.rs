use std::sync::Arc;

use storage::Repository;

/// Router state: the message store handle, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    repo: Arc<dyn Repository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &dyn Repository {
        self.repo.as_ref()
    }
}
