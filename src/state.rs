use std::sync::Arc;

use crate::application::services::LinkStore;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub link_store: Arc<LinkStore>,
}

impl AppState {
    pub fn new(link_store: Arc<LinkStore>) -> Self {
        Self { link_store }
    }
}
