//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::config::Config;
use crate::service::NewsService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub service: Arc<NewsService>,
}

impl AppState {
    pub fn new(config: Config, service: NewsService) -> Self {
        Self {
            config: Arc::new(config),
            service: Arc::new(service),
        }
    }
}
