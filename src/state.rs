use std::sync::Arc;

use crate::application::PortfolioLoader;
use crate::config::Config;
use crate::domain::repositories::PortfolioRepository;
use crate::render::Messages;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn PortfolioRepository>,
    pub loader: PortfolioLoader,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(repository: Arc<dyn PortfolioRepository>, config: Arc<Config>) -> Self {
        let loader = PortfolioLoader::from_config(repository.clone(), &config);

        Self {
            repository,
            loader,
            config,
        }
    }

    pub fn messages(&self) -> &'static Messages {
        Messages::for_locale(self.config.locale)
    }
}
