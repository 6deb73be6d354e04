use std::sync::Arc;

use crate::config::Config;
use crate::groq::GroqClient;

/// Shared application state, immutable after startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when no API key was present at startup; the convert handler
    /// then rejects every request without attempting a network call.
    pub groq: Option<Arc<GroqClient>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let groq = config.groq_api_key.clone().map(|key| {
            Arc::new(GroqClient::new(
                key,
                config.model.clone(),
                config.groq_base_url.clone(),
            ))
        });

        Self { config, groq }
    }
}
