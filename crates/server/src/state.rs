use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use std::sync::Arc;
use zipfold::{MAX_WIDTH, ReduceConfig};

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Reduction config derived from the server config, shared across requests
    pub reduce: ReduceConfig,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        // Catch a bad width at startup instead of failing every request.
        if config.code_width == 0 || config.code_width > MAX_WIDTH {
            return Err(ServerError::Config(format!(
                "code_width {} out of range 1..={MAX_WIDTH}",
                config.code_width
            )));
        }

        let reduce = ReduceConfig::with_width(config.code_width);

        Ok(Self {
            config: Arc::new(config),
            reduce,
        })
    }
}
