use super::engine_config::{ConfigError, EngineConfig};
use super::maps_config::MapsConfig;
use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub maps: MapsConfig,
    pub engine: EngineConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            maps: MapsConfig::from_env()?,
            engine: EngineConfig::from_env()?,
        })
    }
}
