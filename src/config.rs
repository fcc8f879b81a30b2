use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MONGODB_URI environment variable is not set")]
    MissingMongoDbUri,
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub port: u16,
}

impl Config {
    /// Reads `MONGODB_URI` and `PORT`, loading a `.env` file first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongodb_uri = lookup("MONGODB_URI")
            .filter(|uri| !uri.is_empty())
            .ok_or(ConfigError::MissingMongoDbUri)?;
        let port = match lookup("PORT").filter(|port| !port.is_empty()) {
            Some(port) => port.parse().map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { mongodb_uri, port })
    }

    pub fn new_mongodb_uri(mongodb_uri: String) -> Self {
        Self {
            mongodb_uri,
            port: DEFAULT_PORT,
        }
    }
}
