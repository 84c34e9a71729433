use std::env;
use std::time::Duration;

use crate::error::Error;

pub const DB_MAX_CONNECTIONS: u32 = 5;
pub const DB_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ORS_API_BASE: &str = "api.openrouteservice.org";

/// Process configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub ors_api_base: String,
    pub ors_api_key: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let database_url = env::var("DATABASE_URL")?;
        let ors_api_key = env::var("ORS_API_KEY")?;
        let ors_api_base =
            env::var("ORS_API_BASE").unwrap_or_else(|_| DEFAULT_ORS_API_BASE.into());
        let port = env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            database_url,
            ors_api_base,
            ors_api_key,
            port,
        })
    }
}
