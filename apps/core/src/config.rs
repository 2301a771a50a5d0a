//! Service configuration.
//!
//! Values come from the process environment (a `.env` file is loaded by
//! `main` before this runs). Every variable has a default so the service
//! starts with no configuration at all.

use std::env;
use std::net::SocketAddr;

use crate::error::AppError;
use crate::rate_limiter::RateLimit;

const DEFAULT_FULL_NAME: &str = "John Doe";
const DEFAULT_DOB: &str = "17091999";
const DEFAULT_EMAIL: &str = "john@xyz.com";
const DEFAULT_ROLL_NUMBER: &str = "ABCD123";
const DEFAULT_RATE_LIMIT: &str = "10000/hour";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Static identity values reported with every classification response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub full_name: String,
    /// Date of birth, `ddmmyyyy`.
    pub dob: String,
    pub email: String,
    pub roll_number: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            full_name: DEFAULT_FULL_NAME.to_string(),
            dob: DEFAULT_DOB.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            roll_number: DEFAULT_ROLL_NUMBER.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub identity: IdentityConfig,
    pub rate_limit: RateLimit,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Reads the `BFHL_*` environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let identity = IdentityConfig {
            full_name: env_or("BFHL_FULL_NAME", DEFAULT_FULL_NAME),
            dob: env_or("BFHL_DOB", DEFAULT_DOB),
            email: env_or("BFHL_EMAIL", DEFAULT_EMAIL),
            roll_number: env_or("BFHL_ROLL_NUMBER", DEFAULT_ROLL_NUMBER),
        };
        if identity.full_name.trim().is_empty() {
            return Err(AppError::Config("BFHL_FULL_NAME must not be empty".to_string()));
        }

        let rate_limit: RateLimit = env_or("BFHL_RATE_LIMIT", DEFAULT_RATE_LIMIT).parse()?;

        let bind_raw = env_or("BFHL_BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("Invalid BFHL_BIND_ADDR '{}': {}", bind_raw, e)))?;

        Ok(Self {
            identity,
            rate_limit,
            bind_addr,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
