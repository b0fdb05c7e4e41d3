use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_JWT_ISSUER: &str = "advertisement-api";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret: String,
    pub jwt_issuer: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            jwt_secret: required("JWT_SECRET")?,
            jwt_issuer: optional("JWT_ISSUER", DEFAULT_JWT_ISSUER),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "value is empty".to_string(),
        }),
        Err(_) => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
