use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub default_attempt_limit: u32,
    pub log_json: bool,
    pub challenges: ChallengeSecrets,
}

/// Values backing the static challenge endpoints. Unset variables leave the
/// corresponding challenge unanswerable.
#[derive(Debug, Clone, Default)]
pub struct ChallengeSecrets {
    pub response_codes_one: Option<String>,
    pub code_ok: i64,
    pub possible: String,
    pub message_six: String,
    pub phone_ok: String,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            database_max_connections: get_env_parse_or("DATABASE_MAX_CONNECTIONS", 20)?,
            default_attempt_limit: get_env_parse_or("DEFAULT_ATTEMPT_LIMIT", 10)?,
            log_json: env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            challenges: ChallengeSecrets {
                response_codes_one: env::var("RESPONSE_CODES_ONE")
                    .ok()
                    .filter(|v| !v.trim().is_empty()),
                code_ok: get_env_parse_or("CODE_OK", 0)?,
                possible: env::var("POSSIBLE").unwrap_or_default(),
                message_six: env::var("MESSAGE_SIX").unwrap_or_default(),
                phone_ok: env::var("PHONE_OK").unwrap_or_default(),
            },
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => parse_value(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
