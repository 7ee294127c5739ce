use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub backend_url: String,
    pub backend_api_token: Option<String>,
    pub mock_api_url: String,
    pub portal_base_url: String,
    pub production: bool,
    pub max_upload_mb: usize,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let server_address = get_env("SERVER_ADDRESS")?;
        let backend_url = get_url("BACKEND_URL")?;
        let mock_api_url = match env::var("MOCK_API_URL").ok().filter(|v| !v.trim().is_empty()) {
            Some(_) => get_url("MOCK_API_URL")?,
            None => backend_url.clone(),
        };
        let portal_base_url = match env::var("PORTAL_BASE_URL").ok().filter(|v| !v.trim().is_empty()) {
            Some(_) => get_url("PORTAL_BASE_URL")?,
            None => format!("http://{}", server_address),
        };

        Ok(Self {
            server_address,
            backend_url,
            backend_api_token: env::var("BACKEND_API_TOKEN")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            mock_api_url,
            portal_base_url,
            production: env::var("APP_ENV")
                .map(|v| v.eq_ignore_ascii_case("production"))
                .unwrap_or(false),
            max_upload_mb: get_env_parse_or("MAX_UPLOAD_MB", 10)?,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_url(name: &str) -> Result<String> {
    let raw = get_env(name)?;
    Url::parse(&raw).map_err(|e| Error::Config(format!("Invalid URL for {}: {}", name, e)))?;
    Ok(raw.trim_end_matches('/').to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
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
