use anyhow::{anyhow, Result};
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub http_addr: SocketAddr,
    pub body_limit_bytes: usize,
    pub batch_max_items: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let http_addr = SocketAddr::from_str(&env_or("HTTP_ADDR", "0.0.0.0:8080"))
            .map_err(|err| anyhow!("invalid HTTP_ADDR: {}", err))?;

        let body_limit_bytes: usize = env_or_parse("BODY_LIMIT_BYTES", "65536")?;
        if body_limit_bytes == 0 {
            return Err(anyhow!("invalid BODY_LIMIT_BYTES: must be greater than zero"));
        }

        let batch_max_items: usize = env_or_parse("BATCH_MAX_ITEMS", "100")?;
        if batch_max_items == 0 {
            return Err(anyhow!("invalid BATCH_MAX_ITEMS: must be greater than zero"));
        }

        Ok(Self {
            http_addr,
            body_limit_bytes,
            batch_max_items,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let value = std::env::var(key).unwrap_or_else(|_| default.to_string());
    value
        .parse::<T>()
        .map_err(|err| anyhow!("invalid {}: {}", key, err))
}
