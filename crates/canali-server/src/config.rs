use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup` so tests need not touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("CANALI_DB_PATH").unwrap_or_else(|| "app.db".into());
        let host = lookup("CANALI_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match lookup("CANALI_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("CANALI_PORT is not a valid port: {:?}", raw))?,
            None => 5000,
        };

        Ok(Self {
            db_path: db_path.into(),
            host,
            port,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.db_path, PathBuf::from("app.db"));
        assert_eq!(config.addr().unwrap(), "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("CANALI_DB_PATH", "/var/lib/canali/app.db"),
            ("CANALI_HOST", "127.0.0.1"),
            ("CANALI_PORT", "8080"),
        ])
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/var/lib/canali/app.db"));
        assert_eq!(config.addr().unwrap(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(config(&[("CANALI_PORT", "http")]).is_err());
        assert!(config(&[("CANALI_PORT", "70000")]).is_err());
    }

    #[test]
    fn bad_host_fails_at_addr() {
        let config = config(&[("CANALI_HOST", "not a host")]).unwrap();
        assert!(config.addr().is_err());
    }
}
