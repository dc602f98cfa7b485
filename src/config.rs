use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::database::activity_repo::CapacityPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind, `HOST`
    pub host: String,
    /// Preferred port, `PORT`. The next port is tried once if this one is taken.
    pub port: u16,
    /// Directory mounted at `/static`, `STATIC_DIR`
    pub static_dir: PathBuf,
    /// `ENFORCE_CAPACITY`
    pub capacity: CapacityPolicy,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {:?}", raw))?,
            None => 8000,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));

        let capacity = match lookup("ENFORCE_CAPACITY") {
            Some(v) if is_truthy(&v) => CapacityPolicy::Enforced,
            _ => CapacityPolicy::Informational,
        };

        Ok(Config {
            host,
            port,
            static_dir,
            capacity,
        })
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        self.addr_with_port(self.port)
    }

    pub fn fallback_addr(&self) -> anyhow::Result<SocketAddr> {
        let port = self
            .port
            .checked_add(1)
            .context("no fallback port above 65535")?;
        self.addr_with_port(port)
    }

    fn addr_with_port(&self, port: u16) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, port)
            .parse()
            .with_context(|| format!("cannot parse bind address {}:{}", self.host, port))
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8000");
        assert_eq!(config.fallback_addr().unwrap().port(), 8001);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.capacity, CapacityPolicy::Informational);
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9090"),
            ("STATIC_DIR", "/srv/frontend"),
            ("ENFORCE_CAPACITY", "True"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:9090");
        assert_eq!(config.static_dir, PathBuf::from("/srv/frontend"));
        assert_eq!(config.capacity, CapacityPolicy::Enforced);
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn no_fallback_past_last_port() {
        let config = config_from(&[("PORT", "65535")]).unwrap();
        assert!(config.fallback_addr().is_err());
    }

    #[test]
    fn unparsable_host() {
        let config = config_from(&[("HOST", "not a host")]).unwrap();
        assert!(config.bind_addr().is_err());
    }
}
