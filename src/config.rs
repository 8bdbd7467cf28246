//! Server configuration loaded from environment variables.

use crate::error::ConfigError;
use std::str::FromStr;

/// Allowed CORS origins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// sqlx SQLite URL, e.g. `sqlite://db/dua_main.sqlite`.
    pub database_url: String,
    pub max_connections: u32,
    pub cors_origins: CorsOrigins,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                    | Default                       |
    /// |----------------------------|-------------------------------|
    /// | `HOST`                     | `0.0.0.0`                     |
    /// | `PORT`                     | `5000`                        |
    /// | `DATABASE_URL`             | `sqlite://db/dua_main.sqlite` |
    /// | `DATABASE_MAX_CONNECTIONS` | `5`                           |
    /// | `CORS_ORIGINS`             | `*`                           |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var(&lookup, "PORT", 5000)?;
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://db/dua_main.sqlite".into());
        let max_connections = parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?;
        let cors_origins = parse_origins(&lookup("CORS_ORIGINS").unwrap_or_else(|| "*".into()))?;

        Ok(Self {
            host,
            port,
            database_url,
            max_connections,
            cors_origins,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidVar { name, value: raw }),
    }
}

fn parse_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if origins.is_empty() {
        return Err(ConfigError::NoCorsOrigins);
    }
    if origins.iter().any(|o| o == "*") {
        return Ok(CorsOrigins::Any);
    }
    Ok(CorsOrigins::List(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.database_url, "sqlite://db/dua_main.sqlite");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.cors_origins, CorsOrigins::Any);
    }

    #[test]
    fn overrides() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite://other.sqlite"),
            ("CORS_ORIGINS", "http://localhost:5173, https://duaruqyah.com"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.database_url, "sqlite://other.sqlite");
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec!["http://localhost:5173".into(), "https://duaruqyah.com".into()])
        );
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = load(&[("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "PORT", .. }));
        assert!(load(&[("DATABASE_MAX_CONNECTIONS", "-1")]).is_err());
    }

    #[test]
    fn empty_origin_list_is_rejected() {
        assert!(matches!(load(&[("CORS_ORIGINS", " , ")]), Err(ConfigError::NoCorsOrigins)));
    }
}
