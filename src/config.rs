use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

use reqwest::Url;

use crate::error::AppError;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: Url,
    pub bind_addr: SocketAddr,
    /// `None` keeps the upstream call unbounded.
    pub api_timeout: Option<Duration>,
    pub sessions_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("ADVISOR_API_URL")
            .ok_or_else(|| AppError::Configuration("ADVISOR_API_URL is not set".to_string()))?;
        let api_url = Url::parse(&raw_url).map_err(|e| {
            AppError::Configuration(format!("ADVISOR_API_URL is invalid ({}): {}", raw_url, e))
        })?;
        if api_url.cannot_be_a_base() {
            return Err(AppError::Configuration(format!(
                "ADVISOR_API_URL cannot be used as a base URL: {}",
                raw_url
            )));
        }

        let bind_addr = lookup("ADVISOR_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Configuration(format!("ADVISOR_BIND_ADDR is invalid: {}", e)))?;

        let api_timeout = lookup("ADVISOR_API_TIMEOUT_SECS")
            .map(|v| {
                v.parse::<u64>().map(Duration::from_secs).map_err(|e| {
                    AppError::Configuration(format!("ADVISOR_API_TIMEOUT_SECS is invalid: {}", e))
                })
            })
            .transpose()?;

        let sessions_file = lookup("ADVISOR_SESSIONS_FILE").map(PathBuf::from);

        Ok(Self {
            api_url,
            bind_addr,
            api_timeout,
            sessions_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_url_is_set() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("ADVISOR_API_URL", "http://localhost:8080/")]))
                .unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert!(config.api_timeout.is_none());
        assert!(config.sessions_file.is_none());
    }

    #[test]
    fn missing_url_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("ADVISOR_API_URL"));
    }

    #[test]
    fn timeout_must_be_numeric() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("ADVISOR_API_URL", "http://localhost:8080"),
            ("ADVISOR_API_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));

        let config = AppConfig::from_lookup(lookup_from(&[
            ("ADVISOR_API_URL", "http://localhost:8080"),
            ("ADVISOR_API_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(config.api_timeout, Some(Duration::from_secs(30)));
    }
}
