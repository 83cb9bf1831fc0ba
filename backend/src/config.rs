use std::path::PathBuf;

use thiserror::Error;
use url::Url;

pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// Staging is the live deployment, so it counts as production for
    /// tracking purposes.
    pub fn is_production(self) -> bool {
        !matches!(self, Environment::Development)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid ENVIRONMENT {0:?}, expected development, staging or production")]
    Environment(String),
    #[error("invalid PORT {0:?}")]
    Port(String),
    #[error("invalid WEB_URL {value:?}: {source}")]
    WebUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("LOCALES must list at least one locale and include \"en\"")]
    Locales,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub port: u16,
    /// Public origin without a trailing slash.
    pub web_url: String,
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub locales: Vec<String>,
    pub google_analytics_id: Option<String>,
    pub openpanel_client_id: Option<String>,
    /// Script path of the hydration bundle; without it pages are static.
    pub client_bundle: Option<String>,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let environment = match var("ENVIRONMENT").as_deref() {
            None | Some("development") => Environment::Development,
            Some("staging") => Environment::Staging,
            Some("production") => Environment::Production,
            Some(other) => return Err(ConfigError::Environment(other.to_string())),
        };

        let port = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Port(raw))?,
            None => match environment {
                Environment::Staging => 3100,
                _ => 3000,
            },
        };

        let raw_url = var("WEB_URL").unwrap_or_else(|| "http://localhost:3000".to_string());
        Url::parse(&raw_url).map_err(|source| ConfigError::WebUrl {
            value: raw_url.clone(),
            source,
        })?;
        let web_url = raw_url.trim_end_matches('/').to_string();

        let locales: Vec<String> = var("LOCALES")
            .unwrap_or_else(|| "en,zh".to_string())
            .split(',')
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        if !locales.iter().any(|l| l == DEFAULT_LOCALE) {
            return Err(ConfigError::Locales);
        }

        Ok(Self {
            environment,
            port,
            web_url,
            content_dir: PathBuf::from(var("CONTENT_DIR").unwrap_or_else(|| "content".to_string())),
            static_dir: PathBuf::from(var("STATIC_DIR").unwrap_or_else(|| "public".to_string())),
            locales,
            google_analytics_id: var("GOOGLE_ANALYTICS_ID"),
            openpanel_client_id: var("OPENPANEL_CLIENT_ID"),
            client_bundle: var("CLIENT_BUNDLE"),
            sentry_dsn: var("SENTRY_DSN"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.port, 3000);
        assert_eq!(config.web_url, "http://localhost:3000");
        assert_eq!(config.locales, vec!["en", "zh"]);
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert!(config.client_bundle.is_none());
    }

    #[test]
    fn staging_defaults_to_port_3100() {
        let config = config(&[("ENVIRONMENT", "staging")]).unwrap();
        assert_eq!(config.port, 3100);
        assert!(config.environment.is_production());
    }

    #[test]
    fn explicit_port_wins_and_trailing_slash_is_trimmed() {
        let config = config(&[("PORT", "8080"), ("WEB_URL", "https://seedance.example/")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.web_url, "https://seedance.example");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(config(&[("PORT", "eighty")]), Err(ConfigError::Port(_))));
        assert!(matches!(config(&[("ENVIRONMENT", "prod")]), Err(ConfigError::Environment(_))));
        assert!(matches!(config(&[("WEB_URL", "not a url")]), Err(ConfigError::WebUrl { .. })));
        assert!(matches!(config(&[("LOCALES", "zh,fr")]), Err(ConfigError::Locales)));
    }

    #[test]
    fn empty_optional_values_are_unset() {
        let config = config(&[("GOOGLE_ANALYTICS_ID", "  "), ("LOCALES", " EN , zh ,")]).unwrap();
        assert!(config.google_analytics_id.is_none());
        assert_eq!(config.locales, vec!["en", "zh"]);
    }
}
