//! Server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use chatbot_intent::CorpusSource;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// JSON corpus file; the built-in corpus is used when unset.
    pub corpus_path: Option<PathBuf>,
    /// Include internal error details in error responses.
    pub expose_error_details: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            log_level: "info".to_string(),
            cors_allowed_origins: "*".to_string(),
            corpus_path: None,
            expose_error_details: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PORT`: Server port (default: 3000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "*")
    /// - `CHATBOT_CORPUS_PATH`: JSON corpus file (default: built-in corpus)
    /// - `APP_ENV`: `development` exposes error details in responses
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: format!("'{raw}' is not a valid port"),
            })?,
            None => defaults.port,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        let cors_allowed_origins =
            lookup("CORS_ALLOWED_ORIGINS").unwrap_or(defaults.cors_allowed_origins);

        let corpus_path = lookup("CHATBOT_CORPUS_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let expose_error_details = lookup("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("development"))
            .unwrap_or(false);

        Ok(Self {
            port,
            log_level,
            cors_allowed_origins,
            corpus_path,
            expose_error_details,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Where the chat service loads its corpus from.
    pub fn corpus_source(&self) -> CorpusSource {
        match &self.corpus_path {
            Some(path) => CorpusSource::File(path.clone()),
            None => CorpusSource::Builtin,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.cors_allowed_origins, "*");
        assert!(config.corpus_path.is_none());
        assert!(!config.expose_error_details);
        assert!(matches!(config.corpus_source(), CorpusSource::Builtin));
    }

    #[test]
    fn test_explicit_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("LOG_LEVEL", "debug"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:5173"),
            ("CHATBOT_CORPUS_PATH", "/etc/chatbot/corpus.json"),
            ("APP_ENV", "Development"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.cors_allowed_origins, "http://localhost:5173");
        assert!(config.expose_error_details);
        match config.corpus_source() {
            CorpusSource::File(path) => assert_eq!(path, PathBuf::from("/etc/chatbot/corpus.json")),
            other => panic!("unexpected source: {other:?}"),
        }
        assert_eq!(config.socket_addr().port(), 8080);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        match err {
            ConfigError::InvalidValue { name, .. } => assert_eq!(name, "PORT"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_corpus_path_ignored() {
        let config = ServerConfig::from_lookup(lookup(&[("CHATBOT_CORPUS_PATH", "  ")])).unwrap();
        assert!(config.corpus_path.is_none());
    }
}
