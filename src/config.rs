//! Environment configuration for the poster server

use std::env;

use thiserror::Error;

/// Error raised when the environment is missing required settings
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("{0} is not set in the environment")]
    Missing(&'static str),
}

/// Runtime configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Jellyfin server, e.g. "http://jellyfin:8096"
    pub base_url: String,
    /// Static API token forwarded as `X-Emby-Token`
    pub api_key: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Verbose logging flag
    pub debug: bool,
}

impl Config {
    /// Create a new Config from environment variables
    ///
    /// # Environment Variables
    /// - `JELLYFIN_URL`: base URL of the media server (required)
    /// - `JELLYFIN_API_KEY`: API token (required)
    /// - `PORT`: listen port (default: 5000)
    /// - `DEBUG`: verbose logging, "true" enables (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            env::var("JELLYFIN_URL").map_err(|_| ConfigError::Missing("JELLYFIN_URL"))?;
        let api_key =
            env::var("JELLYFIN_API_KEY").map_err(|_| ConfigError::Missing("JELLYFIN_API_KEY"))?;

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);

        let debug = env::var("DEBUG")
            .map(|s| parse_debug(&s))
            .unwrap_or(true);

        Ok(Self {
            base_url,
            api_key,
            port,
            debug,
        })
    }
}

fn parse_debug(value: &str) -> bool {
    value.to_lowercase() == "true"
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["JELLYFIN_URL", "JELLYFIN_API_KEY", "PORT", "DEBUG"] {
            unsafe { env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn missing_base_url_is_an_error() {
        clear_env();
        unsafe { env::set_var("JELLYFIN_API_KEY", "token") };

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("JELLYFIN_URL"));
    }

    #[test]
    #[serial]
    fn missing_api_key_is_an_error() {
        clear_env();
        unsafe { env::set_var("JELLYFIN_URL", "http://jellyfin:8096") };

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("JELLYFIN_API_KEY"));
    }

    #[test]
    #[serial]
    fn defaults_apply_when_optional_vars_absent() {
        clear_env();
        unsafe {
            env::set_var("JELLYFIN_URL", "http://jellyfin:8096");
            env::set_var("JELLYFIN_API_KEY", "token");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 5000);
        assert!(config.debug);
    }

    #[test]
    #[serial]
    fn port_and_debug_are_read_from_env() {
        clear_env();
        unsafe {
            env::set_var("JELLYFIN_URL", "http://jellyfin:8096");
            env::set_var("JELLYFIN_API_KEY", "token");
            env::set_var("PORT", "8080");
            env::set_var("DEBUG", "False");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert!(!config.debug);
    }

    #[test]
    fn debug_parsing_is_case_insensitive() {
        assert!(parse_debug("TRUE"));
        assert!(parse_debug("true"));
        assert!(!parse_debug("1"));
        assert!(!parse_debug("yes"));
    }
}
