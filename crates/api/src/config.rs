/// Default bind port when `PORT` is unset.
const DEFAULT_PORT: u16 = 8080;

/// Error raised when environment configuration cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a valid u16, got {0:?}")]
    InvalidPort(String),
}

/// Server configuration loaded from environment variables.
///
/// Loaded once at startup and passed down explicitly; nothing reads the
/// process environment after `from_env` returns.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Variant toggle. `Some` enables the versioned variant: payloads carry
    /// this value as `api_version` and `/api/pong` is mounted. `None` runs
    /// the base variant with `/api/ping` only.
    pub api_version: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var       | Default   |
    /// |---------------|-----------|
    /// | `HOST`        | `0.0.0.0` |
    /// | `PORT`        | `8080`    |
    /// | `API_VERSION` | unset     |
    ///
    /// Logs an info line when `PORT` is unset and the default is applied.
    /// A `PORT` value that does not parse as a u16 is a fatal error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port_var = std::env::var("PORT").ok();
        if port_var.is_none() {
            tracing::info!(port = DEFAULT_PORT, "PORT not set, using default");
        }
        let port = parse_port(port_var.as_deref())?;

        let api_version = std::env::var("API_VERSION").ok().filter(|v| !v.is_empty());

        Ok(Self {
            host,
            port,
            api_version,
        })
    }

    /// Whether the versioned variant is enabled.
    pub fn is_versioned(&self) -> bool {
        self.api_version.is_some()
    }
}

/// Parse an optional `PORT` value, falling back to [`DEFAULT_PORT`].
fn parse_port(value: Option<&str>) -> Result<u16, ConfigError> {
    match value {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidPort(raw.to_string())),
        None => Ok(DEFAULT_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn missing_port_defaults_to_8080() {
        assert_eq!(parse_port(None).unwrap(), 8080);
    }

    #[test]
    fn explicit_port_is_used() {
        assert_eq!(parse_port(Some("9090")).unwrap(), 9090);
    }

    #[test]
    fn non_numeric_port_is_an_error() {
        assert_matches!(parse_port(Some("not-a-port")), Err(ConfigError::InvalidPort(v)) if v == "not-a-port");
    }

    #[test]
    fn out_of_range_port_is_an_error() {
        assert_matches!(parse_port(Some("70000")), Err(ConfigError::InvalidPort(_)));
    }
}
