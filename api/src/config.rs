//! API configuration loaded from the environment.

use one_core::services::token::TokenServiceConfig;

/// Deployment environment. Drives cookie attributes and CORS strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse the `ENVIRONMENT` variable, defaulting to development
    pub fn from_env() -> Self {
        match std::env::var("ENVIRONMENT").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Top-level API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// JWT signing secret
    pub jwt_secret: String,
    /// Credential expiry window in hours
    pub token_expiry_hours: i64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// `JWT_SECRET` is required in production; development falls back to
    /// the built-in insecure default.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let environment = Environment::from_env();

        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "9000".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("SERVER_PORT must be a valid port number"))?;

        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if environment.is_production() => {
                anyhow::bail!("JWT_SECRET must be set in production")
            }
            Err(_) => TokenServiceConfig::default().jwt_secret,
        };

        let token_expiry_hours = std::env::var("TOKEN_EXPIRY_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        Ok(Self {
            host,
            port,
            environment,
            jwt_secret,
            token_expiry_hours,
        })
    }

    /// Bind address string
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Derive the token service configuration
    pub fn token_service_config(&self) -> TokenServiceConfig {
        TokenServiceConfig {
            jwt_secret: self.jwt_secret.clone(),
            access_token_expiry_hours: self.token_expiry_hours,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Process environment is global; tests touching it must not interleave
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn development_is_the_default_environment() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("ENVIRONMENT");
        assert_eq!(Environment::from_env(), Environment::Development);
        assert!(!Environment::from_env().is_production());
    }

    #[test]
    fn expiry_window_comes_from_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("ENVIRONMENT");
        std::env::set_var("TOKEN_EXPIRY_HOURS", "8760");
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.token_expiry_hours, 8760);
        std::env::remove_var("TOKEN_EXPIRY_HOURS");
    }
}
