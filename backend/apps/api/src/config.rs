//! Server Configuration
//!
//! Read once at startup from the environment (and `.env` when present).

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, bail};
use auth::AuthConfig;
use platform::crypto;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    /// Upper bound on pooled database connections
    pub database_max_connections: u32,
    /// Origins allowed to send credentialed requests
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let listen_addr = env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("LISTEN_ADDR must be a socket address")?;

        let database_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let frontend_origins = parse_origins(
            &env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string()),
        );

        let auth = auth_config_from_env()?;

        Ok(Self {
            database_url,
            listen_addr,
            database_max_connections,
            frontend_origins,
            auth,
        })
    }
}

fn auth_config_from_env() -> anyhow::Result<AuthConfig> {
    let mut config = match env::var("SESSION_SECRET") {
        Ok(secret_b64) => AuthConfig {
            session_secret: decode_secret(&secret_b64)?,
            ..AuthConfig::default()
        },
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("SESSION_SECRET not set, using a random secret for this process");
            AuthConfig::development()
        }
        Err(_) => bail!("SESSION_SECRET must be set in production"),
    };

    if let Ok(raw) = env::var("COOKIE_SECURE") {
        config.cookie_secure = parse_bool(&raw).context("COOKIE_SECURE must be true or false")?;
    }

    if let Some(pepper) = env::var("PASSWORD_PEPPER").ok().filter(|p| !p.is_empty()) {
        config.password_pepper = Some(pepper.into_bytes());
    }

    Ok(config)
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = crypto::from_base64(secret_b64).context("SESSION_SECRET must be base64")?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes, got {}", b.len()))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn test_decode_secret() {
        let encoded = crypto::to_base64(&[7u8; 32]);
        assert_eq!(decode_secret(&encoded).unwrap(), [7u8; 32]);
        // Surrounding whitespace from .env files is tolerated
        assert_eq!(decode_secret(&format!(" {encoded}\n")).unwrap(), [7u8; 32]);

        let short = crypto::to_base64(&[7u8; 16]);
        assert!(decode_secret(&short).is_err());
        assert!(decode_secret("***").is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
