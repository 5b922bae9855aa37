//! Server Configuration
//!
//! Read from the environment (after `.env` is loaded).
//!
//! | variable                 | default                                   |
//! |--------------------------|-------------------------------------------|
//! | `DATABASE_URL`           | in-memory store (debug builds only)       |
//! | `PASSWORD_SALT`          | required with a database                  |
//! | `TOKEN_SALT`             | required with a database                  |
//! | `ACCESS_TOKEN_TTL_SECS`  | 900                                       |
//! | `REFRESH_TOKEN_TTL_SECS` | 2592000                                   |
//! | `LISTEN_ADDR`            | `0.0.0.0:8080`                            |
//! | `FRONTEND_ORIGINS`       | `http://localhost:3000,http://127.0.0.1:3000` |

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

pub struct ServerConfig {
    /// `None` selects the in-memory repository
    pub database_url: Option<String>,
    pub listen_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty_var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = non_empty_var("DATABASE_URL");
        if database_url.is_none() && !cfg!(debug_assertions) {
            bail!("DATABASE_URL must be set in environment");
        }

        let listen_addr = non_empty_var("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("LISTEN_ADDR is not a socket address")?;

        let frontend_origins = non_empty_var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect();

        let auth = match (&database_url, non_empty_var("PASSWORD_SALT"), non_empty_var("TOKEN_SALT")) {
            (_, Some(password_salt), Some(token_salt)) => AuthConfig::new(password_salt, token_salt),
            // Nothing persists without a database, throwaway salts are enough
            (None, _, _) => AuthConfig::development(),
            (Some(_), _, _) => bail!("PASSWORD_SALT and TOKEN_SALT must be set"),
        };
        let auth = match ttl_var("ACCESS_TOKEN_TTL_SECS", non_empty_var("ACCESS_TOKEN_TTL_SECS"))? {
            Some(ttl) => auth.with_access_token_ttl(ttl),
            None => auth,
        };
        let auth = match ttl_var("REFRESH_TOKEN_TTL_SECS", non_empty_var("REFRESH_TOKEN_TTL_SECS"))? {
            Some(ttl) => auth.with_refresh_token_ttl(ttl),
            None => auth,
        };

        Ok(Self {
            database_url,
            listen_addr,
            frontend_origins,
            auth,
        })
    }
}

fn ttl_var(name: &str, value: Option<String>) -> anyhow::Result<Option<Duration>> {
    value
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .with_context(|| format!("{name} must be a number of seconds"))
        })
        .transpose()
}
