//! Environment-driven configuration.
//!
//! Every knob has a default (port 9000, store at `demo_todo.db`, collection
//! `todos`) so the server starts with no environment at all.

use std::env;

use anyhow::{Context, Result};

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port the listener binds.
    pub port: u16,
    /// Filesystem path of the record store.
    pub store_path: String,
    /// Name of the todo collection inside the store.
    pub collection: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT").unwrap_or_else(|_| "9000".to_string());
        let port = port
            .parse()
            .with_context(|| format!("invalid PORT value `{port}`"))?;
        Ok(Self {
            port,
            store_path: env::var("STORE_PATH").unwrap_or_else(|_| "demo_todo.db".to_string()),
            collection: env::var("STORE_COLLECTION").unwrap_or_else(|_| "todos".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test covers every PORT case so the env mutations stay sequential.
    #[test]
    fn port_parsing() {
        env::remove_var("PORT");
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.collection, "todos");

        env::set_var("PORT", "8080");
        assert_eq!(Config::from_env().unwrap().port, 8080);

        env::set_var("PORT", "not-a-port");
        assert!(Config::from_env().is_err());

        env::remove_var("PORT");
    }
}
