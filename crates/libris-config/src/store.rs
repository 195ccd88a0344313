//! Book store backend selection.
//!
//! `LIBRIS_STORE` picks the backend: `postgres` (default) connects through
//! `DATABASE_URL`, `memory` keeps the catalogue in process and loses it on
//! restart.

use std::env;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(StoreBackend::Postgres),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(format!("Unknown store backend: {}", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        let backend = match env::var("LIBRIS_STORE") {
            Ok(value) => value.parse().unwrap_or_else(|err| {
                tracing::warn!("{}, falling back to postgres", err);
                StoreBackend::Postgres
            }),
            Err(_) => StoreBackend::Postgres,
        };

        Self {
            backend,
            database_url: env::var("DATABASE_URL").ok(),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        }
    }
}
