use std::sync::Arc;

use libris_config::{CorsConfig, JwtConfig, StoreBackend, StoreConfig};
use libris_db::{init_db_pool, run_migrations};

use crate::modules::books::store::{BookStore, MemoryBookStore, PgBookStore};

#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookStore>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(books: Arc<dyn BookStore>, jwt_config: JwtConfig) -> Self {
        Self {
            books,
            jwt_config,
            cors_config: CorsConfig::default(),
        }
    }
}

/// Builds the application state from the environment, connecting to and
/// migrating PostgreSQL when that backend is selected.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let store_config = StoreConfig::from_env();

    let books: Arc<dyn BookStore> = match store_config.backend {
        StoreBackend::Postgres => {
            let pool = init_db_pool(&store_config).await?;
            run_migrations(&pool).await?;
            Arc::new(PgBookStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory book store, data is lost on restart");
            Arc::new(MemoryBookStore::new())
        }
    };

    Ok(AppState {
        books,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    })
}
