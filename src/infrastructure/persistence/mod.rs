//! Persistence implementations

pub mod memory;
#[cfg(feature = "postgres")]
pub mod database;
#[cfg(feature = "postgres")]
pub mod call_record_repository;

pub use memory::InMemoryCallRecordStore;
#[cfg(feature = "postgres")]
pub use database::{create_pool, run_migrations, DatabaseConfig};
#[cfg(feature = "postgres")]
pub use call_record_repository::PgCallRecordStore;

use std::sync::Arc;
use tracing::info;

use crate::config::DatabaseSettings;
use crate::domain::call_record::CallRecordStore;

/// Open the PostgreSQL store and apply pending migrations
#[cfg(all(feature = "postgres", not(feature = "memory")))]
pub async fn open_store(settings: &DatabaseSettings) -> anyhow::Result<Arc<dyn CallRecordStore>> {
    info!("Initializing database connection...");

    let pool = create_pool(&DatabaseConfig::from(settings)).await?;
    run_migrations(&pool).await?;

    info!("Call record store initialized (postgres)");
    Ok(Arc::new(PgCallRecordStore::new(pool)))
}

/// In-memory store, selected by the `memory` feature or when built without `postgres`
#[cfg(any(feature = "memory", not(feature = "postgres")))]
pub async fn open_store(_settings: &DatabaseSettings) -> anyhow::Result<Arc<dyn CallRecordStore>> {
    info!("Call record store initialized (in-memory, records are lost on restart)");
    Ok(Arc::new(InMemoryCallRecordStore::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[cfg(any(feature = "memory", not(feature = "postgres")))]
    #[tokio::test]
    async fn test_memory_feature_opens_store_without_database() {
        use crate::domain::call_record::CallRecord;

        // Unreachable URL: the in-memory store never connects
        let settings = DatabaseSettings {
            url: "postgres://nobody@127.0.0.1:9/none".to_string(),
            ..Config::default().database
        };
        let store = open_store(&settings).await.unwrap();

        let record = CallRecord::new(
            "+15550001111".to_string(),
            "CA1".to_string(),
            Some("yes".to_string()),
            "completed".to_string(),
            None,
        )
        .unwrap();
        store.insert(&record).await.unwrap();
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[cfg(all(feature = "postgres", not(feature = "memory")))]
    #[tokio::test]
    async fn test_postgres_store_reports_unreachable_database() {
        let settings = DatabaseSettings {
            url: "postgres://nobody@127.0.0.1:9/none".to_string(),
            connect_timeout_secs: 1,
            ..Config::default().database
        };
        assert!(open_store(&settings).await.is_err());
    }
}
