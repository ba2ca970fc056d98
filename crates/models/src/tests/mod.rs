
/// Collection-level CRUD tests for singer documents
pub mod crud_tests;

use configs::DatabaseConfig;
use crate::db::{connect_with_config, Store};

/// Connect to the store named by `MONGO_URI` using a throwaway collection.
/// Returns `None` when no database is configured or `SKIP_DB_TESTS` is set.
pub(crate) async fn test_store() -> Option<Store> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let url = match std::env::var("MONGO_URI") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("skip: MONGO_URI not set");
            return None;
        }
    };
    let cfg = DatabaseConfig {
        url,
        collection: format!("singers_test_{}", uuid::Uuid::new_v4().simple()),
        connect_timeout_secs: 5,
        server_selection_timeout_secs: 5,
        ..DatabaseConfig::default()
    };
    match connect_with_config(&cfg).await {
        Ok(store) => Some(store),
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            None
        }
    }
}
