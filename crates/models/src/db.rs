use std::time::Duration;

use configs::DatabaseConfig;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::info;

use crate::singer::SingerDocument;

/// Process-wide handle to the document store: one pooled client plus the
/// resolved database and singer collection names.
#[derive(Clone, Debug)]
pub struct Store {
    client: Client,
    database: Database,
    collection: String,
}

/// Build the client and run a `ping`; fails fast when the store is unreachable.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<Store> {
    let mut options = ClientOptions::parse(cfg.url.as_str()).await?;
    options.app_name = Some("singers-api".into());
    options.connect_timeout = Some(Duration::from_secs(cfg.connect_timeout_secs));
    options.server_selection_timeout = Some(Duration::from_secs(cfg.server_selection_timeout_secs));

    let client = Client::with_options(options)?;
    // URI 中带库名时优先使用，否则回退到配置中的 name
    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(&cfg.name));

    let store = Store { client, database, collection: cfg.collection.clone() };
    store.ping().await?;
    info!(database = %store.database.name(), collection = %store.collection, "connected to document store");
    Ok(store)
}

impl Store {
    pub async fn ping(&self) -> anyhow::Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn singers(&self) -> Collection<SingerDocument> {
        self.database.collection::<SingerDocument>(&self.collection)
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    /// Close the client once in-flight operations have finished.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}
