use async_trait::async_trait;
use models::singer::{NewSinger, SingerDocument, SingerId, UpdateOutcome};

use crate::errors::ServiceError;

/// Persistence operations for singer documents. Every update is a single
/// per-document call so concurrent writers rely on the store's atomicity.
#[async_trait]
pub trait SingerRepository: Send + Sync {
    async fn insert(&self, singer: NewSinger) -> Result<SingerId, ServiceError>;
    async fn insert_many(&self, singers: Vec<NewSinger>) -> Result<usize, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
    async fn list(&self) -> Result<Vec<SingerDocument>, ServiceError>;
    async fn get(&self, id: &SingerId) -> Result<Option<SingerDocument>, ServiceError>;
    async fn set_name(&self, id: &SingerId, name: &str) -> Result<UpdateOutcome, ServiceError>;
    async fn add_songs(&self, id: &SingerId, songs: &[String]) -> Result<UpdateOutcome, ServiceError>;
    async fn pull_song(&self, id: &SingerId, song: &str) -> Result<UpdateOutcome, ServiceError>;
    async fn delete(&self, id: &SingerId) -> Result<bool, ServiceError>;
}

/// In-memory repository for tests, doc examples and running without a store
pub mod mock {
    use super::*;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemorySingerRepository {
        docs: RwLock<Vec<SingerDocument>>, // insertion order
    }

    impl InMemorySingerRepository {
        fn position(docs: &[SingerDocument], id: &SingerId) -> Option<usize> {
            docs.iter().position(|d| d.id == Some(id.object_id()))
        }
    }

    #[async_trait]
    impl SingerRepository for InMemorySingerRepository {
        async fn insert(&self, singer: NewSinger) -> Result<SingerId, ServiceError> {
            models::singer::validate_name(&singer.name)?;
            let id = SingerId::generate();
            let mut doc = singer.into_document();
            doc.id = Some(id.object_id());
            self.docs.write().await.push(doc);
            Ok(id)
        }

        async fn insert_many(&self, singers: Vec<NewSinger>) -> Result<usize, ServiceError> {
            for s in &singers {
                models::singer::validate_name(&s.name)?;
            }
            let n = singers.len();
            let mut docs = self.docs.write().await;
            for s in singers {
                let mut doc = s.into_document();
                doc.id = Some(SingerId::generate().object_id());
                docs.push(doc);
            }
            Ok(n)
        }

        async fn count(&self) -> Result<u64, ServiceError> {
            Ok(self.docs.read().await.len() as u64)
        }

        async fn list(&self) -> Result<Vec<SingerDocument>, ServiceError> {
            Ok(self.docs.read().await.clone())
        }

        async fn get(&self, id: &SingerId) -> Result<Option<SingerDocument>, ServiceError> {
            let docs = self.docs.read().await;
            Ok(Self::position(&docs, id).map(|i| docs[i].clone()))
        }

        async fn set_name(&self, id: &SingerId, name: &str) -> Result<UpdateOutcome, ServiceError> {
            models::singer::validate_name(name)?;
            let mut docs = self.docs.write().await;
            let Some(i) = Self::position(&docs, id) else { return Ok(UpdateOutcome::default()) };
            let modified = docs[i].name != name;
            docs[i].name = name.to_string();
            Ok(UpdateOutcome { matched: 1, modified: modified as u64 })
        }

        async fn add_songs(&self, id: &SingerId, songs: &[String]) -> Result<UpdateOutcome, ServiceError> {
            let mut docs = self.docs.write().await;
            let Some(i) = Self::position(&docs, id) else { return Ok(UpdateOutcome::default()) };
            let current = &mut docs[i].songs;
            let before = current.len();
            for song in songs {
                if !current.contains(song) {
                    current.push(song.clone());
                }
            }
            Ok(UpdateOutcome { matched: 1, modified: (current.len() != before) as u64 })
        }

        async fn pull_song(&self, id: &SingerId, song: &str) -> Result<UpdateOutcome, ServiceError> {
            let mut docs = self.docs.write().await;
            let Some(i) = Self::position(&docs, id) else { return Ok(UpdateOutcome::default()) };
            let current = &mut docs[i].songs;
            let before = current.len();
            current.retain(|s| s != song);
            Ok(UpdateOutcome { matched: 1, modified: (current.len() != before) as u64 })
        }

        async fn delete(&self, id: &SingerId) -> Result<bool, ServiceError> {
            let mut docs = self.docs.write().await;
            match Self::position(&docs, id) {
                Some(i) => {
                    docs.remove(i);
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

}
