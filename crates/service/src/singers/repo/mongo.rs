use async_trait::async_trait;
use models::singer::{self, NewSinger, SingerDocument, SingerId, UpdateOutcome};
use mongodb::Collection;

use crate::errors::ServiceError;
use crate::singers::repository::SingerRepository;

/// MongoDB-backed repository implementation.
pub struct MongoSingerRepository {
    pub collection: Collection<SingerDocument>,
}

impl MongoSingerRepository {
    pub fn new(store: &models::db::Store) -> Self {
        Self { collection: store.singers() }
    }
}

#[async_trait]
impl SingerRepository for MongoSingerRepository {
    async fn insert(&self, new: NewSinger) -> Result<SingerId, ServiceError> {
        Ok(singer::create(&self.collection, new).await?)
    }

    async fn insert_many(&self, singers: Vec<NewSinger>) -> Result<usize, ServiceError> {
        Ok(singer::create_many(&self.collection, singers).await?)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(singer::count(&self.collection).await?)
    }

    async fn list(&self) -> Result<Vec<SingerDocument>, ServiceError> {
        Ok(singer::find_all(&self.collection).await?)
    }

    async fn get(&self, id: &SingerId) -> Result<Option<SingerDocument>, ServiceError> {
        Ok(singer::find_by_id(&self.collection, id).await?)
    }

    async fn set_name(&self, id: &SingerId, name: &str) -> Result<UpdateOutcome, ServiceError> {
        Ok(singer::set_name(&self.collection, id, name).await?)
    }

    async fn add_songs(&self, id: &SingerId, songs: &[String]) -> Result<UpdateOutcome, ServiceError> {
        Ok(singer::add_songs(&self.collection, id, songs).await?)
    }

    async fn pull_song(&self, id: &SingerId, song: &str) -> Result<UpdateOutcome, ServiceError> {
        Ok(singer::pull_song(&self.collection, id, song).await?)
    }

    async fn delete(&self, id: &SingerId) -> Result<bool, ServiceError> {
        Ok(singer::delete(&self.collection, id).await?)
    }
}
