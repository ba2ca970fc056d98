use std::sync::Arc;

use models::singer::{NewSinger, Singer, SingerId};
use tracing::{info, instrument};

use super::domain::{AddSingerInput, AddSongsInput, RenameInput};
use super::repository::SingerRepository;
use crate::errors::ServiceError;

const SINGER: &str = "Singer";

/// Singer business service, independent of the web framework.
///
/// Each method performs at most one repository call after validation and
/// turns "nothing matched" outcomes into [`ServiceError::NotFound`].
#[derive(Clone)]
pub struct SingerService {
    repo: Arc<dyn SingerRepository>,
}

fn parse_id(raw: &str) -> Result<SingerId, ServiceError> {
    Ok(raw.parse::<SingerId>()?)
}

fn required_name(name: Option<String>) -> Result<String, ServiceError> {
    match name {
        Some(n) if !n.trim().is_empty() => Ok(n),
        _ => Err(ServiceError::Validation("Name is required".into())),
    }
}

impl SingerService {
    pub fn new(repo: Arc<dyn SingerRepository>) -> Self { Self { repo } }

    /// Create a singer; `songs` defaults to an empty list.
    ///
    /// # Examples
    /// ```
    /// use service::singers::{SingerService, repository::mock::InMemorySingerRepository, domain::AddSingerInput};
    /// use std::sync::Arc;
    /// let svc = SingerService::new(Arc::new(InMemorySingerRepository::default()));
    /// let input = AddSingerInput { name: Some("John Doe".into()), songs: Some(vec!["Song 1".into()]) };
    /// let id = tokio_test::block_on(svc.add(input)).unwrap();
    /// let singer = tokio_test::block_on(svc.get(&id.to_string())).unwrap();
    /// assert_eq!(singer.name, "John Doe");
    /// ```
    #[instrument(skip(self, input))]
    pub async fn add(&self, input: AddSingerInput) -> Result<SingerId, ServiceError> {
        let name = required_name(input.name)?;
        let songs = input.songs.unwrap_or_default();
        let id = self.repo.insert(NewSinger::new(name, songs)).await?;
        info!(singer_id = %id, "singer_added");
        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<Singer>, ServiceError> {
        let docs = self.repo.list().await?;
        Ok(docs.into_iter().map(Singer::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Singer, ServiceError> {
        let id = parse_id(id)?;
        self.repo
            .get(&id)
            .await?
            .map(Singer::from)
            .ok_or_else(|| ServiceError::not_found(SINGER))
    }

    pub async fn songs(&self, id: &str) -> Result<Vec<String>, ServiceError> {
        Ok(self.get(id).await?.songs)
    }

    #[instrument(skip(self, input), fields(singer_id = %id))]
    pub async fn rename(&self, id: &str, input: RenameInput) -> Result<(), ServiceError> {
        let name = required_name(input.name)?;
        let id = parse_id(id)?;
        let outcome = self.repo.set_name(&id, &name).await?;
        if outcome.matched == 0 {
            return Err(ServiceError::not_found(SINGER));
        }
        info!("singer_renamed");
        Ok(())
    }

    /// Append songs with set-union semantics. An empty list is rejected rather
    /// than treated as a no-op.
    #[instrument(skip(self, input), fields(singer_id = %id))]
    pub async fn add_songs(&self, id: &str, input: AddSongsInput) -> Result<(), ServiceError> {
        let songs = match input.songs {
            Some(s) if !s.is_empty() => s,
            _ => return Err(ServiceError::Validation("Songs are required".into())),
        };
        let id = parse_id(id)?;
        let outcome = self.repo.add_songs(&id, &songs).await?;
        if outcome.matched == 0 {
            return Err(ServiceError::not_found(SINGER));
        }
        info!(added = outcome.modified > 0, "singer_songs_updated");
        Ok(())
    }

    #[instrument(skip(self), fields(singer_id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let id = parse_id(id)?;
        if !self.repo.delete(&id).await? {
            return Err(ServiceError::not_found(SINGER));
        }
        info!("singer_deleted");
        Ok(())
    }

    #[instrument(skip(self), fields(singer_id = %id))]
    pub async fn delete_song(&self, id: &str, song: &str) -> Result<(), ServiceError> {
        let id = parse_id(id)?;
        let outcome = self.repo.pull_song(&id, song).await?;
        if outcome.matched == 0 {
            return Err(ServiceError::not_found(SINGER));
        }
        if outcome.modified == 0 {
            return Err(ServiceError::NotFound("Song not found in singer's list".into()));
        }
        info!("singer_song_deleted");
        Ok(())
    }
}
