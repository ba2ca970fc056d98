//! One-time bootstrap of the singer collection.

use models::singer::NewSinger;
use tracing::info;

use crate::errors::ServiceError;
use crate::singers::SingerRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The collection was empty and this many records were inserted.
    Seeded(usize),
    /// The collection already held this many records; nothing was written.
    AlreadyInitialized(u64),
}

fn record(name: &str, songs: &[&str]) -> NewSinger {
    NewSinger::new(name, songs.iter().map(|t| t.to_string()).collect())
}

/// Example records inserted into an empty collection.
pub fn default_singers() -> Vec<NewSinger> {
    vec![
        record("Freddie Mercury", &["Bohemian Rhapsody", "We Will Rock You", "Don't Stop Me Now"]),
        record("Michael Jackson", &["Thriller", "Billie Jean", "Beat It"]),
        record("Whitney Houston", &["I Will Always Love You", "I Wanna Dance with Somebody", "Greatest Love of All"]),
    ]
}

/// Insert `singers` only when the collection is empty.
pub async fn seed_if_empty(repo: &dyn SingerRepository, singers: Vec<NewSinger>) -> Result<SeedOutcome, ServiceError> {
    let existing = repo.count().await?;
    if existing > 0 {
        info!(existing, event = "seed_skipped", "database already initialized");
        return Ok(SeedOutcome::AlreadyInitialized(existing));
    }
    let inserted = repo.insert_many(singers).await?;
    info!(inserted, event = "seed_done", "database initialized with singers and songs");
    Ok(SeedOutcome::Seeded(inserted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::singers::repository::mock::InMemorySingerRepository;

    #[tokio::test]
    async fn seeds_empty_store_once() {
        let repo = InMemorySingerRepository::default();
        assert_eq!(seed_if_empty(&repo, default_singers()).await.unwrap(), SeedOutcome::Seeded(3));
        assert_eq!(seed_if_empty(&repo, default_singers()).await.unwrap(), SeedOutcome::AlreadyInitialized(3));
        assert_eq!(repo.count().await.unwrap(), 3);

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|d| d.name).collect();
        assert_eq!(names, ["Freddie Mercury", "Michael Jackson", "Whitney Houston"]);
    }

    #[tokio::test]
    async fn non_empty_store_is_left_alone() {
        let repo = InMemorySingerRepository::default();
        repo.insert(NewSinger::new("Existing", vec![])).await.unwrap();
        assert_eq!(seed_if_empty(&repo, default_singers()).await.unwrap(), SeedOutcome::AlreadyInitialized(1));
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
