use anyhow::Result;

use super::test_store;
use crate::singer::{self, NewSinger, Singer};

fn songs(titles: &[&str]) -> Vec<String> {
    titles.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_singer_crud() -> Result<()> {
    let Some(store) = test_store().await else { return Ok(()) };
    let coll = store.singers();

    let id = singer::create(&coll, NewSinger::new("John Doe", songs(&["Song 1", "Song 2"]))).await?;
    let found = singer::find_by_id(&coll, &id).await?.expect("inserted singer");
    let view = Singer::from(found);
    assert_eq!(view.id, id.to_string());
    assert_eq!(view.name, "John Doe");
    assert_eq!(view.songs, songs(&["Song 1", "Song 2"]));

    let outcome = singer::set_name(&coll, &id, "Jane Doe").await?;
    assert_eq!(outcome.matched, 1);
    let found = singer::find_by_id(&coll, &id).await?.expect("renamed singer");
    assert_eq!(found.name, "Jane Doe");
    assert_eq!(found.songs, songs(&["Song 1", "Song 2"]));

    assert!(singer::delete(&coll, &id).await?);
    assert!(singer::find_by_id(&coll, &id).await?.is_none());
    assert!(!singer::delete(&coll, &id).await?);

    coll.drop().await?;
    Ok(())
}

#[tokio::test]
async fn test_add_to_set_and_pull() -> Result<()> {
    let Some(store) = test_store().await else { return Ok(()) };
    let coll = store.singers();

    let id = singer::create(&coll, NewSinger::new("Freddie", songs(&["A"]))).await?;
    let outcome = singer::add_songs(&coll, &id, &songs(&["A", "B", "B"])).await?;
    assert_eq!(outcome.matched, 1);
    assert_eq!(outcome.modified, 1);
    let found = singer::find_by_id(&coll, &id).await?.expect("singer");
    assert_eq!(found.songs.iter().filter(|s| *s == "B").count(), 1);
    assert_eq!(found.songs.len(), 2);

    // all duplicates: matched but unmodified
    let outcome = singer::add_songs(&coll, &id, &songs(&["A"])).await?;
    assert_eq!((outcome.matched, outcome.modified), (1, 0));

    let outcome = singer::pull_song(&coll, &id, "A").await?;
    assert_eq!((outcome.matched, outcome.modified), (1, 1));
    let outcome = singer::pull_song(&coll, &id, "missing").await?;
    assert_eq!((outcome.matched, outcome.modified), (1, 0));

    coll.drop().await?;
    Ok(())
}

#[tokio::test]
async fn test_count_and_create_many() -> Result<()> {
    let Some(store) = test_store().await else { return Ok(()) };
    let coll = store.singers();

    assert_eq!(singer::count(&coll).await?, 0);
    let inserted = singer::create_many(
        &coll,
        vec![NewSinger::new("A", vec![]), NewSinger::new("B", songs(&["x"]))],
    )
    .await?;
    assert_eq!(inserted, 2);
    assert_eq!(singer::count(&coll).await?, 2);
    assert_eq!(singer::find_all(&coll).await?.len(), 2);

    coll.drop().await?;
    Ok(())
}
