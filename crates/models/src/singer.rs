use std::fmt;
use std::str::FromStr;

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson};
use mongodb::Collection;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Stored shape of a singer in the `singers` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SingerDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub songs: Vec<String>,
}

/// Client-facing view: the store key is replaced by a hex `id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Singer {
    pub id: String,
    pub name: String,
    pub songs: Vec<String>,
}

impl From<SingerDocument> for Singer {
    fn from(d: SingerDocument) -> Self {
        Self {
            id: d.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: d.name,
            songs: d.songs,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSinger {
    pub name: String,
    pub songs: Vec<String>,
}

impl NewSinger {
    pub fn new(name: impl Into<String>, songs: Vec<String>) -> Self {
        Self { name: name.into(), songs }
    }

    pub fn into_document(self) -> SingerDocument {
        SingerDocument { id: None, name: self.name, songs: self.songs }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SingerId(ObjectId);

impl SingerId {
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl FromStr for SingerId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| ModelError::InvalidId(format!(
                "'{s}' is not a valid singer id, it must be a 24-character hex string"
            )))
    }
}

impl fmt::Display for SingerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

/// Result of a single-document update, as reported by the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

impl From<mongodb::results::UpdateResult> for UpdateOutcome {
    fn from(r: mongodb::results::UpdateResult) -> Self {
        Self { matched: r.matched_count, modified: r.modified_count }
    }
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    Ok(())
}

fn by_id(id: &SingerId) -> mongodb::bson::Document {
    doc! { "_id": id.object_id() }
}

pub async fn create(coll: &Collection<SingerDocument>, new: NewSinger) -> Result<SingerId, ModelError> {
    validate_name(&new.name)?;
    let res = coll.insert_one(new.into_document()).await?;
    match res.inserted_id {
        Bson::ObjectId(oid) => Ok(SingerId(oid)),
        other => Err(ModelError::Db(format!("unexpected inserted id {other}"))),
    }
}

pub async fn create_many(coll: &Collection<SingerDocument>, singers: Vec<NewSinger>) -> Result<usize, ModelError> {
    if singers.is_empty() {
        return Ok(0);
    }
    for s in &singers {
        validate_name(&s.name)?;
    }
    let docs: Vec<SingerDocument> = singers.into_iter().map(NewSinger::into_document).collect();
    let res = coll.insert_many(docs).await?;
    Ok(res.inserted_ids.len())
}

pub async fn count(coll: &Collection<SingerDocument>) -> Result<u64, ModelError> {
    Ok(coll.count_documents(doc! {}).await?)
}

pub async fn find_all(coll: &Collection<SingerDocument>) -> Result<Vec<SingerDocument>, ModelError> {
    let cursor = coll.find(doc! {}).await?;
    Ok(cursor.try_collect().await?)
}

pub async fn find_by_id(coll: &Collection<SingerDocument>, id: &SingerId) -> Result<Option<SingerDocument>, ModelError> {
    Ok(coll.find_one(by_id(id)).await?)
}

pub async fn set_name(coll: &Collection<SingerDocument>, id: &SingerId, name: &str) -> Result<UpdateOutcome, ModelError> {
    validate_name(name)?;
    let res = coll.update_one(by_id(id), doc! { "$set": { "name": name } }).await?;
    Ok(res.into())
}

/// `$addToSet` with `$each`: appends only titles not already present.
pub async fn add_songs(coll: &Collection<SingerDocument>, id: &SingerId, songs: &[String]) -> Result<UpdateOutcome, ModelError> {
    let res = coll
        .update_one(by_id(id), doc! { "$addToSet": { "songs": { "$each": songs.to_vec() } } })
        .await?;
    Ok(res.into())
}

pub async fn pull_song(coll: &Collection<SingerDocument>, id: &SingerId, song: &str) -> Result<UpdateOutcome, ModelError> {
    let res = coll.update_one(by_id(id), doc! { "$pull": { "songs": song } }).await?;
    Ok(res.into())
}

pub async fn delete(coll: &Collection<SingerDocument>, id: &SingerId) -> Result<bool, ModelError> {
    let res = coll.delete_one(by_id(id)).await?;
    Ok(res.deleted_count > 0)
}
