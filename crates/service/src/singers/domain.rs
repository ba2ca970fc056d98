use serde::{Deserialize, Serialize};

/// Add-singer input; `name` is optional here so a missing field reaches
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddSingerInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub songs: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameInput {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddSongsInput {
    #[serde(default)]
    pub songs: Option<Vec<String>>,
}
