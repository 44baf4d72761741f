use flock_state::FileType;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InputProvider {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InputSong {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub album_artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub composer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub track: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub disc_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub file_type: FileType,
    /// Inserted directly under the provider's divider instead of being grouped.
    #[serde(skip_serializing_if = "is_false", default)]
    pub ungrouped: bool,
}

fn is_false(b: &bool) -> bool {
    !b
}

/// One delivery from a provider.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InputBatch {
    pub provider: InputProvider,
    pub songs: Vec<InputSong>,
}

pub type Input = Vec<InputBatch>;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct OutputTrack {
    pub provider: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

pub type Output = Vec<OutputTrack>;
