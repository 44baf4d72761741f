use crate::FileType;

/// A song, as the search tree cares about it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Song {
    /// The song title
    pub title: String,
    /// The song artist
    pub artist: Option<String>,
    /// The album name
    pub album: Option<String>,
    /// The album artist, if different from the song artist
    pub album_artist: Option<String>,
    /// The composer
    pub composer: Option<String>,
    /// The genre
    pub genre: Option<String>,
    /// The release year; may be zero or negative when the tag is bogus
    pub year: Option<i32>,
    /// The track number
    pub track: Option<u32>,
    /// The disc number
    pub disc_number: Option<u32>,
    /// The duration in seconds
    pub duration: Option<u32>,
    /// The type of the underlying file
    pub file_type: FileType,
}
impl Song {
    /// Creates a song with only a title set.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// The album artist if there is one, falling back to the song artist.
    pub fn effective_album_artist(&self) -> Option<&str> {
        non_empty(self.album_artist.as_deref()).or_else(|| non_empty(self.artist.as_deref()))
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
