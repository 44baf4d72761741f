//! The grouping modes a tree level can use, and how each one turns a song into
//! a container's display text, sort text and icon.

use flock_state::Song;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::text;

/// The field(s) used to bucket results at one level of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// Stops grouping; later levels are not consulted.
    #[default]
    None,
    /// Groups by song artist.
    Artist,
    /// Groups by album.
    Album,
    /// Groups by year and album together, e.g. "2003 - Hail to the Thief".
    YearAlbum,
    /// Groups by year.
    Year,
    /// Groups by composer.
    Composer,
    /// Groups by genre.
    Genre,
    /// Groups by album artist, falling back to the song artist.
    AlbumArtist,
    /// Groups by the type of the underlying file.
    FileType,
}

impl GroupBy {
    /// Every grouping mode, in their persisted numeric order.
    pub const ALL: [GroupBy; 9] = [
        GroupBy::None,
        GroupBy::Artist,
        GroupBy::Album,
        GroupBy::YearAlbum,
        GroupBy::Year,
        GroupBy::Composer,
        GroupBy::Genre,
        GroupBy::AlbumArtist,
        GroupBy::FileType,
    ];

    /// Returns the name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::None => "none",
            GroupBy::Artist => "artist",
            GroupBy::Album => "album",
            GroupBy::YearAlbum => "year_album",
            GroupBy::Year => "year",
            GroupBy::Composer => "composer",
            GroupBy::Genre => "genre",
            GroupBy::AlbumArtist => "album_artist",
            GroupBy::FileType => "file_type",
        }
    }

    /// Computes the display text, sort text and icon of the container `song`
    /// belongs to at a level grouped by `self`.
    ///
    /// Returns `None` for [`GroupBy::None`], which ends the walk down the levels.
    pub fn level_text(&self, song: &Song) -> Option<LevelText> {
        let (display, sort, icon) = match self {
            GroupBy::None => return None,
            GroupBy::Artist => (
                text::text_or_unknown(song.artist.as_deref()).to_string(),
                text::sort_text_for_artist(song.artist.as_deref().unwrap_or_default()),
                IconKind::Artist,
            ),
            GroupBy::YearAlbum => {
                let year = text::normalize_year(song.year);
                (
                    text::pretty_year_album(year, song.album.as_deref()),
                    text::sort_text_for_year(year) + song.album.as_deref().unwrap_or_default(),
                    IconKind::Album,
                )
            }
            GroupBy::Year => {
                let year = text::normalize_year(song.year);
                (
                    year.to_string(),
                    text::sort_text_for_year(year) + " ",
                    IconKind::None,
                )
            }
            GroupBy::Composer | GroupBy::Genre | GroupBy::Album | GroupBy::AlbumArtist => {
                let display =
                    text::text_or_unknown(first_non_empty(song, self.fallthrough())).to_string();
                let sort = text::sort_text_for_artist(&display);
                (display, sort, IconKind::Album)
            }
            GroupBy::FileType => {
                let label = song.file_type.as_str();
                (label.to_string(), label.to_string(), IconKind::None)
            }
        };

        Some(LevelText {
            display: display.into(),
            sort: sort.into(),
            icon,
        })
    }

    /// The fields tried, in order, for the album-like modes.
    ///
    /// Each mode falls through to the modes after it, so a composer level
    /// still groups sensibly for songs with no composer tag.
    pub fn fallthrough(&self) -> &'static [Field] {
        const CHAIN: [Field; 4] = [
            Field::Composer,
            Field::Genre,
            Field::Album,
            Field::EffectiveAlbumArtist,
        ];
        match self {
            GroupBy::Composer => &CHAIN[0..],
            GroupBy::Genre => &CHAIN[1..],
            GroupBy::Album => &CHAIN[2..],
            GroupBy::AlbumArtist => &CHAIN[3..],
            _ => &[],
        }
    }
}

impl std::fmt::Display for GroupBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GroupBy {
    type Err = GroupByError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupBy::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| GroupByError::Unknown(s.to_string()))
    }
}

impl TryFrom<i32> for GroupBy {
    type Error = GroupByError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|i| GroupBy::ALL.get(i).copied())
            .ok_or_else(|| GroupByError::Unknown(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A grouping mode outside the recognized set.
pub enum GroupByError {
    /// The name or number did not match any grouping mode.
    Unknown(String),
}
impl std::fmt::Display for GroupByError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupByError::Unknown(value) => write!(f, "Unknown grouping mode: {value}"),
        }
    }
}
impl std::error::Error for GroupByError {}

/// A text field of a song that an album-like level can group on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The composer tag.
    Composer,
    /// The genre tag.
    Genre,
    /// The album name.
    Album,
    /// The album artist, falling back to the song artist.
    EffectiveAlbumArtist,
}
impl Field {
    /// Reads the field from `song`.
    pub fn get<'a>(&self, song: &'a Song) -> Option<&'a str> {
        match self {
            Field::Composer => song.composer.as_deref(),
            Field::Genre => song.genre.as_deref(),
            Field::Album => song.album.as_deref(),
            Field::EffectiveAlbumArtist => song.effective_album_artist(),
        }
    }
}

/// Returns the first of `fields` that is set and non-empty on `song`.
pub fn first_non_empty<'a>(song: &'a Song, fields: &[Field]) -> Option<&'a str> {
    fields
        .iter()
        .filter_map(|field| field.get(song))
        .find(|value| !value.is_empty())
}

/// What kind of icon a level's containers want, before the cover preference
/// is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// No icon.
    None,
    /// The generic artist icon.
    Artist,
    /// An album icon or cover.
    Album,
}

/// The icon a container is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerIcon {
    /// No icon.
    None,
    /// The generic artist icon.
    Artist,
    /// The generic album icon.
    Album,
    /// A "no cover" placeholder, sized like a real cover so one can be
    /// swapped in once it loads.
    NoCover,
}
impl ContainerIcon {
    /// Resolves `kind` against the pretty-covers preference.
    pub fn new(kind: IconKind, pretty_covers: bool) -> Self {
        match kind {
            IconKind::None => ContainerIcon::None,
            IconKind::Artist => ContainerIcon::Artist,
            IconKind::Album if pretty_covers => ContainerIcon::NoCover,
            IconKind::Album => ContainerIcon::Album,
        }
    }
}

/// The computed text of one grouping level for one song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelText {
    /// What the container shows; also the level's part of the container key.
    pub display: SmolStr,
    /// What the view orders containers by.
    pub sort: SmolStr,
    /// Which icon the container wants.
    pub icon: IconKind,
}
