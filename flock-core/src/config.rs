use flock_state::ProviderId;
use serde::{Deserialize, Serialize};

use crate::{GroupBy, key::MAX_LEVELS};

/// How the search tree groups results. Passed to [`crate::SearchModel::new`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// The grouping mode of each level under a provider's divider.
    pub group_by: [GroupBy; MAX_LEVELS],
    /// Whether album containers get a cover-sized placeholder instead of the
    /// generic album icon.
    pub pretty_covers: bool,
    /// Provider IDs in the order the user wants their sections shown.
    pub provider_order: Vec<ProviderId>,
}
impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            group_by: [GroupBy::Artist, GroupBy::Album, GroupBy::None],
            pretty_covers: true,
            provider_order: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        search: SearchConfig,
    }

    fn parse(s: &str) -> Result<SearchConfig, serde_json::Error> {
        serde_json::from_str::<Wrapper>(s).map(|w| w.search)
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = parse(r#"{"search": {"pretty_covers": false}}"#).unwrap();
        assert_eq!(
            config,
            SearchConfig {
                pretty_covers: false,
                ..SearchConfig::default()
            }
        );
    }

    #[test]
    fn test_group_by_and_order() {
        let config = parse(
            r#"{"search": {
                "group_by": ["genre", "year_album", "none"],
                "provider_order": ["spotify", "library"]
            }}"#,
        )
        .unwrap();
        assert_eq!(
            config.group_by,
            [GroupBy::Genre, GroupBy::YearAlbum, GroupBy::None]
        );
        assert_eq!(
            config.provider_order,
            vec![ProviderId::new("spotify"), ProviderId::new("library")]
        );
    }

    #[test]
    fn test_unknown_group_by_is_rejected() {
        assert!(parse(r#"{"search": {"group_by": ["decade", "none", "none"]}}"#).is_err());
        // A fourth level can't be expressed.
        assert!(
            parse(r#"{"search": {"group_by": ["artist", "album", "year", "genre"]}}"#).is_err()
        );
    }
}
