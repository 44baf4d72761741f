//! Display and sort text rules shared by the grouping levels.
//!
//! Display text is what a container shows. Sort text is what the view orders
//! by, so that "The Beatles" sorts under B and year 999 sorts before 2001.

use icu_normalizer::DecomposingNormalizerBorrowed;
use icu_properties::{CodePointMapData, props::GeneralCategory};

/// Placeholder for empty or missing text fields.
pub const UNKNOWN: &str = "Unknown";

/// Sort text used for empty fields; the leading space puts them first.
const UNKNOWN_SORT_TEXT: &str = " unknown";

/// Leading articles that are moved to the end of an artist's sort text.
const ARTICLES: &[&str] = &["the", "a", "an", "el", "los", "las", "les"];

/// Returns `text`, or [`UNKNOWN`] if it is missing or empty.
pub fn text_or_unknown(text: Option<&str>) -> &str {
    match text {
        Some(text) if !text.is_empty() => text,
        _ => UNKNOWN,
    }
}

/// Lower-cases `text`, strips diacritics, removes anything that isn't
/// alphanumeric or a space, and trims. Text with nothing left sorts as
/// unknown.
pub fn sort_text(text: &str) -> String {
    let nfd = DecomposingNormalizerBorrowed::new_nfd();
    let general_category = CodePointMapData::<GeneralCategory>::new();

    let lowered = text.to_lowercase();
    let text: String = nfd
        .normalize(&lowered)
        .chars()
        .filter(|&c| general_category.get(c) != GeneralCategory::NonspacingMark)
        .filter(|&c| c.is_alphanumeric() || c == ' ')
        .collect();

    let text = text.trim();
    if text.is_empty() {
        UNKNOWN_SORT_TEXT.to_string()
    } else {
        text.to_string()
    }
}

/// Like [`sort_text`], but moves a leading article to the end, so that
/// "The Beatles" becomes "beatles, the".
pub fn sort_text_for_artist(artist: &str) -> String {
    let text = sort_text(artist);
    for article in ARTICLES {
        if let Some(rest) = text.strip_prefix(article)
            && let Some(rest) = rest.strip_prefix(' ')
            && !rest.trim().is_empty()
        {
            return format!("{rest}, {article}");
        }
    }
    text
}

/// Clamps a missing or negative year to zero.
pub fn normalize_year(year: Option<i32>) -> i32 {
    year.unwrap_or_default().max(0)
}

/// Zero-pads a year to four digits so that it sorts numerically as text.
pub fn sort_text_for_year(year: i32) -> String {
    format!("{:04}", year.max(0))
}

/// "2003 - Hail to the Thief", or just the album if the year is unknown.
pub fn pretty_year_album(year: i32, album: Option<&str>) -> String {
    let album = text_or_unknown(album);
    if year <= 0 {
        album.to_string()
    } else {
        format!("{year} - {album}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_or_unknown() {
        assert_eq!(text_or_unknown(Some("Muse")), "Muse");
        assert_eq!(text_or_unknown(Some("")), UNKNOWN);
        assert_eq!(text_or_unknown(None), UNKNOWN);
    }

    #[test]
    fn test_sort_text() {
        assert_eq!(sort_text("Sigur Rós"), "sigur ros");
        assert_eq!(sort_text("AC/DC"), "acdc");
        assert_eq!(sort_text("Beyoncé"), "beyonce");
        assert_eq!(sort_text(""), " unknown");
        assert_eq!(sort_text("!!!"), " unknown");
        assert_eq!(sort_text("()"), " unknown");
        assert_eq!(sort_text("  Muse! "), "muse");
    }

    #[test]
    fn test_sort_text_for_artist() {
        assert_eq!(sort_text_for_artist("The Beatles"), "beatles, the");
        assert_eq!(sort_text_for_artist("Los Lobos"), "lobos, los");
        assert_eq!(sort_text_for_artist("Radiohead"), "radiohead");
        // Only whole-word articles are moved.
        assert_eq!(sort_text_for_artist("Theory of a Deadman"), "theory of a deadman");
        assert_eq!(sort_text_for_artist("Alvvays"), "alvvays");
        // A band called "The" keeps its name.
        assert_eq!(sort_text_for_artist("The"), "the");
        assert_eq!(sort_text_for_artist("?!"), " unknown");
    }

    #[test]
    fn test_years() {
        assert_eq!(normalize_year(Some(-5)), 0);
        assert_eq!(normalize_year(None), 0);
        assert_eq!(normalize_year(Some(1997)), 1997);

        assert_eq!(sort_text_for_year(0), "0000");
        assert_eq!(sort_text_for_year(999), "0999");
        assert_eq!(sort_text_for_year(2003), "2003");
        assert_eq!(sort_text_for_year(-5), "0000");
    }

    #[test]
    fn test_pretty_year_album() {
        assert_eq!(
            pretty_year_album(2003, Some("Hail to the Thief")),
            "2003 - Hail to the Thief"
        );
        assert_eq!(pretty_year_album(0, Some("Kid A")), "Kid A");
        assert_eq!(pretty_year_album(0, None), UNKNOWN);
        assert_eq!(pretty_year_album(2000, Some("")), "2000 - Unknown");
    }
}
