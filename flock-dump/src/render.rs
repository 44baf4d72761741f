use std::{io::Write, sync::Arc};

use flock_core::{
    NodeId, NodeKind, ResultLoader, ResultTree,
    flock_state::SearchResult,
    sort::NodeOrder,
};
use flock_json_types::{Output, OutputTrack};

/// Convert a number of seconds to "M:SS", or "H:MM:SS" for an hour or more.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Options for [`print_tree`].
pub struct PrintOptions<'a> {
    /// Children are printed in this order if set, otherwise in arrival order.
    pub order: Option<&'a NodeOrder>,
    pub show_durations: bool,
}

/// Prints the tree as an indented outline.
pub fn print_tree(
    tree: &ResultTree,
    options: &PrintOptions,
    out: &mut impl Write,
) -> std::io::Result<()> {
    for id in children(tree, tree.root(), options) {
        print_node(tree, id, 0, options, out)?;
    }
    Ok(())
}

fn children(tree: &ResultTree, id: NodeId, options: &PrintOptions) -> Vec<NodeId> {
    match options.order {
        Some(order) => order.sorted_children(tree, id),
        None => tree.children(id).to_vec(),
    }
}

fn print_node(
    tree: &ResultTree,
    id: NodeId,
    depth: usize,
    options: &PrintOptions,
    out: &mut impl Write,
) -> std::io::Result<()> {
    let Some(node) = tree.get(id) else {
        return Ok(());
    };
    let indent = "  ".repeat(depth);

    match &node.kind {
        NodeKind::Root => {}
        NodeKind::Divider(divider) => {
            let rank = node.provider_rank.map(|r| r.0).unwrap_or_default();
            writeln!(out, "{indent}== {} ({rank}) ==", divider.name)?;
        }
        NodeKind::Container(container) => {
            writeln!(out, "{indent}{}", container.display_text)?;
        }
        NodeKind::Leaf(result) => {
            write!(out, "{indent}- {}", result.metadata.title)?;
            if options.show_durations
                && let Some(duration) = result.metadata.duration
            {
                write!(out, " [{}]", format_duration(duration))?;
            }
            writeln!(out)?;
        }
    }

    for child in children(tree, id, options) {
        print_node(tree, child, depth + 1, options, out)?;
    }
    Ok(())
}

/// Builds the JSON payload handed to whatever consumes a selection.
pub struct JsonLoader;
impl ResultLoader for JsonLoader {
    type Output = Output;

    fn load(&self, results: Vec<Arc<SearchResult>>) -> Self::Output {
        results
            .iter()
            .map(|result| {
                let song = &result.metadata;
                OutputTrack {
                    provider: result.provider.id.to_string(),
                    title: song.title.clone(),
                    artist: song.artist.clone(),
                    album: song.album.clone(),
                    year: song.year,
                    duration: song.duration,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flock_core::{
        GroupBy, SearchConfig, SearchModel,
        flock_state::{Provider, Song},
    };

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(3661), "1:01:01");
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(61), "1:01");
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
    }

    fn model() -> SearchModel {
        let mut model = SearchModel::new(SearchConfig {
            group_by: [GroupBy::Artist, GroupBy::None, GroupBy::None],
            ..SearchConfig::default()
        });
        let library = Arc::new(Provider::new("library", "Library"));
        model
            .add_results(vec![
                SearchResult::new(
                    library.clone(),
                    Song {
                        artist: Some("Muse".to_string()),
                        duration: Some(245),
                        ..Song::new("Hysteria")
                    },
                ),
                SearchResult::new(
                    library.clone(),
                    Song {
                        artist: Some("Blur".to_string()),
                        ..Song::new("Song 2")
                    },
                ),
            ])
            .unwrap();
        model
    }

    #[test]
    fn test_print_tree() {
        let model = model();
        let order = NodeOrder::new();

        let mut out = vec![];
        let options = PrintOptions {
            order: Some(&order),
            show_durations: true,
        };
        print_tree(model.tree(), &options, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "== Library (1000) ==\n  Blur\n    - Song 2\n  Muse\n    - Hysteria [4:05]\n"
        );

        let mut out = vec![];
        let options = PrintOptions {
            order: None,
            show_durations: false,
        };
        print_tree(model.tree(), &options, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "== Library (1000) ==\n  Muse\n    - Hysteria\n  Blur\n    - Song 2\n"
        );
    }

    #[test]
    fn test_json_loader() {
        let model = model();
        let muse = model.tree().find_path(&["Library", "Muse"]).unwrap();
        let output = model.load([muse], &JsonLoader);
        assert_eq!(
            output,
            vec![OutputTrack {
                provider: "library".to_string(),
                title: "Hysteria".to_string(),
                artist: Some("Muse".to_string()),
                album: None,
                year: None,
                duration: Some(245),
            }]
        );
    }
}
