//! Simulates search providers answering concurrently.
//!
//! Each provider delivers its batches from its own task. Batches are funnelled
//! through one channel into a single consumer that owns the model, so every
//! batch is applied whole and in isolation.

use std::sync::Arc;

use flock_core::{
    SearchModel,
    flock_state::{IconId, Provider, ProviderId, SearchResult, Song},
};
use flock_json_types::{Input, InputBatch, InputProvider, InputSong};
use tokio::sync::mpsc;

const CHANNEL_CAPACITY: usize = 16;

/// What happened while feeding the model.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FeedSummary {
    pub accepted: usize,
    pub rejected: usize,
}

/// Feeds every batch in `input` to `model`, one task per provider.
pub async fn feed(model: &mut SearchModel, input: Input) -> FeedSummary {
    let (tx, mut rx) = mpsc::channel::<Vec<SearchResult>>(CHANNEL_CAPACITY);

    for (provider, batches) in group_by_provider(input) {
        let tx = tx.clone();
        tokio::spawn(async move {
            for batch in batches {
                let results = batch
                    .into_iter()
                    .map(|song| to_result(&provider, song))
                    .collect();
                if tx.send(results).await.is_err() {
                    break;
                }
                // Let other providers get a batch in.
                tokio::task::yield_now().await;
            }
        });
    }
    drop(tx);

    let mut summary = FeedSummary::default();
    while let Some(batch) = rx.recv().await {
        match model.add_results(batch) {
            Ok(()) => summary.accepted += 1,
            Err(e) => {
                tracing::warn!("skipping batch: {e}");
                summary.rejected += 1;
            }
        }
    }
    summary
}

/// Splits batches up by provider, keeping each provider's batches in order.
fn group_by_provider(input: Input) -> Vec<(Arc<Provider>, Vec<Vec<InputSong>>)> {
    let mut providers: Vec<(Arc<Provider>, Vec<Vec<InputSong>>)> = vec![];
    for InputBatch { provider, songs } in input {
        let id = ProviderId::new(&provider.id);
        match providers.iter_mut().find(|(p, _)| p.id == id) {
            Some((_, batches)) => batches.push(songs),
            None => providers.push((Arc::new(to_provider(provider)), vec![songs])),
        }
    }
    providers
}

fn to_provider(provider: InputProvider) -> Provider {
    let InputProvider { id, name, icon } = provider;
    let provider = Provider::new(id, name);
    match icon {
        Some(icon) => provider.with_icon(IconId(icon.into())),
        None => provider,
    }
}

fn to_result(provider: &Arc<Provider>, song: InputSong) -> SearchResult {
    let ungrouped = song.ungrouped;
    let metadata = Song {
        title: song.title,
        artist: song.artist,
        album: song.album,
        album_artist: song.album_artist,
        composer: song.composer,
        genre: song.genre,
        year: song.year,
        track: song.track,
        disc_number: song.disc_number,
        duration: song.duration,
        file_type: song.file_type,
    };
    if ungrouped {
        SearchResult::ungrouped(provider.clone(), metadata)
    } else {
        SearchResult::new(provider.clone(), metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flock_core::SearchConfig;

    fn batch(provider: &str, titles: &[&str]) -> InputBatch {
        InputBatch {
            provider: InputProvider {
                id: provider.to_string(),
                name: provider.to_uppercase(),
                icon: Some(format!("{provider}.png")),
            },
            songs: titles
                .iter()
                .map(|title| {
                    serde_json::from_value(serde_json::json!({
                        "title": title,
                        "artist": "Boards of Canada",
                        "album": "Geogaddi",
                    }))
                    .unwrap()
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_feed_interleaved_providers() {
        let mut model = SearchModel::new(SearchConfig::default());
        let input = vec![
            batch("library", &["Music Is Math"]),
            batch("jamendo", &["Alpha and Omega"]),
            batch("library", &["Dawn Chorus", "Julie and Candy"]),
            batch("library", &[]),
        ];

        let summary = feed(&mut model, input).await;
        assert_eq!(
            summary,
            FeedSummary {
                accepted: 3,
                rejected: 1
            }
        );

        let tree = model.tree();
        assert_eq!(tree.dividers().count(), 2);
        assert_eq!(model.child_results([tree.root()]).len(), 4);

        let album = tree
            .find_path(&["LIBRARY", "Boards of Canada", "Geogaddi"])
            .unwrap();
        assert_eq!(tree.children(album).len(), 3);
    }

    #[test]
    fn test_to_provider_keeps_icon() {
        let provider = to_provider(InputProvider {
            id: "library".to_string(),
            name: "Library".to_string(),
            icon: Some("library.png".to_string()),
        });
        assert_eq!(provider.id, ProviderId::new("library"));
        assert_eq!(provider.icon, Some(IconId("library.png".into())));
    }
}
