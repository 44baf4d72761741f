use std::sync::Arc;

use crate::{Provider, Song};

/// One match from a search provider. Immutable once received.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The song that matched
    pub metadata: Song,
    /// The provider the result came from; shared by every result in a batch
    pub provider: Arc<Provider>,
    /// Whether the result should be grouped into containers, or inserted
    /// directly under its provider's divider
    pub group_automatically: bool,
}
impl SearchResult {
    /// Creates a result that will be grouped automatically.
    pub fn new(provider: Arc<Provider>, metadata: Song) -> Self {
        Self {
            metadata,
            provider,
            group_automatically: true,
        }
    }

    /// Creates a result that is inserted flat, without containers.
    pub fn ungrouped(provider: Arc<Provider>, metadata: Song) -> Self {
        Self {
            metadata,
            provider,
            group_automatically: false,
        }
    }
}
