//! The result-aggregation and grouping engine behind the global search view.
//!
//! Search providers deliver batches of [`flock_state::SearchResult`]s; the
//! [`SearchModel`] files each one under its provider's divider, inside a chain
//! of containers picked by the configured [`GroupBy`] levels, reusing
//! containers that already exist for the same path.

pub use flock_state;

pub mod grouping;
pub use grouping::{ContainerIcon, GroupBy, GroupByError};

pub mod key;
pub use key::{ContainerCache, ContainerKey, MAX_LEVELS};

pub mod providers;
pub use providers::{FIRST_UNCONFIGURED_RANK, ProviderRank, ProviderRegistry};

pub mod sort;
pub mod text;

pub mod tree;
pub use tree::{NodeId, NodeKind, ResultTree};

mod builder;
mod collect;

mod config;
pub use config::SearchConfig;

mod model;
pub use model::{AddResultsError, ResultLoader, SearchModel};
