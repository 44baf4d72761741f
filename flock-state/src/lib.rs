//! Representations of a single search result, as the global search tree sees it.
//!
//! Separated out so that providers and front ends can build results without
//! depending on the tree engine.
#![deny(missing_docs)]

mod file_type;
pub use file_type::FileType;

mod icon;
pub use icon::IconId;

mod provider;
pub use provider::{Provider, ProviderId};

mod result;
pub use result::SearchResult;

mod song;
pub use song::Song;
