use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::IconId;

/// A provider ID, as used in the user's preferred provider order
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(pub SmolStr);
impl ProviderId {
    /// Creates a provider ID from anything string-like.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(SmolStr::new(id))
    }
}
impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A source of search results, e.g. the local library or an internet service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    /// The stable identity of the provider
    pub id: ProviderId,
    /// The human-readable name, shown on the provider's divider
    pub name: String,
    /// The icon shown on the provider's divider
    pub icon: Option<IconId>,
}
impl Provider {
    /// Creates a provider with no icon.
    pub fn new(id: impl AsRef<str>, name: impl Into<String>) -> Self {
        Self {
            id: ProviderId::new(id),
            name: name.into(),
            icon: None,
        }
    }

    /// Sets the provider's icon.
    pub fn with_icon(self, icon: IconId) -> Self {
        Self {
            icon: Some(icon),
            ..self
        }
    }
}
