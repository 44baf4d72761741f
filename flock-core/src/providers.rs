use std::collections::HashMap;

use flock_state::{Provider, ProviderId};

use crate::tree::{Divider, NodeId, NodeKind, ResultTree};

/// The first rank handed out to providers missing from the preferred order.
pub const FIRST_UNCONFIGURED_RANK: u32 = 1000;

/// The ordering value of a provider's section. Lower ranks are shown first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProviderRank(pub u32);
impl std::fmt::Display for ProviderRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out a rank to each provider, and makes sure each provider has
/// exactly one divider in the tree.
#[derive(Debug)]
pub struct ProviderRegistry {
    preferred_order: Vec<ProviderId>,
    seen: HashMap<ProviderId, SeenProvider>,
    next_rank: u32,
}

#[derive(Debug, Clone, Copy)]
struct SeenProvider {
    rank: ProviderRank,
    divider: NodeId,
}

impl ProviderRegistry {
    /// Creates a registry that ranks providers in `preferred_order` by their
    /// position in it, and all others by when they were first seen.
    pub fn new(preferred_order: Vec<ProviderId>) -> Self {
        Self {
            preferred_order,
            seen: HashMap::new(),
            next_rank: FIRST_UNCONFIGURED_RANK,
        }
    }

    /// Returns the rank and divider of `provider`, assigning a rank and
    /// appending a divider to the root of `tree` the first time it's seen.
    pub fn rank_of(&mut self, provider: &Provider, tree: &mut ResultTree) -> (ProviderRank, NodeId) {
        if let Some(seen) = self.seen.get(&provider.id) {
            return (seen.rank, seen.divider);
        }

        let rank = match self.preferred_order.iter().position(|id| id == &provider.id) {
            Some(index) => ProviderRank(index as u32),
            None => {
                let rank = ProviderRank(self.next_rank);
                self.next_rank += 1;
                rank
            }
        };

        let divider = tree.append(
            tree.root(),
            NodeKind::Divider(Divider {
                provider: provider.id.clone(),
                name: provider.name.clone(),
                icon: provider.icon.clone(),
            }),
            rank,
        );
        tracing::debug!(provider = %provider.id, %rank, "created divider for new provider");

        self.seen
            .insert(provider.id.clone(), SeenProvider { rank, divider });
        (rank, divider)
    }

    /// The rank of `provider`, if it has been seen since the last clear.
    pub fn rank(&self, provider: &ProviderId) -> Option<ProviderRank> {
        self.seen.get(provider).map(|seen| seen.rank)
    }

    /// The divider of `provider`, if it has been seen since the last clear.
    pub fn divider(&self, provider: &ProviderId) -> Option<NodeId> {
        self.seen.get(provider).map(|seen| seen.divider)
    }

    /// The number of providers seen since the last clear.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether no providers have been seen since the last clear.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// The preferred provider order.
    pub fn preferred_order(&self) -> &[ProviderId] {
        &self.preferred_order
    }

    /// Replaces the preferred order. Providers that already have a rank keep it.
    pub fn set_preferred_order(&mut self, preferred_order: Vec<ProviderId>) {
        self.preferred_order = preferred_order;
    }

    /// Forgets every provider and restarts unconfigured ranks at
    /// [`FIRST_UNCONFIGURED_RANK`]. The preferred order is kept.
    pub fn clear(&mut self) {
        self.seen.clear();
        self.next_rank = FIRST_UNCONFIGURED_RANK;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_ranks() {
        let mut tree = ResultTree::new();
        let mut registry = ProviderRegistry::new(vec![]);

        let local = Provider::new("local", "Library");
        let web = Provider::new("web", "Web radio");

        let (local_rank, local_divider) = registry.rank_of(&local, &mut tree);
        let (web_rank, _) = registry.rank_of(&web, &mut tree);
        assert_eq!(local_rank, ProviderRank(1000));
        assert_eq!(web_rank, ProviderRank(1001));

        // Asking again is idempotent and doesn't add another divider.
        assert_eq!(registry.rank_of(&local, &mut tree), (local_rank, local_divider));
        assert_eq!(tree.dividers().count(), 2);
        assert_eq!(registry.len(), 2);

        let divider = tree.get(local_divider).unwrap();
        assert_eq!(divider.display_text(), "Library");
        assert_eq!(divider.provider_rank, Some(local_rank));
        assert!(!divider.is_selectable());
    }

    #[test]
    fn test_preferred_order() {
        let mut tree = ResultTree::new();
        let mut registry =
            ProviderRegistry::new(vec![ProviderId::new("p2"), ProviderId::new("p1")]);

        let (p1, _) = registry.rank_of(&Provider::new("p1", "One"), &mut tree);
        let (p3, _) = registry.rank_of(&Provider::new("p3", "Three"), &mut tree);
        let (p2, _) = registry.rank_of(&Provider::new("p2", "Two"), &mut tree);
        assert_eq!(p1, ProviderRank(1));
        assert_eq!(p2, ProviderRank(0));
        assert_eq!(p3, ProviderRank(1000));
    }

    #[test]
    fn test_clear_resets_counter() {
        let mut tree = ResultTree::new();
        let mut registry = ProviderRegistry::new(vec![]);
        registry.rank_of(&Provider::new("a", "A"), &mut tree);
        registry.rank_of(&Provider::new("b", "B"), &mut tree);

        registry.clear();
        tree.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.rank(&ProviderId::new("a")), None);

        let (rank, _) = registry.rank_of(&Provider::new("b", "B"), &mut tree);
        assert_eq!(rank, ProviderRank(FIRST_UNCONFIGURED_RANK));
    }
}
