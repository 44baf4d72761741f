use std::collections::HashMap;

use smol_str::SmolStr;

use crate::tree::NodeId;

/// The maximum number of grouping levels under a provider's divider.
pub const MAX_LEVELS: usize = 3;

/// The path to a container: which provider's divider it is under, and the
/// display text of each grouping level down to it. Levels below the container
/// are empty.
///
/// Keyed on the divider rather than the provider's rank, since ranks only
/// order sections and two providers may end up sharing one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerKey {
    /// The divider of the provider the container is under.
    pub divider: NodeId,
    /// The display text of each level.
    pub group: [SmolStr; MAX_LEVELS],
}
impl ContainerKey {
    /// Creates a key for the provider itself, with no levels filled in.
    pub fn new(divider: NodeId) -> Self {
        Self {
            divider,
            group: Default::default(),
        }
    }

    /// Fills in `level` with `value`.
    pub fn set_level(&mut self, level: usize, value: SmolStr) {
        self.group[level] = value;
    }
}

/// Maps container keys to the container nodes already in the tree, so that
/// results with the same grouping share one chain of containers.
///
/// The tree owns the nodes; this only remembers where they are.
#[derive(Debug, Default)]
pub struct ContainerCache {
    containers: HashMap<ContainerKey, NodeId>,
}
impl ContainerCache {
    /// Returns the container for `key`, if one has been created.
    pub fn get(&self, key: &ContainerKey) -> Option<NodeId> {
        self.containers.get(key).copied()
    }

    /// Remembers that `node` is the container for `key`.
    pub fn insert(&mut self, key: ContainerKey, node: NodeId) {
        let previous = self.containers.insert(key, node);
        debug_assert!(previous.is_none(), "container key registered twice");
    }

    /// The number of containers known.
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Whether no containers are known.
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Forgets every container.
    pub fn clear(&mut self) {
        self.containers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ProviderRank,
        tree::{Divider, NodeKind, ResultTree},
    };
    use flock_state::ProviderId;

    #[test]
    fn test_key_equality() {
        let mut tree = ResultTree::new();
        let root = tree.root();
        let divider = |id: &str| {
            NodeKind::Divider(Divider {
                provider: ProviderId::new(id),
                name: id.to_string(),
                icon: None,
            })
        };
        let first = tree.append(root, divider("library"), ProviderRank(0));
        let second = tree.append(root, divider("radio"), ProviderRank(0));

        let mut a = ContainerKey::new(first);
        let mut b = ContainerKey::new(first);
        assert_eq!(a, b);

        a.set_level(0, "Radiohead".into());
        assert_ne!(a, b);
        b.set_level(0, "Radiohead".into());
        assert_eq!(a, b);

        // Same path under a different divider is a different container, even
        // when both providers have the same rank.
        let mut c = ContainerKey::new(second);
        c.set_level(0, "Radiohead".into());
        assert_ne!(a, c);

        // A deeper path is a different container from its ancestor.
        let mut d = a.clone();
        d.set_level(1, "Kid A".into());
        assert_ne!(a, d);
    }

    #[test]
    fn test_cache() {
        let tree = ResultTree::new();
        let mut cache = ContainerCache::default();
        let mut key = ContainerKey::new(tree.root());
        key.set_level(0, "Muse".into());

        assert_eq!(cache.get(&key), None);
        cache.insert(key.clone(), tree.root());
        assert_eq!(cache.get(&key), Some(tree.root()));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&key), None);
    }
}
