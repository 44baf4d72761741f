//! The result tree: root → provider dividers → containers → leaves.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Ids carry the
//! generation of the tree they were handed out by, so ids from before a
//! [`ResultTree::clear`] resolve to nothing rather than to whatever node
//! happens to reuse their slot.

use std::sync::Arc;

use flock_state::{IconId, ProviderId, SearchResult};
use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::{
    ProviderRank,
    grouping::{ContainerIcon, GroupBy},
};

/// A reference to a node in a [`ResultTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}
impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// A section header for one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divider {
    /// The provider the section belongs to.
    pub provider: ProviderId,
    /// The provider's name.
    pub name: String,
    /// The provider's icon.
    pub icon: Option<IconId>,
}

/// One grouping bucket, e.g. "Artist: Radiohead".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// What the container shows.
    pub display_text: SmolStr,
    /// What the view orders the container by.
    pub sort_text: SmolStr,
    /// The grouping mode of the level the container is on.
    pub group_by: GroupBy,
    /// The icon the container was created with.
    pub icon: ContainerIcon,
}

/// What a node is.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// The invisible root.
    Root,
    /// A provider's section header.
    Divider(Divider),
    /// A grouping bucket.
    Container(Container),
    /// A single result.
    Leaf(Arc<SearchResult>),
}

/// A node in a [`ResultTree`].
#[derive(Debug, Clone)]
pub struct Node {
    /// What the node is.
    pub kind: NodeKind,
    /// The rank of the provider the node belongs to; `None` for the root.
    pub provider_rank: Option<ProviderRank>,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
}
impl Node {
    /// The node's children, in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The node's parent; `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether the node can be selected. Dividers and the root can't.
    pub fn is_selectable(&self) -> bool {
        matches!(self.kind, NodeKind::Container(_) | NodeKind::Leaf(_))
    }

    /// The text the node shows.
    pub fn display_text(&self) -> &str {
        match &self.kind {
            NodeKind::Root => "",
            NodeKind::Divider(divider) => &divider.name,
            NodeKind::Container(container) => &container.display_text,
            NodeKind::Leaf(result) => &result.metadata.title,
        }
    }

    /// The result wrapped by a leaf.
    pub fn result(&self) -> Option<&Arc<SearchResult>> {
        match &self.kind {
            NodeKind::Leaf(result) => Some(result),
            _ => None,
        }
    }
}

/// The hierarchical store of search results that views observe.
#[derive(Debug, Clone)]
pub struct ResultTree {
    nodes: Vec<Node>,
    generation: u32,
}
impl Default for ResultTree {
    fn default() -> Self {
        Self::new()
    }
}
impl ResultTree {
    /// Creates a tree containing only the root.
    pub fn new() -> Self {
        let mut tree = Self {
            nodes: vec![],
            generation: 0,
        };
        tree.push_root();
        tree
    }

    fn push_root(&mut self) {
        self.nodes.push(Node {
            kind: NodeKind::Root,
            provider_rank: None,
            parent: None,
            children: SmallVec::new(),
        });
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId {
            index: 0,
            generation: self.generation,
        }
    }

    /// Looks up a node. Returns `None` for ids from before the last clear.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.generation != self.generation {
            return None;
        }
        self.nodes.get(id.index as usize)
    }

    /// The children of `id`; empty if `id` is stale.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or_default()
    }

    /// The parent of `id`.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    /// The number of nodes, not counting the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Whether the tree has nothing but its root.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The provider dividers, in the order their providers were first seen.
    pub fn dividers(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children(self.root())
            .iter()
            .copied()
            .filter(|&id| matches!(self.get(id).map(|n| &n.kind), Some(NodeKind::Divider(_))))
    }

    /// Every node below the root in depth-first order, with its depth
    /// (dividers are at depth 1).
    pub fn walk(&self) -> Vec<(usize, NodeId)> {
        let mut out = vec![];
        let mut stack: Vec<(usize, NodeId)> = self
            .children(self.root())
            .iter()
            .rev()
            .map(|&id| (1, id))
            .collect();
        while let Some((depth, id)) = stack.pop() {
            out.push((depth, id));
            stack.extend(self.children(id).iter().rev().map(|&c| (depth + 1, c)));
        }
        out
    }

    /// Finds a node by the display text of each node on the path to it,
    /// starting from a divider. The first matching child wins at each step.
    pub fn find_path<S: AsRef<str>>(&self, path: &[S]) -> Option<NodeId> {
        let mut current = self.root();
        for segment in path {
            let segment: &str = segment.as_ref();
            current = self
                .children(current)
                .iter()
                .copied()
                .find(|&id| self.get(id).is_some_and(|n| n.display_text() == segment))?;
        }
        Some(current)
    }

    /// Appends a new node as the last child of `parent`.
    pub(crate) fn append(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        provider_rank: ProviderRank,
    ) -> NodeId {
        debug_assert!(self.get(parent).is_some(), "appending to a stale node");
        let id = NodeId {
            index: self.nodes.len() as u32,
            generation: self.generation,
        };
        self.nodes.push(Node {
            kind,
            provider_rank: Some(provider_rank),
            parent: Some(parent),
            children: SmallVec::new(),
        });
        self.nodes[parent.index as usize].children.push(id);
        id
    }

    /// Removes everything but the root, invalidating every id handed out.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.generation = self.generation.wrapping_add(1);
        self.push_root();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divider(name: &str) -> NodeKind {
        NodeKind::Divider(Divider {
            provider: ProviderId::new(name),
            name: name.to_string(),
            icon: None,
        })
    }

    fn container(text: &str) -> NodeKind {
        NodeKind::Container(Container {
            display_text: text.into(),
            sort_text: text.to_lowercase().into(),
            group_by: GroupBy::Artist,
            icon: ContainerIcon::Artist,
        })
    }

    #[test]
    fn test_append_and_walk() {
        let mut tree = ResultTree::new();
        assert!(tree.is_empty());

        let root = tree.root();
        let local = tree.append(root, divider("Local"), ProviderRank(0));
        let muse = tree.append(local, container("Muse"), ProviderRank(0));
        let web = tree.append(root, divider("Web"), ProviderRank(1000));

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.children(root), &[local, web]);
        assert_eq!(tree.parent(muse), Some(local));
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.dividers().collect::<Vec<_>>(), vec![local, web]);
        assert_eq!(tree.walk(), vec![(1, local), (2, muse), (1, web)]);

        assert!(!tree.get(local).unwrap().is_selectable());
        assert!(tree.get(muse).unwrap().is_selectable());
        assert!(!tree.get(root).unwrap().is_selectable());
    }

    #[test]
    fn test_find_path() {
        let mut tree = ResultTree::new();
        let local = tree.append(tree.root(), divider("Local"), ProviderRank(0));
        let muse = tree.append(local, container("Muse"), ProviderRank(0));

        assert_eq!(tree.find_path(&["Local", "Muse"]), Some(muse));
        assert_eq!(tree.find_path(&["Local"]), Some(local));
        assert_eq!(tree.find_path::<&str>(&[]), Some(tree.root()));
        assert_eq!(tree.find_path(&["Local", "Radiohead"]), None);
    }

    #[test]
    fn test_clear_invalidates_ids() {
        let mut tree = ResultTree::new();
        let old_root = tree.root();
        let local = tree.append(old_root, divider("Local"), ProviderRank(0));

        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.get(local).is_none());
        assert!(tree.get(old_root).is_none());
        assert!(tree.children(old_root).is_empty());

        // The slot is reused, but the old id still doesn't resolve.
        let web = tree.append(tree.root(), divider("Web"), ProviderRank(1000));
        assert_ne!(web, local);
        assert!(tree.get(local).is_none());
        assert_eq!(tree.get(web).unwrap().display_text(), "Web");
    }
}
