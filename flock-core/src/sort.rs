//! Ordering of sibling nodes for views.
//!
//! The model appends nodes in arrival order and never re-sorts; a view that
//! wants sorted sections asks for a sorted copy of a node's children.

use std::cmp::Ordering;

use icu_collator::CollatorBorrowed;

use crate::tree::{Node, NodeId, NodeKind, ResultTree};

/// Compares sibling nodes: by provider rank, then dividers before containers
/// before leaves, then by collated sort text (titles for leaves).
pub struct NodeOrder {
    collator: CollatorBorrowed<'static>,
}
impl Default for NodeOrder {
    fn default() -> Self {
        Self::new()
    }
}
impl NodeOrder {
    /// Creates an ordering using a primary-strength, numeric collator.
    pub fn new() -> Self {
        let mut collator_preferences = icu_collator::CollatorPreferences::default();
        collator_preferences.numeric_ordering =
            Some(icu_collator::preferences::CollationNumericOrdering::True);

        let mut collator_options = icu_collator::options::CollatorOptions::default();
        collator_options.strength = Some(icu_collator::options::Strength::Primary);
        collator_options.case_level = Some(icu_collator::options::CaseLevel::Off);

        let collator = icu_collator::Collator::try_new(collator_preferences, collator_options)
            .expect("compiled collation data should always be available");

        Self { collator }
    }

    /// Compares two nodes.
    pub fn compare(&self, a: &Node, b: &Node) -> Ordering {
        fn kind_order(node: &Node) -> u8 {
            match node.kind {
                NodeKind::Root => 0,
                NodeKind::Divider(_) => 1,
                NodeKind::Container(_) => 2,
                NodeKind::Leaf(_) => 3,
            }
        }

        fn sort_text(node: &Node) -> &str {
            match &node.kind {
                NodeKind::Container(container) => &container.sort_text,
                _ => node.display_text(),
            }
        }

        a.provider_rank
            .cmp(&b.provider_rank)
            .then_with(|| kind_order(a).cmp(&kind_order(b)))
            .then_with(|| self.collator.compare(sort_text(a), sort_text(b)))
    }

    /// The children of `id` in sorted order. The tree itself is not modified.
    pub fn sorted_children(&self, tree: &ResultTree, id: NodeId) -> Vec<NodeId> {
        let mut children: Vec<(NodeId, &Node)> = tree
            .children(id)
            .iter()
            .filter_map(|&child| Some((child, tree.get(child)?)))
            .collect();
        children.sort_by(|(_, a), (_, b)| self.compare(a, b));
        children.into_iter().map(|(id, _)| id).collect()
    }
}
