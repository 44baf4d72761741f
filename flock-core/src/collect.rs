use std::{collections::HashSet, sync::Arc};

use flock_state::SearchResult;

use crate::tree::{NodeId, NodeKind, ResultTree};

impl ResultTree {
    /// Returns the results of every leaf at or below `nodes`, each once, in
    /// the order they are first reached depth-first.
    ///
    /// Overlapping selections (a container and one of its own leaves, or the
    /// same node twice) don't produce duplicates. Stale ids contribute nothing.
    pub fn child_results(&self, nodes: impl IntoIterator<Item = NodeId>) -> Vec<Arc<SearchResult>> {
        let mut results = vec![];
        let mut visited = HashSet::new();
        for node in nodes {
            self.collect_child_results(node, &mut results, &mut visited);
        }
        results
    }

    fn collect_child_results(
        &self,
        id: NodeId,
        results: &mut Vec<Arc<SearchResult>>,
        visited: &mut HashSet<NodeId>,
    ) {
        let Some(node) = self.get(id) else {
            tracing::warn!(%id, "skipping stale node reference");
            return;
        };
        if !visited.insert(id) {
            return;
        }

        if let NodeKind::Leaf(result) = &node.kind {
            results.push(result.clone());
            return;
        }
        for &child in node.children() {
            self.collect_child_results(child, results, visited);
        }
    }
}
