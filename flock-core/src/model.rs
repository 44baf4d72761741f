use std::sync::Arc;

use flock_state::{ProviderId, SearchResult};

use crate::{
    GroupBy, ProviderRank, SearchConfig, builder,
    key::{ContainerCache, MAX_LEVELS},
    providers::ProviderRegistry,
    tree::{NodeId, NodeKind, ResultTree},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Why a batch of results was rejected. Rejected batches leave the model
/// untouched.
pub enum AddResultsError {
    /// The batch had no results in it.
    EmptyBatch,
    /// The results in the batch came from more than one provider.
    MixedProviders {
        /// The provider of the first result.
        expected: ProviderId,
        /// The first provider that didn't match it.
        found: ProviderId,
    },
}
impl std::fmt::Display for AddResultsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddResultsError::EmptyBatch => write!(f, "Result batch is empty"),
            AddResultsError::MixedProviders { expected, found } => write!(
                f,
                "Result batch mixes providers: expected {expected}, found {found}"
            ),
        }
    }
}
impl std::error::Error for AddResultsError {}

/// Turns a set of collected results into something a front end can hand off,
/// e.g. a drag payload or a playlist insertion request.
pub trait ResultLoader {
    /// What the loader produces.
    type Output;

    /// Builds the output from `results`, in collection order.
    fn load(&self, results: Vec<Arc<SearchResult>>) -> Self::Output;
}

/// The global search model: batches of results from many providers go in,
/// and a tree grouped by provider and then by the configured levels comes out.
///
/// All mutation is expected to happen on one thread, one whole batch at a time.
#[derive(Debug)]
pub struct SearchModel {
    config: SearchConfig,
    providers: ProviderRegistry,
    containers: ContainerCache,
    tree: ResultTree,
}
impl SearchModel {
    /// Creates an empty model.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            providers: ProviderRegistry::new(config.provider_order.clone()),
            config,
            containers: ContainerCache::default(),
            tree: ResultTree::new(),
        }
    }

    /// The tree views should render.
    pub fn tree(&self) -> &ResultTree {
        &self.tree
    }

    /// The current configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Adds a batch of results from a single provider.
    ///
    /// The provider gets a divider the first time it's seen. Each result is
    /// then placed in its containers under that divider as a new leaf.
    ///
    /// Results that opt out of grouping go directly under the divider rather
    /// than on the invisible root, so that everything below a divider belongs
    /// to its provider and collecting from a divider yields all of its
    /// provider's results.
    pub fn add_results(&mut self, results: Vec<SearchResult>) -> Result<(), AddResultsError> {
        let Some(first) = results.first() else {
            tracing::warn!("rejected empty result batch");
            return Err(AddResultsError::EmptyBatch);
        };
        if let Some(other) = results
            .iter()
            .find(|result| result.provider.id != first.provider.id)
        {
            let error = AddResultsError::MixedProviders {
                expected: first.provider.id.clone(),
                found: other.provider.id.clone(),
            };
            tracing::warn!("rejected result batch: {error}");
            return Err(error);
        }

        let provider = first.provider.clone();
        let (rank, divider) = self.providers.rank_of(&provider, &mut self.tree);
        tracing::debug!(provider = %provider.id, count = results.len(), "adding results");

        for result in results {
            let parent = if result.group_automatically {
                builder::build_containers(
                    &self.config,
                    &mut self.containers,
                    &mut self.tree,
                    &result.metadata,
                    divider,
                    rank,
                )
            } else {
                divider
            };
            self.tree
                .append(parent, NodeKind::Leaf(Arc::new(result)), rank);
        }

        Ok(())
    }

    /// Empties the model: every provider, container and result is dropped, and
    /// unconfigured provider ranks start over. Ids handed out before the
    /// clear no longer resolve.
    pub fn clear(&mut self) {
        self.providers.clear();
        self.containers.clear();
        self.tree.clear();
        tracing::debug!("cleared search results");
    }

    /// The results of every leaf at or below `nodes`, each once.
    pub fn child_results(&self, nodes: impl IntoIterator<Item = NodeId>) -> Vec<Arc<SearchResult>> {
        self.tree.child_results(nodes)
    }

    /// Collects the results at or below `nodes` and hands them to `loader`.
    pub fn load<L: ResultLoader>(
        &self,
        nodes: impl IntoIterator<Item = NodeId>,
        loader: &L,
    ) -> L::Output {
        loader.load(self.child_results(nodes))
    }

    /// The rank of `provider`, if it has been seen since the last clear.
    pub fn provider_rank(&self, provider: &ProviderId) -> Option<ProviderRank> {
        self.providers.rank(provider)
    }

    /// The divider of `provider`, if it has been seen since the last clear.
    pub fn provider_divider(&self, provider: &ProviderId) -> Option<NodeId> {
        self.providers.divider(provider)
    }

    /// The number of distinct containers in the tree.
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Changes the grouping levels. The existing tree no longer matches them,
    /// so the model is cleared.
    pub fn set_group_by(&mut self, group_by: [GroupBy; MAX_LEVELS]) {
        if self.config.group_by != group_by {
            self.config.group_by = group_by;
            self.clear();
        }
    }

    /// Changes whether album containers get cover placeholders. Existing
    /// containers were created with the old icons, so the model is cleared.
    pub fn set_use_pretty_covers(&mut self, pretty_covers: bool) {
        if self.config.pretty_covers != pretty_covers {
            self.config.pretty_covers = pretty_covers;
            self.clear();
        }
    }

    /// Changes the preferred provider order. Providers that already have a
    /// rank keep it until the next clear.
    pub fn set_provider_order(&mut self, provider_order: Vec<ProviderId>) {
        self.config.provider_order = provider_order.clone();
        self.providers.set_preferred_order(provider_order);
    }
}
