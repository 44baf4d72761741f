use flock_state::Song;

use crate::{
    ProviderRank, SearchConfig,
    grouping::ContainerIcon,
    key::{ContainerCache, ContainerKey},
    tree::{Container, NodeId, NodeKind, ResultTree},
};

/// Finds or creates the chain of containers `song` belongs in under `anchor`,
/// and returns the node its leaf should be appended to.
///
/// Walks the configured levels in order, stopping at the first
/// [`crate::GroupBy::None`]. Each level's container is looked up by the key of
/// the path so far, so songs that share a path share its containers.
pub(crate) fn build_containers(
    config: &SearchConfig,
    cache: &mut ContainerCache,
    tree: &mut ResultTree,
    song: &Song,
    anchor: NodeId,
    provider_rank: ProviderRank,
) -> NodeId {
    let mut key = ContainerKey::new(anchor);
    let mut parent = anchor;

    for (level, group_by) in config.group_by.iter().enumerate() {
        let Some(text) = group_by.level_text(song) else {
            break;
        };

        key.set_level(level, text.display.clone());
        parent = match cache.get(&key) {
            Some(container) => {
                tracing::trace!(?key, %container, "reusing container");
                container
            }
            None => {
                let container = tree.append(
                    parent,
                    NodeKind::Container(Container {
                        display_text: text.display,
                        sort_text: text.sort,
                        group_by: *group_by,
                        icon: ContainerIcon::new(text.icon, config.pretty_covers),
                    }),
                    provider_rank,
                );
                tracing::trace!(?key, %container, "created container");
                cache.insert(key.clone(), container);
                container
            }
        };
    }

    parent
}
