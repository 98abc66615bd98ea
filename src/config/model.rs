//! In-memory configuration aggregate: groups, items, ordering, enablement.
//!
//! A `Configuration` is treated as an immutable value by the engine: every
//! mutator takes a reference and returns a fresh value, so callers hold "the
//! latest returned configuration" with no aliasing concerns. Ordering is an
//! explicit dense `sort_order` on groups and on items within their group,
//! never implicit list position.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::catalog::{DEFAULT_ITEMS, GroupKind};

/// One token group in a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub kind: GroupKind,
    #[serde(default)]
    pub display_name: String,
    /// Prefix prepended to the group's rendered tokens; may be empty
    #[serde(default)]
    pub prefix: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Dense rank over all groups in the configuration
    #[serde(default)]
    pub sort_order: u32,
    /// Whether the group keeps its preserved item across an external reimport
    #[serde(default)]
    pub preserved: bool,
}

/// One filename token, owned by exactly one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(rename = "group_kind")]
    pub group: GroupKind,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Dense rank within the owning group
    #[serde(default)]
    pub sort_order: u32,
    /// At most one item per group carries this flag
    #[serde(default)]
    pub preserved: bool,
}

/// The aggregate the engine operates on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
    #[serde(default)]
    pub items: Vec<Item>,
}

fn default_enabled() -> bool {
    true
}

impl Configuration {
    /// Build the default configuration from the group catalog: every group
    /// kind in catalog order, every default item enabled, nothing preserved.
    pub fn full_feature_set() -> Self {
        let groups = GroupKind::ALL
            .iter()
            .enumerate()
            .map(|(rank, &kind)| GroupConfig {
                kind,
                display_name: kind.display_name().to_string(),
                prefix: kind.default_prefix().to_string(),
                enabled: true,
                sort_order: rank as u32,
                preserved: false,
            })
            .collect();

        let mut config = Configuration {
            groups,
            items: Vec::new(),
        };
        for (name, group) in DEFAULT_ITEMS {
            let sort_order = config.items.iter().filter(|it| it.group == group).count() as u32;
            config.items.push(Item {
                name: name.to_string(),
                group,
                enabled: true,
                sort_order,
                preserved: false,
            });
        }
        config
    }

    pub fn group(&self, kind: GroupKind) -> Option<&GroupConfig> {
        self.groups.iter().find(|g| g.kind == kind)
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|it| it.name == name)
    }

    /// Groups in ascending `sort_order`.
    pub fn sorted_groups(&self) -> Vec<&GroupConfig> {
        let mut groups: Vec<&GroupConfig> = self.groups.iter().collect();
        groups.sort_by_key(|g| g.sort_order);
        groups
    }

    /// Items of one group in ascending `sort_order`.
    pub fn items_in(&self, kind: GroupKind) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.iter().filter(|it| it.group == kind).collect();
        items.sort_by_key(|it| it.sort_order);
        items
    }

    /// Re-rank all group `sort_order` values as a dense 0..N-1 permutation,
    /// keeping the current order (stable for duplicates).
    pub(crate) fn rerank_groups(&mut self) {
        let mut order: Vec<usize> = (0..self.groups.len()).collect();
        order.sort_by_key(|&i| self.groups[i].sort_order);
        for (rank, idx) in order.into_iter().enumerate() {
            self.groups[idx].sort_order = rank as u32;
        }
    }

    /// Re-rank one group's item `sort_order` values densely.
    pub(crate) fn rerank_items_in(&mut self, kind: GroupKind) {
        let mut order: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, it)| it.group == kind)
            .map(|(i, _)| i)
            .collect();
        order.sort_by_key(|&i| self.items[i].sort_order);
        for (rank, idx) in order.into_iter().enumerate() {
            self.items[idx].sort_order = rank as u32;
        }
    }

    /// Repair a configuration after deserialization.
    ///
    /// Persisted blobs can be stale or hand-edited: groups may be missing,
    /// items may reference a group that no longer exists, and sort orders may
    /// carry gaps or duplicates. Normalization guarantees the structural
    /// invariants (Ungrouped present, every item owned by a present group,
    /// dense sort orders) without dropping any user data.
    pub fn normalize(&mut self) {
        if self.group(GroupKind::Ungrouped).is_none() {
            warn!("configuration is missing the Ungrouped anchor group, restoring it");
            // Lands after every existing group even when orders carry gaps
            let last = self.groups.iter().map(|g| g.sort_order).max();
            self.groups.push(GroupConfig {
                kind: GroupKind::Ungrouped,
                display_name: GroupKind::Ungrouped.display_name().to_string(),
                prefix: String::new(),
                enabled: true,
                sort_order: last.map_or(0, |m| m + 1),
                preserved: false,
            });
        }

        for group in &mut self.groups {
            if group.display_name.is_empty() {
                group.display_name = group.kind.display_name().to_string();
            }
        }

        let present: Vec<GroupKind> = self.groups.iter().map(|g| g.kind).collect();
        for item in &mut self.items {
            if !present.contains(&item.group) {
                warn!(item = %item.name, group = %item.group, "item references a missing group, moving to Ungrouped");
                item.group = GroupKind::Ungrouped;
            }
        }

        self.rerank_groups();
        for kind in present {
            self.rerank_items_in(kind);
        }
    }
}
