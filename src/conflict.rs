//! Preserved-flag conflict detection and resolution.
//!
//! Each group marks at most one item as preserved (its value survives an
//! external reimport). Toggling enforces the invariant immediately with
//! last-writer-wins; persisted blobs are reconciled once after every load,
//! since hand-edited or stale data can arrive with duplicate flags.

use tracing::warn;

use crate::config::{Configuration, GroupKind};
use crate::error::EngineError;

/// Mark `item_name` as the preserved item of `group`.
///
/// A previously-preserved sibling loses its flag first; the returned bool
/// reports whether that happened.
pub fn toggle_preserved(
    config: &Configuration,
    group: GroupKind,
    item_name: &str,
) -> Result<(Configuration, bool), EngineError> {
    if !config
        .items
        .iter()
        .any(|it| it.group == group && it.name == item_name)
    {
        return Err(EngineError::InvalidOperation(format!(
            "no item '{item_name}' in group {group}"
        )));
    }

    let mut next = config.clone();
    let mut resolved = false;
    for item in next.items.iter_mut().filter(|it| it.group == group) {
        if item.name == item_name {
            item.preserved = true;
        } else if item.preserved {
            item.preserved = false;
            resolved = true;
        }
    }
    Ok((next, resolved))
}

/// Repair duplicate preserved flags after deserialization.
///
/// Within each group, the preserved item with the lowest `sort_order` keeps
/// its flag and the rest are cleared. Returns the number of flags cleared.
pub fn reconcile_on_load(config: &Configuration) -> (Configuration, usize) {
    let mut next = config.clone();
    let mut fixed = 0;

    let kinds: Vec<GroupKind> = next.groups.iter().map(|g| g.kind).collect();
    for kind in kinds {
        let keeper = next
            .items
            .iter()
            .filter(|it| it.group == kind && it.preserved)
            .min_by_key(|it| it.sort_order)
            .map(|it| it.name.clone());
        let Some(keeper) = keeper else { continue };

        for item in next
            .items
            .iter_mut()
            .filter(|it| it.group == kind && it.preserved)
        {
            if item.name != keeper {
                item.preserved = false;
                fixed += 1;
            }
        }
    }

    if fixed > 0 {
        warn!(cleared = fixed, "cleared duplicate preserved flags on load");
    }
    (next, fixed)
}
