//! Insertion-based reorder operations.
//!
//! The host UI collapses a whole drag-and-drop lifecycle into a single call
//! here, passing the dragged and target identifiers. The dragged entry is
//! removed and re-inserted adjacent to the target: after the target when it
//! started above it (downward drag), before the target otherwise. This is
//! insertion, not an index swap. Sort orders are re-ranked densely afterwards.

use tracing::debug;

use crate::config::{Configuration, GroupKind};
use crate::error::EngineError;

/// Move `dragged` next to `target` in the group ordering.
///
/// Moving a group onto itself is a no-op; moving `Ungrouped` is rejected
/// since it must stay the fixed anchor.
pub fn move_group(
    config: &Configuration,
    dragged: GroupKind,
    target: GroupKind,
) -> Result<Configuration, EngineError> {
    if dragged == GroupKind::Ungrouped {
        return Err(EngineError::InvalidOperation(
            "the Ungrouped group is a fixed anchor and cannot be moved".to_string(),
        ));
    }
    if dragged == target {
        return Ok(config.clone());
    }

    let ranked: Vec<GroupKind> = config.sorted_groups().iter().map(|g| g.kind).collect();
    let from = ranked
        .iter()
        .position(|&k| k == dragged)
        .ok_or_else(|| EngineError::InvalidOperation(format!("unknown group: {dragged}")))?;
    let to = ranked
        .iter()
        .position(|&k| k == target)
        .ok_or_else(|| EngineError::InvalidOperation(format!("unknown group: {target}")))?;

    let mut order = ranked;
    order.remove(from);
    // Removing the dragged entry shifts the target left by one on a downward
    // drag. Insert after the target when dragging down, before it when
    // dragging up.
    let target_pos = if from < to { to - 1 } else { to };
    let insert_at = if from < to { target_pos + 1 } else { target_pos };
    order.insert(insert_at, dragged);

    debug!(dragged = %dragged, target = %target, from = from, to = to, "moved group");

    let mut next = config.clone();
    for (rank, kind) in order.into_iter().enumerate() {
        if let Some(group) = next.groups.iter_mut().find(|g| g.kind == kind) {
            group.sort_order = rank as u32;
        }
    }
    Ok(next)
}

/// Reassign an item to `target_group`, appending it at the end of that
/// group's ordering, and re-rank both the source and destination orderings.
pub fn move_item_to_group(
    config: &Configuration,
    item_name: &str,
    target_group: GroupKind,
) -> Result<Configuration, EngineError> {
    let source_group = config
        .item(item_name)
        .map(|it| it.group)
        .ok_or_else(|| EngineError::InvalidOperation(format!("unknown item: {item_name}")))?;

    let mut next = config.clone();
    let end = next.items.iter().filter(|it| it.group == target_group).count() as u32;
    if let Some(item) = next.items.iter_mut().find(|it| it.name == item_name) {
        item.group = target_group;
        item.sort_order = end;
    }
    next.rerank_items_in(source_group);
    next.rerank_items_in(target_group);

    debug!(item = %item_name, from = %source_group, to = %target_group, "moved item between groups");
    Ok(next)
}

/// Move `dragged_item` next to `target_item` inside their shared group,
/// with the same insertion rule as [`move_group`].
pub fn move_item_within_group(
    config: &Configuration,
    dragged_item: &str,
    target_item: &str,
) -> Result<Configuration, EngineError> {
    if dragged_item == target_item {
        return Ok(config.clone());
    }

    let dragged = config
        .item(dragged_item)
        .ok_or_else(|| EngineError::InvalidOperation(format!("unknown item: {dragged_item}")))?;
    let target = config
        .item(target_item)
        .ok_or_else(|| EngineError::InvalidOperation(format!("unknown item: {target_item}")))?;
    if dragged.group != target.group {
        return Err(EngineError::InvalidOperation(format!(
            "items '{dragged_item}' and '{target_item}' are not in the same group"
        )));
    }
    let group = dragged.group;

    let ranked: Vec<String> = config
        .items_in(group)
        .iter()
        .map(|it| it.name.clone())
        .collect();
    // Both positions exist: the items were just looked up in this group.
    let from = ranked.iter().position(|n| n == dragged_item).unwrap_or(0);
    let to = ranked.iter().position(|n| n == target_item).unwrap_or(0);

    let mut order = ranked;
    order.remove(from);
    let target_pos = if from < to { to - 1 } else { to };
    let insert_at = if from < to { target_pos + 1 } else { target_pos };
    order.insert(insert_at, dragged_item.to_string());

    debug!(dragged = %dragged_item, target = %target_item, group = %group, "moved item within group");

    let mut next = config.clone();
    for (rank, name) in order.into_iter().enumerate() {
        if let Some(item) = next.items.iter_mut().find(|it| it.name == name) {
            item.sort_order = rank as u32;
        }
    }
    Ok(next)
}
