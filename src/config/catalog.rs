//! The group catalog: the fixed set of token groups and their defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::tokens;

/// Closed set of token group kinds.
///
/// `Ungrouped` is special: it is always present in a configuration, can never
/// be deleted or dragged, and absorbs items whose own group is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    Order,
    Material,
    Quantity,
    Process,
    Customer,
    Remark,
    Row,
    Column,
    Ungrouped,
}

impl GroupKind {
    /// All kinds in catalog order. `Ungrouped` stays last as the fixed anchor.
    pub const ALL: [GroupKind; 9] = [
        GroupKind::Order,
        GroupKind::Material,
        GroupKind::Quantity,
        GroupKind::Process,
        GroupKind::Customer,
        GroupKind::Remark,
        GroupKind::Row,
        GroupKind::Column,
        GroupKind::Ungrouped,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            GroupKind::Order => "Order",
            GroupKind::Material => "Material",
            GroupKind::Quantity => "Quantity",
            GroupKind::Process => "Process",
            GroupKind::Customer => "Customer",
            GroupKind::Remark => "Remark",
            GroupKind::Row => "Row",
            GroupKind::Column => "Column",
            GroupKind::Ungrouped => "Ungrouped",
        }
    }

    /// Default filename prefix prepended to the group's rendered tokens.
    /// May be empty; the generator adds no prefix in that case.
    pub fn default_prefix(self) -> &'static str {
        match self {
            GroupKind::Order => "&ID-",
            GroupKind::Material => "&MT-",
            GroupKind::Quantity => "&DN-",
            GroupKind::Process => "&PR-",
            GroupKind::Customer => "&CS-",
            GroupKind::Remark => "&RM-",
            GroupKind::Row | GroupKind::Column | GroupKind::Ungrouped => "",
        }
    }

    /// Parse a kind from its display name, case-insensitively.
    /// Used at the CLI seam where group names arrive as plain text.
    pub fn from_name(name: &str) -> Option<GroupKind> {
        GroupKind::ALL
            .into_iter()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Default item roster: token name and owning group, in catalog order.
///
/// "Dimensions" starts out unassigned; it is the reserved token the generator
/// replaces with a dimension-code rendering.
pub const DEFAULT_ITEMS: [(&str, GroupKind); 9] = [
    (tokens::ORDER_NUMBER, GroupKind::Order),
    (tokens::MATERIAL, GroupKind::Material),
    (tokens::QUANTITY, GroupKind::Quantity),
    (tokens::PROCESS, GroupKind::Process),
    (tokens::CUSTOMER, GroupKind::Customer),
    (tokens::REMARK, GroupKind::Remark),
    (tokens::ROW, GroupKind::Row),
    (tokens::COLUMN, GroupKind::Column),
    (tokens::DIMENSIONS, GroupKind::Ungrouped),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_dense_and_anchored() {
        assert_eq!(GroupKind::ALL.len(), 9);
        assert_eq!(GroupKind::ALL.last(), Some(&GroupKind::Ungrouped));
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(GroupKind::from_name("order"), Some(GroupKind::Order));
        assert_eq!(GroupKind::from_name(" MATERIAL "), Some(GroupKind::Material));
        assert_eq!(GroupKind::from_name("nope"), None);
    }

    #[test]
    fn test_default_items_reference_catalog_groups() {
        for (name, group) in DEFAULT_ITEMS {
            assert!(!name.is_empty());
            assert!(GroupKind::ALL.contains(&group));
        }
    }
}
