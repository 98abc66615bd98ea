//! Pattern assembly: project a configuration into the final rename string.
//!
//! Output order is fully determined by the dense sort orders: groups outer,
//! items inner, disabled entries skipped. The same configuration, separator
//! and runtime values always produce the same string, which is what makes
//! renames reproducible across runs.

use crate::config::{Configuration, Item};
use crate::constants::tokens;
use crate::dimension::{self, DimensionOptions};

/// Values supplied by the import collaborators for the current row/page.
///
/// A token whose value is absent renders as its literal name, so a pattern
/// can be previewed before any data is loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuntimeValues {
    pub order_number: Option<String>,
    pub material: Option<String>,
    pub quantity: Option<String>,
    pub process: Option<String>,
    pub pdf_width: f64,
    pub pdf_height: f64,
    pub dimension: DimensionOptions,
}

/// Assemble the rename pattern from all enabled groups and items.
pub fn generate(config: &Configuration, separator: &str, values: &RuntimeValues) -> String {
    let mut rendered = Vec::new();
    for group in config.sorted_groups() {
        if !group.enabled {
            continue;
        }
        for item in config.items_in(group.kind) {
            if !item.enabled {
                continue;
            }
            rendered.push(apply_prefix(&group.prefix, render_item(item, values)));
        }
    }
    rendered.join(separator)
}

/// Token text: the runtime value for known token names when supplied, the
/// dimension code for the reserved "Dimensions" token, the item name
/// otherwise.
fn render_item(item: &Item, values: &RuntimeValues) -> String {
    if item.name == tokens::DIMENSIONS {
        return dimension::render_with(values.pdf_width, values.pdf_height, &values.dimension);
    }
    let fill = match item.name.as_str() {
        tokens::ORDER_NUMBER => values.order_number.as_deref(),
        tokens::MATERIAL => values.material.as_deref(),
        tokens::QUANTITY => values.quantity.as_deref(),
        tokens::PROCESS => values.process.as_deref(),
        _ => None,
    };
    fill.unwrap_or(item.name.as_str()).to_string()
}

fn apply_prefix(prefix: &str, text: String) -> String {
    if prefix.is_empty() || text.starts_with(prefix) {
        text
    } else {
        format!("{prefix} {text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GroupKind;

    fn order_and_quantity() -> Configuration {
        // Two enabled groups: Order with "Order Number", Quantity with
        // "Quantity", everything else switched off
        let mut config = Configuration::full_feature_set();
        for group in &mut config.groups {
            group.enabled = matches!(group.kind, GroupKind::Order | GroupKind::Quantity);
        }
        for item in &mut config.items {
            item.enabled = matches!(item.name.as_str(), "Order Number" | "Quantity");
        }
        config
    }

    #[test]
    fn test_prefixes_and_separator_assembly() {
        let config = order_and_quantity();
        let pattern = generate(&config, "_", &RuntimeValues::default());
        assert_eq!(pattern, "&ID- Order Number_&DN- Quantity");
    }

    #[test]
    fn test_runtime_values_fill_tokens() {
        let config = order_and_quantity();
        let values = RuntimeValues {
            order_number: Some("A1024".to_string()),
            quantity: Some("500".to_string()),
            ..RuntimeValues::default()
        };
        assert_eq!(generate(&config, "_", &values), "&ID- A1024_&DN- 500");
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = order_and_quantity();
        let values = RuntimeValues {
            order_number: Some("A1024".to_string()),
            ..RuntimeValues::default()
        };
        assert_eq!(generate(&config, "_", &values), generate(&config, "_", &values));
    }

    #[test]
    fn test_disabled_group_hides_its_items() {
        let mut config = order_and_quantity();
        for group in &mut config.groups {
            if group.kind == GroupKind::Quantity {
                group.enabled = false;
            }
        }
        assert_eq!(
            generate(&config, "_", &RuntimeValues::default()),
            "&ID- Order Number"
        );
    }

    #[test]
    fn test_group_order_drives_output_order() {
        let config = order_and_quantity();
        let next = crate::reorder::move_group(&config, GroupKind::Order, GroupKind::Quantity).unwrap();
        assert_eq!(
            generate(&next, "_", &RuntimeValues::default()),
            "&DN- Quantity_&ID- Order Number"
        );
    }

    #[test]
    fn test_dimensions_token_renders_through_codec() {
        let mut config = Configuration::full_feature_set();
        for group in &mut config.groups {
            group.enabled = group.kind == GroupKind::Ungrouped;
        }
        for item in &mut config.items {
            item.enabled = item.name == "Dimensions";
        }
        let values = RuntimeValues {
            pdf_width: 103.4,
            pdf_height: 50.0,
            dimension: DimensionOptions {
                trim: 1.5,
                shape: "12".to_string(),
                ..DimensionOptions::default()
            },
            ..RuntimeValues::default()
        };
        assert_eq!(generate(&config, "_", &values), "100.4x47R12");
    }

    #[test]
    fn test_prefix_not_duplicated_when_already_present() {
        let mut config = order_and_quantity();
        for item in &mut config.items {
            if item.name == "Order Number" {
                item.name = "&ID- 55".to_string();
            }
        }
        // Token already carries the group prefix; nothing is prepended
        assert_eq!(
            generate(&config, "_", &RuntimeValues::default()),
            "&ID- 55_&DN- Quantity"
        );
    }

    #[test]
    fn test_empty_separator_concatenates() {
        let config = order_and_quantity();
        assert_eq!(
            generate(&config, "", &RuntimeValues::default()),
            "&ID- Order Number&DN- Quantity"
        );
    }
}
