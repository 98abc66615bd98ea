//! Named preset snapshots of the configuration.
//!
//! Presets live in two namespaces: built-ins are synthesized from the group
//! catalog on demand and can never be deleted; custom presets are snapshots
//! of the current configuration stored under a user-supplied name, one
//! JSON blob per `Preset_<name>` key plus an index blob of custom names.

use tracing::{info, warn};

use crate::config::Configuration;
use crate::conflict;
use crate::constants::{presets, storage};
use crate::error::{PersistError, PresetError};
use crate::store::SettingsStore;

/// Whether `name` belongs to the built-in namespace.
pub fn is_builtin(name: &str) -> bool {
    name == presets::FULL_FEATURE_SET
}

fn preset_key(name: &str) -> String {
    format!("{}{}", storage::PRESET_KEY_PREFIX, name)
}

/// Preset CRUD plus the active-configuration blob, over any settings store.
pub struct PresetStore<S> {
    store: S,
}

impl<S: SettingsStore> PresetStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Snapshot `config` under `name`, overwriting any previous snapshot.
    ///
    /// Compact encoding for built-in names, readable encoding for user
    /// presets. The name is indexed unless already present.
    pub fn save(&mut self, name: &str, config: &Configuration) -> Result<(), PresetError> {
        let encoded = if is_builtin(name) {
            serde_json::to_string(config)
        } else {
            serde_json::to_string_pretty(config)
        }
        .map_err(|source| PersistError::Encode { source })?;
        self.store.set(&preset_key(name), encoded);

        if !is_builtin(name) {
            let mut index = self.custom_names();
            if !index.iter().any(|n| n == name) {
                index.push(name.to_string());
                self.write_index(&index)?;
            }
        }
        self.store.save()?;
        info!(preset = %name, "saved preset");
        Ok(())
    }

    /// Load a preset by name.
    ///
    /// The built-in "Full Feature Set" is synthesized from catalog defaults
    /// rather than read from storage. Stored configurations are normalized
    /// and reconciled before they are returned.
    pub fn load(&self, name: &str) -> Result<Configuration, PresetError> {
        if name == presets::FULL_FEATURE_SET {
            info!(preset = %name, "synthesizing built-in preset from catalog defaults");
            return Ok(Configuration::full_feature_set());
        }
        let blob = self
            .store
            .get(&preset_key(name))
            .ok_or_else(|| PresetError::NotFound {
                name: name.to_string(),
            })?;
        let config: Configuration =
            serde_json::from_str(&blob).map_err(|e| PresetError::Corrupt {
                name: name.to_string(),
                message: e.to_string(),
            })?;
        Ok(restore(config))
    }

    /// Delete a custom preset: blob and index entry.
    pub fn delete(&mut self, name: &str) -> Result<(), PresetError> {
        if is_builtin(name) {
            return Err(PresetError::CannotDeleteBuiltin {
                name: name.to_string(),
            });
        }
        let mut index = self.custom_names();
        let indexed = index.iter().position(|n| n == name);
        if indexed.is_none() && self.store.get(&preset_key(name)).is_none() {
            return Err(PresetError::NotFound {
                name: name.to_string(),
            });
        }
        if let Some(pos) = indexed {
            index.remove(pos);
            self.write_index(&index)?;
        }
        self.store.remove(&preset_key(name));
        self.store.save()?;
        info!(preset = %name, "deleted preset");
        Ok(())
    }

    /// Built-in names first, then custom names in the order they were
    /// indexed, de-duplicated, with legacy built-in names filtered out.
    pub fn list_names(&self) -> Vec<String> {
        let mut names = vec![presets::FULL_FEATURE_SET.to_string()];
        for name in self.custom_names() {
            if presets::LEGACY_BUILTINS.contains(&name.as_str()) {
                continue;
            }
            if names.iter().any(|n| *n == name) {
                continue;
            }
            names.push(name);
        }
        names
    }

    /// Persist the active configuration outside of any named preset.
    pub fn save_current(&mut self, config: &Configuration) -> Result<(), PersistError> {
        let encoded = serde_json::to_string_pretty(config)
            .map_err(|source| PersistError::Encode { source })?;
        self.store.set(storage::CURRENT_CONFIG_KEY, encoded);
        self.store.save()
    }

    /// Load the active configuration, falling back to catalog defaults when
    /// nothing is stored or the stored blob does not deserialize.
    pub fn load_current(&self) -> Configuration {
        let Some(blob) = self.store.get(storage::CURRENT_CONFIG_KEY) else {
            info!("no active configuration stored, using catalog defaults");
            return Configuration::full_feature_set();
        };
        match serde_json::from_str::<Configuration>(&blob) {
            Ok(config) => restore(config),
            Err(e) => {
                warn!(error = %e, "active configuration is corrupt, falling back to catalog defaults");
                Configuration::full_feature_set()
            }
        }
    }

    fn custom_names(&self) -> Vec<String> {
        let Some(blob) = self.store.get(storage::CUSTOM_PRESET_INDEX_KEY) else {
            return Vec::new();
        };
        serde_json::from_str(&blob).unwrap_or_else(|e| {
            warn!(error = %e, "custom preset index is corrupt, treating as empty");
            Vec::new()
        })
    }

    fn write_index(&mut self, names: &[String]) -> Result<(), PersistError> {
        let encoded =
            serde_json::to_string(names).map_err(|source| PersistError::Encode { source })?;
        self.store.set(storage::CUSTOM_PRESET_INDEX_KEY, encoded);
        Ok(())
    }
}

/// Every deserialized configuration is normalized and reconciled before use.
fn restore(mut config: Configuration) -> Configuration {
    config.normalize();
    let (config, _fixed) = conflict::reconcile_on_load(&config);
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GroupKind;
    use crate::reorder;
    use crate::store::MemoryStore;

    fn store() -> PresetStore<MemoryStore> {
        PresetStore::new(MemoryStore::new())
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut presets = store();
        let config = Configuration::full_feature_set();
        let config = reorder::move_group(&config, GroupKind::Order, GroupKind::Quantity).unwrap();

        presets.save("Labels", &config).unwrap();
        let restored = presets.load("Labels").unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_builtin_is_synthesized_not_read() {
        let presets = store();
        // Nothing was ever saved, the built-in still loads
        let config = presets.load("Full Feature Set").unwrap();
        assert_eq!(config, Configuration::full_feature_set());
    }

    #[test]
    fn test_load_missing_preset() {
        let presets = store();
        assert!(matches!(
            presets.load("Labels"),
            Err(PresetError::NotFound { .. })
        ));
    }

    #[test]
    fn test_load_corrupt_preset() {
        let mut presets = store();
        presets.store.set("Preset_Labels", "{broken".to_string());
        assert!(matches!(
            presets.load("Labels"),
            Err(PresetError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_load_repairs_duplicate_preserved_flags() {
        let mut presets = store();
        let mut config = Configuration::full_feature_set();
        for item in &mut config.items {
            if matches!(item.name.as_str(), "Material" | "Quantity") {
                item.group = GroupKind::Order;
                item.preserved = true;
            }
        }
        config.rerank_items_in(GroupKind::Order);
        presets.save("Conflicted", &config).unwrap();

        let restored = presets.load("Conflicted").unwrap();
        let preserved = restored
            .items_in(GroupKind::Order)
            .iter()
            .filter(|it| it.preserved)
            .count();
        assert_eq!(preserved, 1);
    }

    #[test]
    fn test_delete_builtin_is_rejected() {
        let mut presets = store();
        assert!(matches!(
            presets.delete("Full Feature Set"),
            Err(PresetError::CannotDeleteBuiltin { .. })
        ));
    }

    #[test]
    fn test_delete_unknown_preset() {
        let mut presets = store();
        assert!(matches!(
            presets.delete("Labels"),
            Err(PresetError::NotFound { .. })
        ));
    }

    #[test]
    fn test_delete_removes_blob_and_listing() {
        let mut presets = store();
        presets.save("Labels", &Configuration::full_feature_set()).unwrap();
        presets.delete("Labels").unwrap();

        assert!(matches!(
            presets.load("Labels"),
            Err(PresetError::NotFound { .. })
        ));
        assert_eq!(presets.list_names(), vec!["Full Feature Set".to_string()]);
    }

    #[test]
    fn test_list_names_order_and_dedup() {
        let mut presets = store();
        let config = Configuration::full_feature_set();
        presets.save("Boxes", &config).unwrap();
        presets.save("Labels", &config).unwrap();
        presets.save("Boxes", &config).unwrap();

        assert_eq!(
            presets.list_names(),
            vec![
                "Full Feature Set".to_string(),
                "Boxes".to_string(),
                "Labels".to_string()
            ]
        );
    }

    #[test]
    fn test_list_names_filters_legacy_builtins() {
        let mut presets = store();
        // A stale index from an earlier release still lists removed built-ins
        presets.store.set(
            "CustomPresetNames",
            r#"["Standard Layout", "Labels", "Minimal"]"#.to_string(),
        );
        assert_eq!(
            presets.list_names(),
            vec!["Full Feature Set".to_string(), "Labels".to_string()]
        );
    }

    #[test]
    fn test_current_configuration_round_trip() {
        let mut presets = store();
        let config = Configuration::full_feature_set();
        let config = reorder::move_group(&config, GroupKind::Remark, GroupKind::Order).unwrap();

        presets.save_current(&config).unwrap();
        assert_eq!(presets.load_current(), config);
    }

    #[test]
    fn test_current_configuration_corrupt_falls_back() {
        let mut presets = store();
        presets.store.set("CurrentConfiguration", "][".to_string());
        assert_eq!(presets.load_current(), Configuration::full_feature_set());
    }
}
