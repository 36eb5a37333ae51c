//! JSON-file entity store under the project's hidden `.wayfarer/` directory.
//!
//! One pretty-printed JSON file per entity, named by the entity's
//! capitalized identifier, plus `config.json` for the project settings.

use std::path::{Path, PathBuf};

use tracing::debug;

use wayfarer_core::{
    application::{ApplicationError, ports::EntityStore},
    domain::{EntityDefinition, ProjectSettings, naming},
    error::WayfarerResult,
};

use super::{CONFIG_DIR, SETTINGS_FILE};

/// Production entity store reading/writing the hidden config directory.
#[derive(Debug, Clone)]
pub struct JsonEntityStore {
    config_dir: PathBuf,
}

impl JsonEntityStore {
    /// Create a store for the project rooted at `project_root`.
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            config_dir: project_root.as_ref().join(CONFIG_DIR),
        }
    }

    fn definition_path(&self, name: &str) -> PathBuf {
        self.config_dir
            .join(format!("{}.json", naming::upper_first(name)))
    }

    fn write_json(&self, path: &Path, json: String) -> WayfarerResult<()> {
        std::fs::create_dir_all(&self.config_dir).map_err(|e| {
            ApplicationError::StoreWriteFailed {
                path: self.config_dir.clone(),
                reason: e.to_string(),
            }
        })?;
        std::fs::write(path, json).map_err(|e| {
            ApplicationError::StoreWriteFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl EntityStore for JsonEntityStore {
    fn load(&self, name: &str) -> WayfarerResult<Option<EntityDefinition>> {
        let path = self.definition_path(name);
        if !path.is_file() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .map_err(|_| ApplicationError::DefinitionUnreadable { path: path.clone() })?;
        let mut definition: EntityDefinition = serde_json::from_str(&contents)
            .map_err(|_| ApplicationError::DefinitionUnreadable { path: path.clone() })?;
        definition.normalize(name);
        debug!(path = %path.display(), fields = definition.fields.len(), "Definition loaded");
        Ok(Some(definition))
    }

    fn save(&self, definition: &EntityDefinition) -> WayfarerResult<()> {
        let path = self.definition_path(&definition.name);
        let json = serde_json::to_string_pretty(definition).map_err(|e| {
            wayfarer_core::error::WayfarerError::Internal {
                message: format!("definition serialization failed: {e}"),
            }
        })?;
        self.write_json(&path, json)
    }

    fn list(&self) -> WayfarerResult<Vec<String>> {
        let entries = match std::fs::read_dir(&self.config_dir) {
            Ok(entries) => entries,
            // No config directory yet means no entities.
            Err(_) => return Ok(Vec::new()),
        };
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let path = entry.path();
                let stem = path.file_stem()?.to_str()?.to_string();
                (path.extension()?.to_str()? == "json" && format!("{stem}.json") != SETTINGS_FILE)
                    .then_some(stem)
            })
            .collect();
        names.sort();
        Ok(names)
    }

    fn load_settings(&self) -> WayfarerResult<Option<ProjectSettings>> {
        let path = self.config_dir.join(SETTINGS_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .map_err(|_| ApplicationError::DefinitionUnreadable { path: path.clone() })?;
        let settings: ProjectSettings = serde_json::from_str(&contents)
            .map_err(|_| ApplicationError::DefinitionUnreadable { path })?;
        Ok(Some(settings))
    }

    fn save_settings(&self, settings: &ProjectSettings) -> WayfarerResult<()> {
        let path = self.config_dir.join(SETTINGS_FILE);
        let json = serde_json::to_string_pretty(settings).map_err(|e| {
            wayfarer_core::error::WayfarerError::Internal {
                message: format!("settings serialization failed: {e}"),
            }
        })?;
        self.write_json(&path, json)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::domain::{Field, FieldType};
    use wayfarer_core::error::WayfarerError;

    fn store() -> (tempfile::TempDir, JsonEntityStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonEntityStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn load_of_unknown_entity_is_none() {
        let (_dir, store) = store();
        assert!(store.load("order").unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = store();
        let mut def = EntityDefinition::new("order");
        def.add_field(Field::new("amount", FieldType::BigDecimal))
            .unwrap();
        store.save(&def).unwrap();

        let loaded = store.load("order").unwrap().unwrap();
        assert_eq!(loaded, def);
    }

    #[test]
    fn definition_file_is_named_by_capitalized_entity() {
        let (dir, store) = store();
        store.save(&EntityDefinition::new("order")).unwrap();
        assert!(dir.path().join(".wayfarer/Order.json").is_file());
    }

    #[test]
    fn unparseable_definition_is_reported_as_unreadable() {
        let (dir, store) = store();
        std::fs::create_dir_all(dir.path().join(".wayfarer")).unwrap();
        std::fs::write(dir.path().join(".wayfarer/Order.json"), "{not json").unwrap();

        let err = store.load("order").unwrap_err();
        assert!(matches!(
            err,
            WayfarerError::Application(ApplicationError::DefinitionUnreadable { .. })
        ));
    }

    #[test]
    fn list_skips_the_settings_file() {
        let (_dir, store) = store();
        store.save(&EntityDefinition::new("order")).unwrap();
        store.save(&EntityDefinition::new("customer")).unwrap();
        store
            .save_settings(&ProjectSettings::new("myShop"))
            .unwrap();

        assert_eq!(store.list().unwrap(), vec!["Customer", "Order"]);
    }

    #[test]
    fn settings_round_trip() {
        let (_dir, store) = store();
        assert!(store.load_settings().unwrap().is_none());

        let mut settings = ProjectSettings::new("myShop");
        settings.aws_region = Some("eu-west-1".into());
        store.save_settings(&settings).unwrap();
        assert_eq!(store.load_settings().unwrap(), Some(settings));
    }
}
