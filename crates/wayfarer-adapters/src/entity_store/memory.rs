//! In-memory entity store for testing.
//!
//! Stores raw JSON documents, so tests can seed invalid JSON and exercise
//! the unreadable-definition degrade path exactly like the file-backed
//! store.

use std::{
    collections::BTreeMap,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use wayfarer_core::{
    application::{ApplicationError, ports::EntityStore},
    domain::{EntityDefinition, ProjectSettings, naming},
    error::WayfarerResult,
};

/// In-memory store keyed by the capitalized entity name.
#[derive(Debug, Clone, Default)]
pub struct MemoryEntityStore {
    inner: Arc<RwLock<MemoryEntityStoreInner>>,
}

#[derive(Debug, Default)]
struct MemoryEntityStoreInner {
    definitions: BTreeMap<String, String>,
    settings: Option<String>,
}

impl MemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw document (testing helper).  Invalid JSON simulates a
    /// corrupt definition file.
    pub fn insert_raw(&self, name: &str, json: &str) {
        let mut inner = self.inner.write().unwrap();
        inner
            .definitions
            .insert(naming::upper_first(name), json.to_string());
    }

    /// The persisted JSON for an entity (testing helper).
    pub fn raw(&self, name: &str) -> Option<String> {
        let inner = self.inner.read().unwrap();
        inner.definitions.get(&naming::upper_first(name)).cloned()
    }
}

impl EntityStore for MemoryEntityStore {
    fn load(&self, name: &str) -> WayfarerResult<Option<EntityDefinition>> {
        let key = naming::upper_first(name);
        let inner = self.inner.read().unwrap();
        let Some(json) = inner.definitions.get(&key) else {
            return Ok(None);
        };
        let mut definition: EntityDefinition = serde_json::from_str(json).map_err(|_| {
            ApplicationError::DefinitionUnreadable {
                path: PathBuf::from(format!(".wayfarer/{key}.json")),
            }
        })?;
        definition.normalize(name);
        Ok(Some(definition))
    }

    fn save(&self, definition: &EntityDefinition) -> WayfarerResult<()> {
        let json = serde_json::to_string_pretty(definition).map_err(|e| {
            wayfarer_core::error::WayfarerError::Internal {
                message: format!("definition serialization failed: {e}"),
            }
        })?;
        let mut inner = self.inner.write().unwrap();
        inner
            .definitions
            .insert(definition.entity_class(), json);
        Ok(())
    }

    fn list(&self) -> WayfarerResult<Vec<String>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.definitions.keys().cloned().collect())
    }

    fn load_settings(&self) -> WayfarerResult<Option<ProjectSettings>> {
        let inner = self.inner.read().unwrap();
        let Some(json) = &inner.settings else {
            return Ok(None);
        };
        let settings = serde_json::from_str(json).map_err(|_| {
            ApplicationError::DefinitionUnreadable {
                path: PathBuf::from(".wayfarer/config.json"),
            }
        })?;
        Ok(Some(settings))
    }

    fn save_settings(&self, settings: &ProjectSettings) -> WayfarerResult<()> {
        let json = serde_json::to_string_pretty(settings).map_err(|e| {
            wayfarer_core::error::WayfarerError::Internal {
                message: format!("settings serialization failed: {e}"),
            }
        })?;
        let mut inner = self.inner.write().unwrap();
        inner.settings = Some(json);
        Ok(())
    }
}
