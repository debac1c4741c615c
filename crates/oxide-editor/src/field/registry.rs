//! Lookup of field kinds by type tag.

use std::collections::HashMap;
use std::fmt;

use super::{Field, FieldKind, TextKind};
use crate::error::{EditorError, Result};

/// Produces a fresh kind for a new field.
pub type KindFactory = Box<dyn Fn() -> Box<dyn FieldKind> + Send + Sync>;

/// Maps type tags to field kinds.
///
/// New variants are added by registering a factory, not by wrapping
/// existing ones.
pub struct FieldRegistry {
    factories: HashMap<String, KindFactory>,
}

impl fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.factories.keys().collect();
        tags.sort();
        f.debug_struct("FieldRegistry").field("tags", &tags).finish()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("string", TextKind::new);
        registry
    }
}

impl FieldRegistry {
    /// Creates a registry knowing the built-in `string` kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with no kinds.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a kind under `tag`, replacing any previous factory.
    pub fn register<K, F>(&mut self, tag: impl Into<String>, factory: F)
    where
        K: FieldKind + 'static,
        F: Fn() -> K + Send + Sync + 'static,
    {
        self.factories
            .insert(tag.into(), Box::new(move || -> Box<dyn FieldKind> {
                Box::new(factory())
            }));
    }

    /// Returns whether `tag` is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Creates a field of the kind registered under `tag`.
    pub fn create(
        &self,
        tag: &str,
        name: impl Into<String>,
        description: impl Into<String>,
        long_description: impl Into<String>,
    ) -> Result<Field> {
        let factory = self
            .factories
            .get(tag)
            .ok_or_else(|| EditorError::UnknownFieldType(tag.to_string()))?;
        Ok(Field::with_boxed_kind(
            name,
            description,
            long_description,
            factory(),
        ))
    }
}
