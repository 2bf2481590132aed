//! Converter trait and registry.
//!
//! Each supported thing kind has one [`ThingConverter`]. The
//! [`ConverterRegistry`] resolves converters by [`ThingKind`] and runs them
//! against the observation shell built from the thing envelope.
//!
//! # Example
//!
//! ```ignore
//! use hvfhir_convert::{default_registry, VocabularyTranslator};
//!
//! let translator = VocabularyTranslator::new();
//! let observation = default_registry().convert(&thing, &translator)?;
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use hvfhir_model::{Observation, ObservationShell, Thing, ThingKind};
use tracing::debug_span;

use crate::error::{ConvertError, Result};
use crate::exercise::ExerciseConverter;
use crate::shell::observation_shell;
use crate::translate::CodeTranslator;

/// Conversion logic for one kind of thing.
///
/// # Implementing a Converter
///
/// 1. Implement this trait for a unit struct.
/// 2. Register it in [`build_default_registry`] or on a custom registry.
pub trait ThingConverter: Send + Sync {
    /// The thing kind this converter handles.
    fn kind(&self) -> ThingKind;

    /// Returns a human-readable description of the converter.
    fn description(&self) -> &'static str {
        "Thing converter"
    }

    /// Converts `thing` into an observation built on `shell`.
    ///
    /// # Errors
    ///
    /// Returns an error if the thing is of another kind, violates a
    /// precondition of the mapping, or a code cannot be translated.
    fn convert(
        &self,
        thing: &Thing,
        shell: ObservationShell,
        translator: &dyn CodeTranslator,
    ) -> Result<Observation>;
}

/// Registry of converters indexed by thing kind.
///
/// The registry is immutable once shared and safe to use across threads.
/// The default registry is cached using [`OnceLock`].
#[derive(Default)]
pub struct ConverterRegistry {
    converters: HashMap<ThingKind, Box<dyn ThingConverter>>,
}

impl ConverterRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a converter for its kind.
    ///
    /// If a converter for this kind is already registered, it is replaced.
    pub fn register(&mut self, converter: Box<dyn ThingConverter>) {
        self.converters.insert(converter.kind(), converter);
    }

    /// Gets the converter for a kind.
    pub fn get(&self, kind: ThingKind) -> Option<&dyn ThingConverter> {
        self.converters.get(&kind).map(|c| c.as_ref())
    }

    /// Returns the number of registered converters.
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Returns true if no converters are registered.
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Registered kinds in a stable order.
    pub fn kinds(&self) -> Vec<ThingKind> {
        let mut kinds: Vec<ThingKind> = self.converters.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Converts a thing with the converter registered for its kind.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnsupportedThing`] when no converter handles
    /// the thing's kind; otherwise propagates the converter's error.
    pub fn convert(&self, thing: &Thing, translator: &dyn CodeTranslator) -> Result<Observation> {
        let kind = thing.kind();
        let span = debug_span!(
            "convert_thing",
            kind = %kind,
            id = thing.key.as_ref().map_or("-", |key| key.id.as_str())
        );
        let _guard = span.enter();
        let converter = self
            .get(kind)
            .ok_or(ConvertError::UnsupportedThing { kind })?;
        converter.convert(thing, observation_shell(thing), translator)
    }
}

static DEFAULT_REGISTRY: OnceLock<ConverterRegistry> = OnceLock::new();

/// Returns the registry with every built-in converter.
///
/// The registry is built on first access.
pub fn default_registry() -> &'static ConverterRegistry {
    DEFAULT_REGISTRY.get_or_init(build_default_registry)
}

/// Builds a fresh registry with every built-in converter.
pub fn build_default_registry() -> ConverterRegistry {
    let mut registry = ConverterRegistry::new();
    registry.register(Box::new(ExerciseConverter));
    registry
}
