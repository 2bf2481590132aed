//! Conversion of HealthVault things into FHIR Observation resources.
//!
//! Converters are pure: they read a [`Thing`](hvfhir_model::Thing), consult a
//! [`CodeTranslator`] for coded fields and return a new observation. No state
//! is shared between calls, so independent things may be converted from any
//! number of threads.

pub mod error;
pub mod exercise;
pub mod registry;
pub mod shell;
pub mod translate;

pub use error::{ConvertError, Result, TranslateError};
pub use exercise::{
    ExerciseConverter, detail_extension, effective_date_time, segment_extension,
};
pub use registry::{ConverterRegistry, ThingConverter, build_default_registry, default_registry};
pub use shell::observation_shell;
pub use translate::{CodeTranslator, VocabularyConfig, VocabularyTranslator};

use hvfhir_model::{Observation, Thing};

/// Converts a thing using the default registry.
///
/// # Errors
///
/// See [`ConverterRegistry::convert`].
pub fn convert_thing(thing: &Thing, translator: &dyn CodeTranslator) -> Result<Observation> {
    default_registry().convert(thing, translator)
}
