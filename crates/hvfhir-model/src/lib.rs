//! Data model for converting HealthVault things into FHIR resources.
//!
//! The [`thing`] module holds the vendor-side records as they arrive from the
//! upstream store, [`fhir`] holds the destination Observation shapes, and
//! [`vocab`] pins the fixed vocabulary identifiers shared by both sides.

pub mod error;
pub mod fhir;
pub mod thing;
pub mod vocab;

pub use error::{ModelError, Result};
pub use fhir::{
    CodeableConcept, Coding, ComponentValue, Extension, ExtensionValue, FhirDateTime, Meta,
    Narrative, NarrativeStatus, Observation, ObservationComponent, ObservationShell,
    ObservationStatus, Quantity, ResourceType,
};
pub use thing::{
    ApproximateDate, ApproximateDateTime, ApproximateTime, CodableValue, CodedValue, DetailMap,
    Exercise, ExerciseDetail, ExerciseSegment, StructuredMeasurement, Thing, ThingData, ThingKey,
    ThingKind,
};
