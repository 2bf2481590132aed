//! Fixed vocabulary identifiers for exercise observations.
//!
//! Downstream consumers match on these strings exactly, so every URL, code
//! and sub-value name here is part of the output contract.

use crate::fhir::{CodeableConcept, Coding};

/// Base URI for HealthVault vocabularies and extension definitions.
pub const VOCABULARY_BASE_URI: &str = "http://healthvault.com/fhir/stu3/ValueSets/";

/// FHIR observation category code system.
pub const OBSERVATION_CATEGORY_SYSTEM: &str = "http://hl7.org/fhir/observation-category";
pub const VITAL_SIGNS: &str = "vital-signs";
pub const VITAL_SIGNS_DISPLAY: &str = "Vital Signs";

/// Vocabulary listing thing type ids.
pub const THING_TYPES: &str = "thing-types";
pub const EXERCISE_TYPE_ID: &str = "85a21ddb-db20-4c65-8d30-33c899ccf612";
pub const EXERCISE_DISPLAY: &str = "Exercise";

/// Vocabulary holding the exercise component codes.
pub const EXERCISE: &str = "exercise";
pub const EXERCISE_DISTANCE: &str = "exercise-distance";
pub const EXERCISE_DURATION: &str = "exercise-duration";
pub const EXERCISE_ACTIVITY: &str = "exercise-activity";

pub const EXERCISE_DETAIL: &str = "exercise-detail";
pub const EXERCISE_DETAIL_NAME: &str = "exercise-detail-name";
pub const EXERCISE_DETAIL_TYPE: &str = "exercise-detail-type";
pub const EXERCISE_DETAIL_VALUE: &str = "exercise-detail-value";

pub const EXERCISE_SEGMENT: &str = "exercise-segment";
pub const EXERCISE_SEGMENT_ACTIVITY: &str = "exercise-segment-activity";
pub const EXERCISE_SEGMENT_TITLE: &str = "exercise-segment-title";
pub const EXERCISE_SEGMENT_DURATION: &str = "exercise-segment-duration";
pub const EXERCISE_SEGMENT_DISTANCE: &str = "exercise-segment-distance";
pub const EXERCISE_SEGMENT_OFFSET: &str = "exercise-segment-offset";

pub const UNIT_METERS: &str = "m";
pub const UNIT_MINUTES: &str = "min";

/// Code system URL for a vocabulary, optionally qualified by its family.
pub fn vocabulary_url(name: &str, family: Option<&str>) -> String {
    match family {
        Some(family) if !family.is_empty() => format!("{VOCABULARY_BASE_URI}{family}/{name}"),
        _ => format!("{VOCABULARY_BASE_URI}{name}"),
    }
}

/// Extension definition URL for a named extension block.
pub fn extension_url(name: &str) -> String {
    format!("{VOCABULARY_BASE_URI}{name}")
}

/// The `vital-signs` observation category.
pub fn vital_signs_category() -> CodeableConcept {
    CodeableConcept::from_coding(Coding::new(
        OBSERVATION_CATEGORY_SYSTEM,
        VITAL_SIGNS,
        Some(VITAL_SIGNS_DISPLAY),
    ))
}

/// The primary observation code identifying an exercise thing.
pub fn exercise_code() -> CodeableConcept {
    CodeableConcept::from_coding(Coding::new(
        vocabulary_url(THING_TYPES, None),
        EXERCISE_TYPE_ID,
        Some(EXERCISE_DISPLAY),
    ))
}

/// Component code within the exercise vocabulary.
pub fn exercise_component_code(code: &str) -> CodeableConcept {
    CodeableConcept::from_coding(Coding::new(
        vocabulary_url(EXERCISE, None),
        code,
        None::<&str>,
    ))
}
