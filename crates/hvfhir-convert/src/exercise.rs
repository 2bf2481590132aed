//! Exercise thing to FHIR Observation conversion.
//!
//! | Exercise field | Observation element |
//! |----------------|---------------------|
//! | (fixed) | `category` = vital-signs, `code` = exercise thing type |
//! | `distance` | component `exercise-distance`, quantity in `m` |
//! | `duration` | component `exercise-duration`, quantity in `min` |
//! | `title` | `text.div`, verbatim |
//! | `when` | `effectiveDateTime` |
//! | `activity` | component `exercise-activity`, codeable concept |
//! | `details` | one `exercise-detail` extension per entry |
//! | `segments` | one `exercise-segment` extension per segment |
//!
//! Components and extensions are collected first and the observation is
//! assembled once at the end, so a failed conversion never yields a partially
//! filled resource.

use hvfhir_model::vocab;
use hvfhir_model::{
    ApproximateDateTime, CodableValue, ComponentValue, DetailMap, Exercise, ExerciseDetail,
    ExerciseSegment, Extension, ExtensionValue, FhirDateTime, Narrative, Observation,
    ObservationComponent, ObservationShell, Quantity, ResourceType, Thing, ThingData, ThingKind,
};
use tracing::{debug, trace};

use crate::error::{ConvertError, Result};
use crate::registry::ThingConverter;
use crate::translate::CodeTranslator;

/// Converter for [`ThingKind::Exercise`] things.
pub struct ExerciseConverter;

impl ExerciseConverter {
    /// Converts an exercise into an observation built on `shell`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::MissingUnits`] when a detail measurement has
    /// no unit code, and propagates any translator failure unchanged.
    pub fn convert_exercise(
        exercise: &Exercise,
        shell: ObservationShell,
        translator: &dyn CodeTranslator,
    ) -> Result<Observation> {
        let mut component = Vec::new();

        if let Some(distance) = exercise.distance {
            component.push(ObservationComponent::new(
                vocab::exercise_component_code(vocab::EXERCISE_DISTANCE),
                ComponentValue::Quantity(Quantity::new(distance, vocab::UNIT_METERS)),
            ));
        }

        if let Some(duration) = exercise.duration {
            component.push(ObservationComponent::new(
                vocab::exercise_component_code(vocab::EXERCISE_DURATION),
                ComponentValue::Quantity(Quantity::new(duration, vocab::UNIT_MINUTES)),
            ));
        }

        let activity = translator.translate(&exercise.activity, None)?;
        component.push(ObservationComponent::new(
            vocab::exercise_component_code(vocab::EXERCISE_ACTIVITY),
            ComponentValue::CodeableConcept(activity),
        ));

        let mut extension = detail_extensions(&exercise.details, translator)?;
        for segment in &exercise.segments {
            extension.push(segment_extension(segment, translator)?);
        }

        debug!(
            components = component.len(),
            details = exercise.details.len(),
            segments = exercise.segments.len(),
            "converted exercise"
        );

        Ok(Observation {
            resource_type: ResourceType::Observation,
            id: shell.id,
            meta: shell.meta,
            text: Some(Narrative::from_text(exercise.title.clone())),
            extension,
            status: shell.status,
            category: vec![vocab::vital_signs_category()],
            code: vocab::exercise_code(),
            effective_date_time: Some(effective_date_time(&exercise.when)),
            component,
        })
    }
}

impl ThingConverter for ExerciseConverter {
    fn kind(&self) -> ThingKind {
        ThingKind::Exercise
    }

    fn description(&self) -> &'static str {
        "Exercise session with segments and detail measurements"
    }

    fn convert(
        &self,
        thing: &Thing,
        shell: ObservationShell,
        translator: &dyn CodeTranslator,
    ) -> Result<Observation> {
        match &thing.item {
            ThingData::Exercise(exercise) => Self::convert_exercise(exercise, shell, translator),
            other => Err(ConvertError::KindMismatch {
                expected: ThingKind::Exercise,
                actual: other.kind(),
            }),
        }
    }
}

/// Composes the effective time, defaulting month and day to 1 and seconds to 0.
///
/// The result is not checked against the calendar and carries no offset.
pub fn effective_date_time(when: &ApproximateDateTime) -> FhirDateTime {
    FhirDateTime::new(
        when.date.year,
        when.date.month.unwrap_or(1),
        when.date.day.unwrap_or(1),
        when.time.hour,
        when.time.minute,
        when.time.second.unwrap_or(0),
    )
}

/// Builds the `exercise-detail` extension for one detail entry.
///
/// The detail type is translated from a codable value whose text is the
/// name's own code. That mirrors how detail types have always been emitted
/// and downstream consumers depend on it.
pub fn detail_extension(
    key: &str,
    detail: &ExerciseDetail,
    translator: &dyn CodeTranslator,
) -> Result<Extension> {
    let name = CodableValue::new(detail.name.value.clone(), detail.name.clone());
    let detail_type = translator.translate(&name, None)?;
    let unit = detail
        .value
        .units
        .first_code()
        .ok_or_else(|| ConvertError::MissingUnits {
            detail: key.to_string(),
        })?;

    trace!(detail = key, unit = %unit.value, "built exercise detail extension");

    Ok(Extension::complex(
        vocab::extension_url(vocab::EXERCISE_DETAIL),
        vec![
            Extension::value(
                vocab::EXERCISE_DETAIL_NAME,
                ExtensionValue::String(key.to_string()),
            ),
            Extension::value(
                vocab::EXERCISE_DETAIL_TYPE,
                ExtensionValue::CodeableConcept(detail_type),
            ),
            Extension::value(
                vocab::EXERCISE_DETAIL_VALUE,
                ExtensionValue::Quantity(Quantity::new(detail.value.value, unit.value.clone())),
            ),
        ],
    ))
}

fn detail_extensions(
    details: &DetailMap,
    translator: &dyn CodeTranslator,
) -> Result<Vec<Extension>> {
    details
        .iter()
        .map(|(key, detail)| detail_extension(key, detail, translator))
        .collect()
}

/// Builds the `exercise-segment` extension for one segment.
///
/// Only the activity is always present; every other sub-value appears only
/// when the segment carries it. Nested details follow the scalar sub-values.
pub fn segment_extension(
    segment: &ExerciseSegment,
    translator: &dyn CodeTranslator,
) -> Result<Extension> {
    let mut extension = vec![Extension::value(
        vocab::EXERCISE_SEGMENT_ACTIVITY,
        ExtensionValue::CodeableConcept(translator.translate(&segment.activity, None)?),
    )];

    if let Some(title) = segment.title.as_deref().filter(|t| !t.is_empty()) {
        extension.push(Extension::value(
            vocab::EXERCISE_SEGMENT_TITLE,
            ExtensionValue::String(title.to_string()),
        ));
    }

    if let Some(duration) = segment.duration {
        extension.push(Extension::value(
            vocab::EXERCISE_SEGMENT_DURATION,
            ExtensionValue::Decimal(duration),
        ));
    }

    if let Some(distance) = segment.distance {
        extension.push(Extension::value(
            vocab::EXERCISE_SEGMENT_DISTANCE,
            ExtensionValue::Quantity(Quantity::new(distance, vocab::UNIT_METERS)),
        ));
    }

    if let Some(offset) = segment.offset {
        extension.push(Extension::value(
            vocab::EXERCISE_SEGMENT_OFFSET,
            ExtensionValue::Decimal(offset),
        ));
    }

    if let Some(details) = &segment.details {
        extension.extend(detail_extensions(details, translator)?);
    }

    trace!(sub_values = extension.len(), "built exercise segment extension");

    Ok(Extension::complex(
        vocab::extension_url(vocab::EXERCISE_SEGMENT),
        extension,
    ))
}

#[cfg(test)]
mod tests {
    use hvfhir_model::{ApproximateDate, ApproximateTime, CodedValue, StructuredMeasurement};

    use super::*;
    use crate::translate::VocabularyTranslator;

    #[test]
    fn effective_time_defaults_missing_parts() {
        let when = ApproximateDateTime::new(ApproximateDate::year(2020), ApproximateTime::new(14, 30));
        assert_eq!(
            effective_date_time(&when),
            FhirDateTime::new(2020, 1, 1, 14, 30, 0)
        );
    }

    #[test]
    fn effective_time_keeps_given_parts() {
        let when = ApproximateDateTime::new(
            ApproximateDate::ymd(2019, 11, 5),
            ApproximateTime::new(6, 45).with_second(12),
        );
        assert_eq!(effective_date_time(&when).to_string(), "2019-11-05T06:45:12");
    }

    #[test]
    fn detail_extension_has_three_sub_values() {
        let detail = ExerciseDetail::new(
            CodedValue::new("CaloriesBurned", "exercise-detail-names"),
            StructuredMeasurement::new(
                350.0,
                CodableValue::new("Calories", CodedValue::new("Calories", "energy-units")),
            ),
        );
        let extension =
            detail_extension("calories", &detail, &VocabularyTranslator::new()).unwrap();
        assert_eq!(extension.url, vocab::extension_url(vocab::EXERCISE_DETAIL));
        assert!(extension.value.is_none());
        let urls: Vec<&str> = extension.extension.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                vocab::EXERCISE_DETAIL_NAME,
                vocab::EXERCISE_DETAIL_TYPE,
                vocab::EXERCISE_DETAIL_VALUE
            ]
        );
        assert_eq!(
            extension.extension[2].value,
            Some(ExtensionValue::Quantity(Quantity::new(350.0, "Calories")))
        );
    }

    #[test]
    fn segment_with_empty_title_omits_title() {
        let mut segment = ExerciseSegment::new(CodableValue::text_only("Lap"));
        segment.title = Some(String::new());
        let extension = segment_extension(&segment, &VocabularyTranslator::new()).unwrap();
        assert_eq!(extension.extension.len(), 1);
        assert!(extension.child(vocab::EXERCISE_SEGMENT_TITLE).is_none());
    }
}
