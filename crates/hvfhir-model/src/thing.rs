//! HealthVault thing records.
//!
//! A [`Thing`] is the envelope the upstream store hands out: an optional key,
//! a last-updated stamp and one typed item. Only the item shapes needed for
//! conversion are modelled.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::vocab;

/// A single code within a named vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodedValue {
    /// The code itself (e.g., "run").
    pub value: String,

    /// Vocabulary the code belongs to (e.g., "exercise-activities").
    pub vocabulary_name: String,

    /// Vocabulary family (e.g., "wc" for HealthVault-defined vocabularies).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl CodedValue {
    pub fn new(value: impl Into<String>, vocabulary_name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            vocabulary_name: vocabulary_name.into(),
            family: None,
            version: None,
        }
    }

    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// Display text plus zero or more codes describing the same concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodableValue {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub codes: Vec<CodedValue>,
}

impl CodableValue {
    /// Codable value carrying a single code.
    pub fn new(text: impl Into<String>, code: CodedValue) -> Self {
        Self {
            text: text.into(),
            codes: vec![code],
        }
    }

    /// Codable value with display text and no codes.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            codes: Vec::new(),
        }
    }

    /// First code, if any.
    pub fn first_code(&self) -> Option<&CodedValue> {
        self.codes.first()
    }
}

/// Calendar date where month and day may be unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproximateDate {
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

impl ApproximateDate {
    pub fn new(year: i32, month: Option<u32>, day: Option<u32>) -> Self {
        Self { year, month, day }
    }

    /// Year-only precision.
    pub fn year(year: i32) -> Self {
        Self::new(year, None, None)
    }

    /// Full year-month-day precision.
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, Some(month), Some(day))
    }
}

/// Time of day where seconds may be unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproximateTime {
    pub hour: u32,
    pub minute: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<u32>,
}

impl ApproximateTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self {
            hour,
            minute,
            second: None,
        }
    }

    #[must_use]
    pub fn with_second(mut self, second: u32) -> Self {
        self.second = Some(second);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproximateDateTime {
    pub date: ApproximateDate,
    pub time: ApproximateTime,
}

impl ApproximateDateTime {
    pub fn new(date: ApproximateDate, time: ApproximateTime) -> Self {
        Self { date, time }
    }
}

/// Numeric measurement with its units; the first unit code is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredMeasurement {
    pub value: f64,
    pub units: CodableValue,
}

impl StructuredMeasurement {
    pub fn new(value: f64, units: CodableValue) -> Self {
        Self { value, units }
    }
}

/// Named measurement attached to an exercise or segment (e.g., calories burned).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDetail {
    pub name: CodedValue,
    pub value: StructuredMeasurement,
}

impl ExerciseDetail {
    pub fn new(name: CodedValue, value: StructuredMeasurement) -> Self {
        Self { name, value }
    }
}

/// A timed portion of an exercise session (e.g., one lap).
/// Detail measurements keyed by detail name, in document order.
pub type DetailMap = IndexMap<String, ExerciseDetail>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSegment {
    pub activity: CodableValue,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Distance in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,

    /// Offset from the start of the session, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<DetailMap>,
}

impl ExerciseSegment {
    pub fn new(activity: CodableValue) -> Self {
        Self {
            activity,
            title: None,
            duration: None,
            distance: None,
            offset: None,
            details: None,
        }
    }
}

/// An exercise session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub when: ApproximateDateTime,

    pub activity: CodableValue,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Distance in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,

    /// Duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub details: DetailMap,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<ExerciseSegment>,
}

impl Exercise {
    pub fn new(when: ApproximateDateTime, activity: CodableValue) -> Self {
        Self {
            when,
            activity,
            title: None,
            distance: None,
            duration: None,
            details: DetailMap::new(),
            segments: Vec::new(),
        }
    }
}

/// Kinds of thing that can be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum ThingKind {
    Exercise,
}

impl ThingKind {
    pub const ALL: &'static [ThingKind] = &[ThingKind::Exercise];

    /// HealthVault type id (GUID) of this kind.
    pub fn type_id(self) -> &'static str {
        match self {
            Self::Exercise => vocab::EXERCISE_TYPE_ID,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Exercise => "exercise",
        }
    }

    pub fn display(self) -> &'static str {
        match self {
            Self::Exercise => vocab::EXERCISE_DISPLAY,
        }
    }
}

impl fmt::Display for ThingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThingKind {
    type Err = ModelError;

    /// Accepts either the kind name or its type id, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(needle)
                    || kind.type_id().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ModelError::UnknownThingType(s.to_string()))
    }
}

/// Typed payload of a thing, tagged by kind in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
#[non_exhaustive]
pub enum ThingData {
    Exercise(Exercise),
}

impl ThingData {
    pub fn kind(&self) -> ThingKind {
        match self {
            Self::Exercise(_) => ThingKind::Exercise,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThingKey {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_stamp: Option<String>,
}

/// A stored health record item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ThingKey>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    pub item: ThingData,
}

impl Thing {
    pub fn new(item: ThingData) -> Self {
        Self {
            key: None,
            last_updated: None,
            item,
        }
    }

    #[must_use]
    pub fn with_key(mut self, id: impl Into<String>, version_stamp: Option<String>) -> Self {
        self.key = Some(ThingKey {
            id: id.into(),
            version_stamp,
        });
        self
    }

    #[must_use]
    pub fn with_last_updated(mut self, last_updated: DateTime<Utc>) -> Self {
        self.last_updated = Some(last_updated);
        self
    }

    pub fn kind(&self) -> ThingKind {
        self.item.kind()
    }
}
