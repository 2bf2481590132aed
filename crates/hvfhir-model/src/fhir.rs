//! FHIR Observation resource shapes (STU3 subset).
//!
//! Only the elements an exercise conversion writes are modelled. JSON field
//! names follow the FHIR JSON representation, including the `value[x]`
//! choice elements on components and extensions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl Coding {
    pub fn new(
        system: impl Into<String>,
        code: impl Into<String>,
        display: Option<impl Into<String>>,
    ) -> Self {
        Self {
            system: Some(system.into()),
            version: None,
            code: Some(code.into()),
            display: display.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeableConcept {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coding: Vec<Coding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CodeableConcept {
    pub fn from_coding(coding: Coding) -> Self {
        Self {
            coding: vec![coding],
            text: None,
        }
    }

    /// True if any coding carries the given system and code.
    pub fn has_code(&self, system: &str, code: &str) -> bool {
        self.coding
            .iter()
            .any(|c| c.system.as_deref() == Some(system) && c.code.as_deref() == Some(code))
    }

    /// Code of the first coding, if any.
    pub fn first_code(&self) -> Option<&str> {
        self.coding.first().and_then(|c| c.code.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// `value[x]` of an observation component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComponentValue {
    #[serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationComponent {
    pub code: CodeableConcept,
    #[serde(flatten)]
    pub value: ComponentValue,
}

impl ObservationComponent {
    pub fn new(code: CodeableConcept, value: ComponentValue) -> Self {
        Self { code, value }
    }

    pub fn quantity(&self) -> Option<&Quantity> {
        match &self.value {
            ComponentValue::Quantity(quantity) => Some(quantity),
            ComponentValue::CodeableConcept(_) => None,
        }
    }
}

/// `value[x]` of an extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExtensionValue {
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueDecimal")]
    Decimal(f64),
    #[serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// An extension: either a leaf carrying a value or a container of nested extensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    pub url: String,
    #[serde(flatten)]
    pub value: Option<ExtensionValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
}

impl Extension {
    /// Leaf extension holding a single value.
    pub fn value(url: impl Into<String>, value: ExtensionValue) -> Self {
        Self {
            url: url.into(),
            value: Some(value),
            extension: Vec::new(),
        }
    }

    /// Container extension holding nested extensions.
    pub fn complex(url: impl Into<String>, extension: Vec<Extension>) -> Self {
        Self {
            url: url.into(),
            value: None,
            extension,
        }
    }

    /// First nested extension with the given url.
    pub fn child(&self, url: &str) -> Option<&Extension> {
        self.extension.iter().find(|e| e.url == url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObservationStatus {
    Registered,
    Preliminary,
    #[default]
    Final,
    Amended,
    Cancelled,
    EnteredInError,
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NarrativeStatus {
    Generated,
    Extensions,
    Additional,
    #[default]
    Empty,
}

/// Human-readable summary of a resource (`Resource.text`).
///
/// `div` is carried as given, including a missing value, so `"div": null`
/// is written rather than dropping the element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub status: NarrativeStatus,
    #[serde(default)]
    pub div: Option<String>,
}

impl Narrative {
    /// Narrative holding free text verbatim.
    ///
    /// Status is `additional` for non-empty text and `empty` otherwise.
    pub fn from_text(text: Option<String>) -> Self {
        let status = if text.as_deref().is_some_and(|t| !t.is_empty()) {
            NarrativeStatus::Additional
        } else {
            NarrativeStatus::Empty
        };
        Self { status, div: text }
    }
}

/// Calendar date and time of day without offset.
///
/// Components are stored as given; no calendar validation happens on
/// construction. Use [`FhirDateTime::to_naive`] for a checked view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FhirDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl FhirDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Checked conversion; `None` when the components are not a real instant.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?.and_hms_opt(
            self.hour,
            self.minute,
            self.second,
        )
    }
}

impl fmt::Display for FhirDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for FhirDateTime {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ModelError::InvalidDateTime {
            value: s.to_string(),
            reason,
        };
        let (date, time) = s.split_once('T').ok_or_else(|| invalid("missing 'T'"))?;
        let date: Vec<&str> = date.split('-').collect();
        let time: Vec<&str> = time.split(':').collect();
        let &[year, month, day] = date.as_slice() else {
            return Err(invalid("expected YYYY-MM-DD"));
        };
        let &[hour, minute, second] = time.as_slice() else {
            return Err(invalid("expected HH:MM:SS"));
        };
        let number = |part: &str| part.parse::<u32>().map_err(|_| invalid("non-numeric part"));
        Ok(Self {
            year: year
                .parse::<i32>()
                .map_err(|_| invalid("non-numeric part"))?,
            month: number(month)?,
            day: number(day)?,
            hour: number(hour)?,
            minute: number(minute)?,
            second: number(second)?,
        })
    }
}

impl Serialize for FhirDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FhirDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    #[default]
    Observation,
}

/// Base fields of an observation, filled in before a converter runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationShell {
    pub id: Option<String>,
    pub meta: Option<Meta>,
    pub status: ObservationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub resource_type: ResourceType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Always present on converted observations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    pub status: ObservationStatus,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<CodeableConcept>,

    pub code: CodeableConcept,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date_time: Option<FhirDateTime>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub component: Vec<ObservationComponent>,
}

impl Observation {
    /// Components whose code matches `code` in any coding.
    pub fn components_with_code<'a>(
        &'a self,
        code: &'a str,
    ) -> impl Iterator<Item = &'a ObservationComponent> + 'a {
        self.component
            .iter()
            .filter(move |c| c.code.coding.iter().any(|k| k.code.as_deref() == Some(code)))
    }

    /// Top-level extensions with the given url.
    pub fn extensions_with_url<'a>(
        &'a self,
        url: &'a str,
    ) -> impl Iterator<Item = &'a Extension> + 'a {
        self.extension.iter().filter(move |e| e.url == url)
    }
}
