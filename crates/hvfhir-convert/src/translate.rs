//! Translation of HealthVault codable values into FHIR codeable concepts.

use std::collections::BTreeMap;

use hvfhir_model::vocab;
use hvfhir_model::{CodableValue, CodeableConcept, CodedValue, Coding};
use serde::{Deserialize, Serialize};

use crate::error::TranslateError;

/// Converts a local vocabulary code into the destination coding system.
///
/// `hint` names the vocabulary to assume for coded values that carry none.
/// Implementations must be free of side effects; converters call them once
/// per coded field and propagate any error unchanged.
pub trait CodeTranslator: Send + Sync {
    fn translate(
        &self,
        value: &CodableValue,
        hint: Option<&str>,
    ) -> Result<CodeableConcept, TranslateError>;
}

/// Code system overrides keyed by vocabulary name.
///
/// ```json
/// { "systems": { "exercise-activities": "http://example.org/activities" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    #[serde(default)]
    pub systems: BTreeMap<String, String>,
}

/// Translator that maps each vocabulary to a code system URL under the
/// HealthVault vocabulary base, unless an override is configured.
#[derive(Debug, Clone, Default)]
pub struct VocabularyTranslator {
    systems: BTreeMap<String, String>,
}

impl VocabularyTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: VocabularyConfig) -> Self {
        Self {
            systems: config.systems,
        }
    }

    /// Parse a [`VocabularyConfig`] from JSON.
    pub fn from_json(json: &str) -> Result<Self, TranslateError> {
        let config: VocabularyConfig = serde_json::from_str(json)?;
        Ok(Self::with_config(config))
    }

    /// Override the code system URL for one vocabulary.
    #[must_use]
    pub fn with_system(mut self, vocabulary: impl Into<String>, url: impl Into<String>) -> Self {
        self.systems.insert(vocabulary.into(), url.into());
        self
    }

    fn system_for(&self, code: &CodedValue, hint: Option<&str>) -> String {
        let name = match (code.vocabulary_name.trim(), hint) {
            ("", Some(hint)) => hint,
            (name, _) => name,
        };
        match self.systems.get(name) {
            Some(url) => url.clone(),
            None => vocab::vocabulary_url(name, code.family.as_deref()),
        }
    }
}

impl CodeTranslator for VocabularyTranslator {
    fn translate(
        &self,
        value: &CodableValue,
        hint: Option<&str>,
    ) -> Result<CodeableConcept, TranslateError> {
        let single = value.codes.len() == 1;
        let coding = value
            .codes
            .iter()
            .map(|code| {
                if code.value.trim().is_empty() {
                    return Err(TranslateError::BlankCode {
                        vocabulary: code.vocabulary_name.clone(),
                    });
                }
                Ok(Coding {
                    system: Some(self.system_for(code, hint)),
                    version: code.version.clone(),
                    code: Some(code.value.clone()),
                    display: single.then(|| value.text.clone()),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CodeableConcept {
            coding,
            text: (!value.text.is_empty()).then(|| value.text.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> CodableValue {
        CodableValue::new(
            "Running",
            CodedValue::new("run", "exercise-activities").with_family("wc"),
        )
    }

    #[test]
    fn single_code_takes_text_as_display() {
        let concept = VocabularyTranslator::new()
            .translate(&running(), None)
            .unwrap();
        assert_eq!(concept.text.as_deref(), Some("Running"));
        assert_eq!(concept.coding.len(), 1);
        let coding = &concept.coding[0];
        assert_eq!(
            coding.system.as_deref(),
            Some("http://healthvault.com/fhir/stu3/ValueSets/wc/exercise-activities")
        );
        assert_eq!(coding.code.as_deref(), Some("run"));
        assert_eq!(coding.display.as_deref(), Some("Running"));
    }

    #[test]
    fn multiple_codes_have_no_display() {
        let mut value = running();
        value
            .codes
            .push(CodedValue::new("jog", "exercise-activities").with_version("2"));
        let concept = VocabularyTranslator::new().translate(&value, None).unwrap();
        assert_eq!(concept.coding.len(), 2);
        assert!(concept.coding.iter().all(|c| c.display.is_none()));
        assert_eq!(concept.coding[1].version.as_deref(), Some("2"));
    }

    #[test]
    fn text_only_value_has_no_coding() {
        let concept = VocabularyTranslator::new()
            .translate(&CodableValue::text_only("Yoga"), None)
            .unwrap();
        assert!(concept.coding.is_empty());
        assert_eq!(concept.text.as_deref(), Some("Yoga"));
    }

    #[test]
    fn hint_fills_missing_vocabulary() {
        let value = CodableValue::new("Cycling", CodedValue::new("bike", ""));
        let concept = VocabularyTranslator::new()
            .translate(&value, Some("exercise-activities"))
            .unwrap();
        assert_eq!(
            concept.coding[0].system.as_deref(),
            Some("http://healthvault.com/fhir/stu3/ValueSets/exercise-activities")
        );
    }

    #[test]
    fn configured_system_overrides_default() {
        let translator = VocabularyTranslator::from_json(
            r#"{ "systems": { "exercise-activities": "http://example.org/activities" } }"#,
        )
        .unwrap();
        let concept = translator.translate(&running(), None).unwrap();
        assert_eq!(
            concept.coding[0].system.as_deref(),
            Some("http://example.org/activities")
        );
    }

    #[test]
    fn blank_code_is_rejected() {
        let value = CodableValue::new("?", CodedValue::new("  ", "exercise-activities"));
        let err = VocabularyTranslator::new()
            .translate(&value, None)
            .unwrap_err();
        assert!(matches!(err, TranslateError::BlankCode { vocabulary } if vocabulary == "exercise-activities"));
    }

    #[test]
    fn malformed_config_is_rejected() {
        let err = VocabularyTranslator::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TranslateError::Config(_)));
    }
}
