//! Integration tests for reading things and rendering observations.

use hvfhir_cli::input::{parse_things, render_observations};
use hvfhir_convert::{VocabularyTranslator, convert_thing};
use hvfhir_model::ThingKind;

const WALK: &str = r#"{
    "key": { "id": "walk-1" },
    "item": {
        "type": "exercise",
        "when": { "date": { "year": 2024 }, "time": { "hour": 6, "minute": 10 } },
        "activity": { "text": "Walk" }
    }
}"#;

#[test]
fn single_thing_document() {
    let batch = parse_things(WALK).unwrap();
    assert!(!batch.is_array);
    assert_eq!(batch.things.len(), 1);
    assert_eq!(batch.things[0].kind(), ThingKind::Exercise);
}

#[test]
fn array_document() {
    let batch = parse_things(&format!("[{WALK}, {WALK}]")).unwrap();
    assert!(batch.is_array);
    assert_eq!(batch.things.len(), 2);
}

#[test]
fn bad_array_entry_names_its_index() {
    let err = parse_things(&format!(r#"[{WALK}, {{ "item": {{ "type": "sleep" }} }}]"#)).unwrap_err();
    assert!(format!("{err:#}").contains("read thing #1"));
}

#[test]
fn malformed_json_is_rejected() {
    let err = parse_things("{").unwrap_err();
    assert!(format!("{err:#}").contains("parse input JSON"));
}

#[test]
fn renders_single_observation_as_object() {
    let batch = parse_things(WALK).unwrap();
    let mut thing = batch.things[0].clone();
    thing.key = None;
    let observation = convert_thing(&thing, &VocabularyTranslator::new()).unwrap();
    let rendered = render_observations(&[observation], false, false).unwrap();
    insta::assert_snapshot!(rendered, @r#"{"resourceType":"Observation","text":{"status":"empty","div":null},"status":"final","category":[{"coding":[{"system":"http://hl7.org/fhir/observation-category","code":"vital-signs","display":"Vital Signs"}]}],"code":{"coding":[{"system":"http://healthvault.com/fhir/stu3/ValueSets/thing-types","code":"85a21ddb-db20-4c65-8d30-33c899ccf612","display":"Exercise"}]},"effectiveDateTime":"2024-01-01T06:10:00","component":[{"code":{"coding":[{"system":"http://healthvault.com/fhir/stu3/ValueSets/exercise","code":"exercise-activity"}]},"valueCodeableConcept":{"text":"Walk"}}]}"#);
}

#[test]
fn renders_array_when_input_was_array() {
    let batch = parse_things(&format!("[{WALK}]")).unwrap();
    let observations: Vec<_> = batch
        .things
        .iter()
        .map(|thing| convert_thing(thing, &VocabularyTranslator::new()).unwrap())
        .collect();
    let rendered = render_observations(&observations, batch.is_array, false).unwrap();
    assert!(rendered.starts_with("[{\"resourceType\":\"Observation\",\"id\":\"walk-1\""));
    assert!(rendered.ends_with("}]"));
}
