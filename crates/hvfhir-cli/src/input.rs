//! Reading things and writing observations as JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hvfhir_model::{Observation, Thing};
use serde_json::Value;

/// Things read from one input document.
#[derive(Debug)]
pub struct ThingBatch {
    pub things: Vec<Thing>,
    /// True when the document was a JSON array, so output is written as one too.
    pub is_array: bool,
}

/// Parse a JSON document holding either one thing or an array of things.
pub fn parse_things(json: &str) -> Result<ThingBatch> {
    let value: Value = serde_json::from_str(json).context("parse input JSON")?;
    match value {
        Value::Array(items) => {
            let things = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    serde_json::from_value(item).with_context(|| format!("read thing #{index}"))
                })
                .collect::<Result<Vec<Thing>>>()?;
            Ok(ThingBatch {
                things,
                is_array: true,
            })
        }
        other => {
            let thing: Thing = serde_json::from_value(other).context("read thing")?;
            Ok(ThingBatch {
                things: vec![thing],
                is_array: false,
            })
        }
    }
}

/// Read and parse a thing document from disk.
pub fn read_things(path: &Path) -> Result<ThingBatch> {
    let json =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_things(&json).with_context(|| format!("parse {}", path.display()))
}

/// Render observations, as an array when `as_array` is set.
pub fn render_observations(
    observations: &[Observation],
    as_array: bool,
    pretty: bool,
) -> Result<String> {
    let rendered = match (as_array, observations) {
        (false, [single]) => to_json(single, pretty)?,
        _ => to_json(&observations, pretty)?,
    };
    Ok(rendered)
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("serialize observations")
}
