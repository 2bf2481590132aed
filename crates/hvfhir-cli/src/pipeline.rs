//! Document-level conversion: read things, convert each, write observations.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use hvfhir_convert::{VocabularyTranslator, default_registry};
use hvfhir_model::{Observation, ThingKind};
use tracing::{debug, error, info, info_span};

use crate::input::{read_things, render_observations};
use crate::logging::redact_value;

/// Settings for one conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub input: PathBuf,
    /// Destination file; stdout when unset.
    pub output: Option<PathBuf>,
    /// Code system overrides per vocabulary.
    pub vocabulary: Option<PathBuf>,
    pub compact: bool,
    /// Write the converted observations even when some things failed.
    pub keep_going: bool,
}

/// Outcome of converting one thing.
#[derive(Debug)]
pub struct ThingOutcome {
    pub index: usize,
    pub kind: ThingKind,
    pub components: usize,
    pub extensions: usize,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    /// False when failures stopped the output from being written.
    pub written: bool,
    pub outcomes: Vec<ThingOutcome>,
}

impl ConvertResult {
    pub fn error_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.error.is_some()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn converted_count(&self) -> usize {
        self.outcomes.len() - self.error_count()
    }
}

/// Converts every thing in the input document.
///
/// Output is written only when every thing converted, unless
/// `keep_going` is set. Per-thing failures are reported in the result.
///
/// # Errors
///
/// Returns an error when the input, the vocabulary overrides or the output
/// cannot be read, parsed or written.
pub fn run_convert(options: &ConvertOptions) -> Result<ConvertResult> {
    let span = info_span!("convert", input = %options.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let translator = match &options.vocabulary {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("read {}", path.display()))?;
            VocabularyTranslator::from_json(&json)
                .with_context(|| format!("load vocabulary overrides from {}", path.display()))?
        }
        None => VocabularyTranslator::new(),
    };

    let batch = read_things(&options.input)?;
    info!(things = batch.things.len(), "read input");

    let registry = default_registry();
    let mut observations: Vec<Observation> = Vec::with_capacity(batch.things.len());
    let mut outcomes = Vec::with_capacity(batch.things.len());
    for (index, thing) in batch.things.iter().enumerate() {
        let id = thing.key.as_ref().map_or("-", |key| key.id.as_str());
        match registry.convert(thing, &translator) {
            Ok(observation) => {
                debug!(index, id = redact_value(id), kind = %thing.kind(), "converted thing");
                outcomes.push(ThingOutcome {
                    index,
                    kind: thing.kind(),
                    components: observation.component.len(),
                    extensions: observation.extension.len(),
                    error: None,
                });
                observations.push(observation);
            }
            Err(err) => {
                error!(index, id = redact_value(id), "conversion failed: {err}");
                outcomes.push(ThingOutcome {
                    index,
                    kind: thing.kind(),
                    components: 0,
                    extensions: 0,
                    error: Some(err.to_string()),
                });
            }
        }
    }

    let failed = outcomes.iter().any(|o| o.error.is_some());
    let written = !failed || options.keep_going;
    if written {
        let rendered = render_observations(&observations, batch.is_array, !options.compact)?;
        match &options.output {
            Some(path) => {
                fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
            }
            None => println!("{rendered}"),
        }
    }

    info!(
        converted = observations.len(),
        failed = outcomes.len() - observations.len(),
        elapsed = ?start.elapsed(),
        "conversion finished"
    );

    Ok(ConvertResult {
        input: options.input.clone(),
        output: options.output.clone(),
        written,
        outcomes,
    })
}
