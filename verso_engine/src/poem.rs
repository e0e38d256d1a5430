// Request and response shapes, and the top-level generation entry points.
//
// `PoemRequest` is what a caller asks for (topic, form, seed); `Poem` is what
// comes back. `GenerateResponse` is the serialized result of one request:
// either the poem's fields or `{ "error": message }`.
//
// Input is parsed leniently. A payload the engine cannot use (invalid JSON,
// a non-string topic, an unknown form, a non-numeric seed) falls back to the
// default for that field instead of failing the request. A missing seed is
// taken from the wall clock, which is the only non-reproducible input.
//
// `generate_poem` is the fault boundary: any `VerseError` raised inside the
// pipeline becomes a `GenerateResponse::Error` through
// `GenerateResponse::from_result`. With a validated `Lexicon` the pipeline
// itself has no failing path, so the error shape is exercised by feeding
// errors to `from_result` directly. `generate_batch` runs many
// requests across the rayon pool; every request owns its generator, so the
// results match sequential generation exactly.

use crate::config::VerseConfig;
use crate::error::VerseError;
use crate::form::{Form, assemble};
use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use verso_lang::Lexicon;
use verso_prng::VerseRng;

/// Title used when a request has no topic.
pub const DEFAULT_TITLE: &str = "Poem";

/// One generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoemRequest {
    /// What the poem is about. Blank topics are treated as absent.
    pub topic: Option<String>,
    /// Target stanza form.
    pub form: Form,
    /// Seed for the generator; `None` seeds from the current time.
    pub seed: Option<i64>,
}

impl PoemRequest {
    /// Extract a request from an arbitrary JSON value, defaulting every field
    /// that is missing or has the wrong shape.
    pub fn from_json_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            warn!("request payload is not an object, using defaults");
            return PoemRequest::default();
        };

        let topic = match fields.get("topic") {
            None | Some(Value::Null) => None,
            Some(Value::String(topic)) => Some(topic.trim().to_string()).filter(|t| !t.is_empty()),
            Some(other) => {
                warn!("ignoring non-string topic {other}");
                None
            }
        };

        let form = match fields.get("form") {
            None | Some(Value::Null) => Form::default(),
            Some(Value::String(name)) => Form::from_name(name).unwrap_or_else(|| {
                warn!("unknown form '{name}', using {}", Form::default());
                Form::default()
            }),
            Some(other) => {
                warn!("ignoring non-string form {other}");
                Form::default()
            }
        };

        let seed = match fields.get("seed") {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
            Some(other) => {
                warn!("ignoring non-numeric seed {other}");
                None
            }
        };

        PoemRequest { topic, form, seed }
    }

    /// Parse a request body. Unparseable JSON yields the default request.
    pub fn from_json_str(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_json_value(&value),
            Err(e) => {
                warn!("unparseable request body ({e}), using defaults");
                PoemRequest::default()
            }
        }
    }

    /// The topic, if present and not blank.
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Poem title derived from the topic.
    pub fn title(&self) -> String {
        match self.topic() {
            Some(topic) => format!("On {topic}"),
            None => DEFAULT_TITLE.to_string(),
        }
    }
}

/// A finished poem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poem {
    pub title: String,
    pub form: Form,
    pub scheme: String,
    pub lines: Vec<String>,
}

impl Poem {
    /// The lines joined by newlines, as offered for download.
    pub fn to_plain_text(&self) -> String {
        self.lines.join("\n")
    }

    /// File name for the plain-text export: `{form}-{title}.txt`, with runs
    /// of whitespace in the title replaced by underscores.
    pub fn export_file_name(&self) -> String {
        let title = self.title.split_whitespace().collect::<Vec<_>>().join("_");
        format!("{}-{}.txt", self.form, title)
    }
}

/// Serialized outcome of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    Poem(Poem),
    Error { error: String },
}

impl GenerateResponse {
    pub fn poem(&self) -> Option<&Poem> {
        match self {
            GenerateResponse::Poem(poem) => Some(poem),
            GenerateResponse::Error { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, GenerateResponse::Error { .. })
    }

    /// Convert a pipeline result, logging and flattening any error.
    pub fn from_result(result: Result<Poem, VerseError>) -> Self {
        match result {
            Ok(poem) => GenerateResponse::Poem(poem),
            Err(e) => {
                warn!("poem generation failed: {e}");
                GenerateResponse::Error {
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Seed derived from the current wall-clock time, in milliseconds.
pub fn time_seed() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a poem, propagating pipeline errors.
pub fn try_generate(
    request: &PoemRequest,
    lexicon: &Lexicon,
    config: &VerseConfig,
) -> Result<Poem, VerseError> {
    let seed = request.seed.unwrap_or_else(time_seed);
    let mut rng = VerseRng::new(seed);
    let stanza = assemble(request.form, request.topic(), lexicon, config, &mut rng)?;
    info!(
        "generated {} ({} lines, seed {seed}): {}",
        request.form,
        stanza.lines.len(),
        stanza.scheme
    );
    Ok(Poem {
        title: request.title(),
        form: request.form,
        scheme: stanza.scheme,
        lines: stanza.lines,
    })
}

/// Generate a poem, turning any internal fault into an error response.
pub fn generate_poem(
    request: &PoemRequest,
    lexicon: &Lexicon,
    config: &VerseConfig,
) -> GenerateResponse {
    GenerateResponse::from_result(try_generate(request, lexicon, config))
}

/// Generate many independent poems in parallel, preserving input order.
pub fn generate_batch(
    requests: &[PoemRequest],
    lexicon: &Lexicon,
    config: &VerseConfig,
) -> Vec<GenerateResponse> {
    requests
        .par_iter()
        .map(|request| generate_poem(request, lexicon, config))
        .collect()
}
