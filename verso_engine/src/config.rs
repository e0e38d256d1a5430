// Data-driven generation configuration.
//
// Every tunable of the pipeline lives in `VerseConfig`: the probability gates
// for the optional formula prefix and motif suffix, the padding guard of the
// line adjuster, and the syllable target of each stanza form. The engine reads
// these instead of embedding magic numbers, so a deployment can retune the
// verse without recompiling.
//
// Loaded from JSON with per-field defaults: a config file only needs the keys
// it overrides. The probability gates are fed from the request's own
// `VerseRng`, so changing a probability changes the poem but never its
// reproducibility.

use crate::error::VerseError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable parameters of the verse pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerseConfig {
    /// Chance that a composed line opens with a formulaic phrase.
    pub formula_prefix_probability: f64,
    /// Chance that a composed line ends with a motif clause.
    pub motif_suffix_probability: f64,
    /// Maximum filler insertions per line.
    pub padding_guard: usize,
    /// Syllable target of each monorhyme quatrain line.
    pub quatrain_syllables: usize,
    /// Syllable target of each assonant octave line.
    pub octave_syllables: usize,
    /// Syllable target of each rhymed couplet line.
    pub couplet_syllables: usize,
}

impl Default for VerseConfig {
    fn default() -> Self {
        Self {
            formula_prefix_probability: 0.4,
            motif_suffix_probability: 0.3,
            padding_guard: 6,
            quatrain_syllables: 14,
            octave_syllables: 8,
            couplet_syllables: 11,
        }
    }
}

impl VerseConfig {
    /// Parse a config from a JSON string. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, VerseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, VerseError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = VerseConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let restored: VerseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = VerseConfig::from_json(r#"{"padding_guard": 8}"#).unwrap();
        assert_eq!(config.padding_guard, 8);
        assert_eq!(config.quatrain_syllables, 14);
        assert_eq!(config.formula_prefix_probability, 0.4);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(VerseConfig::from_json("{}").unwrap(), VerseConfig::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        match VerseConfig::from_json("{\"padding_guard\": \"many\"}") {
            Err(VerseError::Config(_)) => {}
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = Path::new("definitely/not/here/verse_config.json");
        assert!(matches!(VerseConfig::load(path), Err(VerseError::Io(_))));
    }
}
