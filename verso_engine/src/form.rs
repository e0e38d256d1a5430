// Stanza forms and the form assembler.
//
// Three forms are supported, each a fixed number of lines at a fixed syllable
// target with its own rhyme placement:
//
// | Form                 | Lines | Target | Rhymed lines    | Scheme label                 |
// |----------------------|-------|--------|-----------------|------------------------------|
// | `MonorhymeQuatrain`  | 4     | 14     | all             | "AAAA (monorhyme quatrain)"  |
// | `AssonantOctave`     | 8     | 8      | 2nd,4th,6th,8th | "assonant pairs on -{vowel}" |
// | `RhymedCouplet`      | 2     | 11     | both            | "AA (rhymed couplet)"        |
//
// Targets come from `VerseConfig`. The rhyme set is chosen once per stanza,
// before the first line is composed. Every line then goes compose → pad →
// (optionally) force rhyme, all against the caller's single `VerseRng`.
//
// Form names parse leniently: the canonical kebab-case names, the traditional
// Spanish names (cuaderna vía, romance, pareado) and case variations are all
// accepted; anything else falls back to the default form.

use crate::adjust::pad_line;
use crate::compose::compose_line;
use crate::config::VerseConfig;
use crate::error::VerseError;
use crate::rhyme::force_rhyme;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use verso_lang::{Lexicon, LexiconError, RhymeSet};
use verso_prng::VerseRng;

/// A target stanza form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Form {
    /// Four lines of ~14 syllables sharing one rhyme (cuaderna vía).
    #[default]
    MonorhymeQuatrain,
    /// Eight lines of ~8 syllables, assonance on the even lines (romance).
    AssonantOctave,
    /// Two lines of ~11 syllables rhyming together (pareado).
    RhymedCouplet,
}

impl Form {
    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Form::MonorhymeQuatrain => "monorhyme-quatrain",
            Form::AssonantOctave => "assonant-octave",
            Form::RhymedCouplet => "rhymed-couplet",
        }
    }

    /// Parse a form name, accepting traditional aliases. `None` if unknown.
    pub fn from_name(name: &str) -> Option<Form> {
        let normalized = name.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "monorhyme-quatrain" | "quatrain" | "cuaderna" | "cuaderna-via" | "cuaderna-vía" => {
                Some(Form::MonorhymeQuatrain)
            }
            "assonant-octave" | "octave" | "romance" => Some(Form::AssonantOctave),
            "rhymed-couplet" | "couplet" | "pareado" => Some(Form::RhymedCouplet),
            _ => None,
        }
    }

    /// Number of lines in a stanza of this form.
    pub fn line_count(self) -> usize {
        match self {
            Form::MonorhymeQuatrain => 4,
            Form::AssonantOctave => 8,
            Form::RhymedCouplet => 2,
        }
    }

    /// Syllable target per line, from the config.
    pub fn target_syllables(self, config: &VerseConfig) -> usize {
        match self {
            Form::MonorhymeQuatrain => config.quatrain_syllables,
            Form::AssonantOctave => config.octave_syllables,
            Form::RhymedCouplet => config.couplet_syllables,
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An assembled stanza: its scheme label and lines in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stanza {
    pub scheme: String,
    pub lines: Vec<String>,
}

/// Compose and pad one line toward `target` syllables.
fn free_line(
    lexicon: &Lexicon,
    config: &VerseConfig,
    rng: &mut VerseRng,
    topic: Option<&str>,
    target: usize,
) -> Result<String, VerseError> {
    let line = compose_line(lexicon, config, rng, topic)?;
    pad_line(lexicon, config, rng, line, target)
}

fn choose_rhyme<'a>(lexicon: &'a Lexicon, rng: &mut VerseRng) -> Result<&'a RhymeSet, VerseError> {
    lexicon
        .pick_rhyme_set(rng)
        .ok_or(VerseError::Lexicon(LexiconError::NoRhymeSets))
}

/// Assemble a stanza of `form` about `topic`.
pub fn assemble(
    form: Form,
    topic: Option<&str>,
    lexicon: &Lexicon,
    config: &VerseConfig,
    rng: &mut VerseRng,
) -> Result<Stanza, VerseError> {
    let target = form.target_syllables(config);
    let rhyme = choose_rhyme(lexicon, rng)?;
    debug!("assembling {form}: target {target} syllables, rhyme -{}", rhyme.vowel);

    let mut lines = Vec::with_capacity(form.line_count());
    for position in 1..=form.line_count() {
        let line = free_line(lexicon, config, rng, topic, target)?;
        let rhymed = match form {
            Form::MonorhymeQuatrain | Form::RhymedCouplet => true,
            Form::AssonantOctave => position % 2 == 0,
        };
        lines.push(if rhymed {
            force_rhyme(&line, rhyme, rng)?
        } else {
            line
        });
    }

    let scheme = match form {
        Form::MonorhymeQuatrain => "AAAA (monorhyme quatrain)".to_string(),
        Form::AssonantOctave => format!("assonant pairs on -{}", rhyme.vowel),
        Form::RhymedCouplet => "AA (rhymed couplet)".to_string(),
    };
    Ok(Stanza { scheme, lines })
}
