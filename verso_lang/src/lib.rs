// Lexical bank for pseudo-medieval Spanish verse.
//
// Provides the word lists and rhyme tables that `verso_engine` assembles into
// lines, plus the vowel-cluster syllable approximator it measures them with.
//
// Architecture:
// - `types.rs`: `Category`, `RhymeSet`, `LexiconError`
// - `syllables.rs`: `count_syllables()` and friends
// - `lib.rs` (this file): `Lexicon` struct, which loads, validates and queries the
//   JSON word bank
//
// The lexicon is loaded from `data/verso_lexicon.json` via `Lexicon::from_json()`
// (JSON string in, typed struct out). `default_lexicon()` embeds the default
// bank at compile time with `include_str!`. A `Lexicon` is immutable once built
// and is shared by reference between concurrent generation requests.
//
// Determinism constraint: word lists and rhyme sets preserve file order, so a
// given seed picks the same words every time. All randomness goes through
// `verso_prng::VerseRng`.

pub mod syllables;
pub mod types;

// Re-export key types at crate root for convenience.
pub use syllables::{MIN_SYLLABLES, count_syllables};
pub use types::{Category, LexiconError, RhymeSet};

use std::collections::BTreeMap;
use verso_prng::VerseRng;

/// The top-level JSON structure for the lexicon file.
#[derive(Debug, serde::Deserialize)]
struct LexiconFile {
    categories: BTreeMap<Category, Vec<String>>,
    rhymes: Vec<RhymeSet>,
}

/// A validated, read-only lexical bank.
///
/// Every category is non-empty and there is at least one non-empty rhyme set,
/// so picks against a `Lexicon` built through `new` or `from_json` always
/// succeed.
#[derive(Debug, Clone)]
pub struct Lexicon {
    categories: BTreeMap<Category, Vec<String>>,
    rhymes: Vec<RhymeSet>,
}

impl Lexicon {
    /// Build a lexicon from already-parsed parts, validating them.
    ///
    /// Rejects missing or empty categories, blank words, an empty rhyme
    /// table, empty rhyme sets, and endings that are not exactly one run of
    /// letters (the rhyme enforcer swaps a single word for them).
    pub fn new(
        categories: BTreeMap<Category, Vec<String>>,
        rhymes: Vec<RhymeSet>,
    ) -> Result<Self, LexiconError> {
        for category in Category::ALL {
            let Some(words) = categories.get(&category).filter(|w| !w.is_empty()) else {
                return Err(LexiconError::EmptyCategory(category));
            };
            if words.iter().any(|w| w.trim().is_empty()) {
                return Err(LexiconError::BlankWord(category));
            }
        }
        if rhymes.is_empty() {
            return Err(LexiconError::NoRhymeSets);
        }
        for set in &rhymes {
            if set.endings.is_empty() {
                return Err(LexiconError::EmptyRhymeSet(set.vowel.clone()));
            }
            if let Some(ending) = set.endings.iter().find(|e| !is_single_word(e)) {
                return Err(LexiconError::MalformedEnding {
                    vowel: set.vowel.clone(),
                    ending: ending.clone(),
                });
            }
        }
        Ok(Lexicon { categories, rhymes })
    }

    /// Parse and validate a lexicon from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Self::new(file.categories, file.rhymes)
    }

    /// Words of one category, in file order.
    pub fn words(&self, category: Category) -> &[String] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Pick one word of a category with the caller's generator.
    pub fn pick(&self, category: Category, rng: &mut VerseRng) -> Option<&str> {
        rng.pick(self.words(category)).map(String::as_str)
    }

    /// All rhyme sets, in file order.
    pub fn rhyme_sets(&self) -> &[RhymeSet] {
        &self.rhymes
    }

    /// The rhyme set for a vowel key, if the bank defines one.
    pub fn rhymes(&self, vowel: &str) -> Option<&RhymeSet> {
        self.rhymes.iter().find(|s| s.vowel == vowel)
    }

    /// Pick one rhyme set with the caller's generator.
    pub fn pick_rhyme_set(&self, rng: &mut VerseRng) -> Option<&RhymeSet> {
        rng.pick(&self.rhymes)
    }
}

/// Whether `text` is one non-empty run of letters.
fn is_single_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

/// Load the default lexicon embedded at compile time.
///
/// Uses `include_str!` to embed `data/verso_lexicon.json`. Panics if the
/// embedded JSON is malformed (should never happen in a released build).
pub fn default_lexicon() -> Lexicon {
    let json = include_str!("../../data/verso_lexicon.json");
    Lexicon::from_json(json).expect("embedded verso_lexicon.json is malformed")
}
