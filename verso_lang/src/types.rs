// Core lexical types: word categories, rhyme sets, and the lexicon error type.
//
// The type hierarchy is:
// - `Category`: which slot of a line a word list fills (subject, place, ...)
// - `RhymeSet`: a vowel key with its ordered list of rhyme endings
// - `LexiconError`: everything that can go wrong loading a lexical bank
//
// Determinism constraint: categories are keyed through a `BTreeMap` and rhyme
// sets keep file order, so iteration order never depends on hashing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named word list in the lexical bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Who acts: "caballero", "juglar".
    Subjects,
    /// Present-tense verbs: "canta", "invoca".
    Actions,
    /// Prepositional place phrases: "en la villa".
    Places,
    /// Time phrases: "al anochecer".
    Times,
    /// Direct objects; replaced by the topic when one is given.
    Objects,
    /// Conjunctions joining the halves of a line.
    Connectors,
    /// Adjectives for the closing "con ánimo ..." phrase.
    Adjectives,
    /// Formulaic openings, optionally prefixed to a line.
    Formulas,
    /// Causal clauses, optionally appended to a line.
    Motifs,
    /// Short intensifiers inserted only to lengthen a line.
    Fillers,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 10] = [
        Category::Subjects,
        Category::Actions,
        Category::Places,
        Category::Times,
        Category::Objects,
        Category::Connectors,
        Category::Adjectives,
        Category::Formulas,
        Category::Motifs,
        Category::Fillers,
    ];

    /// The JSON key for this category.
    pub fn name(self) -> &'static str {
        match self {
            Category::Subjects => "subjects",
            Category::Actions => "actions",
            Category::Places => "places",
            Category::Times => "times",
            Category::Objects => "objects",
            Category::Connectors => "connectors",
            Category::Adjectives => "adjectives",
            Category::Formulas => "formulas",
            Category::Motifs => "motifs",
            Category::Fillers => "fillers",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rhyme endings sharing one stressed vowel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeSet {
    /// The vowel key ("a", "e", "o", "i").
    pub vowel: String,
    /// Candidate final words, in file order.
    pub endings: Vec<String>,
}

impl RhymeSet {
    /// Whether `word` is one of this set's endings.
    pub fn contains(&self, word: &str) -> bool {
        self.endings.iter().any(|e| e == word)
    }
}

/// Errors raised while loading or validating a lexical bank.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("malformed lexicon JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("lexicon category '{0}' is missing or empty")]
    EmptyCategory(Category),

    #[error("rhyme set for vowel '{0}' has no endings")]
    EmptyRhymeSet(String),

    #[error("lexicon defines no rhyme sets")]
    NoRhymeSets,

    #[error("lexicon category '{0}' contains a blank word")]
    BlankWord(Category),

    #[error("rhyme ending '{ending}' for vowel '{vowel}' is not a single word")]
    MalformedEnding { vowel: String, ending: String },
}
