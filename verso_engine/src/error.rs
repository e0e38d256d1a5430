// Error type for the verse engine.
//
// Generation itself only fails on a degenerate lexical bank (an empty word
// list or rhyme set slipped past validation). The remaining variants cover the
// edges around it: loading config and lexicon files, and the optional
// completion-provider path. `generate_poem` turns any of these into the
// `{ "error": ... }` response shape instead of letting them escape.

use verso_lang::{Category, LexiconError};

#[derive(Debug, thiserror::Error)]
pub enum VerseError {
    #[error("no words available in category '{0}'")]
    EmptyCategory(Category),

    #[error("rhyme set for vowel '{0}' has no endings")]
    EmptyRhymeSet(String),

    #[error("completion provider returned no verse")]
    EmptyCompletion,

    #[error("completion provider failed: {0}")]
    Provider(String),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
