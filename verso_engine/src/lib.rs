// Verso verse engine
//
// Generates short pseudo-medieval Spanish poems (monorhyme quatrains,
// assonant octaves and rhymed couplets, known in Spanish as cuaderna vía,
// romance and pareado) from a topic and a seed. Lines are assembled from a
// lexical bank, padded toward a syllable target with filler words, and have
// their final word swapped for a rhyme ending.
//
// Architecture:
// - config.rs: `VerseConfig`, every tunable of the pipeline (JSON-loadable)
// - compose.rs: line composer (template slots drawn from the lexicon)
// - adjust.rs: line length adjuster (filler insertion up to a guard)
// - rhyme.rs: rhyme enforcer (final-word replacement)
// - form.rs: `Form` and the stanza assembler driving the three steps above
// - poem.rs: request/response shapes, `generate_poem` fault boundary, batches
// - completion.rs: optional external text provider with engine fallback
// - error.rs: `VerseError`
//
// The generator is deterministic given a seed: one `VerseRng` is created per
// request and threaded through every random decision.

pub mod adjust;
pub mod completion;
pub mod compose;
pub mod config;
pub mod error;
pub mod form;
pub mod poem;
pub mod rhyme;

pub use config::VerseConfig;
pub use error::VerseError;
pub use form::{Form, Stanza, assemble};
pub use poem::{GenerateResponse, Poem, PoemRequest, generate_batch, generate_poem, try_generate};
