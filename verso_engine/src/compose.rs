// Line composer: assembles one raw line of verse from the lexical bank.
//
// A line is built from a fixed template:
//
//   [formula] {subject} {action} {object | el topic} {connector} {place} {time} con ánimo {adjective} [motif]
//
// The seven core slots are drawn in a fixed order (subject, action, place,
// time, object, adjective, connector). The object is drawn even when a topic
// replaces it, so the generator stream does not depend on whether a topic was
// given. The bracketed formula and motif are optional insertions gated by
// `VerseConfig` probabilities, drawn from the same generator after the core
// slots.
//
// The output is unmeasured text; `adjust.rs` pads it toward a syllable target
// and `rhyme.rs` fixes its final word.

use crate::config::VerseConfig;
use crate::error::VerseError;
use verso_lang::{Category, Lexicon};
use verso_prng::VerseRng;

/// Draw one word of `category`, failing on an empty list.
pub(crate) fn draw<'a>(
    lexicon: &'a Lexicon,
    category: Category,
    rng: &mut VerseRng,
) -> Result<&'a str, VerseError> {
    lexicon
        .pick(category, rng)
        .ok_or(VerseError::EmptyCategory(category))
}

/// Compose one line of free (unpadded, unrhymed) verse.
///
/// A blank or whitespace-only topic is treated as absent.
pub fn compose_line(
    lexicon: &Lexicon,
    config: &VerseConfig,
    rng: &mut VerseRng,
    topic: Option<&str>,
) -> Result<String, VerseError> {
    let subject = draw(lexicon, Category::Subjects, rng)?;
    let action = draw(lexicon, Category::Actions, rng)?;
    let place = draw(lexicon, Category::Places, rng)?;
    let time = draw(lexicon, Category::Times, rng)?;
    let object = draw(lexicon, Category::Objects, rng)?;
    let adjective = draw(lexicon, Category::Adjectives, rng)?;
    let connector = draw(lexicon, Category::Connectors, rng)?;

    let object = match topic.map(str::trim).filter(|t| !t.is_empty()) {
        Some(topic) => format!("el {topic}"),
        None => object.to_string(),
    };

    let mut pieces: Vec<String> = Vec::with_capacity(9);
    if rng.random_bool(config.formula_prefix_probability) {
        pieces.push(draw(lexicon, Category::Formulas, rng)?.to_string());
    }
    pieces.push(format!("{subject} {action}"));
    pieces.push(object);
    pieces.push(connector.to_string());
    pieces.push(place.to_string());
    pieces.push(time.to_string());
    pieces.push(format!("con ánimo {adjective}"));
    if rng.random_bool(config.motif_suffix_probability) {
        pieces.push(draw(lexicon, Category::Motifs, rng)?.to_string());
    }

    Ok(pieces.join(" "))
}
