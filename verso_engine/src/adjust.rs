// Line length adjuster: pads a line toward a syllable target.
//
// While the line measures short and the padding guard allows, one filler word
// (muy, tan, más, ...) is inserted right after the first word of the line and
// the line is re-measured. The insertion point is always the first word, not
// a metrically motivated position.
//
// Lines are only ever lengthened. A line already at or over its target is
// returned unchanged, and a line still short when the guard runs out is
// accepted as it is.

use crate::compose::draw;
use crate::config::VerseConfig;
use crate::error::VerseError;
use log::debug;
use verso_lang::{Category, Lexicon, count_syllables};
use verso_prng::VerseRng;

/// Insert `filler` after the first run of letters in `line`.
///
/// A line with no letters gets the filler prepended. The filler is always
/// separated by a space from the word before it, so no vowel run of the
/// original line is merged with the filler's.
pub fn insert_after_first_word(line: &str, filler: &str) -> String {
    let Some(start) = line.find(char::is_alphabetic) else {
        return if line.is_empty() {
            filler.to_string()
        } else {
            format!("{filler} {line}")
        };
    };
    let end = line[start..]
        .find(|c: char| !c.is_alphabetic())
        .map_or(line.len(), |offset| start + offset);
    format!("{} {}{}", &line[..end], filler, &line[end..])
}

/// Pad `line` with fillers until it reaches `target` syllables or the
/// configured guard is exhausted.
pub fn pad_line(
    lexicon: &Lexicon,
    config: &VerseConfig,
    rng: &mut VerseRng,
    mut line: String,
    target: usize,
) -> Result<String, VerseError> {
    let mut syllables = count_syllables(&line);
    let mut inserted = 0;
    while syllables < target && inserted < config.padding_guard {
        let filler = draw(lexicon, Category::Fillers, rng)?;
        line = insert_after_first_word(&line, filler);
        syllables = count_syllables(&line);
        inserted += 1;
    }
    if syllables < target {
        debug!("padding guard reached at {syllables}/{target} syllables: {line}");
    }
    Ok(line)
}
