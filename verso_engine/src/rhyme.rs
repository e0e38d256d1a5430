// Rhyme enforcer: swaps a line's final word for a rhyme ending.
//
// The final word is the last maximal run of letters in the line. Whatever
// follows it (punctuation, trailing whitespace) is kept, so "por la sierra."
// becomes "por la amada." rather than losing its stop. A line with no letters
// at all gets the ending appended instead.
//
// After `force_rhyme`, `trailing_word` of the result is always the drawn
// ending. That holds because `Lexicon::new` only admits endings that are a
// single run of letters.

use crate::error::VerseError;
use verso_lang::RhymeSet;
use verso_prng::VerseRng;

/// Byte span of the last run of letters in `line`.
fn last_word_span(line: &str) -> Option<(usize, usize)> {
    let (last_idx, last_char) = line.char_indices().rev().find(|(_, c)| c.is_alphabetic())?;
    let end = last_idx + last_char.len_utf8();
    let start = line[..end]
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphabetic())
        .last()
        .map(|(i, _)| i)?;
    Some((start, end))
}

/// The final word of a line, ignoring trailing punctuation and whitespace.
pub fn trailing_word(line: &str) -> Option<&str> {
    last_word_span(line).map(|(start, end)| &line[start..end])
}

/// Replace the final word of `line` with an ending drawn from `rhyme`.
pub fn force_rhyme(line: &str, rhyme: &RhymeSet, rng: &mut VerseRng) -> Result<String, VerseError> {
    let ending = rng
        .pick(&rhyme.endings)
        .ok_or_else(|| VerseError::EmptyRhymeSet(rhyme.vowel.clone()))?;

    Ok(match last_word_span(line) {
        Some((start, end)) => format!("{}{}{}", &line[..start], ending, &line[end..]),
        None if line.is_empty() || line.ends_with(char::is_whitespace) => {
            format!("{line}{ending}")
        }
        None => format!("{line} {ending}"),
    })
}
