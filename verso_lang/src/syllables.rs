// Approximate Spanish syllable counting by vowel clusters.
//
// A line is lower-cased and every maximal run of vowels (a, e, i, o, u and
// their accented/umlaut forms á é í ó ú ü) counts as one syllable nucleus.
// Anything else (consonants, ñ, whitespace, punctuation, foreign letters)
// ends a run. Diphthongs, hiatus and synalepha across word boundaries all
// collapse to at most one nucleus per contiguous run, which undercounts
// literary scansion but is consistent and cheap.
//
// Used by the line adjuster in `verso_engine` to decide when a line is long
// enough.

/// Smallest count ever reported. Short fragments are never measured below it.
pub const MIN_SYLLABLES: usize = 4;

/// Vowels that open or extend a syllable nucleus (lower case).
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'á', 'é', 'í', 'ó', 'ú', 'ü'];

/// Whether `c` (already lower-cased) is a nucleus vowel.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Raw number of vowel clusters in `text`, without the floor.
pub fn vowel_clusters(text: &str) -> usize {
    let mut clusters = 0;
    let mut in_run = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if is_vowel(c) {
            if !in_run {
                clusters += 1;
            }
            in_run = true;
        } else {
            in_run = false;
        }
    }
    clusters
}

/// Estimated syllable count of a line, floored at `MIN_SYLLABLES`.
pub fn count_syllables(text: &str) -> usize {
    vowel_clusters(text).max(MIN_SYLLABLES)
}
