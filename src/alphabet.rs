// libglobasa/src/alphabet.rs
//
// Letter classes of the Globasa Latin alphabet, plus the fixed list of
// unstressed function words.
//
// Globasa spells one sound per letter, with five vowels (a e i o u). The
// shift rules in `stress` group the consonants by how they pattern to the
// left of a stressed vowel:
// - semivowels y/w pull the stress marker one letter further left, unless
//   another semivowel or a blocking letter precedes them
// - liquids r/l do the same when an onset consonant precedes them
// - onset consonants (b d f g k p t v) are the plosives that may open a
//   consonant cluster
// - coda consonants (c j l m n r s w x y z) may close a syllable
//
// A vowel or hyphen blocks the marker from moving further left. All
// predicates are lowercase-literal; callers lowercase first.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Primary stress marker (U+02C8), spliced into words by `stress`.
pub const STRESS_MARKER: char = 'ˈ';

/// One-syllable function words that are never stressed.
///
/// Matched against lowercased words. The empty string is a member so that
/// degenerate tokens fall through unchanged.
const UNSTRESSED_WORDS: &[&str] = &[
    "ji", "or", "nor", "kam", "mas", "kwas", "ki", "hu", "su", "el", "na",
    "le", "xa", "kom", "di", "ci", "fe", "in", "ex", "per", "bax", "of",
    "cel", "hoy", "pas", "tras", "cis", "wey", "fol", "de", "tas", "tem",
    "pro", "fal", "har", "ton", "yon", "por", "dur", "ku", "e", "em", "",
];

static SKIP_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| UNSTRESSED_WORDS.iter().copied().collect());

/// True if `word` (lowercased) is on the unstressed-word list.
pub fn is_skip_word(word: &str) -> bool {
    SKIP_SET.contains(word)
}

/// The five Globasa vowels.
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Letters the stress marker never moves past: vowels and the hyphen.
pub fn is_shift_blocking(c: char) -> bool {
    is_vowel(c) || c == '-'
}

/// Semivowels y and w.
pub fn is_semivowel(c: char) -> bool {
    matches!(c, 'y' | 'w')
}

/// Liquids r and l.
pub fn is_liquid(c: char) -> bool {
    matches!(c, 'r' | 'l')
}

/// Plosives that can open a consonant cluster.
pub fn is_onset_consonant(c: char) -> bool {
    matches!(c, 'b' | 'd' | 'f' | 'g' | 'k' | 'p' | 't' | 'v')
}

/// Consonants that can close a syllable.
pub fn is_coda_consonant(c: char) -> bool {
    matches!(
        c,
        'c' | 'j' | 'l' | 'm' | 'n' | 'r' | 's' | 'w' | 'x' | 'y' | 'z'
    )
}

/// Characters a word span is made of: alphanumerics and the underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Hyphen or apostrophe; part of a word only between word characters.
pub fn is_word_joiner(c: char) -> bool {
    c == '-' || c == '\''
}
