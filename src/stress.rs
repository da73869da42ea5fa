// libglobasa/src/stress.rs
//
// Primary stress placement for Globasa words.
//
// Globasa stress is fully rule-driven:
//
// Skip: words on the unstressed list, and words with no vowel, come back
// unchanged.
//
// Single vowel: the stress marker goes before the first letter.
//
// Vowel select: otherwise drop the final letter and take the last vowel
// of what remains. When the word ends in a vowel this picks the
// second-to-last vowel, when it ends in a consonant the last one.
//
// Stress shift, relative to the selected vowel, first match wins:
// - no shift when the vowel opens the word or follows a vowel or hyphen
// - two left when the letter before it is y/w and the letter before that
//   is neither y/w nor a vowel/hyphen (or the word starts there)
// - two left when the letter before it is r/l after an onset consonant
// - otherwise one left
//
// The shift counts letters, not bytes, and a shift past the start of the
// word is clamped to the first letter.

use tracing::trace;

use crate::alphabet::{
    is_liquid, is_onset_consonant, is_semivowel, is_shift_blocking, is_skip_word, is_vowel,
    STRESS_MARKER,
};
use crate::tokenizer::word_spans;

/// Add the stress marker to a single lowercased word.
///
/// Total over any input: unknown characters count as consonants of no
/// class, and words the rules do not stress are returned unchanged.
///
/// # Examples
/// ```
/// use libglobasa::stress::stress_word;
///
/// assert_eq!(stress_word("mesajo"), "meˈsajo");
/// assert_eq!(stress_word("de"), "de");
/// assert_eq!(stress_word("mi"), "ˈmi");
/// ```
pub fn stress_word(word: &str) -> String {
    if is_skip_word(word) {
        return word.to_string();
    }

    let chars: Vec<char> = word.chars().collect();
    let vowels = chars
        .iter()
        .filter(|c| is_vowel(c.to_ascii_lowercase()))
        .count();
    if vowels == 0 {
        return word.to_string();
    }
    if vowels == 1 {
        let mut out = String::with_capacity(word.len() + STRESS_MARKER.len_utf8());
        out.push(STRESS_MARKER);
        out.push_str(word);
        return out;
    }

    // Select the last vowel of the word minus its final letter. With two
    // vowels in the word, at least one survives the truncation.
    let truncated = &chars[..chars.len() - 1];
    let pos = match truncated
        .iter()
        .rposition(|c| is_vowel(c.to_ascii_lowercase()))
    {
        Some(pos) => pos,
        None => return word.to_string(),
    };

    let adj1 = if pos >= 1 { Some(chars[pos - 1]) } else { None };
    let adj2 = if pos >= 2 { Some(chars[pos - 2]) } else { None };

    let shift: isize = if pos == 0 || adj1.map_or(false, is_shift_blocking) {
        0
    } else if adj1.map_or(false, is_semivowel)
        && !adj2.map_or(false, |c| is_semivowel(c) || is_shift_blocking(c))
    {
        -2
    } else if adj1.map_or(false, is_liquid) && adj2.map_or(false, is_onset_consonant) {
        -2
    } else {
        -1
    };

    // A two-left shift from position 1 would land before the word; the
    // marker is clamped to the first letter instead.
    let at = (pos as isize + shift).max(0) as usize;
    trace!(word, pos, shift, at, "stress placement");

    let mut out = String::with_capacity(word.len() + STRESS_MARKER.len_utf8());
    out.extend(chars[..at].iter());
    out.push(STRESS_MARKER);
    out.extend(chars[at..].iter());
    out
}

/// Add stress markers across a whole text, word by word.
///
/// Every character between word spans is copied through verbatim, so
/// stripping the markers from the output recovers the input.
pub fn stress_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut prev_end = 0;
    for span in word_spans(text) {
        out.push_str(&text[prev_end..span.start]);
        out.push_str(&stress_word(span.text));
        prev_end = span.end();
    }
    out.push_str(&text[prev_end..]);
    out
}
