//! Word-span scanner.
//!
//! Splits text into maximal word-like spans while leaving every character
//! between spans untouched, so that callers can splice transformed words
//! back between the original separators.
//!
//! Invariant: concatenating, in order, each inter-span gap, each span's
//! text, and the tail after the last span reproduces the input exactly.

use crate::alphabet::{is_word_char, is_word_joiner};

/// A word occurrence: its byte offset in the source text and its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan<'a> {
    pub start: usize,
    pub text: &'a str,
}

impl<'a> WordSpan<'a> {
    /// Byte offset one past the end of the span.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Iterator over the word spans of a text, left to right.
#[derive(Debug, Clone)]
pub struct WordSpans<'a> {
    text: &'a str,
    pos: usize,
}

/// Scan `text` for word spans.
///
/// A span starts at a word character and extends over further word
/// characters; a run of hyphens/apostrophes stays inside the span only
/// when more word characters follow it, so `kitabu-` yields the span
/// `kitabu` with the hyphen left to the surrounding text. Spans are never
/// empty, and the iterator can be created again from the same text at any
/// time.
pub fn word_spans(text: &str) -> WordSpans<'_> {
    WordSpans { text, pos: 0 }
}

impl<'a> Iterator for WordSpans<'a> {
    type Item = WordSpan<'a>;

    fn next(&mut self) -> Option<WordSpan<'a>> {
        let rest = &self.text[self.pos..];
        let start = match rest.char_indices().find(|&(_, c)| is_word_char(c)) {
            Some((i, _)) => self.pos + i,
            None => {
                self.pos = self.text.len();
                return None;
            }
        };

        let mut chars = self.text[start..].char_indices().peekable();
        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if is_word_char(c) {
                chars.next();
                end = start + i + c.len_utf8();
            } else if is_word_joiner(c) {
                // A joiner run is internal only when a word character follows.
                let mut ahead = chars.clone();
                while ahead.peek().map_or(false, |&(_, d)| is_word_joiner(d)) {
                    ahead.next();
                }
                if ahead.peek().map_or(false, |&(_, d)| is_word_char(d)) {
                    while chars.peek().map_or(false, |&(_, d)| is_word_joiner(d)) {
                        chars.next();
                    }
                } else {
                    break;
                }
            } else {
                break;
            }
        }

        self.pos = end;
        Some(WordSpan {
            start,
            text: &self.text[start..end],
        })
    }
}
