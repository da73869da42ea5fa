//! libglobasa crate root
//!
//! Globasa text to IPA transcription: word tokenization, primary-stress
//! placement by phonotactic rule, letter-to-IPA substitution, and
//! optional speech-synthesis markup for text-to-speech consumers.
//!
//! Public API exported here:
//! - `Engine` and `Transcription` from `engine`
//! - `word_spans` and `WordSpan` from `tokenizer`
//! - `stress_word` and `stress_text` from `stress`
//! - `transliterate` from `ipa`
//! - `wrap` from `ssml`
//! - letter classes and the skip list from `alphabet`

pub mod alphabet;
pub mod engine;
pub mod ipa;
pub mod ssml;
pub mod stress;
pub mod tokenizer;

// Convenience re-exports for common types used by callers.
pub use alphabet::STRESS_MARKER;
pub use engine::{Engine, Transcription};
pub use ipa::transliterate;
pub use ssml::wrap;
pub use stress::{stress_text, stress_word};
pub use tokenizer::{word_spans, WordSpan, WordSpans};
