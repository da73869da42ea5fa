//! High-level transcription engine.
//!
//! Composes the pipeline (lowercase, per-word stress placement, letter
//! substitution, optional markup wrapping) behind a small stateless
//! facade. All calls are pure and may run concurrently; the engine does
//! no I/O and installs no tracing subscriber.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ipa, ssml, stress};

/// Both renderings of one input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcription {
    /// IPA with inline stress markers.
    pub ipa: String,
    /// The same IPA packaged as speech-synthesis markup.
    pub ssml: String,
}

/// Stateless transcription facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Engine
    }

    /// Convert Globasa text to IPA with stress markers.
    ///
    /// Lowercases the input, stresses each word in place, then applies
    /// the letter substitutions. Characters outside the Globasa alphabet
    /// pass through untouched.
    ///
    /// # Example
    /// ```
    /// use libglobasa::Engine;
    ///
    /// let engine = Engine::new();
    /// assert_eq!(engine.to_ipa("kitabu"), "kiˈtabu");
    /// ```
    pub fn to_ipa(&self, text: &str) -> String {
        debug!(len = text.len(), "transcribing to ipa");
        let lowered = text.to_lowercase();
        let stressed = stress::stress_text(&lowered);
        ipa::transliterate(&stressed)
    }

    /// Convert Globasa text to speech-synthesis markup.
    pub fn to_ssml(&self, text: &str) -> String {
        ssml::wrap(&self.to_ipa(text))
    }

    /// Produce both renderings at once.
    pub fn transcribe(&self, text: &str) -> Transcription {
        let ipa = self.to_ipa(text);
        let ssml = ssml::wrap(&ipa);
        Transcription { ipa, ssml }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_input_is_lowercased_first() {
        let engine = Engine::new();
        assert_eq!(engine.to_ipa("KITABU"), "kiˈtabu");
    }

    #[test]
    fn transcription_renderings_agree() {
        let engine = Engine::new();
        let t = engine.transcribe("mesajo");
        assert_eq!(t.ipa, engine.to_ipa("mesajo"));
        assert_eq!(t.ssml, engine.to_ssml("mesajo"));
    }
}
