//! Speech-synthesis markup for transliterated IPA text.
//!
//! Splits the text into sentences and wraps each in a phoneme element,
//! re-attaching its end punctuation after the closing tag. The tags and
//! attribute spellings are fixed; the downstream reader matches them
//! literally: `<prosody rate="slow">`,
//! `<phoneme alphabet="ipa" ph="...">`, `</phoneme>`,
//! `<break time="0.25s"/>`, `</prosody>`.

/// Punctuation that ends a sentence.
const SENTENCE_ENDERS: &[char] = &[';', ':', '.', '?', '!'];

/// Quote characters removed before segmentation, ASCII and curly.
const QUOTES: &[char] = &['\'', '"', '“', '”', '‘', '’'];

fn is_sentence_ender(c: char) -> bool {
    SENTENCE_ENDERS.contains(&c)
}

/// Characters that can open a sentence of transliterated text: ASCII
/// letters, the stress marker, and the letters of the multi-character
/// IPA symbols.
fn opens_sentence(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, 'ˈ' | '͡' | 'ʃ' | 'ʒ' | 'ɾ')
}

/// Split text into sentences.
///
/// A sentence ends after one of `;:.?!` when a letter or IPA symbol
/// follows; the punctuation mark stays with its sentence, and whitespace
/// between sentences is consumed at the split. The remainder after the
/// last split is always its own sentence, empty only for empty input.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut pos = 0;
    while pos < text.len() {
        let c = match text[pos..].chars().next() {
            Some(c) => c,
            None => break,
        };
        let after = pos + c.len_utf8();
        if is_sentence_ender(c) {
            let rest = &text[after..];
            let trimmed = rest.trim_start();
            if trimmed.chars().next().map_or(false, opens_sentence) {
                sentences.push(&text[start..after]);
                start = after + (rest.len() - trimmed.len());
                pos = start;
                continue;
            }
        }
        pos = after;
    }
    sentences.push(&text[start..]);
    sentences
}

/// Wrap transliterated IPA text for a text-to-speech consumer.
///
/// Commas become semicolons, quotes are dropped, and each sentence body
/// goes into a phoneme element with its end punctuation re-attached after
/// the closing tag. Sentences that did not end in a semicolon get a short
/// break; the whole result is read at slow rate.
pub fn wrap(text: &str) -> String {
    let text = text.replace(',', ";");
    let text: String = text.chars().filter(|c| !QUOTES.contains(c)).collect();

    let mut out = String::from("<prosody rate=\"slow\">");
    for sentence in split_sentences(&text) {
        let ends_in_semicolon = sentence.ends_with(';');
        let (body, punctuation) = match sentence.chars().last() {
            Some(c) if is_sentence_ender(c) => {
                (&sentence[..sentence.len() - c.len_utf8()], Some(c))
            }
            _ => (sentence, None),
        };
        out.push_str("<phoneme alphabet=\"ipa\" ph=\"");
        out.push_str(body);
        out.push_str("\"></phoneme>");
        if let Some(p) = punctuation {
            out.push(p);
        }
        if !ends_in_semicolon {
            out.push_str("<break time=\"0.25s\"/>");
        }
    }
    out.push_str("</prosody>");
    out
}
