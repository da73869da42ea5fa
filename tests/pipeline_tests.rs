// End-to-end transcription flows exercising the public API: tokenizer
// round-trips, IPA conversion, and markup packaging.

use libglobasa::{stress_text, transliterate, word_spans, Engine, STRESS_MARKER};

#[test]
fn ipa_conversion_of_a_short_sentence() {
    let engine = Engine::new();
    assert_eq!(engine.to_ipa("Hej, mo amiga."), "ˈxed͡ʒ, ˈmo aˈmiga.");
}

#[test]
fn markup_for_a_comma_sentence() {
    // The comma becomes a semicolon before segmentation, so the first
    // phrase carries the ';' after its closing tag and gets no break.
    let engine = Engine::new();
    assert_eq!(
        engine.to_ssml("Hej, mo amiga."),
        concat!(
            "<prosody rate=\"slow\">",
            "<phoneme alphabet=\"ipa\" ph=\"ˈxed͡ʒ\"></phoneme>;",
            "<phoneme alphabet=\"ipa\" ph=\"ˈmo aˈmiga\"></phoneme>.",
            "<break time=\"0.25s\"/>",
            "</prosody>",
        )
    );
}

#[test]
fn markup_for_a_single_sentence() {
    let engine = Engine::new();
    assert_eq!(
        engine.to_ssml("Mesajo bon."),
        concat!(
            "<prosody rate=\"slow\">",
            "<phoneme alphabet=\"ipa\" ph=\"meˈsad͡ʒo ˈbon\"></phoneme>.",
            "<break time=\"0.25s\"/>",
            "</prosody>",
        )
    );
}

#[test]
fn markup_strips_quotes() {
    let engine = Engine::new();
    assert_eq!(
        engine.to_ssml("\"suba\" bon"),
        concat!(
            "<prosody rate=\"slow\">",
            "<phoneme alphabet=\"ipa\" ph=\"ˈsuba ˈbon\"></phoneme>",
            "<break time=\"0.25s\"/>",
            "</prosody>",
        )
    );
}

#[test]
fn one_phoneme_element_per_sentence() {
    let engine = Engine::new();
    let ssml = engine.to_ssml("Bon? Bon! Bon.");
    assert_eq!(ssml.matches("<phoneme").count(), 3);
    assert_eq!(ssml.matches("<break").count(), 3);
    assert!(ssml.starts_with("<prosody rate=\"slow\">"));
    assert!(ssml.ends_with("</prosody>"));
}

#[test]
fn stress_markers_are_the_only_change() {
    let input = "hej, mo amiga. kitabu bon!";
    let stressed = stress_text(input);

    let stripped: String = stressed.chars().filter(|&c| c != STRESS_MARKER).collect();
    assert_eq!(stripped, input);

    let markers = stressed.chars().filter(|&c| c == STRESS_MARKER).count();
    assert_eq!(stressed.chars().count(), input.chars().count() + markers);
}

#[test]
fn second_transliteration_pass_is_a_noop_without_y_or_h() {
    let once = transliterate("carxe jini");
    assert_eq!(once, "t͡ʃaɾʃe d͡ʒini");
    assert_eq!(transliterate(&once), once);
}

#[test]
fn empty_input_flows_through_every_stage() {
    let engine = Engine::new();
    assert_eq!(engine.to_ipa(""), "");
    assert_eq!(
        engine.to_ssml(""),
        concat!(
            "<prosody rate=\"slow\">",
            "<phoneme alphabet=\"ipa\" ph=\"\"></phoneme>",
            "<break time=\"0.25s\"/>",
            "</prosody>",
        )
    );
}

#[test]
fn word_spans_report_offsets_and_keep_gaps() {
    let text = "  kitabu-mesa, 'oko'!";
    let spans: Vec<_> = word_spans(text).collect();
    assert_eq!(spans.len(), 2);
    assert_eq!((spans[0].start, spans[0].text), (2, "kitabu-mesa"));
    assert_eq!((spans[1].start, spans[1].text), (16, "oko"));
}

#[test]
fn transcribe_bundles_both_renderings() {
    let engine = Engine::new();
    let t = engine.transcribe("mesajo");
    assert_eq!(t.ipa, "meˈsad͡ʒo");
    assert!(t.ssml.contains("ph=\"meˈsad͡ʒo\""));
}

#[test]
fn transcription_serializes_to_json() {
    let engine = Engine::new();
    let json = serde_json::to_string(&engine.transcribe("bon")).unwrap();
    assert!(json.contains("\"ipa\":\"ˈbon\""));
    let back: libglobasa::Transcription = serde_json::from_str(&json).unwrap();
    assert_eq!(back.ipa, "ˈbon");
}
