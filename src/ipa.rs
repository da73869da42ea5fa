// libglobasa/src/ipa.rs
//
// Globasa Latin script to IPA letter substitutions.
//
// Each rule rewrites every occurrence of its letter across the whole text
// before the next rule runs. The order matters: y→j and h→x write letters
// that earlier rules consume, so they run last and their output stays
// literal. No earlier rule's output contains a later rule's source
// letter, so a single pass never rewrites its own output; any extension
// of this table has to keep that property.

/// Letter-to-IPA rules, applied strictly in order.
pub const IPA_REPLACEMENTS: &[(char, &str)] = &[
    ('c', "t͡ʃ"),
    ('j', "d͡ʒ"),
    ('r', "ɾ"),
    ('x', "ʃ"),
    ('y', "j"),
    ('h', "x"),
];

/// Rewrite stressed, lowercased text into IPA.
///
/// Letters without a rule, stress markers, punctuation and anything else
/// pass through untouched.
///
/// # Examples
/// ```
/// use libglobasa::ipa::transliterate;
///
/// assert_eq!(transliterate("carxe"), "t͡ʃaɾʃe");
/// assert_eq!(transliterate("hoji"), "xod͡ʒi");
/// assert_eq!(transliterate("yama"), "jama");
/// ```
pub fn transliterate(text: &str) -> String {
    let mut out = text.to_string();
    for &(letter, ipa) in IPA_REPLACEMENTS {
        out = out.replace(letter, ipa);
    }
    out
}
