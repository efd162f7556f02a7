use unicode_normalization::UnicodeNormalization;

/// Normalize captured page text: NFKC (fullwidth forms fold to ASCII,
/// halfwidth katakana to full), carriage returns stripped, trimmed.
pub fn clean(text: &str) -> String {
    let normalized: String = text.nfkc().collect();
    normalized.replace('\r', "").trim().to_string()
}

/// Like [`clean`], then remove every remaining whitespace character.
/// Decoration particles are captured with layout whitespace around them.
pub fn clean_tight(text: &str) -> String {
    clean(text).chars().filter(|c| !c.is_whitespace()).collect()
}
