use unicode_normalization::UnicodeNormalization;

/// Normalize free text into the canonical matching form: NFKC fold,
/// lowercase, strip ASCII punctuation (spaces survive so the result can
/// still be tokenized), trim the ends.
///
/// Idempotent: normalizing an already-normalized string returns it
/// unchanged.
pub fn normalize(text: &str) -> String {
    let folded = text.nfkc().collect::<String>().to_lowercase();
    // recompose marks left adjacent after punctuation removal, so the
    // output is itself in normal form
    let stripped: String = folded
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .nfc()
        .collect();
    stripped.trim().to_string()
}

/// Split text into lowercase tokens: whitespace-delimited words with the
/// punctuation removed from each word. Words that were pure punctuation
/// vanish, so the result never contains an empty token, and a word like
/// "node.js" collapses to "nodejs" rather than splitting in two.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|word| {
            let token: String = word
                .chars()
                .filter(|c| !c.is_ascii_punctuation())
                .flat_map(char::to_lowercase)
                .collect();
            (!token.is_empty()).then_some(token)
        })
        .collect()
}
