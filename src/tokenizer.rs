//! src/tokenizer.rs

/// Deletes the 32 ASCII punctuation characters without substituting
/// whitespace, so punctuation-joined words concatenate: "end.No" -> "endNo".
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Splits punctuation-stripped text on whitespace runs. Case is preserved:
/// "The" and "the" are distinct tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    strip_punctuation(text)
        .split_whitespace()
        .map(String::from)
        .collect()
}
