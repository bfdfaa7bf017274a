use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Everything that is not a word character or whitespace, i.e. punctuation.
    static ref STRIP: Regex = Regex::new(r"[^\w\s]").expect("valid regex");
}

/// Tokenize text into terms: strip punctuation, then split on single spaces.
///
/// Terms keep their original case and left-to-right order; there is no
/// stemming, stopword removal, or other normalization. Empty tokens from
/// leading, trailing, or consecutive spaces are dropped, so the empty
/// string tokenizes to an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned = STRIP.replace_all(text, "");
    cleaned
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
