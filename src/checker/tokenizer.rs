/// Characters stripped from both ends of a token before lookup.
pub const PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Index in the whitespace-split sequence
    pub position: usize,
    pub original: &'a str,
    pub normalized: String,
}

/// Split text on runs of whitespace.
///
/// Interior runs collapse, but leading or trailing whitespace produces an empty
/// token at the start or end of the sequence. Those empty tokens still take up
/// a position, so `position` only equals the word index for text that does not
/// start with whitespace. Downstream consumers rely on this numbering.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let pieces: Vec<&str> = text.split(char::is_whitespace).collect();
    let last = pieces.len() - 1;

    pieces
        .into_iter()
        .enumerate()
        .filter(|(i, piece)| !piece.is_empty() || *i == 0 || *i == last)
        .enumerate()
        .map(|(position, (_, original))| Token {
            position,
            original,
            normalized: normalize(original),
        })
        .collect()
}

/// Lowercase a token and strip surrounding punctuation.
///
/// Only the ends are trimmed: `"don't"` keeps its apostrophe and `"e.g."`
/// becomes `"e.g"`.
pub fn normalize(token: &str) -> String {
    token
        .to_lowercase()
        .trim_matches(|c: char| PUNCTUATION.contains(&c))
        .to_string()
}
