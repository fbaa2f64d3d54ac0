use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[A-Za-z0-9_]+").expect("valid regex");
}

/// Normalize one raw token into a term.
///
/// All runs of word characters are concatenated without a separator and
/// lowercased, so `Don't` becomes `dont`. Returns `None` when the token holds
/// no word character at all.
pub fn normalize_token(raw: &str) -> Option<String> {
    let mut term = String::new();
    for mat in WORD.find_iter(raw) {
        term.push_str(mat.as_str());
    }
    if term.is_empty() {
        return None;
    }
    term.make_ascii_lowercase();
    Some(term)
}

/// Tokenize document text: lines split on `'\n'`, raw tokens split on a single space.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| line.split(' '))
        .filter_map(normalize_token)
        .collect()
}

/// Tokenize a query. Queries are never split into lines.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query.split(' ').filter_map(normalize_token).collect()
}
