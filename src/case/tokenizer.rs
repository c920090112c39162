use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anything that is not an ASCII letter or digit separates words
    static ref SEPARATOR: Regex = Regex::new(r"[^A-Za-z0-9]+").unwrap();
}

/// Split text into word tokens.
///
/// Every maximal run of characters outside `[A-Za-z0-9]` is a word boundary
/// and is dropped, so the returned slices are never empty. A run containing a
/// lowercase letter is further split before each uppercase letter, which keeps
/// camelCased text stable (`helloWorld`, `aBC`). Runs without lowercase
/// letters (`SCREEN`, `HTTP`) stay whole. Input with no ASCII alphanumerics
/// yields an empty vector.
pub fn tokenize(input: &str) -> Vec<&str> {
    SEPARATOR
        .split(input)
        .filter(|run| !run.is_empty())
        .flat_map(split_humps)
        .collect()
}

/// Split an alphanumeric run before every uppercase letter, unless the run
/// has no lowercase letters at all.
fn split_humps(run: &str) -> Vec<&str> {
    if !run.bytes().any(|b| b.is_ascii_lowercase()) {
        return vec![run];
    }

    let mut words = Vec::new();
    let mut start = 0;

    for (i, b) in run.bytes().enumerate().skip(1) {
        if b.is_ascii_uppercase() {
            words.push(&run[start..i]);
            start = i;
        }
    }
    words.push(&run[start..]);

    words
}
