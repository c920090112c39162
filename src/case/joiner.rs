/// Join tokens as camelCase: the first token lowercased, every following token
/// with an uppercase initial and lowercase remainder.
pub fn join_camel(tokens: &[&str]) -> String {
    let mut result = String::with_capacity(tokens.iter().map(|t| t.len()).sum());

    for (i, token) in tokens.iter().enumerate() {
        if i == 0 {
            result.push_str(&token.to_ascii_lowercase());
            continue;
        }

        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            for c in chars {
                result.push(c.to_ascii_lowercase());
            }
        }
    }

    result
}

/// Join tokens as dot.case: every token lowercased, separated by `.`.
pub fn join_dot(tokens: &[&str]) -> String {
    tokens
        .iter()
        .map(|t| t.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(".")
}
