/// Lowercase the first character: `TargetActor` -> `targetActor`.
///
/// A leading run of capitals is lowered as a unit, so acronyms read
/// naturally (`URLPath` -> `urlPath`).
pub fn to_camel_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut upper_run = chars.iter().take_while(|c| c.is_ascii_uppercase()).count();
    // Keep the capital that starts the next word.
    if upper_run > 1 && upper_run < chars.len() {
        upper_run -= 1;
    }
    let upper_run = upper_run.max(1).min(chars.len());

    chars[..upper_run]
        .iter()
        .map(|c| c.to_ascii_lowercase())
        .chain(chars[upper_run..].iter().copied())
        .collect()
}

/// Strip the Hungarian `b` prefix of boolean members: `bHidden` -> `Hidden`.
pub fn strip_bool_prefix(s: &str) -> &str {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some('b'), Some(c)) if c.is_ascii_uppercase() => &s[1..],
        _ => s,
    }
}
