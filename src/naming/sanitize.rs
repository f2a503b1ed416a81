/// Characters rejected by at least one common filesystem.
const ILLEGAL: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

/// Make `name` safe as a single path component: `/` becomes `-`, illegal
/// characters are dropped, and leading/trailing periods and spaces are trimmed.
pub fn sanitize_component(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if c == '/' { '-' } else { c })
        .filter(|c| !ILLEGAL.contains(c))
        .collect();
    replaced.trim_matches(|c| c == '.' || c == ' ').to_string()
}
