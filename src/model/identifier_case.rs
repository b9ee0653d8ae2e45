/// Compare two SQL identifiers ignoring case.
///
/// Both sides are lower-cased char by char, so non-ASCII identifiers fold the
/// same way `str::to_lowercase` would without allocating.
pub fn same_identifier(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

/// Key used wherever identifiers are stored for case-insensitive lookup.
pub fn fold_identifier(value: &str) -> String {
    value.to_lowercase()
}

/// Case-insensitive substring test used by table search.
pub fn contains_identifier(haystack: &str, needle: &str) -> bool {
    fold_identifier(haystack).contains(&fold_identifier(needle))
}
