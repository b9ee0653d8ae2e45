use regex::Captures;

/// Text of a named group, treating an empty match the same as no match.
pub fn capture<'h>(captures: &Captures<'h>, group: &str) -> Option<&'h str> {
    captures
        .name(group)
        .map(|found| found.as_str())
        .filter(|value| !value.is_empty())
}

/// Pick between the bracketed and the bare spelling of one identifier.
///
/// The bracketed value wins whenever it is present. It is the only way to
/// spell names holding dots or spaces, e.g. `[Database.Schema.Table1]`.
pub fn resolve_identifier<'h>(captures: &Captures<'h>, bracketed: &str, bare: &str) -> Option<&'h str> {
    capture(captures, bracketed).or_else(|| capture(captures, bare))
}

/// Same as [`resolve_identifier`], falling back to `default` when neither
/// spelling matched.
pub fn resolve_identifier_or<'h>(
    captures: &Captures<'h>,
    bracketed: &str,
    bare: &str,
    default: &'h str,
) -> &'h str {
    resolve_identifier(captures, bracketed, bare).unwrap_or(default)
}
