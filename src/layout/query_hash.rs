use sha2::{Digest, Sha256};

/// Key under which the layout of a query is stored: the lower-case hex
/// SHA-256 of the trimmed query text.
pub fn query_hash(sql: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sql.trim().as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use crate::layout::query_hash;

    #[test]
    pub fn test_query_hash_ignores_outer_whitespace() {
        assert_eq!(query_hash("SELECT * FROM a"), query_hash("\n  SELECT * FROM a \t"));
        assert_ne!(query_hash("SELECT * FROM a"), query_hash("SELECT * FROM b"));
    }

    #[test]
    pub fn test_query_hash_format() {
        let hash = query_hash("");

        assert_eq!(hash, "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
