//! Newline-delimited list response bodies

/// Parse a list response body into its entries
///
/// Collection resources answer with one entry per line. Blank lines carry
/// no entry and are dropped; order is preserved. CRLF line endings are
/// handled.
///
/// # Examples
///
/// ```rust
/// use wikirest_core::parse_list;
///
/// assert_eq!(parse_list("a\nb\n\nc"), vec!["a", "b", "c"]);
/// assert!(parse_list("").is_empty());
/// ```
pub fn parse_list(body: &str) -> Vec<String> {
    body.lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_body_order() {
        assert_eq!(parse_list("b\na\nc\n"), vec!["b", "a", "c"]);
    }

    #[test]
    fn drops_blank_entries() {
        assert_eq!(parse_list("a\nb\n\nc"), vec!["a", "b", "c"]);
        assert_eq!(parse_list("\n\n"), Vec::<String>::new());
    }

    #[test]
    fn handles_crlf_bodies() {
        assert_eq!(parse_list("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn empty_body_is_an_empty_list() {
        assert_eq!(parse_list(""), Vec::<String>::new());
    }

    #[test]
    fn entries_keep_interior_whitespace() {
        assert_eq!(parse_list("a page\nanother page"), vec!["a page", "another page"]);
    }
}
