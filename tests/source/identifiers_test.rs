#[cfg(test)]
mod tests {
    use schemascope::source::Identifiers;

    #[test]
    fn test_reserved_words() {
        let identifiers = Identifiers::default();
        assert!(identifiers.is_reserved("SELECT"));
        assert!(identifiers.is_reserved("select"));
        assert!(identifiers.is_reserved("  Table  "));
        assert!(!identifiers.is_reserved("orders"));
    }

    #[test]
    fn test_needs_quoting() {
        let identifiers = Identifiers::default();
        assert!(!identifiers.needs_quoting("orders"));
        assert!(!identifiers.needs_quoting("order_lines2"));
        assert!(identifiers.needs_quoting("order lines"));
        assert!(identifiers.needs_quoting("2fast"));
        assert!(identifiers.needs_quoting("select"));
        assert!(!identifiers.needs_quoting(""));
    }

    #[test]
    fn test_quote_name() {
        let identifiers = Identifiers::default();
        assert_eq!(identifiers.quote_name("orders"), "orders");
        assert_eq!(identifiers.quote_name("order lines"), "\"order lines\"");
        // Embedded quotes are doubled.
        assert_eq!(identifiers.quote_name("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_unquote_name() {
        let identifiers = Identifiers::default();
        assert_eq!(identifiers.unquote_name("\"order lines\""), "order lines");
        assert_eq!(identifiers.unquote_name("orders"), "orders");
        assert_eq!(identifiers.unquote_name("\"a\"\"b\""), "a\"b");
    }

    #[test]
    fn test_custom_quote_string() {
        let identifiers = Identifiers::new("`");
        assert_eq!(identifiers.quote_name("select"), "`select`");
        assert_eq!(identifiers.unquote_name("`orders`"), "orders");
    }
}
