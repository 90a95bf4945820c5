#[cfg(test)]
mod tests {
    use schemascope::filter::InclusionRule;

    #[test]
    fn test_include_all_default() {
        let rule = InclusionRule::default();
        assert!(rule.test("main.orders"));
        assert!(!rule.test(""));
        assert!(!rule.excludes_all());
    }

    #[test]
    fn test_exclude_all() {
        let rule = InclusionRule::ExcludeAll;
        assert!(!rule.test("main.orders"));
        assert!(rule.excludes_all());
    }

    #[test]
    fn test_include_pattern() {
        let rule = InclusionRule::include(r"main\..*").unwrap();
        assert!(rule.test("main.orders"));
        assert!(!rule.test("temp.orders"));
    }

    #[test]
    fn test_exclusion_wins() {
        let rule =
            InclusionRule::from_patterns(Some(r"main\..*"), Some(r".*\.audit_.*")).unwrap();
        assert!(rule.test("main.orders"));
        assert!(!rule.test("main.audit_log"));
        assert!(!rule.test("temp.orders"));
    }

    #[test]
    fn test_exclude_only() {
        let rule = InclusionRule::from_patterns(None, Some(r".*internal.*")).unwrap();
        assert!(rule.test("main.orders"));
        assert!(!rule.test("main.internal_state"));
    }

    #[test]
    fn test_no_patterns_is_include_all() {
        let rule = InclusionRule::from_patterns(None, None).unwrap();
        assert!(matches!(rule, InclusionRule::IncludeAll));
    }

    #[test]
    fn test_bad_pattern_is_error() {
        assert!(InclusionRule::include("(unclosed").is_err());
    }
}
