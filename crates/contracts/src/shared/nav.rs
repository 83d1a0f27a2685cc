fn trim_trailing_slash(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Whether a navigation link pointing at `href` should be highlighted while
/// the browser is on `current_path`.
///
/// Non-exact links also match nested pages on a segment boundary, so `/docs`
/// is active on `/docs/hooks` but not on `/docsearch`. The root link only
/// matches the root.
pub fn is_route_active(current_path: &str, href: &str, exact: bool) -> bool {
    let current = trim_trailing_slash(current_path);
    let href = trim_trailing_slash(href);

    if exact || href == "/" {
        return current == href;
    }

    current == href
        || current
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(is_route_active("/docs", "/docs", true));
        assert!(is_route_active("/docs/", "/docs", true));
        assert!(!is_route_active("/docs/hooks", "/docs", true));
    }

    #[test]
    fn test_prefix_match_on_segment_boundary() {
        assert!(is_route_active("/docs/hooks", "/docs", false));
        assert!(is_route_active("/docs/hooks/", "/docs/", false));
        assert!(!is_route_active("/docsearch", "/docs", false));
        assert!(!is_route_active("/blog", "/docs", false));
    }

    #[test]
    fn test_root_only_matches_root() {
        assert!(is_route_active("/", "/", false));
        assert!(is_route_active("", "/", false));
        assert!(!is_route_active("/docs", "/", false));
    }
}
