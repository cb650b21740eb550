use regex::Regex;

/// Minimal syntactic check: `local@domain.tld` with no whitespace and a single `@`.
/// The input is matched as-is, surrounding whitespace is not trimmed.
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(valid_email("a@b.com"));
        assert!(valid_email("a@b.co"));
        assert!(valid_email("Sincere@april.biz"));
        assert!(valid_email("first.last@sub.domain.org"));
    }

    #[test]
    fn test_missing_at() {
        assert!(!valid_email("plainaddress"));
        assert!(!valid_email(""));
        assert!(!valid_email("a.b.com"));
    }

    #[test]
    fn test_missing_dot_after_at() {
        assert!(!valid_email("a@b"));
        assert!(!valid_email("a.b@c"));
        assert!(!valid_email("a@b."));
    }

    #[test]
    fn test_multiple_at() {
        assert!(!valid_email("a@b@c.com"));
        assert!(!valid_email("a@@b.com"));
    }

    #[test]
    fn test_whitespace() {
        assert!(!valid_email(" a@b.com"));
        assert!(!valid_email("a@b.com "));
        assert!(!valid_email("a b@c.com"));
        assert!(!valid_email("a@b .com"));
        assert!(!valid_email("a@b.com\n"));
    }

    #[test]
    fn test_empty_segments() {
        assert!(!valid_email("@b.com"));
        assert!(!valid_email("a@.com"));
    }
}
