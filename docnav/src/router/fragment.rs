//! Fragment resolution.

/// Key rendered when the location carries no fragment at all.
pub const DEFAULT_PAGE: &str = "home";

/// Convert a raw URL fragment into a route-table key.
///
/// An empty fragment maps to [`DEFAULT_PAGE`]; otherwise the leading `#`
/// is stripped and the remainder is the key. Anything else passes through
/// unchanged, so this is total over all string inputs. The resolver knows
/// nothing about the route table: an unregistered key is still returned,
/// and the lookup downstream decides what that means.
pub fn resolve(fragment: &str) -> &str {
    if fragment.is_empty() {
        DEFAULT_PAGE
    } else {
        fragment.strip_prefix('#').unwrap_or(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragment_resolves_to_home() {
        assert_eq!(resolve(""), DEFAULT_PAGE);
    }

    #[test]
    fn leading_delimiter_is_stripped() {
        assert_eq!(resolve("#about"), "about");
        assert_eq!(resolve("#guide"), "guide");
    }

    #[test]
    fn bare_delimiter_yields_empty_key() {
        assert_eq!(resolve("#"), "");
    }

    #[test]
    fn only_the_leading_delimiter_is_special() {
        assert_eq!(resolve("#a#b"), "a#b");
        assert_eq!(resolve("plain"), "plain");
    }
}
