//! Identifier and slug conversions.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Java's default `\s`: space, tab, newline, vertical tab, form feed, carriage return.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n\x0B\x0C\r]").expect("whitespace pattern is valid"));

/// Anything outside ASCII `\w` and `-`.
static NON_LATIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-]").expect("non-latin pattern is valid"));

/// Converts a dotted package name into a class reference (`com.a.B` -> `Lcom/a/B`).
///
/// Surrounding whitespace is trimmed; nothing else is validated.
#[must_use]
pub fn to_class_name(package_name: &str) -> String {
    let body = package_name.trim().replace('.', "/");
    let mut out = String::with_capacity(body.len() + 1);
    out.push('L');
    out.push_str(&body);
    out
}

/// Converts arbitrary text into a lowercase, URL and filename safe slug.
///
/// Every whitespace character becomes one hyphen (runs are not collapsed), diacritics
/// are dropped through NFD decomposition, and any remaining character outside
/// `[A-Za-z0-9_-]` is removed. Input made only of symbols yields an empty string.
#[must_use]
pub fn to_slug(input: &str) -> String {
    let hyphenated = WHITESPACE.replace_all(input, "-");
    let decomposed: String = hyphenated.nfd().collect();
    NON_LATIN.replace_all(&decomposed, "").to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_name_replaces_dots_and_prefixes() {
        assert_eq!(to_class_name("com.example.App"), "Lcom/example/App");
        assert_eq!(to_class_name("  org.pkg  "), "Lorg/pkg");
        assert_eq!(to_class_name(""), "L");
        assert_eq!(to_class_name("..bad"), "L//bad");
    }

    #[test]
    fn slug_basic() {
        assert_eq!(to_slug("Hello World"), "hello-world");
        assert_eq!(to_slug("Show Java 3.0!"), "show-java-30");
    }

    #[test]
    fn slug_keeps_one_hyphen_per_whitespace_char() {
        assert_eq!(to_slug("  multiple   spaces"), "--multiple---spaces");
        assert_eq!(to_slug("a\t\nb"), "a--b");
    }

    #[test]
    fn slug_strips_diacritics_and_symbols() {
        assert_eq!(to_slug("Ångström café"), "angstrom-cafe");
        assert_eq!(to_slug("日本語"), "");
        assert_eq!(to_slug("@#$%"), "");
        assert_eq!(to_slug(""), "");
    }

    #[test]
    fn slug_keeps_underscores_and_digits() {
        assert_eq!(to_slug("snake_case_42"), "snake_case_42");
    }
}
