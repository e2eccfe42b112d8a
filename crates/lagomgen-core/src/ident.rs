//! Identifier sanitizing for user-supplied free text
//!
//! Application names come from an interactive prompt and can contain
//! anything. Generated artifacts (package names, directory names) need a
//! plain alphanumeric identifier, so these helpers reduce free text to one.

/// Identifier used when sanitizing leaves nothing behind
const FALLBACK_IDENT: &str = "APP";

/// Reduce free text to an alphanumeric identifier.
///
/// Leading characters that are not ASCII letters are stripped first, then
/// every remaining character that is not an ASCII letter or digit is removed.
/// `None` or an empty result falls back to `"APP"`.
pub fn sanitize_alpha_num(name: Option<&str>) -> String {
    let cleaned: String = name
        .map(|n| {
            n.chars()
                .skip_while(|c| !c.is_ascii_alphabetic())
                .filter(|c| c.is_ascii_alphanumeric())
                .collect()
        })
        .unwrap_or_default();

    if cleaned.is_empty() {
        FALLBACK_IDENT.to_string()
    } else {
        cleaned
    }
}

/// Same as [`sanitize_alpha_num`], lower-cased.
pub fn sanitize_alpha_num_lower(name: Option<&str>) -> String {
    sanitize_alpha_num(name).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_non_letters_then_symbols() {
        assert_eq!(sanitize_alpha_num(Some("123-John's App!")), "JohnsApp");
    }

    #[test]
    fn test_digits_kept_after_first_letter() {
        assert_eq!(sanitize_alpha_num(Some("1a2")), "a2");
        assert_eq!(sanitize_alpha_num(Some("app2000")), "app2000");
    }

    #[test]
    fn test_missing_name_falls_back() {
        assert_eq!(sanitize_alpha_num(None), "APP");
    }

    #[test]
    fn test_all_symbols_falls_back() {
        assert_eq!(sanitize_alpha_num(Some("!@#$%")), "APP");
        assert_eq!(sanitize_alpha_num(Some("")), "APP");
    }

    #[test]
    fn test_lowercase_variant() {
        assert_eq!(sanitize_alpha_num_lower(Some("MyApp")), "myapp");
        assert_eq!(sanitize_alpha_num_lower(None), "app");
    }
}
