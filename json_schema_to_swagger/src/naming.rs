//! Definition and Java-name derivation from property keys and file stems.
//!
//! The camel-case converters are defined for `UPPER_UNDERSCORE` input. Other
//! input is upper-cased first, so `fooBar` becomes `Foobar` rather than
//! `FooBar`: mixed-case stems lose their inner capitals.

use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// `FOO_BAR_BAZ` -> `FooBarBaz`.
#[must_use]
pub fn upper_underscore_to_upper_camel(s: &str) -> String {
    s.to_uppercase().to_upper_camel_case()
}

/// `FOO_BAR_BAZ` -> `fooBarBaz`.
#[must_use]
pub fn upper_underscore_to_lower_camel(s: &str) -> String {
    s.to_uppercase().to_lower_camel_case()
}

/// Camel-case a key that already carries an upper-case prefix, keeping the
/// rest of its capitals intact (`IDField` stays `IDField`/`iDField`).
///
/// The first character is lowered when `first_lower` is set and raised
/// otherwise. Each `_` is dropped and upper-cases the character after it;
/// spaces are dropped; everything else is copied.
#[must_use]
pub fn two_first_underscores_to_case(text: &str, first_lower: bool) -> String {
    let mut chars: std::str::Chars<'_> = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut result: String = String::with_capacity(text.len());
    if first_lower {
        result.extend(first.to_lowercase());
    } else {
        result.extend(first.to_uppercase());
    }

    let mut upper_next: bool = false;
    for c in chars {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else if c != ' ' {
            result.push(c);
        }
    }
    result
}

/// True when the first two characters of `key` are their own upper-case form.
/// Digits and punctuation count as upper-case.
#[must_use]
pub fn starts_with_two_uppercase(key: &str) -> bool {
    let mut chars: std::str::Chars<'_> = key.chars();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) => is_own_uppercase(a) && is_own_uppercase(b),
        _ => false,
    }
}

fn is_own_uppercase(c: char) -> bool {
    let mut upper: std::char::ToUppercase = c.to_uppercase();
    upper.next() == Some(c) && upper.next().is_none()
}

/// Heuristic English singular used to name the element definition of an
/// array property: `ies` -> `y`, `sses` -> `ss`, trailing `s` dropped.
/// Irregular plurals are left alone.
#[must_use]
pub fn to_singular_form(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        format!("{stem}y")
    } else if let Some(stem) = name.strip_suffix("sses") {
        format!("{stem}ss")
    } else if let Some(stem) = name.strip_suffix('s') {
        stem.to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_camel_from_upper_underscore() {
        let actual: String = upper_underscore_to_upper_camel("FOO_BAR_BAZ");
        assert_eq!("FooBarBaz", actual);
    }

    #[test]
    fn upper_camel_normalizes_lowercase_stem() {
        assert_eq!("User", upper_underscore_to_upper_camel("user"));
        assert_eq!("CustomerOrder", upper_underscore_to_upper_camel("customer_order"));
    }

    #[test]
    fn upper_camel_flattens_mixed_case() {
        assert_eq!("Foobar", upper_underscore_to_upper_camel("fooBar"));
    }

    #[test]
    fn upper_camel_keeps_digits_inside_word() {
        assert_eq!("V2Event", upper_underscore_to_upper_camel("V2_EVENT"));
    }

    #[test]
    fn lower_camel_from_upper_underscore() {
        let actual: String = upper_underscore_to_lower_camel("FOO_BAR_BAZ");
        assert_eq!("fooBarBaz", actual);
    }

    #[test]
    fn lower_camel_single_word() {
        assert_eq!("amount", upper_underscore_to_lower_camel("AMOUNT"));
    }

    #[test]
    fn two_first_underscores_preserves_acronym() {
        assert_eq!("iDField", two_first_underscores_to_case("IDField", true));
        assert_eq!("IDField", two_first_underscores_to_case("IDField", false));
    }

    #[test]
    fn two_first_underscores_camelizes_after_underscore() {
        assert_eq!("uRLPath", two_first_underscores_to_case("URL_path", true));
        assert_eq!("URLPath", two_first_underscores_to_case("URL_path", false));
    }

    #[test]
    fn two_first_underscores_drops_spaces() {
        assert_eq!("aBC", two_first_underscores_to_case("AB C", true));
    }

    #[test]
    fn two_first_underscores_empty_input() {
        assert_eq!("", two_first_underscores_to_case("", true));
    }

    #[test]
    fn starts_with_two_uppercase_cases() {
        assert!(starts_with_two_uppercase("IDField"));
        assert!(starts_with_two_uppercase("URL"));
        assert!(starts_with_two_uppercase("12"));
        assert!(!starts_with_two_uppercase("Id"));
        assert!(!starts_with_two_uppercase("name"));
        assert!(!starts_with_two_uppercase("A"));
        assert!(!starts_with_two_uppercase(""));
    }

    #[test]
    fn singular_of_regular_plurals() {
        assert_eq!("order", to_singular_form("orders"));
        assert_eq!("policy", to_singular_form("policies"));
        assert_eq!("class", to_singular_form("classes"));
        assert_eq!("address", to_singular_form("addresses"));
    }

    #[test]
    fn singular_heuristic_quirks() {
        assert_eq!("new", to_singular_form("news"));
        assert_eq!("children", to_singular_form("children"));
        assert_eq!("item", to_singular_form("item"));
    }
}
