// src/name.rs

//! Normalization of handwritten recipe names
//!
//! Cookbook entries arrive with free-form labels scribbled by cooks:
//! `"Vegetable-_-soup!!"` should become `"Vegetable Soup"`. Normalization
//! applies, in order:
//!
//! 1. Replace `-` and `_` with spaces
//! 2. Drop every character that is not an alphabetic letter or a space
//! 3. Collapse whitespace runs to single spaces and trim
//! 4. Title-case each remaining word
//!
//! A name that comes out empty (no letters in the input) has no canonical
//! form and normalization reports failure.

/// Normalize a raw handwritten name to its canonical display form
///
/// Returns `None` when nothing alphabetic survives the cleanup.
pub fn normalize(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .filter(|c| c.is_alphabetic() || *c == ' ')
        .collect();

    let words: Vec<String> = cleaned.split_whitespace().map(title_case).collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Uppercase the first letter of a word and lowercase the rest
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    let mut out = String::with_capacity(word.len());
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }
    for c in chars {
        out.extend(c.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_become_spaces() {
        assert_eq!(normalize("Vegetable-_-soup!!"), Some("Vegetable Soup".to_string()));
        assert_eq!(normalize("beef_wellington"), Some("Beef Wellington".to_string()));
    }

    #[test]
    fn test_illegal_chars_dropped() {
        assert_eq!(normalize("p0t4to m@sh"), Some("Ptto Msh".to_string()));
        assert_eq!(normalize("eggs&bacon"), Some("Eggsbacon".to_string()));
    }

    #[test]
    fn test_whitespace_collapsed_and_trimmed() {
        assert_eq!(normalize("  french   onion  soup "), Some("French Onion Soup".to_string()));
    }

    #[test]
    fn test_title_casing() {
        assert_eq!(normalize("CHICKEN parmigiana"), Some("Chicken Parmigiana".to_string()));
        assert_eq!(normalize("pAelLa"), Some("Paella".to_string()));
    }

    #[test]
    fn test_no_letters_is_a_failure() {
        assert_eq!(normalize("!!!"), None);
        assert_eq!(normalize("123 456"), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("-_-"), None);
    }

    #[test]
    fn test_already_canonical_is_unchanged() {
        assert_eq!(normalize("Vegetable Soup"), Some("Vegetable Soup".to_string()));
    }
}
