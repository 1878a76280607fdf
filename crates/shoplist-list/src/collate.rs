//! Locale-aware ordering of category labels.
//!
//! Categories are compared on an accent-insensitive, case-insensitive key
//! first, the way a human-language collation treats them: `laticínios`
//! sorts before `padaria`, and `água` sorts with the other `a` words rather
//! than after `z`. Letters with no canonical decomposition (`ß`, `æ`, `ø`,
//! `ł` and a few others) are folded to their base Latin spelling. Labels
//! equal under that key fall back to code-point order so the comparison
//! stays total.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Primary collation key: decomposed, combining marks stripped, lowercased,
/// with undecomposable letters folded.
#[must_use]
pub fn collation_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    for c in text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
    {
        match fold(c) {
            Some(folded) => key.push_str(folded),
            None => key.push(c),
        }
    }
    key
}

/// Base spelling of a lowercase letter NFD leaves intact.
fn fold(c: char) -> Option<&'static str> {
    let folded = match c {
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'ø' => "o",
        'ł' => "l",
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ı' => "i",
        'þ' => "th",
        _ => return None,
    };
    Some(folded)
}

/// Compare two labels under the collation.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accents_do_not_push_to_the_end() {
        assert_eq!(compare("água", "banana"), Ordering::Less);
        assert_eq!(compare("laticínios", "padaria"), Ordering::Less);
        // Plain code-point order would put 'á' after 'z'
        assert!("água" > "zebra");
        assert_eq!(compare("água", "zebra"), Ordering::Less);
    }

    #[test]
    fn test_ties_are_broken_deterministically() {
        assert_eq!(collation_key("pão"), collation_key("pao"));
        assert_ne!(compare("pão", "pao"), Ordering::Equal);
        assert_eq!(compare("pão", "pão"), Ordering::Equal);
    }

    #[test]
    fn test_key_strips_marks() {
        assert_eq!(collation_key("Açúcar"), "acucar");
        assert_eq!(collation_key("crème brûlée"), "creme brulee");
    }

    #[test]
    fn test_undecomposable_letters_fold() {
        assert_eq!(collation_key("Straße"), "strasse");
        assert_eq!(collation_key("ÆBLE"), "aeble");
        assert_eq!(collation_key("Łosoś"), "losos");
        assert_eq!(compare("ørred", "pão"), Ordering::Less);
        assert_eq!(compare("smør", "sal"), Ordering::Greater);
        assert_eq!(compare("smør", "sopa"), Ordering::Less);
    }
}
