//! Character classification for the scanner.
//!
//! OctothorP identifiers are ASCII-only, so these predicates deliberately
//! ignore Unicode letter and digit categories.

/// Checks if a character can start an identifier.
///
/// True for ASCII letters `a`-`z`, `A`-`Z`, and the underscore.
///
/// # Example
///
/// ```
/// use octo_lex::classify::is_alpha;
///
/// assert!(is_alpha('a'));
/// assert!(is_alpha('Z'));
/// assert!(is_alpha('_'));
/// assert!(!is_alpha('1'));
/// assert!(!is_alpha('é'));
/// ```
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character is an ASCII decimal digit `0`-`9`.
///
/// # Example
///
/// ```
/// use octo_lex::classify::is_digit;
///
/// assert!(is_digit('0'));
/// assert!(is_digit('9'));
/// assert!(!is_digit('a'));
/// assert!(!is_digit('٣')); // Arabic-Indic three
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character can continue an identifier.
#[inline]
pub fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_ascii_range() {
        for c in ('a'..='z').chain('A'..='Z') {
            assert!(is_alpha(c), "{c:?} should be alphabetic");
        }
        assert!(is_alpha('_'));
    }

    #[test]
    fn test_alpha_rejects_everything_else() {
        for c in ['0', '9', ' ', '#', '"', '$', '@', '-', '\0', 'α', 'é', 'ß'] {
            assert!(!is_alpha(c), "{c:?} should not be alphabetic");
        }
    }

    #[test]
    fn test_digit_range() {
        for c in '0'..='9' {
            assert!(is_digit(c));
        }
        for c in ['a', '.', '/', ':', '\0', '²', '٣'] {
            assert!(!is_digit(c), "{c:?} should not be a digit");
        }
    }

    #[test]
    fn test_alpha_numeric_is_union() {
        for b in 0u8..=127 {
            let c = b as char;
            assert_eq!(is_alpha_numeric(c), is_alpha(c) || is_digit(c));
        }
        assert!(!is_alpha_numeric('λ'));
    }
}
