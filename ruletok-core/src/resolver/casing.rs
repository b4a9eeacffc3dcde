//! Case tests over whole tokens

/// At least one cased character and no lowercase ones (`"U.S."`, `"NASA"`)
pub fn is_all_uppercase(token: &str) -> bool {
    let mut cased = false;
    for ch in token.chars() {
        if ch.is_lowercase() {
            return false;
        }
        cased |= ch.is_uppercase();
    }
    cased
}

/// At least one cased character and no uppercase ones (`"com"`, `"e-mail"`)
pub fn is_all_lowercase(token: &str) -> bool {
    let mut cased = false;
    for ch in token.chars() {
        if ch.is_uppercase() {
            return false;
        }
        cased |= ch.is_lowercase();
    }
    cased
}

/// Non-empty and made only of ASCII digits
pub fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

pub fn starts_with_uppercase(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase() {
        assert!(is_all_uppercase("NASA"));
        assert!(is_all_uppercase("U.S."));
        assert!(is_all_uppercase("A1"));
        assert!(!is_all_uppercase("Mr"));
        assert!(!is_all_uppercase("123"));
        assert!(!is_all_uppercase(""));
        assert!(!is_all_uppercase("."));
    }

    #[test]
    fn test_lowercase() {
        assert!(is_all_lowercase("com"));
        assert!(is_all_lowercase("e-mail"));
        assert!(is_all_lowercase("x86"));
        assert!(!is_all_lowercase("He"));
        assert!(!is_all_lowercase("42"));
        assert!(!is_all_lowercase(""));
    }

    #[test]
    fn test_digits() {
        assert!(is_digits("2024"));
        assert!(!is_digits("2.5"));
        assert!(!is_digits("5%"));
        assert!(!is_digits(""));
    }

    #[test]
    fn test_starts_with_uppercase() {
        assert!(starts_with_uppercase("He"));
        assert!(starts_with_uppercase("Élan"));
        assert!(!starts_with_uppercase("he"));
        assert!(!starts_with_uppercase(""));
    }
}
