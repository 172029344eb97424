/// Case-insensitive subsequence test.
///
/// Every character of `needle` must appear in `haystack` in order, not
/// necessarily adjacent. An empty needle always matches. Characters are
/// compared after lowercasing only; diacritics are not folded, so `"nis"`
/// does not match `"Niš"`.
pub fn is_subsequence_match(needle: &str, haystack: &str) -> bool {
    let mut needle = needle.chars().flat_map(char::to_lowercase).peekable();

    for c in haystack.chars().flat_map(char::to_lowercase) {
        match needle.peek() {
            Some(&n) if n == c => {
                needle.next();
            }
            Some(_) => {}
            None => return true,
        }
    }

    needle.peek().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_needle_matches_anything() {
        assert!(is_subsequence_match("", ""));
        assert!(is_subsequence_match("", "Novi Sad"));
    }

    #[test]
    fn matches_scattered_characters_in_order() {
        assert!(is_subsequence_match("nsd", "Novi Sad"));
        assert!(is_subsequence_match("GOLF", "vw golf 7"));
    }

    #[test]
    fn is_not_commutative() {
        assert!(!is_subsequence_match("Novi Sad", "nsd"));
    }

    #[test]
    fn order_matters() {
        assert!(!is_subsequence_match("dsn", "Novi Sad"));
    }

    #[test]
    fn needle_longer_than_haystack_never_matches() {
        assert!(!is_subsequence_match("beograd", "beo"));
    }

    #[test]
    fn diacritics_are_not_folded() {
        assert!(!is_subsequence_match("nis", "Niš"));
        assert!(!is_subsequence_match("niš", "Nis"));
        assert!(is_subsequence_match("NIŠ", "niš"));
    }
}
