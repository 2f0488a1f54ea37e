//! Clean up NANP phone numbers to a bare ten-digit string.

/// Normalize `input` to ten digits, or `None` if it is not a valid NANP
/// number. An optional leading country code `1` is stripped; both the area
/// code and the exchange code must start with 2-9.
pub fn number(input: &str) -> Option<String> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if input
        .chars()
        .any(|c| !c.is_ascii_digit() && !c.is_ascii_whitespace() && !"()-.+".contains(c))
    {
        return None;
    }

    let digits = match digits.len() {
        10 => digits,
        11 if digits.starts_with('1') => digits[1..].to_string(),
        _ => return None,
    };

    let area = digits.as_bytes()[0];
    let exchange = digits.as_bytes()[3];
    if area < b'2' || exchange < b'2' {
        return None;
    }
    Some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_plain_number() {
        assert_eq!(number("(223) 456-7890"), Some("2234567890".to_string()));
    }

    #[test]
    fn cleans_number_with_dots() {
        assert_eq!(number("223.456.7890"), Some("2234567890".to_string()));
    }

    #[test]
    fn cleans_number_with_multiple_spaces() {
        assert_eq!(number("223 456   7890   "), Some("2234567890".to_string()));
    }

    #[test]
    fn valid_when_11_digits_and_starts_with_1() {
        assert_eq!(number("12234567890"), Some("2234567890".to_string()));
        assert_eq!(number("+1 (223) 456-7890"), Some("2234567890".to_string()));
    }

    #[test]
    fn invalid_when_9_digits() {
        assert_eq!(number("123456789"), None);
    }

    #[test]
    fn invalid_when_11_digits_not_starting_with_1() {
        assert_eq!(number("22234567890"), None);
    }

    #[test]
    fn invalid_when_more_than_11_digits() {
        assert_eq!(number("321234567890"), None);
    }

    #[test]
    fn invalid_with_letters() {
        assert_eq!(number("523-abc-7890"), None);
    }

    #[test]
    fn invalid_with_punctuation() {
        assert_eq!(number("523-@:!-7890"), None);
    }

    #[test]
    fn area_code_cannot_start_with_zero_or_one() {
        assert_eq!(number("(023) 456-7890"), None);
        assert_eq!(number("(123) 456-7890"), None);
    }

    #[test]
    fn exchange_code_cannot_start_with_zero_or_one() {
        assert_eq!(number("(223) 056-7890"), None);
        assert_eq!(number("(223) 156-7890"), None);
    }
}
