//! All contiguous substrings of a given length from a digit string.

pub fn series(digits: &str, len: usize) -> Vec<String> {
    if len == 0 {
        // one empty series per position, plus the trailing boundary
        return vec![String::new(); digits.len() + 1];
    }
    if len > digits.len() {
        return Vec::new();
    }
    digits
        .as_bytes()
        .windows(len)
        .map(|w| String::from_utf8_lossy(w).into_owned())
        .collect()
}
