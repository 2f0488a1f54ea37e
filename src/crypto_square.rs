//! Classic square-code cipher: normalize, write row-wise into a near-square
//! rectangle, read column-wise.

/// Encrypt `input` using the square code.
///
/// The normalized text (lowercased, alphanumeric only) is laid out in `r`
/// rows and `c` columns where `c >= r` and `c - r <= 1`. The ciphertext is
/// the columns read top to bottom, space-separated, with the short trailing
/// columns padded with a single space so every chunk has length `r`.
pub fn encrypt(input: &str) -> String {
    let normalized: Vec<char> = input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if normalized.is_empty() {
        return String::new();
    }

    let len = normalized.len();
    let cols = (len as f64).sqrt().ceil() as usize;
    let rows = len.div_ceil(cols);

    let mut chunks = Vec::with_capacity(cols);
    for col in 0..cols {
        let mut chunk = String::with_capacity(rows);
        for row in 0..rows {
            chunk.push(*normalized.get(row * cols + col).unwrap_or(&' '));
        }
        chunks.push(chunk);
    }
    chunks.join(" ")
}
