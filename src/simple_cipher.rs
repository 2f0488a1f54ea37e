//! Vigenère-style substitution cipher with per-letter shift keys.

use rand::Rng;

/// Encode `s` by shifting each letter forward by the corresponding key
/// letter (cycling the key). Returns `None` for an empty key or a key with
/// anything other than lowercase ASCII letters.
pub fn encode(key: &str, s: &str) -> Option<String> {
    shift(key, s, 1)
}

/// Decode by shifting backwards. Same key validity rules as [`encode`].
pub fn decode(key: &str, s: &str) -> Option<String> {
    shift(key, s, -1)
}

/// Encode with a freshly generated random key of 100 lowercase letters.
/// Returns `(key, ciphertext)` so the caller can decode later.
pub fn encode_random(s: &str) -> (String, String) {
    let mut rng = rand::thread_rng();
    let key: String = (0..100)
        .map(|_| (b'a' + rng.gen_range(0..26)) as char)
        .collect();
    let encoded = encode(&key, s).expect("generated key is always valid");
    (key, encoded)
}

fn shift(key: &str, s: &str, direction: i8) -> Option<String> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_lowercase()) {
        return None;
    }

    let shifted = s
        .chars()
        .zip(key.chars().cycle())
        .map(|(c, k)| {
            let offset = (k as u8 - b'a') as i16 * direction as i16;
            let pos = (c as u8 - b'a') as i16;
            (b'a' + (pos + offset).rem_euclid(26) as u8) as char
        })
        .collect();
    Some(shifted)
}
