//! Affine cipher over the lowercase Latin alphabet.
//!
//! Encryption maps each letter index `x` to `(a*x + b) mod 26`; decryption
//! applies the modular inverse of `a`. The key `a` must be coprime with 26
//! or the mapping is not a bijection.

const M: i32 = 26;

#[derive(Debug, PartialEq, Eq)]
pub enum AffineCipherError {
    NotCoprime(i32),
}

/// Encode `plaintext` with key `(a, b)`, grouping output in blocks of five.
///
/// Letters are lowercased before mapping, digits pass through untouched,
/// and all other characters are dropped.
pub fn encode(plaintext: &str, a: i32, b: i32) -> Result<String, AffineCipherError> {
    if gcd(a.rem_euclid(M), M) != 1 {
        return Err(AffineCipherError::NotCoprime(a));
    }

    let transformed: Vec<char> = plaintext
        .chars()
        .filter_map(|c| {
            if c.is_ascii_digit() {
                Some(c)
            } else if c.is_ascii_alphabetic() {
                let x = (c.to_ascii_lowercase() as u8 - b'a') as i32;
                let y = (a * x + b).rem_euclid(M);
                Some((b'a' + y as u8) as char)
            } else {
                None
            }
        })
        .collect();

    Ok(transformed
        .chunks(5)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" "))
}

/// Decode `ciphertext` produced by [`encode`] with the same key.
pub fn decode(ciphertext: &str, a: i32, b: i32) -> Result<String, AffineCipherError> {
    let a_inv = mmi(a.rem_euclid(M)).ok_or(AffineCipherError::NotCoprime(a))?;

    Ok(ciphertext
        .chars()
        .filter_map(|c| {
            if c.is_ascii_digit() {
                Some(c)
            } else if c.is_ascii_alphabetic() {
                let y = (c.to_ascii_lowercase() as u8 - b'a') as i32;
                let x = (a_inv * (y - b)).rem_euclid(M);
                Some((b'a' + x as u8) as char)
            } else {
                None
            }
        })
        .collect())
}

fn gcd(a: i32, b: i32) -> i32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Modular multiplicative inverse of `a` mod 26, by exhaustive search.
/// The alphabet is small enough that anything cleverer is wasted effort.
fn mmi(a: i32) -> Option<i32> {
    (1..M).find(|&n| (a * n).rem_euclid(M) == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_yes() {
        assert_eq!(encode("yes", 5, 7), Ok("xbt".to_string()));
    }

    #[test]
    fn encode_omg_with_spaces() {
        assert_eq!(encode("O M G", 25, 47), Ok("hjp".to_string()));
    }

    #[test]
    fn encode_groups_of_five() {
        assert_eq!(
            encode("mindblowingly", 11, 15),
            Ok("rzcwa gnxzc dgt".to_string())
        );
    }

    #[test]
    fn encode_passes_digits_through() {
        assert_eq!(
            encode("Testing, 1 2 3, testing.", 3, 4),
            Ok("jqgjc rw123 jqgjc rw".to_string())
        );
    }

    #[test]
    fn encode_deep_thought() {
        assert_eq!(
            encode("Truth is fiction.", 5, 17),
            Ok("iynia fdqfb ifje".to_string())
        );
    }

    #[test]
    fn encode_rejects_non_coprime_a() {
        assert_eq!(
            encode("This is a test.", 6, 17),
            Err(AffineCipherError::NotCoprime(6))
        );
    }

    #[test]
    fn decode_exercism() {
        assert_eq!(decode("tytgn fjr", 3, 7), Ok("exercism".to_string()));
    }

    #[test]
    fn decode_with_numbers() {
        assert_eq!(
            decode("odpoz ub123 odpoz ub", 25, 7),
            Ok("testing123testing".to_string())
        );
    }

    #[test]
    fn decode_ignores_all_spacing() {
        assert_eq!(
            decode("vszzm    cly   yd cg    qdp", 15, 16),
            Ok("jollygreengiant".to_string())
        );
    }

    #[test]
    fn decode_rejects_non_coprime_a() {
        assert_eq!(
            decode("Test", 13, 5),
            Err(AffineCipherError::NotCoprime(13))
        );
    }

    #[test]
    fn encode_decode_roundtrip() {
        let encoded = encode("the quick brown fox", 5, 8).unwrap();
        assert_eq!(decode(&encoded, 5, 8), Ok("thequickbrownfox".to_string()));
    }
}
