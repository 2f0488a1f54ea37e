//! Pig Latin translation.
//!
//! Words starting with a vowel sound (vowel, `xr`, `yt`) get "ay" appended;
//! otherwise the leading consonant cluster moves to the end before "ay".
//! `qu` travels as a unit, and `y` acts as a vowel after a consonant
//! cluster.

pub fn translate(input: &str) -> String {
    input
        .split_whitespace()
        .map(translate_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn translate_word(word: &str) -> String {
    let bytes = word.as_bytes();

    let vowel_start = is_vowel(bytes[0])
        || word.starts_with("xr")
        || word.starts_with("yt");
    if vowel_start {
        return format!("{}ay", word);
    }

    // find the end of the consonant cluster
    let mut split = 0;
    while split < bytes.len() {
        if is_vowel(bytes[split]) {
            break;
        }
        // y is a vowel once the cluster has started
        if bytes[split] == b'y' && split > 0 {
            break;
        }
        if bytes[split] == b'q' && bytes.get(split + 1) == Some(&b'u') {
            split += 2;
            break;
        }
        split += 1;
    }

    format!("{}{}ay", &word[split..], &word[..split])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_beginning_with_a_vowel() {
        assert_eq!(translate("apple"), "appleay");
        assert_eq!(translate("ear"), "earay");
        assert_eq!(translate("igloo"), "iglooay");
    }

    #[test]
    fn word_beginning_with_xr_or_yt() {
        assert_eq!(translate("xray"), "xrayay");
        assert_eq!(translate("yttria"), "yttriaay");
    }

    #[test]
    fn word_beginning_with_one_consonant() {
        assert_eq!(translate("pig"), "igpay");
    }

    #[test]
    fn word_beginning_with_consonant_cluster() {
        assert_eq!(translate("chair"), "airchay");
        assert_eq!(translate("three"), "eethray");
        assert_eq!(translate("school"), "oolschay");
    }

    #[test]
    fn word_beginning_with_qu() {
        assert_eq!(translate("quick"), "ickquay");
    }

    #[test]
    fn word_with_qu_after_a_consonant() {
        assert_eq!(translate("square"), "aresquay");
    }

    #[test]
    fn y_is_a_vowel_after_a_cluster() {
        assert_eq!(translate("rhythm"), "ythmrhay");
        assert_eq!(translate("my"), "ymay");
    }

    #[test]
    fn y_at_the_start_is_a_consonant() {
        assert_eq!(translate("yellow"), "ellowyay");
    }

    #[test]
    fn whole_phrases_translate_word_by_word() {
        assert_eq!(translate("quick fast run"), "ickquay astfay unray");
    }
}
