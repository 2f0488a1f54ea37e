//! Abbreviate a phrase into its acronym.

/// First letter of each word, uppercased. Words split on whitespace,
/// hyphens, and underscores; camelCase stays a single word.
pub fn abbreviate(phrase: &str) -> String {
    phrase
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter_map(|word| {
            word.chars()
                .find(|c| c.is_ascii_alphabetic())
                .map(|c| c.to_ascii_uppercase())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        assert_eq!(abbreviate("Portable Network Graphics"), "PNG");
    }

    #[test]
    fn lowercase_words() {
        assert_eq!(abbreviate("Ruby on Rails"), "ROR");
    }

    #[test]
    fn punctuation() {
        assert_eq!(abbreviate("First In, First Out"), "FIFO");
    }

    #[test]
    fn all_caps_word() {
        assert_eq!(abbreviate("GNU Image Manipulation Program"), "GIMP");
    }

    #[test]
    fn punctuation_without_whitespace() {
        assert_eq!(abbreviate("Complementary metal-oxide semiconductor"), "CMOS");
    }

    #[test]
    fn very_long_abbreviation() {
        assert_eq!(
            abbreviate("Rolling On The Floor Laughing So Hard That My Dogs Came Over And Licked Me"),
            "ROTFLSHTMDCOALM"
        );
    }

    #[test]
    fn consecutive_delimiters() {
        assert_eq!(abbreviate("Something - I made up from thin air"), "SIMUFTA");
    }

    #[test]
    fn underscore_emphasis() {
        assert_eq!(abbreviate("The Road _Not_ Taken"), "TRNT");
    }

    #[test]
    fn empty_phrase() {
        assert_eq!(abbreviate(""), "");
    }
}
