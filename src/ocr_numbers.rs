//! OCR for seven-segment-style digits drawn with pipes and underscores.
//!
//! Each digit is a 3x4 cell (the fourth row blank); unreadable cells become
//! `?`, multi-line inputs are joined with commas.

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidRowCount(usize),
    InvalidColumnCount(usize),
}

const DIGIT_PATTERNS: [(&str, char); 10] = [
    (" _ | ||_|", '0'),
    ("     |  |", '1'),
    (" _  _||_ ", '2'),
    (" _  _| _|", '3'),
    ("   |_|  |", '4'),
    (" _ |_  _|", '5'),
    (" _ |_ |_|", '6'),
    (" _   |  |", '7'),
    (" _ |_||_|", '8'),
    (" _ |_| _|", '9'),
];

/// Convert a grid of pipe-and-underscore digits to a string.
///
/// The input must have a multiple of four rows, each with a multiple of
/// three columns. Rows within one digit line are padded implicitly: every
/// line of the grid must already be the same width.
pub fn convert(input: &str) -> Result<String, Error> {
    let lines: Vec<&str> = input.lines().collect();
    if lines.len() % 4 != 0 {
        return Err(Error::InvalidRowCount(lines.len()));
    }

    let mut numbers = Vec::new();
    for group in lines.chunks(4) {
        numbers.push(convert_group(group)?);
    }
    Ok(numbers.join(","))
}

fn convert_group(rows: &[&str]) -> Result<String, Error> {
    let width = rows
        .iter()
        .map(|r| r.len())
        .max()
        .expect("chunk of four rows");
    if width % 3 != 0 {
        return Err(Error::InvalidColumnCount(width));
    }
    for row in rows {
        if row.len() % 3 != 0 && row.len() != width {
            return Err(Error::InvalidColumnCount(row.len()));
        }
    }

    let cell = |row: usize, col: usize| -> String {
        let row = rows[row];
        (col * 3..col * 3 + 3)
            .map(|i| row.as_bytes().get(i).copied().unwrap_or(b' ') as char)
            .collect()
    };

    let mut out = String::with_capacity(width / 3);
    for col in 0..width / 3 {
        let glyph = format!("{}{}{}", cell(0, col), cell(1, col), cell(2, col));
        let digit = DIGIT_PATTERNS
            .iter()
            .find(|(pattern, _)| *pattern == glyph)
            .map(|&(_, d)| d)
            .unwrap_or('?');
        out.push(digit);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_zero() {
        let input = " _ \n".to_string() + "| |\n" + "|_|\n" + "   ";
        assert_eq!(convert(&input), Ok("0".to_string()));
    }

    #[test]
    fn recognizes_one() {
        let input = "   \n".to_string() + "  |\n" + "  |\n" + "   ";
        assert_eq!(convert(&input), Ok("1".to_string()));
    }

    #[test]
    fn unreadable_glyph_becomes_question_mark() {
        let input = "   \n".to_string() + "  _\n" + "  |\n" + "   ";
        assert_eq!(convert(&input), Ok("?".to_string()));
    }

    #[test]
    fn wrong_row_count_is_an_error() {
        let input = " _ \n| |\n   ";
        assert_eq!(convert(input), Err(Error::InvalidRowCount(3)));
    }

    #[test]
    fn wrong_column_count_is_an_error() {
        let input = "    \n   |\n   |\n    ";
        assert_eq!(convert(input), Err(Error::InvalidColumnCount(4)));
    }

    #[test]
    fn recognizes_110101100() {
        let input = "       _     _        _  _ \n".to_string()
            + "  |  || |  || |  |  || || |\n"
            + "  |  ||_|  ||_|  |  ||_||_|\n"
            + "                           ";
        assert_eq!(convert(&input), Ok("110101100".to_string()));
    }

    #[test]
    fn replaces_only_garbled_digits_with_question_marks() {
        let input = "       _     _        _  _ \n".to_string()
            + "  |  | _|  || || |  ||_|| |\n"
            + "  |  |  |  ||_|| |  || ||_|\n"
            + "                           ";
        assert_eq!(convert(&input), Ok("11?10?1?0".to_string()));
    }

    #[test]
    fn recognizes_string_of_all_digits() {
        let input = "    _  _     _  _  _  _  _  _ \n".to_string()
            + "  | _| _||_||_ |_   ||_||_|| |\n"
            + "  ||_  _|  | _||_|  ||_| _||_|\n"
            + "                              ";
        assert_eq!(convert(&input), Ok("1234567890".to_string()));
    }

    #[test]
    fn multiple_lines_are_joined_with_commas() {
        let input = "    _  _ \n".to_string()
            + "  | _| _|\n"
            + "  ||_  _|\n"
            + "         \n"
            + "    _  _ \n"
            + "|_||_ |_ \n"
            + "  | _||_|\n"
            + "         \n"
            + " _  _  _ \n"
            + "  ||_||_|\n"
            + "  ||_| _|\n"
            + "         ";
        assert_eq!(convert(&input), Ok("123,456,789".to_string()));
    }
}
