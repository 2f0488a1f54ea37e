//! Print a letter diamond: 'A' at top and bottom, widening to the target
//! letter in the middle, every row the same width.

pub fn get_diamond(target: char) -> Vec<String> {
    let target = target.to_ascii_uppercase();
    let size = (target as u8 - b'A') as usize;
    let width = 2 * size + 1;

    let row = |letter_index: usize| -> String {
        let letter = (b'A' + letter_index as u8) as char;
        let mut chars = vec![' '; width];
        chars[size - letter_index] = letter;
        chars[size + letter_index] = letter;
        chars.into_iter().collect()
    };

    let mut rows: Vec<String> = (0..=size).map(row).collect();
    let mirror: Vec<String> = rows[..size].iter().rev().cloned().collect();
    rows.extend(mirror);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_case_a() {
        assert_eq!(get_diamond('A'), vec!["A"]);
    }

    #[test]
    fn degenerate_case_b() {
        assert_eq!(get_diamond('B'), vec![" A ", "B B", " A "]);
    }

    #[test]
    fn smallest_nontrivial_case() {
        assert_eq!(
            get_diamond('C'),
            vec!["  A  ", " B B ", "C   C", " B B ", "  A  "]
        );
    }

    #[test]
    fn larger_case() {
        assert_eq!(
            get_diamond('E'),
            vec![
                "    A    ",
                "   B B   ",
                "  C   C  ",
                " D     D ",
                "E       E",
                " D     D ",
                "  C   C  ",
                "   B B   ",
                "    A    ",
            ]
        );
    }

    #[test]
    fn lowercase_input_is_accepted() {
        assert_eq!(get_diamond('b'), vec![" A ", "B B", " A "]);
    }
}
