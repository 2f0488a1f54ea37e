//! Transpose lines of text, padding to the left but never to the right.
//!
//! Rows of uneven length make this subtler than a matrix transpose: a
//! column position is padded with a space only when some later row still
//! has a character in that column.

pub fn transpose(input: &[&str]) -> Vec<String> {
    let rows: Vec<Vec<char>> = input.iter().map(|line| line.chars().collect()).collect();
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);

    let mut output = Vec::with_capacity(width);
    for col in 0..width {
        // the last row that reaches this column bounds the padding
        let last = rows
            .iter()
            .rposition(|r| r.len() > col)
            .expect("col < width implies some row reaches it");
        let line: String = rows[..=last]
            .iter()
            .map(|r| r.get(col).copied().unwrap_or(' '))
            .collect();
        output.push(line);
    }
    output
}
