//! A matrix parsed from rows of space-separated numbers, with row and
//! column extraction.

pub struct Matrix {
    rows: Vec<Vec<u32>>,
}

impl Matrix {
    /// Parse from newline-separated rows; `None` on any malformed number
    /// or ragged row lengths.
    pub fn new(input: &str) -> Option<Matrix> {
        let rows: Option<Vec<Vec<u32>>> = input
            .lines()
            .map(|line| {
                line.split_whitespace()
                    .map(|n| n.parse().ok())
                    .collect()
            })
            .collect();
        let rows = rows?;
        if rows.windows(2).any(|pair| pair[0].len() != pair[1].len()) {
            return None;
        }
        Some(Matrix { rows })
    }

    /// 1-indexed row, or `None` out of bounds.
    pub fn row(&self, row_no: usize) -> Option<Vec<u32>> {
        self.rows.get(row_no.checked_sub(1)?).cloned()
    }

    /// 1-indexed column, or `None` out of bounds.
    pub fn column(&self, col_no: usize) -> Option<Vec<u32>> {
        let index = col_no.checked_sub(1)?;
        self.rows
            .iter()
            .map(|row| row.get(index).copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_row_from_one_line_matrix() {
        let matrix = Matrix::new("1 2").unwrap();
        assert_eq!(matrix.row(1), Some(vec![1, 2]));
    }

    #[test]
    fn extract_row_from_multi_line_matrix() {
        let matrix = Matrix::new("1 2\n3 4").unwrap();
        assert_eq!(matrix.row(2), Some(vec![3, 4]));
    }

    #[test]
    fn extract_column() {
        let matrix = Matrix::new("1 2 3\n4 5 6\n7 8 9").unwrap();
        assert_eq!(matrix.column(3), Some(vec![3, 6, 9]));
    }

    #[test]
    fn extract_column_with_multi_digit_numbers() {
        let matrix = Matrix::new("89 1903 3\n18 3 1\n9 4 800").unwrap();
        assert_eq!(matrix.column(2), Some(vec![1903, 3, 4]));
    }

    #[test]
    fn out_of_bounds_access_gives_none() {
        let matrix = Matrix::new("1 2\n3 4").unwrap();
        assert_eq!(matrix.row(0), None);
        assert_eq!(matrix.row(3), None);
        assert_eq!(matrix.column(5), None);
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(Matrix::new("1 x\n3 4").is_none());
        assert!(Matrix::new("1 2\n3").is_none());
    }
}
