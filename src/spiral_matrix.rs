//! Fill a square matrix with 1..n² in a clockwise inward spiral.

pub fn spiral_matrix(size: u32) -> Vec<Vec<u32>> {
    let size = size as usize;
    let mut matrix = vec![vec![0u32; size]; size];
    if size == 0 {
        return matrix;
    }

    // clockwise: right, down, left, up
    const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
    let mut dir = 0;
    let (mut r, mut c) = (0isize, 0isize);

    for value in 1..=(size * size) as u32 {
        matrix[r as usize][c as usize] = value;
        let (dr, dc) = DIRECTIONS[dir];
        let (nr, nc) = (r + dr, c + dc);
        let blocked = nr < 0
            || nc < 0
            || nr as usize >= size
            || nc as usize >= size
            || matrix[nr as usize][nc as usize] != 0;
        if blocked {
            dir = (dir + 1) % 4;
        }
        let (dr, dc) = DIRECTIONS[dir];
        r += dr;
        c += dc;
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_spiral() {
        assert_eq!(spiral_matrix(0), Vec::<Vec<u32>>::new());
    }

    #[test]
    fn size_one() {
        assert_eq!(spiral_matrix(1), vec![vec![1]]);
    }

    #[test]
    fn size_two() {
        assert_eq!(spiral_matrix(2), vec![vec![1, 2], vec![4, 3]]);
    }

    #[test]
    fn size_three() {
        assert_eq!(
            spiral_matrix(3),
            vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]
        );
    }

    #[test]
    fn size_four() {
        assert_eq!(
            spiral_matrix(4),
            vec![
                vec![1, 2, 3, 4],
                vec![12, 13, 14, 5],
                vec![11, 16, 15, 6],
                vec![10, 9, 8, 7],
            ]
        );
    }

    #[test]
    fn size_five() {
        assert_eq!(
            spiral_matrix(5),
            vec![
                vec![1, 2, 3, 4, 5],
                vec![16, 17, 18, 19, 6],
                vec![15, 24, 25, 20, 7],
                vec![14, 23, 22, 21, 8],
                vec![13, 12, 11, 10, 9],
            ]
        );
    }
}
