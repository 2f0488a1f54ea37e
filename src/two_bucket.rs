//! Two-bucket water puzzle, solved by breadth-first search over
//! `(level_1, level_2)` states.
//!
//! Each fill, empty, or pour counts as one move, and filling the starting
//! bucket is the mandatory first move. One state is off limits: the starting
//! bucket empty while the other is full (that would amount to having started
//! with the wrong bucket).

use std::collections::{HashSet, VecDeque};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Bucket {
    One,
    Two,
}

#[derive(PartialEq, Eq, Debug)]
pub struct BucketStats {
    /// Number of moves to reach the goal, counting the initial fill.
    pub moves: u8,
    /// The bucket that ends up holding exactly the goal amount.
    pub goal_bucket: Bucket,
    /// Liters left in the other bucket at that point.
    pub other_bucket: u8,
}

pub fn solve(
    capacity_1: u8,
    capacity_2: u8,
    goal: u8,
    start_bucket: &Bucket,
) -> Option<BucketStats> {
    let (start, forbidden) = match start_bucket {
        Bucket::One => ((capacity_1, 0), (0, capacity_2)),
        Bucket::Two => ((0, capacity_2), (capacity_1, 0)),
    };

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back((start, 1u8));

    while let Some(((b1, b2), moves)) = queue.pop_front() {
        if b1 == goal {
            return Some(BucketStats {
                moves,
                goal_bucket: Bucket::One,
                other_bucket: b2,
            });
        }
        if b2 == goal {
            return Some(BucketStats {
                moves,
                goal_bucket: Bucket::Two,
                other_bucket: b1,
            });
        }

        let pour_1_to_2 = b1.min(capacity_2 - b2);
        let pour_2_to_1 = b2.min(capacity_1 - b1);
        let actions = [
            (capacity_1, b2),                       // fill one
            (b1, capacity_2),                       // fill two
            (0, b2),                                // empty one
            (b1, 0),                                // empty two
            (b1 - pour_1_to_2, b2 + pour_1_to_2),   // pour one into two
            (b1 + pour_2_to_1, b2 - pour_2_to_1),   // pour two into one
        ];

        for next in actions {
            if next != forbidden && visited.insert(next) {
                queue.push_back((next, moves + 1));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_one_liter_starting_with_bucket_one() {
        assert_eq!(
            solve(3, 5, 1, &Bucket::One),
            Some(BucketStats {
                moves: 4,
                goal_bucket: Bucket::One,
                other_bucket: 5,
            })
        );
    }

    #[test]
    fn measure_one_liter_starting_with_bucket_two() {
        assert_eq!(
            solve(3, 5, 1, &Bucket::Two),
            Some(BucketStats {
                moves: 8,
                goal_bucket: Bucket::Two,
                other_bucket: 3,
            })
        );
    }

    #[test]
    fn measure_with_odd_capacities_from_bucket_one() {
        assert_eq!(
            solve(7, 11, 2, &Bucket::One),
            Some(BucketStats {
                moves: 14,
                goal_bucket: Bucket::One,
                other_bucket: 11,
            })
        );
    }

    #[test]
    fn measure_with_odd_capacities_from_bucket_two() {
        assert_eq!(
            solve(7, 11, 2, &Bucket::Two),
            Some(BucketStats {
                moves: 18,
                goal_bucket: Bucket::Two,
                other_bucket: 7,
            })
        );
    }

    #[test]
    fn goal_equal_to_start_bucket_takes_one_move() {
        assert_eq!(
            solve(1, 3, 3, &Bucket::Two),
            Some(BucketStats {
                moves: 1,
                goal_bucket: Bucket::Two,
                other_bucket: 0,
            })
        );
    }

    #[test]
    fn goal_equal_to_other_bucket_takes_two_moves() {
        assert_eq!(
            solve(2, 3, 3, &Bucket::One),
            Some(BucketStats {
                moves: 2,
                goal_bucket: Bucket::Two,
                other_bucket: 2,
            })
        );
    }

    #[test]
    fn reachable_goal_with_non_coprime_capacities() {
        assert_eq!(
            solve(6, 15, 9, &Bucket::One),
            Some(BucketStats {
                moves: 10,
                goal_bucket: Bucket::Two,
                other_bucket: 0,
            })
        );
    }

    #[test]
    fn unreachable_goal_returns_none() {
        // gcd(6, 15) = 3 does not divide 5
        assert_eq!(solve(6, 15, 5, &Bucket::One), None);
    }

    #[test]
    fn goal_larger_than_both_buckets_returns_none() {
        assert_eq!(solve(5, 7, 8, &Bucket::One), None);
    }
}
