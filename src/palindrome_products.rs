//! Smallest and largest palindromic products of two factors from a range.

#[derive(Debug, PartialEq, Eq)]
pub struct Palindrome {
    pub value: u64,
    pub factors: Vec<(u64, u64)>,
}

fn is_palindrome(n: u64) -> bool {
    let s = n.to_string();
    s.bytes().eq(s.bytes().rev())
}

/// Smallest palindromic product of `i * j` with `min <= i <= j <= max`,
/// with every factor pair producing it. `None` when the range is empty or
/// holds no palindromic product.
pub fn smallest(min: u64, max: u64) -> Option<Palindrome> {
    let mut best: Option<Palindrome> = None;
    for i in min..=max {
        for j in i..=max {
            let product = i * j;
            // products only grow with j; once past the best, move on
            if let Some(ref b) = best {
                if product > b.value {
                    break;
                }
            }
            if is_palindrome(product) {
                match best {
                    Some(ref mut b) if b.value == product => b.factors.push((i, j)),
                    _ => {
                        best = Some(Palindrome {
                            value: product,
                            factors: vec![(i, j)],
                        })
                    }
                }
            }
        }
    }
    best
}

/// Largest palindromic product over the same range contract as [`smallest`].
pub fn largest(min: u64, max: u64) -> Option<Palindrome> {
    let mut best: Option<Palindrome> = None;
    for i in min..=max {
        for j in (i..=max).rev() {
            let product = i * j;
            if let Some(ref b) = best {
                if product < b.value {
                    break;
                }
            }
            if is_palindrome(product) {
                match best {
                    Some(ref mut b) if b.value == product => b.factors.push((i, j)),
                    _ => {
                        best = Some(Palindrome {
                            value: product,
                            factors: vec![(i, j)],
                        })
                    }
                }
            }
        }
    }
    best
}
