//! Arrange dominoes into a closed chain where adjacent halves match and the
//! ends meet. Straightforward backtracking over remaining stones.

pub fn chain(input: &[(u8, u8)]) -> Option<Vec<(u8, u8)>> {
    if input.is_empty() {
        return Some(Vec::new());
    }

    let mut remaining: Vec<(u8, u8)> = input.to_vec();
    let mut chain = Vec::with_capacity(input.len());

    // fix the first stone's orientation set by trying both
    let first = remaining.remove(0);
    for stone in [first, (first.1, first.0)] {
        chain.push(stone);
        if extend(&mut chain, &mut remaining) {
            return Some(chain);
        }
        chain.pop();
    }
    None
}

fn extend(chain: &mut Vec<(u8, u8)>, remaining: &mut Vec<(u8, u8)>) -> bool {
    if remaining.is_empty() {
        return chain[0].0 == chain[chain.len() - 1].1;
    }

    let open_end = chain[chain.len() - 1].1;
    for i in 0..remaining.len() {
        let (a, b) = remaining[i];
        let flipped = if a == open_end {
            (a, b)
        } else if b == open_end {
            (b, a)
        } else {
            continue;
        };
        remaining.swap_remove(i);
        chain.push(flipped);
        if extend(chain, remaining) {
            return true;
        }
        chain.pop();
        remaining.push((a, b));
        let last = remaining.len() - 1;
        remaining.swap(i, last);
    }
    false
}
