//! Book series group discount pricing.
//!
//! A group of `n` distinct titles costs `n * 800` cents discounted by
//! 0/5/10/20/25 percent for group sizes 1..=5. Greedily forming the largest
//! possible groups is almost optimal; the one correction needed is that a
//! five-group plus a three-group costs more than two four-groups, so such
//! pairs are rebalanced afterwards.

const GROUP_PRICE: [u32; 6] = [0, 800, 1520, 2160, 2560, 3000];

/// Lowest total price in cents for a basket of books, each identified by
/// an arbitrary title id.
pub fn lowest_price(books: &[u32]) -> u32 {
    use std::collections::HashMap;

    let mut counts: HashMap<u32, u32> = HashMap::new();
    for &book in books {
        *counts.entry(book).or_insert(0) += 1;
    }
    let mut counts: Vec<u32> = counts.into_values().collect();

    // repeatedly peel one copy of every remaining title into a group
    let mut group_sizes = Vec::new();
    loop {
        counts.retain(|&c| c > 0);
        if counts.is_empty() {
            break;
        }
        group_sizes.push(counts.len());
        for c in &mut counts {
            *c -= 1;
        }
    }

    // 5+3 -> 4+4 rebalance
    let fives = group_sizes.iter().filter(|&&s| s == 5).count();
    let threes = group_sizes.iter().filter(|&&s| s == 3).count();
    let rebalanced = fives.min(threes);

    let mut total: u32 = group_sizes.iter().map(|&s| GROUP_PRICE[s]).sum();
    total -= rebalanced as u32 * (GROUP_PRICE[5] + GROUP_PRICE[3]);
    total += rebalanced as u32 * 2 * GROUP_PRICE[4];
    total
}
