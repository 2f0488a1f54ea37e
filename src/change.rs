//! Minimal coin change via dynamic programming over amounts, recording the
//! last coin used so the actual coin list can be reconstructed.

/// Fewest coins (from `coins`, unlimited supply of each) summing to
/// `target`, sorted ascending. `None` when the target cannot be made.
pub fn find_fewest_coins(coins: &[u64], target: u64) -> Option<Vec<u64>> {
    let target = target as usize;
    // last_coin[amount] = coin completing an optimal solution for amount
    let mut last_coin: Vec<Option<u64>> = vec![None; target + 1];
    let mut count: Vec<u32> = vec![u32::MAX; target + 1];
    count[0] = 0;

    for amount in 1..=target {
        for &coin in coins {
            let coin_us = coin as usize;
            if coin_us > amount || count[amount - coin_us] == u32::MAX {
                continue;
            }
            let candidate = count[amount - coin_us] + 1;
            if candidate < count[amount] {
                count[amount] = candidate;
                last_coin[amount] = Some(coin);
            }
        }
    }

    if count[target] == u32::MAX {
        return None;
    }

    let mut result = Vec::with_capacity(count[target] as usize);
    let mut amount = target;
    while amount > 0 {
        let coin = last_coin[amount].expect("reachable amount has a last coin");
        result.push(coin);
        amount -= coin as usize;
    }
    result.sort_unstable();
    Some(result)
}
