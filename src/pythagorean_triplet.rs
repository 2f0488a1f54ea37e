//! Pythagorean triplets with a given perimeter.

use std::collections::HashSet;

/// All triplets `a < b < c` with `a² + b² = c²` and `a + b + c = sum`.
///
/// For fixed `a`, the two remaining equations pin `b` exactly:
/// `b = sum(sum - 2a) / 2(sum - a)`, so only `a` is searched.
pub fn find(sum: u32) -> HashSet<[u32; 3]> {
    let mut triplets = HashSet::new();
    let sum = sum as u64;
    for a in 1..sum / 3 {
        let numerator = sum * (sum - 2 * a);
        let denominator = 2 * (sum - a);
        if numerator % denominator != 0 {
            continue;
        }
        let b = numerator / denominator;
        let c = sum - a - b;
        if a < b && b < c {
            triplets.insert([a as u32, b as u32, c as u32]);
        }
    }
    triplets
}
