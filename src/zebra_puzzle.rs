//! The classic five-house logic puzzle, solved by staged permutation search.
//!
//! Each attribute family (color, nationality, drink, smoke, pet) is a
//! permutation of five values over the house positions 0..5. Constraints
//! are checked as soon as the families they mention are fixed, which prunes
//! the 120^5 space down to almost nothing.

use std::fmt;

const ENGLISHMAN: usize = 0;
const SPANIARD: usize = 1;
const UKRAINIAN: usize = 2;
const NORWEGIAN: usize = 3;
const JAPANESE: usize = 4;

const NATIONALITIES: [&str; 5] = [
    "Englishman",
    "Spaniard",
    "Ukrainian",
    "Norwegian",
    "Japanese",
];

// colors
const RED: usize = 0;
const GREEN: usize = 1;
const IVORY: usize = 2;
const YELLOW: usize = 3;
const BLUE: usize = 4;

// drinks
const COFFEE: usize = 0;
const TEA: usize = 1;
const MILK: usize = 2;
const ORANGE_JUICE: usize = 3;
const WATER: usize = 4;

// smokes
const OLD_GOLD: usize = 0;
const KOOLS: usize = 1;
const CHESTERFIELDS: usize = 2;
const LUCKY_STRIKE: usize = 3;
const PARLIAMENTS: usize = 4;

// pets
const DOG: usize = 0;
const SNAILS: usize = 1;
const FOX: usize = 2;
const HORSE: usize = 3;
const ZEBRA: usize = 4;

/// Solved puzzle: who drinks water and who owns the zebra.
#[derive(Debug, PartialEq, Eq)]
pub struct Solution {
    pub water_drinker: &'static str,
    pub zebra_owner: &'static str,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The {} drinks the water. The {} owns the zebra.",
            self.water_drinker, self.zebra_owner
        )
    }
}

/// All 120 orderings of 0..5. Small enough to materialize up front.
fn permutations() -> Vec<[usize; 5]> {
    let mut result = Vec::with_capacity(120);
    let mut items = [0, 1, 2, 3, 4];
    heap_permute(&mut items, 5, &mut result);
    result
}

fn heap_permute(items: &mut [usize; 5], k: usize, out: &mut Vec<[usize; 5]>) {
    if k == 1 {
        out.push(*items);
        return;
    }
    for i in 0..k {
        heap_permute(items, k - 1, out);
        if k % 2 == 0 {
            items.swap(i, k - 1);
        } else {
            items.swap(0, k - 1);
        }
    }
}

fn next_to(a: usize, b: usize) -> bool {
    a.abs_diff(b) == 1
}

pub fn solve() -> Solution {
    let perms = permutations();

    // each permutation maps value -> house position
    for colors in &perms {
        if colors[GREEN] != colors[IVORY] + 1 {
            continue; // green is immediately right of ivory
        }
        for nations in &perms {
            if nations[ENGLISHMAN] != colors[RED]
                || nations[NORWEGIAN] != 0
                || !next_to(nations[NORWEGIAN], colors[BLUE])
            {
                continue;
            }
            for drinks in &perms {
                if drinks[COFFEE] != colors[GREEN]
                    || drinks[TEA] != nations[UKRAINIAN]
                    || drinks[MILK] != 2
                {
                    continue;
                }
                for smokes in &perms {
                    if smokes[KOOLS] != colors[YELLOW]
                        || smokes[LUCKY_STRIKE] != drinks[ORANGE_JUICE]
                        || smokes[PARLIAMENTS] != nations[JAPANESE]
                    {
                        continue;
                    }
                    for pets in &perms {
                        if pets[DOG] != nations[SPANIARD]
                            || pets[SNAILS] != smokes[OLD_GOLD]
                            || !next_to(smokes[CHESTERFIELDS], pets[FOX])
                            || !next_to(smokes[KOOLS], pets[HORSE])
                        {
                            continue;
                        }

                        let who_at = |house: usize| {
                            NATIONALITIES[nations
                                .iter()
                                .position(|&h| h == house)
                                .expect("every house has a resident")]
                        };
                        return Solution {
                            water_drinker: who_at(drinks[WATER]),
                            zebra_owner: who_at(pets[ZEBRA]),
                        };
                    }
                }
            }
        }
    }
    unreachable!("the puzzle has a unique solution by construction")
}
