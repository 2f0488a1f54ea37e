//! Standard five-card poker hand ranking.
//!
//! Hands are scored into a comparable vector: category first, then the
//! tiebreak ranks in significance order, so two hands compare with a plain
//! lexicographic comparison. Aces play high except in the 5-4-3-2-A wheel.

/// Return references to the winning hand(s) among `hands` — plural on ties.
pub fn winning_hands<'a>(hands: &[&'a str]) -> Vec<&'a str> {
    let mut best: Vec<(&str, Vec<u8>)> = Vec::new();
    for &hand in hands {
        let score = score_hand(hand);
        match best.first() {
            None => best.push((hand, score)),
            Some((_, top)) => {
                if score > *top {
                    best.clear();
                    best.push((hand, score));
                } else if score == *top {
                    best.push((hand, score));
                }
            }
        }
    }
    best.into_iter().map(|(hand, _)| hand).collect()
}

// categories
const HIGH_CARD: u8 = 0;
const ONE_PAIR: u8 = 1;
const TWO_PAIR: u8 = 2;
const THREE_OF_A_KIND: u8 = 3;
const STRAIGHT: u8 = 4;
const FLUSH: u8 = 5;
const FULL_HOUSE: u8 = 6;
const FOUR_OF_A_KIND: u8 = 7;
const STRAIGHT_FLUSH: u8 = 8;

fn parse_card(card: &str) -> (u8, char) {
    let suit = card.chars().last().expect("card has a suit");
    let rank = match &card[..card.len() - 1] {
        "2" => 2,
        "3" => 3,
        "4" => 4,
        "5" => 5,
        "6" => 6,
        "7" => 7,
        "8" => 8,
        "9" => 9,
        "10" => 10,
        "J" => 11,
        "Q" => 12,
        "K" => 13,
        "A" => 14,
        other => panic!("unknown rank {:?}", other),
    };
    (rank, suit)
}

/// Category byte followed by tiebreak ranks, most significant first.
fn score_hand(hand: &str) -> Vec<u8> {
    let cards: Vec<(u8, char)> = hand.split_whitespace().map(parse_card).collect();
    assert_eq!(cards.len(), 5, "a poker hand has five cards: {:?}", hand);

    let flush = cards.iter().all(|&(_, s)| s == cards[0].1);

    // (count, rank) groups, largest group first, ties by rank
    let mut counts: Vec<(u8, u8)> = Vec::new();
    for &(rank, _) in &cards {
        match counts.iter_mut().find(|(_, r)| *r == rank) {
            Some(entry) => entry.0 += 1,
            None => counts.push((1, rank)),
        }
    }
    counts.sort_unstable_by(|a, b| b.cmp(a));

    let mut ranks_desc: Vec<u8> = cards.iter().map(|&(r, _)| r).collect();
    ranks_desc.sort_unstable_by(|a, b| b.cmp(a));

    let wheel = ranks_desc == [14, 5, 4, 3, 2];
    let straight = wheel
        || (counts.len() == 5 && ranks_desc[0] - ranks_desc[4] == 4);
    let straight_ranks = if wheel {
        vec![5, 4, 3, 2, 1]
    } else {
        ranks_desc.clone()
    };

    let group_sizes: Vec<u8> = counts.iter().map(|&(c, _)| c).collect();
    let grouped_ranks: Vec<u8> = counts.iter().map(|&(_, r)| r).collect();

    let (category, tiebreak) = match (straight, flush, group_sizes.as_slice()) {
        (true, true, _) => (STRAIGHT_FLUSH, straight_ranks),
        (_, _, [4, 1]) => (FOUR_OF_A_KIND, grouped_ranks),
        (_, _, [3, 2]) => (FULL_HOUSE, grouped_ranks),
        (false, true, _) => (FLUSH, ranks_desc),
        (true, false, _) => (STRAIGHT, straight_ranks),
        (_, _, [3, 1, 1]) => (THREE_OF_A_KIND, grouped_ranks),
        (_, _, [2, 2, 1]) => (TWO_PAIR, grouped_ranks),
        (_, _, [2, 1, 1, 1]) => (ONE_PAIR, grouped_ranks),
        _ => (HIGH_CARD, ranks_desc),
    };

    let mut score = vec![category];
    score.extend(tiebreak);
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_winners<'a>(hands: &[&'a str], expected: &[&'a str]) {
        let winners: HashSet<&str> = winning_hands(hands).into_iter().collect();
        let expected: HashSet<&str> = expected.iter().copied().collect();
        assert_eq!(winners, expected);
    }

    #[test]
    fn single_hand_always_wins() {
        assert_winners(&["4S 5S 7H 8D JC"], &["4S 5S 7H 8D JC"]);
    }

    #[test]
    fn highest_card_wins() {
        assert_winners(
            &["4D 5S 6S 8D 3C", "2S 4C 7S 9H 10H", "3S 4S 5D 6H JH"],
            &["3S 4S 5D 6H JH"],
        );
    }

    #[test]
    fn tie_returns_both_hands() {
        assert_winners(
            &["4D 5S 6S 8D 3C", "4H 5H 6C 8C 3H"],
            &["4D 5S 6S 8D 3C", "4H 5H 6C 8C 3H"],
        );
    }

    #[test]
    fn high_card_ties_break_on_every_kicker() {
        assert_winners(
            &["3S 5H 6S 8D 7H", "2S 5D 6D 8C 7S"],
            &["3S 5H 6S 8D 7H"],
        );
    }

    #[test]
    fn one_pair_beats_high_card() {
        assert_winners(
            &["4S 5H 6C 8D KH", "2S 4H 6S 4D JH"],
            &["2S 4H 6S 4D JH"],
        );
    }

    #[test]
    fn two_pair_beats_one_pair() {
        assert_winners(
            &["2S 8H 6S 8D JH", "4S 5H 4C 8C 5C"],
            &["4S 5H 4C 8C 5C"],
        );
    }

    #[test]
    fn three_of_a_kind_beats_two_pair() {
        assert_winners(
            &["2S 8H 2H 8D JH", "4S 5H 4C 8S 4H"],
            &["4S 5H 4C 8S 4H"],
        );
    }

    #[test]
    fn straight_beats_three_of_a_kind() {
        assert_winners(
            &["4S 5H 4C 8D 4H", "3S 4D 2S 6D 5C"],
            &["3S 4D 2S 6D 5C"],
        );
    }

    #[test]
    fn aces_can_end_a_straight() {
        assert_winners(
            &["4S 5H 4C 8D 4H", "10D JH QS KD AC"],
            &["10D JH QS KD AC"],
        );
    }

    #[test]
    fn aces_can_start_a_wheel_straight() {
        assert_winners(
            &["4S 5H 4C 8D 4H", "4D AH 3S 2D 5C"],
            &["4D AH 3S 2D 5C"],
        );
    }

    #[test]
    fn wheel_straight_loses_to_six_high_straight() {
        assert_winners(
            &["4S 6C 7S 8D 5H", "4D AH 3S 2D 5C"],
            &["4S 6C 7S 8D 5H"],
        );
    }

    #[test]
    fn flush_beats_straight() {
        assert_winners(
            &["4C 6H 7D 8D 5H", "2S 4S 5S 6S 7S"],
            &["2S 4S 5S 6S 7S"],
        );
    }

    #[test]
    fn full_house_beats_flush() {
        assert_winners(
            &["3H 6H 7H 8H 5H", "4S 5H 4C 5D 4H"],
            &["4S 5H 4C 5D 4H"],
        );
    }

    #[test]
    fn four_of_a_kind_beats_full_house() {
        assert_winners(
            &["4S 5H 4D 5D 4H", "3S 3H 2S 3D 3C"],
            &["3S 3H 2S 3D 3C"],
        );
    }

    #[test]
    fn straight_flush_beats_four_of_a_kind() {
        assert_winners(
            &["4S 5H 5S 5D 5C", "7S 8S 9S 6S 10S"],
            &["7S 8S 9S 6S 10S"],
        );
    }

    #[test]
    fn full_house_ties_break_on_triplet_rank() {
        assert_winners(
            &["4H 4S 4D 9S 9D", "5H 5S 5D 8S 8D"],
            &["5H 5S 5D 8S 8D"],
        );
    }

    #[test]
    fn two_pair_ties_break_on_high_pair_then_low_then_kicker() {
        assert_winners(
            &["2S QS 2C QD JH", "JD QH JS 8D QC"],
            &["JD QH JS 8D QC"],
        );
    }
}
