//! Random character generation: roll four d6, drop the lowest, and derive
//! hitpoints from the constitution modifier.

use rand::Rng;

pub struct Character {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
    pub hitpoints: i8,
}

/// Ability modifier: (score - 10) / 2, rounded down.
pub fn modifier(score: u8) -> i8 {
    (score as i8 - 10).div_euclid(2)
}

/// Roll an ability score: 4d6, drop the lowest die.
pub fn ability() -> u8 {
    let mut rng = rand::thread_rng();
    let mut dice: [u8; 4] = std::array::from_fn(|_| rng.gen_range(1..=6));
    dice.sort_unstable();
    dice[1..].iter().sum()
}

impl Default for Character {
    fn default() -> Self {
        Self::new()
    }
}

impl Character {
    pub fn new() -> Self {
        let constitution = ability();
        Character {
            strength: ability(),
            dexterity: ability(),
            constitution,
            intelligence: ability(),
            wisdom: ability(),
            charisma: ability(),
            hitpoints: 10 + modifier(constitution),
        }
    }
}
