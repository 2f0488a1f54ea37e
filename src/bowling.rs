//! Ten-pin bowling scorer.
//!
//! A game is ten frames; a frame ends on a strike or after two rolls.
//! Strikes score 10 plus the next two rolls, spares 10 plus the next roll,
//! so the final score is only known once every bonus roll has landed. The
//! tenth frame grants fill balls: one after a spare, two after a strike,
//! and a strike on a fill ball resets the rack to ten pins.
//!
//! Rolls are validated as they arrive: a roll can never claim more pins
//! than are standing, and a finished game accepts no further rolls.

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    NotEnoughPinsLeft,
    GameComplete,
}

#[derive(Default)]
pub struct BowlingGame {
    rolls: Vec<u16>,
}

impl BowlingGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a roll of `pins`, rejecting impossible pin counts and rolls
    /// after the game is over.
    pub fn roll(&mut self, pins: u16) -> Result<(), Error> {
        if self.is_complete() {
            return Err(Error::GameComplete);
        }
        if pins > self.pins_standing() {
            return Err(Error::NotEnoughPinsLeft);
        }
        self.rolls.push(pins);
        Ok(())
    }

    /// Total score, or `None` while the game is still in progress.
    pub fn score(&self) -> Option<u16> {
        if !self.is_complete() {
            return None;
        }

        let mut total = 0;
        let mut i = 0;
        for _frame in 0..10 {
            if self.rolls[i] == 10 {
                total += 10 + self.rolls[i + 1] + self.rolls[i + 2];
                i += 1;
            } else if self.rolls[i] + self.rolls[i + 1] == 10 {
                total += 10 + self.rolls[i + 2];
                i += 2;
            } else {
                total += self.rolls[i] + self.rolls[i + 1];
                i += 2;
            }
        }
        Some(total)
    }

    /// Pins standing for the next roll, replaying the roll list to find the
    /// in-progress frame. At most 21 rolls, so the replay is trivial.
    fn pins_standing(&self) -> u16 {
        let mut i = 0;
        for _frame in 0..9 {
            match self.rolls.get(i) {
                None => return 10,
                Some(&10) => i += 1,
                Some(&first) => {
                    if self.rolls.get(i + 1).is_none() {
                        return 10 - first;
                    }
                    i += 2;
                }
            }
        }

        // tenth frame, including fill balls
        let tenth = &self.rolls[i..];
        match *tenth {
            [] => 10,
            [10] => 10,
            [first] => 10 - first,
            // fill balls after a strike: a strike resets the rack
            [10, 10] => 10,
            [10, second] => 10 - second,
            // fill ball after a spare is on a fresh rack
            [first, second] if first + second == 10 => 10,
            _ => 0,
        }
    }

    fn is_complete(&self) -> bool {
        let mut i = 0;
        for _frame in 0..9 {
            match self.rolls.get(i) {
                None => return false,
                Some(&10) => i += 1,
                Some(_) => {
                    if self.rolls.get(i + 1).is_none() {
                        return false;
                    }
                    i += 2;
                }
            }
        }

        match self.rolls[i..] {
            [10, _, _] => true,
            [first, second, _] if first + second == 10 => true,
            [first, second] => first + second < 10,
            _ => false,
        }
    }
}
