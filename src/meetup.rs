//! Meetup day scheduling: "the first Monday", "the teenth Wednesday", and
//! so on, for any month.

use chrono::{Datelike, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekOfMonth {
    First,
    Second,
    Third,
    Fourth,
    Last,
    /// The one day 13..=19 falling on the requested weekday.
    Teenth,
}

/// The date of the scheduled meetup, or `None` for an impossible
/// year/month combination.
pub fn meetup(year: i32, month: u32, weekday: Weekday, week: WeekOfMonth) -> Option<NaiveDate> {
    let matching: Vec<NaiveDate> = (1..=31)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .filter(|date| date.weekday() == weekday)
        .collect();

    match week {
        WeekOfMonth::First => matching.first().copied(),
        WeekOfMonth::Second => matching.get(1).copied(),
        WeekOfMonth::Third => matching.get(2).copied(),
        WeekOfMonth::Fourth => matching.get(3).copied(),
        WeekOfMonth::Last => matching.last().copied(),
        WeekOfMonth::Teenth => matching
            .into_iter()
            .find(|date| (13..=19).contains(&date.day())),
    }
}
