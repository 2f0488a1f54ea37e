//! Tally a small football league from `Home;Away;result` lines into the
//! standard standings table.

use std::collections::HashMap;

#[derive(Default, Clone, Copy)]
struct Record {
    wins: u32,
    draws: u32,
    losses: u32,
}

impl Record {
    fn played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    fn points(&self) -> u32 {
        self.wins * 3 + self.draws
    }
}

/// Produce the standings table: teams ordered by points descending, ties
/// broken alphabetically. Lines that don't parse are ignored.
pub fn tally(input: &str) -> String {
    let mut table: HashMap<String, Record> = HashMap::new();

    for line in input.lines() {
        let fields: Vec<&str> = line.split(';').collect();
        let [home, away, outcome] = fields.as_slice() else {
            continue;
        };
        let (home_rec, away_rec) = {
            let mut get = |team: &str| *table.entry(team.to_string()).or_default();
            (get(home), get(away))
        };
        let (home_rec, away_rec) = match *outcome {
            "win" => (
                Record {
                    wins: home_rec.wins + 1,
                    ..home_rec
                },
                Record {
                    losses: away_rec.losses + 1,
                    ..away_rec
                },
            ),
            "loss" => (
                Record {
                    losses: home_rec.losses + 1,
                    ..home_rec
                },
                Record {
                    wins: away_rec.wins + 1,
                    ..away_rec
                },
            ),
            "draw" => (
                Record {
                    draws: home_rec.draws + 1,
                    ..home_rec
                },
                Record {
                    draws: away_rec.draws + 1,
                    ..away_rec
                },
            ),
            _ => continue,
        };
        table.insert(home.to_string(), home_rec);
        table.insert(away.to_string(), away_rec);
    }

    let mut teams: Vec<(&String, &Record)> = table.iter().collect();
    teams.sort_by(|(name_a, rec_a), (name_b, rec_b)| {
        rec_b
            .points()
            .cmp(&rec_a.points())
            .then_with(|| name_a.cmp(name_b))
    });

    let mut out = format!("{:<31}| MP |  W |  D |  L |  P", "Team");
    for (name, rec) in teams {
        out.push_str(&format!(
            "\n{:<31}| {:>2} | {:>2} | {:>2} | {:>2} | {:>2}",
            name,
            rec.played(),
            rec.wins,
            rec.draws,
            rec.losses,
            rec.points()
        ));
    }
    out
}
