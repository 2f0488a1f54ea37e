//! Musical scale generation.
//!
//! The tonic picks the chromatic spelling (sharps or flats, with lowercase
//! tonics naming minor keys), and an interval pattern of half (m), whole
//! (M), and augmented (A) steps walks the scale. An empty pattern yields
//! the full 12-note chromatic scale.

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidTonic,
    InvalidInterval(char),
}

const SHARPS: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];
const FLATS: [&str; 12] = [
    "A", "Bb", "B", "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab",
];

/// Keys spelled with sharps; everything else valid uses flats.
/// Uppercase entries are major keys, lowercase minor.
const SHARP_KEYS: [&str; 15] = [
    "C", "G", "D", "A", "E", "B", "F#", "C#", "a", "e", "b", "f#", "c#", "g#", "d#",
];
const FLAT_KEYS: [&str; 12] = [
    "F", "Bb", "Eb", "Ab", "Db", "Gb", "d", "g", "c", "f", "bb", "eb",
];

pub struct Scale {
    notes: Vec<String>,
}

impl Scale {
    pub fn new(tonic: &str, intervals: &str) -> Result<Scale, Error> {
        let chromatic = chromatic_from(tonic)?;
        let mut notes = vec![chromatic[0].clone()];
        let mut index = 0;
        for step in intervals.chars() {
            index += match step {
                'm' => 1,
                'M' => 2,
                'A' => 3,
                other => return Err(Error::InvalidInterval(other)),
            };
            notes.push(chromatic[index % 12].clone());
        }
        Ok(Scale { notes })
    }

    pub fn chromatic(tonic: &str) -> Result<Scale, Error> {
        Ok(Scale {
            notes: chromatic_from(tonic)?,
        })
    }

    pub fn enumerate(&self) -> Vec<String> {
        self.notes.clone()
    }
}

/// The 12-note chromatic scale rotated to start on `tonic`, spelled with
/// the accidentals that key signature calls for.
fn chromatic_from(tonic: &str) -> Result<Vec<String>, Error> {
    let spelling = if SHARP_KEYS.contains(&tonic) {
        &SHARPS
    } else if FLAT_KEYS.contains(&tonic) {
        &FLATS
    } else {
        return Err(Error::InvalidTonic);
    };

    let capitalized = {
        let mut chars = tonic.chars();
        let first = chars.next().expect("tonic is nonempty").to_ascii_uppercase();
        std::iter::once(first).chain(chars).collect::<String>()
    };
    let start = spelling
        .iter()
        .position(|&note| note == capitalized)
        .expect("every valid key names a note in its spelling");

    Ok((0..12)
        .map(|i| spelling[(start + i) % 12].to_string())
        .collect())
}
