//! Which plants belong to which child in the kindergarten window boxes.

const STUDENTS: [&str; 12] = [
    "Alice", "Bob", "Charlie", "David", "Eve", "Fred", "Ginny", "Harriet", "Ileana", "Joseph",
    "Kincaid", "Larry",
];

fn plant(cup: char) -> &'static str {
    match cup {
        'V' => "violets",
        'R' => "radishes",
        'C' => "clover",
        'G' => "grass",
        other => panic!("unknown seed {:?}", other),
    }
}

/// The four cups (two per row) belonging to `student`, whose position is
/// fixed by alphabetical order.
pub fn plants(diagram: &str, student: &str) -> Vec<&'static str> {
    let index = STUDENTS
        .iter()
        .position(|&s| s == student)
        .expect("student is in the roster");

    diagram
        .lines()
        .flat_map(|row| {
            row.chars()
                .skip(index * 2)
                .take(2)
                .map(plant)
                .collect::<Vec<_>>()
        })
        .collect()
}
