//! Randomly named robots: two uppercase letters followed by three digits,
//! unique across every robot created by this process.

use rand::Rng;
use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

/// Names handed out so far. 26*26*1000 = 676,000 possibilities, so
/// collisions become a hang only if someone creates the entire fleet.
fn used_names() -> &'static Mutex<HashSet<String>> {
    static USED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();
    USED.get_or_init(|| Mutex::new(HashSet::new()))
}

fn generate_name() -> String {
    let mut rng = rand::thread_rng();
    let mut used = used_names().lock().expect("name registry poisoned");
    loop {
        let name = format!(
            "{}{}{:03}",
            (b'A' + rng.gen_range(0..26)) as char,
            (b'A' + rng.gen_range(0..26)) as char,
            rng.gen_range(0..1000)
        );
        if used.insert(name.clone()) {
            return name;
        }
    }
}

pub struct Robot {
    name: String,
}

impl Default for Robot {
    fn default() -> Self {
        Self::new()
    }
}

impl Robot {
    pub fn new() -> Self {
        Robot {
            name: generate_name(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wipe the robot to factory settings: it comes back with a new name.
    pub fn reset_name(&mut self) {
        self.name = generate_name();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_name_format(name: &str) {
        assert_eq!(name.len(), 5, "name {:?} should be 5 characters", name);
        assert!(
            name[..2].chars().all(|c| c.is_ascii_uppercase()),
            "name {:?} should start with two uppercase letters",
            name
        );
        assert!(
            name[2..].chars().all(|c| c.is_ascii_digit()),
            "name {:?} should end with three digits",
            name
        );
    }

    #[test]
    fn name_matches_expected_pattern() {
        let robot = Robot::new();
        assert_name_format(robot.name());
    }

    #[test]
    fn name_is_stable_between_calls() {
        let robot = Robot::new();
        assert_eq!(robot.name().to_string(), robot.name());
    }

    #[test]
    fn different_robots_have_different_names() {
        let a = Robot::new();
        let b = Robot::new();
        assert_ne!(a.name(), b.name());
    }

    #[test]
    fn reset_assigns_a_new_name() {
        let mut robot = Robot::new();
        let original = robot.name().to_string();
        robot.reset_name();
        assert_ne!(robot.name(), original);
        assert_name_format(robot.name());
    }

    #[test]
    fn many_robots_stay_unique() {
        let names: std::collections::HashSet<String> =
            (0..100).map(|_| Robot::new().name().to_string()).collect();
        assert_eq!(names.len(), 100);
    }
}
