//! Initial activity sets.
//!
//! The built-in set is the Mergington High School catalogue. A JSON file with
//! the same shape as `GET /activities` may replace it at startup.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};

use crate::{db::models::Activity, utils::errors::SeedError};

pub fn default_activities() -> Vec<(String, Activity)> {
    vec![
        (
            "Chess Club".into(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".into(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".into(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Basketball Team".into(),
            Activity::new(
                "Practice and compete in inter-school basketball games",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                15,
                &["liam@mergington.edu"],
            ),
        ),
        (
            "Soccer Club".into(),
            Activity::new(
                "Train in soccer skills and play friendly matches",
                "Wednesdays, 3:30 PM - 5:30 PM",
                22,
                &["noah@mergington.edu", "ava@mergington.edu"],
            ),
        ),
        (
            "Art Club".into(),
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Mondays, 3:30 PM - 5:00 PM",
                18,
                &["isabella@mergington.edu"],
            ),
        ),
        (
            "Drama Club".into(),
            Activity::new(
                "Act, direct and stage the school plays",
                "Thursdays, 3:30 PM - 5:30 PM",
                20,
                &["mia@mergington.edu", "lucas@mergington.edu"],
            ),
        ),
        (
            "Math Club".into(),
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["james@mergington.edu"],
            ),
        ),
        (
            "Debate Team".into(),
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ]
}

/// Seed entries in document order.
struct SeedDocument(Vec<(String, Activity)>);

impl<'de> Deserialize<'de> for SeedDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeedVisitor;

        impl<'de> Visitor<'de> for SeedVisitor {
            type Value = SeedDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, Activity)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    if entries.iter().any(|(n, _)| *n == name) {
                        return Err(de::Error::custom(format!(
                            "activity {name:?} appears more than once"
                        )));
                    }
                    entries.push((name, activity));
                }
                Ok(SeedDocument(entries))
            }
        }

        deserializer.deserialize_map(SeedVisitor)
    }
}

/// Parse a seed document: a JSON object mapping activity name to record.
/// Activities keep the order they appear in.
pub fn parse_seed(raw: &str) -> Result<Vec<(String, Activity)>, SeedError> {
    let SeedDocument(entries) = serde_json::from_str(raw)?;

    for (name, activity) in &entries {
        let mut seen = HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name.clone(),
                    email: email.clone(),
                });
            }
        }
    }

    Ok(entries)
}

pub fn load_seed_file(path: &Path) -> Result<Vec<(String, Activity)>, SeedError> {
    let raw = std::fs::read_to_string(path)?;
    parse_seed(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_contains_chess_club() {
        let seed = default_activities();
        assert!(seed.iter().any(|(name, _)| name == "Chess Club"));
    }

    #[test]
    fn default_set_respects_invariants() {
        for (name, a) in default_activities() {
            let unique: HashSet<_> = a.participants.iter().collect();
            assert_eq!(unique.len(), a.participants.len(), "{name} has duplicates");
        }
    }

    #[test]
    fn parses_valid_seed() {
        let raw = r#"{
            "Robotics": {
                "description": "Build robots",
                "schedule": "Saturdays",
                "max_participants": 4,
                "participants": ["a@x.edu"]
            },
            "Choir": {
                "description": "Sing",
                "schedule": "Mondays",
                "max_participants": 40
            }
        }"#;
        let seed = parse_seed(raw).unwrap();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].0, "Robotics");
        assert_eq!(seed[1].0, "Choir");
        let choir = &seed.iter().find(|(n, _)| n == "Choir").unwrap().1;
        assert!(choir.participants.is_empty());
    }

    #[test]
    fn rejects_duplicate_participant() {
        let raw = r#"{"X": {"description": "", "schedule": "", "max_participants": 5,
                     "participants": ["a@x.edu", "a@x.edu"]}}"#;
        match parse_seed(raw).unwrap_err() {
            SeedError::DuplicateParticipant { activity, email } => {
                assert_eq!(activity, "X");
                assert_eq!(email, "a@x.edu");
            }
            e => panic!("wrong error variant: {e}"),
        }
    }

    #[test]
    fn accepts_participants_beyond_max() {
        let raw = r#"{"X": {"description": "", "schedule": "", "max_participants": 1,
                     "participants": ["a@x.edu", "b@x.edu"]}}"#;
        let seed = parse_seed(raw).unwrap();
        assert_eq!(seed[0].1.participants.len(), 2);
    }

    #[test]
    fn rejects_repeated_activity_name() {
        let raw = r#"{"X": {"description": "", "schedule": "", "max_participants": 1},
                     "X": {"description": "", "schedule": "", "max_participants": 2}}"#;
        assert!(matches!(parse_seed(raw).unwrap_err(), SeedError::Json(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse_seed("[1, 2]").unwrap_err(), SeedError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_seed_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SeedError::Io(_)));
    }
}
