use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// One extracurricular offering. `participants` keeps signup order and
/// never contains the same email twice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Error)]
pub enum SignupError {
    #[error("no activity named '{0}'")]
    UnknownActivity(String),
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("{email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: String },
}

/// The full in-memory collection of activities, keyed by name. Lives for
/// the process lifetime; only the participant lists mutate after seeding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directory {
    activities: BTreeMap<String, Activity>,
}

impl Directory {
    pub fn seed() -> Self {
        let mut activities = BTreeMap::new();
        activities.insert(
            "Chess Club".to_string(),
            Activity {
                description: "Weekly games and strategy practice, beginners welcome".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: vec![
                    "michael@example.com".to_string(),
                    "daniel@example.com".to_string(),
                ],
            },
        );
        activities.insert(
            "Programming Class".to_string(),
            Activity {
                description: "Programming fundamentals through small software projects".to_string(),
                schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
                max_participants: 20,
                participants: vec![
                    "emma@example.com".to_string(),
                    "sophia@example.com".to_string(),
                ],
            },
        );
        activities.insert(
            "Gym Class".to_string(),
            Activity {
                description: "Physical education and team sports".to_string(),
                schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
                max_participants: 30,
                participants: vec!["john@example.com".to_string()],
            },
        );
        Self { activities }
    }

    pub fn load(path: &Path) -> Result<Self, DirectoryLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&contents)?)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn activities(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    pub fn contains(&self, name: &str) -> bool {
        self.activities.contains_key(name)
    }

    /// Adds `email` to the named activity's roster. Check and append happen
    /// in one call so callers holding the directory lock cannot race the
    /// uniqueness invariant.
    pub fn signup(&mut self, name: &str, email: &str) -> Result<(), SignupError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| SignupError::UnknownActivity(name.to_string()))?;
        if activity.participants.iter().any(|p| p == email) {
            return Err(SignupError::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the named activity's roster, keeping the order
    /// of the remaining participants.
    pub fn unregister(&mut self, name: &str, email: &str) -> Result<(), SignupError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| SignupError::UnknownActivity(name.to_string()))?;
        let position = activity.participants.iter().position(|p| p == email);
        match position {
            Some(index) => {
                activity.participants.remove(index);
                Ok(())
            }
            None => Err(SignupError::NotSignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            }),
        }
    }
}

#[derive(Debug, Error)]
pub enum DirectoryLoadError {
    #[error("failed to read activities file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse activities file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    #[test]
    fn seed__should_contain_known_activities() {
        // When
        let directory = Directory::seed();

        // Then
        assert!(directory.contains("Chess Club"));
        assert!(directory.contains("Programming Class"));
        assert!(directory.contains("Gym Class"));
    }

    #[test]
    fn signup__should_append_email_in_order() {
        // Given
        let mut directory = Directory::seed();
        let before = directory.activities()["Chess Club"].participants.clone();

        // When
        directory
            .signup("Chess Club", "newcomer@example.com")
            .expect("signup");

        // Then
        let after = &directory.activities()["Chess Club"].participants;
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(
            after.last().map(String::as_str),
            Some("newcomer@example.com")
        );
        assert_eq!(&after[..before.len()], &before[..]);
    }

    #[test]
    fn signup__should_reject_duplicate_email() {
        // Given
        let mut directory = Directory::seed();
        directory
            .signup("Chess Club", "newcomer@example.com")
            .expect("first signup");

        // When
        let result = directory.signup("Chess Club", "newcomer@example.com");

        // Then
        assert!(matches!(result, Err(SignupError::AlreadySignedUp { .. })));
        let roster = &directory.activities()["Chess Club"].participants;
        let occurrences = roster
            .iter()
            .filter(|p| *p == "newcomer@example.com")
            .count();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn signup__should_reject_unknown_activity() {
        // Given
        let mut directory = Directory::seed();

        // When
        let result = directory.signup("Underwater Basket Weaving", "a@b.com");

        // Then
        assert!(matches!(result, Err(SignupError::UnknownActivity(_))));
    }

    #[test]
    fn unregister__should_remove_email_and_keep_order() {
        // Given
        let mut directory = Directory::seed();
        directory
            .signup("Gym Class", "late@example.com")
            .expect("signup");

        // When
        directory
            .unregister("Gym Class", "john@example.com")
            .expect("unregister");

        // Then
        let roster = &directory.activities()["Gym Class"].participants;
        assert_eq!(roster, &vec!["late@example.com".to_string()]);
    }

    #[test]
    fn unregister__should_reject_absent_email() {
        // Given
        let mut directory = Directory::seed();

        // When
        let result = directory.unregister("Chess Club", "ghost@example.com");

        // Then
        assert!(matches!(result, Err(SignupError::NotSignedUp { .. })));
    }

    #[test]
    fn from_toml_str__should_parse_activities() {
        // Given
        let contents = r#"
["Robotics Club"]
description = "Build and program robots"
schedule = "Wednesdays, 4:00 PM - 5:30 PM"
max_participants = 8
participants = ["ada@example.com"]

["Drama Club"]
description = "Rehearse and stage the spring play"
schedule = "Thursdays, 3:30 PM - 5:00 PM"
max_participants = 25
"#;

        // When
        let directory = Directory::from_toml_str(contents).expect("parse");

        // Then
        assert!(directory.contains("Robotics Club"));
        let robotics = &directory.activities()["Robotics Club"];
        assert_eq!(robotics.max_participants, 8);
        assert_eq!(robotics.participants, vec!["ada@example.com".to_string()]);
        assert!(directory.activities()["Drama Club"].participants.is_empty());
    }

    #[test]
    fn from_toml_str__should_reject_missing_fields() {
        // Given
        let contents = r#"
["Robotics Club"]
description = "Build and program robots"
"#;

        // Then
        assert!(Directory::from_toml_str(contents).is_err());
    }
}
