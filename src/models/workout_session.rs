use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;
use crate::models::muscle_group;

/// Deserialize a calendar day from either `YYYY-MM-DD` or an ISO timestamp.
/// Anything after the `T` separator is dropped; the day is the bucket.
fn deserialize_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_day(&raw).map_err(serde::de::Error::custom)
}

/// Optional variant for query strings, where an empty value means unset.
pub(crate) fn deserialize_optional_day<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_day(&s).map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

pub fn parse_day(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let day = raw.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    pub reps: i32,
    pub weight: f64,
}

impl SetEntry {
    pub fn new(reps: i32, weight: f64) -> Self {
        Self { reps, weight }
    }

    /// reps × weight, negative inputs included as-is.
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.weight
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    pub muscle_group: String,
    #[serde(rename = "exercise", alias = "exerciseName")]
    pub exercise_name: String,
    #[serde(default)]
    pub sets: Vec<SetEntry>,
}

impl ExerciseEntry {
    pub fn new(
        muscle_group: impl Into<String>,
        exercise_name: impl Into<String>,
        sets: Vec<SetEntry>,
    ) -> Self {
        Self {
            muscle_group: muscle_group.into(),
            exercise_name: exercise_name.into(),
            sets,
        }
    }

    pub fn volume(&self) -> f64 {
        self.sets.iter().map(SetEntry::volume).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: String,
    #[serde(deserialize_with = "deserialize_day")]
    pub date: NaiveDate,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkoutSession {
    #[serde(deserialize_with = "deserialize_day")]
    pub date: NaiveDate,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

impl CreateWorkoutSession {
    /// Reject incomplete sessions. Negative reps or weights are not clamped
    /// or rejected; only values that cannot take part in arithmetic are,
    /// including sets whose volume would overflow.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.exercises.is_empty() {
            return Err(AppError::Validation(
                "Session must contain at least one exercise".to_string(),
            ));
        }

        for (index, entry) in self.exercises.iter().enumerate() {
            let position = index + 1;
            let group = entry.muscle_group.trim();
            if group.is_empty() {
                return Err(AppError::Validation(format!(
                    "Exercise {position}: muscle group is required"
                )));
            }
            if !muscle_group::is_accepted(group) {
                return Err(AppError::Validation(format!(
                    "Exercise {position}: unknown muscle group {group}"
                )));
            }
            if entry.exercise_name.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "Exercise {position}: exercise name is required"
                )));
            }
            if entry.sets.is_empty() {
                return Err(AppError::Validation(format!(
                    "Exercise {position}: at least one set is required"
                )));
            }
            if entry.sets.iter().any(|set| !set.weight.is_finite()) {
                return Err(AppError::Validation(format!(
                    "Exercise {position}: all weights must be numbers"
                )));
            }
            let overflows = entry.sets.iter().any(|set| !set.volume().is_finite());
            if overflows || !entry.volume().is_finite() {
                return Err(AppError::Validation(format!(
                    "Exercise {position}: volume is out of range"
                )));
            }
        }

        if !self.volume().is_finite() {
            return Err(AppError::Validation(
                "Session volume is out of range".to_string(),
            ));
        }

        Ok(())
    }

    pub fn volume(&self) -> f64 {
        self.exercises.iter().map(ExerciseEntry::volume).sum()
    }
}
