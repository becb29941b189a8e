//! Progress analytics: daily training volume over a date range.
//!
//! Everything here is a pure function over a snapshot of sessions. Nothing
//! reads the clock, touches storage, or mutates its input.

pub mod chart;
pub mod range;

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ExerciseEntry, WorkoutSession};

pub use chart::ChartSeries;
pub use range::RangePreset;

/// Axis the volume is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Dimension {
    #[default]
    #[serde(rename = "exercise")]
    ByExercise,
    #[serde(rename = "muscle", alias = "muscleGroup")]
    ByMuscleGroup,
}

impl Dimension {
    /// The entry field this dimension matches against.
    pub fn key<'a>(&self, entry: &'a ExerciseEntry) -> &'a str {
        match self {
            Dimension::ByExercise => &entry.exercise_name,
            Dimension::ByMuscleGroup => &entry.muscle_group,
        }
    }
}

/// Inclusive date window. A missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// One day-bucket of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumePoint {
    pub date: NaiveDate,
    pub volume: f64,
}

/// Daily volume for `item` along `dimension`, ascending by date.
///
/// An empty `item` means nothing is selected and yields an empty series.
/// Days without matching volume are absent, never zero-filled.
pub fn compute_series(
    sessions: &[WorkoutSession],
    dimension: Dimension,
    item: &str,
    range: DateRange,
) -> Vec<VolumePoint> {
    if item.is_empty() {
        return Vec::new();
    }

    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for session in sessions.iter().filter(|s| range.contains(s.date)) {
        for entry in session
            .exercises
            .iter()
            .filter(|entry| dimension.key(entry) == item)
        {
            *buckets.entry(session.date).or_insert(0.0) += entry.volume();
        }
    }

    buckets
        .into_iter()
        .map(|(date, volume)| VolumePoint { date, volume })
        .collect()
}

/// Distinct, sorted values of `dimension` logged within `range`.
pub fn available_items(
    sessions: &[WorkoutSession],
    dimension: Dimension,
    range: DateRange,
) -> Vec<String> {
    sessions
        .iter()
        .filter(|s| range.contains(s.date))
        .flat_map(|s| s.exercises.iter())
        .map(|entry| dimension.key(entry))
        .filter(|key| !key.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Keep the selection only while it is still one of the offered options.
pub fn reconcile_selection(item: Option<&str>, options: &[String]) -> Option<String> {
    item.filter(|item| options.iter().any(|option| option.as_str() == *item))
        .map(str::to_string)
}
