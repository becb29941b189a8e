//! Glue between the pure analytics/catalog functions and their data sources.
//!
//! Each collaborator can fail independently. Failures are logged and replaced
//! with an empty contribution so callers always get a (possibly empty) result.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::{self, ChartSeries, DateRange, Dimension, RangePreset, VolumePoint};
use crate::catalog::{self, CatalogError, CatalogOption};
use crate::error::Result;
use crate::models::workout_session::deserialize_optional_day;
use crate::models::{muscle_group, WorkoutSession};
use crate::repositories::{CustomExerciseRepository, WorkoutRepository};

#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    async fn load_sessions(&self) -> Result<Vec<WorkoutSession>>;
}

#[async_trait]
pub trait ExerciseCatalog: Send + Sync + 'static {
    async fn names_for(
        &self,
        muscle_group: &str,
    ) -> std::result::Result<Vec<String>, CatalogError>;
}

#[async_trait]
pub trait CustomExerciseStore: Send + Sync + 'static {
    async fn names_for(&self, muscle_group: &str) -> Result<Vec<String>>;
}

#[async_trait]
impl SessionStore for WorkoutRepository {
    async fn load_sessions(&self) -> Result<Vec<WorkoutSession>> {
        self.find_all_sessions().await
    }
}

#[async_trait]
impl CustomExerciseStore for CustomExerciseRepository {
    async fn names_for(&self, muscle_group: &str) -> Result<Vec<String>> {
        self.find_names_by_muscle_group(muscle_group).await
    }
}

/// Selection for a progress chart.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressQuery {
    #[serde(default)]
    pub dimension: Dimension,
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub range: RangePreset,
    #[serde(default, deserialize_with = "deserialize_optional_day")]
    pub start: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_day")]
    pub end: Option<NaiveDate>,
}

impl ProgressQuery {
    /// Preset bounds relative to `today`, overridden by explicit dates.
    pub fn date_range(&self, today: NaiveDate) -> DateRange {
        self.range.bounds(today).with_overrides(self.start, self.end)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressView {
    pub dimension: Dimension,
    pub preset: RangePreset,
    pub range_label: &'static str,
    pub range: DateRange,
    pub options: Vec<String>,
    pub selected: Option<String>,
    pub series: Vec<VolumePoint>,
    pub chart: Option<ChartSeries>,
}

impl ProgressView {
    /// Compute the view from an already loaded snapshot.
    pub fn compute(sessions: &[WorkoutSession], query: &ProgressQuery, today: NaiveDate) -> Self {
        let range = query.date_range(today);
        let options = analytics::available_items(sessions, query.dimension, range);
        let selected = reconcile(query.item.as_deref(), &options);

        let series = selected
            .as_deref()
            .map(|item| analytics::compute_series(sessions, query.dimension, item, range))
            .unwrap_or_default();
        let chart = selected
            .as_deref()
            .map(|item| ChartSeries::from_series(item, &series));

        Self {
            dimension: query.dimension,
            preset: query.range,
            range_label: query.range.display_name(),
            range,
            options,
            selected,
            series,
            chart,
        }
    }
}

fn reconcile(item: Option<&str>, options: &[String]) -> Option<String> {
    let item = item.filter(|item| !item.is_empty());
    let selected = analytics::reconcile_selection(item, options);
    if let (Some(requested), None) = (item, &selected) {
        tracing::debug!("Clearing stale selection: {}", requested);
    }
    selected
}

#[derive(Clone)]
pub struct ProgressService {
    sessions: Arc<dyn SessionStore>,
    catalog: Arc<dyn ExerciseCatalog>,
    custom: Arc<dyn CustomExerciseStore>,
}

impl ProgressService {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        catalog: Arc<dyn ExerciseCatalog>,
        custom: Arc<dyn CustomExerciseStore>,
    ) -> Self {
        Self {
            sessions,
            catalog,
            custom,
        }
    }

    /// Sessions from the store, or none at all if the store fails.
    pub async fn load_sessions(&self) -> Vec<WorkoutSession> {
        match self.sessions.load_sessions().await {
            Ok(sessions) => sessions,
            Err(e) => {
                tracing::warn!("Session store unavailable, using empty history: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn progress(&self, query: &ProgressQuery, today: NaiveDate) -> ProgressView {
        let sessions = self.load_sessions().await;
        let view = ProgressView::compute(&sessions, query, today);
        tracing::debug!(
            "Computed {} volume points over {} sessions ({})",
            view.series.len(),
            sessions.len(),
            query.range.as_str()
        );
        view
    }

    /// Options for the exercise picker. Both lookups run concurrently and
    /// are resolved only after both have finished.
    pub async fn catalog_options(
        &self,
        muscle_group: &str,
        pinned: Option<&str>,
    ) -> Vec<CatalogOption> {
        let muscle_group = muscle_group.trim();
        if muscle_group.is_empty() || muscle_group::is_other(muscle_group) {
            return Vec::new();
        }

        let (remote, custom) = tokio::join!(
            self.catalog.names_for(muscle_group),
            self.custom.names_for(muscle_group)
        );

        let remote = remote.unwrap_or_else(|e| {
            tracing::warn!("Remote catalog lookup failed for {}: {}", muscle_group, e);
            Vec::new()
        });
        let custom = custom.unwrap_or_else(|e| {
            tracing::warn!("Custom exercise lookup failed for {}: {}", muscle_group, e);
            Vec::new()
        });

        catalog::resolve(muscle_group, &remote, &custom, pinned)
    }
}
