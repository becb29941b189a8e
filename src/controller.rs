//! Last-request-wins sequencing for interactive callers.
//!
//! A form that re-queries whenever the user changes a selector can have
//! several lookups in flight at once. Each lookup takes a token from a
//! [`RequestTracker`]; when it completes, only the newest token's result is
//! delivered and the rest are reported as [`Outcome::Superseded`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;

use crate::catalog::CatalogOption;
use crate::service::{ProgressQuery, ProgressService, ProgressView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Generation counter; only the most recently issued token is current.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Current(T),
    Superseded,
}

impl<T> Outcome<T> {
    pub fn into_current(self) -> Option<T> {
        match self {
            Outcome::Current(value) => Some(value),
            Outcome::Superseded => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, Outcome::Superseded)
    }
}

/// Drives a [`ProgressService`] on behalf of one interactive view: one
/// progress chart plus any number of exercise rows, each identified by slot.
pub struct SelectionController {
    service: ProgressService,
    progress: RequestTracker,
    slots: Mutex<HashMap<usize, Arc<RequestTracker>>>,
}

impl SelectionController {
    pub fn new(service: ProgressService) -> Self {
        Self {
            service,
            progress: RequestTracker::new(),
            slots: Mutex::new(HashMap::new()),
        }
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<usize, Arc<RequestTracker>>> {
        self.slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn slot_tracker(&self, slot: usize) -> Arc<RequestTracker> {
        self.slots().entry(slot).or_default().clone()
    }

    /// Stop tracking a removed exercise row. A lookup still in flight for
    /// that slot completes as superseded.
    pub fn forget_slot(&self, slot: usize) {
        if let Some(tracker) = self.slots().remove(&slot) {
            tracker.begin();
        }
    }

    pub async fn refresh_progress(
        &self,
        query: &ProgressQuery,
        today: NaiveDate,
    ) -> Outcome<ProgressView> {
        let token = self.progress.begin();
        let view = self.service.progress(query, today).await;

        if self.progress.is_current(token) {
            Outcome::Current(view)
        } else {
            tracing::debug!("Discarding superseded progress result");
            Outcome::Superseded
        }
    }

    /// Resolve options for the exercise row at `slot` after its muscle group
    /// changed (or when it is re-populated with `pinned`).
    pub async fn change_muscle_group(
        &self,
        slot: usize,
        muscle_group: &str,
        pinned: Option<&str>,
    ) -> Outcome<Vec<CatalogOption>> {
        let tracker = self.slot_tracker(slot);
        let token = tracker.begin();
        let options = self.service.catalog_options(muscle_group, pinned).await;

        if tracker.is_current(token) {
            Outcome::Current(options)
        } else {
            tracing::debug!("Discarding superseded catalog result for slot {}", slot);
            Outcome::Superseded
        }
    }
}
