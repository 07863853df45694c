//! Loaded-table state shared by the list and detail views.
//!
//! DESIGN
//! ======
//! Each view owns one `RwSignal<RecordsState<T>>`. A load is started with
//! [`RecordsState::begin`] and settled with [`RecordsState::finish`]; the
//! generation counter lets a view drop results from a load that was
//! superseded by a newer one (filter change, approve/reject refresh).

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use std::future::Future;

use leptos::prelude::*;
use session::BackendError;

/// What a view shows in place of (or above) its rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Loading,
    Failed(String),
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordsState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl<T> Default for RecordsState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None, generation: 0 }
    }
}

impl<T> RecordsState<T> {
    /// Mark a new load as in flight and return its generation.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Settle the load started as `generation`. Returns `false` (and leaves
    /// the state untouched) when a newer load has begun since.
    pub fn finish(&mut self, generation: u64, result: Result<Vec<T>, BackendError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => {
                log::warn!("records: load failed: {e}");
                self.items.clear();
                self.error = Some(e.to_string());
            }
        }
        true
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }

    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        if self.loading {
            Some(Notice::Loading)
        } else if let Some(error) = &self.error {
            Some(Notice::Failed(error.clone()))
        } else if self.items.is_empty() {
            Some(Notice::Empty)
        } else {
            None
        }
    }
}

/// Start a load into `target`, superseding any load still in flight.
///
/// The result is dropped if the owning view has been disposed by the time
/// `fetch` resolves.
pub fn spawn_load<T, Fut>(target: RwSignal<RecordsState<T>>, fetch: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, BackendError>> + 'static,
{
    let Some(generation) = target.try_update(RecordsState::begin) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = fetch.await;
        let _ = target.try_update(|state| state.finish(generation, result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (generation, fetch);
    }
}
