use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Recommendation, Top100Entry};

mod grid;
mod search_results;
mod store;

pub use grid::Top100Grid;
pub use search_results::SearchResults;
pub use store::MovieStore;

/// Shared client state
#[derive(Clone, Default)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Flags describing which flows currently have a request in flight
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activity {
    pub loading_list: bool,
    /// Searches are never cancelled, so several can overlap
    pub searches_in_flight: usize,
    pub recommending: bool,
    pub top100_loading: bool,
    /// IMDb ids with an add or import request in flight
    pub adding: BTreeSet<String>,
}

impl Activity {
    pub fn is_searching(&self) -> bool {
        self.searches_in_flight > 0
    }

    pub fn is_adding(&self, imdb_id: &str) -> bool {
        self.adding.contains(imdb_id)
    }
}

/// Inner state that can be modified.
///
/// Each collection is written only through its own methods. Guards must be
/// dropped before awaiting a remote call.
#[derive(Debug, Default)]
pub struct AppStateInner {
    pub movies: MovieStore,
    pub search_results: SearchResults,
    pub top100: Top100Grid,
    pub recommendation: Option<Recommendation>,
    pub activity: Activity,
}

impl AppState {
    /// Creates a new empty application state
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn top100_entries(&self) -> Vec<Top100Entry> {
        self.inner.read().await.top100.entries().to_vec()
    }

    pub async fn activity(&self) -> Activity {
        self.inner.read().await.activity.clone()
    }
}
