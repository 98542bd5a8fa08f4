use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Mutex;

use crate::{
    error::AppResult,
    models::{Movie, Source},
    services::{catalog::CatalogApi, notifier::Notifier},
    state::AppState,
};

/// Number of by-id lookups issued concurrently per batch
pub const DEFAULT_BATCH_SIZE: usize = 5;

pub const LOAD_FAILED_MESSAGE: &str = "failed to load top 100";

/// What a call to [`Top100Loader::load`] ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// An earlier call already populated the grid
    AlreadyLoaded,
    /// The remote already held top-100 rows; they became the grid as-is
    Adopted { count: usize },
    /// The grid was built from the reference catalog
    Enriched {
        batches: usize,
        resolved: usize,
        failed: usize,
    },
    /// The materialization check failed; the next call starts over
    Failed,
}

/// Populates the top-100 grid at most once per session.
///
/// If the remote store already holds rows tagged `top100` they are adopted
/// verbatim. Otherwise every id of the reference catalog is looked up, in
/// contiguous batches of `batch_size` requests. A batch is issued only after
/// every request of the previous one has settled.
pub struct Top100Loader {
    client: Arc<dyn CatalogApi>,
    catalog: Vec<String>,
    batch_size: usize,
    state: AppState,
    notifier: Notifier,
    loaded: Mutex<bool>,
}

impl Top100Loader {
    pub fn new<I, S>(
        client: Arc<dyn CatalogApi>,
        catalog: I,
        batch_size: usize,
        state: AppState,
        notifier: Notifier,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            client,
            catalog: catalog.into_iter().map(Into::into).collect(),
            batch_size: batch_size.max(1),
            state,
            notifier,
            loaded: Mutex::new(false),
        }
    }

    /// Whether a previous call completed the pass
    pub async fn is_loaded(&self) -> bool {
        *self.loaded.lock().await
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Loads the grid unless it has already been loaded this session.
    ///
    /// The latch lock is held for the whole pass, so a concurrent caller
    /// waits and then observes the latch instead of starting a second pass.
    pub async fn load(&self) -> LoadOutcome {
        let mut loaded = self.loaded.lock().await;
        if *loaded {
            tracing::debug!("Top 100 already loaded, skipping");
            return LoadOutcome::AlreadyLoaded;
        }

        self.state.inner.write().await.activity.top100_loading = true;
        let result = self.populate().await;
        self.state.inner.write().await.activity.top100_loading = false;

        match result {
            Ok(outcome) => {
                *loaded = true;
                tracing::info!(outcome = ?outcome, "Top 100 loaded");
                outcome
            }
            Err(e) => {
                tracing::error!(error = %e, "Top 100 load failed");
                self.notifier.error(LOAD_FAILED_MESSAGE);
                LoadOutcome::Failed
            }
        }
    }

    async fn populate(&self) -> AppResult<LoadOutcome> {
        let existing = self.client.list_movies(Some(Source::Top100)).await?;

        if !existing.is_empty() {
            let count = existing.len();
            self.state.inner.write().await.top100.adopt(existing);
            return Ok(LoadOutcome::Adopted { count });
        }

        self.state.inner.write().await.top100.clear();

        let mut batches = 0;
        let mut resolved = 0;
        let mut failed = 0;

        for batch in self.catalog.chunks(self.batch_size) {
            batches += 1;
            // join_all keeps input order regardless of completion order
            let settled = join_all(batch.iter().map(|imdb_id| self.lookup(imdb_id))).await;
            let movies: Vec<Movie> = settled.into_iter().flatten().collect();

            resolved += movies.len();
            failed += batch.len() - movies.len();

            tracing::debug!(
                batch = batches,
                size = batch.len(),
                resolved = movies.len(),
                "Top 100 batch settled"
            );

            self.state.inner.write().await.top100.extend(movies);
        }

        if failed > 0 {
            tracing::warn!(
                success_count = resolved,
                error_count = failed,
                "Partial top 100 enrichment failure"
            );
        }

        Ok(LoadOutcome::Enriched {
            batches,
            resolved,
            failed,
        })
    }

    async fn lookup(&self, imdb_id: &str) -> Option<Movie> {
        match self.client.fetch_by_imdb_id(imdb_id, Source::Top100).await {
            Ok(movie) => Some(movie),
            Err(e) => {
                tracing::warn!(imdb_id = %imdb_id, error = %e, "Top 100 lookup failed, skipping");
                None
            }
        }
    }
}
