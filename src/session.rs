use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::Config,
    error::AppResult,
    models::{FilterMode, Movie, MovieId, Recommendation, SearchResult, Top100Entry},
    reference::TOP_100_IMDB_IDS,
    services::{
        CatalogApi, Confirm, HttpCatalogClient, LoadOutcome, Notifier, Reconciler, SearchService,
        Top100Loader, WatchlistService,
    },
    state::{Activity, AppState},
};

/// Session-scoped composition root.
///
/// Owns the shared state and wires every flow to the same catalog client
/// and notifier. Cloning is cheap and all clones share one session.
#[derive(Clone)]
pub struct Session {
    state: AppState,
    notifier: Notifier,
    search: SearchService,
    watchlist: WatchlistService,
    reconciler: Reconciler,
    top100: Arc<Top100Loader>,
}

impl Session {
    /// Builds a session against the configured remote catalog
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let client = HttpCatalogClient::from_config(config)?;
        Ok(Self::new(Arc::new(client), config))
    }

    /// Builds a session around an existing client using the reference catalog
    pub fn new(client: Arc<dyn CatalogApi>, config: &Config) -> Self {
        Self::with_catalog(
            client,
            TOP_100_IMDB_IDS.iter().copied(),
            config.top100_batch_size,
            config.notification_ttl(),
        )
    }

    pub fn with_catalog<I, S>(
        client: Arc<dyn CatalogApi>,
        catalog: I,
        batch_size: usize,
        notification_ttl: Duration,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let state = AppState::new();
        let notifier = Notifier::new(notification_ttl);

        tracing::debug!(client = client.name(), batch_size, "Session created");

        Self {
            search: SearchService::new(client.clone(), state.clone(), notifier.clone()),
            watchlist: WatchlistService::new(client.clone(), state.clone(), notifier.clone()),
            reconciler: Reconciler::new(client.clone(), state.clone(), notifier.clone()),
            top100: Arc::new(Top100Loader::new(
                client,
                catalog,
                batch_size,
                state.clone(),
                notifier.clone(),
            )),
            state,
            notifier,
        }
    }

    // ------------------------------------------------------------------
    // Personal list
    // ------------------------------------------------------------------

    pub async fn load_movies(&self) {
        self.watchlist.load().await
    }

    pub async fn filtered_view(&self, mode: FilterMode) -> Vec<Movie> {
        self.state.inner.read().await.movies.filtered_view(mode)
    }

    pub async fn toggle_watched(&self, id: MovieId) {
        self.watchlist.toggle_watched(id).await
    }

    pub async fn delete_movie(&self, id: MovieId, confirm: &dyn Confirm) {
        self.watchlist.delete_movie(id, confirm).await
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    pub async fn search(&self, query: &str) {
        self.search.search(query).await
    }

    pub async fn search_results(&self) -> Vec<SearchResult> {
        self.state.inner.read().await.search_results.as_slice().to_vec()
    }

    pub async fn promote(&self, imdb_id: &str) {
        self.search.promote(imdb_id).await
    }

    // ------------------------------------------------------------------
    // Recommendations
    // ------------------------------------------------------------------

    pub async fn recommend(&self, query: &str, include_watched: bool) {
        self.watchlist.recommend(query, include_watched).await
    }

    pub async fn recommendation(&self) -> Option<Recommendation> {
        self.state.inner.read().await.recommendation.clone()
    }

    // ------------------------------------------------------------------
    // Top 100
    // ------------------------------------------------------------------

    pub async fn load_top100(&self) -> LoadOutcome {
        self.top100.load().await
    }

    pub async fn top100(&self) -> Vec<Top100Entry> {
        self.state.top100_entries().await
    }

    pub async fn import_from_top100(&self, imdb_id: &str) {
        self.reconciler.import_from_top100(imdb_id).await
    }

    // ------------------------------------------------------------------
    // Observation
    // ------------------------------------------------------------------

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub async fn activity(&self) -> Activity {
        self.state.activity().await
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
