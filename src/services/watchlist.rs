use std::sync::Arc;

use crate::{
    models::{MovieId, RecommendationRequest},
    services::{catalog::CatalogApi, notifier::Notifier},
    state::AppState,
};

pub const LOAD_FAILED_MESSAGE: &str = "failed to load movies";
pub const UPDATE_FAILED_MESSAGE: &str = "failed to update movie";
pub const DELETE_FAILED_MESSAGE: &str = "failed to delete movie";
pub const DELETED_MESSAGE: &str = "movie deleted";
pub const RECOMMEND_FAILED_MESSAGE: &str = "failed to get recommendations";
pub const DELETE_PROMPT: &str = "Delete this movie from your list?";

/// Asks the user to confirm a destructive action
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Flows over the personal list itself: load, watched toggle, delete and
/// recommendations
#[derive(Clone)]
pub struct WatchlistService {
    client: Arc<dyn CatalogApi>,
    state: AppState,
    notifier: Notifier,
}

impl WatchlistService {
    pub fn new(client: Arc<dyn CatalogApi>, state: AppState, notifier: Notifier) -> Self {
        Self {
            client,
            state,
            notifier,
        }
    }

    /// Replaces the personal list with the remote listing
    pub async fn load(&self) {
        self.state.inner.write().await.activity.loading_list = true;

        let outcome = self.client.list_movies(None).await;

        let mut inner = self.state.inner.write().await;
        inner.activity.loading_list = false;
        match outcome {
            Ok(movies) => {
                let count = movies.len();
                inner.movies.replace_all(movies);
                tracing::info!(count, "Personal list loaded");
            }
            Err(e) => {
                drop(inner);
                tracing::error!(error = %e, "Loading personal list failed");
                self.notifier.error(LOAD_FAILED_MESSAGE);
            }
        }
    }

    /// Flips the watched flag remotely, then locally
    pub async fn toggle_watched(&self, id: MovieId) {
        let current = {
            let inner = self.state.inner.read().await;
            inner.movies.get(id).map(|m| m.is_watched)
        };
        let Some(current) = current else {
            tracing::debug!(movie_id = %id, "Toggle requested for unknown movie");
            return;
        };
        let target = !current;

        if let Err(e) = self.client.set_watched(id, target).await {
            tracing::error!(movie_id = %id, error = %e, "Updating watched flag failed");
            self.notifier.error(UPDATE_FAILED_MESSAGE);
            return;
        }

        let title = {
            let mut inner = self.state.inner.write().await;
            inner
                .movies
                .set_watched(id, target)
                .map(|m| m.title.clone())
        };

        // the movie may have been deleted while the request was in flight
        let Some(title) = title else {
            return;
        };

        let message = if target {
            format!("«{}» marked as watched", title)
        } else {
            format!("«{}» returned to watchlist", title)
        };
        self.notifier.success(message);
    }

    /// Deletes a movie after the user confirmed it
    pub async fn delete_movie(&self, id: MovieId, confirm: &dyn Confirm) {
        if !confirm.confirm(DELETE_PROMPT).await {
            tracing::debug!(movie_id = %id, "Delete not confirmed");
            return;
        }

        if let Err(e) = self.client.delete_movie(id).await {
            tracing::error!(movie_id = %id, error = %e, "Deleting movie failed");
            self.notifier.error(DELETE_FAILED_MESSAGE);
            return;
        }

        self.state.inner.write().await.movies.remove(id);
        tracing::info!(movie_id = %id, "Movie deleted");
        self.notifier.success(DELETED_MESSAGE);
    }

    /// Asks the remote service for a recommendation from the personal list
    pub async fn recommend(&self, query: &str, include_watched: bool) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        {
            let mut inner = self.state.inner.write().await;
            inner.recommendation = None;
            inner.activity.recommending = true;
        }

        let request = RecommendationRequest {
            query: query.to_string(),
            include_watched,
        };
        let outcome = self.client.recommend(&request).await;

        let mut inner = self.state.inner.write().await;
        inner.activity.recommending = false;
        match outcome {
            Ok(recommendation) => {
                tracing::info!(
                    query = %query,
                    movies = recommendation.movies.len(),
                    "Recommendation received"
                );
                inner.recommendation = Some(recommendation);
            }
            Err(e) => {
                drop(inner);
                tracing::error!(query = %query, error = %e, "Recommendation failed");
                self.notifier.error(RECOMMEND_FAILED_MESSAGE);
            }
        }
    }
}
