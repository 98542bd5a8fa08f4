use std::sync::Arc;

use crate::{
    services::{catalog::CatalogApi, notifier::Notifier},
    state::AppState,
};

pub const NOT_FOUND_MESSAGE: &str = "no movies found";
pub const SEARCH_FAILED_MESSAGE: &str = "search failed";
pub const ADD_FAILED_MESSAGE: &str = "failed to add movie";

/// Search flow: transient catalog results that can be promoted into the personal list
#[derive(Clone)]
pub struct SearchService {
    client: Arc<dyn CatalogApi>,
    state: AppState,
    notifier: Notifier,
}

impl SearchService {
    pub fn new(client: Arc<dyn CatalogApi>, state: AppState, notifier: Notifier) -> Self {
        Self {
            client,
            state,
            notifier,
        }
    }

    /// Runs one catalog search and replaces the current results with its response.
    ///
    /// Blank queries are ignored. In-flight searches are never cancelled, so
    /// whichever response settles last wins.
    pub async fn search(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        {
            let mut inner = self.state.inner.write().await;
            inner.search_results.clear();
            inner.activity.searches_in_flight += 1;
        }

        let outcome = self.client.search(query).await;

        let mut inner = self.state.inner.write().await;
        inner.activity.searches_in_flight = inner.activity.searches_in_flight.saturating_sub(1);
        match outcome {
            Ok(results) => {
                let empty = results.is_empty();
                inner.search_results.replace(results);
                drop(inner);

                if empty {
                    self.notifier.error(NOT_FOUND_MESSAGE);
                }
            }
            Err(e) => {
                drop(inner);
                tracing::error!(query = %query, error = %e, "Search failed");
                self.notifier.error(SEARCH_FAILED_MESSAGE);
            }
        }
    }

    /// Adds a search hit to the personal list and drops it from the results
    pub async fn promote(&self, imdb_id: &str) {
        self.state
            .inner
            .write()
            .await
            .activity
            .adding
            .insert(imdb_id.to_string());

        let outcome = self.client.add_movie(imdb_id).await;

        let mut inner = self.state.inner.write().await;
        inner.activity.adding.remove(imdb_id);
        match outcome {
            Ok(movie) => {
                let title = movie.title.clone();
                if !inner.movies.add(movie) {
                    tracing::debug!(imdb_id = %imdb_id, "Movie already in personal list");
                }
                inner.search_results.remove_imdb(imdb_id);
                drop(inner);

                tracing::info!(imdb_id = %imdb_id, title = %title, "Movie added from search");
                self.notifier.success(format!("«{}» added to your list", title));
            }
            Err(e) => {
                drop(inner);
                tracing::error!(imdb_id = %imdb_id, error = %e, "Adding movie failed");
                let message = e.detail().unwrap_or(ADD_FAILED_MESSAGE).to_string();
                self.notifier.error(message);
            }
        }
    }
}
