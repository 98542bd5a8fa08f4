use std::sync::Arc;

use crate::{
    models::Source,
    services::{catalog::CatalogApi, notifier::Notifier},
    state::AppState,
};

pub const IMPORT_FAILED_MESSAGE: &str = "failed to add movie";

/// Keeps the top-100 grid and the personal list consistent when a grid
/// entry is imported. It is the only writer allowed to touch both
/// collections in one operation.
#[derive(Clone)]
pub struct Reconciler {
    client: Arc<dyn CatalogApi>,
    state: AppState,
    notifier: Notifier,
}

impl Reconciler {
    pub fn new(client: Arc<dyn CatalogApi>, state: AppState, notifier: Notifier) -> Self {
        Self {
            client,
            state,
            notifier,
        }
    }

    /// Imports a grid movie into the personal list.
    ///
    /// The grid entry is replaced with the returned movie and flagged added.
    /// The personal list gets the movie only if it does not already hold
    /// that `imdb_id`.
    pub async fn import_from_top100(&self, imdb_id: &str) {
        self.state
            .inner
            .write()
            .await
            .activity
            .adding
            .insert(imdb_id.to_string());

        let outcome = self
            .client
            .fetch_by_imdb_id(imdb_id, Source::Personal)
            .await;

        let mut inner = self.state.inner.write().await;
        inner.activity.adding.remove(imdb_id);

        let movie = match outcome {
            Ok(movie) => movie,
            Err(e) => {
                drop(inner);
                tracing::error!(imdb_id = %imdb_id, error = %e, "Top 100 import failed");
                self.notifier.error(IMPORT_FAILED_MESSAGE);
                return;
            }
        };

        let title = movie.title.clone();
        let in_grid = inner.top100.mark_imported(movie.clone());
        let in_list = inner.movies.contains_imdb(&movie.imdb_id);
        if !in_list {
            inner.movies.add(movie);
        }
        drop(inner);

        tracing::info!(
            imdb_id = %imdb_id,
            in_grid,
            already_listed = in_list,
            "Top 100 movie imported"
        );
        self.notifier.success(format!("«{}» added to your list", title));
    }
}
