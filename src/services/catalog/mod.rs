/// Remote catalog abstraction
///
/// Everything the client knows about the remote movie service goes through
/// [`CatalogApi`]. The trait carries no business logic: each method maps to a
/// single REST call and returns the typed response or an [`AppError`].
///
/// [`AppError`]: crate::error::AppError
use crate::{
    error::AppResult,
    models::{Movie, MovieId, Recommendation, RecommendationRequest, SearchResult, Source},
};

pub mod http;

pub use http::HttpCatalogClient;

/// Typed operations of the remote catalog service
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /api/movies`, optionally restricted to one provenance
    async fn list_movies(&self, source: Option<Source>) -> AppResult<Vec<Movie>>;

    /// `GET /api/search?q=`
    async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>>;

    /// `POST /api/movies` with a free-form title or IMDb id
    async fn add_movie(&self, query: &str) -> AppResult<Movie>;

    /// `PATCH /api/movies/{id}`
    async fn set_watched(&self, id: MovieId, is_watched: bool) -> AppResult<()>;

    /// `DELETE /api/movies/{id}`
    async fn delete_movie(&self, id: MovieId) -> AppResult<()>;

    /// `POST /api/movies/by-imdb/{imdb_id}?source=`
    ///
    /// The remote persists the movie under `source` as a side effect (or
    /// returns the already persisted row).
    async fn fetch_by_imdb_id(&self, imdb_id: &str, source: Source) -> AppResult<Movie>;

    /// `POST /api/recommend`
    async fn recommend(&self, request: &RecommendationRequest) -> AppResult<Recommendation>;

    /// Client name for logging and debugging
    fn name(&self) -> &'static str;
}
