/// REST/JSON client for the remote catalog service
///
/// API Flow:
/// 1. Personal list: GET /api/movies (optionally `?source=top100`)
/// 2. Search: GET /api/search?q= → unpersisted search hits
/// 3. Mutations: POST/PATCH/DELETE under /api/movies
/// 4. Enrichment: POST /api/movies/by-imdb/{imdb_id}?source= persists and returns a movie
use std::time::Duration;

use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::Instrument;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    middleware::request_id::{make_span_with_request_id, with_request_id},
    models::{
        AddMovieRequest, ApiErrorBody, Movie, MovieId, Recommendation, RecommendationRequest,
        SearchResult, Source, UpdateMovieRequest,
    },
    services::catalog::CatalogApi,
};

#[derive(Clone)]
pub struct HttpCatalogClient {
    http_client: HttpClient,
    api_url: String,
}

impl HttpCatalogClient {
    /// Creates a client for the service at `api_url`
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        if api_url.is_empty() {
            return Err(AppError::InvalidInput(
                "Catalog base URL cannot be empty".to_string(),
            ));
        }

        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(config.api_base_url.clone(), config.request_timeout())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Sends a request and maps non-2xx responses to [`AppError::Rejected`]
    async fn send(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> AppResult<Response> {
        let url = format!("{}{}", self.api_url, path);
        let (builder, request_id) =
            with_request_id(build(self.http_client.request(method.clone(), &url)));
        let span = make_span_with_request_id(&method, path, &request_id);

        async move {
            tracing::debug!("Sending catalog request");
            let response = builder.send().await.map_err(|e| {
                tracing::debug!(error = %e, "Catalog request failed in transport");
                e
            })?;

            let status = response.status();
            if status.is_success() {
                tracing::debug!(status = %status, "Catalog request succeeded");
                return Ok(response);
            }

            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.message());

            tracing::debug!(status = %status, body = %body, "Catalog rejected request");

            Err(AppError::Rejected { status, detail })
        }
        .instrument(span)
        .await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> AppResult<T> {
        let response = self.send(method, path, build).await?;
        Ok(response.json::<T>().await?)
    }
}

/// IMDb ids are interpolated into URL paths, so only plain alphanumerics are accepted
fn validate_imdb_id(imdb_id: &str) -> AppResult<&str> {
    let trimmed = imdb_id.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::InvalidInput(format!(
            "Invalid IMDb id '{}'",
            imdb_id
        )));
    }
    Ok(trimmed)
}

#[async_trait::async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list_movies(&self, source: Option<Source>) -> AppResult<Vec<Movie>> {
        let movies: Vec<Movie> = self
            .send_json(Method::GET, "/api/movies", |req| match source {
                Some(source) => req.query(&[("source", source.as_str())]),
                None => req,
            })
            .await?;

        tracing::info!(
            source = source.map(|s| s.as_str()).unwrap_or("any"),
            count = movies.len(),
            "Movies listed"
        );

        Ok(movies)
    }

    async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let results: Vec<SearchResult> = self
            .send_json(Method::GET, "/api/search", |req| req.query(&[("q", query)]))
            .await?;

        tracing::info!(query = %query, results = results.len(), "Catalog search completed");

        Ok(results)
    }

    async fn add_movie(&self, query: &str) -> AppResult<Movie> {
        let body = AddMovieRequest {
            query: query.trim().to_string(),
        };
        self.send_json(Method::POST, "/api/movies", |req| req.json(&body))
            .await
    }

    async fn set_watched(&self, id: MovieId, is_watched: bool) -> AppResult<()> {
        let body = UpdateMovieRequest { is_watched };
        self.send(Method::PATCH, &format!("/api/movies/{}", id), |req| {
            req.json(&body)
        })
        .await?;
        Ok(())
    }

    async fn delete_movie(&self, id: MovieId) -> AppResult<()> {
        self.send(Method::DELETE, &format!("/api/movies/{}", id), |req| req)
            .await?;
        Ok(())
    }

    async fn fetch_by_imdb_id(&self, imdb_id: &str, source: Source) -> AppResult<Movie> {
        let imdb_id = validate_imdb_id(imdb_id)?;
        self.send_json(
            Method::POST,
            &format!("/api/movies/by-imdb/{}", imdb_id),
            |req| req.query(&[("source", source.as_str())]),
        )
        .await
    }

    async fn recommend(&self, request: &RecommendationRequest) -> AppResult<Recommendation> {
        self.send_json(Method::POST, "/api/recommend", |req| req.json(request))
            .await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
