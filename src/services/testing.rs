//! In-memory catalog used by unit tests that care about call timing and ordering.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use reqwest::StatusCode;

use crate::{
    error::{AppError, AppResult},
    models::{Movie, MovieId, Recommendation, RecommendationRequest, SearchResult, Source},
    services::catalog::CatalogApi,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start(String),
    End(String),
}

#[derive(Default)]
pub struct FakeCatalog {
    pub top100_rows: Vec<Movie>,
    pub failing: HashSet<String>,
    pub delays: HashMap<String, Duration>,
    pub search_responses: HashMap<String, Vec<SearchResult>>,
    pub events: Mutex<Vec<Event>>,
    pub list_calls: AtomicUsize,
    pub lookup_calls: AtomicUsize,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, imdb_id: &str) -> Self {
        self.failing.insert(imdb_id.to_string());
        self
    }

    pub fn delay(mut self, key: &str, ms: u64) -> Self {
        self.delays.insert(key.to_string(), Duration::from_millis(ms));
        self
    }

    pub fn search_response(mut self, query: &str, results: Vec<SearchResult>) -> Self {
        self.search_responses.insert(query.to_string(), results);
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    async fn tracked<T>(&self, key: &str, value: T) -> T {
        self.events.lock().unwrap().push(Event::Start(key.to_string()));
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self
            .delays
            .get(key)
            .copied()
            .unwrap_or(Duration::from_millis(10));
        tokio::time::sleep(delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.events.lock().unwrap().push(Event::End(key.to_string()));
        value
    }
}

fn numeric_id(imdb_id: &str) -> i64 {
    imdb_id.trim_start_matches("tt").parse().unwrap_or(0)
}

fn not_found() -> AppError {
    AppError::Rejected {
        status: StatusCode::NOT_FOUND,
        detail: None,
    }
}

#[async_trait::async_trait]
impl CatalogApi for FakeCatalog {
    async fn list_movies(&self, source: Option<Source>) -> AppResult<Vec<Movie>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match source {
            Some(Source::Top100) => Ok(self.top100_rows.clone()),
            _ => Ok(Vec::new()),
        }
    }

    async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>> {
        let results = self.search_responses.get(query).cloned().unwrap_or_default();
        Ok(self.tracked(query, results).await)
    }

    async fn add_movie(&self, query: &str) -> AppResult<Movie> {
        let movie = Movie::new(numeric_id(query), query, format!("Movie {}", query));
        Ok(self.tracked(query, movie).await)
    }

    async fn set_watched(&self, _id: MovieId, _is_watched: bool) -> AppResult<()> {
        Ok(())
    }

    async fn delete_movie(&self, _id: MovieId) -> AppResult<()> {
        Ok(())
    }

    async fn fetch_by_imdb_id(&self, imdb_id: &str, source: Source) -> AppResult<Movie> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        let failed = self.failing.contains(imdb_id);
        self.tracked(imdb_id, ()).await;
        if failed {
            return Err(not_found());
        }
        Ok(Movie::new(numeric_id(imdb_id), imdb_id, format!("Movie {}", imdb_id)).with_source(source))
    }

    async fn recommend(&self, _request: &RecommendationRequest) -> AppResult<Recommendation> {
        Ok(Recommendation {
            movies: Vec::new(),
            explanation: String::new(),
        })
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
