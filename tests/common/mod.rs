//! In-process stand-in for the remote catalog service.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, patch, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use cinelist::{
    middleware::request_id::REQUEST_ID_HEADER,
    models::{Movie, MovieId, SearchResult, Source},
    services::HttpCatalogClient,
};

#[derive(Default)]
pub struct StubState {
    pub movies: Vec<Movie>,
    pub next_id: i64,
    pub failing: HashSet<String>,
    pub search_index: HashMap<String, Vec<SearchResult>>,
    /// (imdb_id, source) of every by-id lookup
    pub lookups: Vec<(String, String)>,
    pub deletes: Vec<i64>,
    pub request_ids: Vec<String>,
}

#[derive(Clone, Default)]
pub struct Stub {
    pub inner: Arc<Mutex<StubState>>,
}

impl Stub {
    pub fn new() -> Self {
        let stub = Self::default();
        stub.inner.lock().unwrap().next_id = 1;
        stub
    }

    pub fn with_movie(self, imdb_id: &str, title: &str, source: Source) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            let id = inner.next_id;
            inner.next_id += 1;
            inner
                .movies
                .push(Movie::new(id, imdb_id, title).with_source(source));
        }
        self
    }

    pub fn failing(self, imdb_id: &str) -> Self {
        self.inner.lock().unwrap().failing.insert(imdb_id.to_string());
        self
    }

    pub fn indexed(self, query: &str, results: Vec<SearchResult>) -> Self {
        self.inner
            .lock()
            .unwrap()
            .search_index
            .insert(query.to_string(), results);
        self
    }

    pub fn lookups(&self) -> Vec<(String, String)> {
        self.inner.lock().unwrap().lookups.clone()
    }

    pub fn deletes(&self) -> Vec<i64> {
        self.inner.lock().unwrap().deletes.clone()
    }

    pub fn request_ids(&self) -> Vec<String> {
        self.inner.lock().unwrap().request_ids.clone()
    }

    pub fn movie_count(&self) -> usize {
        self.inner.lock().unwrap().movies.len()
    }

    fn record(&self, headers: &HeaderMap) {
        if let Some(id) = headers.get(REQUEST_ID_HEADER).and_then(|v| v.to_str().ok()) {
            self.inner.lock().unwrap().request_ids.push(id.to_string());
        }
    }
}

impl StubState {
    fn insert(&mut self, imdb_id: &str, title: String, source: Source) -> Movie {
        let movie = Movie::new(self.next_id, imdb_id, title).with_source(source);
        self.next_id += 1;
        self.movies.insert(0, movie.clone());
        movie
    }
}

pub fn search_hit(imdb_id: &str, title: &str, year: &str) -> SearchResult {
    SearchResult {
        imdb_id: imdb_id.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        poster_url: None,
    }
}

/// The remote store writes `added_at` without an offset
pub const BACKEND_ADDED_AT: &str = "2024-05-01T12:30:00";

fn backend_row(movie: &Movie) -> Value {
    let mut row = serde_json::to_value(movie).unwrap();
    row["added_at"] = json!(BACKEND_ADDED_AT);
    row
}

type Rejection = (StatusCode, Json<Value>);

fn reject(status: StatusCode, detail: impl Into<String>) -> Rejection {
    (status, Json(json!({ "detail": detail.into() })))
}

#[derive(Deserialize)]
struct ListParams {
    source: Option<String>,
}

async fn list_movies(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Json<Vec<Value>> {
    stub.record(&headers);
    let inner = stub.inner.lock().unwrap();
    let rows = inner
        .movies
        .iter()
        .filter(|m| match params.source.as_deref() {
            Some(source) => m.source.as_str() == source,
            None => true,
        })
        .map(backend_row)
        .collect();
    Json(rows)
}

#[derive(Deserialize)]
struct SearchParams {
    q: String,
}

async fn search(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Json<Vec<SearchResult>> {
    stub.record(&headers);
    let inner = stub.inner.lock().unwrap();
    Json(
        inner
            .search_index
            .get(&params.q.to_lowercase())
            .cloned()
            .unwrap_or_default(),
    )
}

#[derive(Deserialize)]
struct AddBody {
    query: String,
}

async fn add_movie(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<AddBody>,
) -> Result<Json<Value>, Rejection> {
    stub.record(&headers);
    let mut inner = stub.inner.lock().unwrap();
    if let Some(existing) = inner.movies.iter().find(|m| m.imdb_id == body.query) {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            format!("Movie '{}' is already in the list", existing.title),
        ));
    }
    if inner.failing.contains(&body.query) {
        return Err(reject(
            StatusCode::NOT_FOUND,
            format!("Movie '{}' not found", body.query),
        ));
    }
    let movie = inner.insert(&body.query, format!("Movie {}", body.query), Source::Personal);
    Ok(Json(backend_row(&movie)))
}

#[derive(Deserialize)]
struct PatchBody {
    is_watched: bool,
}

async fn update_movie(
    State(stub): State<Stub>,
    Path(id): Path<i64>,
    Json(body): Json<PatchBody>,
) -> Result<Json<Value>, Rejection> {
    let mut inner = stub.inner.lock().unwrap();
    match inner.movies.iter_mut().find(|m| m.id == MovieId(id)) {
        Some(movie) => {
            movie.is_watched = body.is_watched;
            Ok(Json(backend_row(movie)))
        }
        None => Err(reject(StatusCode::NOT_FOUND, "Movie not found")),
    }
}

async fn delete_movie(
    State(stub): State<Stub>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, Rejection> {
    let mut inner = stub.inner.lock().unwrap();
    inner.deletes.push(id);
    let before = inner.movies.len();
    inner.movies.retain(|m| m.id != MovieId(id));
    if inner.movies.len() == before {
        return Err(reject(StatusCode::NOT_FOUND, "Movie not found"));
    }
    Ok(Json(json!({ "message": "Movie deleted" })))
}

#[derive(Deserialize)]
struct SourceParams {
    source: Option<String>,
}

async fn add_by_imdb(
    State(stub): State<Stub>,
    Path(imdb_id): Path<String>,
    Query(params): Query<SourceParams>,
) -> Result<Json<Value>, Rejection> {
    let source_tag = params.source.unwrap_or_else(|| "personal".to_string());

    // spread completion times so that responses do not arrive in request order
    let jitter = imdb_id.bytes().map(u64::from).sum::<u64>() % 20;
    tokio::time::sleep(Duration::from_millis(jitter)).await;

    let mut inner = stub.inner.lock().unwrap();
    inner.lookups.push((imdb_id.clone(), source_tag.clone()));

    if inner.failing.contains(&imdb_id) {
        return Err(reject(
            StatusCode::NOT_FOUND,
            format!("Movie {} not found", imdb_id),
        ));
    }
    if let Some(existing) = inner.movies.iter().find(|m| m.imdb_id == imdb_id) {
        return Ok(Json(backend_row(existing)));
    }

    let source = if source_tag == "top100" {
        Source::Top100
    } else {
        Source::Personal
    };
    let movie = inner.insert(&imdb_id, format!("Movie {}", imdb_id), source);
    Ok(Json(backend_row(&movie)))
}

async fn recommend(State(stub): State<Stub>, Json(body): Json<Value>) -> Json<Value> {
    let include_watched = body["include_watched"].as_bool().unwrap_or(false);
    let inner = stub.inner.lock().unwrap();
    let movies: Vec<Value> = inner
        .movies
        .iter()
        .filter(|m| include_watched || !m.is_watched)
        .take(3)
        .map(backend_row)
        .collect();
    Json(json!({
        "movies": movies,
        "explanation": format!("Picked for '{}'", body["query"].as_str().unwrap_or_default()),
    }))
}

pub fn router(stub: Stub) -> Router {
    Router::new()
        .route("/api/movies", get(list_movies).post(add_movie))
        .route("/api/movies/:id", patch(update_movie).delete(delete_movie))
        .route("/api/movies/by-imdb/:imdb_id", post(add_by_imdb))
        .route("/api/search", get(search))
        .route("/api/recommend", post(recommend))
        .with_state(stub)
}

/// Serves the stub on an ephemeral port and returns its base URL
pub async fn spawn_stub(stub: Stub) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(stub)).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn client(base_url: &str) -> HttpCatalogClient {
    HttpCatalogClient::new(base_url, Duration::from_secs(5)).unwrap()
}
