use serde::{Deserialize, Serialize};

mod movie;
mod notification;
mod recommendation;

pub use movie::{FilterMode, Movie, MovieId, SearchResult, Source, Top100Entry};
pub use notification::{Notification, NotificationKind};
pub use recommendation::{Recommendation, RecommendationRequest};

// ============================================================================
// Remote Catalog Request Bodies
// ============================================================================

/// Body of `POST /api/movies`; `query` is a title or an IMDb id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddMovieRequest {
    pub query: String,
}

/// Body of `PATCH /api/movies/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateMovieRequest {
    pub is_watched: bool,
}

/// Error body produced by the remote service on rejection
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Usually a human readable string; validation failures send a list instead
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// The `detail` message, if the service sent a plain string
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
