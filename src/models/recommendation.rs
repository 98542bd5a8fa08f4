use serde::{Deserialize, Serialize};

use super::Movie;

/// Body of `POST /api/recommend`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    pub query: String,
    #[serde(default)]
    pub include_watched: bool,
}

/// Recommendation payload returned by the remote service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub explanation: String,
}
