use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Identifier assigned by the remote catalog once a movie is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub i64);

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MovieId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(MovieId)
    }
}

/// Provenance tag telling how a movie entered the remote store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Personal,
    Top100,
    /// Any tag this client does not know about (the server also uses e.g. "awards")
    #[serde(other)]
    Other,
}

impl Source {
    /// Value used in the `source` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Personal => "personal",
            Source::Top100 => "top100",
            Source::Other => "other",
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A movie persisted by the remote catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub imdb_id: String,
    pub title: String,
    #[serde(default)]
    pub is_watched: bool,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Short description generated by the remote service
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub plot: Option<String>,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub imdb_rating: Option<f32>,
    #[serde(default)]
    pub awards: Option<String>,
    /// Offset-less timestamps from the remote store are read as UTC
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub added_at: Option<DateTime<Utc>>,
}

impl Movie {
    /// Creates a movie with only the identifying fields set
    pub fn new(id: i64, imdb_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: MovieId(id),
            imdb_id: imdb_id.into(),
            title: title.into(),
            is_watched: false,
            source: Source::Personal,
            original_title: None,
            year: None,
            genres: Vec::new(),
            description: None,
            plot: None,
            cast: Vec::new(),
            director: None,
            poster_url: None,
            imdb_rating: None,
            awards: None,
            added_at: None,
        }
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    pub fn watched(mut self, is_watched: bool) -> Self {
        self.is_watched = is_watched;
        self
    }
}

/// Parses RFC 3339, falling back to a naive `T`- or space-separated timestamp
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| parse_timestamp(s.trim()).map_err(serde::de::Error::custom))
        .transpose()
}

/// Catalog search hit; not persisted and never carries a `MovieId`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub imdb_id: String,
    pub title: String,
    /// Year as the catalog reports it (may be a range for series)
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// A movie shown in the top-100 grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Top100Entry {
    #[serde(flatten)]
    pub movie: Movie,
    /// Whether the movie is already part of the personal list
    pub added: bool,
}

impl Top100Entry {
    pub fn added(movie: Movie) -> Self {
        Self { movie, added: true }
    }

    pub fn imdb_id(&self) -> &str {
        &self.movie.imdb_id
    }
}

/// Which slice of the personal list to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Watched,
    Unwatched,
}

impl FilterMode {
    pub fn matches(&self, movie: &Movie) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Watched => movie.is_watched,
            FilterMode::Unwatched => !movie.is_watched,
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "watched" => Ok(FilterMode::Watched),
            "unwatched" => Ok(FilterMode::Unwatched),
            other => Err(format!("unknown filter '{}'", other)),
        }
    }
}
