use crate::models::SearchResult;

/// Results of the most recently settled search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    results: Vec<SearchResult>,
}

impl SearchResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }

    /// Replaces the results wholesale; responses are never merged
    pub fn replace(&mut self, results: Vec<SearchResult>) {
        self.results = results;
    }

    /// Drops every result with the given `imdb_id`
    pub fn remove_imdb(&mut self, imdb_id: &str) {
        self.results.retain(|r| r.imdb_id != imdb_id);
    }

    pub fn as_slice(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
