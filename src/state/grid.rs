use crate::models::{Movie, Top100Entry};

/// The curated top-100 grid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Top100Grid {
    entries: Vec<Top100Entry>,
}

impl Top100Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts an already materialized set as the grid, order as given
    pub fn adopt(&mut self, movies: Vec<Movie>) {
        self.entries = movies.into_iter().map(Top100Entry::added).collect();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn extend(&mut self, movies: impl IntoIterator<Item = Movie>) {
        self.entries
            .extend(movies.into_iter().map(Top100Entry::added));
    }

    /// Replaces the entry with the same `imdb_id`, marking it added.
    /// Returns `false` when the movie is not part of the grid.
    pub fn mark_imported(&mut self, movie: Movie) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|e| e.movie.imdb_id == movie.imdb_id)
        {
            Some(entry) => {
                *entry = Top100Entry::added(movie);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, imdb_id: &str) -> Option<&Top100Entry> {
        self.entries.iter().find(|e| e.imdb_id() == imdb_id)
    }

    pub fn entries(&self) -> &[Top100Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
