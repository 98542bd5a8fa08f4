use crate::models::{FilterMode, Movie, MovieId};

/// The user's tracked movies, most recently added first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection with a fresh listing from the remote.
    ///
    /// Later duplicates of an `imdb_id` are dropped so the uniqueness
    /// invariant holds even if the remote misbehaves.
    pub fn replace_all(&mut self, movies: Vec<Movie>) {
        self.movies.clear();
        for movie in movies {
            if !self.contains_imdb(&movie.imdb_id) {
                self.movies.push(movie);
            }
        }
    }

    /// Prepends a movie. Returns `false` and leaves the store untouched if
    /// an entry with the same `imdb_id` already exists.
    pub fn add(&mut self, movie: Movie) -> bool {
        if self.contains_imdb(&movie.imdb_id) {
            return false;
        }
        self.movies.insert(0, movie);
        true
    }

    /// Sets the watched flag of exactly one entry
    pub fn set_watched(&mut self, id: MovieId, is_watched: bool) -> Option<&Movie> {
        let movie = self.movies.iter_mut().find(|m| m.id == id)?;
        movie.is_watched = is_watched;
        Some(movie)
    }

    pub fn remove(&mut self, id: MovieId) -> Option<Movie> {
        let index = self.movies.iter().position(|m| m.id == id)?;
        Some(self.movies.remove(index))
    }

    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn contains_imdb(&self, imdb_id: &str) -> bool {
        self.movies.iter().any(|m| m.imdb_id == imdb_id)
    }

    /// Derived read of the collection for the given filter; recomputed on every call
    pub fn filtered_view(&self, mode: FilterMode) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|m| mode.matches(m))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
