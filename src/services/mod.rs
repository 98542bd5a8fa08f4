pub mod catalog;
pub mod notifier;
pub mod reconciler;
pub mod search;
pub mod top100;
pub mod watchlist;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{CatalogApi, HttpCatalogClient};
pub use notifier::Notifier;
pub use reconciler::Reconciler;
pub use search::SearchService;
pub use top100::{LoadOutcome, Top100Loader};
pub use watchlist::{Confirm, WatchlistService};
