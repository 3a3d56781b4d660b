// Career matching: catalog, scoring, ranking, and the career browsing endpoints.
// Everything here is synchronous and works over the immutable catalog in AppState.

pub mod catalog;
pub mod forecast;
pub mod handlers;
pub mod ranker;
pub mod scorer;
