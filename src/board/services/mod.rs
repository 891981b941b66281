//! Application services for boards.

mod catalog;

pub use catalog::{
    BoardCatalogError, BoardCatalogResult, BoardCatalogService, BoardDeletion, BoardListing,
};
