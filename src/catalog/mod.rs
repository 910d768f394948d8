//! Remote catalog client and the records it produces.

mod client;
mod error;
mod types;
mod wire;

pub use client::{CatalogSource, TmdbClient};
pub use error::FetchError;
pub use types::{
    clamp_page, Collection, Genre, MovieDetail, MoviePage, MovieSummary, PageRequest,
    ProductionCompany, DEFAULT_PER_PAGE, PAGE_CAP,
};
