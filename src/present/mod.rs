//! Presentation helpers shared by every front-end.

pub mod format;
pub mod genres;
pub mod pagination;

use crate::catalog::FetchError;

/// Image size segments understood by the TMDB image CDN.
const POSTER_SIZE: &str = "w500";
const BACKDROP_SIZE: &str = "original";

pub fn poster_url(image_base: &str, path: Option<&str>) -> Option<String> {
    path.map(|path| format!("{}/{}{}", image_base.trim_end_matches('/'), POSTER_SIZE, path))
}

pub fn backdrop_url(image_base: &str, path: Option<&str>) -> Option<String> {
    path.map(|path| format!("{}/{}{}", image_base.trim_end_matches('/'), BACKDROP_SIZE, path))
}

/// How a fetch error is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorView {
    NotFound,
    Message(String),
}

impl ErrorView {
    pub fn text(&self) -> String {
        match self {
            ErrorView::NotFound => "Movie not found".to_string(),
            ErrorView::Message(message) => format!("Error: {message}"),
        }
    }
}

impl ErrorView {
    /// Listings have no "not found" state; every failure shows its message.
    pub fn for_listing(error: &FetchError) -> Self {
        ErrorView::Message(error.to_string())
    }
}

impl From<&FetchError> for ErrorView {
    fn from(error: &FetchError) -> Self {
        if error.is_not_found() {
            ErrorView::NotFound
        } else {
            ErrorView::Message(error.to_string())
        }
    }
}
