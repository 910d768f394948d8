/// Highest page number the metadata API will serve.
pub const PAGE_CAP: u32 = 500;

/// Default number of cards shown per list page.
pub const DEFAULT_PER_PAGE: usize = 12;

/// One entry of a paginated movie listing.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    /// ISO date (`YYYY-MM-DD`) as reported by the API.
    pub release_date: Option<String>,
    /// Average rating on a 0.0–10.0 scale.
    pub vote_average: Option<f64>,
    pub genre_ids: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionCompany {
    pub id: u64,
    pub name: String,
}

/// Full record for a single movie.
///
/// Budget and revenue use `None` or `Some(0)` for "unknown"; the API reports
/// both interchangeably.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub genre_ids: Vec<u64>,
    pub backdrop_path: Option<String>,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    pub budget: Option<u64>,
    pub revenue: Option<u64>,
    pub genres: Vec<Genre>,
    pub production_companies: Vec<ProductionCompany>,
    pub status: Option<String>,
    pub original_language: Option<String>,
}

impl MovieDetail {
    /// The summary view of this record, as a list card would show it.
    pub fn summary(&self) -> MovieSummary {
        let genre_ids = if self.genre_ids.is_empty() {
            self.genres.iter().map(|g| g.id).collect()
        } else {
            self.genre_ids.clone()
        };
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            poster_path: self.poster_path.clone(),
            release_date: self.release_date.clone(),
            vote_average: self.vote_average,
            genre_ids,
        }
    }
}

/// One page of a movie listing, already normalized by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct MoviePage {
    pub items: Vec<MovieSummary>,
    /// Capped at [`PAGE_CAP`].
    pub total_pages: u32,
    /// Page the server actually returned, within `1..=PAGE_CAP`.
    pub page: u32,
}

/// Which listing endpoint a page request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Popular,
    Search,
}

impl Collection {
    /// Path below `/3/` on the metadata API.
    pub fn api_path(&self) -> &'static str {
        match self {
            Self::Popular => "movie/popular",
            Self::Search => "search/movie",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Popular => "Popular Movies",
            Self::Search => "Search Results",
        }
    }
}

/// Parameters of a list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub collection: Collection,
    pub query: Option<String>,
    /// Requested page; values above [`PAGE_CAP`] are clamped on the wire.
    pub page: u32,
    pub per_page: usize,
}

impl PageRequest {
    pub fn popular(page: u32) -> Self {
        Self {
            collection: Collection::Popular,
            query: None,
            page,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn search(query: impl Into<String>, page: u32) -> Self {
        Self {
            collection: Collection::Search,
            query: Some(query.into()),
            page,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Page number actually transmitted: `1..=PAGE_CAP`.
    pub fn wire_page(&self) -> u32 {
        clamp_page(self.page)
    }
}

/// Clamp any page number into the addressable range `1..=PAGE_CAP`.
pub fn clamp_page(page: u32) -> u32 {
    page.clamp(1, PAGE_CAP)
}
