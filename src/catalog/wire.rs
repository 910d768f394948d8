//! Conversion of raw API JSON into catalog records.
//!
//! The API is loose about its shapes: fields go missing, turn `null`, or
//! change type between endpoints. Every accessor here treats anything it
//! does not recognize as absent rather than failing the whole response.

use serde_json::{Map, Value};

use crate::catalog::types::{
    clamp_page, Genre, MovieDetail, MoviePage, MovieSummary, ProductionCompany, PAGE_CAP,
};

/// Build a [`MoviePage`] from a listing response.
///
/// Only the first `per_page` raw results are considered; unusable entries
/// among them are dropped, not replaced from further down the list.
pub fn movie_page(body: &Value, per_page: usize) -> MoviePage {
    let items = body
        .get("results")
        .and_then(Value::as_array)
        .map(|results| {
            results
                .iter()
                .take(per_page)
                .filter_map(Value::as_object)
                .filter_map(movie_summary)
                .collect()
        })
        .unwrap_or_default();

    let total_pages = body
        .get("total_pages")
        .and_then(as_u64)
        .map(|total| total.min(u64::from(PAGE_CAP)) as u32)
        .unwrap_or(0);

    let page = body
        .get("page")
        .and_then(as_u64)
        .map(|page| clamp_page(page.min(u64::from(PAGE_CAP)) as u32))
        .unwrap_or(1);

    MoviePage {
        items,
        total_pages,
        page,
    }
}

/// Entries without a numeric id cannot be linked to a detail view and are skipped.
pub fn movie_summary(obj: &Map<String, Value>) -> Option<MovieSummary> {
    let id = obj.get("id").and_then(as_u64)?;
    Some(MovieSummary {
        id,
        title: text(obj, "title").unwrap_or_default(),
        poster_path: text(obj, "poster_path"),
        release_date: text(obj, "release_date"),
        vote_average: obj.get("vote_average").and_then(Value::as_f64),
        genre_ids: ids(obj.get("genre_ids")),
    })
}

/// Build a [`MovieDetail`]. A body that is not an object yields `None`.
pub fn movie_detail(body: &Value) -> Option<MovieDetail> {
    let obj = body.as_object()?;
    Some(MovieDetail {
        id: obj.get("id").and_then(as_u64).unwrap_or_default(),
        title: text(obj, "title").unwrap_or_default(),
        poster_path: text(obj, "poster_path"),
        release_date: text(obj, "release_date"),
        vote_average: obj.get("vote_average").and_then(Value::as_f64),
        genre_ids: ids(obj.get("genre_ids")),
        backdrop_path: text(obj, "backdrop_path"),
        tagline: text(obj, "tagline"),
        overview: text(obj, "overview"),
        runtime: obj
            .get("runtime")
            .and_then(as_u64)
            .and_then(|m| u32::try_from(m).ok()),
        budget: obj.get("budget").and_then(as_u64),
        revenue: obj.get("revenue").and_then(as_u64),
        genres: named(obj.get("genres"))
            .map(|(id, name)| Genre { id, name })
            .collect(),
        production_companies: named(obj.get("production_companies"))
            .map(|(id, name)| ProductionCompany { id, name })
            .collect(),
        status: text(obj, "status"),
        original_language: text(obj, "original_language"),
    })
}

fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Non-negative integers, also accepting whole floats such as `12.0`.
fn as_u64(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as u64)
    })
}

fn ids(value: Option<&Value>) -> Vec<u64> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(as_u64).collect())
        .unwrap_or_default()
}

fn named(value: Option<&Value>) -> impl Iterator<Item = (u64, String)> + '_ {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| {
            let id = item.get("id").and_then(as_u64)?;
            let name = item.get("name").and_then(Value::as_str)?;
            Some((id, name.to_string()))
        })
}
