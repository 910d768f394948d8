/// Names of TMDB's fixed movie genre ids.
pub fn genre_name(id: u64) -> &'static str {
    match id {
        28 => "Action",
        12 => "Adventure",
        16 => "Animation",
        35 => "Comedy",
        80 => "Crime",
        99 => "Documentary",
        18 => "Drama",
        10751 => "Family",
        14 => "Fantasy",
        36 => "History",
        27 => "Horror",
        10402 => "Music",
        9648 => "Mystery",
        10749 => "Romance",
        878 => "Science Fiction",
        10770 => "TV Movie",
        53 => "Thriller",
        10752 => "War",
        37 => "Western",
        _ => "Unknown",
    }
}

/// Card label: at most the first two genres, comma separated.
pub fn card_genres(ids: &[u64]) -> String {
    ids.iter()
        .take(2)
        .map(|id| genre_name(*id))
        .collect::<Vec<_>>()
        .join(", ")
}
