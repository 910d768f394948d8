//! HTTP behavior of the TMDB client against a mock API server.

mod common;

use common::mock_tmdb::{MockResponse, MockTmdb};
use common::tmdb_client;
use moviebase::catalog::{CatalogSource, FetchError, PageRequest, TmdbClient};
use moviebase::config::{ApiConfig, SecureString};

fn results_json(count: usize, total_pages: u32, page: u32) -> String {
    let results: Vec<String> = (1..=count)
        .map(|i| {
            format!(
                r#"{{"id": {i}, "title": "Movie {i}", "poster_path": "/p{i}.jpg", "release_date": "2021-05-0{d}", "vote_average": 6.5, "genre_ids": [28, 12]}}"#,
                d = (i % 9) + 1
            )
        })
        .collect();
    format!(
        r#"{{"page": {page}, "results": [{}], "total_pages": {total_pages}, "total_results": 9999}}"#,
        results.join(",")
    )
}

#[tokio::test]
async fn test_popular_request_sends_bearer_and_accept_headers() {
    let mock = MockTmdb::start().await;
    mock.enqueue_response(MockResponse::json(&results_json(2, 5, 1)))
        .await;
    let client = tmdb_client(&mock.base_url(), "secret-token");

    let page = client
        .fetch_page(&PageRequest::popular(1))
        .await
        .expect("popular page");

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_pages, 5);
    assert_eq!(page.page, 1);
    assert_eq!(page.items[0].title, "Movie 1");

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/3/movie/popular");
    assert_eq!(
        req.query_pairs(),
        vec![("page".to_string(), "1".to_string())]
    );
    assert_eq!(req.header("authorization"), Some("Bearer secret-token"));
    assert_eq!(req.header("accept"), Some("application/json"));
}

#[tokio::test]
async fn test_empty_token_still_sends_bearer_header() {
    let mock = MockTmdb::start().await;
    mock.enqueue_response(MockResponse::json(&results_json(1, 1, 1)))
        .await;
    let client = tmdb_client(&mock.base_url(), "");

    client
        .fetch_page(&PageRequest::popular(1))
        .await
        .expect("page with empty token");

    let requests = mock.captured_requests().await;
    let auth = requests[0]
        .header("authorization")
        .expect("authorization header present");
    assert!(auth.starts_with("Bearer"), "got {auth:?}");
}

#[tokio::test]
async fn test_search_query_is_encoded_before_page() {
    let mock = MockTmdb::start().await;
    mock.enqueue_response(MockResponse::json(&results_json(1, 1, 2)))
        .await;
    let client = tmdb_client(&mock.base_url(), "t");

    client
        .fetch_page(&PageRequest::search("the matrix & co", 2))
        .await
        .expect("search page");

    let requests = mock.captured_requests().await;
    let req = &requests[0];
    assert_eq!(req.path, "/3/search/movie");
    assert_eq!(
        req.query_pairs(),
        vec![
            ("query".to_string(), "the matrix & co".to_string()),
            ("page".to_string(), "2".to_string()),
        ]
    );
    let raw = req.query.as_deref().unwrap_or_default();
    assert!(!raw.contains(' '), "query must be encoded: {raw}");
}

#[tokio::test]
async fn test_out_of_range_page_is_clamped_on_the_wire() {
    let mock = MockTmdb::start().await;
    mock.enqueue_response(MockResponse::json(&results_json(1, 500, 500)))
        .await;
    mock.enqueue_response(MockResponse::json(&results_json(1, 500, 1)))
        .await;
    let client = tmdb_client(&mock.base_url(), "t");

    client
        .fetch_page(&PageRequest::popular(9999))
        .await
        .expect("clamped high page");
    client
        .fetch_page(&PageRequest::popular(0))
        .await
        .expect("clamped low page");

    let requests = mock.captured_requests().await;
    assert_eq!(
        requests[0].query_pairs(),
        vec![("page".to_string(), "500".to_string())]
    );
    assert_eq!(
        requests[1].query_pairs(),
        vec![("page".to_string(), "1".to_string())]
    );
}

#[tokio::test]
async fn test_items_truncated_and_total_pages_capped() {
    let mock = MockTmdb::start().await;
    mock.enqueue_response(MockResponse::json(&results_json(20, 45_000, 3)))
        .await;
    let client = tmdb_client(&mock.base_url(), "t");

    let page = client
        .fetch_page(&PageRequest::popular(3).with_per_page(12))
        .await
        .expect("page");

    assert_eq!(page.items.len(), 12);
    assert_eq!(page.items[11].id, 12);
    assert_eq!(page.total_pages, 500);
    assert_eq!(page.page, 3);
}

#[tokio::test]
async fn test_missing_results_yield_empty_page() {
    let mock = MockTmdb::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"page": 1}"#))
        .await;
    let client = tmdb_client(&mock.base_url(), "t");

    let page = client
        .fetch_page(&PageRequest::search("zzzz", 1))
        .await
        .expect("page");

    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_non_success_status_maps_to_status_error() {
    let mock = MockTmdb::start().await;
    mock.enqueue_response(MockResponse::error(401)).await;
    let client = tmdb_client(&mock.base_url(), "bad");

    let err = client
        .fetch_page(&PageRequest::popular(1))
        .await
        .expect_err("401 must fail");

    assert_eq!(err, FetchError::Status { status: 401 });
    assert_eq!(err.to_string(), "HTTP error! status: 401");
    // A single attempt, no retry.
    assert_eq!(mock.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn test_detail_request_path_and_parameters() {
    let mock = MockTmdb::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{
            "id": 603,
            "title": "The Matrix",
            "tagline": "Welcome to the Real World.",
            "overview": "Set in the 22nd century...",
            "runtime": 136,
            "budget": 63000000,
            "revenue": 463517383,
            "release_date": "1999-03-31",
            "vote_average": 8.2,
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "production_companies": [{"id": 79, "name": "Village Roadshow Pictures"}],
            "status": "Released",
            "original_language": "en",
            "credits": {"cast": []}
        }"#,
    ))
    .await;
    let client = tmdb_client(&mock.base_url(), "t");

    let detail = client.fetch_detail("603").await.expect("detail");

    assert_eq!(detail.id, 603);
    assert_eq!(detail.title, "The Matrix");
    assert_eq!(detail.runtime, Some(136));
    assert_eq!(detail.budget, Some(63_000_000));
    assert_eq!(detail.genres.len(), 2);
    assert_eq!(detail.production_companies[0].name, "Village Roadshow Pictures");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/3/movie/603");
    assert_eq!(
        requests[0].query_pairs(),
        vec![
            ("language".to_string(), "en-US".to_string()),
            ("append_to_response".to_string(), "credits".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_detail_not_found() {
    let mock = MockTmdb::start().await;
    mock.enqueue_response(MockResponse::error(404)).await;
    let client = tmdb_client(&mock.base_url(), "t");

    let err = client.fetch_detail("123").await.expect_err("404");

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "HTTP error! status: 404");
}

#[tokio::test]
async fn test_invalid_json_body_is_decode_error() {
    let mock = MockTmdb::start().await;
    mock.enqueue_response(MockResponse::json("<html>gateway</html>"))
        .await;
    let client = tmdb_client(&mock.base_url(), "t");

    let err = client
        .fetch_page(&PageRequest::popular(1))
        .await
        .expect_err("non-JSON body");

    assert!(matches!(err, FetchError::Decode { .. }), "got {err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let client = tmdb_client(&format!("http://{addr}"), "t");

    let err = client
        .fetch_page(&PageRequest::popular(1))
        .await
        .expect_err("connection refused");

    assert!(matches!(err, FetchError::Transport { .. }), "got {err:?}");
    assert!(!err.to_string().starts_with("HTTP error!"));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn test_unanswered_request_times_out_as_transport_error() {
    let mock = MockTmdb::start().await;
    mock.enqueue_response(MockResponse::default().with_delay(3_000))
        .await;
    let api = ApiConfig {
        base_url: mock.base_url(),
        timeout_seconds: 1,
        ..ApiConfig::default()
    };
    let client = TmdbClient::new(&api, SecureString::new("t".to_string())).unwrap();

    let err = client
        .fetch_page(&PageRequest::popular(1))
        .await
        .expect_err("request should time out");

    assert!(matches!(err, FetchError::Transport { .. }), "got {err:?}");
}
