use axum::{
    Json, Router,
    body::Body,
    extract::{Query, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use http_body_util::BodyExt;
use moodgif::config::Config;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

type CallLog = Arc<Mutex<Vec<(String, HashMap<String, String>)>>>;

fn listing(id: &str) -> Value {
    json!({
        "data": [{
            "id": id,
            "title": "test gif",
            "url": format!("https://giphy.com/gifs/{id}"),
            "images": {
                "fixed_height": { "url": "https://media.giphy.com/f.gif", "width": "200", "height": "200" },
                "original": { "url": "https://media.giphy.com/o.gif" }
            }
        }],
        "pagination": { "total_count": 1, "count": 1, "offset": 0 },
        "meta": { "status": 200, "msg": "OK" }
    })
}

async fn fake_search(
    State(calls): State<CallLog>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let fail = params.get("q").is_some_and(|q| q == "boom");
    calls
        .lock()
        .unwrap()
        .push(("search".to_string(), params));

    if fail {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream down").into_response();
    }
    Json(listing("search-1")).into_response()
}

async fn fake_trending(
    State(calls): State<CallLog>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    calls
        .lock()
        .unwrap()
        .push(("trending".to_string(), params));
    Json(listing("trending-1"))
}

/// Starts a stand-in GIPHY on a random local port.
async fn spawn_giphy() -> (String, CallLog) {
    let calls: CallLog = Arc::default();
    let app = Router::new()
        .route("/v1/gifs/search", get(fake_search))
        .route("/v1/gifs/trending", get(fake_trending))
        .with_state(calls.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), calls)
}

async fn spawn_app() -> (Router, CallLog) {
    let (base_url, calls) = spawn_giphy().await;

    let mut config = Config::default();
    config.giphy.api_key = "test-key".to_string();
    config.giphy.base_url = base_url;
    config.history.recent_limit = 3;

    let state = moodgif::api::create_app_state_from_config(config, None)
        .expect("Failed to create app state");
    (moodgif::api::router(state), calls)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_favorite(app: &Router, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri("/api/favorites")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn test_search_forwards_parameters_and_records_history() {
    let (app, calls) = spawn_app().await;

    let (status, body) = get_json(
        &app,
        "/api/gifs/search?q=happy%20excited&emotion=mutlu&limit=5&offset=10",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], "search-1");
    assert_eq!(body["meta"]["status"], 200);

    {
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (endpoint, params) = &calls[0];
        assert_eq!(endpoint, "search");
        assert_eq!(params["api_key"], "test-key");
        assert_eq!(params["q"], "happy excited");
        assert_eq!(params["limit"], "5");
        assert_eq!(params["offset"], "10");
        assert_eq!(params["rating"], "g");
        assert_eq!(params["lang"], "en");
    }

    let (status, body) = get_json(&app, "/api/searches/recent").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["query"], "happy excited");
    assert_eq!(body[0]["emotion"], "mutlu");
    assert!(body[0]["createdAt"].is_string());
}

#[tokio::test]
async fn test_search_falls_back_to_emotion_and_default_paging() {
    let (app, calls) = spawn_app().await;

    let (status, _) = get_json(&app, "/api/gifs/search?emotion=calm%20peaceful").await;
    assert_eq!(status, StatusCode::OK);

    let calls = calls.lock().unwrap();
    let (_, params) = &calls[0];
    assert_eq!(params["q"], "calm peaceful");
    assert_eq!(params["limit"], "20");
    assert_eq!(params["offset"], "0");
}

#[tokio::test]
async fn test_search_without_query_is_rejected() {
    let (app, calls) = spawn_app().await;

    let (status, body) = get_json(&app, "/api/gifs/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Query or emotion parameter is required");

    let (status, _) = get_json(&app, "/api/gifs/search?q=%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(calls.lock().unwrap().is_empty());
    let (_, recent) = get_json(&app, "/api/searches/recent").await;
    assert_eq!(recent, json!([]));
}

#[tokio::test]
async fn test_upstream_failure_returns_500_and_records_nothing() {
    let (app, _calls) = spawn_app().await;

    let (status, body) = get_json(&app, "/api/gifs/search?q=boom").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Could not fetch GIFs. Please try again.");
    assert!(body["error"].is_string());

    let (_, recent) = get_json(&app, "/api/searches/recent").await;
    assert_eq!(recent, json!([]));
}

#[tokio::test]
async fn test_unreachable_provider_does_not_leak_api_key() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut config = Config::default();
    config.giphy.api_key = "very-secret-key".to_string();
    config.giphy.base_url = format!("http://{addr}");
    let state = moodgif::api::create_app_state_from_config(config, None).unwrap();
    let app = moodgif::api::router(state);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/gifs/search?q=x")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(!text.contains("very-secret-key"), "body leaked key: {text}");

    let body: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["message"], "Could not fetch GIFs. Please try again.");
}

#[tokio::test]
async fn test_trending_is_relayed() {
    let (app, calls) = spawn_app().await;

    let (status, body) = get_json(&app, "/api/gifs/trending?limit=7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], "trending-1");

    let calls = calls.lock().unwrap();
    let (endpoint, params) = &calls[0];
    assert_eq!(endpoint, "trending");
    assert_eq!(params["limit"], "7");
    assert_eq!(params["offset"], "0");
    assert!(!params.contains_key("lang"));
    drop(calls);

    let (_, recent) = get_json(&app, "/api/searches/recent").await;
    assert_eq!(recent, json!([]));
}

#[tokio::test]
async fn test_recent_searches_are_capped_newest_first() {
    let (app, _calls) = spawn_app().await;

    for q in ["one", "two", "three", "four"] {
        let (status, _) = get_json(&app, &format!("/api/gifs/search?q={q}")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, recent) = get_json(&app, "/api/searches/recent").await;
    let queries: Vec<&str> = recent
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["query"].as_str().unwrap())
        .collect();
    assert_eq!(queries, ["four", "three", "two"]);
}

#[tokio::test]
async fn test_favorites_lifecycle() {
    let (app, _calls) = spawn_app().await;

    let (status, created) = post_favorite(
        &app,
        json!({
            "gifId": "abc123",
            "gifUrl": "https://media.giphy.com/abc123.gif",
            "title": "  dancing cat  "
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["gifId"], "abc123");
    assert_eq!(created["title"], "dancing cat");
    assert_eq!(created["id"], 1);

    let (status, list) = get_json(&app, "/api/favorites").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let delete = |uri: &str| {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    };

    let (status, body) = send(&app, delete("/api/favorites/abc123")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Removed from favorites.");

    let (status, body) = send(&app, delete("/api/favorites/abc123")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Favorite not found.");

    let (_, list) = get_json(&app, "/api/favorites").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_favorites_are_scoped_by_user() {
    let (app, _calls) = spawn_app().await;

    post_favorite(
        &app,
        json!({ "gifId": "a", "gifUrl": "https://x/a.gif", "userId": 1 }),
    )
    .await;
    post_favorite(
        &app,
        json!({ "gifId": "b", "gifUrl": "https://x/b.gif", "userId": 2 }),
    )
    .await;

    let (_, mine) = get_json(&app, "/api/favorites?userId=1").await;
    assert_eq!(mine.as_array().unwrap().len(), 1);
    assert_eq!(mine[0]["gifId"], "a");

    let (_, all) = get_json(&app, "/api/favorites").await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_invalid_favorite_is_rejected() {
    let (app, _calls) = spawn_app().await;

    let (status, _) = post_favorite(
        &app,
        json!({ "gifId": "   ", "gifUrl": "https://x/a.gif" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_favorite(
        &app,
        json!({ "gifId": "a", "gifUrl": "ftp://x/a.gif" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

async fn assert_json_validation_error(app: &Router, request: Request<Body>) {
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()["content-type"],
        "application/json",
        "rejections must use the JSON error body"
    );
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_malformed_requests_return_json_errors() {
    let (app, calls) = spawn_app().await;

    let get = |uri: &str| Request::builder().uri(uri).body(Body::empty()).unwrap();

    assert_json_validation_error(&app, get("/api/gifs/search?q=x&limit=abc")).await;
    assert_json_validation_error(&app, get("/api/gifs/search?q=x&limit=")).await;
    assert_json_validation_error(&app, get("/api/gifs/trending?offset=-1")).await;
    assert_json_validation_error(&app, get("/api/searches/recent?userId=me")).await;
    assert_json_validation_error(&app, get("/api/favorites?userId=me")).await;
    assert_json_validation_error(&app, get("/api/emotions/map")).await;

    assert_json_validation_error(
        &app,
        Request::builder()
            .method("POST")
            .uri("/api/favorites")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "gifId": "a" }).to_string()))
            .unwrap(),
    )
    .await;

    assert_json_validation_error(
        &app,
        Request::builder()
            .method("POST")
            .uri("/api/favorites")
            .header("Content-Type", "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;

    assert!(calls.lock().unwrap().is_empty());
    let (_, favorites) = get_json(&app, "/api/favorites").await;
    assert_eq!(favorites, json!([]));
}

#[tokio::test]
async fn test_emotion_endpoints() {
    let (app, _calls) = spawn_app().await;

    let (status, emotions) = get_json(&app, "/api/emotions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(emotions.as_array().unwrap().len(), 6);
    assert!(emotions[0]["keywords"].is_string());

    let (status, mapped) = get_json(&app, "/api/emotions/map?q=Mutlu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mapped["keywords"], "happy excited joy celebration");

    let (status, _) = get_json(&app, "/api/emotions/map?q=%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_system_status_counts_history() {
    let (app, _calls) = spawn_app().await;

    get_json(&app, "/api/gifs/search?q=hello").await;
    post_favorite(&app, json!({ "gifId": "a", "gifUrl": "https://x/a.gif" })).await;

    let (status, body) = get_json(&app, "/api/system/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["searches"], 1);
    assert_eq!(body["favorites"], 1);
    assert_eq!(body["giphyKeyConfigured"], true);
}

#[tokio::test]
async fn test_metrics_disabled_without_recorder() {
    let (app, _calls) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
