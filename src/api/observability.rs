use crate::api::AppState;
use axum::{
    extract::{MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, Span, field, info, info_span};
use uuid::Uuid;

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> Response {
    match state.prometheus_handle.as_ref() {
        Some(handle) => handle.render().into_response(),
        None => (
            StatusCode::NOT_FOUND,
            "Metrics not enabled or failed to initialize",
        )
            .into_response(),
    }
}

/// Metrics label for requests that matched no route.
const UNMATCHED_ROUTE: &str = "unmatched";

/// Copies the matched route template onto the response so the outer
/// logging middleware can label by route instead of raw path.
pub async fn propagate_matched_path(req: Request, next: Next) -> Response {
    let matched_path = req.extensions().get::<MatchedPath>().cloned();

    let mut response = next.run(req).await;
    if let Some(matched_path) = matched_path {
        response.extensions_mut().insert(matched_path);
    }
    response
}

fn route_label(response: &Response) -> &str {
    response
        .extensions()
        .get::<MatchedPath>()
        .map_or(UNMATCHED_ROUTE, MatchedPath::as_str)
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let method = req.method().to_string();
    let uri = req.uri().path().to_string();

    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %uri,
        route = field::Empty,
    );

    async move {
        let response = next.run(req).await;

        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let status = response.status().as_u16();

        let outcome = if status >= 500 {
            "error"
        } else if status >= 400 {
            "client_error"
        } else {
            "success"
        };

        let route = route_label(&response).to_string();
        Span::current().record("route", route.as_str());

        let labels = [
            ("method", method.clone()),
            ("path", route),
            ("status", status.to_string()),
        ];

        metrics::counter!("http_requests_total", &labels).increment(1);
        metrics::histogram!("http_request_duration_seconds", &labels)
            .record(start.elapsed().as_secs_f64());

        info!(
            event = "http_request_finished",
            duration_ms = duration_ms,
            status_code = status,
            user_agent = %user_agent,
            outcome = %outcome,
            "Request finished"
        );

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http, middleware, routing::delete};
    use tower::ServiceExt;

    fn app() -> Router {
        let api = Router::new()
            .route("/favorites/{gif_id}", delete(|| async { "ok" }))
            .route_layer(middleware::from_fn(propagate_matched_path));
        Router::new().nest("/api", api)
    }

    async fn label_for(uri: &str) -> String {
        let response = app()
            .oneshot(
                http::Request::builder()
                    .method("DELETE")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        route_label(&response).to_string()
    }

    #[tokio::test]
    async fn test_route_label_uses_template() {
        assert_eq!(label_for("/api/favorites/abc").await, "/api/favorites/{gif_id}");
        assert_eq!(label_for("/api/favorites/xyz").await, "/api/favorites/{gif_id}");
    }

    #[tokio::test]
    async fn test_unknown_paths_share_one_label() {
        assert_eq!(label_for("/api/anything-1").await, UNMATCHED_ROUTE);
        assert_eq!(label_for("/static/app.js").await, UNMATCHED_ROUTE);
    }
}
