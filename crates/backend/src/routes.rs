use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 Travel packages
        // ========================================
        .route("/api/packages", get(handlers::a001_travel_package::list))
        .route(
            "/api/packages/options",
            get(handlers::a001_travel_package::options),
        )
        .route(
            "/api/packages/featured",
            get(handlers::a001_travel_package::featured),
        )
        .route(
            "/api/packages/search",
            get(handlers::a001_travel_package::search),
        )
        .route(
            "/api/packages/suggest",
            get(handlers::a001_travel_package::suggest),
        )
        .route(
            "/api/package/:slug",
            get(handlers::a001_travel_package::detail),
        )
        .route(
            "/api/package/:slug/gallery/:category",
            get(handlers::a001_travel_package::gallery),
        )
        // ========================================
        // A002 Inquiries
        // ========================================
        .route("/api/inquiries", post(handlers::a002_inquiry::submit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_inquiry::sink::{InquiryError, InquirySink, LogOnlySink};
    use async_trait::async_trait;
    use contracts::domain::a002_inquiry::InquiryPayload;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use contracts::domain::a001_travel_package::{PackageCatalog, SlugFallback};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    const DATASET: &str = r#"[
        {"id": 1, "slug": "bali-1", "title": "Bali Escape", "nation": ["Indonesia"],
         "location": ["Ubud", "Seminyak", "Nusa Penida"], "region": "Southeast Asia",
         "price": 30000, "duration": 5, "rating": 4.8,
         "gallery": {"destination": ["a.jpg", "b.jpg", "c.jpg"], "stay": [], "activity": []}},
        {"id": 2, "slug": "delhi-1", "title": "Golden Triangle", "nation": ["India"],
         "location": ["Delhi", "Agra"], "region": "India",
         "price": 20000, "duration": 4, "rating": 4.2},
        {"id": 3, "slug": "kerala-1", "title": "Kerala Backwaters", "nation": ["India"],
         "location": ["Alleppey"], "region": "India",
         "price": 25000, "duration": 6}
    ]"#;

    struct FailingSink;

    #[async_trait]
    impl InquirySink for FailingSink {
        async fn submit(&self, _payload: &InquiryPayload) -> Result<(), InquiryError> {
            Err(InquiryError::Rejected { status: 500 })
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn app(fallback: SlugFallback) -> Router {
        let catalog = PackageCatalog::from_json(DATASET).unwrap();
        let state = AppState {
            slug_fallback: fallback,
            page_size: 2,
            ..AppState::new(catalog, Arc::new(LogOnlySink))
        };
        configure_routes(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(SlugFallback::First)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_tab_pagination() {
        let (status, body) = get_json(app(SlugFallback::First), "/api/packages?tab=india").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["total_pages"], 1);

        let (_, body) = get_json(app(SlugFallback::First), "/api/packages?page=9").await;
        assert_eq!(body["page"], 2);
        assert_eq!(body["items"][0]["slug"], "kerala-1");
        assert_eq!(body["visible_pages"], json!([1, 2]));
    }

    #[tokio::test]
    async fn test_list_tab_is_lenient() {
        let (status, body) = get_json(app(SlugFallback::First), "/api/packages?tab=India").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);

        let (_, body) = get_json(app(SlugFallback::First), "/api/packages?region=India").await;
        assert_eq!(body["total"], 2);

        let (status, body) = get_json(app(SlugFallback::First), "/api/packages?tab=mars").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
    }

    #[tokio::test]
    async fn test_options() {
        let (status, body) = get_json(app(SlugFallback::First), "/api/packages/options").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tabs"][2]["code"], "middle-east");
        assert_eq!(body["tabs"][2]["name"], "Middle East");
        assert_eq!(body["sorts"][0]["code"], "relevance");
    }

    #[tokio::test]
    async fn test_search_rejects_non_finite_bounds() {
        let (status, _) =
            get_json(app(SlugFallback::First), "/api/packages/search?price_min=NaN").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) =
            get_json(app(SlugFallback::First), "/api/packages/search?min_rating=inf").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_featured() {
        let (status, body) = get_json(app(SlugFallback::First), "/api/packages/featured").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["southeastAsia"].as_array().unwrap().len(), 1);
        assert_eq!(body["india"][0]["slug"], "delhi-1");
        assert_eq!(body["india"][1]["slug"], "kerala-1");
    }

    #[tokio::test]
    async fn test_search_echoes_seq_and_sorts() {
        let (status, body) = get_json(
            app(SlugFallback::First),
            "/api/packages/search?q=india&sort=price-low&seq=7",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["seq"], 7);
        assert_eq!(body["total"], 2);
        assert_eq!(body["items"][0]["slug"], "delhi-1");
        assert_eq!(body["items"][1]["slug"], "kerala-1");
    }

    #[tokio::test]
    async fn test_search_refs_and_rating_filter() {
        let (_, body) = get_json(
            app(SlugFallback::First),
            "/api/packages/search?q=bali&refs=agra&min_rating=4.5",
        )
        .await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["items"][0]["slug"], "bali-1");
        assert_eq!(body["items"][0]["more_locations"], 1);
    }

    #[tokio::test]
    async fn test_search_without_seq_is_numbered() {
        let (_, body) = get_json(app(SlugFallback::First), "/api/packages/search?q=").await;
        assert_eq!(body["seq"], 1);
        assert_eq!(body["total"], 3);
    }

    #[tokio::test]
    async fn test_suggest() {
        let (_, body) = get_json(app(SlugFallback::First), "/api/packages/suggest?q=%20%20").await;
        assert_eq!(body, json!([]));

        let (_, body) = get_json(app(SlugFallback::First), "/api/packages/suggest?q=delhi").await;
        assert_eq!(body[0]["slug"], "delhi-1");
    }

    #[tokio::test]
    async fn test_detail_fallback_policies() {
        let (status, body) = get_json(app(SlugFallback::First), "/api/package/delhi-1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fallback"], false);
        assert_eq!(body["package"]["title"], "Golden Triangle");

        let (status, body) = get_json(app(SlugFallback::First), "/api/package/unknown").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fallback"], true);
        assert_eq!(body["package"]["slug"], "bali-1");

        let (status, _) = get_json(app(SlugFallback::NotFound), "/api/package/unknown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_gallery() {
        let (status, body) =
            get_json(app(SlugFallback::First), "/api/package/bali-1/gallery/destination").await;
        assert_eq!(status, StatusCode::OK);
        // Галерея листается по 6 независимо от размера страницы каталога
        assert_eq!(body["items"], json!(["a.jpg", "b.jpg", "c.jpg"]));
        assert_eq!(body["page_size"], 6);

        let (status, _) =
            get_json(app(SlugFallback::First), "/api/package/bali-1/gallery/food").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) =
            get_json(app(SlugFallback::First), "/api/package/nope/gallery/stay").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_inquiry_submission() {
        let inquiry = json!({
            "name": "Asha Verma",
            "email": "asha@example.com",
            "phone": "+91 90000 00000",
            "packageDetails": {"title": "Bali Escape", "price": 30000, "duration": 5}
        });
        let (status, body) = post_json(app(SlugFallback::First), "/api/inquiries", inquiry).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["reference"].is_string());

        let invalid = json!({
            "name": "",
            "email": "asha@example.com",
            "phone": "1",
            "packageDetails": {"title": "Bali Escape", "price": 30000, "duration": 5}
        });
        let (status, body) = post_json(app(SlugFallback::First), "/api/inquiries", invalid).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Full name is required");
    }

    #[tokio::test]
    async fn test_inquiry_forwarding_failure_is_bad_gateway() {
        let catalog = PackageCatalog::from_json(DATASET).unwrap();
        let app = configure_routes(AppState::new(catalog, Arc::new(FailingSink)));
        let inquiry = json!({
            "name": "Asha Verma",
            "email": "asha@example.com",
            "phone": "+91 90000 00000",
            "packageDetails": {"title": "Bali Escape", "price": 30000, "duration": 5}
        });

        let (status, body) = post_json(app, "/api/inquiries", inquiry).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Failed to submit inquiry. Please try again.");
        assert!(body.get("reference").is_none());
    }
}
