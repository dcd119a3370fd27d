use axum::{response::Redirect, routing::get, Router};

use crate::handlers;
use crate::shared::app_state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/", get(|| async { Redirect::to("/notifications") }))
        // ========================================
        // NOTIFICATIONS
        // ========================================
        .route(
            "/notifications",
            get(handlers::a001_notification::page),
        )
        .route(
            "/api/notifications",
            get(handlers::a001_notification::list).post(handlers::a001_notification::create),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_notification::repository::NotificationStore;
    use crate::domain::a001_notification::service::seed_notifications;
    use crate::shared::config::SeedNotification;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn seed(is_action: bool, name: &str) -> SeedNotification {
        SeedNotification {
            is_action,
            product_name: name.into(),
            message: "msg".into(),
            created_at: None,
        }
    }

    fn app() -> Router {
        let store = NotificationStore::new(seed_notifications(&[
            seed(true, "カメラ"),
            seed(false, "イヤホン"),
            seed(true, "ジャケット"),
        ]));
        configure_routes(AppState::new(store))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_body(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_page_defaults_to_action_notifications() {
        let (status, body) = get_body(app(), "/notifications").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<li class="tab active" data-is-action="true">"#));
        assert_eq!(body.matches(r#"<li class="notification-item""#).count(), 2);
        assert!(body.find("カメラ").unwrap() < body.find("ジャケット").unwrap());
        assert!(!body.contains("イヤホン"));
    }

    #[tokio::test]
    async fn test_page_info_tab() {
        let (status, body) = get_body(app(), "/notifications?isAction=false").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<li class="tab active" data-is-action="false">"#));
        assert_eq!(body.matches(r#"<li class="notification-item""#).count(), 1);
        assert!(body.contains("イヤホン"));
    }

    #[tokio::test]
    async fn test_page_unknown_filter_is_not_found() {
        let (status, _) = get_body(app(), "/notifications?isAction=undefined").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_api_list_json() {
        let (status, body) = get_body(app(), "/api/notifications?isAction=true").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["productName"], "カメラ");
        assert_eq!(items[0]["kind"], "action");
    }

    #[tokio::test]
    async fn test_api_create_then_listed() {
        let app = app();
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/notifications")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"isAction":false,"productName":"腕時計","message":"発送されました"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let (_, body) = get_body(app, "/notifications?isAction=false").await;
        assert_eq!(body.matches(r#"<li class="notification-item""#).count(), 2);
        // newest first
        assert!(body.find("腕時計").unwrap() < body.find("イヤホン").unwrap());
    }

    #[tokio::test]
    async fn test_api_create_rejects_blank_fields() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/notifications")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"isAction":true,"productName":" ","message":"x"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_root_redirects_to_notifications() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/notifications");
    }
}
