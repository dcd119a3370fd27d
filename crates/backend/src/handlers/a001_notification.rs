use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use contracts::domain::a001_notification::aggregate::{Notification, NotificationDto};
use contracts::domain::a001_notification::query::NotificationQuery;

use crate::domain::a001_notification::{service, view};
use crate::shared::app_state::AppState;
use crate::shared::error::AppError;

/// GET /notifications?isAction=true|false
pub async fn page(
    State(state): State<AppState>,
    Query(query): Query<NotificationQuery>,
) -> Result<Html<String>, AppError> {
    let (filter, notifications) = service::list(&state.notifications, &query).await?;
    Ok(Html(view::render_page(filter, &notifications)))
}

/// GET /api/notifications?isAction=true|false
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<NotificationQuery>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let (_, notifications) = service::list(&state.notifications, &query).await?;
    Ok(Json(notifications))
}

/// POST /api/notifications
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<NotificationDto>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    let notification = service::create(&state.notifications, dto).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}
