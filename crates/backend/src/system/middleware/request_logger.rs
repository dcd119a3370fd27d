use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware для логирования HTTP запросов
///
/// Пишет в лог метод, путь с query, статус и длительность. Ответы с
/// ошибкой уходят уровнем `warn`.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();
    if status.is_client_error() || status.is_server_error() {
        tracing::warn!("{} {} {} {}ms", status.as_u16(), method, uri, elapsed_ms);
    } else {
        tracing::info!("{} {} {} {}ms", status.as_u16(), method, uri, elapsed_ms);
    }

    response
}
