use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

use crate::shared::format::format_number;

/// Middleware для логирования HTTP запросов
///
/// Выводит в консоль время (MSK), длительность, размер ответа,
/// статус, метод и путь.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = to_bytes(body, usize::MAX).await.ok();
    let size = match &bytes {
        Some(b) => format_number(b.len()),
        None => "error".to_string(),
    };

    let timestamp = Utc::now() + chrono::Duration::hours(3);
    // Голубой для 2xx, коричневый для остальных
    let color_code = if parts.status.is_success() { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        timestamp.format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        parts.status.as_u16(),
        method,
        path
    );
    if let Some(b) = &bytes {
        tracing::debug!("{} {} -> {} ({} bytes)", method, path, parts.status, b.len());
    }

    match bytes {
        Some(b) => Response::from_parts(parts, Body::from(b)),
        None => Response::from_parts(parts, Body::default()),
    }
}
