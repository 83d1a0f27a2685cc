use axum::body::Body;
use axum::http::{header, HeaderMap, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Human readable response size.
pub fn format_bytes(n: usize) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if n < 1024 {
        return format!("{} B", n);
    }

    let mut value = n as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Size announced by `Content-Length`, `-` when the body is streamed without one.
pub fn content_length(headers: &HeaderMap) -> String {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok())
        .map(format_bytes)
        .unwrap_or_else(|| "-".to_string())
}

/// Logs method, path, status, duration and size of every request. The body
/// is passed through untouched.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let status = response.status();
    let size = content_length(response.headers());
    let elapsed_ms = start.elapsed().as_millis() as u64;
    if status.is_success() || status.is_redirection() {
        tracing::info!(%method, path = uri.path(), status = status.as_u16(), elapsed_ms, %size, "request");
    } else {
        tracing::warn!(%method, path = uri.path(), status = status.as_u16(), elapsed_ms, %size, "request");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn test_content_length_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(content_length(&headers), "-");

        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("2048"));
        assert_eq!(content_length(&headers), "2.0 KB");

        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("abc"));
        assert_eq!(content_length(&headers), "-");
    }
}
