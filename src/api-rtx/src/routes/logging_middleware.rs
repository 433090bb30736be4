use axum::{
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Middleware that logs each request with its result and the requesting user agent,
/// which for /robots.txt is usually a crawler.
pub async fn log_route_access(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status();

    macro_rules! access {
        ($level:ident) => {
            tracing::$level!(
                method = %method,
                path = %path,
                status = %status.as_u16(),
                user_agent = %user_agent,
                duration_ms = %duration_ms,
            )
        };
    }

    match severity(status) {
        Severity::Error => access!(error),
        Severity::Warn => access!(warn),
        Severity::Info => access!(info),
    }

    response
}

#[derive(Debug, PartialEq, Eq)]
enum Severity {
    Info,
    Warn,
    Error,
}

fn severity(status: StatusCode) -> Severity {
    if status.is_server_error() {
        Severity::Error
    } else if status.is_client_error() {
        Severity::Warn
    } else {
        Severity::Info
    }
}
