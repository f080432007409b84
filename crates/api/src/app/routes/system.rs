use axum::http::StatusCode;

pub async fn ping() -> &'static str {
    "pong"
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
