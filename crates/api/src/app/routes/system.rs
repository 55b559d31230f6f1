use axum::http::StatusCode;

pub async fn banner() -> &'static str {
    "freshstock running"
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
