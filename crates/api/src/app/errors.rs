use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use freshstock_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::InvalidInput(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_input", msg),
        e @ DomainError::DateOrder { .. } => {
            json_error(StatusCode::BAD_REQUEST, "date_order_error", e.to_string())
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "stock batch not found"),
    }
}

/// Body or query string that could not be deserialized.
pub fn rejection_to_response(detail: String) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_input", detail)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
