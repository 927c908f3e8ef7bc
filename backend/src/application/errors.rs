use axum::http::StatusCode;

/// Error shape every use case returns; handlers pass it straight through.
pub type CommandError = (StatusCode, String);

/// Infrastructure failures are logged with their cause and surfaced to the
/// caller as a generic retry message.
pub fn internal(cause: String) -> CommandError {
    tracing::error!("internal error: {cause}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Something went wrong, please try again".to_string(),
    )
}

pub fn bad_request(message: impl Into<String>) -> CommandError {
    (StatusCode::BAD_REQUEST, message.into())
}

pub fn not_found(what: &str) -> CommandError {
    (StatusCode::NOT_FOUND, format!("{what} not found"))
}

pub fn forbidden(message: impl Into<String>) -> CommandError {
    (StatusCode::FORBIDDEN, message.into())
}

pub fn conflict(message: impl ToString) -> CommandError {
    (StatusCode::CONFLICT, message.to_string())
}
