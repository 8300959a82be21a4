// src/analysis/error_message.rs
use crate::core::service_client::ServiceError;

/// User-visible message for a failed request: the server's detail when it
/// sent one, the operation's fallback otherwise
pub fn user_message(error: &ServiceError, fallback: &str) -> String {
    error
        .detail()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}
