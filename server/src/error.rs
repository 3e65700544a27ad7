use std::process::{ExitCode, Termination};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use serde_json::json;

use kernel::KernelError;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("{:?}", self.0);
        let (status, message) = match self.0.current_context() {
            KernelError::Timeout => (StatusCode::REQUEST_TIMEOUT, "Превышено время ожидания"),
            KernelError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Внутренняя ошибка сервера")
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// 404 body with the localized message the clients expect.
pub fn not_found(message: &'static str) -> axum::response::Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
}
