use std::error::Error as StdError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{domain::error::DomainError, infra::error::InfraError};

/// Diagnostic attached to failed responses and picked up by the logging middleware.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub source: &'static str,
    pub status: StatusCode,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(source: &'static str, status: StatusCode, error: &dyn StdError) -> Self {
        let mut messages = vec![error.to_string()];
        let mut current = error.source();
        while let Some(inner) = current {
            messages.push(inner.to_string());
            current = inner.source();
        }
        Self {
            source,
            status,
            messages,
        }
    }

    pub fn attach(self, response: &mut Response) {
        response.extensions_mut().insert(self);
    }
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    public_message: &'static str,
    report: ErrorReport,
}

impl HttpError {
    pub fn from_error(
        source: &'static str,
        status: StatusCode,
        public_message: &'static str,
        error: &dyn StdError,
    ) -> Self {
        Self {
            status,
            public_message,
            report: ErrorReport::from_error(source, status, error),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Request input that failed domain validation.
    pub fn from_domain(source: &'static str, error: DomainError) -> Self {
        Self::from_error(
            source,
            StatusCode::BAD_REQUEST,
            "Request could not be processed",
            &error,
        )
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.public_message).into_response();
        self.report.attach(&mut response);
        response
    }
}

/// Top-level failure of the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Infra(#[from] InfraError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_are_bad_requests() {
        let err = HttpError::from_domain("test", DomainError::validation("bad page"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let response = err.into_response();
        let report = response
            .extensions()
            .get::<ErrorReport>()
            .expect("report attached");
        assert_eq!(report.source, "test");
        assert!(report.messages[0].contains("bad page"));
    }

    #[test]
    fn report_collects_source_chain() {
        let io = std::io::Error::other("disk gone");
        let infra = InfraError::from(io);
        let report =
            ErrorReport::from_error("test", StatusCode::INTERNAL_SERVER_ERROR, &infra);
        assert_eq!(report.messages.len(), 2);
        assert!(report.messages[1].contains("disk gone"));
    }
}
