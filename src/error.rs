use actix_web::{
    http::{header, StatusCode},
    HttpResponse, ResponseError,
};
use thiserror::Error;

use crate::{protocol::SimpleResponse, session::Role};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid {0} login")]
    AuthenticationFailure(Role),

    #[error("Login required for {0}")]
    LoginRequired(Role),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Missing form field '{0}'")]
    MissingFormField(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upload exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthenticationFailure(_) => StatusCode::UNAUTHORIZED,
            AppError::LoginRequired(_) => StatusCode::FOUND,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MissingFormField(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            AppError::AuthenticationFailure(_) => HttpResponse::build(status)
                .content_type("text/plain; charset=utf-8")
                .body(self.to_string()),
            AppError::LoginRequired(role) => HttpResponse::build(status)
                .insert_header((header::LOCATION, role.login_path()))
                .finish(),
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                HttpResponse::build(status).json(SimpleResponse::err("Internal server error"))
            }
            _ => HttpResponse::build(status).json(SimpleResponse::err(self.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_failure_is_plain_text() {
        let err = AppError::AuthenticationFailure(Role::Patient);
        assert_eq!(err.to_string(), "Invalid patient login");
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn login_required_redirects_to_role_login() {
        let resp = AppError::LoginRequired(Role::Doctor).error_response();
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/doctor/login");
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::NotFound("Appointment 3".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::MissingFormField("doctor".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::PayloadTooLarge(16).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            AppError::from(diesel::result::Error::NotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
