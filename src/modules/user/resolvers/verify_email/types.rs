pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use std::fmt;

    pub enum Success {
        EmailVerified,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::EmailVerified => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
            }
        }
    }

    #[derive(Debug)]
    pub enum Error {
        VerificationNotFound,
        FailedToVerifyEmail,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::VerificationNotFound => write!(f, "Verification not found"),
                Self::FailedToVerifyEmail => write!(f, "Could not verify email"),
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            let status = match self {
                Self::VerificationNotFound => StatusCode::NOT_FOUND,
                Self::FailedToVerifyEmail => StatusCode::INTERNAL_SERVER_ERROR,
            };

            (
                status,
                Json(json!({ "ok": false, "error": self.to_string() })),
            )
                .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
