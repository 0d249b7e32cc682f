use actix_web::http::StatusCode;
use actix_web::{HttpResponse, HttpResponseBuilder};
use serde::{Deserialize, Serialize};

/// A response value passed along the middleware chain.
///
/// Middlewares and handlers exchange this value rather than raw HTTP
/// responses; the embedding server converts it at the framework boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub code: u16,

    pub message: Option<String>,
}

impl Response {
    pub fn ok() -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message: None,
        }
    }

    pub fn bad_request(message: impl AsRef<str>) -> Self {
        let message = format!("Bad request: {}", message.as_ref());
        Self::err_response(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthenticated(message: impl AsRef<str>) -> Self {
        let message = format!("Unauthenticated: {}", message.as_ref());
        Self::err_response(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl AsRef<str>) -> Self {
        let message = format!("Forbidden: {}", message.as_ref());
        Self::err_response(StatusCode::FORBIDDEN, message)
    }

    pub fn error(message: impl AsRef<str>) -> Self {
        let message = format!("Server error: {}", message.as_ref());
        Self::err_response(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn is_ok(&self) -> bool {
        self.code == StatusCode::OK.as_u16()
    }

    fn err_response(status: StatusCode, message: String) -> Self {
        Self {
            code: status.as_u16(),
            message: Some(message),
        }
    }
}

impl From<Response> for HttpResponse {
    fn from(val: Response) -> Self {
        let status =
            StatusCode::from_u16(val.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponseBuilder::new(status).json(val)
    }
}
