//! Request extractors with rejections mapped into the service error type
//!
//! Axum's stock `Json` and `Path` answer malformed input with plain-text
//! bodies, which would break the contract that every failure is a
//! `{"error": ...}` JSON object. These wrappers delegate to the stock
//! extractors and route their rejections through [`Error`] instead.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};

use crate::error::Error;

/// JSON body extractor; malformed bodies become a 400 `{"error": ...}`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);

/// Typed path extractor; unparseable ids become a 400 `{"error": ...}`
/// without leaking the target type
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(_: PathRejection) -> Self {
        Error::Validation("Invalid user id".to_string())
    }
}
