//! Request extractors whose rejections come back as [`AppError`].
//!
//! axum's stock `Json` and `Query` answer malformed input with 415/422 and a
//! plain-text body; these wrappers turn every rejection into a 400 carrying
//! the usual `{"error": ...}` body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `Json<T>` with rejections mapped to [`AppError::InvalidRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);

/// `Query<T>` with rejections mapped to [`AppError::InvalidRequest`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ValidQuery<T>(pub T);
