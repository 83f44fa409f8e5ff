//! Request extractors with `AppError` rejections
//!
//! Thin wrappers over `axum::Json` and `axum::extract::Query` so that a bad
//! body or query string produces the same `{error, code}` JSON as every
//! other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::app_error::AppError;

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
