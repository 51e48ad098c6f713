use reqwest::{Method, StatusCode};

use crate::{ErrorContext, Result, UnexpectedStatusError};

/// Passes 2xx responses through and turns anything else into an
/// [`UnexpectedStatusError`].
pub async fn ensure_success(
    ctx: &ErrorContext,
    response: reqwest::Response,
    method: &Method,
) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    Err(UnexpectedStatusError::from_response(ctx, response, method.clone()).await)
}

/// Passes responses whose status is in `expected` through.
///
/// Useful where only one success code is valid, e.g. `201 Created` when
/// completing a blob upload.
pub async fn ensure_status(
    ctx: &ErrorContext,
    response: reqwest::Response,
    method: &Method,
    expected: &[StatusCode],
) -> Result<reqwest::Response> {
    if expected.contains(&response.status()) {
        return Ok(response);
    }
    Err(UnexpectedStatusError::from_response(ctx, response, method.clone()).await)
}
