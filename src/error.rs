use std::borrow::Cow;
use std::io::Read;

use reqwest::{Method, StatusCode};

use crate::{
    decode::{extract_message, read_capped, read_capped_response},
    ErrorContext, ResponseParts,
};

/// Error returned when a registry API request comes back with a status the
/// caller did not expect.
///
/// Built once from the response and never modified afterwards. Renders as
/// `unexpected status(<status>) from <method> request to <url>: <message>`,
/// keeping the separators even when a field is empty.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unexpected status({status}) from {request_method} request to {request_url}: {message}")]
pub struct UnexpectedStatusError {
    status: String,
    status_code: u16,
    body: Vec<u8>,
    request_url: String,
    request_method: String,
    message: String,
}

impl UnexpectedStatusError {
    /// Builds the error from response parts, reading the body synchronously.
    ///
    /// Never fails: a missing body, missing URL or undecodable payload
    /// leaves the matching field empty.
    pub fn from_parts<B: Read>(ctx: &ErrorContext, parts: ResponseParts<B>) -> Self {
        let body = parts
            .body
            .map(|body| read_capped(body, ctx.body_limit()))
            .unwrap_or_default();
        let message = extract_message(&body, ctx.sink());

        let mut err = Self {
            status: parts.status,
            status_code: parts.status_code.as_u16(),
            body,
            request_url: String::new(),
            request_method: parts.request.method.to_string(),
            message,
        };
        if let Some(url) = parts.request.url {
            err.request_url = url.to_string();
        }
        err
    }

    /// Builds the error from a `reqwest` response, consuming its body.
    ///
    /// `reqwest` does not keep the request method on the response, so the
    /// caller passes it in. It does not expose the reason phrase the server
    /// sent either: the status is rendered with the canonical reason for the
    /// code (see [`crate::status_line`]), replacing any custom phrase.
    pub async fn from_response(
        ctx: &ErrorContext,
        response: reqwest::Response,
        method: Method,
    ) -> Self {
        let status_code = response.status();
        let request_url = response.url().to_string();
        let body = read_capped_response(response, ctx.body_limit()).await;
        let message = extract_message(&body, ctx.sink());

        Self {
            status: crate::status_line(status_code),
            status_code: status_code.as_u16(),
            body,
            request_url,
            request_method: method.to_string(),
            message,
        }
    }

    /// Status line, e.g. `"404 Not Found"`.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Numeric status code, e.g. `404`.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Typed status code, or `None` if the numeric code is out of range.
    pub fn http_status(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status_code).ok()
    }

    /// Raw body snapshot, at most [`crate::MAX_BODY_BYTES`] long.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body snapshot decoded as UTF-8, replacing invalid sequences.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Consumes the error and returns the body snapshot.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Request URL, or an empty string if the request had none.
    pub fn request_url(&self) -> &str {
        &self.request_url
    }

    /// Request method, e.g. `"GET"`.
    pub fn request_method(&self) -> &str {
        &self.request_method
    }

    /// Message reported by the registry, or an empty string.
    pub fn message(&self) -> &str {
        &self.message
    }
}
