//! `oci-status-error` turns unexpected HTTP responses from OCI distribution
//! registries into structured errors.
//!
//! Entry points:
//! - [`UnexpectedStatusError::from_parts`] for any response with a blocking body reader
//! - [`UnexpectedStatusError::from_response`] for `reqwest` responses
//! - [`ensure_success`] and [`ensure_status`] for call sites that check statuses inline

mod check;
mod context;
mod decode;
mod error;
mod response;
mod wire;

pub use check::{ensure_status, ensure_success};
pub use context::{DiagnosticSink, ErrorContext, TracingSink, MAX_BODY_BYTES};
pub use error::UnexpectedStatusError;
pub use response::{status_line, RequestInfo, ResponseParts};
pub use wire::{ErrorInfo, ErrorResponse};

pub type Result<T> = std::result::Result<T, UnexpectedStatusError>;
