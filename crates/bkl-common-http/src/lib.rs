//! HTTP plumbing for the Backlog API.
//!
//! [`Dispatcher`] sends requests and transparently retries when the server
//! answers `429 Too Many Requests`, and [`extract_error_message`] turns a
//! Backlog error body into a readable summary.

pub mod client;
pub mod dispatch;
pub mod error_body;
pub mod request;

pub use client::{build_client, HttpConfig, HttpError};
pub use dispatch::{DispatchConfig, Dispatcher};
pub use error_body::{extract_error_message, ApiError, ErrorResponse};
pub use request::{endpoint_url, headers, params};
