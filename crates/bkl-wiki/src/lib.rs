//! Backlog wiki operations.
//!
//! Every call goes through a rate-limit aware [`bkl_common_http::Dispatcher`];
//! any status other than `200 OK` becomes a [`WikiError::Status`] carrying the
//! messages Backlog reported.

pub mod client;
pub mod error;
pub mod page;
pub mod replace;

pub use client::{WikiClient, DEFAULT_MAX_JITTER_MILLIS, DEFAULT_MAX_RETRY_ATTEMPTS};
pub use error::WikiError;
pub use page::{Page, Renamed, Replaced};
pub use replace::Replacer;
