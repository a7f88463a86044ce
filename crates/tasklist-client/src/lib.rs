//! REST client library for the task list screen.
//!
//! Provides the `TaskApi` trait the screen talks to and `HttpClient`, its
//! implementation over the remote task service's HTTP endpoints.

pub mod api;
pub mod error;
pub mod http;

pub use api::TaskApi;
pub use error::ClientError;
pub use http::HttpClient;
