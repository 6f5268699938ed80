//! I/O-free client for the todo service.
//!
//! # Overview
//! `TodoClient` turns each operation into an `HttpRequest` and interprets the
//! matching `HttpResponse`. The caller performs the round-trip with whatever
//! transport it likes, so this crate has no runtime or network dependency.
//!
//! DTOs are declared here rather than imported from `todo-server`; the
//! end-to-end test catches any drift between the two.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Todo, TodoInput};
