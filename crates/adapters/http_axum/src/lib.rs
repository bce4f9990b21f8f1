//! # shelf-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API (`/get-item/{item_id}`, `/get-by-name`,
//!   `/create-item`, `/update-item/{item_id}`, `/delete-item`) plus the
//!   static `/` and `/about` pages
//! - Bind path, query and body parameters, turning rejections into
//!   validation errors
//! - Map application results into HTTP responses with a uniform
//!   `{"detail": …}` error body
//!
//! ## Dependency rule
//! Depends on `shelf-app` (for port traits and services) and `shelf-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
