//! Mock WordPress server for E2E testing.
//!
//! This module provides an in-memory server that simulates the subset of the
//! WordPress REST API presskit talks to. Unlike wiremock, which mocks at the
//! HTTP level per-test, this server keeps state across requests: an upload
//! followed by `set-featured` sees the attachment it just created.
//!
//! # Example
//!
//! ```ignore
//! use presskit::mock_server::MockServer;
//! use presskit::{Credentials, Get, Post, WpClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let credentials = Credentials::new(server.url(), "editor", "secret").unwrap();
//!     let client = WpClient::new(&credentials).unwrap();
//!
//!     // Server comes with default fixtures
//!     let post = Post::get(&client, 1).await.unwrap();
//!     assert_eq!(post.title, "Hello world!");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::{MockMedia, MockPost, MockState, MockUser};
