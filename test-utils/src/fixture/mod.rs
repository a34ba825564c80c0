//! Test fixtures providing reusable remote documentation data.
//!
//! Fixtures are plain in-memory data; they do not touch the filesystem or the network.
//! Tests turn them into whatever source type they are exercising.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture::docs;
//!
//! for (name, path) in docs::LISTING {
//!     // ...
//! }
//! ```

pub mod docs;
