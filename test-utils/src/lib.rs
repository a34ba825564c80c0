//! MITPA Bot Test Utils
//!
//! Provides shared testing utilities for the bot's unit and integration tests. The crate
//! offers a builder pattern for creating test contexts backed by a temporary directory,
//! so tests touching the documentation snapshot file never share state.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment owning the temporary directory and snapshot path
//! - **fixture**: Canned remote documentation listings and revisions
//! - **serenity**: Factories for Serenity model objects built from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_snapshot_roundtrip() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_snapshot(r#"{ "docs/a.md": "2025-06-29T11:00:00Z" }"#)
//!         .build()
//!         .await?;
//!
//!     let path = test.snapshot_path();
//!     // Point the snapshot store at `path`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
pub mod serenity;
