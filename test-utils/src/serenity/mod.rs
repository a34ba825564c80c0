//! Test factories for creating Serenity API objects.
//!
//! Serenity model structs have no public constructors, so these factories build them
//! by deserializing JSON, simulating what Discord's gateway would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_guild;
//!
//! let guild = create_test_guild(123456789012345678, "MITPA");
//! ```

pub mod error;
pub mod guild;
pub mod member;
pub mod message;

pub use error::create_test_http_error;
pub use guild::create_test_guild;
pub use member::create_test_member;
pub use message::create_test_message;
