//! Server-side domain models.
//!
//! This module contains domain models used throughout the service layer. They are
//! independent of both the Discord wire types and the HTTP DTOs, so services can be
//! tested without a gateway connection.

pub mod countdown;
pub mod docs;
