//! Bot runtime, scheduled jobs and the HTTP API.
//!
//! # Architecture
//!
//! - **Bot** (`bot/`) - Discord gateway event handlers
//! - **Scheduler** (`scheduler/`) - Cron jobs for the documentation watcher and countdown
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Feature logic shared by handlers, jobs and controllers
//! - **Model Layer** (`model/`) - Domain models
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - API key guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared state handed to HTTP handlers
//! - **Startup** (`startup`) - Tracing and HTTP client initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! Every component receives the Discord HTTP client explicitly; there is no global
//! client.

pub mod bot;
pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
