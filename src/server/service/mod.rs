//! Service layer for bot features and the message relay.
//!
//! Services receive the Discord HTTP client explicitly and return `Result<_, AppError>`
//! or an outcome enum. Event handlers, scheduled jobs and controllers decide whether to
//! log, reply or map the error to a response.
//!
//! Every service keeps its message-building logic in plain functions next to it so the
//! embeds and decisions can be tested without talking to Discord.

pub mod command;
pub mod countdown;
pub mod docs;
pub mod guild;
pub mod monitor;
pub mod relay;
pub mod rules;
pub mod welcome;
