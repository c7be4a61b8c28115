//! Use cases: command handlers and the dispatcher that drives them.

pub mod dispatch;
pub mod handler;
pub mod list_resources;
pub mod pod_logs;
pub mod switch_context;
