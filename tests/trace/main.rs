//! Trace Subsystem Integration Tests
//!
//! End-to-end tests over a real directory: retention, same-day
//! re-creation, append ordering, and the tracing switch.

#[path = "../common/mod.rs"]
mod common;

mod append;
mod lifecycle;
mod retention;
