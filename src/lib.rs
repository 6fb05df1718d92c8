//! Core library for the `rtmon` CLI.
//!
//! `rtmon` measures HTTP response times for the URLs listed in an
//! environment file. Each URL is requested a fixed number of times in a
//! shuffled order, and the per-request durations plus per-URL means are
//! written to a CSV file. The modules here are the stages of that pipeline;
//! the binary wires them together in [`entry`].
pub mod application;
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod metrics;
pub mod plan;
pub mod sinks;
pub mod system;
