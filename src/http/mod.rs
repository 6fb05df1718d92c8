//! HTTP request execution.
mod client;
mod probe;
mod runner;


pub use client::build_client;
pub use probe::{HttpProbe, Probe};
pub use runner::{ExecutionOutcome, run_work_items};
