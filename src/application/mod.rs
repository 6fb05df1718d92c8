//! End-to-end run pipeline: plan, shuffle, execute, aggregate, write.
mod monitor_run;


pub use monitor_run::{RunSettings, log_run_summary, run_monitor};
