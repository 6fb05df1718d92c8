//! Result aggregation and CSV output.
mod format;
mod writers;


pub use format::{render_results, sort_records};
pub use writers::{result_file_name, write_results};
