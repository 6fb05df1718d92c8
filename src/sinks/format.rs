use std::fmt::Write as _;

use crate::args::{Grouping, PositiveUsize};
use crate::error::{AppError, AppResult, SinkError};
use crate::metrics::TimingRecord;

fn write_line(output: &mut String, args: std::fmt::Arguments<'_>) -> AppResult<()> {
    writeln!(output, "{}", args).map_err(|err| AppError::sink(SinkError::WriteLine { source: err }))
}

/// Stable sort by URL; records for the same URL keep their arrival order.
pub fn sort_records(records: &mut [TimingRecord]) {
    records.sort_by(|left, right| left.url.cmp(&right.url));
}

/// Renders sorted records as CSV lines of `url,duration` or
/// `url,duration,mean`.
///
/// A run of `requests_per_url` lines closes with a mean (integer division).
/// With [`Grouping::ByUrl`] a run also closes at every URL boundary, so a URL
/// with missing samples gets a mean over the samples it has. With
/// [`Grouping::Positional`] runs ignore URL boundaries entirely.
///
/// # Errors
///
/// Returns an error if a line cannot be formatted.
pub fn render_results(
    records: &[TimingRecord],
    requests_per_url: PositiveUsize,
    grouping: Grouping,
) -> AppResult<String> {
    let batch_size = requests_per_url.get();
    let mut output = String::with_capacity(records.len().saturating_mul(48));
    let mut batch_len: usize = 0;
    let mut batch_total: u64 = 0;

    for (position, record) in records.iter().enumerate() {
        batch_len = batch_len.saturating_add(1);
        batch_total = batch_total.saturating_add(record.duration_ms);

        let url_ends = match grouping {
            Grouping::ByUrl => records
                .get(position.saturating_add(1))
                .is_none_or(|next| next.url != record.url),
            Grouping::Positional => false,
        };

        if batch_len == batch_size || url_ends {
            let divisor = u64::try_from(batch_len).unwrap_or(u64::MAX);
            let mean = batch_total.checked_div(divisor).unwrap_or(0);
            write_line(
                &mut output,
                format_args!("{},{},{}", record.url, record.duration_ms, mean),
            )?;
            batch_len = 0;
            batch_total = 0;
        } else {
            write_line(
                &mut output,
                format_args!("{},{}", record.url, record.duration_ms),
            )?;
        }
    }

    Ok(output)
}
