//! Work-item planning: expansion of configured URLs and randomized ordering.
mod shuffle;


pub use shuffle::shuffle;

/// One scheduled request for a URL. The same URL appears once per repetition.
pub type WorkItem = String;

/// Repeats every URL `requests_per_url` times, keeping configuration order.
#[must_use]
pub fn expand_urls(urls: &[String], requests_per_url: usize) -> Vec<WorkItem> {
    let mut items = Vec::with_capacity(urls.len().saturating_mul(requests_per_url));
    for url in urls {
        items.extend(std::iter::repeat_n(url.clone(), requests_per_url));
    }
    items
}
