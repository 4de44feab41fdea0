//! Progress display for page export

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Pages: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar counting exported pages
pub struct ExportProgress {
    bar: ProgressBar,
}

impl ExportProgress {
    /// Create a progress bar for `page_count` pages
    pub fn new(page_count: usize) -> Self {
        let bar = ProgressBar::new(page_count as u64);
        bar.set_style(PAGE_STYLE.clone());
        Self { bar }
    }

    /// Progress bar that draws nothing, for tests and piped output
    pub fn hidden(page_count: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(page_count as u64);
        Self { bar }
    }

    /// Record that a page has been written
    pub fn page_written(&self, page_number: usize) {
        self.bar.set_message(format!("page {page_number}"));
        self.bar.inc(1);
    }

    /// Number of pages recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar once every page is written
    pub fn finish(&self) {
        self.bar.finish_with_message("all pages written");
    }
}
