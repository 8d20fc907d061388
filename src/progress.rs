//! Progress bar display for bundle downloads

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for one download
pub struct DownloadProgress {
    pb: ProgressBar,
}

impl DownloadProgress {
    /// Create a byte progress bar; `total` is the content length when known
    pub fn new(file_name: &str, total: Option<u64>) -> Self {
        let pb = match total {
            Some(len) => {
                let pb = ProgressBar::new(len);
                if let Ok(style) = ProgressStyle::default_bar()
                    .template("[{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                {
                    pb.set_style(style.progress_chars("#>-"));
                }
                pb
            }
            None => ProgressBar::new_spinner(),
        };
        pb.set_message(file_name.to_string());

        Self { pb }
    }

    /// Hidden progress, used for local copies and non-terminal output
    pub fn hidden() -> Self {
        Self {
            pb: ProgressBar::hidden(),
        }
    }

    pub fn inc(&self, bytes: u64) {
        self.pb.inc(bytes);
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.pb.abandon();
    }
}
