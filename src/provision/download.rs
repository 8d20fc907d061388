//! Bundle download primitive
//!
//! `http://` and `https://` URIs are fetched with a blocking reqwest client;
//! `file://` URIs and bare paths are copied. Either way the bytes land in a
//! temp file next to the destination that is only persisted once complete,
//! so a partial download is never observed at the destination path.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use tempfile::NamedTempFile;

use crate::error::{Result, download_failed, file_write_failed};
use crate::progress::DownloadProgress;

/// Overall timeout for one HTTP download
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(600);

/// Fetches a URI into a local file
pub trait Downloader {
    fn download(&self, uri: &str, destination: &Path) -> Result<()>;
}

/// The production downloader
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpDownloader {
    show_progress: bool,
}

impl HttpDownloader {
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }

    fn fetch_http(&self, uri: &str, out: &mut NamedTempFile) -> Result<()> {
        let client = Client::builder()
            .user_agent(concat!("artifacts-launcher/", env!("CARGO_PKG_VERSION")))
            .timeout(DOWNLOAD_TIMEOUT)
            .build()
            .map_err(|e| download_failed(uri, e))?;

        let mut response = client
            .get(uri)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| download_failed(uri, e))?;

        let progress = if self.show_progress {
            DownloadProgress::new(uri.rsplit('/').next().unwrap_or(uri), response.content_length())
        } else {
            DownloadProgress::hidden()
        };

        let mut buffer = [0u8; 64 * 1024];
        loop {
            let read = match response.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => read,
                Err(e) => {
                    progress.abandon();
                    return Err(download_failed(uri, e));
                }
            };
            if let Err(e) = out.write_all(&buffer[..read]) {
                progress.abandon();
                return Err(file_write_failed(out.path(), e));
            }
            progress.inc(read as u64);
        }
        progress.finish();

        Ok(())
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, uri: &str, destination: &Path) -> Result<()> {
        let parent = destination.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|e| file_write_failed(parent, e))?;
        let mut out = NamedTempFile::new_in(parent).map_err(|e| file_write_failed(parent, e))?;

        match local_source(uri) {
            Some(source) => {
                let mut input = fs::File::open(&source).map_err(|e| download_failed(uri, e))?;
                std::io::copy(&mut input, out.as_file_mut())
                    .map_err(|e| download_failed(uri, e))?;
            }
            None => self.fetch_http(uri, &mut out)?,
        }

        out.as_file()
            .sync_all()
            .map_err(|e| file_write_failed(out.path(), e))?;
        out.persist(destination)
            .map_err(|e| file_write_failed(destination, e.error))?;
        tracing::debug!("Downloaded {} to {}", uri, destination.display());
        Ok(())
    }
}

/// The local path behind a `file://` URI or bare path; `None` for http(s)
fn local_source(uri: &str) -> Option<PathBuf> {
    if uri.starts_with("http://") || uri.starts_with("https://") {
        return None;
    }
    let path = uri.strip_prefix("file://").unwrap_or(uri);
    // file:///C:/dir on Windows
    let path = if cfg!(windows) && path.starts_with('/') && path.get(2..3) == Some(":") {
        &path[1..]
    } else {
        path
    };
    Some(PathBuf::from(path))
}
