//! Archive extraction primitive

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use flate2::read::GzDecoder;
use tar::Archive;

use crate::error::{Result, extraction_failed};

/// Unpacks an archive into a directory
pub trait Extractor {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<()>;
}

/// Extracts `.tar.gz` archives.
///
/// `tar` refuses entries that would escape `destination`, so a hostile
/// archive cannot write outside the temporary directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct TarGzExtractor;

impl Extractor for TarGzExtractor {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<()> {
        let file = File::open(archive).map_err(|e| extraction_failed(archive, e))?;
        fs::create_dir_all(destination).map_err(|e| extraction_failed(archive, e))?;

        let mut tar = Archive::new(GzDecoder::new(BufReader::new(file)));
        tar.set_preserve_mtime(true);
        tar.unpack(destination)
            .map_err(|e| extraction_failed(archive, e))?;

        tracing::debug!(
            "Extracted {} into {}",
            archive.display(),
            destination.display()
        );
        Ok(())
    }
}
