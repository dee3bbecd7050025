use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::coco::InstancesFile;
use crate::error::ConvertError;

/// Collaborator that reports an image's pixel dimensions.
pub trait ImageSizeReader {
    fn dimensions(&self, path: &Path) -> Result<(u64, u64), ConvertError>;
}

/// Probe that reads width/height from image headers without decoding pixels.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderProbe;

impl ImageSizeReader for HeaderProbe {
    fn dimensions(&self, path: &Path) -> Result<(u64, u64), ConvertError> {
        let size = imagesize::size(path).map_err(|source| ConvertError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;
        // usize is at most 64 bits, so these conversions are lossless.
        Ok((size.width as u64, size.height as u64))
    }
}

/// Create the output directory if it does not exist yet.
///
/// The default output directory lives inside the dataset dir, so anything
/// already present is left alone.
pub fn create_output_directory(path: &Path) -> std::io::Result<PathBuf> {
    fs::create_dir_all(path)?;
    Ok(path.to_path_buf())
}

/// Write the COCO document to `path` atomically.
///
/// Serializes into a temp file in the destination directory and renames it
/// over the final name, so a failed split leaves no partial output behind.
pub fn write_instances_json(path: &Path, instances: &InstancesFile) -> Result<(), ConvertError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer_pretty(&mut writer, instances)?;
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| ConvertError::Io(e.error))?;
    Ok(())
}
