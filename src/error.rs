use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while converting a WIDER FACE split to COCO format.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A count or bounding-box line held a token that is not a number.
    #[error("malformed numeric field on line {line}: {text:?}")]
    Parse { line: usize, text: String },

    /// The annotation file ended while bounding boxes were still outstanding.
    #[error("annotation file ended early: {image:?} declares {expected} boxes, found {found}")]
    IncompleteAnnotation {
        image: String,
        expected: usize,
        found: usize,
    },

    /// An image referenced by the annotation file could not be probed.
    #[error("failed to read dimensions of image {}", .path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: imagesize::ImageError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to serialize COCO document")]
    Json(#[from] serde_json::Error),
}
