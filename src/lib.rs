//! WIDER FACE to COCO format converter
//!
//! This library parses the line-oriented WIDER FACE ground-truth format and
//! assembles COCO-style `instances_<split>.json` documents for object
//! detection training.

pub mod coco;
pub mod config;
pub mod dataset;
pub mod error;
pub mod io;
pub mod utils;
pub mod wider;

// Re-export commonly used types and functions
pub use coco::{Annotation, Category, Image, InstancesFile, FACE_CATEGORY_ID};
pub use config::{instances_file_name, Args, Split};
pub use dataset::{assemble_instances, process_split};
pub use error::ConvertError;
pub use io::{write_instances_json, HeaderProbe, ImageSizeReader};
pub use wider::{parse_annotations, AnnotationMap, BBox, SENTINEL_LINE};
