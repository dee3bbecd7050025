//! COCO format data structures
//!
//! Serde model of the `instances_<split>.json` document. Fields are declared
//! in alphabetical order within every struct so serde_json writes each
//! object with sorted keys, matching the upstream output layout.

use serde::{Deserialize, Serialize};

use crate::wider::BBox;

/// Fixed category id; WIDER FACE has a single category (human face).
pub const FACE_CATEGORY_ID: u32 = 1;

/// COCO category information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub supercategory: String,
}

impl Category {
    /// The single `face` category every annotation belongs to.
    pub fn face() -> Self {
        Self {
            id: FACE_CATEGORY_ID,
            name: "face".to_string(),
            supercategory: "face".to_string(),
        }
    }
}

/// COCO image information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub file_name: String,
    pub height: u64,
    pub id: u32,
    pub width: u64,
}

impl Image {
    pub fn new(id: u32, file_name: String, width: u64, height: u64) -> Self {
        Self {
            file_name,
            height,
            id,
            width,
        }
    }
}

/// COCO annotation information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    pub area: f64,
    pub bbox: BBox, // [x, y, width, height]
    pub category_id: u32,
    pub id: u32,
    pub image_id: u32,
    pub iscrowd: u32,
    pub segmentation: Vec<Vec<f64>>,
}

impl Annotation {
    /// Build a face annotation; `area` is the box area, not the image area.
    pub fn new(id: u32, image_id: u32, bbox: BBox) -> Self {
        Self {
            area: bbox[2] * bbox[3],
            bbox,
            category_id: FACE_CATEGORY_ID,
            id,
            image_id,
            iscrowd: 0,
            segmentation: Vec::new(),
        }
    }
}

/// Complete `instances_<split>.json` document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstancesFile {
    pub annotations: Vec<Annotation>,
    pub categories: Vec<Category>,
    pub images: Vec<Image>,
}

impl InstancesFile {
    pub fn new(images: Vec<Image>, annotations: Vec<Annotation>) -> Self {
        Self {
            annotations,
            categories: vec![Category::face()],
            images,
        }
    }
}
