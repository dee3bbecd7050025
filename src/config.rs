use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments parser for converting WIDER FACE annotations to COCO format.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the WIDER FACE dataset dir
    #[arg(short = 'd', long = "data_dir", default_value = "data/WIDER")]
    pub data_dir: PathBuf,

    /// Which split to convert
    #[arg(short = 's', long = "split", value_enum, default_value = "all")]
    pub split: Split,

    /// Where to output the annotation files, defaults to <data_dir>/annotations
    #[arg(short = 'o', long = "out_dir")]
    pub out_dir: Option<PathBuf>,
}

// Enumeration for the dataset split selector
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Split {
    /// Convert both the train and val splits
    All,
    Train,
    Val,
}

impl Split {
    /// Names of the concrete splits this selection expands to.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            Split::All => &["train", "val"],
            Split::Train => &["train"],
            Split::Val => &["val"],
        }
    }
}

impl Args {
    /// Directory the `instances_<split>.json` files are written to.
    pub fn output_dir(&self) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("annotations"))
    }

    /// Ground-truth annotation file for a split.
    pub fn annotation_file(&self, split: &str) -> PathBuf {
        self.data_dir
            .join("wider_face_split")
            .join(format!("wider_face_{}_bbx_gt.txt", split))
    }

    /// Image directory for a split.
    pub fn image_dir(&self, split: &str) -> PathBuf {
        self.data_dir.join(format!("WIDER_{}", split)).join("images")
    }
}

/// Output file name for a split.
pub fn instances_file_name(split: &str) -> String {
    format!("instances_{}.json", split)
}
