//! Per-split conversion pipeline
//!
//! Takes the parser's mapping, probes every referenced image for its pixel
//! dimensions, and assembles the COCO document for the split.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use indicatif::ProgressBar;
use log::info;

use crate::coco::{Annotation, Image, InstancesFile};
use crate::config::{instances_file_name, Args};
use crate::error::ConvertError;
use crate::io::{create_output_directory, write_instances_json, ImageSizeReader};
use crate::utils::create_progress_bar;
use crate::wider::{parse_annotations, AnnotationMap};

/// Assemble the COCO document for a parsed annotation map.
///
/// Walks the map in order, so image ids follow first appearance in the
/// annotation file. Image and annotation ids are dense, starting at 0.
pub fn assemble_instances<P: ImageSizeReader>(
    annotations: &AnnotationMap,
    image_dir: &Path,
    probe: &P,
    pb: &ProgressBar,
) -> Result<InstancesFile, ConvertError> {
    let mut images = Vec::with_capacity(annotations.len());
    let mut records = Vec::new();
    let mut next_image_id: u32 = 0;
    let mut next_annotation_id: u32 = 0;

    for (image_name, boxes) in annotations {
        let (width, height) = probe.dimensions(&image_dir.join(image_name))?;
        let image_id = next_image_id;
        next_image_id += 1;
        images.push(Image::new(image_id, image_name.clone(), width, height));

        for &bbox in boxes {
            records.push(Annotation::new(next_annotation_id, image_id, bbox));
            next_annotation_id += 1;
        }
        pb.inc(1);
    }

    Ok(InstancesFile::new(images, records))
}

/// Convert one split end to end: parse the ground-truth file, probe every
/// image, and write `instances_<split>.json` into the output directory.
pub fn process_split<P: ImageSizeReader>(
    args: &Args,
    split: &str,
    probe: &P,
) -> Result<(), ConvertError> {
    let ann_file = args.annotation_file(split);
    info!("Parsing {}", ann_file.display());
    let reader = BufReader::new(File::open(&ann_file)?);
    let annotations = parse_annotations(reader)?;
    info!("Parsed annotations for {} images", annotations.len());

    let pb = create_progress_bar(annotations.len() as u64, split);
    let instances = assemble_instances(&annotations, &args.image_dir(split), probe, &pb)?;
    pb.finish_with_message("done");

    let out_dir = create_output_directory(&args.output_dir())?;
    let out_path = out_dir.join(instances_file_name(split));
    write_instances_json(&out_path, &instances)?;

    info!("Number of categories: {}", instances.categories.len());
    info!("Number of images: {}", instances.images.len());
    info!("Number of annotations: {}", instances.annotations.len());
    info!("Wrote {}", out_path.display());
    Ok(())
}
