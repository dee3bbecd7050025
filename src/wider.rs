//! WIDER FACE ground-truth parser.
//!
//! The annotation file is a flat sequence of text lines: an image name,
//! then a face count, then one 10-field line per face, repeating. An
//! all-zero face line marks a block whose declared annotations turned out
//! to be invalid; such images are dropped from the result.

use std::io::BufRead;

use indexmap::IndexMap;

use crate::error::ConvertError;

/// The all-zero face line marking a degenerate annotation block.
pub const SENTINEL_LINE: &str = "0 0 0 0 0 0 0 0 0 0";

/// Bounding box as `[x, y, width, height]` in pixels, top-left origin.
pub type BBox = [f64; 4];

/// Mapping from image name to its boxes, in order of first appearance.
pub type AnnotationMap = IndexMap<String, Vec<BBox>>;

// What the next line is expected to hold.
enum State {
    ImageName,
    Count,
    Boxes { total: usize, consumed: usize },
}

/// Parse a WIDER ground-truth file into a map from image name to boxes.
///
/// Only the first four fields of each face line (`x y w h`) are kept; the
/// attribute flags that follow are discarded. An image declaring zero faces
/// keeps an empty entry. An image whose non-zero declaration is followed by
/// the sentinel line once its block is complete is removed entirely.
pub fn parse_annotations<R: BufRead>(reader: R) -> Result<AnnotationMap, ConvertError> {
    let mut annotations = AnnotationMap::new();
    let mut state = State::ImageName;
    let mut current_image = String::new();
    // Whether the most recent count line declared any boxes. The sentinel
    // only discards blocks that did.
    let mut declared_nonzero = false;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let line = line.trim();

        if line == SENTINEL_LINE {
            // Mid-block the sentinel is skipped without counting toward the
            // declared total; after a completed non-zero block it discards
            // that image. Inherited quirk, kept bug-for-bug.
            if declared_nonzero && !matches!(state, State::Boxes { .. }) {
                annotations.shift_remove(current_image.as_str());
                state = State::ImageName;
                declared_nonzero = false;
            }
            continue;
        }

        state = match state {
            State::ImageName => {
                current_image = line.to_string();
                annotations.insert(current_image.clone(), Vec::new());
                State::Count
            }
            State::Count => {
                let count: i64 = line.parse().map_err(|_| ConvertError::Parse {
                    line: line_no,
                    text: line.to_string(),
                })?;
                declared_nonzero = count > 0;
                if count > 0 {
                    State::Boxes {
                        total: count as usize,
                        consumed: 0,
                    }
                } else {
                    // No faces in this image; the empty entry stays.
                    State::ImageName
                }
            }
            State::Boxes { total, consumed } => {
                let bbox = parse_box_line(line, line_no)?;
                if let Some(boxes) = annotations.get_mut(current_image.as_str()) {
                    boxes.push(bbox);
                }
                let consumed = consumed + 1;
                if consumed == total {
                    State::ImageName
                } else {
                    State::Boxes { total, consumed }
                }
            }
        };
    }

    if let State::Boxes { total, consumed } = state {
        return Err(ConvertError::IncompleteAnnotation {
            image: current_image,
            expected: total,
            found: consumed,
        });
    }

    Ok(annotations)
}

// A face line carries 10 whitespace-separated decimal fields; everything
// past `x y w h` is attribute flags we do not retain.
fn parse_box_line(line: &str, line_no: usize) -> Result<BBox, ConvertError> {
    let parse_err = || ConvertError::Parse {
        line: line_no,
        text: line.to_string(),
    };

    let fields: Vec<f64> = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| parse_err())?;

    if fields.len() < 4 {
        return Err(parse_err());
    }
    Ok([fields[0], fields[1], fields[2], fields[3]])
}
