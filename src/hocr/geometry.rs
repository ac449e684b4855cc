//! Geometry parsing for hOCR `title` annotations.
//!
//! hOCR elements carry their layout in a free-form `title` attribute:
//! a semicolon-separated property list such as
//! `bbox 10 10 100 40; x_wconf 95`. Only the `bbox` property matters
//! here; everything else is tolerated and ignored.

use serde::Serialize;

/// Two-corner bounding box in source-image pixel space, top-left origin.
///
/// Transient: parsed from markup, immediately converted to a
/// [`BoxExtent`] for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

/// Output box representation: origin plus extent, serialized as
/// `[x, y, width, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoxExtent(pub [u32; 4]);

impl BBox {
    /// Convert corner-pair coordinates to origin + extent.
    ///
    /// Width and height saturate at zero, so a degenerate box stays a
    /// valid zero-area box rather than underflowing.
    pub fn to_extent(self) -> BoxExtent {
        BoxExtent([
            self.x1,
            self.y1,
            self.x2.saturating_sub(self.x1),
            self.y2.saturating_sub(self.y1),
        ])
    }
}

/// Scan a `title` annotation for a `bbox` property with four
/// non-negative integer coordinates.
///
/// Absence is a normal outcome, not an error: malformed coordinates,
/// a missing `bbox` token, or an empty title all yield `None`, which
/// drives the skip policy in the traversal. A malformed `bbox`
/// property does not stop the scan; later properties are still
/// considered.
pub fn parse_bbox(title: &str) -> Option<BBox> {
    title.split(';').find_map(parse_bbox_property)
}

/// Parse a single property, expecting the exact token `bbox` followed
/// by four integers. Trailing tokens after the coordinates are
/// tolerated. Property names that merely contain "bbox" (`x_bboxes`)
/// do not match.
fn parse_bbox_property(property: &str) -> Option<BBox> {
    let mut tokens = property.split_whitespace();
    if tokens.next() != Some("bbox") {
        return None;
    }

    let mut coords = [0u32; 4];
    for coord in &mut coords {
        *coord = tokens.next()?.parse().ok()?;
    }

    Some(BBox {
        x1: coords[0],
        y1: coords[1],
        x2: coords[2],
        y2: coords[3],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_bbox() {
        let bbox = parse_bbox("bbox 10 10 500 40").unwrap();
        assert_eq!(
            bbox,
            BBox {
                x1: 10,
                y1: 10,
                x2: 500,
                y2: 40
            }
        );
    }

    #[test]
    fn tolerates_trailing_properties() {
        let bbox = parse_bbox("bbox 10 10 100 40; x_wconf 95").unwrap();
        assert_eq!(bbox.x2, 100);
    }

    #[test]
    fn finds_bbox_after_other_properties() {
        let bbox = parse_bbox("image \"scan.png\"; bbox 0 0 800 600; ppageno 0").unwrap();
        assert_eq!(bbox.x2, 800);
        assert_eq!(bbox.y2, 600);
    }

    #[test]
    fn tolerates_trailing_tokens_in_property() {
        let bbox = parse_bbox("bbox 1 2 3 4 extra tokens").unwrap();
        assert_eq!(bbox, BBox { x1: 1, y1: 2, x2: 3, y2: 4 });
    }

    #[test]
    fn malformed_property_does_not_stop_scan() {
        let bbox = parse_bbox("bbox ten 10 20 20; bbox 5 6 7 8").unwrap();
        assert_eq!(bbox, BBox { x1: 5, y1: 6, x2: 7, y2: 8 });
    }

    #[test]
    fn rejects_missing_coordinates() {
        assert_eq!(parse_bbox("bbox 10 10 500"), None);
        assert_eq!(parse_bbox("bbox"), None);
        assert_eq!(parse_bbox(""), None);
    }

    #[test]
    fn rejects_negative_coordinates() {
        assert_eq!(parse_bbox("bbox -1 0 10 10"), None);
    }

    #[test]
    fn rejects_non_geometry_titles() {
        assert_eq!(parse_bbox("x_wconf 95"), None);
        assert_eq!(parse_bbox("no geometry here"), None);
    }

    #[test]
    fn exact_token_match_only() {
        // x_bboxes carries per-character boxes; it is not the element box.
        assert_eq!(parse_bbox("x_bboxes 1 2 3 4"), None);
    }

    #[test]
    fn extent_conversion() {
        let bbox = BBox {
            x1: 110,
            y1: 10,
            x2: 200,
            y2: 40,
        };
        assert_eq!(bbox.to_extent(), BoxExtent([110, 10, 90, 30]));
    }

    #[test]
    fn degenerate_extent_is_preserved() {
        let bbox = BBox {
            x1: 50,
            y1: 50,
            x2: 50,
            y2: 50,
        };
        assert_eq!(bbox.to_extent(), BoxExtent([50, 50, 0, 0]));
    }

    #[test]
    fn inverted_corners_saturate_to_zero() {
        let bbox = BBox {
            x1: 60,
            y1: 10,
            x2: 40,
            y2: 5,
        };
        assert_eq!(bbox.to_extent(), BoxExtent([60, 10, 0, 0]));
    }
}
