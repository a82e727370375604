//! MPR format decoder
//!
//! Splits interchange text into directive blocks, extracts the panel
//! dimensions, and expands drilling records into individual holes.
//! Attribute extraction goes through an explicit table with typed
//! per-record defaults: attributes may appear in any order, optional
//! attributes may be absent, and a required-but-missing or unparsable
//! attribute is a malformed block, never a silent default.
//!
//! Unrecognized block types are skipped so that programs written by
//! newer tools still open. Malformed hole blocks abort the decode in
//! strict mode (the default) or are skipped and counted in lenient
//! mode.

use crate::format::{
    self, ATTR_AXIS, ATTR_BAND_BOTTOM, ATTR_BAND_LEFT, ATTR_BAND_RIGHT, ATTR_BAND_TOP,
    ATTR_COMMENT, ATTR_COUNT, ATTR_DEPTH, ATTR_DIAMETER, ATTR_DISTANCE, ATTR_SIDE, ATTR_X,
    ATTR_Y, ATTR_Z, DEFAULT_THICKNESS_MM, DIM_LENGTH, DIM_THICKNESS, DIM_WIDTH, FAR_EDGE_TOKEN,
    MARKER_COMMENT, MARKER_EDGE_BANDS, MARKER_HORIZONTAL, MARKER_VERTICAL, REC_COMMENT,
    REC_EDGE_BANDS, REC_HORIZONTAL, REC_VERTICAL,
};
use panelbore_core::error::DecodeError;
use panelbore_core::model::{
    Coordinate, Edge, EdgeBand, EdgeSet, Face, HorizontalHole, Panel, VerticalHole,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Decode failure policy for malformed hole blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// The first malformed hole block aborts the decode.
    Strict,
    /// Malformed hole blocks are skipped, counted, and logged.
    Lenient,
}

impl Default for DecodeMode {
    fn default() -> Self {
        Self::Strict
    }
}

/// Decoder options.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Failure policy; strict by default.
    pub mode: DecodeMode,
}

/// Result of a decode run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeReport {
    /// The decoded panel.
    pub panel: Panel,
    /// Malformed blocks skipped in lenient mode; always 0 in strict
    /// mode.
    pub skipped_blocks: usize,
}

/// Decode MPR interchange text into a panel, strictly.
pub fn decode(text: &str) -> Result<Panel, DecodeError> {
    decode_with_options(text, DecodeOptions::default()).map(|report| report.panel)
}

/// Decode MPR interchange text with an explicit failure policy.
pub fn decode_with_options(
    text: &str,
    options: DecodeOptions,
) -> Result<DecodeReport, DecodeError> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    let length = scan_dimension(&lines, DIM_LENGTH);
    let width = scan_dimension(&lines, DIM_WIDTH);
    let thickness = scan_dimension(&lines, DIM_THICKNESS);
    if length.is_none() && width.is_none() && thickness.is_none() {
        return Err(DecodeError::MissingDimensions);
    }
    let thickness = thickness.unwrap_or(DEFAULT_THICKNESS_MM);

    let mut panel = Panel::new(
        "",
        length.unwrap_or(0.0),
        width.unwrap_or(0.0),
        thickness,
    );
    let mut skipped_blocks = 0;

    for block in split_blocks(&lines) {
        let outcome = match (block.code, block.marker) {
            (Some(REC_VERTICAL), Some(MARKER_VERTICAL)) => {
                decode_vertical(&block).map(|holes| {
                    for hole in holes {
                        panel.push_vertical_hole(hole);
                    }
                })
            }
            (Some(REC_HORIZONTAL), Some(MARKER_HORIZONTAL)) => {
                decode_horizontal(&block, thickness).map(|holes| {
                    for hole in holes {
                        panel.push_horizontal_hole(hole);
                    }
                })
            }
            (Some(REC_COMMENT), Some(MARKER_COMMENT)) => {
                decode_comments(&block, &mut panel);
                Ok(())
            }
            (Some(REC_EDGE_BANDS), Some(MARKER_EDGE_BANDS)) => {
                panel.set_edges(decode_edge_bands(&block));
                Ok(())
            }
            (code, marker) => {
                debug!(?code, ?marker, block = block.index, "ignoring directive block");
                Ok(())
            }
        };

        if let Err(err) = outcome {
            match options.mode {
                DecodeMode::Strict => return Err(err),
                DecodeMode::Lenient => {
                    warn!(block = block.index, %err, "skipping malformed hole block");
                    skipped_blocks += 1;
                }
            }
        }
    }

    Ok(DecodeReport {
        panel,
        skipped_blocks,
    })
}

/// One directive block: a `<NNN \Marker\` header line plus the
/// attribute lines up to the next block boundary.
struct Block<'a> {
    index: usize,
    code: Option<u16>,
    marker: Option<&'a str>,
    body: Vec<&'a str>,
}

fn split_blocks<'a>(lines: &[&'a str]) -> Vec<Block<'a>> {
    let mut blocks = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if !lines[i].starts_with('<') {
            i += 1;
            continue;
        }
        let (code, marker) = parse_block_header(lines[i]);
        let start = i + 1;
        let mut end = start;
        while end < lines.len() && !is_block_boundary(lines[end]) {
            end += 1;
        }
        blocks.push(Block {
            index: blocks.len(),
            code,
            marker,
            body: lines[start..end].to_vec(),
        });
        i = end;
    }
    blocks
}

fn is_block_boundary(line: &str) -> bool {
    line.starts_with('<') || line.starts_with('[') || line.starts_with('!')
}

fn parse_block_header(line: &str) -> (Option<u16>, Option<&str>) {
    let rest = match line.strip_prefix('<') {
        Some(rest) => rest,
        None => return (None, None),
    };
    let code = rest.get(0..3).and_then(|digits| digits.parse().ok());
    let marker = rest.find('\\').and_then(|start| {
        let tail = &rest[start + 1..];
        tail.find('\\').map(|end| &tail[..end])
    });
    (code, marker)
}

fn scan_dimension(lines: &[&str], key: &str) -> Option<f64> {
    lines.iter().find_map(|line| {
        line.strip_prefix(key)
            .and_then(|rest| rest.strip_prefix('='))
            .and_then(|value| value.trim().parse().ok())
    })
}

/// Attribute table of one block: `KEY="value"` lines in any order,
/// looked up with typed defaults.
struct Attrs<'a> {
    map: HashMap<&'a str, &'a str>,
}

struct AttrError;

impl<'a> Attrs<'a> {
    fn new(body: &[&'a str]) -> Self {
        let mut map = HashMap::new();
        for line in body {
            if let Some((key, value)) = line.split_once('=') {
                map.insert(key.trim(), value.trim().trim_matches('"'));
            }
        }
        Self { map }
    }

    fn get(&self, key: &str) -> Option<&'a str> {
        self.map.get(key).copied()
    }

    fn require_f64(&self, key: &str) -> Result<f64, AttrError> {
        self.get(key)
            .ok_or(AttrError)?
            .parse()
            .map_err(|_| AttrError)
    }

    fn f64_or(&self, key: &str, default: f64) -> Result<f64, AttrError> {
        match self.get(key) {
            Some(value) => value.parse().map_err(|_| AttrError),
            None => Ok(default),
        }
    }

    fn u32_or(&self, key: &str, default: u32) -> Result<u32, AttrError> {
        match self.get(key) {
            Some(value) => value.parse().map_err(|_| AttrError),
            None => Ok(default),
        }
    }
}

fn decode_vertical(block: &Block<'_>) -> Result<Vec<VerticalHole>, DecodeError> {
    let malformed = || DecodeError::MalformedHole {
        block_index: block.index,
    };
    let attrs = Attrs::new(&block.body);

    let x = attrs.require_f64(ATTR_X).map_err(|_| malformed())?;
    let y = attrs.require_f64(ATTR_Y).map_err(|_| malformed())?;
    let diameter = attrs
        .require_f64(ATTR_DIAMETER)
        .map_err(|_| malformed())?;
    let depth = attrs
        .f64_or(ATTR_DEPTH, 0.0)
        .map_err(|_| malformed())?;
    let count = attrs.u32_or(ATTR_COUNT, 1).map_err(|_| malformed())?;
    let distance = attrs
        .f64_or(ATTR_DISTANCE, 0.0)
        .map_err(|_| malformed())?;
    let axis = attrs.f64_or(ATTR_AXIS, 0.0).map_err(|_| malformed())?;
    let face = match attrs.get(ATTR_SIDE) {
        Some(token) => format::face_from_token(token).ok_or_else(malformed)?,
        None => Face::Top,
    };

    let mut holes = Vec::with_capacity(count as usize);
    for i in 0..count {
        let offset = distance * i as f64;
        let (hx, hy) = if axis == 90.0 {
            (x, y + offset)
        } else {
            (x + offset, y)
        };
        let hole =
            VerticalHole::new(hx, hy, diameter, depth, face).map_err(|_| malformed())?;
        holes.push(hole);
    }
    Ok(holes)
}

fn decode_horizontal(
    block: &Block<'_>,
    thickness: f64,
) -> Result<Vec<HorizontalHole>, DecodeError> {
    let malformed = || DecodeError::MalformedHole {
        block_index: block.index,
    };
    let attrs = Attrs::new(&block.body);

    let x_raw = attrs.get(ATTR_X).ok_or_else(malformed)?;
    let x = if x_raw == FAR_EDGE_TOKEN {
        Coordinate::FarEdge
    } else {
        Coordinate::Value(x_raw.parse().map_err(|_| malformed())?)
    };
    let y = attrs.require_f64(ATTR_Y).map_err(|_| malformed())?;
    let diameter = attrs
        .require_f64(ATTR_DIAMETER)
        .map_err(|_| malformed())?;
    let z = attrs
        .f64_or(ATTR_Z, thickness / 2.0)
        .map_err(|_| malformed())?;
    let depth = attrs
        .f64_or(ATTR_DEPTH, 0.0)
        .map_err(|_| malformed())?;
    let count = attrs.u32_or(ATTR_COUNT, 1).map_err(|_| malformed())?;
    let distance = attrs
        .f64_or(ATTR_DISTANCE, 0.0)
        .map_err(|_| malformed())?;
    let axis = attrs
        .f64_or(ATTR_AXIS, 90.0)
        .map_err(|_| malformed())?;
    let edge = match attrs.get(ATTR_SIDE) {
        Some(token) => format::edge_from_token(token).ok_or_else(malformed)?,
        None => Edge::Front,
    };

    let mut holes = Vec::with_capacity(count as usize);
    for i in 0..count {
        let offset = distance * i as f64;
        // Only the numeric member of a replicated group advances; the
        // far-edge sentinel never reinterprets as a number.
        let (hx, hy) = if axis == 90.0 {
            (x, y + offset)
        } else {
            (x.map(|v| v + offset), y)
        };
        let hole =
            HorizontalHole::new(hx, hy, z, diameter, depth, edge).map_err(|_| malformed())?;
        holes.push(hole);
    }
    Ok(holes)
}

fn decode_comments(block: &Block<'_>, panel: &mut Panel) {
    // KM repeats once per comment line, so this bypasses the attribute
    // table (which keeps one value per key).
    for line in &block.body {
        if let Some(value) = line
            .strip_prefix(ATTR_COMMENT)
            .and_then(|rest| rest.strip_prefix('='))
        {
            let comment = value.trim().trim_matches('"').trim();
            if !comment.is_empty() {
                panel.add_comment(comment);
            }
        }
    }
}

fn decode_edge_bands(block: &Block<'_>) -> EdgeSet {
    let attrs = Attrs::new(&block.body);
    let band = |key: &str| {
        let token = attrs.get(key).unwrap_or("");
        format::band_from_token(token).unwrap_or_else(|| {
            warn!(block = block.index, key, token, "unknown edge-band token");
            EdgeBand::None
        })
    };
    EdgeSet {
        top: band(ATTR_BAND_TOP),
        bottom: band(ATTR_BAND_BOTTOM),
        left: band(ATTR_BAND_LEFT),
        right: band(ATTR_BAND_RIGHT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_header_parse() {
        assert_eq!(
            parse_block_header("<102 \\BohrVert\\"),
            (Some(102), Some("BohrVert"))
        );
        assert_eq!(parse_block_header("<139 \\Komponente\\").0, Some(139));
        assert_eq!(parse_block_header("<1x2 oops"), (None, None));
    }

    #[test]
    fn test_attr_table_any_order_and_quotes() {
        let attrs = Attrs::new(&["YA=\"20\"", "XA=\"10.5\"", "DU=\"5\""]);
        assert_eq!(attrs.require_f64("XA").ok(), Some(10.5));
        assert_eq!(attrs.require_f64("YA").ok(), Some(20.0));
        assert!(attrs.require_f64("TI").is_err());
        assert_eq!(attrs.f64_or("TI", 0.0).ok(), Some(0.0));
    }

    #[test]
    fn test_attr_table_rejects_garbage_values() {
        let attrs = Attrs::new(&["AN=\"three\""]);
        assert!(attrs.u32_or("AN", 1).is_err());
    }

    #[test]
    fn test_dimension_scan() {
        let lines = ["[H", "_BSX=800.000000", "_BSY=300.000000", "_BSZ=15.000000"];
        assert_eq!(scan_dimension(&lines, "_BSX"), Some(800.0));
        assert_eq!(scan_dimension(&lines, "_BSZ"), Some(15.0));
        assert_eq!(scan_dimension(&lines, "_FNX"), None);
    }
}
