//! Panel orientation transforms
//!
//! A transform is a quarter-turn rotation plus an optional vertical
//! mirror, always applied to a stored baseline panel. Transforms never
//! compose: requesting 90 degrees twice from the same baseline yields
//! the same panel as requesting it once. The engine re-derives panel
//! dimensions, every hole position, and the edge-band assignment in one
//! pure pass.
//!
//! Origin convention: (0,0) at the bottom-left of the un-rotated panel,
//! Y pointing away from the viewer. Mirroring reflects across the
//! panel's vertical centerline and is applied before rotation.

use crate::error::TransformError;
use crate::model::{Coordinate, Edge, EdgeSet, Panel};
use crate::units::round_mm;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quarter-turn rotation, clockwise in plan view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// No rotation
    R0,
    /// 90 degrees clockwise
    R90,
    /// 180 degrees
    R180,
    /// 270 degrees clockwise (90 counter-clockwise)
    R270,
}

impl Rotation {
    /// Validate a raw degree value from the API boundary.
    ///
    /// Anything outside the four-value set is rejected, never coerced.
    pub fn from_degrees(degrees: u32) -> Result<Self, TransformError> {
        match degrees {
            0 => Ok(Self::R0),
            90 => Ok(Self::R90),
            180 => Ok(Self::R180),
            270 => Ok(Self::R270),
            _ => Err(TransformError::InvalidRotation { degrees }),
        }
    }

    /// The rotation as degrees.
    pub fn degrees(self) -> u32 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }

    /// True for the two rotations that swap panel length and width.
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Self::R90 | Self::R270)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::R0
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// A requested panel orientation: rotation plus optional mirror.
///
/// Stateless; always interpreted relative to the baseline panel, never
/// relative to a previously displayed orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transform {
    /// Quarter-turn rotation, applied after mirroring
    pub rotation: Rotation,
    /// Mirror across the vertical centerline, applied first
    pub mirrored: bool,
}

impl Transform {
    /// Create a transform from already-validated parts.
    pub fn new(rotation: Rotation, mirrored: bool) -> Self {
        Self { rotation, mirrored }
    }

    /// Create a transform from raw degrees, rejecting invalid rotations.
    pub fn from_degrees(degrees: u32, mirrored: bool) -> Result<Self, TransformError> {
        Ok(Self {
            rotation: Rotation::from_degrees(degrees)?,
            mirrored,
        })
    }

    /// The do-nothing transform.
    pub fn identity() -> Self {
        Self::default()
    }

    /// True when applying this transform changes nothing.
    pub fn is_identity(&self) -> bool {
        self.rotation == Rotation::R0 && !self.mirrored
    }
}

/// Derive the panel for the requested orientation from the baseline.
///
/// Pure: the baseline is never touched, and repeated calls with the
/// same arguments yield identical results. Every numerically
/// transformed coordinate is rounded to the 0.1 mm working tolerance.
pub fn apply(baseline: &Panel, transform: Transform) -> Panel {
    if transform.is_identity() {
        return baseline.clone();
    }

    let length = baseline.length_x();
    let width = baseline.width_y();

    // Dimensions come from the rotation alone, independent of the
    // per-hole math.
    let (out_length, out_width) = if transform.rotation.swaps_dimensions() {
        (width, length)
    } else {
        (length, width)
    };

    let mut panel = Panel::new(
        baseline.name(),
        out_length,
        out_width,
        baseline.thickness_z(),
    );
    for comment in baseline.comments() {
        panel.add_comment(comment.clone());
    }

    let mut edges = *baseline.edges();
    if transform.mirrored {
        edges = edges.mirrored();
    }
    panel.set_edges(rotate_edge_set(edges, transform.rotation));

    for hole in baseline.vertical_holes() {
        let x = if transform.mirrored {
            length - hole.x
        } else {
            hole.x
        };
        let (x, y) = rotate_point(x, hole.y, length, width, transform.rotation);
        let mut out = *hole;
        out.x = round_mm(x);
        out.y = round_mm(y);
        panel.push_vertical_hole(out);
    }

    for hole in baseline.horizontal_holes() {
        let mut out = *hole;
        if transform.mirrored {
            out.edge = out.edge.mirrored();
            out.x = out.x.map(|x| length - x);
        }
        out.edge = rotate_edge(out.edge, transform.rotation);
        match out.x {
            Coordinate::Value(x) => {
                let (x, y) = rotate_point(x, out.y, length, width, transform.rotation);
                out.x = Coordinate::Value(round_mm(x));
                out.y = round_mm(y);
            }
            // The sentinel never resolves to a number, so the one
            // rotation whose Y mapping does not read X is the only one
            // that can move Y.
            Coordinate::FarEdge => {
                if transform.rotation == Rotation::R180 {
                    out.y = round_mm(width - out.y);
                }
            }
        }
        panel.push_horizontal_hole(out);
    }

    panel
}

fn rotate_point(x: f64, y: f64, length: f64, width: f64, rotation: Rotation) -> (f64, f64) {
    match rotation {
        Rotation::R0 => (x, y),
        Rotation::R90 => (width - y, x),
        Rotation::R180 => (length - x, width - y),
        Rotation::R270 => (y, length - x),
    }
}

/// Track a hole's bored-into face through the coordinate mapping.
fn rotate_edge(edge: Edge, rotation: Rotation) -> Edge {
    match rotation {
        Rotation::R0 => edge,
        Rotation::R90 => match edge {
            Edge::Front => Edge::Right,
            Edge::Right => Edge::Back,
            Edge::Back => Edge::Left,
            Edge::Left => Edge::Front,
        },
        Rotation::R180 => match edge {
            Edge::Front => Edge::Back,
            Edge::Back => Edge::Front,
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        },
        Rotation::R270 => match edge {
            Edge::Front => Edge::Left,
            Edge::Left => Edge::Back,
            Edge::Back => Edge::Right,
            Edge::Right => Edge::Front,
        },
    }
}

fn rotate_edge_set(edges: EdgeSet, rotation: Rotation) -> EdgeSet {
    match rotation {
        Rotation::R0 => edges,
        Rotation::R90 => EdgeSet {
            top: edges.left,
            right: edges.top,
            bottom: edges.right,
            left: edges.bottom,
        },
        Rotation::R180 => EdgeSet {
            top: edges.bottom,
            bottom: edges.top,
            left: edges.right,
            right: edges.left,
        },
        Rotation::R270 => EdgeSet {
            top: edges.right,
            left: edges.top,
            bottom: edges.left,
            right: edges.bottom,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EdgeBand, Face, HorizontalHole, VerticalHole};

    fn test_panel() -> Panel {
        let mut panel = Panel::new("TEST", 800.0, 300.0, 15.0);
        panel
            .add_vertical_hole(VerticalHole::new(25.0, 25.0, 5.0, 0.0, Face::Top).unwrap())
            .unwrap();
        panel
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let err = Rotation::from_degrees(45).unwrap_err();
        assert_eq!(err, TransformError::InvalidRotation { degrees: 45 });
        assert!(Transform::from_degrees(360, false).is_err());
    }

    #[test]
    fn test_identity_returns_equal_panel() {
        let panel = test_panel();
        assert_eq!(apply(&panel, Transform::identity()), panel);
    }

    #[test]
    fn test_rotate_90_swaps_dimensions_and_moves_hole() {
        let panel = test_panel();
        let rotated = apply(&panel, Transform::from_degrees(90, false).unwrap());
        assert_eq!(rotated.length_x(), 300.0);
        assert_eq!(rotated.width_y(), 800.0);
        assert_eq!(rotated.thickness_z(), 15.0);
        let hole = rotated.vertical_holes()[0];
        assert_eq!((hole.x, hole.y), (275.0, 25.0));
    }

    #[test]
    fn test_mirror_moves_hole_and_swaps_bands() {
        let mut panel = test_panel();
        panel.set_edges(EdgeSet {
            top: EdgeBand::ColorBand,
            bottom: EdgeBand::None,
            left: EdgeBand::RawBand,
            right: EdgeBand::None,
        });
        let mirrored = apply(&panel, Transform::new(Rotation::R0, true));
        let hole = mirrored.vertical_holes()[0];
        assert_eq!((hole.x, hole.y), (775.0, 25.0));
        assert_eq!(mirrored.edges().top, EdgeBand::None);
        assert_eq!(mirrored.edges().bottom, EdgeBand::ColorBand);
        assert_eq!(mirrored.edges().left, EdgeBand::RawBand);
        assert_eq!(mirrored.edges().right, EdgeBand::None);
    }

    #[test]
    fn test_rotate_180_keeps_dimensions() {
        let panel = test_panel();
        let rotated = apply(&panel, Transform::from_degrees(180, false).unwrap());
        assert_eq!(rotated.length_x(), 800.0);
        assert_eq!(rotated.width_y(), 300.0);
        let hole = rotated.vertical_holes()[0];
        assert_eq!((hole.x, hole.y), (775.0, 275.0));
    }

    #[test]
    fn test_rotate_270() {
        let panel = test_panel();
        let rotated = apply(&panel, Transform::from_degrees(270, false).unwrap());
        assert_eq!(rotated.length_x(), 300.0);
        assert_eq!(rotated.width_y(), 800.0);
        let hole = rotated.vertical_holes()[0];
        assert_eq!((hole.x, hole.y), (25.0, 775.0));
    }

    #[test]
    fn test_transforms_never_compose() {
        let panel = test_panel();
        let expected = apply(&panel, Transform::from_degrees(270, false).unwrap());

        // An earlier request for a different orientation leaves no
        // state behind; the later call answers from the baseline alone.
        let _discarded = apply(&panel, Transform::from_degrees(90, false).unwrap());
        let second = apply(&panel, Transform::from_degrees(270, false).unwrap());
        assert_eq!(second, expected);

        // And re-requesting the same orientation twice yields 90°, not
        // 180°.
        let once = apply(&panel, Transform::from_degrees(90, false).unwrap());
        let again = apply(&panel, Transform::from_degrees(90, false).unwrap());
        assert_eq!(once, again);
        assert_eq!(once.length_x(), 300.0);
    }

    #[test]
    fn test_face_unchanged_by_rotation() {
        let mut panel = Panel::new("TEST", 800.0, 300.0, 15.0);
        panel
            .add_vertical_hole(VerticalHole::new(25.0, 25.0, 5.0, 8.0, Face::Bottom).unwrap())
            .unwrap();
        let rotated = apply(&panel, Transform::from_degrees(90, true).unwrap());
        assert_eq!(rotated.vertical_holes()[0].face, Face::Bottom);
    }

    #[test]
    fn test_far_edge_survives_every_orientation() {
        let mut panel = Panel::new("TEST", 800.0, 300.0, 15.0);
        panel
            .add_horizontal_hole(
                HorizontalHole::new(Coordinate::FarEdge, 150.0, 7.5, 8.0, 22.0, Edge::Right)
                    .unwrap(),
            )
            .unwrap();
        for degrees in [0, 90, 180, 270] {
            for mirrored in [false, true] {
                let out = apply(&panel, Transform::from_degrees(degrees, mirrored).unwrap());
                assert!(
                    out.horizontal_holes()[0].x.is_far_edge(),
                    "sentinel lost at {degrees}°, mirrored={mirrored}"
                );
            }
        }
    }

    #[test]
    fn test_far_edge_y_moves_under_180() {
        let mut panel = Panel::new("TEST", 800.0, 300.0, 15.0);
        panel
            .add_horizontal_hole(
                HorizontalHole::new(Coordinate::FarEdge, 100.0, 7.5, 8.0, 22.0, Edge::Right)
                    .unwrap(),
            )
            .unwrap();
        let out = apply(&panel, Transform::from_degrees(180, false).unwrap());
        assert_eq!(out.horizontal_holes()[0].y, 200.0);
        assert_eq!(out.horizontal_holes()[0].edge, Edge::Left);
    }

    #[test]
    fn test_horizontal_edge_tracks_rotation() {
        let mut panel = Panel::new("TEST", 800.0, 300.0, 15.0);
        panel
            .add_horizontal_hole(
                HorizontalHole::new(Coordinate::Value(0.0), 150.0, 7.5, 8.0, 22.0, Edge::Left)
                    .unwrap(),
            )
            .unwrap();
        let rotated = apply(&panel, Transform::from_degrees(90, false).unwrap());
        let hole = rotated.horizontal_holes()[0];
        // The x=0 face becomes the y=0 face under a clockwise quarter
        // turn, and the hole's coordinates land on it.
        assert_eq!(hole.edge, Edge::Front);
        assert_eq!((hole.x, hole.y), (Coordinate::Value(150.0), 0.0));
    }

    #[test]
    fn test_edge_set_rotation_90() {
        let mut panel = test_panel();
        panel.set_edges(EdgeSet {
            top: EdgeBand::ColorBand,
            right: EdgeBand::RawBand,
            bottom: EdgeBand::None,
            left: EdgeBand::None,
        });
        let rotated = apply(&panel, Transform::from_degrees(90, false).unwrap());
        assert_eq!(rotated.edges().right, EdgeBand::ColorBand);
        assert_eq!(rotated.edges().bottom, EdgeBand::RawBand);
        assert_eq!(rotated.edges().top, EdgeBand::None);
        assert_eq!(rotated.edges().left, EdgeBand::None);
    }

    #[test]
    fn test_coordinates_rounded_to_working_tolerance() {
        let mut panel = Panel::new("TEST", 800.0, 300.0, 15.0);
        panel
            .add_vertical_hole(VerticalHole::new(25.04, 25.0, 5.0, 0.0, Face::Top).unwrap())
            .unwrap();
        let rotated = apply(&panel, Transform::from_degrees(180, false).unwrap());
        let hole = rotated.vertical_holes()[0];
        assert_eq!((hole.x, hole.y), (775.0, 275.0));
    }
}
