//! Hole value types
//!
//! A vertical hole is bored perpendicular to the panel face (top or
//! bottom); a horizontal hole is bored into one of the four lateral
//! edges. Constructors validate diameter and depth; position bounds are
//! checked when a hole is added to a dimensioned panel.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Panel surface a vertical hole is bored from.
///
/// Not affected by rotation or mirroring; only the hole's planar
/// position moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    /// Upper panel surface
    Top,
    /// Lower panel surface
    Bottom,
}

impl Default for Face {
    fn default() -> Self {
        Self::Top
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

/// Lateral panel face a horizontal hole is bored into.
///
/// Front is the y=0 face, Back the y=width face, Left the x=0 face and
/// Right the x=length face of the un-rotated panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// The y = 0 face
    Front,
    /// The y = width face
    Back,
    /// The x = length face
    Right,
    /// The x = 0 face
    Left,
}

impl Default for Edge {
    fn default() -> Self {
        Self::Front
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => write!(f, "front"),
            Self::Back => write!(f, "back"),
            Self::Right => write!(f, "right"),
            Self::Left => write!(f, "left"),
        }
    }
}

impl Edge {
    /// The face this edge maps to after mirroring across the panel's
    /// vertical centerline: the two X faces swap, the Y faces stay.
    pub fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            other => other,
        }
    }
}

/// An X coordinate that is either a concrete position or the symbolic
/// far edge of the panel.
///
/// `FarEdge` means "evaluate to the panel's current length at
/// render/encode time"; it is immune to rotation and mirroring so the
/// hole always sits at the panel's far end, whatever the length becomes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coordinate {
    /// A concrete position in millimetres
    Value(f64),
    /// The panel's current far end
    FarEdge,
}

impl Coordinate {
    /// True when this is the symbolic far-edge sentinel.
    pub fn is_far_edge(&self) -> bool {
        matches!(self, Self::FarEdge)
    }

    /// Resolve to a concrete position against the given panel length.
    pub fn resolve(&self, length_x: f64) -> f64 {
        match self {
            Self::Value(x) => *x,
            Self::FarEdge => length_x,
        }
    }

    /// Apply `f` to a concrete value; the sentinel passes through
    /// untouched.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Self::Value(x) => Self::Value(f(x)),
            Self::FarEdge => Self::FarEdge,
        }
    }
}

/// A hole bored perpendicular to the panel face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalHole {
    /// Planar X position (mm)
    pub x: f64,
    /// Planar Y position (mm)
    pub y: f64,
    /// Hole diameter (mm)
    pub diameter: f64,
    /// Hole depth (mm); 0 means a through hole
    pub depth: f64,
    /// Panel surface the hole is bored from
    pub face: Face,
}

impl VerticalHole {
    /// Create a vertical hole, validating diameter and depth.
    pub fn new(
        x: f64,
        y: f64,
        diameter: f64,
        depth: f64,
        face: Face,
    ) -> Result<Self, ValidationError> {
        validate_bore(diameter, depth)?;
        Ok(Self {
            x,
            y,
            diameter,
            depth,
            face,
        })
    }

    /// True when the hole goes all the way through the panel.
    pub fn is_through(&self) -> bool {
        self.depth == 0.0
    }
}

/// A hole bored into one of the panel's four lateral edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalHole {
    /// Planar X position, possibly the symbolic far edge
    pub x: Coordinate,
    /// Planar Y position (mm)
    pub y: f64,
    /// Depth-axis position (mm), typically half the panel thickness
    pub z: f64,
    /// Hole diameter (mm)
    pub diameter: f64,
    /// Hole depth (mm)
    pub depth: f64,
    /// Lateral face the hole is bored into
    pub edge: Edge,
}

impl HorizontalHole {
    /// Create a horizontal hole, validating diameter and depth.
    pub fn new(
        x: Coordinate,
        y: f64,
        z: f64,
        diameter: f64,
        depth: f64,
        edge: Edge,
    ) -> Result<Self, ValidationError> {
        validate_bore(diameter, depth)?;
        Ok(Self {
            x,
            y,
            z,
            diameter,
            depth,
            edge,
        })
    }
}

fn validate_bore(diameter: f64, depth: f64) -> Result<(), ValidationError> {
    if diameter <= 0.0 {
        return Err(ValidationError::NonPositiveDiameter { diameter });
    }
    if depth < 0.0 {
        return Err(ValidationError::NegativeDepth { depth });
    }
    Ok(())
}
