//! Edge-band assignment
//!
//! Each of the four lateral panel sides can carry a strip of band
//! material: a colored laminate matching the surface or a raw brown
//! backing band. Sides are named in plan view (top/bottom/left/right).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Band material applied to one panel side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeBand {
    /// No band on this side
    None,
    /// Colored laminate band
    ColorBand,
    /// Raw brown backing band
    RawBand,
}

impl Default for EdgeBand {
    fn default() -> Self {
        Self::None
    }
}

impl fmt::Display for EdgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::ColorBand => write!(f, "color"),
            Self::RawBand => write!(f, "raw"),
        }
    }
}

/// Band assignment for all four panel sides, named in plan view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSet {
    /// Band on the top side
    pub top: EdgeBand,
    /// Band on the bottom side
    pub bottom: EdgeBand,
    /// Band on the left side
    pub left: EdgeBand,
    /// Band on the right side
    pub right: EdgeBand,
}

impl EdgeSet {
    /// An assignment with no bands anywhere.
    pub fn none() -> Self {
        Self::default()
    }

    /// True when no side carries a band.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Band assignment after mirroring the panel: the top and bottom
    /// sides swap, left and right stay.
    pub fn mirrored(self) -> Self {
        Self {
            top: self.bottom,
            bottom: self.top,
            left: self.left,
            right: self.right,
        }
    }
}
