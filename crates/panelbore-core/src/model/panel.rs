//! The panel model
//!
//! A panel is a rectangular wood piece with length, width and thickness,
//! its vertical and horizontal hole collections and an edge-band
//! assignment. Holes added through [`Panel::add_vertical_hole`] and
//! [`Panel::add_horizontal_hole`] are bounds-checked against the panel
//! plane; holes sourced from an interchange file or a transform are
//! inserted through the trusted `push_*` path.

use crate::error::ValidationError;
use crate::model::edges::EdgeSet;
use crate::model::holes::{Coordinate, HorizontalHole, VerticalHole};
use serde::{Deserialize, Serialize};

/// A rectangular panel with its drilling program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    name: String,
    length_x: f64,
    width_y: f64,
    thickness_z: f64,
    vertical_holes: Vec<VerticalHole>,
    horizontal_holes: Vec<HorizontalHole>,
    edges: EdgeSet,
    comments: Vec<String>,
}

impl Panel {
    /// Create a panel with the given dimensions in millimetres.
    ///
    /// A zero length or width marks the panel as not yet dimensioned;
    /// position bounds are then deferred until dimensions exist.
    pub fn new(name: impl Into<String>, length_x: f64, width_y: f64, thickness_z: f64) -> Self {
        Self {
            name: name.into(),
            length_x,
            width_y,
            thickness_z,
            vertical_holes: Vec::new(),
            horizontal_holes: Vec::new(),
            edges: EdgeSet::none(),
            comments: Vec::new(),
        }
    }

    /// Panel name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the panel.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Panel length along X (mm).
    pub fn length_x(&self) -> f64 {
        self.length_x
    }

    /// Panel width along Y (mm).
    pub fn width_y(&self) -> f64 {
        self.width_y
    }

    /// Panel thickness along Z (mm).
    pub fn thickness_z(&self) -> f64 {
        self.thickness_z
    }

    /// True when both planar dimensions are known and positive.
    pub fn is_dimensioned(&self) -> bool {
        self.length_x > 0.0 && self.width_y > 0.0
    }

    /// The vertical holes, in insertion order.
    pub fn vertical_holes(&self) -> &[VerticalHole] {
        &self.vertical_holes
    }

    /// The horizontal holes, in insertion order.
    pub fn horizontal_holes(&self) -> &[HorizontalHole] {
        &self.horizontal_holes
    }

    /// Total hole count.
    pub fn hole_count(&self) -> usize {
        self.vertical_holes.len() + self.horizontal_holes.len()
    }

    /// The edge-band assignment.
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// Replace the edge-band assignment.
    pub fn set_edges(&mut self, edges: EdgeSet) {
        self.edges = edges;
    }

    /// Free-form program comments, in file order.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Append a program comment.
    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    /// Add a vertical hole, rejecting positions outside the panel plane
    /// once the panel is dimensioned.
    pub fn add_vertical_hole(&mut self, hole: VerticalHole) -> Result<(), ValidationError> {
        self.check_bounds(hole.x, hole.y)?;
        self.vertical_holes.push(hole);
        Ok(())
    }

    /// Add a horizontal hole, rejecting positions outside the panel
    /// plane once the panel is dimensioned. A far-edge X is exempt from
    /// the X bound.
    pub fn add_horizontal_hole(&mut self, hole: HorizontalHole) -> Result<(), ValidationError> {
        match hole.x {
            Coordinate::Value(x) => self.check_bounds(x, hole.y)?,
            Coordinate::FarEdge => self.check_bounds(0.0, hole.y)?,
        }
        self.horizontal_holes.push(hole);
        Ok(())
    }

    /// Insert a vertical hole without bounds checking.
    ///
    /// For holes whose position is already derived from a valid source:
    /// an interchange file or a transform of an in-bounds panel.
    pub fn push_vertical_hole(&mut self, hole: VerticalHole) {
        self.vertical_holes.push(hole);
    }

    /// Insert a horizontal hole without bounds checking.
    pub fn push_horizontal_hole(&mut self, hole: HorizontalHole) {
        self.horizontal_holes.push(hole);
    }

    fn check_bounds(&self, x: f64, y: f64) -> Result<(), ValidationError> {
        if !self.is_dimensioned() {
            return Ok(());
        }
        if x < 0.0 || x > self.length_x || y < 0.0 || y > self.width_y {
            return Err(ValidationError::OutOfBounds {
                x,
                y,
                length_x: self.length_x,
                width_y: self.width_y,
            });
        }
        Ok(())
    }
}
