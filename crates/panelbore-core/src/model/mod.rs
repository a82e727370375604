//! Panel, hole, and edge-band value types.

pub mod edges;
pub mod holes;
pub mod panel;

pub use edges::{EdgeBand, EdgeSet};
pub use holes::{Coordinate, Edge, Face, HorizontalHole, VerticalHole};
pub use panel::Panel;
