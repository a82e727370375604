//! # Panelbore Core
//!
//! Core types for the Panelbore workspace: the panel geometry model
//! (panels, vertical/horizontal holes, edge bands), the orientation
//! transform engine, and the baseline session store.
//!
//! Everything here is pure and synchronous: values in, values out, no
//! I/O. Decoding and encoding of the MPR interchange format live in the
//! `panelbore-mpr` crate.

pub mod error;
pub mod model;
pub mod session;
pub mod transform;
pub mod units;

pub use error::{DecodeError, Error, Result, TransformError, ValidationError};
pub use model::{
    Coordinate, Edge, EdgeBand, EdgeSet, Face, HorizontalHole, Panel, VerticalHole,
};
pub use session::PanelSession;
pub use transform::{apply, Rotation, Transform};
