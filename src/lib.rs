//! # Panelbore
//!
//! Panel drilling-program toolkit for furniture manufacturing:
//! - MPR interchange-format decoding and encoding
//! - Panel geometry model with vertical/horizontal holes and edge bands
//! - Orientation transforms (quarter-turn rotations, vertical mirror)
//!   always derived from a stored baseline panel
//!
//! ## Architecture
//!
//! Panelbore is organized as a workspace with multiple crates:
//!
//! 1. **panelbore-core** - Panel/hole/edge model, transform engine,
//!    baseline session store, error types
//! 2. **panelbore-mpr** - MPR interchange decoder and encoder
//! 3. **panelbore** - Thin CLI binary that integrates both crates
//!
//! The library crates are pure: text in, values out, text out. All file
//! I/O lives in the binary.

pub use panelbore_core::{
    apply, Coordinate, DecodeError, Edge, EdgeBand, EdgeSet, Error, Face, HorizontalHole, Panel,
    PanelSession, Result, Rotation, Transform, TransformError, ValidationError, VerticalHole,
};

pub use panelbore_mpr::{
    decode, decode_with_options, encode, encode_with_options, DecodeMode, DecodeOptions,
    DecodeReport, EncodeOptions,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
