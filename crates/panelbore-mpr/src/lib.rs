//! # Panelbore MPR
//!
//! Decoder and encoder for the MPR drilling-program interchange format
//! used by panel CNC machining centers. The decoder expands compact
//! replicated-hole directives into individual holes; the encoder emits
//! a complete re-decodable program.
//!
//! Both directions are pure text-to-value / value-to-text functions
//! with no I/O; see `panelbore-core` for the panel model they produce
//! and consume.

pub mod decoder;
pub mod encoder;
pub mod format;

pub use decoder::{decode, decode_with_options, DecodeMode, DecodeOptions, DecodeReport};
pub use encoder::{encode, encode_with_options, EncodeOptions};
