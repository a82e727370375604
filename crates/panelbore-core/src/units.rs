//! Millimetre helpers
//!
//! All coordinates in Panelbore are metric millimetres. This module holds
//! the working tolerance, the rounding applied to every transformed
//! coordinate, and the integer-or-one-decimal formatting the interchange
//! format uses for attribute values.

/// The domain's working tolerance: drilling positions are meaningful to
/// a tenth of a millimetre.
pub const WORKING_TOLERANCE_MM: f64 = 0.1;

/// Round a coordinate to the 0.1 mm working tolerance.
pub fn round_mm(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format a length the way the interchange format writes attribute
/// values: whole numbers bare, fractional values with the shortest
/// representation that parses back to the same number.
pub fn format_mm(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Parse a length attribute value to millimetres.
pub fn parse_mm(input: &str) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty length value".to_string());
    }
    input.parse::<f64>().map_err(|e| e.to_string())
}
