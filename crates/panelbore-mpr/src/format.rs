//! MPR format vocabulary
//!
//! Record-type codes, type-name markers, attribute keys and value
//! tokens of the MPR drilling-program interchange format. A program is
//! a `[H` header carrying scalar dimension directives, a variable block,
//! a workpiece block, and a sequence of directive blocks each opened by
//! `<NNN \Marker\` and holding `KEY="value"` attribute lines in any
//! order.

use panelbore_core::model::{Edge, EdgeBand, Face};

/// Header format version emitted by the encoder.
pub const FORMAT_VERSION: &str = "4.0 Alpha";
/// WoodWOP compatibility version emitted by the encoder.
pub const WOODWOP_VERSION: &str = "6.0.18";

/// Panel length directive (length along X, mm).
pub const DIM_LENGTH: &str = "_BSX";
/// Panel width directive (width along Y, mm).
pub const DIM_WIDTH: &str = "_BSY";
/// Panel thickness directive (mm).
pub const DIM_THICKNESS: &str = "_BSZ";

/// Thickness fallback when a program carries no `_BSZ` directive:
/// standard 15 mm panel stock.
pub const DEFAULT_THICKNESS_MM: f64 = 15.0;

/// Workpiece definition record.
pub const REC_WORKPIECE: u16 = 100;
/// Free-form comment record.
pub const REC_COMMENT: u16 = 101;
/// Vertical drilling record.
pub const REC_VERTICAL: u16 = 102;
/// Horizontal drilling record.
pub const REC_HORIZONTAL: u16 = 103;
/// Edge-band assignment record.
pub const REC_EDGE_BANDS: u16 = 110;

/// Type-name marker of the workpiece record.
pub const MARKER_WORKPIECE: &str = "WerkStck";
/// Type-name marker of the comment record.
pub const MARKER_COMMENT: &str = "Kommentar";
/// Type-name marker of the vertical drilling record.
pub const MARKER_VERTICAL: &str = "BohrVert";
/// Type-name marker of the horizontal drilling record.
pub const MARKER_HORIZONTAL: &str = "BohrHoriz";
/// Type-name marker of the edge-band record.
pub const MARKER_EDGE_BANDS: &str = "Kanten";

/// Planar X attribute. May hold [`FAR_EDGE_TOKEN`] on horizontal
/// records.
pub const ATTR_X: &str = "XA";
/// Planar Y attribute.
pub const ATTR_Y: &str = "YA";
/// Depth-axis Z attribute (horizontal records only).
pub const ATTR_Z: &str = "ZA";
/// Diameter attribute.
pub const ATTR_DIAMETER: &str = "DU";
/// Depth attribute; 0 or absent means a through hole.
pub const ATTR_DEPTH: &str = "TI";
/// Replication count attribute.
pub const ATTR_COUNT: &str = "AN";
/// Replication distance attribute.
pub const ATTR_DISTANCE: &str = "AB";
/// Replication axis attribute: 0 steps along X, 90 along Y.
pub const ATTR_AXIS: &str = "WI";
/// Face/edge marker attribute.
pub const ATTR_SIDE: &str = "BM";
/// Comment text attribute.
pub const ATTR_COMMENT: &str = "KM";

/// Symbolic X value meaning "the panel's current far end".
pub const FAR_EDGE_TOKEN: &str = "x";

/// Band attribute keys of the edge-band record, one per plan-view side.
pub const ATTR_BAND_TOP: &str = "OB";
pub const ATTR_BAND_BOTTOM: &str = "UN";
pub const ATTR_BAND_LEFT: &str = "LI";
pub const ATTR_BAND_RIGHT: &str = "RE";

const FACE_TOP_TOKEN: &str = "LS";
const FACE_BOTTOM_TOKEN: &str = "LI";

const EDGE_FRONT_TOKEN: &str = "YP";
const EDGE_BACK_TOKEN: &str = "YM";
const EDGE_LEFT_TOKEN: &str = "XP";
const EDGE_RIGHT_TOKEN: &str = "XM";

const BAND_COLOR_TOKEN: &str = "COR";
const BAND_RAW_TOKEN: &str = "PARDO";

/// Wire token of a vertical-hole face marker.
pub fn face_token(face: Face) -> &'static str {
    match face {
        Face::Top => FACE_TOP_TOKEN,
        Face::Bottom => FACE_BOTTOM_TOKEN,
    }
}

/// Face for a `BM` marker token on a vertical record.
pub fn face_from_token(token: &str) -> Option<Face> {
    match token {
        FACE_TOP_TOKEN => Some(Face::Top),
        FACE_BOTTOM_TOKEN => Some(Face::Bottom),
        _ => None,
    }
}

/// Wire token of a horizontal-hole edge marker. The token names the
/// drilling direction: `XP` bores along +X into the x=0 face.
pub fn edge_token(edge: Edge) -> &'static str {
    match edge {
        Edge::Front => EDGE_FRONT_TOKEN,
        Edge::Back => EDGE_BACK_TOKEN,
        Edge::Left => EDGE_LEFT_TOKEN,
        Edge::Right => EDGE_RIGHT_TOKEN,
    }
}

/// Edge for a `BM` marker token on a horizontal record.
pub fn edge_from_token(token: &str) -> Option<Edge> {
    match token {
        EDGE_FRONT_TOKEN => Some(Edge::Front),
        EDGE_BACK_TOKEN => Some(Edge::Back),
        EDGE_LEFT_TOKEN => Some(Edge::Left),
        EDGE_RIGHT_TOKEN => Some(Edge::Right),
        _ => None,
    }
}

/// Wire token of an edge-band value; empty means no band.
pub fn band_token(band: EdgeBand) -> &'static str {
    match band {
        EdgeBand::None => "",
        EdgeBand::ColorBand => BAND_COLOR_TOKEN,
        EdgeBand::RawBand => BAND_RAW_TOKEN,
    }
}

/// Band for an edge-band attribute value.
pub fn band_from_token(token: &str) -> Option<EdgeBand> {
    match token {
        "" => Some(EdgeBand::None),
        BAND_COLOR_TOKEN => Some(EdgeBand::ColorBand),
        BAND_RAW_TOKEN => Some(EdgeBand::RawBand),
        _ => None,
    }
}
