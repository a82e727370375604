//! MPR format encoder
//!
//! Serializes a panel back into interchange text: program header with
//! the dimension directives, variable and workpiece blocks, one
//! drilling record per hole, then comments and edge bands. The output
//! re-decodes to the same dimensions, edge assignment, and hole set.
//!
//! By default every hole gets its own record. With
//! [`EncodeOptions::group_runs`] equal-spaced runs of identical
//! vertical holes are compressed into replication groups; a run is only
//! compressed when re-expansion reproduces the exact positions, so the
//! round-trip contract holds either way.

use crate::format::{
    self, ATTR_BAND_BOTTOM, ATTR_BAND_LEFT, ATTR_BAND_RIGHT, ATTR_BAND_TOP, DIM_LENGTH,
    DIM_THICKNESS, DIM_WIDTH, FAR_EDGE_TOKEN, FORMAT_VERSION, WOODWOP_VERSION,
};
use panelbore_core::model::{Coordinate, HorizontalHole, Panel, VerticalHole};
use panelbore_core::units::format_mm;
use serde::{Deserialize, Serialize};

/// Encoder options.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Compress equal-spaced vertical hole runs into replication
    /// groups. Off by default.
    pub group_runs: bool,
}

/// Encode a panel as MPR interchange text, one record per hole.
pub fn encode(panel: &Panel) -> String {
    encode_with_options(panel, EncodeOptions::default())
}

/// Encode a panel with explicit options.
pub fn encode_with_options(panel: &Panel, options: EncodeOptions) -> String {
    let mut out: Vec<String> = Vec::new();

    push_header(&mut out, panel);
    push_variables(&mut out, panel);
    push_workpiece(&mut out);

    let runs = if options.group_runs {
        group_vertical_runs(panel.vertical_holes())
    } else {
        panel
            .vertical_holes()
            .iter()
            .map(|&hole| VerticalRun {
                hole,
                count: 1,
                distance: 0.0,
            })
            .collect()
    };
    for run in &runs {
        out.push(String::new());
        push_vertical_record(&mut out, run);
    }

    for hole in panel.horizontal_holes() {
        out.push(String::new());
        push_horizontal_record(&mut out, hole);
    }

    if !panel.comments().is_empty() {
        out.push(String::new());
        push_comments(&mut out, panel);
    }

    if !panel.edges().is_empty() {
        out.push(String::new());
        push_edge_bands(&mut out, panel);
    }

    out.push("!".to_string());
    out.join("\r\n")
}

fn push_header(out: &mut Vec<String>, panel: &Panel) {
    out.push("[H".to_string());
    out.push(format!("VERSION=\"{}\"", FORMAT_VERSION));
    out.push(format!("WW=\"{}\"", WOODWOP_VERSION));
    for line in [
        "OP=\"1\"",
        "WRK2=\"0\"",
        "SCHN=\"0\"",
        "HSP=\"0\"",
        "O2=\"0\"",
        "O4=\"0\"",
        "O3=\"0\"",
        "O5=\"0\"",
        "SR=\"0\"",
        "FM=\"1\"",
        "ML=\"2000\"",
        "UF=\"STANDARD\"",
        "DN=\"STANDARD\"",
        "GP=\"0\"",
        "GY=\"0\"",
        "GXY=\"0\"",
        "NP=\"1\"",
        "NE=\"0\"",
        "NA=\"0\"",
        "BFS=\"1\"",
        "US=\"0\"",
        "CB=\"0\"",
        "UP=\"0\"",
        "DW=\"0\"",
        "MAT=\"HOMAG\"",
        "INCH=\"0\"",
        "VIEW=\"NOMIRROR\"",
        "ANZ=\"1\"",
        "BES=\"0\"",
        "ENT=\"0\"",
    ] {
        out.push(line.to_string());
    }
    out.push(format!("{}={}", DIM_LENGTH, dim_value(panel.length_x())));
    out.push(format!("{}={}", DIM_WIDTH, dim_value(panel.width_y())));
    out.push(format!("{}={}", DIM_THICKNESS, dim_value(panel.thickness_z())));
    out.push("_FNX=0.000000".to_string());
    out.push("_FNY=0.000000".to_string());
    out.push("_RNX=0.000000".to_string());
    out.push("_RNY=0.000000".to_string());
    out.push("_RNZ=0.000000".to_string());
    out.push(format!("_RX={}", dim_value(panel.length_x())));
    out.push(format!("_RY={}", dim_value(panel.width_y())));
}

/// Dimension directives carry micrometre precision, except for the odd
/// value that does not survive six decimals and falls back to the
/// shortest exact form.
fn dim_value(value: f64) -> String {
    let fixed = format!("{:.6}", value);
    if fixed.parse() == Ok(value) {
        fixed
    } else {
        format!("{}", value)
    }
}

fn push_variables(out: &mut Vec<String>, panel: &Panel) {
    out.push(String::new());
    out.push("[001".to_string());
    out.push(format!("x=\"{}\"", panel.length_x() as i64));
    out.push("KM=\"\"".to_string());
    out.push(format!("y=\"{}\"", panel.width_y() as i64));
    out.push("KM=\"\"".to_string());
    out.push(format!("z=\"{}\"", panel.thickness_z() as i64));
    out.push("KM=\"\"".to_string());
}

fn push_workpiece(out: &mut Vec<String>) {
    out.push(String::new());
    out.push("<100 \\WerkStck\\".to_string());
    out.push("LA=\"x\"".to_string());
    out.push("BR=\"y\"".to_string());
    out.push("DI=\"z\"".to_string());
    out.push("FNX=\"0\"".to_string());
    out.push("FNY=\"0\"".to_string());
    out.push("AX=\"0\"".to_string());
    out.push("AY=\"0\"".to_string());
}

/// A vertical hole plus its replication parameters: `count` holes
/// stepping `distance` along X from `hole`'s position.
struct VerticalRun {
    hole: VerticalHole,
    count: u32,
    distance: f64,
}

fn push_vertical_record(out: &mut Vec<String>, run: &VerticalRun) {
    let hole = &run.hole;
    out.push("<102 \\BohrVert\\".to_string());
    out.push(format!("XA=\"{}\"", format_mm(hole.x)));
    out.push(format!("YA=\"{}\"", format_mm(hole.y)));
    out.push(format!("BM=\"{}\"", format::face_token(hole.face)));
    out.push(format!("DU=\"{}\"", format_mm(hole.diameter)));
    if hole.depth > 0.0 {
        out.push(format!("TI=\"{}\"", format_mm(hole.depth)));
    }
    out.push(format!("AN=\"{}\"", run.count));
    out.push("MI=\"0\"".to_string());
    out.push("S_=\"1\"".to_string());
    out.push(format!("AB=\"{}\"", format_mm(run.distance)));
    out.push("WI=\"0\"".to_string());
    for line in [
        "ZT=\"0\"",
        "RM=\"0\"",
        "VW=\"0\"",
        "HP=\"0\"",
        "SP=\"0\"",
        "YVE=\"0\"",
        "WW=\"60,61,62,88,90,91,92,150\"",
        "ASG=\"2\"",
        "KAT=\"Bohren vertikal\"",
        "MNM=\"Vertical hole\"",
        "ORI=\"\"",
        "MX=\"0\"",
        "MY=\"0\"",
        "MZ=\"0\"",
        "MXF=\"1\"",
        "MYF=\"1\"",
        "MZF=\"1\"",
        "SYA=\"0\"",
        "SYV=\"0\"",
        "KO=\"00\"",
    ] {
        out.push(line.to_string());
    }
}

fn push_horizontal_record(out: &mut Vec<String>, hole: &HorizontalHole) {
    out.push("<103 \\BohrHoriz\\".to_string());
    out.push("MI=\"0\"".to_string());
    let xa = match hole.x {
        Coordinate::Value(x) => format_mm(x),
        Coordinate::FarEdge => FAR_EDGE_TOKEN.to_string(),
    };
    out.push(format!("XA=\"{}\"", xa));
    out.push(format!("YA=\"{}\"", format_mm(hole.y)));
    out.push(format!("ZA=\"{}\"", format_mm(hole.z)));
    out.push(format!("DU=\"{}\"", format_mm(hole.diameter)));
    out.push(format!("TI=\"{}\"", format_mm(hole.depth)));
    out.push("ANA=\"20\"".to_string());
    out.push(format!("BM=\"{}\"", format::edge_token(hole.edge)));
    out.push("AN=\"1\"".to_string());
    out.push("AB=\"0\"".to_string());
    for line in [
        "BM2=\"STD\"",
        "ZT=\"0\"",
        "RM=\"0\"",
        "VW=\"0\"",
        "HP=\"0\"",
        "SP=\"0\"",
        "YVE=\"0\"",
        "WW=\"50,51,52,53,93,94,95,56,153,151\"",
        "ASG=\"2\"",
        "KAT=\"Horizontalbohren\"",
        "MNM=\"Horizontal hole\"",
        "ORI=\"\"",
        "MX=\"0\"",
        "MY=\"0\"",
        "MZ=\"0\"",
        "MXF=\"1\"",
        "MYF=\"1\"",
        "MZF=\"1\"",
        "SYA=\"0\"",
        "SYV=\"0\"",
        "KO=\"00\"",
    ] {
        out.push(line.to_string());
    }
}

fn push_comments(out: &mut Vec<String>, panel: &Panel) {
    out.push("<101 \\Kommentar\\".to_string());
    for comment in panel.comments() {
        out.push(format!("KM=\"{}\"", comment));
    }
    out.push("KAT=\"Kommentar\"".to_string());
    out.push("MNM=\"Comment\"".to_string());
    out.push("ORI=\"\"".to_string());
}

fn push_edge_bands(out: &mut Vec<String>, panel: &Panel) {
    let edges = panel.edges();
    out.push("<110 \\Kanten\\".to_string());
    out.push(format!("{}=\"{}\"", ATTR_BAND_TOP, format::band_token(edges.top)));
    out.push(format!(
        "{}=\"{}\"",
        ATTR_BAND_BOTTOM,
        format::band_token(edges.bottom)
    ));
    out.push(format!("{}=\"{}\"", ATTR_BAND_LEFT, format::band_token(edges.left)));
    out.push(format!(
        "{}=\"{}\"",
        ATTR_BAND_RIGHT,
        format::band_token(edges.right)
    ));
    out.push("KAT=\"Kanten\"".to_string());
    out.push("MNM=\"Edge bands\"".to_string());
    out.push("ORI=\"\"".to_string());
}

/// Compress sorted equal-spaced runs of identical vertical holes.
///
/// A candidate extends a run only when the same Y, diameter, depth and
/// face match and `x0 + distance * i` reproduces its X exactly, so the
/// decoder's expansion gives back the identical hole set.
fn group_vertical_runs(holes: &[VerticalHole]) -> Vec<VerticalRun> {
    let mut sorted: Vec<VerticalHole> = holes.to_vec();
    sorted.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

    let mut runs: Vec<VerticalRun> = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let first = sorted[i];
        let mut count: u32 = 1;
        let mut distance = 0.0;
        while let Some(&next) = sorted.get(i + count as usize) {
            if next.y != first.y
                || next.diameter != first.diameter
                || next.depth != first.depth
                || next.face != first.face
            {
                break;
            }
            if count == 1 {
                let step = next.x - first.x;
                if step <= 0.0 {
                    break;
                }
                distance = step;
            }
            if first.x + distance * count as f64 != next.x {
                break;
            }
            count += 1;
        }
        runs.push(VerticalRun {
            hole: first,
            count,
            distance: if count > 1 { distance } else { 0.0 },
        });
        i += count as usize;
    }
    runs
}
