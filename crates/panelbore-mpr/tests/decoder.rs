//! Decoder integration tests: dimension extraction, block
//! classification, replication expansion, defaults, and failure
//! policies.

use panelbore_core::model::{Coordinate, Edge, EdgeBand, Face};
use panelbore_mpr::{decode, decode_with_options, DecodeMode, DecodeOptions};
use panelbore_core::error::DecodeError;

fn program(body: &str) -> String {
    format!(
        "[H\r\nVERSION=\"4.0 Alpha\"\r\nWW=\"6.0.18\"\r\n_BSX=800.000000\r\n_BSY=300.000000\r\n_BSZ=15.000000\r\n{}!\r\n",
        body
    )
}

#[test]
fn decodes_dimensions_from_header() {
    let panel = decode(&program("")).unwrap();
    assert_eq!(panel.length_x(), 800.0);
    assert_eq!(panel.width_y(), 300.0);
    assert_eq!(panel.thickness_z(), 15.0);
    assert!(panel.is_dimensioned());
    assert_eq!(panel.hole_count(), 0);
}

#[test]
fn rejects_program_without_any_dimension_directive() {
    let text = "[H\r\nVERSION=\"4.0 Alpha\"\r\n!\r\n";
    assert_eq!(decode(text).unwrap_err(), DecodeError::MissingDimensions);
}

#[test]
fn falls_back_to_standard_thickness() {
    let text = "[H\r\n_BSX=800.000000\r\n_BSY=300.000000\r\n!\r\n";
    let panel = decode(text).unwrap();
    assert_eq!(panel.thickness_z(), 15.0);
}

#[test]
fn missing_length_and_width_decode_as_undimensioned() {
    let text = "[H\r\n_BSZ=18.000000\r\n!\r\n";
    let panel = decode(text).unwrap();
    assert_eq!(panel.length_x(), 0.0);
    assert_eq!(panel.width_y(), 0.0);
    assert!(!panel.is_dimensioned());
}

#[test]
fn expands_vertical_replication_along_x() {
    let body = "<102 \\BohrVert\\\r\nXA=\"10\"\r\nYA=\"20\"\r\nDU=\"5\"\r\nAN=\"3\"\r\nAB=\"50\"\r\nWI=\"0\"\r\n";
    let panel = decode(&program(body)).unwrap();
    let holes = panel.vertical_holes();
    assert_eq!(holes.len(), 3);
    let positions: Vec<(f64, f64)> = holes.iter().map(|h| (h.x, h.y)).collect();
    assert_eq!(positions, vec![(10.0, 20.0), (60.0, 20.0), (110.0, 20.0)]);
}

#[test]
fn expands_vertical_replication_along_y() {
    let body = "<102 \\BohrVert\\\r\nXA=\"10\"\r\nYA=\"20\"\r\nDU=\"5\"\r\nAN=\"3\"\r\nAB=\"32\"\r\nWI=\"90\"\r\n";
    let panel = decode(&program(body)).unwrap();
    let positions: Vec<(f64, f64)> = panel.vertical_holes().iter().map(|h| (h.x, h.y)).collect();
    assert_eq!(positions, vec![(10.0, 20.0), (10.0, 52.0), (10.0, 84.0)]);
}

#[test]
fn accepts_attributes_in_any_order() {
    let body = "<102 \\BohrVert\\\r\nDU=\"8\"\r\nTI=\"12\"\r\nBM=\"LI\"\r\nYA=\"65\"\r\nXA=\"24\"\r\n";
    let panel = decode(&program(body)).unwrap();
    let hole = panel.vertical_holes()[0];
    assert_eq!((hole.x, hole.y), (24.0, 65.0));
    assert_eq!(hole.diameter, 8.0);
    assert_eq!(hole.depth, 12.0);
    assert_eq!(hole.face, Face::Bottom);
}

#[test]
fn vertical_optional_attributes_default() {
    let body = "<102 \\BohrVert\\\r\nXA=\"24\"\r\nYA=\"65\"\r\nDU=\"12\"\r\n";
    let panel = decode(&program(body)).unwrap();
    let hole = panel.vertical_holes()[0];
    assert_eq!(hole.depth, 0.0);
    assert!(hole.is_through());
    assert_eq!(hole.face, Face::Top);
    assert_eq!(panel.vertical_holes().len(), 1);
}

#[test]
fn horizontal_z_defaults_to_half_thickness() {
    let body = "<103 \\BohrHoriz\\\r\nXA=\"0\"\r\nYA=\"150\"\r\nDU=\"8\"\r\n";
    let panel = decode(&program(body)).unwrap();
    let hole = panel.horizontal_holes()[0];
    assert_eq!(hole.z, 7.5);
    assert_eq!(hole.edge, Edge::Front);
    assert_eq!(hole.x, Coordinate::Value(0.0));
}

#[test]
fn horizontal_edge_marker_tokens() {
    for (token, edge) in [
        ("YP", Edge::Front),
        ("YM", Edge::Back),
        ("XP", Edge::Left),
        ("XM", Edge::Right),
    ] {
        let body = format!(
            "<103 \\BohrHoriz\\\r\nXA=\"0\"\r\nYA=\"150\"\r\nZA=\"7.5\"\r\nDU=\"8\"\r\nBM=\"{}\"\r\n",
            token
        );
        let panel = decode(&program(&body)).unwrap();
        assert_eq!(panel.horizontal_holes()[0].edge, edge);
    }
}

#[test]
fn horizontal_far_edge_token_decodes_to_sentinel() {
    let body = "<103 \\BohrHoriz\\\r\nXA=\"x\"\r\nYA=\"150\"\r\nZA=\"7.5\"\r\nDU=\"8\"\r\nTI=\"22\"\r\nBM=\"XM\"\r\n";
    let panel = decode(&program(body)).unwrap();
    let hole = panel.horizontal_holes()[0];
    assert!(hole.x.is_far_edge());
    assert_eq!(hole.edge, Edge::Right);
}

#[test]
fn horizontal_replication_steps_y_and_keeps_sentinel() {
    let body = "<103 \\BohrHoriz\\\r\nXA=\"x\"\r\nYA=\"150\"\r\nDU=\"8\"\r\nAN=\"2\"\r\nAB=\"32\"\r\n";
    let panel = decode(&program(body)).unwrap();
    let holes = panel.horizontal_holes();
    assert_eq!(holes.len(), 2);
    // WI defaults to 90 on horizontal records, so Y advances.
    assert_eq!(holes[0].y, 150.0);
    assert_eq!(holes[1].y, 182.0);
    assert!(holes[0].x.is_far_edge());
    assert!(holes[1].x.is_far_edge());
}

#[test]
fn far_edge_never_advances_along_x() {
    let body = "<103 \\BohrHoriz\\\r\nXA=\"x\"\r\nYA=\"150\"\r\nDU=\"8\"\r\nAN=\"3\"\r\nAB=\"50\"\r\nWI=\"0\"\r\n";
    let panel = decode(&program(body)).unwrap();
    let holes = panel.horizontal_holes();
    assert_eq!(holes.len(), 3);
    for hole in holes {
        assert!(hole.x.is_far_edge());
        assert_eq!(hole.y, 150.0);
    }
}

#[test]
fn numeric_x_advances_in_replicated_group() {
    let body = "<103 \\BohrHoriz\\\r\nXA=\"100\"\r\nYA=\"150\"\r\nDU=\"8\"\r\nAN=\"3\"\r\nAB=\"50\"\r\nWI=\"0\"\r\n";
    let panel = decode(&program(body)).unwrap();
    let xs: Vec<Coordinate> = panel.horizontal_holes().iter().map(|h| h.x).collect();
    assert_eq!(
        xs,
        vec![
            Coordinate::Value(100.0),
            Coordinate::Value(150.0),
            Coordinate::Value(200.0)
        ]
    );
}

#[test]
fn strict_mode_aborts_on_missing_required_attribute() {
    let body = "<100 \\WerkStck\\\r\nLA=\"x\"\r\n\r\n<102 \\BohrVert\\\r\nXA=\"10\"\r\nDU=\"5\"\r\n";
    let err = decode(&program(body)).unwrap_err();
    assert_eq!(err, DecodeError::MalformedHole { block_index: 1 });
}

#[test]
fn zero_diameter_is_malformed() {
    let body = "<102 \\BohrVert\\\r\nXA=\"10\"\r\nYA=\"20\"\r\nDU=\"0\"\r\n";
    let err = decode(&program(body)).unwrap_err();
    assert_eq!(err, DecodeError::MalformedHole { block_index: 0 });
}

#[test]
fn lenient_mode_skips_and_counts_malformed_blocks() {
    let body = "<102 \\BohrVert\\\r\nXA=\"10\"\r\nDU=\"5\"\r\n\r\n<102 \\BohrVert\\\r\nXA=\"24\"\r\nYA=\"65\"\r\nDU=\"12\"\r\n";
    let report = decode_with_options(
        &program(body),
        DecodeOptions {
            mode: DecodeMode::Lenient,
        },
    )
    .unwrap();
    assert_eq!(report.skipped_blocks, 1);
    assert_eq!(report.panel.vertical_holes().len(), 1);
    assert_eq!(report.panel.vertical_holes()[0].x, 24.0);
}

#[test]
fn unknown_blocks_are_ignored() {
    let body = "<139 \\Komponente\\\r\nIN=\"ZP500.mpr\"\r\nVA=\"X1 125\"\r\nVA=\"X2 _BSX-125\"\r\n\r\n<102 \\BohrVert\\\r\nXA=\"24\"\r\nYA=\"65\"\r\nDU=\"12\"\r\n";
    let panel = decode(&program(body)).unwrap();
    assert_eq!(panel.hole_count(), 1);
}

#[test]
fn record_code_alone_is_not_enough() {
    // A 102 block without the BohrVert marker is some other record and
    // is skipped, not decoded and not malformed.
    let body = "<102 \\SonderBohr\\\r\nXA=\"10\"\r\nDU=\"5\"\r\n";
    let panel = decode(&program(body)).unwrap();
    assert_eq!(panel.hole_count(), 0);
}

#[test]
fn comment_block_collects_nonempty_lines() {
    let body = "<101 \\Kommentar\\\r\nKM=\"first note\"\r\nKM=\"\"\r\nKM=\"second note\"\r\nKAT=\"Kommentar\"\r\n";
    let panel = decode(&program(body)).unwrap();
    assert_eq!(panel.comments().len(), 2);
    assert_eq!(panel.comments()[0], "first note");
    assert_eq!(panel.comments()[1], "second note");
}

#[test]
fn edge_band_block_decodes_assignment() {
    let body = "<110 \\Kanten\\\r\nOB=\"COR\"\r\nUN=\"\"\r\nLI=\"PARDO\"\r\nRE=\"COR\"\r\n";
    let panel = decode(&program(body)).unwrap();
    assert_eq!(panel.edges().top, EdgeBand::ColorBand);
    assert_eq!(panel.edges().bottom, EdgeBand::None);
    assert_eq!(panel.edges().left, EdgeBand::RawBand);
    assert_eq!(panel.edges().right, EdgeBand::ColorBand);
}

#[test]
fn plain_lf_input_decodes_like_crlf() {
    let crlf = program("<102 \\BohrVert\\\r\nXA=\"10\"\r\nYA=\"20\"\r\nDU=\"5\"\r\n");
    let lf = crlf.replace("\r\n", "\n");
    let a = decode(&crlf).unwrap();
    let b = decode(&lf).unwrap();
    assert_eq!(a, b);
}
