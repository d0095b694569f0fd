use msw_deck::{DeckError, ValidationError, build_deck, build_named_well, from_yaml_str};
use msw_segments::{DiagnosticLog, IcdStatus, SegmentError, SegmentType};

const PROD01: &str = r#"
version: 1
units: metric
wells:
  - welsegs:
      well: PROD01
      top_depth: 2512.5
      top_length: 2512.5
      wellbore_volume: 1.0e-5
      info_type: ABS
      pressure_components: HF-
      records:
        - { segment1: 2, segment2: 2, branch: 1, join_segment: 1, length: 2537.5, depth: 2537.5, diameter: 0.3, roughness: 0.0001 }
        - { segment1: 3, segment2: 3, branch: 1, join_segment: 2, length: 2562.5, depth: 2562.5, diameter: 0.2, roughness: 0.0001 }
        - { segment1: 4, segment2: 4, branch: 2, join_segment: 2, length: 2737.5, depth: 2537.5, diameter: 0.2, roughness: 0.0001 }
        - { segment1: 6, segment2: 6, branch: 2, join_segment: 4, length: 3037.5, depth: 2539.5, diameter: 0.2, roughness: 0.0001 }
        - { segment1: 7, segment2: 7, branch: 2, join_segment: 6, length: 3337.5, depth: 2534.5, diameter: 0.2, roughness: 0.0001 }
        - { segment1: 8, segment2: 8, branch: 3, join_segment: 6, length: 3037.6, depth: 2539.5, diameter: 0.2, roughness: 0.00015 }
    sicd:
      - { segment: 3, strength: 0.002, length: 12.5 }
    valves:
      - { segment: 8, flow_coefficient: 0.002, cross_area: 5.0, status: SHUT }
    connections:
      - { segment: 3, perf_start: 2550.0, perf_end: 2575.0 }
      - { segment: 7, branch: 2, perf_start: 3037.5, perf_end: 3137.5 }
      - { segment: 7, branch: 2, perf_start: 3137.5, perf_end: 3237.5 }
"#;

#[test]
fn builds_well_with_devices_and_perforations() {
    let deck = from_yaml_str(PROD01).unwrap();
    let mut log = DiagnosticLog::default();
    let wells = build_deck(&deck, &mut log).unwrap();

    assert_eq!(wells.len(), 1);
    let set = &wells[0].segments;
    assert_eq!(set.well_name(), "PROD01");
    assert_eq!(set.segment_numbers(), vec![1, 2, 3, 4, 6, 7, 8]);
    assert_eq!(log.warnings().count(), 0);

    let s3 = set.get_from_segment_number(3).unwrap();
    assert_eq!(s3.segment_type(), SegmentType::SpiralIcd);
    // 12.5 m device on a segment whose outlet is 25 m long.
    assert_eq!(s3.spiral_icd().unwrap().params.scaling_factor(), Some(0.5));
    assert_eq!(s3.perf_length(), Some(25.0));

    let s7 = set.get_from_segment_number(7).unwrap();
    assert_eq!(s7.perf_length(), Some(200.0));

    let valve = set.get_from_segment_number(8).unwrap().valve().unwrap();
    assert_eq!(valve.status(), IcdStatus::Shut);
    assert_eq!(valve.pipe_diameter(), Some(0.2));
}

#[test]
fn field_units_are_converted() {
    let yaml = r#"
version: 1
units: field
wells:
  - welsegs:
      well: F1
      top_depth: 1000.0
      top_length: 0.0
      wellbore_volume: 1.0
      info_type: INC
      records:
        - { segment1: 2, segment2: 2, branch: 1, join_segment: 1, length: 100.0, depth: 50.0, diameter: 0.5, roughness: 0.001 }
"#;
    let deck = from_yaml_str(yaml).unwrap();
    let mut log = DiagnosticLog::default();
    let set = build_named_well(&deck, "F1", &mut log).unwrap().segments;

    let s2 = set.get_from_segment_number(2).unwrap();
    assert!((s2.depth() - 320.04).abs() < 1e-9);
    assert!((s2.total_length() - 30.48).abs() < 1e-9);
    assert!((s2.internal_diameter() - 0.1524).abs() < 1e-12);
}

#[test]
fn unknown_well_is_reported() {
    let deck = from_yaml_str(PROD01).unwrap();
    let mut log = DiagnosticLog::default();
    let err = build_named_well(&deck, "NOPE", &mut log).unwrap_err();
    assert!(matches!(err, DeckError::UnknownWell { .. }));
}

#[test]
fn segment_errors_propagate() {
    let yaml = PROD01.replace("pressure_components: HF-", "pressure_components: H--");
    let deck = from_yaml_str(&yaml).unwrap();
    let mut log = DiagnosticLog::default();
    let err = build_deck(&deck, &mut log).unwrap_err();
    assert!(matches!(
        err,
        DeckError::Segment(SegmentError::DeviceRequiresFrictionModel { .. })
    ));
}

#[test]
fn validation_rejects_bad_decks() {
    let cases = [
        (
            PROD01.replace("version: 1", "version: 9"),
            "unsupported version",
        ),
        (PROD01.replace("info_type: ABS", "info_type: XYZ"), "setting"),
        (
            PROD01.replace("- { segment: 8, flow", "- { segment: 5, flow"),
            "missing segment",
        ),
        (
            PROD01.replace("- { segment: 3, strength", "- { segment: 8, strength"),
            "duplicate device",
        ),
        (
            PROD01.replace("perf_start: 2550.0, perf_end: 2575.0", "perf_start: 2575.0, perf_end: 2550.0"),
            "perforation order",
        ),
        (
            PROD01.replace("- { segment: 7, branch: 2, perf_start: 3037.5", "- { branch: 0, perf_start: 3037.5"),
            "connection branch",
        ),
    ];

    for (yaml, case) in cases {
        let err = from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, DeckError::Validation(_)), "{case}: {err}");
    }
}

#[test]
fn duplicate_segment_is_rejected() {
    let yaml = PROD01.replace("segment1: 8, segment2: 8", "segment1: 7, segment2: 8");
    let err = from_yaml_str(&yaml).unwrap_err();
    assert!(matches!(
        err,
        DeckError::Validation(ValidationError::DuplicateSegment { segment: 7, .. })
    ));
}

#[test]
fn non_positive_diameter_is_rejected() {
    for diameter in ["0.0", "-0.2"] {
        let yaml = PROD01.replace(
            "depth: 2562.5, diameter: 0.2",
            &format!("depth: 2562.5, diameter: {diameter}"),
        );
        let err = from_yaml_str(&yaml).unwrap_err();
        match err {
            DeckError::Validation(ValidationError::InvalidValue { field, .. }) => {
                assert_eq!(field, "records.diameter");
            }
            other => panic!("diameter {diameter}: {other}"),
        }
    }
}

#[test]
fn non_positive_incremental_length_is_rejected() {
    let yaml = r#"
version: 1
wells:
  - welsegs:
      well: I1
      top_depth: 1000.0
      top_length: 0.0
      wellbore_volume: 1.0
      info_type: INC
      records:
        - { segment1: 2, segment2: 3, branch: 1, join_segment: 1, length: 0.0, depth: 5.0, diameter: 0.2, roughness: 0.0001 }
"#;
    let err = from_yaml_str(yaml).unwrap_err();
    assert!(matches!(
        err,
        DeckError::Validation(ValidationError::InvalidValue { ref field, .. }) if field == "records.length"
    ));
}

#[test]
fn defaulted_connection_segments_are_allocated_by_depth() {
    let yaml = r#"
version: 1
wells:
  - welsegs:
      well: I2
      top_depth: 1000.0
      top_length: 100.0
      wellbore_volume: 1.0
      info_type: INC
      records:
        - { segment1: 2, segment2: 4, branch: 1, join_segment: 1, length: 10.0, depth: 5.0, diameter: 0.2, roughness: 0.0001 }
        - { segment1: 5, segment2: 5, branch: 2, join_segment: 3, length: 20.0, depth: 0.0, diameter: 0.1, roughness: 0.0001 }
    connections:
      - { perf_start: 112.0, perf_end: 118.0 }
      - { branch: 2, perf_start: 130.0, perf_end: 150.0 }
      - { segment: 4, perf_start: 122.0, perf_end: 128.0, center_depth: 1013.0 }
"#;
    let deck = from_yaml_str(yaml).unwrap();
    let mut log = DiagnosticLog::default();
    let well = build_named_well(&deck, "I2", &mut log).unwrap();

    let allocated: Vec<_> = well
        .connections
        .iter()
        .map(|c| (c.segment, c.center_depth))
        .collect();
    // 115 m is halfway between the nodes of segments 2 and 3.
    assert_eq!(
        allocated,
        vec![(2, Some(1007.5)), (5, Some(1010.0)), (4, Some(1013.0))]
    );
    assert_eq!(well.segments.get_from_segment_number(2).unwrap().perf_length(), Some(6.0));
    assert_eq!(well.segments.get_from_segment_number(5).unwrap().perf_length(), Some(20.0));
}

#[test]
fn unallocatable_connection_is_a_segment_error() {
    let yaml = PROD01.replace("- { segment: 7, branch: 2, perf_start: 3037.5", "- { branch: 9, perf_start: 3037.5");
    let deck = from_yaml_str(&yaml).unwrap();
    let mut log = DiagnosticLog::default();
    let err = build_deck(&deck, &mut log).unwrap_err();
    assert!(matches!(
        err,
        DeckError::Segment(SegmentError::ConnectionNotAllocated { branch: 9, .. })
    ));
}

#[test]
fn duplicate_wells_are_rejected() {
    let body = PROD01.split_once("wells:\n").unwrap().1;
    let yaml = format!("version: 1\nwells:\n{body}{body}");
    let err = from_yaml_str(&yaml).unwrap_err();
    assert!(matches!(
        err,
        DeckError::Validation(ValidationError::DuplicateWell { .. })
    ));
}
