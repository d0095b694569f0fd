use msw_core::UnitSystem;
use msw_deck::schema::*;
use msw_deck::{load_json, load_yaml, save_json, save_yaml, validate_deck};

fn record(n: i32, branch: i32, join: i32, length: f64, depth: f64) -> RecordDef {
    RecordDef {
        segment1: n,
        segment2: n,
        branch,
        join_segment: join,
        length,
        depth,
        diameter: 0.2,
        roughness: 1.0e-4,
        area: None,
        volume: None,
        length_x: 0.0,
        length_y: 0.0,
    }
}

fn sample_deck() -> DeckFile {
    DeckFile {
        version: 1,
        units: UnitSystem::Metric,
        wells: vec![WellDef {
            welsegs: WelsegsDef {
                well: "PROD01".to_string(),
                top_depth: 2512.5,
                top_length: 2512.5,
                wellbore_volume: 1.0e-5,
                info_type: "ABS".to_string(),
                pressure_components: "HF-".to_string(),
                flow_model: "HO".to_string(),
                top_x: 0.0,
                top_y: 0.0,
                records: vec![
                    record(2, 1, 1, 2537.5, 2537.5),
                    record(3, 1, 2, 2562.5, 2562.5),
                    RecordDef {
                        volume: Some(0.4),
                        ..record(4, 2, 2, 2737.5, 2537.5)
                    },
                ],
            },
            sicd: vec![SpiralIcdDef {
                icd: IcdDef {
                    segment: 3,
                    strength: 0.002,
                    length: -0.7,
                    density_calibration: None,
                    viscosity_calibration: None,
                    critical_value: None,
                    width_transition: None,
                    max_viscosity_ratio: None,
                    method_scaling_factor: None,
                    max_absolute_rate: None,
                    status: StatusDef::Open,
                },
            }],
            aicd: vec![],
            valves: vec![ValveDef {
                segment: 4,
                flow_coefficient: 0.7,
                cross_area: 1.0e-4,
                additional_length: None,
                pipe_diameter: None,
                pipe_roughness: None,
                pipe_cross_area: None,
                max_cross_area: Some(2.0e-4),
                status: StatusDef::Shut,
            }],
            connections: vec![
                ConnectionDef {
                    branch: 1,
                    perf_start: 2550.0,
                    perf_end: 2575.0,
                    segment: Some(3),
                    center_depth: None,
                },
                ConnectionDef {
                    branch: 1,
                    perf_start: 2575.0,
                    perf_end: 2600.0,
                    segment: None,
                    center_depth: Some(2580.0),
                },
            ],
        }],
    }
}

#[test]
fn roundtrip_yaml_empty_deck() {
    let deck = DeckFile {
        version: 1,
        units: UnitSystem::Field,
        wells: vec![],
    };
    validate_deck(&deck).unwrap();

    let path = std::env::temp_dir().join("msw_deck_roundtrip_empty.yaml");
    save_yaml(&path, &deck).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(deck, loaded);
}

#[test]
fn roundtrip_yaml_well_with_devices() {
    let deck = sample_deck();
    let path = std::env::temp_dir().join("msw_deck_roundtrip_devices.yaml");

    save_yaml(&path, &deck).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(deck, loaded);
}

#[test]
fn roundtrip_json_well_with_devices() {
    let deck = sample_deck();
    let path = std::env::temp_dir().join("msw_deck_roundtrip_devices.json");

    save_json(&path, &deck).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(deck, loaded);
}

#[test]
fn save_rejects_invalid_deck() {
    let mut deck = sample_deck();
    deck.version = 7;
    let path = std::env::temp_dir().join("msw_deck_roundtrip_invalid.yaml");
    assert!(save_yaml(&path, &deck).is_err());
}
