//! Deck validation logic.
//!
//! Structural checks that do not need the segment tree to be resolved.
//! Topology problems (broken outlet chains, ambiguous branches) surface
//! later as segment errors.

use std::collections::HashSet;
use std::str::FromStr;

use msw_segments::{CompPressureDrop, GeometryMode, MultiPhaseModel};

use crate::schema::{DeckFile, WellDef};

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate well: {well}")]
    DuplicateWell { well: String },

    #[error("Duplicate segment {segment} in well {well}")]
    DuplicateSegment { well: String, segment: i32 },

    #[error("Well {well}: {context} references undefined segment {segment}")]
    MissingSegment {
        well: String,
        segment: i32,
        context: String,
    },

    #[error("Well {well}: segment {segment} carries more than one device")]
    DuplicateDevice { well: String, segment: i32 },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_deck(deck: &DeckFile) -> Result<(), ValidationError> {
    if deck.version == 0 || deck.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: deck.version,
        });
    }

    let mut names = HashSet::new();
    for well in &deck.wells {
        if well.name().trim().is_empty() {
            return Err(invalid("welsegs.well", "", "well name must not be empty"));
        }
        if !names.insert(well.name()) {
            return Err(ValidationError::DuplicateWell {
                well: well.name().to_string(),
            });
        }
        validate_well(well)?;
    }

    Ok(())
}

fn validate_well(well: &WellDef) -> Result<(), ValidationError> {
    let welsegs = &well.welsegs;
    parse_setting::<GeometryMode>("info_type", &welsegs.info_type)?;
    parse_setting::<CompPressureDrop>("pressure_components", &welsegs.pressure_components)?;
    parse_setting::<MultiPhaseModel>("flow_model", &welsegs.flow_model)?;

    // Segment 1 is implied by the header.
    let mut segments: HashSet<i32> = HashSet::from([1]);
    for record in &welsegs.records {
        if record.segment1 < 2 || record.segment1 > record.segment2 {
            // Reported with full context by the segment builder.
            continue;
        }
        for n in record.segment1..=record.segment2 {
            if !segments.insert(n) {
                return Err(ValidationError::DuplicateSegment {
                    well: well.name().to_string(),
                    segment: n,
                });
            }
        }
        if record.length <= 0.0 && welsegs.info_type.eq_ignore_ascii_case("INC") {
            return Err(invalid(
                "records.length",
                &record.length.to_string(),
                "must be positive",
            ));
        }
        if record.diameter <= 0.0 {
            return Err(invalid(
                "records.diameter",
                &record.diameter.to_string(),
                "must be positive",
            ));
        }
    }

    let require = |segment: i32, context: &str| {
        if segments.contains(&segment) {
            Ok(())
        } else {
            Err(ValidationError::MissingSegment {
                well: well.name().to_string(),
                segment,
                context: context.to_string(),
            })
        }
    };

    let mut with_device = HashSet::new();
    let device_segments = well
        .sicd
        .iter()
        .map(|d| (d.icd.segment, "sicd"))
        .chain(well.aicd.iter().map(|d| (d.icd.segment, "aicd")))
        .chain(well.valves.iter().map(|v| (v.segment, "valves")));
    for (segment, context) in device_segments {
        require(segment, context)?;
        if !with_device.insert(segment) {
            return Err(ValidationError::DuplicateDevice {
                well: well.name().to_string(),
                segment,
            });
        }
    }

    for connection in &well.connections {
        if let Some(segment) = connection.segment {
            require(segment, "connections")?;
        }
        if connection.branch < 1 {
            return Err(invalid(
                "connections.branch",
                &connection.branch.to_string(),
                "must be at least 1",
            ));
        }
        if connection.perf_end < connection.perf_start {
            return Err(invalid(
                "connections.perf_end",
                &connection.perf_end.to_string(),
                "must not be smaller than perf_start",
            ));
        }
    }

    Ok(())
}

fn parse_setting<T: FromStr>(field: &str, value: &str) -> Result<T, ValidationError> {
    value
        .parse::<T>()
        .map_err(|_| invalid(field, value, "unknown setting"))
}

fn invalid(field: &str, value: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
