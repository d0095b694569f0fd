//! msw-deck: deck file format for multi-segment wells.
//!
//! A deck holds, per well, the WELSEGS keyword data plus the devices and
//! perforated connections attached to its segments. Files are YAML or JSON
//! in the deck's unit system; [`build_deck`] converts them to SI, builds
//! every well's resolved [`WellSegments`] and allocates its connections.

pub mod convert;
pub mod schema;
pub mod validate;

use std::path::Path;

use msw_segments::{BuildOptions, DiagnosticSink, SegmentError, WellConnections, WellSegments};

pub use convert::{WellInput, well_input};
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_deck};

pub type DeckResult<T> = Result<T, DeckError>;

/// A resolved well and its connections allocated to segments.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltWell {
    pub segments: WellSegments,
    pub connections: WellConnections,
}

#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Segment error: {0}")]
    Segment(#[from] SegmentError),

    #[error("Unknown well: {well}")]
    UnknownWell { well: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn from_yaml_str(content: &str) -> DeckResult<DeckFile> {
    let deck: DeckFile = serde_yaml::from_str(content)?;
    validate_deck(&deck)?;
    Ok(deck)
}

pub fn from_json_str(content: &str) -> DeckResult<DeckFile> {
    let deck: DeckFile = serde_json::from_str(content)?;
    validate_deck(&deck)?;
    Ok(deck)
}

pub fn load_yaml(path: &Path) -> DeckResult<DeckFile> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &Path, deck: &DeckFile) -> DeckResult<()> {
    validate_deck(deck)?;
    let content = serde_yaml::to_string(deck)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> DeckResult<DeckFile> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

pub fn save_json(path: &Path, deck: &DeckFile) -> DeckResult<()> {
    validate_deck(deck)?;
    let content = serde_json::to_string_pretty(deck)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a deck, choosing the format from the file extension.
pub fn load(path: &Path) -> DeckResult<DeckFile> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}

/// Build options matching the deck's unit system.
pub fn build_options(deck: &DeckFile) -> BuildOptions {
    BuildOptions {
        unit_system: deck.units,
        ..BuildOptions::default()
    }
}

/// Build, resolve and equip one well.
///
/// Connections are allocated on the resolved tree and their perforation
/// lengths stored before the devices, so that ICD flow scaling sees them.
pub fn build_well(
    input: &WellInput,
    options: &BuildOptions,
    sink: &mut dyn DiagnosticSink,
) -> DeckResult<BuiltWell> {
    let mut segments = WellSegments::from_welsegs(&input.welsegs, options, sink)?;
    let connections = segments.allocate_connections(&input.connections)?;
    segments.update_perf_length(&connections);
    if !input.devices.is_empty() {
        segments.update_devices_scaled(input.devices.iter().cloned(), &connections)?;
    }
    tracing::debug!(
        well = segments.well_name(),
        segments = segments.size(),
        devices = input.devices.len(),
        connections = connections.len(),
        "built well"
    );
    Ok(BuiltWell {
        segments,
        connections,
    })
}

/// Build every well of the deck, in deck order.
pub fn build_deck(deck: &DeckFile, sink: &mut dyn DiagnosticSink) -> DeckResult<Vec<BuiltWell>> {
    let options = build_options(deck);
    deck.wells
        .iter()
        .map(|well| build_well(&well_input(well, deck.units)?, &options, sink))
        .collect()
}

/// Build the single well named `name`.
pub fn build_named_well(
    deck: &DeckFile,
    name: &str,
    sink: &mut dyn DiagnosticSink,
) -> DeckResult<BuiltWell> {
    let well = deck
        .wells
        .iter()
        .find(|w| w.name() == name)
        .ok_or_else(|| DeckError::UnknownWell {
            well: name.to_string(),
        })?;
    build_well(&well_input(well, deck.units)?, &build_options(deck), sink)
}
