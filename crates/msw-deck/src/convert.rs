//! Conversion of deck definitions into SI segment-model inputs.

use msw_core::UnitSystem;
use msw_segments::{
    AutoIcd, CompsegsRecord, Device, IcdParameters, IcdStatus, SpiralIcd, Valve, Welsegs,
    WelsegsHeader, WelsegsRecord,
};

use crate::DeckResult;
use crate::schema::{
    AutoIcdDef, ConnectionDef, IcdDef, RecordDef, SpiralIcdDef, StatusDef, ValveDef, WellDef,
    WelsegsDef,
};

/// Everything needed to build one well's segment set, in SI units.
#[derive(Debug, Clone, PartialEq)]
pub struct WellInput {
    pub welsegs: Welsegs,
    /// Devices in deck order: spiral ICDs, then autonomous ICDs, then valves.
    pub devices: Vec<(i32, Device)>,
    /// COMPSEGS entries, allocated once the segment tree is resolved.
    pub connections: Vec<CompsegsRecord>,
}

pub fn well_input(well: &WellDef, units: UnitSystem) -> DeckResult<WellInput> {
    let devices = well
        .sicd
        .iter()
        .map(|d| (d.icd.segment, spiral_icd(d, units).into()))
        .chain(
            well.aicd
                .iter()
                .map(|d| (d.icd.segment, auto_icd(d, units).into())),
        )
        .chain(well.valves.iter().map(|v| (v.segment, valve(v, units).into())))
        .collect();

    Ok(WellInput {
        welsegs: welsegs(&well.welsegs, units)?,
        devices,
        connections: well
            .connections
            .iter()
            .map(|c| connection(c, units))
            .collect(),
    })
}

pub fn welsegs(def: &WelsegsDef, units: UnitSystem) -> DeckResult<Welsegs> {
    let header = WelsegsHeader::new(
        def.well.clone(),
        units.length_to_si(def.top_depth),
        units.length_to_si(def.top_length),
        units.volume_to_si(def.wellbore_volume),
        def.info_type.parse()?,
        def.pressure_components.parse()?,
    )
    .with_flow_model(def.flow_model.parse()?)
    .with_top_xy(units.length_to_si(def.top_x), units.length_to_si(def.top_y));

    Ok(Welsegs {
        header,
        records: def.records.iter().map(|r| record(r, units)).collect(),
    })
}

fn record(def: &RecordDef, units: UnitSystem) -> WelsegsRecord {
    let mut record = WelsegsRecord::new(
        def.segment1,
        def.segment2,
        def.branch,
        def.join_segment,
        units.length_to_si(def.length),
        units.length_to_si(def.depth),
        units.length_to_si(def.diameter),
        units.length_to_si(def.roughness),
    )
    .with_node_xy(
        units.length_to_si(def.length_x),
        units.length_to_si(def.length_y),
    );
    if let Some(area) = def.area {
        record = record.with_area(units.area_to_si(area));
    }
    if let Some(volume) = def.volume {
        record = record.with_volume(units.volume_to_si(volume));
    }
    record
}

fn status(def: StatusDef) -> IcdStatus {
    match def {
        StatusDef::Open => IcdStatus::Open,
        StatusDef::Shut => IcdStatus::Shut,
    }
}

fn icd_parameters(def: &IcdDef, units: UnitSystem) -> IcdParameters {
    // A negative length is a dimensionless scaling factor.
    let length = if def.length > 0.0 {
        units.length_to_si(def.length)
    } else {
        def.length
    };

    let mut params = IcdParameters::new(def.strength, length).with_status(status(def.status));
    if let Some(v) = def.density_calibration {
        params.density_calibration = v;
    }
    if let Some(v) = def.viscosity_calibration {
        params.viscosity_calibration = v;
    }
    if let Some(v) = def.critical_value {
        params.critical_value = v;
    }
    if let Some(v) = def.width_transition {
        params.width_transition_region = v;
    }
    if let Some(v) = def.max_viscosity_ratio {
        params.max_viscosity_ratio = v;
    }
    if let Some(method) = def.method_scaling_factor {
        params = params.with_method_flow_scaling(method);
    }
    params.max_absolute_rate = def.max_absolute_rate;
    params
}

fn spiral_icd(def: &SpiralIcdDef, units: UnitSystem) -> SpiralIcd {
    SpiralIcd::new(icd_parameters(&def.icd, units))
}

fn auto_icd(def: &AutoIcdDef, units: UnitSystem) -> AutoIcd {
    let mut aicd = AutoIcd::new(
        icd_parameters(&def.icd, units),
        def.flow_rate_exponent,
        def.viscosity_exponent,
    );
    let fractions = [
        (def.oil_flow_fraction, &mut aicd.oil_flow_fraction),
        (def.water_flow_fraction, &mut aicd.water_flow_fraction),
        (def.gas_flow_fraction, &mut aicd.gas_flow_fraction),
        (def.oil_viscosity_fraction, &mut aicd.oil_viscosity_fraction),
        (def.water_viscosity_fraction, &mut aicd.water_viscosity_fraction),
        (def.gas_viscosity_fraction, &mut aicd.gas_viscosity_fraction),
    ];
    for (value, slot) in fractions {
        if let Some(v) = value {
            *slot = v;
        }
    }
    aicd
}

fn valve(def: &ValveDef, units: UnitSystem) -> Valve {
    let mut valve = Valve::new(def.flow_coefficient, units.area_to_si(def.cross_area))
        .with_status(status(def.status));
    if let Some(v) = def.additional_length {
        valve = valve.with_additional_length(units.length_to_si(v));
    }
    if let Some(v) = def.pipe_diameter {
        valve = valve.with_pipe_diameter(units.length_to_si(v));
    }
    if let Some(v) = def.pipe_roughness {
        valve = valve.with_pipe_roughness(units.length_to_si(v));
    }
    if let Some(v) = def.pipe_cross_area {
        valve = valve.with_pipe_cross_area(units.area_to_si(v));
    }
    if let Some(v) = def.max_cross_area {
        valve = valve.with_max_cross_area(units.area_to_si(v));
    }
    valve
}

fn connection(def: &ConnectionDef, units: UnitSystem) -> CompsegsRecord {
    let mut record = CompsegsRecord::new(
        def.branch,
        units.length_to_si(def.perf_start),
        units.length_to_si(def.perf_end),
    );
    if let Some(segment) = def.segment {
        record = record.with_segment(segment);
    }
    if let Some(depth) = def.center_depth {
        record = record.with_center_depth(units.length_to_si(depth));
    }
    record
}
