// msw-core/src/units.rs

use std::fmt;
use std::str::FromStr;

use uom::si::f64::{Area, Length as UomLength, Volume};

use crate::CoreError;

// Public canonical length type (SI, f64)
pub type Length = UomLength;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

/// Deck unit system. Only the length family (length, area, volume) is
/// needed by the segment model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnitSystem {
    #[default]
    Metric,
    Field,
    Lab,
}

impl UnitSystem {
    /// Deck name of the unit system.
    pub fn name(self) -> &'static str {
        match self {
            UnitSystem::Metric => "METRIC",
            UnitSystem::Field => "FIELD",
            UnitSystem::Lab => "LAB",
        }
    }

    /// Human readable name of the length unit, used in diagnostics.
    pub fn length_name(self) -> &'static str {
        match self {
            UnitSystem::Metric => "meters",
            UnitSystem::Field => "feet",
            UnitSystem::Lab => "cm",
        }
    }

    pub fn length_to_si(self, v: f64) -> f64 {
        use uom::si::length::{centimeter, foot, meter};
        match self {
            UnitSystem::Metric => v,
            UnitSystem::Field => Length::new::<foot>(v).get::<meter>(),
            UnitSystem::Lab => Length::new::<centimeter>(v).get::<meter>(),
        }
    }

    pub fn length_from_si(self, v: f64) -> f64 {
        use uom::si::length::{centimeter, foot};
        let len = m(v);
        match self {
            UnitSystem::Metric => v,
            UnitSystem::Field => len.get::<foot>(),
            UnitSystem::Lab => len.get::<centimeter>(),
        }
    }

    pub fn area_to_si(self, v: f64) -> f64 {
        use uom::si::area::{square_centimeter, square_foot, square_meter};
        match self {
            UnitSystem::Metric => v,
            UnitSystem::Field => Area::new::<square_foot>(v).get::<square_meter>(),
            UnitSystem::Lab => Area::new::<square_centimeter>(v).get::<square_meter>(),
        }
    }

    pub fn volume_to_si(self, v: f64) -> f64 {
        use uom::si::volume::{cubic_centimeter, cubic_foot, cubic_meter};
        match self {
            UnitSystem::Metric => v,
            UnitSystem::Field => Volume::new::<cubic_foot>(v).get::<cubic_meter>(),
            UnitSystem::Lab => Volume::new::<cubic_centimeter>(v).get::<cubic_meter>(),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnitSystem {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "METRIC" => Ok(UnitSystem::Metric),
            "FIELD" => Ok(UnitSystem::Field),
            "LAB" => Ok(UnitSystem::Lab),
            _ => Err(CoreError::UnknownUnitSystem {
                name: s.to_string(),
            }),
        }
    }
}
