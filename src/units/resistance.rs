use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conversion::{ElectricUnit, UnitConverter};
use crate::quantity::QuantityKind;

/// 전기 저항 단위. 내부 기준은 옴(Ω)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ResistanceUnit {
    Ohm = 0,
    Kiloohm = 1,
    Megaohm = 2,
    Milliohm = 3,
    Microohm = 4,
    VoltPerAmpere = 5,
    Abohm = 6,
    Statohm = 7,
}

impl ElectricUnit for ResistanceUnit {
    const QUANTITY: QuantityKind = QuantityKind::Resistance;
    const REFERENCE: Self = ResistanceUnit::Ohm;
    const ALL: &'static [Self] = &[
        ResistanceUnit::Ohm,
        ResistanceUnit::Kiloohm,
        ResistanceUnit::Megaohm,
        ResistanceUnit::Milliohm,
        ResistanceUnit::Microohm,
        ResistanceUnit::VoltPerAmpere,
        ResistanceUnit::Abohm,
        ResistanceUnit::Statohm,
    ];

    fn factor(self) -> f64 {
        match self {
            ResistanceUnit::Ohm | ResistanceUnit::VoltPerAmpere => 1.0,
            ResistanceUnit::Kiloohm => 1e-3,
            ResistanceUnit::Megaohm => 1e-6,
            ResistanceUnit::Milliohm => 1e3,
            ResistanceUnit::Microohm => 1e6,
            ResistanceUnit::Abohm => 1e9,
            // 1 / (c² × 10⁻⁹)
            ResistanceUnit::Statohm => 1.112_650_056_053_618_5e-12,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            ResistanceUnit::Ohm => "Ω",
            ResistanceUnit::Kiloohm => "kΩ",
            ResistanceUnit::Megaohm => "MΩ",
            ResistanceUnit::Milliohm => "mΩ",
            ResistanceUnit::Microohm => "µΩ",
            ResistanceUnit::VoltPerAmpere => "V/A",
            ResistanceUnit::Abohm => "abΩ",
            ResistanceUnit::Statohm => "statΩ",
        }
    }

    fn name(self) -> &'static str {
        match self {
            ResistanceUnit::Ohm => "ohm",
            ResistanceUnit::Kiloohm => "kiloohm",
            ResistanceUnit::Megaohm => "megaohm",
            ResistanceUnit::Milliohm => "milliohm",
            ResistanceUnit::Microohm => "microohm",
            ResistanceUnit::VoltPerAmpere => "volt per ampere",
            ResistanceUnit::Abohm => "abohm",
            ResistanceUnit::Statohm => "statohm",
        }
    }

    fn ordinal(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for ResistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

pub type ResistanceConverter = UnitConverter<ResistanceUnit>;

/// 저항을 변환한다.
pub fn convert_resistance(value: f64, from: ResistanceUnit, to: ResistanceUnit) -> f64 {
    ResistanceConverter::new().convert(from, value, to)
}
