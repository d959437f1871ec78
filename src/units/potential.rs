use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conversion::{ElectricUnit, UnitConverter};
use crate::quantity::QuantityKind;

/// 전위(전압) 단위. 내부 기준은 볼트(V)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum PotentialUnit {
    Volt = 0,
    Kilovolt = 1,
    Megavolt = 2,
    Millivolt = 3,
    Microvolt = 4,
    Nanovolt = 5,
    WattPerAmpere = 6,
    Abvolt = 7,
    Statvolt = 8,
}

impl ElectricUnit for PotentialUnit {
    const QUANTITY: QuantityKind = QuantityKind::Potential;
    const REFERENCE: Self = PotentialUnit::Volt;
    const ALL: &'static [Self] = &[
        PotentialUnit::Volt,
        PotentialUnit::Kilovolt,
        PotentialUnit::Megavolt,
        PotentialUnit::Millivolt,
        PotentialUnit::Microvolt,
        PotentialUnit::Nanovolt,
        PotentialUnit::WattPerAmpere,
        PotentialUnit::Abvolt,
        PotentialUnit::Statvolt,
    ];

    fn factor(self) -> f64 {
        match self {
            PotentialUnit::Volt | PotentialUnit::WattPerAmpere => 1.0,
            PotentialUnit::Kilovolt => 1e-3,
            PotentialUnit::Megavolt => 1e-6,
            PotentialUnit::Millivolt => 1e3,
            PotentialUnit::Microvolt => 1e6,
            PotentialUnit::Nanovolt => 1e9,
            PotentialUnit::Abvolt => 1e8,
            // 1 statV = 299.792458 V
            PotentialUnit::Statvolt => 0.003_335_640_951_981_520_4,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            PotentialUnit::Volt => "V",
            PotentialUnit::Kilovolt => "kV",
            PotentialUnit::Megavolt => "MV",
            PotentialUnit::Millivolt => "mV",
            PotentialUnit::Microvolt => "µV",
            PotentialUnit::Nanovolt => "nV",
            PotentialUnit::WattPerAmpere => "W/A",
            PotentialUnit::Abvolt => "abV",
            PotentialUnit::Statvolt => "statV",
        }
    }

    fn name(self) -> &'static str {
        match self {
            PotentialUnit::Volt => "volt",
            PotentialUnit::Kilovolt => "kilovolt",
            PotentialUnit::Megavolt => "megavolt",
            PotentialUnit::Millivolt => "millivolt",
            PotentialUnit::Microvolt => "microvolt",
            PotentialUnit::Nanovolt => "nanovolt",
            PotentialUnit::WattPerAmpere => "watt per ampere",
            PotentialUnit::Abvolt => "abvolt",
            PotentialUnit::Statvolt => "statvolt",
        }
    }

    fn ordinal(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for PotentialUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

pub type PotentialConverter = UnitConverter<PotentialUnit>;

/// 전위를 변환한다.
pub fn convert_potential(value: f64, from: PotentialUnit, to: PotentialUnit) -> f64 {
    PotentialConverter::new().convert(from, value, to)
}
