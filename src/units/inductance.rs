use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conversion::{ElectricUnit, UnitConverter};
use crate::quantity::QuantityKind;

/// 인덕턴스 단위. 내부 기준은 헨리(H)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum InductanceUnit {
    Henry = 0,
    Kilohenry = 1,
    Millihenry = 2,
    Microhenry = 3,
    Nanohenry = 4,
    WeberPerAmpere = 5,
    Abhenry = 6,
    Stathenry = 7,
}

impl ElectricUnit for InductanceUnit {
    const QUANTITY: QuantityKind = QuantityKind::Inductance;
    const REFERENCE: Self = InductanceUnit::Henry;
    const ALL: &'static [Self] = &[
        InductanceUnit::Henry,
        InductanceUnit::Kilohenry,
        InductanceUnit::Millihenry,
        InductanceUnit::Microhenry,
        InductanceUnit::Nanohenry,
        InductanceUnit::WeberPerAmpere,
        InductanceUnit::Abhenry,
        InductanceUnit::Stathenry,
    ];

    fn factor(self) -> f64 {
        match self {
            InductanceUnit::Henry | InductanceUnit::WeberPerAmpere => 1.0,
            InductanceUnit::Kilohenry => 1e-3,
            InductanceUnit::Millihenry => 1e3,
            InductanceUnit::Microhenry => 1e6,
            InductanceUnit::Nanohenry => 1e9,
            InductanceUnit::Abhenry => 1e9,
            InductanceUnit::Stathenry => 1.112_650_056_053_618_5e-12,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            InductanceUnit::Henry => "H",
            InductanceUnit::Kilohenry => "kH",
            InductanceUnit::Millihenry => "mH",
            InductanceUnit::Microhenry => "µH",
            InductanceUnit::Nanohenry => "nH",
            InductanceUnit::WeberPerAmpere => "Wb/A",
            InductanceUnit::Abhenry => "abH",
            InductanceUnit::Stathenry => "statH",
        }
    }

    fn name(self) -> &'static str {
        match self {
            InductanceUnit::Henry => "henry",
            InductanceUnit::Kilohenry => "kilohenry",
            InductanceUnit::Millihenry => "millihenry",
            InductanceUnit::Microhenry => "microhenry",
            InductanceUnit::Nanohenry => "nanohenry",
            InductanceUnit::WeberPerAmpere => "weber per ampere",
            InductanceUnit::Abhenry => "abhenry",
            InductanceUnit::Stathenry => "stathenry",
        }
    }

    fn ordinal(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for InductanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

pub type InductanceConverter = UnitConverter<InductanceUnit>;

pub fn convert_inductance(value: f64, from: InductanceUnit, to: InductanceUnit) -> f64 {
    InductanceConverter::new().convert(from, value, to)
}
