use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conversion::{ElectricUnit, UnitConverter};
use crate::quantity::QuantityKind;

/// 전기 전도도(컨덕턴스) 단위. 내부 기준은 지멘스(S)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ConductivityUnit {
    Siemens = 0,
    Megasiemens = 1,
    Kilosiemens = 2,
    Millisiemens = 3,
    Microsiemens = 4,
    AmperePerVolt = 5,
    Mho = 6,
    Abmho = 7,
    Statmho = 8,
}

impl ElectricUnit for ConductivityUnit {
    const QUANTITY: QuantityKind = QuantityKind::Conductivity;
    const REFERENCE: Self = ConductivityUnit::Siemens;
    const ALL: &'static [Self] = &[
        ConductivityUnit::Siemens,
        ConductivityUnit::Megasiemens,
        ConductivityUnit::Kilosiemens,
        ConductivityUnit::Millisiemens,
        ConductivityUnit::Microsiemens,
        ConductivityUnit::AmperePerVolt,
        ConductivityUnit::Mho,
        ConductivityUnit::Abmho,
        ConductivityUnit::Statmho,
    ];

    fn factor(self) -> f64 {
        match self {
            ConductivityUnit::Siemens | ConductivityUnit::AmperePerVolt | ConductivityUnit::Mho => {
                1.0
            }
            ConductivityUnit::Megasiemens => 1e-6,
            ConductivityUnit::Kilosiemens => 1e-3,
            ConductivityUnit::Millisiemens => 1e3,
            ConductivityUnit::Microsiemens => 1e6,
            ConductivityUnit::Abmho => 1e-9,
            // statfarad 와 같은 c² × 10⁻⁹
            ConductivityUnit::Statmho => 8.987_551_787_368_176e11,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            ConductivityUnit::Siemens => "S",
            ConductivityUnit::Megasiemens => "MS",
            ConductivityUnit::Kilosiemens => "kS",
            ConductivityUnit::Millisiemens => "mS",
            ConductivityUnit::Microsiemens => "µS",
            ConductivityUnit::AmperePerVolt => "A/V",
            ConductivityUnit::Mho => "℧",
            ConductivityUnit::Abmho => "ab℧",
            ConductivityUnit::Statmho => "stat℧",
        }
    }

    fn name(self) -> &'static str {
        match self {
            ConductivityUnit::Siemens => "siemens",
            ConductivityUnit::Megasiemens => "megasiemens",
            ConductivityUnit::Kilosiemens => "kilosiemens",
            ConductivityUnit::Millisiemens => "millisiemens",
            ConductivityUnit::Microsiemens => "microsiemens",
            ConductivityUnit::AmperePerVolt => "ampere per volt",
            ConductivityUnit::Mho => "mho",
            ConductivityUnit::Abmho => "abmho",
            ConductivityUnit::Statmho => "statmho",
        }
    }

    fn ordinal(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for ConductivityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

pub type ConductivityConverter = UnitConverter<ConductivityUnit>;

/// 전도도를 변환한다.
pub fn convert_conductivity(value: f64, from: ConductivityUnit, to: ConductivityUnit) -> f64 {
    ConductivityConverter::new().convert(from, value, to)
}
