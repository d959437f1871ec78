use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conversion::{ElectricUnit, UnitConverter};
use crate::quantity::QuantityKind;

/// 정전용량 단위. 내부 기준은 패럿(F)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum CapacitanceUnit {
    Farad = 0,
    Exafarad = 1,
    Petafarad = 2,
    Terafarad = 3,
    Gigafarad = 4,
    Megafarad = 5,
    Kilofarad = 6,
    Hectofarad = 7,
    Dekafarad = 8,
    Decifarad = 9,
    Centifarad = 10,
    Millifarad = 11,
    Microfarad = 12,
    Nanofarad = 13,
    Picofarad = 14,
    Femtofarad = 15,
    Attofarad = 16,
    CoulombPerVolt = 17,
    Abfarad = 18,
    EmuOfCapacitance = 19,
    Statfarad = 20,
    EsuOfCapacitance = 21,
}

/// c² × 10⁻⁹ (c = 299 792 458 m/s). 1 F 에 해당하는 statfarad 수.
const STATFARAD_PER_FARAD: f64 = 8.987_551_787_368_176e11;

impl ElectricUnit for CapacitanceUnit {
    const QUANTITY: QuantityKind = QuantityKind::Capacitance;
    const REFERENCE: Self = CapacitanceUnit::Farad;
    const ALL: &'static [Self] = &[
        CapacitanceUnit::Farad,
        CapacitanceUnit::Exafarad,
        CapacitanceUnit::Petafarad,
        CapacitanceUnit::Terafarad,
        CapacitanceUnit::Gigafarad,
        CapacitanceUnit::Megafarad,
        CapacitanceUnit::Kilofarad,
        CapacitanceUnit::Hectofarad,
        CapacitanceUnit::Dekafarad,
        CapacitanceUnit::Decifarad,
        CapacitanceUnit::Centifarad,
        CapacitanceUnit::Millifarad,
        CapacitanceUnit::Microfarad,
        CapacitanceUnit::Nanofarad,
        CapacitanceUnit::Picofarad,
        CapacitanceUnit::Femtofarad,
        CapacitanceUnit::Attofarad,
        CapacitanceUnit::CoulombPerVolt,
        CapacitanceUnit::Abfarad,
        CapacitanceUnit::EmuOfCapacitance,
        CapacitanceUnit::Statfarad,
        CapacitanceUnit::EsuOfCapacitance,
    ];

    fn factor(self) -> f64 {
        match self {
            CapacitanceUnit::Farad | CapacitanceUnit::CoulombPerVolt => 1.0,
            CapacitanceUnit::Exafarad => 1e-18,
            CapacitanceUnit::Petafarad => 1e-15,
            CapacitanceUnit::Terafarad => 1e-12,
            // 검증 필요: 예전 계수표는 10E-9 (= 1e-8). SI 접두어 값 1e-9 로 바꿈.
            CapacitanceUnit::Gigafarad => 1e-9,
            CapacitanceUnit::Megafarad => 1e-6,
            CapacitanceUnit::Kilofarad => 1e-3,
            CapacitanceUnit::Hectofarad => 1e-2,
            CapacitanceUnit::Dekafarad => 1e-1,
            CapacitanceUnit::Decifarad => 1e1,
            CapacitanceUnit::Centifarad => 1e2,
            CapacitanceUnit::Millifarad => 1e3,
            CapacitanceUnit::Microfarad => 1e6,
            CapacitanceUnit::Nanofarad => 1e9,
            CapacitanceUnit::Picofarad => 1e12,
            CapacitanceUnit::Femtofarad => 1e15,
            CapacitanceUnit::Attofarad => 1e18,
            CapacitanceUnit::Abfarad | CapacitanceUnit::EmuOfCapacitance => 1e-9,
            CapacitanceUnit::Statfarad | CapacitanceUnit::EsuOfCapacitance => {
                STATFARAD_PER_FARAD
            }
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            CapacitanceUnit::Farad => "F",
            CapacitanceUnit::Exafarad => "EF",
            CapacitanceUnit::Petafarad => "PF",
            CapacitanceUnit::Terafarad => "TF",
            CapacitanceUnit::Gigafarad => "GF",
            CapacitanceUnit::Megafarad => "MF",
            CapacitanceUnit::Kilofarad => "kF",
            CapacitanceUnit::Hectofarad => "hF",
            CapacitanceUnit::Dekafarad => "daF",
            CapacitanceUnit::Decifarad => "dF",
            CapacitanceUnit::Centifarad => "cF",
            CapacitanceUnit::Millifarad => "mF",
            CapacitanceUnit::Microfarad => "µF",
            CapacitanceUnit::Nanofarad => "nF",
            CapacitanceUnit::Picofarad => "pF",
            CapacitanceUnit::Femtofarad => "fF",
            CapacitanceUnit::Attofarad => "aF",
            CapacitanceUnit::CoulombPerVolt => "C/V",
            CapacitanceUnit::Abfarad => "abF",
            CapacitanceUnit::EmuOfCapacitance => "EMU",
            CapacitanceUnit::Statfarad => "statF",
            CapacitanceUnit::EsuOfCapacitance => "ESU",
        }
    }

    fn name(self) -> &'static str {
        match self {
            CapacitanceUnit::Farad => "farad",
            CapacitanceUnit::Exafarad => "exafarad",
            CapacitanceUnit::Petafarad => "petafarad",
            CapacitanceUnit::Terafarad => "terafarad",
            CapacitanceUnit::Gigafarad => "gigafarad",
            CapacitanceUnit::Megafarad => "megafarad",
            CapacitanceUnit::Kilofarad => "kilofarad",
            CapacitanceUnit::Hectofarad => "hectofarad",
            CapacitanceUnit::Dekafarad => "dekafarad",
            CapacitanceUnit::Decifarad => "decifarad",
            CapacitanceUnit::Centifarad => "centifarad",
            CapacitanceUnit::Millifarad => "millifarad",
            CapacitanceUnit::Microfarad => "microfarad",
            CapacitanceUnit::Nanofarad => "nanofarad",
            CapacitanceUnit::Picofarad => "picofarad",
            CapacitanceUnit::Femtofarad => "femtofarad",
            CapacitanceUnit::Attofarad => "attofarad",
            CapacitanceUnit::CoulombPerVolt => "coulomb per volt",
            CapacitanceUnit::Abfarad => "abfarad",
            CapacitanceUnit::EmuOfCapacitance => "EMU of capacitance",
            CapacitanceUnit::Statfarad => "statfarad",
            CapacitanceUnit::EsuOfCapacitance => "ESU of capacitance",
        }
    }

    fn ordinal(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for CapacitanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

pub type CapacitanceConverter = UnitConverter<CapacitanceUnit>;

/// 정전용량을 변환한다.
pub fn convert_capacitance(value: f64, from: CapacitanceUnit, to: CapacitanceUnit) -> f64 {
    CapacitanceConverter::new().convert(from, value, to)
}
