use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conversion::{ElectricUnit, UnitConverter};
use crate::quantity::QuantityKind;

/// 전하 단위. 내부 기준은 쿨롱(C)이다.
///
/// 번호는 외부에 저장될 수 있으므로 새 단위는 항상 끝에 추가한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ChargeUnit {
    Coulomb = 0,
    Nanocoulomb = 1,
    Microcoulomb = 2,
    Millicoulomb = 3,
    Kilocoulomb = 4,
    Megacoulomb = 5,
    Abcoulomb = 6,
    MilliampereHours = 7,
    AmpereHours = 8,
    Faraday = 9,
    Statcoulomb = 10,
    ElementaryCharge = 11,
}

impl ElectricUnit for ChargeUnit {
    const QUANTITY: QuantityKind = QuantityKind::Charge;
    const REFERENCE: Self = ChargeUnit::Coulomb;
    const ALL: &'static [Self] = &[
        ChargeUnit::Coulomb,
        ChargeUnit::Nanocoulomb,
        ChargeUnit::Microcoulomb,
        ChargeUnit::Millicoulomb,
        ChargeUnit::Kilocoulomb,
        ChargeUnit::Megacoulomb,
        ChargeUnit::Abcoulomb,
        ChargeUnit::MilliampereHours,
        ChargeUnit::AmpereHours,
        ChargeUnit::Faraday,
        ChargeUnit::Statcoulomb,
        ChargeUnit::ElementaryCharge,
    ];

    /// 1 C 에 해당하는 각 단위의 수
    fn factor(self) -> f64 {
        match self {
            ChargeUnit::Coulomb => 1.0,
            ChargeUnit::Nanocoulomb => 1e9,
            ChargeUnit::Microcoulomb => 1e6,
            ChargeUnit::Millicoulomb => 1e3,
            // 검증 필요: 예전 계수표는 0.0001 (1 kC = 10 000 C). SI 접두어 값 1e-3 으로 바꿈.
            ChargeUnit::Kilocoulomb => 1e-3,
            ChargeUnit::Megacoulomb => 1e-6,
            ChargeUnit::Abcoulomb => 0.1,
            ChargeUnit::MilliampereHours => 0.277_777_78,
            ChargeUnit::AmpereHours => 0.000_277_78,
            // 예전 계수표 값 그대로. 물리 상수는 1 / 96485.33 ≈ 1.03643e-5
            ChargeUnit::Faraday => 0.000_010_36,
            ChargeUnit::Statcoulomb => 2_997_924_580.0,
            ChargeUnit::ElementaryCharge => 6.241_509_47e18,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            ChargeUnit::Coulomb => "C",
            ChargeUnit::Nanocoulomb => "nC",
            ChargeUnit::Microcoulomb => "µC",
            ChargeUnit::Millicoulomb => "mC",
            ChargeUnit::Kilocoulomb => "kC",
            ChargeUnit::Megacoulomb => "MC",
            ChargeUnit::Abcoulomb => "abC",
            ChargeUnit::MilliampereHours => "mAh",
            ChargeUnit::AmpereHours => "Ah",
            ChargeUnit::Faraday => "F",
            ChargeUnit::Statcoulomb => "statC",
            ChargeUnit::ElementaryCharge => "e",
        }
    }

    fn name(self) -> &'static str {
        match self {
            ChargeUnit::Coulomb => "coulomb",
            ChargeUnit::Nanocoulomb => "nanocoulomb",
            ChargeUnit::Microcoulomb => "microcoulomb",
            ChargeUnit::Millicoulomb => "millicoulomb",
            ChargeUnit::Kilocoulomb => "kilocoulomb",
            ChargeUnit::Megacoulomb => "megacoulomb",
            ChargeUnit::Abcoulomb => "abcoulomb",
            ChargeUnit::MilliampereHours => "milliampere-hour",
            ChargeUnit::AmpereHours => "ampere-hour",
            ChargeUnit::Faraday => "faraday",
            ChargeUnit::Statcoulomb => "statcoulomb",
            ChargeUnit::ElementaryCharge => "elementary charge",
        }
    }

    fn ordinal(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for ChargeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

pub type ChargeConverter = UnitConverter<ChargeUnit>;

/// 전하를 변환한다.
pub fn convert_charge(value: f64, from: ChargeUnit, to: ChargeUnit) -> f64 {
    ChargeConverter::new().convert(from, value, to)
}
