use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conversion::{ElectricUnit, UnitConverter};
use crate::quantity::QuantityKind;

/// 전류 단위. 내부 기준은 암페어(A)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum CurrentUnit {
    Ampere = 0,
    Kiloampere = 1,
    Milliampere = 2,
    Microampere = 3,
    Nanoampere = 4,
    Abampere = 5,
    Biot = 6,
    Statampere = 7,
}

impl ElectricUnit for CurrentUnit {
    const QUANTITY: QuantityKind = QuantityKind::Current;
    const REFERENCE: Self = CurrentUnit::Ampere;
    const ALL: &'static [Self] = &[
        CurrentUnit::Ampere,
        CurrentUnit::Kiloampere,
        CurrentUnit::Milliampere,
        CurrentUnit::Microampere,
        CurrentUnit::Nanoampere,
        CurrentUnit::Abampere,
        CurrentUnit::Biot,
        CurrentUnit::Statampere,
    ];

    fn factor(self) -> f64 {
        match self {
            CurrentUnit::Ampere => 1.0,
            CurrentUnit::Kiloampere => 1e-3,
            CurrentUnit::Milliampere => 1e3,
            CurrentUnit::Microampere => 1e6,
            CurrentUnit::Nanoampere => 1e9,
            // biot 는 abampere 의 다른 이름
            CurrentUnit::Abampere | CurrentUnit::Biot => 0.1,
            CurrentUnit::Statampere => 2_997_924_580.0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            CurrentUnit::Ampere => "A",
            CurrentUnit::Kiloampere => "kA",
            CurrentUnit::Milliampere => "mA",
            CurrentUnit::Microampere => "µA",
            CurrentUnit::Nanoampere => "nA",
            CurrentUnit::Abampere => "abA",
            CurrentUnit::Biot => "Bi",
            CurrentUnit::Statampere => "statA",
        }
    }

    fn name(self) -> &'static str {
        match self {
            CurrentUnit::Ampere => "ampere",
            CurrentUnit::Kiloampere => "kiloampere",
            CurrentUnit::Milliampere => "milliampere",
            CurrentUnit::Microampere => "microampere",
            CurrentUnit::Nanoampere => "nanoampere",
            CurrentUnit::Abampere => "abampere",
            CurrentUnit::Biot => "biot",
            CurrentUnit::Statampere => "statampere",
        }
    }

    fn ordinal(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for CurrentUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

pub type CurrentConverter = UnitConverter<CurrentUnit>;

/// 전류를 변환한다.
pub fn convert_current(value: f64, from: CurrentUnit, to: CurrentUnit) -> f64 {
    CurrentConverter::new().convert(from, value, to)
}
