use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conversion::{ElectricUnit, UnitConverter};

/// 다루는 전기 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityKind {
    Charge,
    Capacitance,
    Conductivity,
    Current,
    Resistance,
    Inductance,
    Potential,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 7] = [
        QuantityKind::Charge,
        QuantityKind::Capacitance,
        QuantityKind::Conductivity,
        QuantityKind::Current,
        QuantityKind::Resistance,
        QuantityKind::Inductance,
        QuantityKind::Potential,
    ];

    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::Charge => "electric charge",
            QuantityKind::Capacitance => "capacitance",
            QuantityKind::Conductivity => "conductivity",
            QuantityKind::Current => "electric current",
            QuantityKind::Resistance => "resistance",
            QuantityKind::Inductance => "inductance",
            QuantityKind::Potential => "electric potential",
        }
    }

    /// 기준 단위(계수 1)의 기호.
    pub fn reference_symbol(self) -> &'static str {
        match self {
            QuantityKind::Charge => "C",
            QuantityKind::Capacitance => "F",
            QuantityKind::Conductivity => "S",
            QuantityKind::Current => "A",
            QuantityKind::Resistance => "Ω",
            QuantityKind::Inductance => "H",
            QuantityKind::Potential => "V",
        }
    }

    /// 해당 물리량이 지원하는 단위 수.
    pub fn unit_count(self) -> usize {
        use crate::units::*;
        match self {
            QuantityKind::Charge => ChargeUnit::ALL.len(),
            QuantityKind::Capacitance => CapacitanceUnit::ALL.len(),
            QuantityKind::Conductivity => ConductivityUnit::ALL.len(),
            QuantityKind::Current => CurrentUnit::ALL.len(),
            QuantityKind::Resistance => ResistanceUnit::ALL.len(),
            QuantityKind::Inductance => InductanceUnit::ALL.len(),
            QuantityKind::Potential => PotentialUnit::ALL.len(),
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 단위가 붙은 값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement<U> {
    pub value: f64,
    pub unit: U,
}

impl<U: ElectricUnit> Measurement<U> {
    pub fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    pub fn kind(&self) -> QuantityKind {
        U::QUANTITY
    }

    /// 다른 단위로 환산한 새 값을 만든다.
    pub fn to(self, unit: U) -> Self {
        let value = UnitConverter::<U>::new().convert(self.unit, self.value, unit);
        Self { value, unit }
    }

    /// 기준 단위로 환산한 값.
    pub fn to_reference(self) -> Self {
        self.to(U::REFERENCE)
    }
}

impl<U: ElectricUnit> fmt::Display for Measurement<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}
