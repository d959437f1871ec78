use std::fmt;
use std::marker::PhantomData;

use thiserror::Error;
use tracing::{debug, trace};

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 열거형 범위를 벗어난 단위 번호
    #[error("{quantity}: 알 수 없는 단위 번호 {ordinal}")]
    InvalidUnit { quantity: QuantityKind, ordinal: u32 },
}

/// 환산 계수표의 불변식 위반.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// 기준 단위가 표에 없거나 계수가 1이 아님
    #[error("{quantity}: 기준 단위 {symbol}의 계수가 1이 아닙니다 ({factor})")]
    MissingReference {
        quantity: QuantityKind,
        symbol: &'static str,
        factor: f64,
    },
    #[error("{quantity}: {symbol} 계수가 0 이하입니다 ({factor})")]
    NonPositiveFactor {
        quantity: QuantityKind,
        symbol: &'static str,
        factor: f64,
    },
    #[error("{quantity}: {symbol} 계수가 유한하지 않습니다 ({factor})")]
    NonFiniteFactor {
        quantity: QuantityKind,
        symbol: &'static str,
        factor: f64,
    },
    /// 단위 번호가 선언 순서와 다름
    #[error("{quantity}: {symbol}의 번호 {ordinal}이 위치 {index}와 다릅니다")]
    OrdinalMismatch {
        quantity: QuantityKind,
        symbol: &'static str,
        ordinal: u32,
        index: usize,
    },
    #[error("{quantity}: {symbol} 단위가 중복되었습니다")]
    DuplicateUnit {
        quantity: QuantityKind,
        symbol: &'static str,
    },
}

/// 하나의 물리량에 속한 닫힌 단위 집합.
///
/// `factor`는 기준 단위 1개에 해당하는 해당 단위의 수이다.
/// 예: 전하에서 `Millicoulomb.factor() == 1000.0` (1 C = 1000 mC).
/// `ALL`은 번호(ordinal) 순서로 정렬되어 있어야 한다.
pub trait ElectricUnit: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// 이 단위가 속한 물리량
    const QUANTITY: QuantityKind;
    /// 계수가 1인 기준 단위
    const REFERENCE: Self;
    /// 선언 순서의 전체 단위 목록
    const ALL: &'static [Self];

    fn factor(self) -> f64;

    /// 표시용 기호 (예: `mC`, `µF`).
    fn symbol(self) -> &'static str;

    /// 영문 단위명 (예: `millicoulomb`).
    fn name(self) -> &'static str;

    /// 외부에 저장될 수 있는 고정 번호. 한 번 공개된 번호는 바꾸지 않는다.
    fn ordinal(self) -> u32;

    /// 번호로부터 단위를 찾는다. 범위를 벗어나면 `InvalidUnit`.
    fn from_ordinal(ordinal: u32) -> Result<Self, ConversionError> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| Self::ALL.get(index))
            .copied()
            .ok_or(ConversionError::InvalidUnit {
                quantity: Self::QUANTITY,
                ordinal,
            })
    }
}

/// 물리량 하나에 대한 변환기. 내부 상태가 없으므로 어느 스레드에서나 공유해 쓸 수 있다.
///
/// 변환은 입력값을 기준 단위로 정규화한 뒤 목표 단위로 환산한다.
#[derive(Debug, Clone, Copy)]
pub struct UnitConverter<U> {
    _unit: PhantomData<fn() -> U>,
}

impl<U: ElectricUnit> Default for UnitConverter<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: ElectricUnit> UnitConverter<U> {
    pub const fn new() -> Self {
        Self { _unit: PhantomData }
    }

    /// 주어진 값을 기준 단위로 환산한다.
    pub fn to_reference(&self, unit: U, value: f64) -> f64 {
        value / unit.factor()
    }

    /// 기준 단위 값을 원하는 단위로 환산한다.
    pub fn from_reference(&self, value: f64, unit: U) -> f64 {
        value * unit.factor()
    }

    /// `in_unit` 단위의 `value`를 `out_unit` 단위로 변환한다.
    pub fn convert(&self, in_unit: U, value: f64, out_unit: U) -> f64 {
        // 같은 단위는 반올림 오차 없이 그대로 반환
        if in_unit == out_unit {
            return value;
        }
        let reference = self.to_reference(in_unit, value);
        let result = self.from_reference(reference, out_unit);
        let quantity = U::QUANTITY;
        trace!(
            %quantity,
            from = in_unit.symbol(),
            to = out_unit.symbol(),
            value,
            result,
            "단위 변환"
        );
        result
    }

    /// 저장된 단위 번호로 변환한다. 번호가 범위를 벗어나면 0을 돌려주지 않고 오류를 반환한다.
    pub fn convert_ordinal(
        &self,
        in_ordinal: u32,
        value: f64,
        out_ordinal: u32,
    ) -> Result<f64, ConversionError> {
        let in_unit = U::from_ordinal(in_ordinal).inspect_err(|err| debug!(%err, "입력 단위 거부"))?;
        let out_unit =
            U::from_ordinal(out_ordinal).inspect_err(|err| debug!(%err, "출력 단위 거부"))?;
        Ok(self.convert(in_unit, value, out_unit))
    }

    pub fn table(&self) -> ConversionTable<U> {
        ConversionTable::new()
    }
}

/// 단위 → 계수 매핑. 계수는 컴파일 타임 상수이므로 표는 읽기 전용이다.
#[derive(Debug, Clone, Copy)]
pub struct ConversionTable<U> {
    _unit: PhantomData<fn() -> U>,
}

impl<U: ElectricUnit> Default for ConversionTable<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: ElectricUnit> ConversionTable<U> {
    pub const fn new() -> Self {
        Self { _unit: PhantomData }
    }

    pub fn quantity(&self) -> QuantityKind {
        U::QUANTITY
    }

    pub fn reference(&self) -> U {
        U::REFERENCE
    }

    pub fn len(&self) -> usize {
        U::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        U::ALL.is_empty()
    }

    pub fn factor(&self, unit: U) -> f64 {
        unit.factor()
    }

    /// 번호 순서로 (단위, 계수)를 순회한다.
    pub fn entries(&self) -> impl Iterator<Item = (U, f64)> {
        U::ALL.iter().map(|&unit| (unit, unit.factor()))
    }

    /// 표의 불변식을 검사한다.
    ///
    /// - 기준 단위가 목록에 있고 계수가 정확히 1
    /// - 각 단위가 한 번씩만 등장하고 번호가 위치와 일치
    /// - 모든 계수가 유한한 양수
    pub fn validate(&self) -> Result<(), TableError> {
        let quantity = U::QUANTITY;
        let reference = U::REFERENCE;
        if !U::ALL.contains(&reference) || reference.factor() != 1.0 {
            return Err(TableError::MissingReference {
                quantity,
                symbol: reference.symbol(),
                factor: reference.factor(),
            });
        }

        for (index, &unit) in U::ALL.iter().enumerate() {
            let symbol = unit.symbol();
            if U::ALL[..index].contains(&unit) {
                return Err(TableError::DuplicateUnit { quantity, symbol });
            }
            if usize::try_from(unit.ordinal()).ok() != Some(index) {
                return Err(TableError::OrdinalMismatch {
                    quantity,
                    symbol,
                    ordinal: unit.ordinal(),
                    index,
                });
            }
            let factor = unit.factor();
            if !factor.is_finite() {
                return Err(TableError::NonFiniteFactor {
                    quantity,
                    symbol,
                    factor,
                });
            }
            if factor <= 0.0 {
                return Err(TableError::NonPositiveFactor {
                    quantity,
                    symbol,
                    factor,
                });
            }
        }
        Ok(())
    }
}

/// 물리량 종류와 단위 번호로 변환한다.
///
/// 단위 번호를 설정 파일 등에 저장해 두는 호출자를 위한 진입점이다.
pub fn convert_ordinal(
    kind: QuantityKind,
    in_ordinal: u32,
    value: f64,
    out_ordinal: u32,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Charge => {
            ChargeConverter::new().convert_ordinal(in_ordinal, value, out_ordinal)
        }
        QuantityKind::Capacitance => {
            CapacitanceConverter::new().convert_ordinal(in_ordinal, value, out_ordinal)
        }
        QuantityKind::Conductivity => {
            ConductivityConverter::new().convert_ordinal(in_ordinal, value, out_ordinal)
        }
        QuantityKind::Current => {
            CurrentConverter::new().convert_ordinal(in_ordinal, value, out_ordinal)
        }
        QuantityKind::Resistance => {
            ResistanceConverter::new().convert_ordinal(in_ordinal, value, out_ordinal)
        }
        QuantityKind::Inductance => {
            InductanceConverter::new().convert_ordinal(in_ordinal, value, out_ordinal)
        }
        QuantityKind::Potential => {
            PotentialConverter::new().convert_ordinal(in_ordinal, value, out_ordinal)
        }
    }
}

/// 단위 번호에 해당하는 표시 기호를 돌려준다.
pub fn unit_symbol(kind: QuantityKind, ordinal: u32) -> Result<&'static str, ConversionError> {
    fn lookup<U: ElectricUnit>(ordinal: u32) -> Result<&'static str, ConversionError> {
        U::from_ordinal(ordinal).map(U::symbol)
    }

    match kind {
        QuantityKind::Charge => lookup::<ChargeUnit>(ordinal),
        QuantityKind::Capacitance => lookup::<CapacitanceUnit>(ordinal),
        QuantityKind::Conductivity => lookup::<ConductivityUnit>(ordinal),
        QuantityKind::Current => lookup::<CurrentUnit>(ordinal),
        QuantityKind::Resistance => lookup::<ResistanceUnit>(ordinal),
        QuantityKind::Inductance => lookup::<InductanceUnit>(ordinal),
        QuantityKind::Potential => lookup::<PotentialUnit>(ordinal),
    }
}
