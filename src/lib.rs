//! 전기 물리량(전하, 정전용량, 전도도, 전류, 저항, 인덕턴스, 전위)의 단위 변환 라이브러리.
//!
//! 각 물리량은 고정된 단위 열거형과 계수표를 가지며, 변환은 기준 단위로 정규화한 뒤
//! 목표 단위로 환산하는 방식으로 이루어진다.

pub mod config;
pub mod conversion;
pub mod logging;
pub mod quantity;
pub mod units;

pub use conversion::{ConversionError, ConversionTable, ElectricUnit, TableError, UnitConverter};
pub use quantity::{Measurement, QuantityKind};
