//! 물리량별 단위 정의와 환산 계수표 모음.

pub mod capacitance;
pub mod charge;
pub mod conductivity;
pub mod current;
pub mod inductance;
pub mod potential;
pub mod resistance;

pub use capacitance::{convert_capacitance, CapacitanceConverter, CapacitanceUnit};
pub use charge::{convert_charge, ChargeConverter, ChargeUnit};
pub use conductivity::{convert_conductivity, ConductivityConverter, ConductivityUnit};
pub use current::{convert_current, CurrentConverter, CurrentUnit};
pub use inductance::{convert_inductance, InductanceConverter, InductanceUnit};
pub use potential::{convert_potential, PotentialConverter, PotentialUnit};
pub use resistance::{convert_resistance, ResistanceConverter, ResistanceUnit};
