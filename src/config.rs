use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::conversion::ElectricUnit;
use crate::quantity::QuantityKind;
use crate::units::*;

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI. 내부 계산 기준 단위와 같다.
    #[default]
    Si,
    /// CGS 정전단위계 (stat-)
    Esu,
    /// CGS 전자기단위계 (ab-)
    Emu,
}

/// 각 물리량별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub charge: ChargeUnit,
    pub capacitance: CapacitanceUnit,
    pub conductivity: ConductivityUnit,
    pub current: CurrentUnit,
    pub resistance: ResistanceUnit,
    pub inductance: InductanceUnit,
    pub potential: PotentialUnit,
}

impl DefaultUnits {
    /// 단위 시스템 프리셋에 맞는 기본 단위 묶음을 만든다.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Si => Self {
                charge: ChargeUnit::Coulomb,
                capacitance: CapacitanceUnit::Farad,
                conductivity: ConductivityUnit::Siemens,
                current: CurrentUnit::Ampere,
                resistance: ResistanceUnit::Ohm,
                inductance: InductanceUnit::Henry,
                potential: PotentialUnit::Volt,
            },
            UnitSystem::Esu => Self {
                charge: ChargeUnit::Statcoulomb,
                capacitance: CapacitanceUnit::Statfarad,
                conductivity: ConductivityUnit::Statmho,
                current: CurrentUnit::Statampere,
                resistance: ResistanceUnit::Statohm,
                inductance: InductanceUnit::Stathenry,
                potential: PotentialUnit::Statvolt,
            },
            UnitSystem::Emu => Self {
                charge: ChargeUnit::Abcoulomb,
                capacitance: CapacitanceUnit::Abfarad,
                conductivity: ConductivityUnit::Abmho,
                current: CurrentUnit::Abampere,
                resistance: ResistanceUnit::Abohm,
                inductance: InductanceUnit::Abhenry,
                potential: PotentialUnit::Abvolt,
            },
        }
    }

    /// 물리량의 기본 단위 번호. `conversion::convert_ordinal`과 함께 쓴다.
    pub fn ordinal(&self, kind: QuantityKind) -> u32 {
        match kind {
            QuantityKind::Charge => self.charge.ordinal(),
            QuantityKind::Capacitance => self.capacitance.ordinal(),
            QuantityKind::Conductivity => self.conductivity.ordinal(),
            QuantityKind::Current => self.current.ordinal(),
            QuantityKind::Resistance => self.resistance.ordinal(),
            QuantityKind::Inductance => self.inductance.ordinal(),
            QuantityKind::Potential => self.potential.ordinal(),
        }
    }

    pub fn symbol(&self, kind: QuantityKind) -> &'static str {
        match kind {
            QuantityKind::Charge => self.charge.symbol(),
            QuantityKind::Capacitance => self.capacitance.symbol(),
            QuantityKind::Conductivity => self.conductivity.symbol(),
            QuantityKind::Current => self.current.symbol(),
            QuantityKind::Resistance => self.resistance.symbol(),
            QuantityKind::Inductance => self.inductance.symbol(),
            QuantityKind::Potential => self.potential.symbol(),
        }
    }
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::Si)
    }
}

/// 변환기 사용자 설정을 표현한다.
///
/// 라이브러리는 스스로 파일을 읽지 않는다. 호출자가 넘긴 경로만 사용한다.
/// 파일에 빠진 기본 단위는 `unit_system` 프리셋의 단위로 채운다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct Config {
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
}

/// 역직렬화 전용. 항목마다 지정 여부를 보존한다.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    unit_system: UnitSystem,
    default_units: DefaultUnitsFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DefaultUnitsFile {
    charge: Option<ChargeUnit>,
    capacitance: Option<CapacitanceUnit>,
    conductivity: Option<ConductivityUnit>,
    current: Option<CurrentUnit>,
    resistance: Option<ResistanceUnit>,
    inductance: Option<InductanceUnit>,
    potential: Option<PotentialUnit>,
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let preset = DefaultUnits::for_system(file.unit_system);
        let units = file.default_units;
        Self {
            unit_system: file.unit_system,
            default_units: DefaultUnits {
                charge: units.charge.unwrap_or(preset.charge),
                capacitance: units.capacitance.unwrap_or(preset.capacitance),
                conductivity: units.conductivity.unwrap_or(preset.conductivity),
                current: units.current.unwrap_or(preset.current),
                resistance: units.resistance.unwrap_or(preset.resistance),
                inductance: units.inductance.unwrap_or(preset.inductance),
                potential: units.potential.unwrap_or(preset.potential),
            },
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// 프리셋 단위 시스템과 그 기본 단위로 설정을 만든다.
    pub fn with_unit_system(system: UnitSystem) -> Self {
        Self {
            unit_system: system,
            default_units: DefaultUnits::for_system(system),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 설정 파일을 읽는다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "설정 로드");
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            let cfg = Config::default();
            cfg.save(path)?;
            Ok(cfg)
        }
    }

    /// 설정을 주어진 경로에 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "설정 저장");
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
