//! 설정 직렬화 및 파일 입출력 테스트.
use electric_conversion_toolbox::config::{Config, ConfigError, DefaultUnits, UnitSystem};
use electric_conversion_toolbox::conversion;
use electric_conversion_toolbox::quantity::QuantityKind;
use electric_conversion_toolbox::units::*;

#[test]
fn default_is_si() {
    let cfg = Config::default();
    assert_eq!(cfg.unit_system, UnitSystem::Si);
    assert_eq!(cfg.default_units.charge, ChargeUnit::Coulomb);
    assert_eq!(cfg.default_units.potential, PotentialUnit::Volt);
}

#[test]
fn presets_pick_cgs_units() {
    let esu = DefaultUnits::for_system(UnitSystem::Esu);
    assert_eq!(esu.capacitance, CapacitanceUnit::Statfarad);
    assert_eq!(esu.symbol(QuantityKind::Potential), "statV");

    let emu = DefaultUnits::for_system(UnitSystem::Emu);
    assert_eq!(emu.current, CurrentUnit::Abampere);
    assert_eq!(emu.symbol(QuantityKind::Resistance), "abΩ");
}

#[test]
fn toml_round_trip() {
    let cfg = Config::with_unit_system(UnitSystem::Esu);
    let text = cfg.to_toml_string().expect("serialize");
    assert!(text.contains("unit_system = \"Esu\""), "{text}");
    let parsed = Config::from_toml_str(&text).expect("parse");
    assert_eq!(parsed, cfg);
}

#[test]
fn partial_toml_fills_defaults() {
    let cfg = Config::from_toml_str("[default_units]\npotential = \"Millivolt\"\n").expect("parse");
    assert_eq!(cfg.unit_system, UnitSystem::Si);
    assert_eq!(cfg.default_units.potential, PotentialUnit::Millivolt);
    assert_eq!(cfg.default_units.inductance, InductanceUnit::Henry);
}

#[test]
fn unit_system_alone_selects_preset_units() {
    let cfg = Config::from_toml_str("unit_system = \"Esu\"\n").expect("parse");
    assert_eq!(cfg.unit_system, UnitSystem::Esu);
    assert_eq!(cfg.default_units, DefaultUnits::for_system(UnitSystem::Esu));
    assert_eq!(cfg, Config::with_unit_system(UnitSystem::Esu));
}

#[test]
fn explicit_units_override_preset() {
    let text = "unit_system = \"Emu\"\n\n[default_units]\ncharge = \"Coulomb\"\n";
    let cfg = Config::from_toml_str(text).expect("parse");
    assert_eq!(cfg.unit_system, UnitSystem::Emu);
    assert_eq!(cfg.default_units.charge, ChargeUnit::Coulomb);
    assert_eq!(cfg.default_units.current, CurrentUnit::Abampere);
    assert_eq!(cfg.default_units.potential, PotentialUnit::Abvolt);
}

#[test]
fn empty_file_is_default() {
    assert_eq!(Config::from_toml_str("").expect("parse"), Config::default());
}

#[test]
fn unknown_unit_name_fails_to_parse() {
    let err = Config::from_toml_str("[default_units]\ncharge = \"Kilofarad\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn default_unit_ordinals_drive_conversion() {
    let cfg = Config::with_unit_system(UnitSystem::Emu);
    let from = cfg.default_units.ordinal(QuantityKind::Current);
    let v = conversion::convert_ordinal(
        QuantityKind::Current,
        from,
        1.0,
        CurrentUnit::Ampere as u32,
    )
    .expect("valid ordinals");
    assert!((v - 10.0).abs() < 1e-12);
}

#[test]
fn load_or_default_creates_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    assert!(!path.exists());

    let cfg = Config::load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("units.toml");

    let mut cfg = Config::with_unit_system(UnitSystem::Emu);
    cfg.default_units.charge = ChargeUnit::MilliampereHours;
    cfg.save(&path).expect("save");

    let loaded = Config::load(&path).expect("load");
    assert_eq!(loaded, cfg);
    assert_eq!(Config::load_or_default(&path).expect("load"), cfg);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = Config::load(dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
