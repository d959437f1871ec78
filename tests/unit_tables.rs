//! 계수표 불변식 및 단위 번호 처리 테스트.
use std::collections::HashSet;

use electric_conversion_toolbox::conversion::{
    self, ConversionError, ConversionTable, ElectricUnit, TableError, UnitConverter,
};
use electric_conversion_toolbox::quantity::QuantityKind;
use electric_conversion_toolbox::units::*;

fn check_table<U: ElectricUnit>(expected_len: usize) {
    let table = ConversionTable::<U>::new();
    table.validate().expect("table invariants");
    assert_eq!(table.len(), expected_len);
    assert_eq!(table.len(), U::QUANTITY.unit_count());
    assert_eq!(table.factor(U::REFERENCE), 1.0);
    assert_eq!(U::REFERENCE.symbol(), U::QUANTITY.reference_symbol());

    let symbols: HashSet<_> = U::ALL.iter().map(|u| u.symbol()).collect();
    assert_eq!(symbols.len(), U::ALL.len(), "{} symbols must be unique", U::QUANTITY);

    for (index, (unit, factor)) in table.entries().enumerate() {
        assert_eq!(unit.ordinal() as usize, index);
        assert_eq!(U::from_ordinal(unit.ordinal()), Ok(unit));
        assert!(factor.is_finite() && factor > 0.0);
    }
}

#[test]
fn all_tables_hold_invariants() {
    check_table::<ChargeUnit>(12);
    check_table::<CapacitanceUnit>(22);
    check_table::<ConductivityUnit>(9);
    check_table::<CurrentUnit>(8);
    check_table::<ResistanceUnit>(8);
    check_table::<InductanceUnit>(8);
    check_table::<PotentialUnit>(9);
}

#[test]
fn published_ordinals_are_stable() {
    assert_eq!(ChargeUnit::Coulomb.ordinal(), 0);
    assert_eq!(ChargeUnit::ElementaryCharge.ordinal(), 11);
    assert_eq!(CapacitanceUnit::Microfarad.ordinal(), 12);
    assert_eq!(PotentialUnit::Statvolt.ordinal(), 8);
}

#[test]
fn out_of_range_ordinal_is_rejected() {
    let conv = UnitConverter::<ChargeUnit>::new();
    assert_eq!(
        conv.convert_ordinal(12, 1.0, 0),
        Err(ConversionError::InvalidUnit {
            quantity: QuantityKind::Charge,
            ordinal: 12,
        })
    );
    assert_eq!(
        conv.convert_ordinal(0, 1.0, u32::MAX),
        Err(ConversionError::InvalidUnit {
            quantity: QuantityKind::Charge,
            ordinal: u32::MAX,
        })
    );
}

#[test]
fn ordinal_dispatch_matches_typed_conversion() {
    let v = conversion::convert_ordinal(
        QuantityKind::Charge,
        ChargeUnit::Coulomb.ordinal(),
        1.0,
        ChargeUnit::Millicoulomb.ordinal(),
    )
    .expect("valid ordinals");
    assert_eq!(v, 1000.0);

    let v = conversion::convert_ordinal(
        QuantityKind::Conductivity,
        ConductivityUnit::Siemens.ordinal(),
        2.0,
        ConductivityUnit::Millisiemens.ordinal(),
    )
    .expect("valid ordinals");
    assert_eq!(v, 2000.0);
}

#[test]
fn ordinal_dispatch_rejects_each_quantity() {
    for kind in QuantityKind::ALL {
        let bad = kind.unit_count() as u32;
        let err = conversion::convert_ordinal(kind, bad, 1.0, 0).unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidUnit {
                quantity: kind,
                ordinal: bad,
            }
        );
        assert!(conversion::unit_symbol(kind, bad).is_err());
        assert_eq!(
            conversion::unit_symbol(kind, 0).unwrap(),
            kind.reference_symbol()
        );
    }
}

#[test]
fn invalid_unit_message_names_quantity() {
    let err = ConversionError::InvalidUnit {
        quantity: QuantityKind::Current,
        ordinal: 99,
    };
    let msg = err.to_string();
    assert!(msg.contains("electric current"), "{msg}");
    assert!(msg.contains("99"), "{msg}");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrokenUnit {
    Base,
    Zero,
}

impl ElectricUnit for BrokenUnit {
    const QUANTITY: QuantityKind = QuantityKind::Charge;
    const REFERENCE: Self = BrokenUnit::Base;
    const ALL: &'static [Self] = &[BrokenUnit::Base, BrokenUnit::Zero];

    fn factor(self) -> f64 {
        match self {
            BrokenUnit::Base => 1.0,
            BrokenUnit::Zero => 0.0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            BrokenUnit::Base => "b",
            BrokenUnit::Zero => "z",
        }
    }

    fn name(self) -> &'static str {
        self.symbol()
    }

    fn ordinal(self) -> u32 {
        self as u32
    }
}

#[test]
fn validate_reports_non_positive_factor() {
    let err = ConversionTable::<BrokenUnit>::new().validate().unwrap_err();
    assert_eq!(
        err,
        TableError::NonPositiveFactor {
            quantity: QuantityKind::Charge,
            symbol: "z",
            factor: 0.0,
        }
    );
}

/// 불변식을 일부러 어긴 단위 집합을 만든다. 기호는 변형 이름의 소문자.
macro_rules! broken_table {
    ($name:ident { $($variant:ident => $factor:expr),+ $(,)? }, reference: $reference:ident, all: [$($all:ident),+ $(,)?]) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum $name {
            $($variant),+
        }

        impl ElectricUnit for $name {
            const QUANTITY: QuantityKind = QuantityKind::Current;
            const REFERENCE: Self = $name::$reference;
            const ALL: &'static [Self] = &[$($name::$all),+];

            fn factor(self) -> f64 {
                match self {
                    $($name::$variant => $factor),+
                }
            }

            fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }

            fn name(self) -> &'static str {
                self.symbol()
            }

            fn ordinal(self) -> u32 {
                self as u32
            }
        }
    };
}

broken_table!(
    ScaledReference { Base => 2.0, Other => 10.0 },
    reference: Base,
    all: [Base, Other]
);

broken_table!(
    UnlistedReference { Base => 1.0, Other => 10.0 },
    reference: Base,
    all: [Other]
);

broken_table!(
    RepeatedUnit { Base => 1.0, Other => 10.0 },
    reference: Base,
    all: [Base, Other, Other]
);

broken_table!(
    SwappedOrder { Base => 1.0, First => 10.0, Second => 100.0 },
    reference: Base,
    all: [Base, Second, First]
);

broken_table!(
    InfiniteFactor { Base => 1.0, Huge => f64::INFINITY },
    reference: Base,
    all: [Base, Huge]
);

broken_table!(
    NanFactor { Base => 1.0, Undefined => f64::NAN },
    reference: Base,
    all: [Base, Undefined]
);

#[test]
fn validate_reports_reference_factor_other_than_one() {
    let err = ConversionTable::<ScaledReference>::new().validate().unwrap_err();
    assert_eq!(
        err,
        TableError::MissingReference {
            quantity: QuantityKind::Current,
            symbol: "Base",
            factor: 2.0,
        }
    );
}

#[test]
fn validate_reports_reference_missing_from_list() {
    let err = ConversionTable::<UnlistedReference>::new().validate().unwrap_err();
    assert_eq!(
        err,
        TableError::MissingReference {
            quantity: QuantityKind::Current,
            symbol: "Base",
            factor: 1.0,
        }
    );
}

#[test]
fn validate_reports_duplicate_unit() {
    let err = ConversionTable::<RepeatedUnit>::new().validate().unwrap_err();
    assert_eq!(
        err,
        TableError::DuplicateUnit {
            quantity: QuantityKind::Current,
            symbol: "Other",
        }
    );
}

#[test]
fn validate_reports_ordinal_mismatch() {
    let err = ConversionTable::<SwappedOrder>::new().validate().unwrap_err();
    assert_eq!(
        err,
        TableError::OrdinalMismatch {
            quantity: QuantityKind::Current,
            symbol: "Second",
            ordinal: 2,
            index: 1,
        }
    );
}

#[test]
fn validate_reports_infinite_factor() {
    let err = ConversionTable::<InfiniteFactor>::new().validate().unwrap_err();
    assert_eq!(
        err,
        TableError::NonFiniteFactor {
            quantity: QuantityKind::Current,
            symbol: "Huge",
            factor: f64::INFINITY,
        }
    );
}

#[test]
fn validate_reports_nan_factor() {
    let err = ConversionTable::<NanFactor>::new().validate().unwrap_err();
    match err {
        TableError::NonFiniteFactor {
            quantity,
            symbol,
            factor,
        } => {
            assert_eq!(quantity, QuantityKind::Current);
            assert_eq!(symbol, "Undefined");
            assert!(factor.is_nan());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
