//! Oracle dialect as configured in a process without native interval support.

mod common;

use chrono::TimeDelta;
use oxide_dialect::dialect::oracle::{
    DURATION_TO_INTERVAL_DS, NATIVE_INTERVALS, PERIOD_TO_INTERVAL_YM,
};
use oxide_dialect::dialect::{resolve, same_dialect};
use oxide_dialect::{AnsiDialect, Converted, Dialect, OracleDialect, Period, SqlValue};

#[test]
fn test_key_column_policy_end_to_end() {
    common::init_tracing();
    let oracle = resolve("oracle").unwrap();
    let ansi = resolve("ansi").unwrap();

    assert!(oracle.id_generation().driver_requires_key_column_names());
    assert!(!ansi.id_generation().driver_requires_key_column_names());
}

#[test]
fn test_singletons_are_never_duplicated() {
    let lookups: Vec<&'static dyn Dialect> = (0..16)
        .map(|_| resolve("Oracle").unwrap())
        .collect();
    assert!(lookups
        .iter()
        .all(|d| same_dialect(*d, OracleDialect::instance())));

    let from_threads: Vec<usize> = (0..4)
        .map(|_| std::thread::spawn(|| core::ptr::from_ref(OracleDialect::instance()) as usize))
        .map(|h| h.join().unwrap())
        .collect();
    assert!(from_threads.windows(2).all(|w| w[0] == w[1]));

    assert!(core::ptr::eq(AnsiDialect::instance(), AnsiDialect::instance()));
}

#[test]
fn test_converters_are_idempotent() {
    let first = OracleDialect::instance().converters();
    let second = OracleDialect::instance().converters();
    let names = |c: &oxide_dialect::Converters| c.iter().map(|e| e.name()).collect::<Vec<_>>();
    assert_eq!(names(&first), names(&second));
    assert_eq!(first.len(), 5);
}

#[test]
fn test_intervals_degrade_without_native_support() {
    common::init_tracing();
    assert!(!NATIVE_INTERVALS.is_installed());

    let converters = OracleDialect::instance().converters();
    let ym = converters.find(PERIOD_TO_INTERVAL_YM).unwrap();
    let ds = converters.find(DURATION_TO_INTERVAL_DS).unwrap();

    assert!(!ym.is_available());
    assert_eq!(converters.available().count(), 3);
    assert_eq!(
        common::convert(ym, Period::new(1, 6, 0)),
        Converted::NoNativeRepresentation
    );
    assert_eq!(
        common::convert(ds, TimeDelta::minutes(90)),
        Converted::NoNativeRepresentation
    );
}

#[test]
fn test_null_interval_is_no_value() {
    let converters = OracleDialect::instance().converters();
    for name in [PERIOD_TO_INTERVAL_YM, DURATION_TO_INTERVAL_DS] {
        let entry = converters.find(name).unwrap();
        assert_eq!(common::convert(entry, SqlValue::Null), Converted::Null);
    }
}

#[test]
fn test_boolean_conversions_through_dialect() {
    let converters = OracleDialect::instance().converters();
    let writer = converters
        .writing()
        .find(|e| e.source() == oxide_dialect::ValueKind::Bool)
        .unwrap();
    assert_eq!(
        common::convert(writer, true),
        Converted::Value(SqlValue::Int(1))
    );
}
