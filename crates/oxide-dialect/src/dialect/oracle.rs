//! Oracle dialect.
//!
//! # How Oracle differs from the generic dialect
//!
//! - **Generated keys**: the driver only returns generated keys
//!   when it is told the key column names.
//! - **Booleans**: there is no SQL `BOOLEAN` column type before 23c, so
//!   booleans are written as `1`/`0` and any non-zero number reads as `true`.
//! - **Intervals**: durations and periods bind as the driver's native
//!   `INTERVALDS`/`INTERVALYM` values. Producing those requires an
//!   [`IntervalFactory`] installed at startup (see
//!   [`install_native_intervals`]); without one the interval converters
//!   yield [`Converted::NoNativeRepresentation`].

#[cfg(feature = "oracle-intervals")]
pub mod codec;
pub mod interval;

use tracing::{debug, trace};

#[cfg(feature = "oracle-intervals")]
pub use interval::install_native_intervals;
pub use interval::{install_interval_factory, IntervalFactory, IntervalSlot, NATIVE_INTERVALS};

use super::{AnsiDialect, Dialect};
use crate::convert::{builtin, unexpected_source, Converted, ConverterEntry, Converters};
use crate::error::DialectError;
use crate::id_generation::IdGeneration;
use crate::value::{SqlValue, ValueKind};

/// Name of [`period_to_interval_ym`].
pub const PERIOD_TO_INTERVAL_YM: &str = "PeriodToIntervalYm";
/// Name of [`duration_to_interval_ds`].
pub const DURATION_TO_INTERVAL_DS: &str = "DurationToIntervalDs";

static INSTANCE: OracleDialect = OracleDialect {
    intervals: &NATIVE_INTERVALS,
};

/// Oracle dialect.
#[derive(Debug)]
pub struct OracleDialect {
    intervals: &'static IntervalSlot,
}

impl OracleDialect {
    /// Returns the singleton instance.
    #[must_use]
    pub fn instance() -> &'static Self {
        &INSTANCE
    }
}

impl Dialect for OracleDialect {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn id_generation(&self) -> IdGeneration {
        IdGeneration::REQUIRES_KEY_COLUMN_NAMES
    }

    fn converters(&self) -> Converters {
        let additions = Converters::new()
            .with(builtin::timestamp_at_utc_to_offset_date_time())
            .with(builtin::number_to_boolean())
            .with(builtin::boolean_to_integer())
            .with(period_to_interval_ym(self.intervals))
            .with(duration_to_interval_ds(self.intervals));
        let converters = AnsiDialect::instance().converters().merge(additions);
        debug!(
            dialect = self.name(),
            count = converters.len(),
            native_intervals = self.intervals.is_installed(),
            "Assembled converters"
        );
        converters
    }
}

/// Writes a [`Period`](crate::value::Period) as a native `INTERVALYM`.
///
/// `slot` is probed on every conversion.
#[must_use]
pub fn period_to_interval_ym(slot: &'static IntervalSlot) -> ConverterEntry {
    ConverterEntry::writing(
        PERIOD_TO_INTERVAL_YM,
        ValueKind::Period,
        ValueKind::Native,
        move |value| {
            let SqlValue::Period(period) = value else {
                return Err(unexpected_source(PERIOD_TO_INTERVAL_YM, ValueKind::Period, value));
            };
            let Some(factory) = slot.get() else {
                trace!(converter = PERIOD_TO_INTERVAL_YM, "No interval factory installed");
                return Ok(Converted::NoNativeRepresentation);
            };
            factory
                .year_to_month(period)
                .map(|native| Converted::Value(SqlValue::Native(native)))
                .map_err(|e| DialectError::conversion_failed(PERIOD_TO_INTERVAL_YM, e))
        },
    )
    .when_available(move || slot.is_installed())
}

/// Writes a [`TimeDelta`](chrono::TimeDelta) as a native `INTERVALDS`.
///
/// `slot` is probed on every conversion.
#[must_use]
pub fn duration_to_interval_ds(slot: &'static IntervalSlot) -> ConverterEntry {
    ConverterEntry::writing(
        DURATION_TO_INTERVAL_DS,
        ValueKind::Duration,
        ValueKind::Native,
        move |value| {
            let SqlValue::Duration(duration) = value else {
                return Err(unexpected_source(DURATION_TO_INTERVAL_DS, ValueKind::Duration, value));
            };
            let Some(factory) = slot.get() else {
                trace!(converter = DURATION_TO_INTERVAL_DS, "No interval factory installed");
                return Ok(Converted::NoNativeRepresentation);
            };
            factory
                .day_to_second(duration)
                .map(|native| Converted::Value(SqlValue::Native(native)))
                .map_err(|e| DialectError::conversion_failed(DURATION_TO_INTERVAL_DS, e))
        },
    )
    .when_available(move || slot.is_installed())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::TimeDelta;

    use super::*;
    use crate::convert::Direction;
    use crate::error::BoxError;
    use crate::value::{NativeValue, Period};

    struct Failing;

    impl IntervalFactory for Failing {
        fn year_to_month(&self, _: &Period) -> Result<NativeValue, BoxError> {
            Err("no such method: toIntervalym".into())
        }

        fn day_to_second(&self, _: &TimeDelta) -> Result<NativeValue, BoxError> {
            Err(Box::new(std::io::Error::other("constructor threw")))
        }
    }

    struct Stub;

    impl IntervalFactory for Stub {
        fn year_to_month(&self, period: &Period) -> Result<NativeValue, BoxError> {
            Ok(NativeValue::new(interval::INTERVAL_YM, vec![period.years.to_le_bytes()[0]]))
        }

        fn day_to_second(&self, duration: &TimeDelta) -> Result<NativeValue, BoxError> {
            Ok(NativeValue::new(
                interval::INTERVAL_DS,
                duration.num_seconds().to_le_bytes().to_vec(),
            ))
        }
    }

    fn leaked_slot() -> &'static IntervalSlot {
        Box::leak(Box::new(IntervalSlot::new("test-intervals")))
    }

    #[test]
    fn test_oracle_dialect() {
        let dialect = OracleDialect::instance();
        assert_eq!(dialect.name(), "oracle");
        assert!(dialect.id_generation().driver_requires_key_column_names());
        assert_eq!(dialect.quote_identifier("user"), "\"user\"");
    }

    #[test]
    fn test_converter_catalog() {
        let converters = OracleDialect::instance().converters();
        let names: Vec<_> = converters.iter().map(ConverterEntry::name).collect();
        assert_eq!(
            names,
            [
                builtin::TIMESTAMP_AT_UTC,
                builtin::NUMBER_TO_BOOLEAN,
                builtin::BOOLEAN_TO_INTEGER,
                PERIOD_TO_INTERVAL_YM,
                DURATION_TO_INTERVAL_DS,
            ]
        );
        assert_eq!(converters.reading().count(), 2);
        assert_eq!(converters.writing().count(), 3);

        let target = |name: &str| converters.find(name).map(ConverterEntry::target);
        assert_eq!(target(builtin::NUMBER_TO_BOOLEAN), Some(ValueKind::Bool));
        assert_eq!(target(builtin::BOOLEAN_TO_INTEGER), Some(ValueKind::Int));
        assert_eq!(target(builtin::TIMESTAMP_AT_UTC), Some(ValueKind::TimestampTz));
        assert_eq!(target(PERIOD_TO_INTERVAL_YM), Some(ValueKind::Native));
        assert_eq!(target(DURATION_TO_INTERVAL_DS), Some(ValueKind::Native));
    }

    #[test]
    fn test_converters_extend_the_generic_set() {
        let base = AnsiDialect::instance().converters();
        let oracle = OracleDialect::instance().converters();
        assert!(base.iter().all(|entry| oracle.find(entry.name()).is_some()));
        assert_eq!(oracle.len(), base.len() + 5);
    }

    #[test]
    fn test_intervals_without_factory() {
        let slot = leaked_slot();
        let ym = period_to_interval_ym(slot);
        let ds = duration_to_interval_ds(slot);

        assert!(!ym.is_available());
        assert_eq!(
            ym.convert(&SqlValue::Period(Period::of_years(1))).unwrap(),
            Converted::NoNativeRepresentation
        );
        assert_eq!(
            ds.convert(&SqlValue::Duration(TimeDelta::seconds(5))).unwrap(),
            Converted::NoNativeRepresentation
        );
        assert_eq!(ym.convert(&SqlValue::Null).unwrap(), Converted::Null);
    }

    #[test]
    fn test_intervals_with_factory() {
        let slot = leaked_slot();
        slot.install(Arc::new(Stub)).unwrap();

        let converted = duration_to_interval_ds(slot)
            .convert(&SqlValue::Duration(TimeDelta::seconds(90)))
            .unwrap();
        let Some(SqlValue::Native(native)) = converted.into_value() else {
            panic!("expected a native value");
        };
        assert_eq!(native.type_name, interval::INTERVAL_DS);
        assert_eq!(native.bytes, 90_i64.to_le_bytes().to_vec());

        let ym = period_to_interval_ym(slot);
        assert!(ym.is_available());
        assert_eq!(ym.direction(), Direction::Writing);
        assert!(ym
            .convert(&SqlValue::Period(Period::of_years(3)))
            .unwrap()
            .value()
            .is_some());
    }

    #[test]
    fn test_factory_failures_are_wrapped() {
        let slot = leaked_slot();
        slot.install(Arc::new(Failing)).unwrap();

        let err = period_to_interval_ym(slot)
            .convert(&SqlValue::Period(Period::of_months(1)))
            .unwrap_err();
        let DialectError::ConversionFailed { converter, source } = err else {
            panic!("expected a conversion failure");
        };
        assert_eq!(converter, PERIOD_TO_INTERVAL_YM);
        assert_eq!(source.to_string(), "no such method: toIntervalym");

        let err = duration_to_interval_ds(slot)
            .convert(&SqlValue::Duration(TimeDelta::seconds(1)))
            .unwrap_err();
        assert!(matches!(
            err,
            DialectError::ConversionFailed {
                converter: DURATION_TO_INTERVAL_DS,
                ..
            }
        ));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_interval_rejects_wrong_kind() {
        let err = period_to_interval_ym(leaked_slot())
            .convert(&SqlValue::Duration(TimeDelta::seconds(1)))
            .unwrap_err();
        assert!(matches!(err, DialectError::UnexpectedSource { .. }));
    }
}
