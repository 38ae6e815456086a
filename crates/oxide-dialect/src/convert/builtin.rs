//! Converters shared by several dialects.

use super::{unexpected_source, ConverterEntry, Converted};
use crate::value::{SqlValue, ValueKind};

/// Name of [`number_to_boolean`].
pub const NUMBER_TO_BOOLEAN: &str = "NumberToBoolean";
/// Name of [`boolean_to_integer`].
pub const BOOLEAN_TO_INTEGER: &str = "BooleanToInteger";
/// Name of [`timestamp_at_utc_to_offset_date_time`].
pub const TIMESTAMP_AT_UTC: &str = "TimestampAtUtcToOffsetDateTime";

/// Reads any numeric value as a boolean: non-zero is `true`.
///
/// Floats are compared as-is, so `0.5` reads as `true` and `NaN` too.
#[must_use]
pub fn number_to_boolean() -> ConverterEntry {
    ConverterEntry::reading(NUMBER_TO_BOOLEAN, ValueKind::Number, ValueKind::Bool, |value| {
        let truth = match value {
            SqlValue::Int(n) => *n != 0,
            SqlValue::Float(f) => *f != 0.0,
            other => return Err(unexpected_source(NUMBER_TO_BOOLEAN, ValueKind::Number, other)),
        };
        Ok(Converted::Value(SqlValue::Bool(truth)))
    })
}

/// Writes a boolean as `1` or `0`.
///
/// Combined with [`number_to_boolean`] the round trip is lossy: every
/// non-zero number comes back as `1`.
#[must_use]
pub fn boolean_to_integer() -> ConverterEntry {
    ConverterEntry::writing(BOOLEAN_TO_INTEGER, ValueKind::Bool, ValueKind::Int, |value| {
        match value {
            SqlValue::Bool(b) => Ok(Converted::Value(SqlValue::Int(i64::from(*b)))),
            other => Err(unexpected_source(BOOLEAN_TO_INTEGER, ValueKind::Bool, other)),
        }
    })
}

/// Reads a zone-less timestamp as an instant at UTC.
#[must_use]
pub fn timestamp_at_utc_to_offset_date_time() -> ConverterEntry {
    ConverterEntry::reading(
        TIMESTAMP_AT_UTC,
        ValueKind::Timestamp,
        ValueKind::TimestampTz,
        |value| match value {
            SqlValue::Timestamp(ts) => Ok(Converted::Value(SqlValue::TimestampTz(
                ts.and_utc().fixed_offset(),
            ))),
            other => Err(unexpected_source(TIMESTAMP_AT_UTC, ValueKind::Timestamp, other)),
        },
    )
}
