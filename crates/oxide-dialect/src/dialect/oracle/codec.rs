//! Oracle wire encoding of interval values.
//!
//! Both formats store every field with a fixed bias so that the byte
//! sequences sort like the values they encode: 4-byte fields are offset by
//! `0x8000_0000`, 1-byte fields by 60.
//!
//! | type         | layout                                               |
//! |--------------|------------------------------------------------------|
//! | `INTERVALYM` | year (4) month (1)                                   |
//! | `INTERVALDS` | day (4) hour (1) minute (1) second (1) nanos (4)     |

use chrono::TimeDelta;

use super::interval::{IntervalFactory, INTERVAL_DS, INTERVAL_YM};
use crate::error::BoxError;
use crate::value::{NativeValue, Period};

const BYTE_BIAS: i64 = 60;
const SECONDS_PER_DAY: i64 = 86_400;

/// Errors raised while encoding an interval.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
    /// `INTERVAL YEAR TO MONTH` has no day field.
    #[error("period has a day component ({0} days) that INTERVAL YEAR TO MONTH cannot hold")]
    DayComponent(i32),

    /// The normalized year does not fit in the year field.
    #[error("{0} years do not fit INTERVAL YEAR TO MONTH")]
    YearOutOfRange(i64),

    /// The day count does not fit in the day field.
    #[error("{0} days do not fit INTERVAL DAY TO SECOND")]
    DayOutOfRange(i64),
}

/// Encodes intervals in Oracle's native binary layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleIntervalCodec;

impl OracleIntervalCodec {
    /// Encodes a period as `INTERVALYM` bytes.
    ///
    /// Years and months are normalized first, so `0y14m` encodes as `1y2m`.
    ///
    /// # Errors
    ///
    /// Fails if the period has days or the normalized year overflows.
    pub fn encode_year_to_month(period: &Period) -> Result<[u8; 5], IntervalError> {
        if period.days != 0 {
            return Err(IntervalError::DayComponent(period.days));
        }
        let total = period.total_months();
        let years = total / 12;
        let year = i32::try_from(years).map_err(|_| IntervalError::YearOutOfRange(years))?;

        let mut bytes = [0_u8; 5];
        bytes[..4].copy_from_slice(&biased_word(year));
        bytes[4] = biased_byte(total % 12);
        Ok(bytes)
    }

    /// Encodes a duration as `INTERVALDS` bytes.
    ///
    /// All fields carry the sign of the duration.
    ///
    /// # Errors
    ///
    /// Fails if the day count overflows the day field.
    pub fn encode_day_to_second(duration: &TimeDelta) -> Result<[u8; 11], IntervalError> {
        let secs = duration.num_seconds();
        let days = secs / SECONDS_PER_DAY;
        let day = i32::try_from(days).map_err(|_| IntervalError::DayOutOfRange(days))?;
        let rem = secs % SECONDS_PER_DAY;

        let mut bytes = [0_u8; 11];
        bytes[..4].copy_from_slice(&biased_word(day));
        bytes[4] = biased_byte(rem / 3_600);
        bytes[5] = biased_byte(rem % 3_600 / 60);
        bytes[6] = biased_byte(rem % 60);
        bytes[7..].copy_from_slice(&biased_word(duration.subsec_nanos()));
        Ok(bytes)
    }
}

impl IntervalFactory for OracleIntervalCodec {
    fn year_to_month(&self, period: &Period) -> Result<NativeValue, BoxError> {
        let bytes = Self::encode_year_to_month(period)?;
        Ok(NativeValue::new(INTERVAL_YM, bytes.to_vec()))
    }

    fn day_to_second(&self, duration: &TimeDelta) -> Result<NativeValue, BoxError> {
        let bytes = Self::encode_day_to_second(duration)?;
        Ok(NativeValue::new(INTERVAL_DS, bytes.to_vec()))
    }
}

/// Big-endian `value + 0x8000_0000`.
fn biased_word(value: i32) -> [u8; 4] {
    let mut bytes = value.to_be_bytes();
    bytes[0] ^= 0x80;
    bytes
}

/// `value + 60`; callers pass values in `-59..=59`.
fn biased_byte(value: i64) -> u8 {
    u8::try_from(value + BYTE_BIAS).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_to_month() {
        assert_eq!(
            OracleIntervalCodec::encode_year_to_month(&Period::new(1, 2, 0)),
            Ok([0x80, 0, 0, 1, 62])
        );
        assert_eq!(
            OracleIntervalCodec::encode_year_to_month(&Period::of_months(14)),
            Ok([0x80, 0, 0, 1, 62])
        );
        assert_eq!(
            OracleIntervalCodec::encode_year_to_month(&Period::new(-1, -6, 0)),
            Ok([0x7f, 0xff, 0xff, 0xff, 54])
        );
        assert_eq!(
            OracleIntervalCodec::encode_year_to_month(&Period::default()),
            Ok([0x80, 0, 0, 0, 60])
        );
    }

    #[test]
    fn test_year_to_month_rejects_days() {
        assert_eq!(
            OracleIntervalCodec::encode_year_to_month(&Period::new(1, 0, 3)),
            Err(IntervalError::DayComponent(3))
        );
    }

    #[test]
    fn test_year_to_month_overflow() {
        let period = Period::new(i32::MAX, 12, 0);
        assert!(matches!(
            OracleIntervalCodec::encode_year_to_month(&period),
            Err(IntervalError::YearOutOfRange(_))
        ));
    }

    #[test]
    fn test_day_to_second() {
        let duration = TimeDelta::days(1)
            + TimeDelta::hours(2)
            + TimeDelta::minutes(3)
            + TimeDelta::seconds(4)
            + TimeDelta::milliseconds(500);
        assert_eq!(
            OracleIntervalCodec::encode_day_to_second(&duration),
            Ok([0x80, 0, 0, 1, 62, 63, 64, 0x9d, 0xcd, 0x65, 0x00])
        );
    }

    #[test]
    fn test_negative_day_to_second() {
        let duration = -(TimeDelta::hours(1) + TimeDelta::seconds(1));
        assert_eq!(
            OracleIntervalCodec::encode_day_to_second(&duration),
            Ok([0x80, 0, 0, 0, 59, 60, 59, 0x80, 0, 0, 0])
        );
    }

    #[test]
    fn test_day_to_second_overflow() {
        assert!(matches!(
            OracleIntervalCodec::encode_day_to_second(&TimeDelta::MAX),
            Err(IntervalError::DayOutOfRange(_))
        ));
    }

    #[test]
    fn test_factory_tags_native_type() {
        let codec = OracleIntervalCodec;
        let ym = codec.year_to_month(&Period::of_years(2)).unwrap();
        assert_eq!(ym.type_name, INTERVAL_YM);
        assert_eq!(ym.bytes.len(), 5);

        let ds = codec.day_to_second(&TimeDelta::seconds(1)).unwrap();
        assert_eq!(ds.type_name, INTERVAL_DS);
        assert_eq!(ds.bytes.len(), 11);
    }
}
