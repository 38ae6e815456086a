//! Generic in-memory values exchanged with converters.
//!
//! [`SqlValue`] is the representation the rest of the system binds and reads.
//! Converters translate between it and the shapes a particular driver expects,
//! including opaque [`NativeValue`]s produced by vendor components.

use core::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};

/// A date-based amount of time in years, months and days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Period {
    /// Years component.
    pub years: i32,
    /// Months component.
    pub months: i32,
    /// Days component.
    pub days: i32,
}

impl Period {
    /// Creates a period from its three components.
    #[must_use]
    pub const fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// A period of whole years.
    #[must_use]
    pub const fn of_years(years: i32) -> Self {
        Self::new(years, 0, 0)
    }

    /// A period of whole months.
    #[must_use]
    pub const fn of_months(months: i32) -> Self {
        Self::new(0, months, 0)
    }

    /// Total number of months, ignoring the days component.
    #[must_use]
    pub const fn total_months(&self) -> i64 {
        self.years as i64 * 12 + self.months as i64
    }
}

/// An opaque value in a driver's native representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NativeValue {
    /// Vendor type name, e.g. `INTERVALYM`.
    pub type_name: &'static str,
    /// Encoded bytes as the driver expects them.
    pub bytes: Vec<u8>,
}

impl NativeValue {
    /// Creates a native value.
    #[must_use]
    pub const fn new(type_name: &'static str, bytes: Vec<u8>) -> Self {
        Self { type_name, bytes }
    }
}

/// A SQL value as seen by the binding layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
    /// Timestamp without zone, interpreted as UTC by the reading converters.
    Timestamp(NaiveDateTime),
    /// Timestamp with a fixed offset.
    TimestampTz(DateTime<FixedOffset>),
    /// Time-based amount of time.
    Duration(TimeDelta),
    /// Date-based amount of time.
    Period(Period),
    /// Vendor-native representation.
    Native(NativeValue),
}

impl SqlValue {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Blob(_) => ValueKind::Blob,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::TimestampTz(_) => ValueKind::TimestampTz,
            Self::Duration(_) => ValueKind::Duration,
            Self::Period(_) => ValueKind::Period,
            Self::Native(_) => ValueKind::Native,
        }
    }

    /// Returns `true` for [`SqlValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Type tag used by converter entries to declare what they accept and produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// NULL.
    Null,
    /// Boolean.
    Bool,
    /// Integer.
    Int,
    /// Float.
    Float,
    /// Any numeric value, i.e. [`ValueKind::Int`] or [`ValueKind::Float`].
    Number,
    /// Text.
    Text,
    /// Blob.
    Blob,
    /// Timestamp without zone.
    Timestamp,
    /// Timestamp with offset.
    TimestampTz,
    /// Duration.
    Duration,
    /// Period.
    Period,
    /// Vendor-native value.
    Native,
}

impl ValueKind {
    /// Returns whether a value of kind `other` satisfies this declared kind.
    #[must_use]
    pub const fn accepts(self, other: Self) -> bool {
        match self {
            Self::Number => matches!(other, Self::Int | Self::Float | Self::Number),
            _ => self as u8 == other as u8,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Bool => "BOOLEAN",
            Self::Int => "INTEGER",
            Self::Float => "FLOAT",
            Self::Number => "NUMBER",
            Self::Text => "TEXT",
            Self::Blob => "BLOB",
            Self::Timestamp => "TIMESTAMP",
            Self::TimestampTz => "TIMESTAMP WITH TIME ZONE",
            Self::Duration => "DURATION",
            Self::Period => "PERIOD",
            Self::Native => "NATIVE",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

macro_rules! impl_to_sql_value {
    ($($ty:ty => |$v:ident| $body:expr),+ $(,)?) => {
        $(
            impl ToSqlValue for $ty {
                fn to_sql_value(self) -> SqlValue {
                    let $v = self;
                    $body
                }
            }
        )+
    };
}

impl_to_sql_value! {
    bool => |v| SqlValue::Bool(v),
    i64 => |v| SqlValue::Int(v),
    i32 => |v| SqlValue::Int(i64::from(v)),
    f64 => |v| SqlValue::Float(v),
    String => |v| SqlValue::Text(v),
    &str => |v| SqlValue::Text(String::from(v)),
    Vec<u8> => |v| SqlValue::Blob(v),
    NaiveDateTime => |v| SqlValue::Timestamp(v),
    DateTime<FixedOffset> => |v| SqlValue::TimestampTz(v),
    TimeDelta => |v| SqlValue::Duration(v),
    Period => |v| SqlValue::Period(v),
    NativeValue => |v| SqlValue::Native(v),
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        match self {
            Some(v) => v.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}
