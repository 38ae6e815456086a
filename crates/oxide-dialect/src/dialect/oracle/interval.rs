//! Native interval capability.
//!
//! Oracle drivers bind `INTERVAL YEAR TO MONTH` and `INTERVAL DAY TO SECOND`
//! values in their own representation. Producing it is delegated to an
//! [`IntervalFactory`] installed at startup; without one the interval
//! converters report that no native representation exists.

use std::sync::Arc;

use chrono::TimeDelta;

use crate::capability::CapabilitySlot;
use crate::error::{BoxError, Result};
use crate::value::{NativeValue, Period};

/// Vendor type name of year-to-month intervals.
pub const INTERVAL_YM: &str = "INTERVALYM";
/// Vendor type name of day-to-second intervals.
pub const INTERVAL_DS: &str = "INTERVALDS";

/// Constructs native interval values.
pub trait IntervalFactory: Send + Sync {
    /// Builds an `INTERVALYM` from a period.
    ///
    /// # Errors
    ///
    /// Returns the construction failure if the period cannot be represented.
    fn year_to_month(&self, period: &Period) -> std::result::Result<NativeValue, BoxError>;

    /// Builds an `INTERVALDS` from a duration.
    ///
    /// # Errors
    ///
    /// Returns the construction failure if the duration cannot be represented.
    fn day_to_second(&self, duration: &TimeDelta) -> std::result::Result<NativeValue, BoxError>;
}

/// Slot holding the process-wide interval factory.
pub type IntervalSlot = CapabilitySlot<dyn IntervalFactory>;

/// The slot consulted by [`OracleDialect::instance`](super::OracleDialect::instance).
pub static NATIVE_INTERVALS: IntervalSlot = CapabilitySlot::new("oracle.native-intervals");

/// Installs `factory` as the process-wide interval factory.
///
/// # Errors
///
/// Returns a configuration error if a factory is already installed.
pub fn install_interval_factory(factory: Arc<dyn IntervalFactory>) -> Result<()> {
    NATIVE_INTERVALS.install(factory)
}

/// Installs the bundled [`OracleIntervalCodec`](super::codec::OracleIntervalCodec).
///
/// # Errors
///
/// Returns a configuration error if a factory is already installed.
#[cfg(feature = "oracle-intervals")]
pub fn install_native_intervals() -> Result<()> {
    install_interval_factory(Arc::new(super::codec::OracleIntervalCodec))
}
