//! SQL dialect support.
//!
//! Different databases differ in how generated keys come back from the driver,
//! which values need converting before they are bound or after they are read,
//! and how identifiers are written. A [`Dialect`] bundles those policies for
//! one database product. The trait's default methods describe a generic ANSI
//! database; each concrete dialect overrides only what differs.
//!
//! Every dialect is a process-wide singleton, so two references to the same
//! product compare equal by address (see [`same_dialect`]).

mod ansi;
pub mod oracle;

use core::fmt;
use std::sync::Arc;

pub use ansi::AnsiDialect;
pub use oracle::OracleDialect;

use crate::convert::Converters;
use crate::id_generation::IdGeneration;
use crate::identifier::IdentifierProcessing;
use crate::naming::{self, RenderNamingStrategy};

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: Send + Sync + fmt::Debug {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns how generated keys are retrieved after an insert.
    fn id_generation(&self) -> IdGeneration {
        IdGeneration::DEFAULT
    }

    /// Returns the converters to install into the conversion service.
    fn converters(&self) -> Converters {
        Converters::new()
    }

    /// Returns the naming strategy used to render table and column names.
    fn naming_strategy(&self) -> Arc<dyn RenderNamingStrategy> {
        naming::as_is()
    }

    /// Returns how identifiers are quoted and case-folded.
    fn identifier_processing(&self) -> IdentifierProcessing {
        IdentifierProcessing::ANSI
    }

    /// Quotes an identifier.
    fn quote_identifier(&self, name: &str) -> String {
        self.identifier_processing().quote(name)
    }

    /// Returns the parameter placeholder style.
    fn parameter_placeholder(&self) -> &'static str {
        "?"
    }

    /// Returns whether the dialect supports a RETURNING clause.
    fn supports_returning(&self) -> bool {
        false
    }

    /// Renders the row-limiting clause for the given limit and offset.
    ///
    /// Returns an empty string when neither is set.
    fn limit_clause(&self, limit: Option<u64>, offset: Option<u64>) -> String {
        match (limit, offset) {
            (Some(limit), Some(offset)) => {
                format!("OFFSET {offset} ROWS FETCH FIRST {limit} ROWS ONLY")
            }
            (Some(limit), None) => format!("FETCH FIRST {limit} ROWS ONLY"),
            (None, Some(offset)) => format!("OFFSET {offset} ROWS"),
            (None, None) => String::new(),
        }
    }
}

/// Returns the dialect singleton for a database product name.
///
/// Matching is case-insensitive. `ansi` and `generic` both resolve to
/// [`AnsiDialect`].
#[must_use]
pub fn resolve(product: &str) -> Option<&'static dyn Dialect> {
    match product.trim().to_ascii_lowercase().as_str() {
        "ansi" | "generic" => Some(AnsiDialect::instance()),
        "oracle" => Some(OracleDialect::instance()),
        _ => None,
    }
}

/// Returns whether `a` and `b` are the same dialect instance.
#[must_use]
pub fn same_dialect(a: &dyn Dialect, b: &dyn Dialect) -> bool {
    core::ptr::addr_eq(a, b)
}
