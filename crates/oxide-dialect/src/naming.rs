//! Naming strategies for SQL rendering.
//!
//! A [`RenderNamingStrategy`] turns table and column descriptors into the
//! identifier text a renderer emits. The default methods pass the declared
//! names through unchanged. [`RenderNamingStrategy::map`] derives a new
//! strategy that post-processes every result of its base:
//!
//! ```rust
//! use oxide_dialect::naming::{AsIs, RenderNamingStrategy};
//! use oxide_dialect::schema::Table;
//!
//! let users = Table::new("users");
//! let strategy = AsIs
//!     .map(|name| name.to_uppercase())
//!     .map(|name| format!("APP_{name}"));
//!
//! assert_eq!(strategy.table_name(&users), "APP_USERS");
//! ```

use core::fmt;
use std::sync::Arc;

use crate::schema::{Column, Table};

/// A boxed name transform, as produced from configuration.
pub type NameTransform = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Naming strategy for SQL rendering.
pub trait RenderNamingStrategy: Send + Sync {
    /// Returns the column name.
    fn column_name(&self, column: &Column) -> String {
        column.name().to_owned()
    }

    /// Returns the column reference name.
    fn column_reference_name(&self, column: &Column) -> String {
        column.reference_name().to_owned()
    }

    /// Returns the table name.
    fn table_name(&self, table: &Table) -> String {
        table.name().to_owned()
    }

    /// Returns the table reference name.
    fn table_reference_name(&self, table: &Table) -> String {
        table.reference_name().to_owned()
    }

    /// Derives a strategy that applies `transform` after this one.
    ///
    /// `self` is moved into the result and never modified. To derive several
    /// strategies from one base, map a shared reference or an `Arc`.
    fn map<F>(self, transform: F) -> Mapped<Self, F>
    where
        Self: Sized,
        F: Fn(&str) -> String + Send + Sync,
    {
        Mapped {
            base: self,
            transform,
        }
    }
}

/// Renders names exactly as declared.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsIs;

impl RenderNamingStrategy for AsIs {}

/// Returns the as-is strategy behind a shared pointer.
#[must_use]
pub fn as_is() -> Arc<dyn RenderNamingStrategy> {
    Arc::new(AsIs)
}

/// A strategy derived from a base strategy plus a name transform.
#[derive(Clone)]
pub struct Mapped<S, F> {
    base: S,
    transform: F,
}

impl<S: fmt::Debug, F> fmt::Debug for Mapped<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapped")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl<S, F> RenderNamingStrategy for Mapped<S, F>
where
    S: RenderNamingStrategy,
    F: Fn(&str) -> String + Send + Sync,
{
    fn column_name(&self, column: &Column) -> String {
        (self.transform)(&self.base.column_name(column))
    }

    fn column_reference_name(&self, column: &Column) -> String {
        (self.transform)(&self.base.column_reference_name(column))
    }

    fn table_name(&self, table: &Table) -> String {
        (self.transform)(&self.base.table_name(table))
    }

    fn table_reference_name(&self, table: &Table) -> String {
        (self.transform)(&self.base.table_reference_name(table))
    }
}

macro_rules! delegate_naming_strategy {
    ($($ptr:ty),+) => {
        $(
            impl<S: RenderNamingStrategy + ?Sized> RenderNamingStrategy for $ptr {
                fn column_name(&self, column: &Column) -> String {
                    (**self).column_name(column)
                }

                fn column_reference_name(&self, column: &Column) -> String {
                    (**self).column_reference_name(column)
                }

                fn table_name(&self, table: &Table) -> String {
                    (**self).table_name(table)
                }

                fn table_reference_name(&self, table: &Table) -> String {
                    (**self).table_reference_name(table)
                }
            }
        )+
    };
}

delegate_naming_strategy!(&S, Box<S>, Arc<S>);
