//! # oxide-dialect
//!
//! Per-database policy objects for SQL rendering.
//!
//! A statement renderer that targets several databases stays
//! database-agnostic by asking a [`Dialect`] for everything that varies:
//!
//! - **Identifier generation**: whether the driver needs the key column names
//!   to hand back generated keys ([`IdGeneration`]).
//! - **Converters**: typed reading/writing transforms between the generic
//!   [`SqlValue`] and the representation a driver binds ([`Converters`]).
//!   Some of them depend on optional vendor components registered at startup
//!   in a [`CapabilitySlot`](capability::CapabilitySlot).
//! - **Naming**: how table and column descriptors become identifiers
//!   ([`RenderNamingStrategy`]), derivable with pure string transforms.
//!
//! ## Example
//!
//! ```rust
//! use oxide_dialect::{AnsiDialect, Dialect, OracleDialect};
//! use oxide_dialect::naming::RenderNamingStrategy;
//! use oxide_dialect::schema::Table;
//!
//! let oracle = OracleDialect::instance();
//! assert!(oracle.id_generation().driver_requires_key_column_names());
//! assert!(!AnsiDialect::instance().id_generation().driver_requires_key_column_names());
//!
//! let naming = oracle.naming_strategy().map(|name| name.to_uppercase());
//! assert_eq!(naming.table_name(&Table::new("orders")), "ORDERS");
//! ```

pub mod capability;
pub mod config;
pub mod convert;
pub mod dialect;
pub mod error;
pub mod id_generation;
pub mod identifier;
pub mod naming;
pub mod schema;
pub mod value;

pub use config::{DialectConfig, RenderSettings, TransformSpec};
pub use convert::{Converted, ConverterEntry, Converters, Direction};
pub use dialect::{AnsiDialect, Dialect, OracleDialect};
pub use error::{DialectError, Result};
pub use id_generation::IdGeneration;
pub use identifier::IdentifierProcessing;
pub use naming::RenderNamingStrategy;
pub use schema::{Column, Table};
pub use value::{NativeValue, Period, SqlValue, ToSqlValue, ValueKind};
