#![allow(dead_code)]

use oxide_dialect::schema::{Column, Table};
use oxide_dialect::{Converted, ConverterEntry, ToSqlValue};

/// Routes `tracing` output to the test harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// An aliased column of an aliased table.
pub fn aliased_column() -> Column {
    Table::new("customers").alias("c").column("first_name").alias("fname")
}

/// Converts `value` and fails the test on error.
pub fn convert(entry: &ConverterEntry, value: impl ToSqlValue) -> Converted {
    let value = value.to_sql_value();
    entry
        .convert(&value)
        .unwrap_or_else(|e| panic!("{} failed on {value:?}: {e}", entry.name()))
}
