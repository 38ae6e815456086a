//! Generic SQL dialect.

use super::Dialect;

static INSTANCE: AnsiDialect = AnsiDialect { name: "ansi" };

/// A generic SQL dialect using ANSI SQL standards.
///
/// Generated keys are returned without naming key columns and no converters
/// are registered.
#[derive(Debug)]
pub struct AnsiDialect {
    name: &'static str,
}

impl AnsiDialect {
    /// Returns the singleton instance.
    #[must_use]
    pub fn instance() -> &'static Self {
        &INSTANCE
    }
}

impl Dialect for AnsiDialect {
    fn name(&self) -> &'static str {
        self.name
    }
}
