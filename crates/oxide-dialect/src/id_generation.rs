//! Identifier-generation policy.

/// Describes how generated primary keys are retrieved after an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdGeneration {
    driver_requires_key_column_names: bool,
}

impl IdGeneration {
    /// The driver returns generated keys without being told which columns hold them.
    pub const DEFAULT: Self = Self {
        driver_requires_key_column_names: false,
    };

    /// The driver must be given the key column names explicitly.
    pub const REQUIRES_KEY_COLUMN_NAMES: Self = Self {
        driver_requires_key_column_names: true,
    };

    /// Returns whether the driver needs explicit key column names to return
    /// generated keys.
    #[must_use]
    pub const fn driver_requires_key_column_names(self) -> bool {
        self.driver_requires_key_column_names
    }
}
