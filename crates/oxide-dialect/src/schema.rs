//! Table and column descriptors read by naming strategies.
//!
//! These carry only what rendering needs: a declared name and an optional
//! alias. The reference name is the alias when one is set, otherwise the name.

/// A table as referenced from a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    name: String,
    alias: Option<String>,
}

impl Table {
    /// Creates a table descriptor without alias.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Returns an aliased copy of this table.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Creates a column descriptor owned by this table.
    #[must_use]
    pub fn column(&self, name: impl Into<String>) -> Column {
        Column::new(name, self.clone())
    }

    /// The declared table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The alias if one is set, otherwise the name.
    #[must_use]
    pub fn reference_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// A column of a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    name: String,
    alias: Option<String>,
    table: Table,
}

impl Column {
    /// Creates a column descriptor without alias.
    #[must_use]
    pub fn new(name: impl Into<String>, table: Table) -> Self {
        Self {
            name: name.into(),
            alias: None,
            table,
        }
    }

    /// Returns an aliased copy of this column.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The declared column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The alias if one is set, otherwise the name.
    #[must_use]
    pub fn reference_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// The owning table.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }
}
