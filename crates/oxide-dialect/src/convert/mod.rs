//! Converter entries registered by dialects.
//!
//! A [`ConverterEntry`] is one directional, typed value transform. Reading
//! converters map a driver representation to a generic value, writing
//! converters map a generic value to what the driver expects. Dialects hand
//! out their entries as a [`Converters`] set; installing and dispatching them
//! is the job of the conversion service that consumes the set.

pub mod builtin;

use core::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::error::{DialectError, Result};
use crate::value::{SqlValue, ValueKind};

/// Which way a converter translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Driver representation to generic value.
    Reading,
    /// Generic value to driver representation.
    Writing,
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Converted {
    /// The converted value.
    Value(SqlValue),
    /// The input was NULL, so there is nothing to convert.
    Null,
    /// The target representation is not available in this process.
    NoNativeRepresentation,
}

impl Converted {
    /// Returns the converted value, if one was produced.
    #[must_use]
    pub const fn value(&self) -> Option<&SqlValue> {
        match self {
            Self::Value(v) => Some(v),
            Self::Null | Self::NoNativeRepresentation => None,
        }
    }

    /// Consumes self and returns the converted value, if one was produced.
    #[must_use]
    pub fn into_value(self) -> Option<SqlValue> {
        match self {
            Self::Value(v) => Some(v),
            Self::Null | Self::NoNativeRepresentation => None,
        }
    }
}

type Transform = Arc<dyn Fn(&SqlValue) -> Result<Converted> + Send + Sync>;
type Availability = Arc<dyn Fn() -> bool + Send + Sync>;

/// One typed, directional value transform.
#[derive(Clone)]
pub struct ConverterEntry {
    name: &'static str,
    direction: Direction,
    source: ValueKind,
    target: ValueKind,
    transform: Transform,
    availability: Option<Availability>,
}

impl ConverterEntry {
    /// Creates a reading converter.
    pub fn reading<F>(
        name: &'static str,
        source: ValueKind,
        target: ValueKind,
        transform: F,
    ) -> Self
    where
        F: Fn(&SqlValue) -> Result<Converted> + Send + Sync + 'static,
    {
        Self::new(name, Direction::Reading, source, target, transform)
    }

    /// Creates a writing converter.
    pub fn writing<F>(
        name: &'static str,
        source: ValueKind,
        target: ValueKind,
        transform: F,
    ) -> Self
    where
        F: Fn(&SqlValue) -> Result<Converted> + Send + Sync + 'static,
    {
        Self::new(name, Direction::Writing, source, target, transform)
    }

    fn new<F>(
        name: &'static str,
        direction: Direction,
        source: ValueKind,
        target: ValueKind,
        transform: F,
    ) -> Self
    where
        F: Fn(&SqlValue) -> Result<Converted> + Send + Sync + 'static,
    {
        Self {
            name,
            direction,
            source,
            target,
            transform: Arc::new(transform),
            availability: None,
        }
    }

    /// Gates this converter on `predicate`.
    ///
    /// While the predicate returns `false` the transform is never invoked and
    /// [`convert`](Self::convert) yields [`Converted::NoNativeRepresentation`].
    #[must_use]
    pub fn when_available<P>(mut self, predicate: P) -> Self
    where
        P: Fn() -> bool + Send + Sync + 'static,
    {
        self.availability = Some(Arc::new(predicate));
        self
    }

    /// The converter name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Reading or writing.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The declared source kind.
    #[must_use]
    pub const fn source(&self) -> ValueKind {
        self.source
    }

    /// The declared target kind.
    #[must_use]
    pub const fn target(&self) -> ValueKind {
        self.target
    }

    /// Whether the converter has an availability predicate at all.
    #[must_use]
    pub const fn is_conditional(&self) -> bool {
        self.availability.is_some()
    }

    /// Evaluates the availability predicate. Unconditional converters are
    /// always available.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.availability.as_ref().is_none_or(|available| available())
    }

    /// Converts `value`.
    ///
    /// NULL yields [`Converted::Null`] before the availability predicate is
    /// consulted.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnexpectedSource`] if `value` is not of the
    /// declared source kind, or whatever failure the transform reports.
    pub fn convert(&self, value: &SqlValue) -> Result<Converted> {
        if value.is_null() {
            return Ok(Converted::Null);
        }
        if !self.source.accepts(value.kind()) {
            return Err(unexpected_source(self.name, self.source, value));
        }
        if !self.is_available() {
            trace!(converter = self.name, "No native representation available");
            return Ok(Converted::NoNativeRepresentation);
        }
        (self.transform)(value)
    }
}

impl fmt::Debug for ConverterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterEntry")
            .field("name", &self.name)
            .field("direction", &self.direction)
            .field("source", &self.source)
            .field("target", &self.target)
            .field("conditional", &self.is_conditional())
            .finish_non_exhaustive()
    }
}

/// Builds the error a transform returns for a value it cannot handle.
#[must_use]
pub fn unexpected_source(
    converter: &'static str,
    expected: ValueKind,
    value: &SqlValue,
) -> DialectError {
    DialectError::UnexpectedSource {
        converter,
        expected,
        found: value.kind(),
    }
}

/// An ordered set of converter entries.
#[derive(Debug, Clone, Default)]
pub struct Converters {
    entries: Vec<ConverterEntry>,
}

impl Converters {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    #[must_use]
    pub fn with(mut self, entry: ConverterEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Appends all entries of `other`, keeping order.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Iterates all entries.
    pub fn iter(&self) -> impl Iterator<Item = &ConverterEntry> {
        self.entries.iter()
    }

    /// Iterates reading converters.
    pub fn reading(&self) -> impl Iterator<Item = &ConverterEntry> {
        self.iter().filter(|entry| entry.direction == Direction::Reading)
    }

    /// Iterates writing converters.
    pub fn writing(&self) -> impl Iterator<Item = &ConverterEntry> {
        self.iter().filter(|entry| entry.direction == Direction::Writing)
    }

    /// Iterates entries whose availability predicate currently holds.
    pub fn available(&self) -> impl Iterator<Item = &ConverterEntry> {
        self.iter().filter(|entry| entry.is_available())
    }

    /// Finds an entry by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ConverterEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
