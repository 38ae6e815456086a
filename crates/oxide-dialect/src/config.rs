//! Configuration of the dialect and naming strategy used for rendering.
//!
//! Settings usually come from the application's configuration file:
//!
//! ```rust
//! use oxide_dialect::config::DialectConfig;
//! use oxide_dialect::schema::Table;
//!
//! let config = DialectConfig::from_json(
//!     r#"{
//!         "dialect": "oracle",
//!         "naming": [
//!             { "kind": "upper_case" },
//!             { "kind": "prefix", "value": "APP_" }
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! let settings = config.build().unwrap();
//! assert_eq!(settings.dialect().name(), "oracle");
//! assert_eq!(settings.naming().table_name(&Table::new("users")), "APP_USERS");
//! ```
//!
//! Every problem is reported by [`DialectConfig::build`] before any name is
//! rendered.

use core::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dialect::{self, Dialect};
use crate::error::{DialectError, Result};
use crate::naming::{NameTransform, RenderNamingStrategy};

/// A name transform as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformSpec {
    /// Upper-case the name.
    UpperCase,
    /// Lower-case the name.
    LowerCase,
    /// Fold the name the way the dialect folds unquoted identifiers.
    StandardCase,
    /// Prepend `value`.
    Prefix {
        /// Text to prepend.
        value: String,
    },
    /// Append `value`.
    Suffix {
        /// Text to append.
        value: String,
    },
    /// Quote the name with the dialect's identifier quotes.
    Quote,
}

impl TransformSpec {
    /// Compiles this spec into a transform for `dialect`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty prefix or suffix.
    pub fn compile(&self, dialect: &dyn Dialect) -> Result<NameTransform> {
        let transform: NameTransform = match self {
            Self::UpperCase => Box::new(str::to_uppercase),
            Self::LowerCase => Box::new(str::to_lowercase),
            Self::StandardCase => {
                let processing = dialect.identifier_processing();
                Box::new(move |name: &str| processing.standardize_letter_case(name))
            }
            Self::Prefix { value } => {
                let prefix = non_empty("prefix", value)?;
                Box::new(move |name: &str| format!("{prefix}{name}"))
            }
            Self::Suffix { value } => {
                let suffix = non_empty("suffix", value)?;
                Box::new(move |name: &str| format!("{name}{suffix}"))
            }
            Self::Quote => {
                let processing = dialect.identifier_processing();
                Box::new(move |name: &str| processing.quote(name))
            }
        };
        Ok(transform)
    }
}

fn non_empty(what: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(DialectError::configuration(format!(
            "{what} transform requires a non-empty value"
        )));
    }
    Ok(value.to_owned())
}

/// Which dialect to use and how to derive its naming strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DialectConfig {
    /// Database product name, resolved with [`dialect::resolve`].
    pub dialect: String,
    /// Transforms applied on top of the dialect's naming strategy, in order.
    #[serde(default)]
    pub naming: Vec<TransformSpec>,
}

impl DialectConfig {
    /// Creates a configuration for `dialect` without transforms.
    #[must_use]
    pub fn new(dialect: impl Into<String>) -> Self {
        Self {
            dialect: dialect.into(),
            naming: Vec::new(),
        }
    }

    /// Appends a transform.
    #[must_use]
    pub fn transform(mut self, spec: TransformSpec) -> Self {
        self.naming.push(spec);
        self
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Serialization`] for malformed documents,
    /// unknown fields and unknown transform kinds.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolves the dialect and derives the naming strategy.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown dialect or an invalid
    /// transform.
    pub fn build(&self) -> Result<RenderSettings> {
        let dialect = dialect::resolve(&self.dialect).ok_or_else(|| {
            DialectError::configuration(format!("unknown dialect '{}'", self.dialect))
        })?;

        let mut naming = dialect.naming_strategy();
        for spec in &self.naming {
            let transform = spec.compile(dialect)?;
            naming = Arc::new(naming.map(transform));
        }

        debug!(
            dialect = dialect.name(),
            transforms = self.naming.len(),
            "Built render settings"
        );
        Ok(RenderSettings { dialect, naming })
    }
}

/// A resolved dialect together with the naming strategy to render with.
#[derive(Clone)]
pub struct RenderSettings {
    dialect: &'static dyn Dialect,
    naming: Arc<dyn RenderNamingStrategy>,
}

impl RenderSettings {
    /// The dialect singleton.
    #[must_use]
    pub fn dialect(&self) -> &'static dyn Dialect {
        self.dialect
    }

    /// The naming strategy.
    #[must_use]
    pub fn naming(&self) -> &dyn RenderNamingStrategy {
        self.naming.as_ref()
    }
}

impl fmt::Debug for RenderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderSettings")
            .field("dialect", &self.dialect.name())
            .finish_non_exhaustive()
    }
}
