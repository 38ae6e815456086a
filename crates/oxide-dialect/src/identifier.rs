//! Identifier quoting and letter casing.

/// How a database folds the case of unquoted identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterCasing {
    /// Unquoted identifiers are folded to upper case (SQL standard, Oracle).
    #[default]
    UpperCase,
    /// Unquoted identifiers are folded to lower case (PostgreSQL).
    LowerCase,
    /// Case is preserved.
    AsIs,
}

impl LetterCasing {
    /// Applies this casing to `name`.
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::UpperCase => name.to_uppercase(),
            Self::LowerCase => name.to_lowercase(),
            Self::AsIs => name.to_owned(),
        }
    }
}

/// The characters placed around a quoted identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quoting {
    prefix: char,
    suffix: char,
}

impl Quoting {
    /// Standard SQL double quotes.
    pub const ANSI: Self = Self::new('"', '"');

    /// Creates a quoting style from its delimiters.
    #[must_use]
    pub const fn new(prefix: char, suffix: char) -> Self {
        Self { prefix, suffix }
    }

    /// The opening delimiter.
    #[must_use]
    pub const fn prefix(self) -> char {
        self.prefix
    }

    /// Wraps `name` in the delimiters, doubling any embedded closing delimiter.
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        let mut quoted = String::with_capacity(name.len() + 2);
        quoted.push(self.prefix);
        for ch in name.chars() {
            if ch == self.suffix {
                quoted.push(ch);
            }
            quoted.push(ch);
        }
        quoted.push(self.suffix);
        quoted
    }
}

impl Default for Quoting {
    fn default() -> Self {
        Self::ANSI
    }
}

/// Quoting and letter casing of a dialect's identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentifierProcessing {
    quoting: Quoting,
    letter_casing: LetterCasing,
}

impl IdentifierProcessing {
    /// Double quotes, upper-case folding.
    pub const ANSI: Self = Self::new(Quoting::ANSI, LetterCasing::UpperCase);

    /// Creates an identifier processing policy.
    #[must_use]
    pub const fn new(quoting: Quoting, letter_casing: LetterCasing) -> Self {
        Self {
            quoting,
            letter_casing,
        }
    }

    /// Quotes `name` as-is.
    #[must_use]
    pub fn quote(self, name: &str) -> String {
        self.quoting.apply(name)
    }

    /// Folds `name` the way the database folds unquoted identifiers.
    #[must_use]
    pub fn standardize_letter_case(self, name: &str) -> String {
        self.letter_casing.apply(name)
    }
}
