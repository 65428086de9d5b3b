//! Common result and field types for voter-file helpers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-valued outcome for checks that can lack the data to decide.
///
/// `Unknown` is distinct from `No`: it means the inputs (an unparseable birth
/// date, a missing election history, an unrecognized election type) did not
/// allow an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ternary {
    /// Definitely true
    Yes,
    /// Definitely false
    No,
    /// Cannot be determined from the inputs
    Unknown,
}

impl Ternary {
    /// Whether the value is `Yes` or `No`
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Convert to `Option<bool>`, mapping `Unknown` to `None`
    #[must_use]
    pub const fn to_option(self) -> Option<bool> {
        match self {
            Self::Yes => Some(true),
            Self::No => Some(false),
            Self::Unknown => None,
        }
    }

    /// Collapse to a plain boolean, substituting `default` for `Unknown`
    #[must_use]
    pub const fn unwrap_or(self, default: bool) -> bool {
        match self {
            Self::Yes => true,
            Self::No => false,
            Self::Unknown => default,
        }
    }
}

impl From<bool> for Ternary {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

impl From<Option<bool>> for Ternary {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unknown, Self::from)
    }
}

impl fmt::Display for Ternary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "true"),
            Self::No => write!(f, "false"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A birth-date cell from a voter file, possibly missing
pub trait BirthDateField {
    /// The raw `YYYYMMDD` value, or `None` when the cell is empty
    fn birth_date_str(&self) -> Option<&str>;
}

impl BirthDateField for str {
    fn birth_date_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl BirthDateField for &str {
    fn birth_date_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl BirthDateField for String {
    fn birth_date_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: BirthDateField> BirthDateField for Option<T> {
    fn birth_date_str(&self) -> Option<&str> {
        self.as_ref().and_then(BirthDateField::birth_date_str)
    }
}
