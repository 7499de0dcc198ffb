//! CSV field separator

use crate::Error;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field separator used when reading and writing CSV files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvSeparator {
    #[default]
    Semicolon,
    Comma,
    Tab,
}

impl CsvSeparator {
    /// All separators in their stored index order.
    pub const ALL: [CsvSeparator; 3] = [Self::Semicolon, Self::Comma, Self::Tab];

    pub fn as_char(&self) -> char {
        match self {
            Self::Semicolon => ';',
            Self::Comma => ',',
            Self::Tab => '\t',
        }
    }

    /// Short label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Tab => "tab",
        }
    }

    /// Position in [`CsvSeparator::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Semicolon => 0,
            Self::Comma => 1,
            Self::Tab => 2,
        }
    }

    /// Separator for a stored index; out-of-range indices fall back to
    /// the semicolon.
    pub fn from_index(index: i64) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or_default()
    }
}

impl FromStr for CsvSeparator {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            ";" | "semicolon" => Ok(Self::Semicolon),
            "," | "comma" => Ok(Self::Comma),
            "\t" | "tab" => Ok(Self::Tab),
            _ => Err(Error::InvalidSeparator {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CsvSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Semicolon => write!(f, "semicolon"),
            Self::Comma => write!(f, "comma"),
            Self::Tab => write!(f, "tab"),
        }
    }
}

/// Accepts either a name or the legacy integer index.
impl<'de> Deserialize<'de> for CsvSeparator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Index(i64),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Index(index) => Ok(Self::from_index(index)),
            Repr::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}
