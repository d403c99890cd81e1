//! Belt ranks and their minimum tenure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// IBJJF adult belt progression, stored by its Portuguese name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Belt {
    #[serde(alias = "White")]
    Branca,
    #[serde(alias = "Blue")]
    Azul,
    #[serde(alias = "Purple")]
    Roxa,
    #[serde(alias = "Brown")]
    Marrom,
    #[serde(alias = "Black")]
    Preta,
}

impl Belt {
    /// Maximum number of stripes shown on any belt.
    pub const MAX_STRIPES: i64 = 4;

    /// Minimum months at this belt before the next graduation.
    ///
    /// For black belt this is the tenure before the first degree.
    pub fn min_months(&self) -> u32 {
        match self {
            Belt::Branca => 12,
            Belt::Azul => 24,
            Belt::Roxa => 18,
            Belt::Marrom => 12,
            Belt::Preta => 36,
        }
    }

    /// Next belt in the progression, `None` for black belt.
    pub fn next(&self) -> Option<Belt> {
        match self {
            Belt::Branca => Some(Belt::Azul),
            Belt::Azul => Some(Belt::Roxa),
            Belt::Roxa => Some(Belt::Marrom),
            Belt::Marrom => Some(Belt::Preta),
            Belt::Preta => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Belt::Branca => "Branca",
            Belt::Azul => "Azul",
            Belt::Roxa => "Roxa",
            Belt::Marrom => "Marrom",
            Belt::Preta => "Preta",
        }
    }
}

impl fmt::Display for Belt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Belt {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Branca" | "White" => Ok(Belt::Branca),
            "Azul" | "Blue" => Ok(Belt::Azul),
            "Roxa" | "Purple" => Ok(Belt::Roxa),
            "Marrom" | "Brown" => Ok(Belt::Marrom),
            "Preta" | "Black" => Ok(Belt::Preta),
            other => Err(ValidationError::invalid_format(
                "belt",
                format!("unknown belt '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_months_per_belt() {
        assert_eq!(Belt::Branca.min_months(), 12);
        assert_eq!(Belt::Azul.min_months(), 24);
        assert_eq!(Belt::Roxa.min_months(), 18);
        assert_eq!(Belt::Marrom.min_months(), 12);
        assert_eq!(Belt::Preta.min_months(), 36);
    }

    #[test]
    fn progression_order() {
        assert_eq!(Belt::Branca.next(), Some(Belt::Azul));
        assert_eq!(Belt::Marrom.next(), Some(Belt::Preta));
        assert_eq!(Belt::Preta.next(), None);
        assert!(Belt::Azul < Belt::Roxa);
    }

    #[test]
    fn parses_portuguese_and_english_names() {
        assert_eq!("Roxa".parse::<Belt>().unwrap(), Belt::Roxa);
        assert_eq!("Purple".parse::<Belt>().unwrap(), Belt::Roxa);
        assert!("Coral".parse::<Belt>().is_err());
    }

    #[test]
    fn serializes_portuguese_name() {
        assert_eq!(serde_json::to_string(&Belt::Marrom).unwrap(), "\"Marrom\"");
        let belt: Belt = serde_json::from_str("\"Blue\"").unwrap();
        assert_eq!(belt, Belt::Azul);
    }
}
