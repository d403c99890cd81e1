//! Level tiers derived from accumulated XP.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Named XP band. Ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Iniciante,
    Guerreiro,
    Competidor,
    Dominante,
    Elite,
}

/// Inclusive lower bound of each tier, ascending.
const TIERS: [(i64, Level); 5] = [
    (0, Level::Iniciante),
    (500, Level::Guerreiro),
    (1500, Level::Competidor),
    (3000, Level::Dominante),
    (6000, Level::Elite),
];

impl Level {
    /// Highest tier whose threshold is at or below `total_xp`.
    ///
    /// Totals below zero stay in the first tier.
    pub fn for_xp(total_xp: i64) -> Self {
        TIERS
            .iter()
            .rev()
            .find(|(threshold, _)| total_xp >= *threshold)
            .map(|(_, level)| *level)
            .unwrap_or(Level::Iniciante)
    }

    /// XP needed to enter this tier.
    pub fn threshold(&self) -> i64 {
        TIERS
            .iter()
            .find(|(_, level)| level == self)
            .map(|(threshold, _)| *threshold)
            .unwrap_or(0)
    }

    /// The tier after this one, `None` at the top.
    pub fn next(&self) -> Option<Level> {
        match self {
            Level::Iniciante => Some(Level::Guerreiro),
            Level::Guerreiro => Some(Level::Competidor),
            Level::Competidor => Some(Level::Dominante),
            Level::Dominante => Some(Level::Elite),
            Level::Elite => None,
        }
    }

    /// XP still missing to reach the next tier from `total_xp`.
    ///
    /// Saturates at `i64::MAX` for totals driven far below zero.
    pub fn xp_to_next(total_xp: i64) -> Option<i64> {
        Level::for_xp(total_xp)
            .next()
            .map(|next| next.threshold().saturating_sub(total_xp))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Iniciante => "Iniciante",
            Level::Guerreiro => "Guerreiro",
            Level::Competidor => "Competidor",
            Level::Dominante => "Dominante",
            Level::Elite => "Elite",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "Iniciante" => Ok(Level::Iniciante),
            "Guerreiro" => Ok(Level::Guerreiro),
            "Competidor" => Ok(Level::Competidor),
            "Dominante" => Ok(Level::Dominante),
            "Elite" => Ok(Level::Elite),
            other => Err(ValidationError::invalid_format(
                "level",
                format!("unknown level '{}'", other),
            )),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
