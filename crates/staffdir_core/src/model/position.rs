//! Position catalog.
//!
//! # Responsibility
//! - Define the closed set of role categories in the company hierarchy.
//! - Attach the fixed base salary and hierarchy level to each role.
//!
//! # Invariants
//! - Declaration order is the catalog's natural order and never changes
//!   without a breaking release.
//! - Base salary and level are read-only facts with no failure modes.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Role category in the company hierarchy.
///
/// Declaration order runs from most to least senior, and the derived `Ord`
/// follows it, so ordered collections keyed by `Position` iterate in
/// hierarchy order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    President,
    VicePresident,
    Manager,
    Programmer,
    Intern,
}

const ALL_POSITIONS: &[Position] = &[
    Position::President,
    Position::VicePresident,
    Position::Manager,
    Position::Programmer,
    Position::Intern,
];

impl Position {
    /// Returns every catalog entry in declaration order.
    pub fn all() -> &'static [Position] {
        ALL_POSITIONS
    }

    /// Nominal base salary attached to the role.
    ///
    /// Informational only: an employee's actual salary is supplied
    /// independently and is never derived from this figure.
    pub fn base_salary(&self) -> u32 {
        match self {
            Self::President => 25_000,
            Self::VicePresident => 18_000,
            Self::Manager => 12_000,
            Self::Programmer => 8_000,
            Self::Intern => 3_000,
        }
    }

    /// Hierarchy level of the role. Lower means more senior.
    pub fn level(&self) -> u8 {
        match self {
            Self::President => 1,
            Self::VicePresident => 2,
            Self::Manager => 3,
            Self::Programmer => 4,
            Self::Intern => 5,
        }
    }

    /// Human-readable role title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::President => "president",
            Self::VicePresident => "vice president",
            Self::Manager => "manager",
            Self::Programmer => "programmer",
            Self::Intern => "intern",
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
