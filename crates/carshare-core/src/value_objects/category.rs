//! Car body-type category

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of car body-type categories an image can be filed under.
///
/// The wire form is the human-readable label ("Sports Car", "SUV", ...),
/// which is also what gets stored in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Sports Car")]
    SportsCar,
    #[serde(rename = "SUV")]
    Suv,
    Sedan,
    Hatchback,
    Coupe,
    Convertible,
    Classic,
    Electric,
    Luxury,
    #[serde(rename = "Off-Road")]
    OffRoad,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 10] = [
        Category::SportsCar,
        Category::Suv,
        Category::Sedan,
        Category::Hatchback,
        Category::Coupe,
        Category::Convertible,
        Category::Classic,
        Category::Electric,
        Category::Luxury,
        Category::OffRoad,
    ];

    /// The human-readable label (also the storage form)
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SportsCar => "Sports Car",
            Self::Suv => "SUV",
            Self::Sedan => "Sedan",
            Self::Hatchback => "Hatchback",
            Self::Coupe => "Coupe",
            Self::Convertible => "Convertible",
            Self::Classic => "Classic",
            Self::Electric => "Electric",
            Self::Luxury => "Luxury",
            Self::OffRoad => "Off-Road",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error when parsing a Category from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}
