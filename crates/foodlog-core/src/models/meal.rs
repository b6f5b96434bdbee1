//! Meal type enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Meal an entry is logged against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    #[default]
    Snack,
    Tea,
}

impl MealType {
    pub const ALL: [MealType; 5] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
        MealType::Tea,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
            MealType::Tea => "tea",
        }
    }

    /// Parses a meal type, falling back to [`MealType::Snack`] for anything
    /// unrecognised, the same rule the backend applies on save.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            "tea" => Ok(MealType::Tea),
            _ => Err(format!("Invalid meal type: {s}")),
        }
    }
}
