//! Nutrient maps and Nutri-Score grades.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Mapping of nutrient name to amount.
///
/// Keys follow the backend's naming (`calories`, `energy_kj`, `protein`,
/// `carbs`, `sugars`, `fat`, `saturated_fat`, `sodium`, `fiber`,
/// `fruits_veg_nuts`). Non-numeric entries in incoming maps are dropped.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Nutrients(BTreeMap<String, f64>);

impl Nutrients {
    pub fn new() -> Self {
        Self::default()
    }

    /// Amount for `name`, or `0.0` when absent.
    pub fn get(&self, name: &str) -> f64 {
        self.0.get(name).copied().unwrap_or(0.0)
    }

    pub fn insert(&mut self, name: impl Into<String>, amount: f64) {
        self.0.insert(name.into(), amount);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn calories(&self) -> f64 {
        self.get("calories")
    }

    pub fn protein(&self) -> f64 {
        self.get("protein")
    }

    pub fn carbs(&self) -> f64 {
        self.get("carbs")
    }

    pub fn fat(&self) -> f64 {
        self.get("fat")
    }
}

impl<'de> Deserialize<'de> for Nutrients {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<BTreeMap<String, serde_json::Value>>::deserialize(deserializer)?;
        Ok(Self(
            raw.unwrap_or_default()
                .into_iter()
                .filter_map(|(name, value)| value.as_f64().map(|amount| (name, amount)))
                .collect(),
        ))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Nutrients {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Nutri-Score letter grade, A (best) to E (worst).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum NutriGrade {
    A,
    B,
    C,
    D,
    E,
}

impl NutriGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutriGrade::A => "A",
            NutriGrade::B => "B",
            NutriGrade::C => "C",
            NutriGrade::D => "D",
            NutriGrade::E => "E",
        }
    }

    /// Badge colour of the official Nutri-Score label.
    ///
    /// ```rust
    /// use foodlog_core::models::NutriGrade;
    ///
    /// assert_eq!(NutriGrade::A.color(), "#038141");
    /// assert_eq!(NutriGrade::E.color(), "#E63E11");
    /// ```
    pub fn color(&self) -> &'static str {
        match self {
            NutriGrade::A => "#038141",
            NutriGrade::B => "#85BB2F",
            NutriGrade::C => "#FECB02",
            NutriGrade::D => "#EE8100",
            NutriGrade::E => "#E63E11",
        }
    }
}

impl FromStr for NutriGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(NutriGrade::A),
            "B" => Ok(NutriGrade::B),
            "C" => Ok(NutriGrade::C),
            "D" => Ok(NutriGrade::D),
            "E" => Ok(NutriGrade::E),
            _ => Err(format!("Invalid Nutri-Score grade: {s}")),
        }
    }
}

/// Nutri-Score as computed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutriScore {
    pub grade: NutriGrade,

    /// Raw score, -15 (best) to +40 (worst)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Normalised 0-100 score, 100 being best
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_score: Option<f64>,
}

impl NutriScore {
    pub fn from_grade(grade: NutriGrade) -> Self {
        Self {
            grade,
            score: None,
            simple_score: None,
        }
    }
}
