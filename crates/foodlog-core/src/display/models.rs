//! Display implementations for domain models.
//!
//! This module contains the Display trait implementations for the wizard's
//! models, kept apart from the model definitions so the data types stay free
//! of presentation concerns.
//!
//! Enum-like values print their human readable label; the draft and the
//! nutrition summary print markdown for the terminal renderer.

use std::fmt;

use super::serving::ServingSize;
use crate::{
    models::{FoodDraft, MealType, NutriGrade, StepId},
    nutrition::{NutritionMode, NutritionSource, NutritionSummary},
};

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for NutriGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for NutritionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for NutritionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NutritionMode::Automatic => "automatic",
            NutritionMode::Manual => "manual",
        };
        write!(f, "{label}")
    }
}

impl fmt::Display for NutritionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Nutrition ({})", self.serving_label)?;
        writeln!(f)?;
        writeln!(f, "- **Calories**: {}", self.calories_label())?;
        writeln!(f, "- **Protein**: {}", self.protein_label())?;
        writeln!(f, "- **Carbs**: {}", self.carbs_label())?;
        writeln!(f, "- **Fat**: {}", self.fat_label())?;
        writeln!(f, "- **Nutri-Score**: {}", self.grade)?;
        writeln!(f, "- **Source**: {}", self.source)?;
        Ok(())
    }
}

impl fmt::Display for FoodDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        if !self.brand.is_empty() {
            writeln!(f, "- Brand: {}", self.brand)?;
        }
        writeln!(
            f,
            "- Serving: {}",
            ServingSize::new(Some(self.quantity), Some(&self.unit), self.weight_per_unit)
        )?;
        if let Some(meal_type) = self.meal_type {
            writeln!(f, "- Meal: {meal_type}")?;
        }
        if let Some(score) = &self.nutri_score {
            writeln!(f, "- Nutri-Score: {}", score.grade)?;
        }
        if self.is_shared {
            writeln!(f, "- Shared")?;
        }

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutriScore;

    #[test]
    fn test_enum_labels() {
        assert_eq!(StepId::NutritionInfo.to_string(), "Nutrition Information");
        assert_eq!(MealType::Breakfast.to_string(), "breakfast");
        assert_eq!(NutriGrade::D.to_string(), "D");
        assert_eq!(NutritionSource::AiCalculation.to_string(), "AI calculation");
        assert_eq!(NutritionMode::Manual.to_string(), "manual");
    }

    #[test]
    fn test_summary_markdown() {
        let summary = NutritionSummary {
            calories: 249.6,
            protein: 8.2,
            carbs: 30.0,
            fat: 9.5,
            grade: NutriGrade::B,
            source: NutritionSource::Manual,
            serving_label: "60g (2 slices)".to_string(),
        };

        let output = summary.to_string();
        assert!(output.starts_with("## Nutrition (60g (2 slices))"));
        assert!(output.contains("- **Calories**: 250 kcal"));
        assert!(output.contains("- **Fat**: 10g"));
        assert!(output.contains("- **Source**: Manual entry"));
    }

    #[test]
    fn test_draft_markdown() {
        let draft = FoodDraft {
            name: "Sourdough".to_string(),
            brand: "Bakehouse".to_string(),
            quantity: 60.0,
            unit: "slice".to_string(),
            weight_per_unit: Some(30.0),
            meal_type: Some(MealType::Lunch),
            nutri_score: Some(NutriScore::from_grade(NutriGrade::A)),
            ..Default::default()
        };

        let output = draft.to_string();
        assert!(output.starts_with("# Sourdough"));
        assert!(output.contains("- Brand: Bakehouse"));
        assert!(output.contains("- Serving: 60g (2 slices)"));
        assert!(output.contains("- Meal: lunch"));
        assert!(output.contains("- Nutri-Score: A"));
        assert!(!output.contains("Shared"));
    }
}
