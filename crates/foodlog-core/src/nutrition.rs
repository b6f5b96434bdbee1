//! Nutrition source selection and the confirmation summary.

use serde::{Deserialize, Serialize};

use crate::models::{NutriGrade, Nutrients, NutritionResponse};

/// Whether nutrition comes from the backend or from the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NutritionMode {
    /// Ask the backend to compute nutrition
    #[default]
    Automatic,
    /// Submit user-entered values and let the backend score them
    Manual,
}

impl NutritionMode {
    /// Switches to the other mode.
    pub fn toggle(&mut self) {
        *self = match self {
            NutritionMode::Automatic => NutritionMode::Manual,
            NutritionMode::Manual => NutritionMode::Automatic,
        };
    }

    pub fn is_manual(&self) -> bool {
        matches!(self, NutritionMode::Manual)
    }

    /// Label of the nutrition step's submit control.
    pub fn submit_label(&self) -> &'static str {
        match self {
            NutritionMode::Automatic => "Get Nutrition",
            NutritionMode::Manual => "Continue with Manual Values",
        }
    }

    /// Label of the control that switches to the other mode.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            NutritionMode::Automatic => "Enter nutrition values manually",
            NutritionMode::Manual => "Use AI to calculate nutrition",
        }
    }
}

/// Where the confirmed nutrition values came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NutritionSource {
    Manual,
    Database,
    AiCalculation,
}

impl NutritionSource {
    /// Manual entry wins, then a catalog hit; anything else was computed.
    pub fn resolve(manual: bool, from_reference: bool) -> Self {
        if manual {
            NutritionSource::Manual
        } else if from_reference {
            NutritionSource::Database
        } else {
            NutritionSource::AiCalculation
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NutritionSource::Manual => "Manual entry",
            NutritionSource::Database => "Database",
            NutritionSource::AiCalculation => "AI calculation",
        }
    }
}

/// Values to summarise for a response: the per-serving values of a manual
/// entry when the backend returned them, the quantity-adjusted values
/// otherwise.
pub fn display_values(response: &NutritionResponse, manual: bool) -> &Nutrients {
    match &response.per_serving {
        Some(per_serving) if manual => per_serving,
        _ => &response.adjusted_nutrition,
    }
}

/// Nutrition shown on the confirmation step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionSummary {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub grade: NutriGrade,
    pub source: NutritionSource,
    pub serving_label: String,
}

impl NutritionSummary {
    /// Builds the summary for a nutrition response.
    pub fn from_response(
        response: &NutritionResponse,
        manual: bool,
        serving_label: impl Into<String>,
    ) -> Self {
        let values = display_values(response, manual);
        Self {
            calories: values.calories(),
            protein: values.protein(),
            carbs: values.carbs(),
            fat: values.fat(),
            grade: response.nutri_score.grade,
            source: NutritionSource::resolve(manual, response.from_reference),
            serving_label: serving_label.into(),
        }
    }

    /// `"{n} kcal"`, rounded to whole kilocalories.
    pub fn calories_label(&self) -> String {
        format!("{} kcal", self.calories.round())
    }

    pub fn protein_label(&self) -> String {
        grams_label(self.protein)
    }

    pub fn carbs_label(&self) -> String {
        grams_label(self.carbs)
    }

    pub fn fat_label(&self) -> String {
        grams_label(self.fat)
    }
}

fn grams_label(amount: f64) -> String {
    format!("{}g", amount.round())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn create_test_response(per_serving: bool, from_reference: bool) -> NutritionResponse {
        let mut body = json!({
            "nutrition": {"calories": 400.0, "protein": 10.0, "carbs": 60.0, "fat": 12.0},
            "adjusted_nutrition": {"calories": 120.4, "protein": 3.0, "carbs": 18.0, "fat": 3.6},
            "nutri_score": {"grade": "B"},
            "from_reference": from_reference
        });
        if per_serving {
            body["per_serving"] = json!({"calories": 130.0, "protein": 3.5, "carbs": 19.5, "fat": 4.5});
        }
        serde_json::from_value(body).expect("valid nutrition response")
    }

    #[test]
    fn test_mode_toggle_and_labels() {
        let mut mode = NutritionMode::default();
        assert_eq!(mode.submit_label(), "Get Nutrition");
        assert_eq!(mode.toggle_label(), "Enter nutrition values manually");

        mode.toggle();
        assert!(mode.is_manual());
        assert_eq!(mode.submit_label(), "Continue with Manual Values");
        assert_eq!(mode.toggle_label(), "Use AI to calculate nutrition");

        mode.toggle();
        assert_eq!(mode, NutritionMode::Automatic);
    }

    #[test]
    fn test_source_resolution_order() {
        assert_eq!(NutritionSource::resolve(true, true).label(), "Manual entry");
        assert_eq!(NutritionSource::resolve(false, true).label(), "Database");
        assert_eq!(NutritionSource::resolve(false, false).label(), "AI calculation");
    }

    #[test]
    fn test_display_values_prefer_per_serving_only_in_manual_mode() {
        let response = create_test_response(true, false);
        assert_eq!(display_values(&response, true).calories(), 130.0);
        assert_eq!(display_values(&response, false).calories(), 120.4);

        let response = create_test_response(false, false);
        assert_eq!(display_values(&response, true).calories(), 120.4);
    }

    #[test]
    fn test_summary_labels_round() {
        let summary =
            NutritionSummary::from_response(&create_test_response(false, true), false, "30g (1 slice)");

        assert_eq!(summary.calories_label(), "120 kcal");
        assert_eq!(summary.protein_label(), "3g");
        assert_eq!(summary.carbs_label(), "18g");
        assert_eq!(summary.fat_label(), "4g");
        assert_eq!(summary.grade, NutriGrade::B);
        assert_eq!(summary.source, NutritionSource::Database);
        assert_eq!(summary.serving_label, "30g (1 slice)");
    }
}
