//! Raw form input for each wizard step and its validation.
//!
//! Form values arrive exactly as typed (strings) and are converted into the
//! typed wire structures with `TryFrom`, following the same pattern for
//! every step:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Form values   │    │   Validation    │    │   Wire types    │
//! │   (raw text)    │───▶│   (TryFrom)     │───▶│ (typed request) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! A failed conversion yields [`WizardError::InvalidInput`] whose reason is
//! the sentence shown next to the form. Validation never touches the
//! backend.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WizardError},
    models::{FoodIdentity, ManualNutrition, MealType, ServingSizeResponse},
};

pub const FOOD_NAME_REQUIRED: &str = "Please enter a food name";
pub const INVALID_QUANTITY: &str = "Please enter a valid quantity";
pub const MANUAL_CALORIES_REQUIRED: &str =
    "Please enter at least calories, protein, carbs, and fat values";

/// Default manual serving weight when none is given.
const DEFAULT_MANUAL_WEIGHT: f64 = 100.0;

/// Step one input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodInfoForm {
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub description: String,
}

impl TryFrom<FoodInfoForm> for FoodIdentity {
    type Error = WizardError;

    fn try_from(form: FoodInfoForm) -> Result<Self> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(WizardError::invalid_input("name").with_reason(FOOD_NAME_REQUIRED));
        }
        Ok(FoodIdentity {
            name: name.to_string(),
            brand: form.brand.trim().to_string(),
            description: form.description.trim().to_string(),
        })
    }
}

/// Serving choice: one of the suggested amounts, or a typed custom amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServingSelection {
    Grams(f64),
    Custom(String),
}

impl ServingSelection {
    /// The selected quantity in grams, which must be a positive number.
    pub fn quantity(&self) -> Result<f64> {
        let quantity = match self {
            ServingSelection::Grams(grams) => Some(*grams),
            ServingSelection::Custom(raw) => leading_number(raw),
        };
        quantity
            .filter(|q| q.is_finite() && *q > 0.0)
            .ok_or_else(|| WizardError::invalid_input("quantity").with_reason(INVALID_QUANTITY))
    }
}

/// Manual nutrition input, values for the exact serving rather than per
/// 100g. Blank or unparseable numbers count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualNutritionForm {
    pub calories: String,
    pub energy_kj: String,
    pub protein: String,
    pub carbs: String,
    pub sugars: String,
    pub fat: String,
    pub saturated_fat: String,
    pub sodium: String,
    pub fiber: String,
    pub fruits_veg_nuts: String,
    pub serving_unit: Option<String>,
    pub serving_weight: String,
}

impl ManualNutritionForm {
    /// Fresh form shown on every visit to the nutrition step: all nutrients
    /// zeroed, serving unit and weight prefilled from the suggestion.
    pub fn defaults(serving: Option<&ServingSizeResponse>) -> Self {
        let zero = || "0".to_string();
        Self {
            calories: zero(),
            energy_kj: zero(),
            protein: zero(),
            carbs: zero(),
            sugars: zero(),
            fat: zero(),
            saturated_fat: zero(),
            sodium: zero(),
            fiber: zero(),
            fruits_veg_nuts: zero(),
            serving_unit: serving
                .and_then(|s| s.unit.clone())
                .filter(|unit| !unit.is_empty()),
            serving_weight: serving
                .and_then(|s| s.weight)
                .filter(|w| *w != 0.0)
                .map(|w| w.to_string())
                .unwrap_or_default(),
        }
    }

    /// Parsed serving weight, defaulting to 100g.
    pub fn weight(&self) -> f64 {
        parse_or(&self.serving_weight, DEFAULT_MANUAL_WEIGHT)
    }

    /// Selected serving unit, if any.
    pub fn unit(&self) -> Option<&str> {
        self.serving_unit.as_deref().filter(|u| !u.trim().is_empty())
    }
}

impl TryFrom<ManualNutritionForm> for ManualNutrition {
    type Error = WizardError;

    fn try_from(form: ManualNutritionForm) -> Result<Self> {
        let calories = parse_or(&form.calories, 0.0);
        if calories <= 0.0 {
            return Err(
                WizardError::invalid_input("calories").with_reason(MANUAL_CALORIES_REQUIRED)
            );
        }
        Ok(ManualNutrition {
            calories,
            energy_kj: parse_or(&form.energy_kj, 0.0),
            protein: parse_or(&form.protein, 0.0),
            carbs: parse_or(&form.carbs, 0.0),
            sugars: parse_or(&form.sugars, 0.0),
            fat: parse_or(&form.fat, 0.0),
            saturated_fat: parse_or(&form.saturated_fat, 0.0),
            sodium: parse_or(&form.sodium, 0.0),
            fiber: parse_or(&form.fiber, 0.0),
            fruits_veg_nuts: parse_or(&form.fruits_veg_nuts, 0.0),
            unit: form.unit().map(str::to_string),
            weight: form.weight(),
        })
    }
}

/// Step three input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionForm {
    pub serving: ServingSelection,
    #[serde(default)]
    pub is_shared: bool,
    /// Manual values; ignored unless manual mode is on. When absent in
    /// manual mode the zeroed defaults are submitted (and rejected).
    #[serde(default)]
    pub manual: Option<ManualNutritionForm>,
}

/// Step four input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfirmationForm {
    pub meal_type: String,
    #[serde(default)]
    pub is_shared: bool,
}

impl ConfirmationForm {
    /// Selected meal type; unknown values become [`MealType::Snack`].
    pub fn meal_type(&self) -> MealType {
        MealType::parse_or_default(&self.meal_type)
    }
}

/// Parses a number, treating blank, zero and unparseable input as
/// `fallback`.
fn parse_or(raw: &str, fallback: f64) -> f64 {
    leading_number(raw)
        .filter(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(fallback)
}

/// Reads the number at the start of `raw`, ignoring leading whitespace and
/// anything after it, so `"12kcal"` is 12 and `"3.5 g"` is 3.5.
fn leading_number(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole = digits(end);
    end += whole;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits(end + 1);
        end += 1 + fraction;
    }
    if whole + fraction == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }
    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn create_test_manual_form(calories: &str) -> ManualNutritionForm {
        ManualNutritionForm {
            calories: calories.to_string(),
            protein: "3".to_string(),
            carbs: "".to_string(),
            fat: "abc".to_string(),
            serving_unit: Some("slice".to_string()),
            ..ManualNutritionForm::defaults(None)
        }
    }

    #[test]
    fn test_food_info_requires_name() {
        let err = FoodIdentity::try_from(FoodInfoForm {
            name: "   ".to_string(),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.user_message(), FOOD_NAME_REQUIRED);
    }

    #[test]
    fn test_food_info_trims_fields() {
        let identity = FoodIdentity::try_from(FoodInfoForm {
            name: " Sourdough ".to_string(),
            brand: " Bakehouse".to_string(),
            description: "".to_string(),
        })
        .unwrap();
        assert_eq!(identity.name, "Sourdough");
        assert_eq!(identity.brand, "Bakehouse");
        assert_eq!(identity.description, "");
    }

    #[test]
    fn test_serving_selection_quantity() {
        assert_eq!(ServingSelection::Grams(30.0).quantity().unwrap(), 30.0);
        assert_eq!(
            ServingSelection::Custom(" 42.5 ".to_string()).quantity().unwrap(),
            42.5
        );

        assert_eq!(
            ServingSelection::Custom("150g".to_string()).quantity().unwrap(),
            150.0
        );

        for raw in ["", "0", "-5", "lots", "g150"] {
            let err = ServingSelection::Custom(raw.to_string()).quantity().unwrap_err();
            assert_eq!(err.user_message(), INVALID_QUANTITY);
        }
        assert!(ServingSelection::Grams(0.0).quantity().is_err());
    }

    #[test]
    fn test_manual_nutrition_requires_calories() {
        for calories in ["0", "", "-10", "none"] {
            let err = ManualNutrition::try_from(create_test_manual_form(calories)).unwrap_err();
            assert_eq!(err.user_message(), MANUAL_CALORIES_REQUIRED);
        }
    }

    #[test]
    fn test_manual_nutrition_parses_leniently() {
        let manual = ManualNutrition::try_from(create_test_manual_form("95")).unwrap();
        assert_eq!(manual.calories, 95.0);
        assert_eq!(manual.protein, 3.0);
        assert_eq!(manual.carbs, 0.0);
        assert_eq!(manual.fat, 0.0);
        assert_eq!(manual.unit.as_deref(), Some("slice"));
        assert_eq!(manual.weight, 100.0);
    }

    #[test]
    fn test_manual_nutrition_reads_leading_numbers() {
        let manual = ManualNutrition::try_from(ManualNutritionForm {
            calories: "95kcal".to_string(),
            protein: " 3.5 g".to_string(),
            sodium: "1e2mg".to_string(),
            fiber: ".5".to_string(),
            sugars: "2e".to_string(),
            fat: "-".to_string(),
            serving_weight: "40g".to_string(),
            ..ManualNutritionForm::defaults(None)
        })
        .unwrap();
        assert_eq!(manual.calories, 95.0);
        assert_eq!(manual.protein, 3.5);
        assert_eq!(manual.sodium, 100.0);
        assert_eq!(manual.fiber, 0.5);
        assert_eq!(manual.sugars, 2.0);
        assert_eq!(manual.fat, 0.0);
        assert_eq!(manual.weight, 40.0);
    }

    #[test]
    fn test_manual_defaults_prefill_from_serving() {
        let serving: ServingSizeResponse = serde_json::from_value(json!({
            "default_serving": {"quantity": 30},
            "unit": "slice",
            "weight": 30
        }))
        .unwrap();

        let form = ManualNutritionForm::defaults(Some(&serving));
        assert_eq!(form.calories, "0");
        assert_eq!(form.fruits_veg_nuts, "0");
        assert_eq!(form.unit(), Some("slice"));
        assert_eq!(form.serving_weight, "30");
        assert_eq!(form.weight(), 30.0);

        let form = ManualNutritionForm::defaults(None);
        assert_eq!(form.unit(), None);
        assert_eq!(form.weight(), 100.0);
    }

    #[test]
    fn test_confirmation_meal_type_fallback() {
        let form = ConfirmationForm {
            meal_type: "Lunch".to_string(),
            is_shared: false,
        };
        assert_eq!(form.meal_type(), MealType::Lunch);

        let form = ConfirmationForm::default();
        assert_eq!(form.meal_type(), MealType::Snack);
    }
}
