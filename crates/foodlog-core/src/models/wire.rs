//! Request and response bodies exchanged with the food backend.
//!
//! All bodies are JSON with `snake_case` keys. Response types are lenient:
//! optional fields default when absent or `null`, and unknown keys are
//! ignored, since the backend returns more than the wizard consumes.

use serde::{Deserialize, Serialize};

use super::{MealType, NutriScore, Nutrients};

/// Identity of a food as typed in step one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FoodIdentity {
    pub name: String,
    pub brand: String,
    pub description: String,
}

/// A previously stored food the backend matched against the identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReferenceMatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    pub name: String,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_meal_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_per_unit: Option<f64>,
}

impl ReferenceMatch {
    /// Name with the brand in parentheses, omitting empty and `Generic`
    /// brands.
    pub fn display_name(&self) -> String {
        match self.brand.as_deref().map(str::trim) {
            Some(brand) if !brand.is_empty() && brand != "Generic" => {
                format!("{} ({brand})", self.name)
            }
            _ => self.name.clone(),
        }
    }

    /// The reference's last meal type, when it is one the client knows.
    pub fn meal_type(&self) -> Option<MealType> {
        self.last_used_meal_type.as_deref()?.parse().ok()
    }
}

/// Response of the food verification endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FoodInfoResponse {
    #[serde(default)]
    pub formatted_description: String,

    #[serde(default)]
    pub found_in_db: bool,

    #[serde(default)]
    pub reference: Option<ReferenceMatch>,
}

/// Suggested default serving.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultServing {
    pub quantity: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawOptionValue {
    Number(f64),
    Text(String),
}

/// Value of a serving option: an amount in grams, or the custom-amount
/// choice that asks the user to type one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawOptionValue", into = "RawOptionValue")]
pub enum ServingOptionValue {
    Grams(f64),
    Custom,
}

impl TryFrom<RawOptionValue> for ServingOptionValue {
    type Error = String;

    fn try_from(raw: RawOptionValue) -> Result<Self, Self::Error> {
        match raw {
            RawOptionValue::Number(grams) => Ok(ServingOptionValue::Grams(grams)),
            RawOptionValue::Text(text) if text.eq_ignore_ascii_case("custom") => {
                Ok(ServingOptionValue::Custom)
            }
            RawOptionValue::Text(text) => text
                .trim()
                .parse()
                .map(ServingOptionValue::Grams)
                .map_err(|_| format!("Invalid serving option value: {text}")),
        }
    }
}

impl From<ServingOptionValue> for RawOptionValue {
    fn from(value: ServingOptionValue) -> Self {
        match value {
            ServingOptionValue::Grams(grams) => RawOptionValue::Number(grams),
            ServingOptionValue::Custom => RawOptionValue::Text("custom".to_string()),
        }
    }
}

/// One entry of the serving size selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServingOption {
    pub value: ServingOptionValue,
    pub label: String,
}

/// Response of the serving size suggestion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServingSizeResponse {
    pub default_serving: DefaultServing,

    /// Serving unit (`g`, `ml`, `slice`, `cup`, ...)
    #[serde(default)]
    pub unit: Option<String>,

    /// Weight in grams of one `unit`
    #[serde(default)]
    pub weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_meal_type: Option<String>,

    #[serde(default)]
    pub options: Vec<ServingOption>,
}

impl ServingSizeResponse {
    /// The last meal type, when it is one the client knows.
    pub fn meal_type(&self) -> Option<MealType> {
        self.last_used_meal_type.as_deref()?.parse().ok()
    }
}

/// Nutrition values typed in by the user, for the exact serving.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManualNutrition {
    pub calories: f64,
    pub energy_kj: f64,
    pub protein: f64,
    pub carbs: f64,
    pub sugars: f64,
    pub fat: f64,
    pub saturated_fat: f64,
    pub sodium: f64,
    pub fiber: f64,
    pub fruits_veg_nuts: f64,
    pub unit: Option<String>,
    pub weight: f64,
}

/// Body of the nutrition endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionRequest {
    pub name: String,
    pub brand: String,
    pub description: String,
    pub quantity: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<ManualNutrition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_manual: Option<bool>,
}

impl NutritionRequest {
    /// Request for backend-computed nutrition (or a catalog lookup).
    pub fn automatic(identity: FoodIdentity, quantity: f64) -> Self {
        Self {
            name: identity.name,
            brand: identity.brand,
            description: identity.description,
            quantity,
            nutrition: None,
            is_manual: None,
        }
    }

    /// Request that asks the backend to score user-supplied values.
    pub fn manual(identity: FoodIdentity, quantity: f64, nutrition: ManualNutrition) -> Self {
        Self {
            nutrition: Some(nutrition),
            is_manual: Some(true),
            ..Self::automatic(identity, quantity)
        }
    }
}

/// Response of the nutrition endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionResponse {
    /// Values per 100g
    #[serde(default)]
    pub nutrition: Nutrients,

    /// Values for the requested quantity
    #[serde(default)]
    pub adjusted_nutrition: Nutrients,

    pub nutri_score: NutriScore,

    /// Values exactly as entered, for manual entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_serving: Option<Nutrients>,

    #[serde(default)]
    pub from_reference: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(default)]
    pub is_manual: bool,
}

/// Body of the save endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveFoodRequest {
    pub name: String,
    pub brand: String,
    pub description: String,
    pub quantity: f64,
    pub meal_type: MealType,
    pub is_shared: bool,
    pub nutrition: Nutrients,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<u64>,
}

/// Error payload returned with non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
