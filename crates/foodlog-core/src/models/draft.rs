//! The food record accumulated across wizard steps.

use log::warn;
use serde::{Deserialize, Serialize};

use super::{
    FoodIdentity, MealType, NutriScore, Nutrients, NutritionResponse, ReferenceMatch,
    SaveFoodRequest, ServingSizeResponse,
};

/// Default quantity in grams before a serving is chosen.
pub const DEFAULT_QUANTITY: f64 = 100.0;

/// Default serving unit.
pub const DEFAULT_UNIT: &str = "g";

/// Food entry under construction.
///
/// Owned by the wizard and mutated as each step's response arrives. The
/// nutrition map stays empty until the nutrition step completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodDraft {
    pub name: String,
    pub brand: String,
    pub description: String,

    /// Serving quantity in grams
    pub quantity: f64,

    /// Serving unit (`g`, `ml`, `slice`, ...)
    pub unit: String,

    /// Weight in grams of one `unit`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_per_unit: Option<f64>,

    /// Values per 100g, as stored by the backend
    pub nutrition: Nutrients,

    /// Values for the chosen quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_nutrition: Option<Nutrients>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutri_score: Option<NutriScore>,

    /// Values exactly as entered in manual mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_serving: Option<Nutrients>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<ReferenceMatch>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,

    pub is_shared: bool,
}

impl Default for FoodDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            brand: String::new(),
            description: String::new(),
            quantity: DEFAULT_QUANTITY,
            unit: DEFAULT_UNIT.to_string(),
            weight_per_unit: None,
            nutrition: Nutrients::new(),
            adjusted_nutrition: None,
            nutri_score: None,
            per_serving: None,
            reference: None,
            reference_id: None,
            meal_type: None,
            is_shared: false,
        }
    }
}

impl FoodDraft {
    /// Identity fields as sent to the verification and serving endpoints.
    pub fn identity(&self) -> FoodIdentity {
        FoodIdentity {
            name: self.name.clone(),
            brand: self.brand.clone(),
            description: self.description.clone(),
        }
    }

    /// Replaces the identity fields.
    pub fn set_identity(&mut self, identity: FoodIdentity) {
        self.name = identity.name;
        self.brand = identity.brand;
        self.description = identity.description;
    }

    /// Drops everything learned about the previous food: serving, nutrition,
    /// the catalog match and the meal type it suggested. Identity and the
    /// sharing flag are kept.
    pub fn clear_food_data(&mut self) {
        *self = Self {
            name: std::mem::take(&mut self.name),
            brand: std::mem::take(&mut self.brand),
            description: std::mem::take(&mut self.description),
            is_shared: self.is_shared,
            ..Self::default()
        };
    }

    /// Sets the serving quantity; non-positive or non-finite amounts are
    /// ignored so the quantity stays positive.
    pub fn set_quantity(&mut self, quantity: f64) -> bool {
        if quantity.is_finite() && quantity > 0.0 {
            self.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Applies a serving size suggestion.
    pub fn apply_serving(&mut self, response: &ServingSizeResponse) {
        if !self.set_quantity(response.default_serving.quantity) {
            warn!(
                "Ignoring non-positive default serving of {} for '{}'",
                response.default_serving.quantity, self.name
            );
        }
        self.unit = response
            .unit
            .clone()
            .filter(|unit| !unit.is_empty())
            .unwrap_or_else(|| DEFAULT_UNIT.to_string());
        self.weight_per_unit = response.weight;
        if let Some(meal_type) = response.meal_type() {
            self.meal_type = Some(meal_type);
        }
    }

    /// Merges a nutrition response.
    ///
    /// `per_serving` is only overwritten when the response carries one, the
    /// reference id only when the values came from the catalog, and the
    /// serving weight and unit only when present and meaningful.
    pub fn apply_nutrition(&mut self, response: &NutritionResponse) {
        self.nutrition = response.nutrition.clone();
        self.adjusted_nutrition = Some(response.adjusted_nutrition.clone());
        self.nutri_score = Some(response.nutri_score.clone());

        if let Some(per_serving) = &response.per_serving {
            self.per_serving = Some(per_serving.clone());
        }
        if response.from_reference {
            if let Some(id) = response.reference_id {
                self.reference_id = Some(id);
            }
        }
        if let Some(weight) = response.weight.filter(|w| *w != 0.0) {
            self.weight_per_unit = Some(weight);
        }
        if let Some(unit) = response.unit.as_deref().filter(|u| !u.is_empty()) {
            self.unit = unit.to_string();
        }
    }

    /// Final body for the save endpoint.
    pub fn save_request(&self) -> SaveFoodRequest {
        SaveFoodRequest {
            name: self.name.clone(),
            brand: self.brand.clone(),
            description: self.description.clone(),
            quantity: self.quantity,
            meal_type: self.meal_type.unwrap_or_default(),
            is_shared: self.is_shared,
            nutrition: self.nutrition.clone(),
            reference_id: self.reference_id,
        }
    }
}
