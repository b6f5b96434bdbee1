#![allow(dead_code)]

use foodlog_core::{
    models::{FoodInfoResponse, NutritionResponse, ReferenceMatch, ServingSizeResponse},
    service::ScriptedFoodService,
    RecordingView, Wizard, WizardBuilder,
};
use serde_json::json;

pub type TestWizard = Wizard<ScriptedFoodService, RecordingView>;

/// Helper function to create a wizard over a scripted backend
pub fn create_test_wizard() -> TestWizard {
    WizardBuilder::new(ScriptedFoodService::new())
        .with_view(RecordingView::new())
        .build()
}

pub fn new_food() -> FoodInfoResponse {
    FoodInfoResponse {
        formatted_description: "Oat cookie".to_string(),
        found_in_db: false,
        reference: None,
    }
}

pub fn catalog_food() -> FoodInfoResponse {
    FoodInfoResponse {
        formatted_description: "Oat cookie (Generic)".to_string(),
        found_in_db: true,
        reference: Some(ReferenceMatch {
            id: Some(12),
            name: "Oat cookie".to_string(),
            brand: Some("Generic".to_string()),
            last_used_meal_type: Some("tea".to_string()),
            ..Default::default()
        }),
    }
}

pub fn cookie_serving() -> ServingSizeResponse {
    serde_json::from_value(json!({
        "default_serving": {"quantity": 12, "unit": "cookie"},
        "unit": "cookie",
        "weight": 12,
        "last_used_meal_type": "tea",
        "options": [
            {"label": "1 cookie (12g)", "value": 12},
            {"label": "2 cookies (24g)", "value": 24},
            {"label": "Custom amount (g)", "value": "custom"}
        ]
    }))
    .expect("valid serving response")
}

pub fn catalog_nutrition() -> NutritionResponse {
    serde_json::from_value(json!({
        "nutrition": {"calories": 450.0, "protein": 6.0, "carbs": 65.0, "fat": 18.0},
        "adjusted_nutrition": {"calories": 54.0, "protein": 0.7, "carbs": 7.8, "fat": 2.2},
        "nutri_score": {"grade": "D", "score": 14, "simple_score": 35},
        "from_reference": true,
        "reference_id": 12,
        "unit": "cookie",
        "weight": 12
    }))
    .expect("valid nutrition response")
}

pub fn computed_nutrition() -> NutritionResponse {
    serde_json::from_value(json!({
        "nutrition": {"calories": 450.0, "protein": 6.0, "carbs": 65.0, "fat": 18.0},
        "adjusted_nutrition": {"calories": 108.0, "protein": 1.4, "carbs": 15.6, "fat": 4.3},
        "nutri_score": {"grade": "D"}
    }))
    .expect("valid nutrition response")
}
