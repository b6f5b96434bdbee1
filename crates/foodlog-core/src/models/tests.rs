#[cfg(test)]
mod model_tests {
    use serde_json::json;

    use crate::models::{
        FoodDraft, FoodInfoResponse, MealType, NutriGrade, NutriScore, Nutrients,
        NutritionResponse, ProgressState, ReferenceMatch, ServingOptionValue,
        ServingSizeResponse, StepData, StepId, StepSequence,
    };

    fn create_test_nutrition_response() -> NutritionResponse {
        serde_json::from_value(json!({
            "nutrition": {"calories": 250.0, "protein": 8.0, "carbs": 30.0, "fat": 10.0},
            "adjusted_nutrition": {"calories": 75.0, "protein": 2.4, "carbs": 9.0, "fat": 3.0},
            "nutri_score": {"grade": "C", "score": 5, "simple_score": 55},
            "from_reference": true,
            "reference_id": 42,
            "weight": 30.0,
            "unit": "slice"
        }))
        .expect("valid nutrition response")
    }

    #[test]
    fn test_step_id_navigation() {
        assert_eq!(StepId::FoodInfo.next(), Some(StepId::ServingSize));
        assert_eq!(StepId::Confirmation.next(), None);
        assert_eq!(StepId::FoodInfo.previous(), None);
        assert_eq!(StepId::NutritionInfo.previous(), Some(StepId::ServingSize));
        assert_eq!(StepId::from_index(3), Some(StepId::Confirmation));
        assert_eq!(StepId::from_index(4), None);
    }

    #[test]
    fn test_step_id_element_ids() {
        let ids: Vec<_> = StepId::ALL.iter().map(|s| s.element_id()).collect();
        assert_eq!(
            ids,
            vec![
                "food-info-step",
                "serving-size-step",
                "nutrition-info-step",
                "confirmation-step"
            ]
        );
    }

    #[test]
    fn test_new_sequence_starts_on_first_step() {
        let steps = StepSequence::new();
        assert_eq!(steps.current(), StepId::FoodInfo);
        assert!(steps.steps().iter().all(|s| !s.is_complete && s.data.is_none()));
        assert_eq!(steps.steps()[2].title, "Nutrition Information");
    }

    #[test]
    fn test_complete_out_of_order() {
        let mut steps = StepSequence::new();
        steps.show(StepId::ServingSize);
        steps.complete(StepData::Nutrition(create_test_nutrition_response()));

        assert!(steps.is_complete(StepId::NutritionInfo));
        assert!(!steps.is_complete(StepId::ServingSize));
        assert_eq!(steps.current(), StepId::ServingSize);
        assert_eq!(
            steps.progress(),
            [
                ProgressState::Completed,
                ProgressState::Current,
                ProgressState::Completed,
                ProgressState::Upcoming,
            ]
        );
    }

    #[test]
    fn test_reset_clears_flags_and_data() {
        let mut steps = StepSequence::new();
        steps.complete(StepData::FoodInfo(FoodInfoResponse::default()));
        steps.show(StepId::Confirmation);

        steps.reset();

        assert_eq!(steps.current(), StepId::FoodInfo);
        assert!(!steps.is_complete(StepId::FoodInfo));
        assert!(steps.food_info().is_none());
    }

    #[test]
    fn test_found_in_catalog() {
        let mut steps = StepSequence::new();
        assert!(!steps.found_in_catalog());

        steps.complete(StepData::FoodInfo(FoodInfoResponse {
            formatted_description: "Bread".to_string(),
            found_in_db: true,
            reference: None,
        }));
        assert!(steps.found_in_catalog());
    }

    #[test]
    fn test_nutrients_drop_non_numeric_entries() {
        let nutrients: Nutrients = serde_json::from_value(json!({
            "calories": 120,
            "protein": 4.5,
            "nutri_score": {"grade": "B"},
            "label": "per 100g"
        }))
        .expect("valid nutrients");

        assert_eq!(nutrients.len(), 2);
        assert_eq!(nutrients.calories(), 120.0);
        assert_eq!(nutrients.protein(), 4.5);
        assert_eq!(nutrients.fat(), 0.0);
    }

    #[test]
    fn test_nutrients_null_is_empty() {
        let nutrients: Nutrients = serde_json::from_value(json!(null)).expect("null nutrients");
        assert!(nutrients.is_empty());
    }

    #[test]
    fn test_nutri_grade_parsing() {
        assert_eq!("b".parse::<NutriGrade>(), Ok(NutriGrade::B));
        assert!("F".parse::<NutriGrade>().is_err());
        assert_eq!(NutriGrade::C.color(), "#FECB02");
    }

    #[test]
    fn test_meal_type_parsing() {
        assert_eq!("Dinner".parse::<MealType>(), Ok(MealType::Dinner));
        assert!("brunch".parse::<MealType>().is_err());
        assert_eq!(MealType::parse_or_default("brunch"), MealType::Snack);
        assert_eq!(
            serde_json::to_value(MealType::Tea).expect("serializable"),
            json!("tea")
        );
    }

    #[test]
    fn test_reference_display_name() {
        let mut reference = ReferenceMatch {
            name: "Oat Cookie".to_string(),
            brand: Some("Generic".to_string()),
            ..Default::default()
        };
        assert_eq!(reference.display_name(), "Oat Cookie");

        reference.brand = Some("Bakehouse".to_string());
        assert_eq!(reference.display_name(), "Oat Cookie (Bakehouse)");

        reference.brand = None;
        assert_eq!(reference.display_name(), "Oat Cookie");
    }

    #[test]
    fn test_serving_option_values() {
        let response: ServingSizeResponse = serde_json::from_value(json!({
            "default_serving": {"quantity": 30, "unit": "slice"},
            "unit": "slice",
            "weight": 30,
            "last_used_meal_type": "brunch",
            "options": [
                {"label": "1 slice (30g)", "value": 30},
                {"label": "2 slices (60g)", "value": "60"},
                {"label": "Custom amount (g)", "value": "custom"}
            ]
        }))
        .expect("valid serving response");

        let values: Vec<_> = response.options.iter().map(|o| o.value).collect();
        assert_eq!(
            values,
            vec![
                ServingOptionValue::Grams(30.0),
                ServingOptionValue::Grams(60.0),
                ServingOptionValue::Custom
            ]
        );
        assert_eq!(response.meal_type(), None);
        assert_eq!(
            serde_json::to_value(ServingOptionValue::Custom).expect("serializable"),
            json!("custom")
        );
    }

    #[test]
    fn test_draft_defaults() {
        let draft = FoodDraft::default();
        assert_eq!(draft.quantity, 100.0);
        assert_eq!(draft.unit, "g");
        assert!(draft.nutrition.is_empty());
        assert!(!draft.is_shared);
        assert!(draft.meal_type.is_none());
    }

    #[test]
    fn test_draft_clear_food_data_keeps_identity() {
        let mut draft = FoodDraft {
            name: "Banana".to_string(),
            brand: "Fyffes".to_string(),
            is_shared: true,
            quantity: 12.0,
            unit: "cookie".to_string(),
            reference_id: Some(12),
            reference: Some(ReferenceMatch {
                id: Some(12),
                name: "Oat cookie".to_string(),
                ..Default::default()
            }),
            meal_type: Some(MealType::Tea),
            ..Default::default()
        };
        draft.apply_nutrition(&create_test_nutrition_response());

        draft.clear_food_data();

        assert_eq!(draft.name, "Banana");
        assert_eq!(draft.brand, "Fyffes");
        assert!(draft.is_shared);
        assert_eq!(draft.quantity, 100.0);
        assert_eq!(draft.unit, "g");
        assert_eq!(draft.reference, None);
        assert_eq!(draft.reference_id, None);
        assert_eq!(draft.meal_type, None);
        assert_eq!(draft.per_serving, None);
        assert!(draft.nutrition.is_empty());
        assert!(draft.nutri_score.is_none());
    }

    #[test]
    fn test_clear_after_keeps_earlier_steps() {
        let mut steps = StepSequence::new();
        steps.complete(StepData::FoodInfo(FoodInfoResponse::default()));
        steps.complete(StepData::Nutrition(create_test_nutrition_response()));

        steps.clear_after(StepId::FoodInfo);

        assert!(steps.is_complete(StepId::FoodInfo));
        assert!(steps.food_info().is_some());
        assert!(!steps.is_complete(StepId::NutritionInfo));
        assert!(steps.nutrition().is_none());
    }

    #[test]
    fn test_draft_apply_serving() {
        let mut draft = FoodDraft::default();
        let response: ServingSizeResponse = serde_json::from_value(json!({
            "default_serving": {"quantity": 50},
            "unit": "egg",
            "weight": 50,
            "last_used_meal_type": "breakfast"
        }))
        .expect("valid serving response");

        draft.apply_serving(&response);

        assert_eq!(draft.quantity, 50.0);
        assert_eq!(draft.unit, "egg");
        assert_eq!(draft.weight_per_unit, Some(50.0));
        assert_eq!(draft.meal_type, Some(MealType::Breakfast));
    }

    #[test]
    fn test_draft_apply_serving_keeps_positive_quantity() {
        let mut draft = FoodDraft::default();
        let response: ServingSizeResponse = serde_json::from_value(json!({
            "default_serving": {"quantity": 0},
            "unit": null
        }))
        .expect("valid serving response");

        draft.apply_serving(&response);

        assert_eq!(draft.quantity, 100.0);
        assert_eq!(draft.unit, "g");
    }

    #[test]
    fn test_draft_apply_nutrition_from_reference() {
        let mut draft = FoodDraft::default();
        draft.apply_nutrition(&create_test_nutrition_response());

        assert_eq!(draft.nutrition.calories(), 250.0);
        assert_eq!(
            draft.adjusted_nutrition.as_ref().map(Nutrients::calories),
            Some(75.0)
        );
        assert_eq!(draft.nutri_score, Some(NutriScore {
            grade: NutriGrade::C,
            score: Some(5.0),
            simple_score: Some(55.0),
        }));
        assert_eq!(draft.reference_id, Some(42));
        assert_eq!(draft.weight_per_unit, Some(30.0));
        assert_eq!(draft.unit, "slice");
        assert!(draft.per_serving.is_none());
    }

    #[test]
    fn test_draft_ignores_reference_id_when_not_from_reference() {
        let mut draft = FoodDraft::default();
        let mut response = create_test_nutrition_response();
        response.from_reference = false;
        response.weight = Some(0.0);
        response.unit = Some(String::new());

        draft.apply_nutrition(&response);

        assert_eq!(draft.reference_id, None);
        assert_eq!(draft.weight_per_unit, None);
        assert_eq!(draft.unit, "g");
    }

    #[test]
    fn test_save_request_shape() {
        let mut draft = FoodDraft {
            name: "Toast".to_string(),
            quantity: 30.0,
            is_shared: true,
            ..Default::default()
        };
        draft.nutrition.insert("calories", 250.0);

        let body = serde_json::to_value(draft.save_request()).expect("serializable");
        assert_eq!(body["meal_type"], json!("snack"));
        assert_eq!(body["is_shared"], json!(true));
        assert_eq!(body["nutrition"]["calories"], json!(250.0));
        assert!(body.get("reference_id").is_none());

        draft.reference_id = Some(7);
        let body = serde_json::to_value(draft.save_request()).expect("serializable");
        assert_eq!(body["reference_id"], json!(7));
    }
}
