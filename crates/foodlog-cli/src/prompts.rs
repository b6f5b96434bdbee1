//! Interactive form input backed by `dialoguer`.
//!
//! Each step prompt collects the raw form fields and then asks what to do
//! with them. Validation stays in the core; the prompts only gather text.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use foodlog_core::{
    forms::{ConfirmationForm, FoodInfoForm, ManualNutritionForm, ServingSelection},
    models::{FoodDraft, MealType, ServingOption, ServingOptionValue},
    NutritionMode,
};

/// What the user chose to do after filling in a step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepAction<T> {
    Submit(T),
    Back,
    Quit,
}

/// Choices on the nutrition step besides submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutritionChoice {
    Submit,
    ToggleMode,
    Back,
    Quit,
}

pub struct Prompter {
    theme: ColorfulTheme,
}

impl Prompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    pub fn food_info(&self, draft: &FoodDraft) -> Result<StepAction<FoodInfoForm>> {
        let form = FoodInfoForm {
            name: self.text("Food name", &draft.name, true)?,
            brand: self.text("Brand (optional)", &draft.brand, true)?,
            description: self.text("Description (optional)", &draft.description, true)?,
        };
        Ok(match self.action(&["Verify food", "Quit"])? {
            0 => StepAction::Submit(form),
            _ => StepAction::Quit,
        })
    }

    /// Picks one of the suggested servings. `None` when there is nothing to
    /// pick from.
    pub fn serving(
        &self,
        options: &[ServingOption],
        current: f64,
    ) -> Result<Option<ServingSelection>> {
        if options.is_empty() {
            return Ok(None);
        }
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        let default = options
            .iter()
            .position(|o| o.value == ServingOptionValue::Grams(current))
            .unwrap_or(0);
        let index = Select::with_theme(&self.theme)
            .with_prompt("Serving size")
            .items(&labels[..])
            .default(default)
            .interact()?;

        Ok(Some(match options[index].value {
            ServingOptionValue::Grams(grams) => ServingSelection::Grams(grams),
            ServingOptionValue::Custom => {
                ServingSelection::Custom(self.text("Amount in grams", &current.to_string(), false)?)
            }
        }))
    }

    pub fn serving_action(&self, has_options: bool) -> Result<StepAction<()>> {
        let submit = if has_options {
            "Continue"
        } else {
            "Fetch serving suggestions"
        };
        Ok(match self.action(&[submit, "Back", "Quit"])? {
            0 => StepAction::Submit(()),
            1 => StepAction::Back,
            _ => StepAction::Quit,
        })
    }

    pub fn nutrition_choice(&self, mode: NutritionMode) -> Result<NutritionChoice> {
        Ok(
            match self.action(&[mode.submit_label(), mode.toggle_label(), "Back", "Quit"])? {
                0 => NutritionChoice::Submit,
                1 => NutritionChoice::ToggleMode,
                2 => NutritionChoice::Back,
                _ => NutritionChoice::Quit,
            },
        )
    }

    pub fn shared(&self, default: bool) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Shared meal?")
            .default(default)
            .interact()?)
    }

    /// Manual values for the exact serving, prefilled from `defaults`.
    pub fn manual_nutrition(&self, defaults: &ManualNutritionForm) -> Result<ManualNutritionForm> {
        Ok(ManualNutritionForm {
            calories: self.text("Calories (kcal)", &defaults.calories, true)?,
            energy_kj: self.text("Energy (kJ)", &defaults.energy_kj, true)?,
            protein: self.text("Protein (g)", &defaults.protein, true)?,
            carbs: self.text("Carbohydrates (g)", &defaults.carbs, true)?,
            sugars: self.text("Sugars (g)", &defaults.sugars, true)?,
            fat: self.text("Fat (g)", &defaults.fat, true)?,
            saturated_fat: self.text("Saturated fat (g)", &defaults.saturated_fat, true)?,
            sodium: self.text("Sodium (mg)", &defaults.sodium, true)?,
            fiber: self.text("Fibre (g)", &defaults.fiber, true)?,
            fruits_veg_nuts: self.text(
                "Fruits, vegetables and nuts (%)",
                &defaults.fruits_veg_nuts,
                true,
            )?,
            serving_unit: defaults.serving_unit.clone(),
            serving_weight: self.text("Serving weight (g)", &defaults.serving_weight, true)?,
        })
    }

    pub fn confirmation(&self, draft: &FoodDraft) -> Result<StepAction<ConfirmationForm>> {
        let labels: Vec<String> = MealType::ALL.iter().map(ToString::to_string).collect();
        let current = draft.meal_type.unwrap_or_default();
        let default = MealType::ALL
            .iter()
            .position(|m| *m == current)
            .unwrap_or(0);
        let index = Select::with_theme(&self.theme)
            .with_prompt("Meal")
            .items(&labels[..])
            .default(default)
            .interact()?;
        let form = ConfirmationForm {
            meal_type: MealType::ALL[index].as_str().to_string(),
            is_shared: self.shared(draft.is_shared)?,
        };
        Ok(match self.action(&["Save entry", "Back", "Quit"])? {
            0 => StepAction::Submit(form),
            1 => StepAction::Back,
            _ => StepAction::Quit,
        })
    }

    pub fn another_entry(&self) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Log another food?")
            .default(false)
            .interact()?)
    }

    fn text(&self, prompt: &str, initial: &str, allow_empty: bool) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty);
        if !initial.is_empty() {
            input = input.with_initial_text(initial);
        }
        Ok(input.interact_text()?)
    }

    fn action(&self, items: &[&str]) -> Result<usize> {
        Ok(Select::with_theme(&self.theme)
            .items(items)
            .default(0)
            .interact()?)
    }
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new()
    }
}
