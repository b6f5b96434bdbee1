//! Step two: serving size, plus the catalog shortcut to confirmation.

use log::{debug, info};

use super::{StepFailure, StepOutcome, Wizard};
use crate::{
    display::format_serving_size,
    error::Result,
    forms::ServingSelection,
    models::{NutritionRequest, ServingOptionValue, ServingSizeResponse, StepData, StepId},
    service::FoodService,
    view::WizardView,
};

const SERVING_SIZE_FAILED: &str = "Failed to get serving size information";
const REFERENCE_NUTRITION_FAILED: &str = "Failed to get nutrition information";

impl<S, V> Wizard<S, V>
where
    S: FoodService,
    V: WizardView,
{
    /// Applies a serving choice made from the option list.
    ///
    /// Returns `false` and leaves the quantity untouched when the choice is
    /// not a positive amount.
    pub fn select_serving(&mut self, selection: ServingSelection) -> bool {
        match selection.quantity() {
            Ok(quantity) => {
                self.draft.set_quantity(quantity);
                self.refresh_serving_label();
                true
            }
            Err(e) => {
                debug!("Ignoring serving selection: {e}");
                false
            }
        }
    }

    /// Live update while a custom amount is typed. Only positive numbers
    /// are applied; anything else is ignored.
    pub fn custom_amount_changed(&mut self, raw: &str) -> bool {
        self.select_serving(ServingSelection::Custom(raw.to_string()))
    }

    /// Handle submitting the serving size step.
    ///
    /// With a serving suggestion already cached, foods matched in the
    /// catalog fetch their stored nutrition and skip straight to
    /// confirmation; other foods move on to the nutrition step. Without a
    /// suggestion one is fetched first.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::StepNotCurrent` if another step is displayed.
    pub async fn submit_serving_size(&mut self) -> Result<StepOutcome> {
        self.ensure_current(StepId::ServingSize)?;

        self.view.set_loading(StepId::ServingSize, true);
        let outcome = if self.steps.is_complete(StepId::ServingSize) {
            if self.steps.found_in_catalog() {
                self.skip_to_confirmation().await
            } else {
                self.advance()
            }
        } else {
            self.fetch_serving_size().await
        };
        self.view.set_loading(StepId::ServingSize, false);
        Ok(outcome)
    }

    async fn fetch_serving_size(&mut self) -> StepOutcome {
        let identity = self.draft.identity();
        debug!("Fetching serving size for '{}'", identity.name);

        match self.service.serving_size(&identity).await {
            Ok(serving) => {
                self.apply_serving_size(serving);
                self.advance()
            }
            Err(failure) => self.reject(StepFailure::from_service(
                StepId::ServingSize,
                &failure,
                SERVING_SIZE_FAILED,
            )),
        }
    }

    /// Fetches the catalog entry's nutrition and jumps to confirmation.
    async fn skip_to_confirmation(&mut self) -> StepOutcome {
        let request = NutritionRequest::automatic(self.draft.identity(), self.draft.quantity);
        info!("Using catalog nutrition for '{}'", request.name);

        match self.service.reference_nutrition(&request).await {
            Ok(response) => {
                self.apply_nutrition_response(response, false);
                self.go_to_step(StepId::Confirmation);
                StepOutcome::Advanced(StepId::Confirmation)
            }
            Err(failure) => self.reject(StepFailure::from_service(
                StepId::ServingSize,
                &failure,
                REFERENCE_NUTRITION_FAILED,
            )),
        }
    }

    /// Caches a serving suggestion and applies it to the draft.
    pub(super) fn apply_serving_size(&mut self, serving: ServingSizeResponse) {
        self.draft.apply_serving(&serving);
        self.view.render_serving_options(
            &serving.options,
            Some(ServingOptionValue::Grams(self.draft.quantity)),
        );
        self.steps.complete(StepData::ServingSize(serving));
        self.refresh_serving_label();
    }

    /// Re-renders the serving label from the cached suggestion's unit and
    /// weight. Nothing is shown before a suggestion arrives.
    fn refresh_serving_label(&mut self) {
        let label = self.steps.serving_size().map(|serving| {
            format_serving_size(
                Some(self.draft.quantity),
                serving.unit.as_deref(),
                serving.weight,
            )
        });
        if let Some(label) = label {
            self.set_serving_label(label);
        }
    }

    pub(super) fn set_serving_label(&mut self, label: String) {
        self.view.render_serving_label(&label);
        if let Some(summary) = self.summary.as_mut() {
            summary.serving_label = label.clone();
        }
        self.serving_label = Some(label);
    }
}
