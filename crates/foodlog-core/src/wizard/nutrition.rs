//! Step three: nutrition, computed by the backend or entered by hand.

use log::debug;

use super::{StepFailure, StepOutcome, Wizard};
use crate::{
    display::format_serving_size,
    error::Result,
    forms::NutritionForm,
    models::{ManualNutrition, NutritionRequest, NutritionResponse, StepData, StepId},
    nutrition::{NutritionMode, NutritionSummary},
    service::FoodService,
    view::WizardView,
};

const NUTRITION_FAILED: &str = "Failed to get nutrition information";
const MANUAL_SCORE_FAILED: &str = "Failed to calculate nutrition score";

impl<S, V> Wizard<S, V>
where
    S: FoodService,
    V: WizardView,
{
    /// Switches between computed and manual nutrition and returns the new
    /// mode.
    pub fn toggle_nutrition_mode(&mut self) -> NutritionMode {
        self.mode.toggle();
        debug!("Nutrition mode is now {}", self.mode);
        self.view.render_nutrition_mode(self.mode);
        self.mode
    }

    /// Handle submitting the nutrition step.
    ///
    /// Validates the quantity and, in manual mode, the entered values
    /// (calories must be positive). In manual mode with a known serving
    /// unit the serving weight is set to the quantity so the entry reads
    /// as exactly one unit.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::StepNotCurrent` if another step is displayed.
    pub async fn submit_nutrition(&mut self, form: NutritionForm) -> Result<StepOutcome> {
        self.ensure_current(StepId::NutritionInfo)?;
        self.draft.is_shared = form.is_shared;

        let quantity = match form.serving.quantity() {
            Ok(quantity) => quantity,
            Err(e) => {
                return Ok(self.reject(StepFailure::validation(StepId::NutritionInfo, &e)));
            }
        };
        self.draft.set_quantity(quantity);

        let manual = self.mode.is_manual();
        let request = if manual {
            let manual_form = form
                .manual
                .unwrap_or_else(|| self.manual_defaults.clone());
            let mut values = match ManualNutrition::try_from(manual_form) {
                Ok(values) => values,
                Err(e) => {
                    return Ok(self.reject(StepFailure::validation(StepId::NutritionInfo, &e)));
                }
            };
            if self.has_serving_unit() {
                values.weight = quantity;
            }
            NutritionRequest::manual(self.draft.identity(), quantity, values)
        } else {
            NutritionRequest::automatic(self.draft.identity(), quantity)
        };

        self.view.set_loading(StepId::NutritionInfo, true);
        let outcome = self.fetch_nutrition(request, manual).await;
        self.view.set_loading(StepId::NutritionInfo, false);
        Ok(outcome)
    }

    async fn fetch_nutrition(&mut self, request: NutritionRequest, manual: bool) -> StepOutcome {
        debug!(
            "Requesting {} nutrition for {}g of '{}'",
            if manual { "manual" } else { "computed" },
            request.quantity,
            request.name
        );

        match self.service.nutrition(&request).await {
            Ok(response) => {
                self.apply_nutrition_response(response, manual);
                self.advance()
            }
            Err(failure) => {
                let fallback = if manual {
                    MANUAL_SCORE_FAILED
                } else {
                    NUTRITION_FAILED
                };
                self.reject(StepFailure::from_service(
                    StepId::NutritionInfo,
                    &failure,
                    fallback,
                ))
            }
        }
    }

    fn has_serving_unit(&self) -> bool {
        self.steps
            .serving_size()
            .and_then(|serving| serving.unit.as_deref())
            .is_some_and(|unit| !unit.is_empty())
    }

    /// Merges a nutrition response into the draft, caches it on the
    /// nutrition step and refreshes the confirmation summary.
    pub(super) fn apply_nutrition_response(&mut self, response: NutritionResponse, manual: bool) {
        self.draft.apply_nutrition(&response);

        let label = match response.unit.as_deref() {
            Some(unit) if !unit.is_empty() && unit != "g" && unit != "ml" => {
                format_serving_size(Some(self.draft.quantity), Some(unit), response.weight)
            }
            _ => format!("{}g", self.draft.quantity),
        };
        let summary = NutritionSummary::from_response(&response, manual, label.clone());
        self.view.render_summary(&summary);
        self.summary = Some(summary);
        self.set_serving_label(label);

        self.steps.complete(StepData::Nutrition(response));
    }
}
