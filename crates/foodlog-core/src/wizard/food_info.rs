//! Step one: food identity.

use log::{debug, info, warn};

use super::{StepFailure, StepOutcome, Wizard};
use crate::{
    error::Result,
    forms::FoodInfoForm,
    models::{FoodIdentity, FoodInfoResponse, StepData, StepId},
    service::FoodService,
    view::WizardView,
};

const VERIFY_FAILED: &str = "Failed to verify food information";

impl<S, V> Wizard<S, V>
where
    S: FoodService,
    V: WizardView,
{
    /// Handle submitting the food information step.
    ///
    /// Validates the name, verifies the food with the backend, then
    /// prefetches the serving size suggestion and moves to the serving
    /// step. A failed prefetch is only logged; the serving step fetches
    /// again on submit.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::StepNotCurrent` if another step is displayed.
    pub async fn submit_food_info(&mut self, form: FoodInfoForm) -> Result<StepOutcome> {
        self.ensure_current(StepId::FoodInfo)?;

        let identity = match FoodIdentity::try_from(form) {
            Ok(identity) => identity,
            Err(e) => {
                return Ok(self.reject(StepFailure::validation(StepId::FoodInfo, &e)));
            }
        };
        self.draft.set_identity(identity.clone());

        self.view.set_loading(StepId::FoodInfo, true);
        let outcome = self.verify_and_prefetch(&identity).await;
        self.view.set_loading(StepId::FoodInfo, false);
        Ok(outcome)
    }

    async fn verify_and_prefetch(&mut self, identity: &FoodIdentity) -> StepOutcome {
        debug!("Verifying food '{}'", identity.name);

        let response = match self.service.verify_food_info(identity).await {
            Ok(response) => response,
            Err(failure) => {
                return self.reject(StepFailure::from_service(
                    StepId::FoodInfo,
                    &failure,
                    VERIFY_FAILED,
                ));
            }
        };
        self.apply_food_info(response);

        match self.service.serving_size(identity).await {
            Ok(serving) => self.apply_serving_size(serving),
            Err(failure) => warn!("Could not prefetch serving size: {failure}"),
        }

        self.advance()
    }

    fn apply_food_info(&mut self, response: FoodInfoResponse) {
        // A newly verified food starts over from the serving step
        self.draft.clear_food_data();
        self.steps.clear_after(StepId::FoodInfo);
        self.summary = None;
        self.serving_label = None;

        self.view
            .render_food_description(&response.formatted_description);

        let notice = match (&response.reference, response.found_in_db) {
            (Some(reference), true) => {
                info!("'{}' matched catalog entry {:?}", self.draft.name, reference.id);
                if let Some(meal_type) = reference.meal_type() {
                    self.draft.meal_type = Some(meal_type);
                }
                self.draft.reference = Some(reference.clone());
                Some(reference_notice(&reference.display_name()))
            }
            _ => None,
        };
        self.view.show_reference_notice(notice.as_deref());

        self.steps.complete(StepData::FoodInfo(response));
    }
}

/// Notice shown when the food matched a stored catalog entry.
pub(crate) fn reference_notice(display_name: &str) -> String {
    format!("Found \"{display_name}\" in the database. Using existing nutritional information.")
}
