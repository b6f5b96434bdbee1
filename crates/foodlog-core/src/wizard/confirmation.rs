//! Step four: review and save.

use log::{debug, info};

use super::{StepFailure, StepOutcome, Wizard};
use crate::{
    error::Result, forms::ConfirmationForm, models::StepId, service::FoodService,
    view::WizardView,
};

pub const SAVE_SUCCESS: &str = "Food entry saved successfully!";
const SAVE_FAILED: &str = "Failed to save food entry";

impl<S, V> Wizard<S, V>
where
    S: FoodService,
    V: WizardView,
{
    /// Handle submitting the confirmation step.
    ///
    /// Saves the entry with the chosen meal type and sharing flag. On
    /// success the wizard resets to the first step; on failure the draft is
    /// left intact for another attempt.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::StepNotCurrent` if another step is displayed.
    pub async fn submit_confirmation(&mut self, form: ConfirmationForm) -> Result<StepOutcome> {
        self.ensure_current(StepId::Confirmation)?;

        self.draft.meal_type = Some(form.meal_type());
        self.draft.is_shared = form.is_shared;

        self.view.set_loading(StepId::Confirmation, true);
        let outcome = self.save().await;
        self.view.set_loading(StepId::Confirmation, false);
        Ok(outcome)
    }

    async fn save(&mut self) -> StepOutcome {
        let request = self.draft.save_request();
        debug!(
            "Saving '{}' as {} (reference {:?})",
            request.name, request.meal_type, request.reference_id
        );

        match self.service.save_food(&request).await {
            Ok(()) => {
                info!("Saved food entry '{}'", request.name);
                self.view.show_success(StepId::Confirmation, SAVE_SUCCESS);
                self.reset();
                StepOutcome::Saved
            }
            Err(failure) => self.reject(StepFailure::from_service(
                StepId::Confirmation,
                &failure,
                SAVE_FAILED,
            )),
        }
    }
}
