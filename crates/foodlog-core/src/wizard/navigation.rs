//! Backward navigation, jumps and reset.

use log::info;

use super::Wizard;
use crate::{
    forms::ManualNutritionForm,
    models::{FoodDraft, StepId},
    nutrition::NutritionMode,
    service::FoodService,
    view::WizardView,
};

impl<S, V> Wizard<S, V>
where
    S: FoodService,
    V: WizardView,
{
    /// Returns to the previous step, staying put on the first one.
    ///
    /// Completion flags and cached responses are kept.
    pub fn go_back(&mut self) -> StepId {
        if let Some(previous) = self.steps.current().previous() {
            self.show(previous);
        }
        self.steps.current()
    }

    /// Displays `step` directly.
    pub fn go_to_step(&mut self, step: StepId) -> StepId {
        self.show(step);
        step
    }

    /// Discards the entry in progress and starts over on the first step.
    pub fn reset(&mut self) {
        info!("Resetting food entry");
        self.steps.reset();
        self.draft = FoodDraft::default();
        self.mode = NutritionMode::default();
        self.manual_defaults = ManualNutritionForm::default();
        self.summary = None;
        self.serving_label = None;
        self.view.show_reference_notice(None);
        self.show(StepId::FoodInfo);
    }
}
