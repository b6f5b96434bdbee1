//! Terminal implementation of the wizard's view capability.

use foodlog_core::{
    display::{ServingOptions, StepProgress},
    forms::ManualNutritionForm,
    models::{MealType, ProgressState, ServingOption, ServingOptionValue, StepId},
    NutritionMode, NutritionSummary, OperationStatus, WizardView,
};

use crate::renderer::TerminalRenderer;

/// Prints what the wizard reports as it happens.
pub struct TerminalView {
    renderer: TerminalRenderer,
}

impl TerminalView {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &TerminalRenderer {
        &self.renderer
    }
}

impl WizardView for TerminalView {
    fn show_step(&mut self, step: StepId, progress: &[ProgressState; 4]) {
        println!();
        self.renderer.render(&format!("{}\n", StepProgress(*progress)));
        self.renderer.render(&format!("# {step}\n"));
    }

    fn show_error(&mut self, step: StepId, message: &str) {
        self.renderer
            .status(&OperationStatus::failure(message).for_step(step));
    }

    fn show_success(&mut self, _step: StepId, message: &str) {
        self.renderer.status(&OperationStatus::success(message));
    }

    fn set_loading(&mut self, step: StepId, loading: bool) {
        if loading {
            self.renderer.hint(&format!("{}...", step.title()));
        }
    }

    fn show_reference_notice(&mut self, notice: Option<&str>) {
        if let Some(notice) = notice {
            self.renderer.render(&format!("*{notice}*\n"));
        }
    }

    fn render_serving_options(
        &mut self,
        options: &[ServingOption],
        selected: Option<ServingOptionValue>,
    ) {
        self.renderer
            .render(&ServingOptions::new(options, selected).to_string());
    }

    fn render_serving_label(&mut self, label: &str) {
        self.renderer.render(&format!("Serving: **{label}**\n"));
    }

    fn render_nutrition_mode(&mut self, mode: NutritionMode) {
        self.renderer.hint(&format!("Nutrition mode: {mode}"));
    }

    fn render_manual_defaults(&mut self, _form: &ManualNutritionForm, caption: &str) {
        self.renderer.hint(caption);
    }

    fn render_summary(&mut self, summary: &NutritionSummary) {
        self.renderer.render(&summary.to_string());
    }

    fn render_food_description(&mut self, description: &str) {
        self.renderer.render(&format!("**{description}**\n"));
    }

    fn select_meal_type(&mut self, meal_type: MealType) {
        self.renderer.hint(&format!("Last logged as {meal_type}"));
    }
}
