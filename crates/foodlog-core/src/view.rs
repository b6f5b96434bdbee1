//! Rendering capability used by the wizard.
//!
//! The wizard never touches a document or a terminal directly. Everything it
//! wants shown goes through [`WizardView`], whose methods all default to
//! doing nothing, so a front end only implements what it can display.

use std::time::Duration;

use crate::{
    forms::ManualNutritionForm,
    models::{MealType, ProgressState, ServingOption, ServingOptionValue, StepId},
    nutrition::{NutritionMode, NutritionSummary},
};

/// How long an error message stays visible before the front end hides it.
pub const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Everything the wizard asks a front end to show.
pub trait WizardView {
    /// Display `step` and hide the others; `progress` has one entry per step.
    fn show_step(&mut self, _step: StepId, _progress: &[ProgressState; 4]) {}

    /// Show an error next to `step`'s form.
    fn show_error(&mut self, _step: StepId, _message: &str) {}

    fn show_success(&mut self, _step: StepId, _message: &str) {}

    /// Disable or re-enable `step`'s controls around a backend call.
    fn set_loading(&mut self, _step: StepId, _loading: bool) {}

    /// Show the "found in database" notice, or hide it on `None`.
    fn show_reference_notice(&mut self, _notice: Option<&str>) {}

    fn render_serving_options(
        &mut self,
        _options: &[ServingOption],
        _selected: Option<ServingOptionValue>,
    ) {
    }

    /// Serving label shown on the confirmation step.
    fn render_serving_label(&mut self, _label: &str) {}

    fn render_nutrition_mode(&mut self, _mode: NutritionMode) {}

    fn render_manual_defaults(&mut self, _form: &ManualNutritionForm, _caption: &str) {}

    fn render_summary(&mut self, _summary: &NutritionSummary) {}

    fn render_food_description(&mut self, _description: &str) {}

    fn select_meal_type(&mut self, _meal_type: MealType) {}
}

/// Something the wizard asked a [`RecordingView`] to show.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    ShowStep(StepId, [ProgressState; 4]),
    Error(StepId, String),
    Success(StepId, String),
    Loading(StepId, bool),
    ReferenceNotice(Option<String>),
    ServingOptions(Vec<ServingOption>, Option<ServingOptionValue>),
    ServingLabel(String),
    NutritionMode(NutritionMode),
    ManualDefaults(ManualNutritionForm, String),
    Summary(NutritionSummary),
    FoodDescription(String),
    MealType(MealType),
}

/// A view that records every call, for tests and scripted sessions.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages passed to `show_error`, in order.
    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Error(_, message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Steps passed to `show_step`, in order.
    pub fn shown_steps(&self) -> Vec<StepId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ViewEvent::ShowStep(step, _) => Some(*step),
                _ => None,
            })
            .collect()
    }

    /// `set_loading` calls, in order.
    pub fn loading(&self) -> Vec<(StepId, bool)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Loading(step, loading) => Some((*step, *loading)),
                _ => None,
            })
            .collect()
    }

    /// The most recent serving label.
    pub fn last_serving_label(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            ViewEvent::ServingLabel(label) => Some(label.as_str()),
            _ => None,
        })
    }

    /// The most recent reference notice call.
    pub fn last_reference_notice(&self) -> Option<Option<&str>> {
        self.events.iter().rev().find_map(|event| match event {
            ViewEvent::ReferenceNotice(notice) => Some(notice.as_deref()),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl WizardView for RecordingView {
    fn show_step(&mut self, step: StepId, progress: &[ProgressState; 4]) {
        self.events.push(ViewEvent::ShowStep(step, *progress));
    }

    fn show_error(&mut self, step: StepId, message: &str) {
        self.events.push(ViewEvent::Error(step, message.to_string()));
    }

    fn show_success(&mut self, step: StepId, message: &str) {
        self.events.push(ViewEvent::Success(step, message.to_string()));
    }

    fn set_loading(&mut self, step: StepId, loading: bool) {
        self.events.push(ViewEvent::Loading(step, loading));
    }

    fn show_reference_notice(&mut self, notice: Option<&str>) {
        self.events
            .push(ViewEvent::ReferenceNotice(notice.map(str::to_string)));
    }

    fn render_serving_options(
        &mut self,
        options: &[ServingOption],
        selected: Option<ServingOptionValue>,
    ) {
        self.events
            .push(ViewEvent::ServingOptions(options.to_vec(), selected));
    }

    fn render_serving_label(&mut self, label: &str) {
        self.events.push(ViewEvent::ServingLabel(label.to_string()));
    }

    fn render_nutrition_mode(&mut self, mode: NutritionMode) {
        self.events.push(ViewEvent::NutritionMode(mode));
    }

    fn render_manual_defaults(&mut self, form: &ManualNutritionForm, caption: &str) {
        self.events
            .push(ViewEvent::ManualDefaults(form.clone(), caption.to_string()));
    }

    fn render_summary(&mut self, summary: &NutritionSummary) {
        self.events.push(ViewEvent::Summary(summary.clone()));
    }

    fn render_food_description(&mut self, description: &str) {
        self.events
            .push(ViewEvent::FoodDescription(description.to_string()));
    }

    fn select_meal_type(&mut self, meal_type: MealType) {
        self.events.push(ViewEvent::MealType(meal_type));
    }
}

/// A view that shows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl WizardView for NullView {}

impl<V: WizardView + ?Sized> WizardView for &mut V {
    fn show_step(&mut self, step: StepId, progress: &[ProgressState; 4]) {
        (**self).show_step(step, progress)
    }

    fn show_error(&mut self, step: StepId, message: &str) {
        (**self).show_error(step, message)
    }

    fn show_success(&mut self, step: StepId, message: &str) {
        (**self).show_success(step, message)
    }

    fn set_loading(&mut self, step: StepId, loading: bool) {
        (**self).set_loading(step, loading)
    }

    fn show_reference_notice(&mut self, notice: Option<&str>) {
        (**self).show_reference_notice(notice)
    }

    fn render_serving_options(
        &mut self,
        options: &[ServingOption],
        selected: Option<ServingOptionValue>,
    ) {
        (**self).render_serving_options(options, selected)
    }

    fn render_serving_label(&mut self, label: &str) {
        (**self).render_serving_label(label)
    }

    fn render_nutrition_mode(&mut self, mode: NutritionMode) {
        (**self).render_nutrition_mode(mode)
    }

    fn render_manual_defaults(&mut self, form: &ManualNutritionForm, caption: &str) {
        (**self).render_manual_defaults(form, caption)
    }

    fn render_summary(&mut self, summary: &NutritionSummary) {
        (**self).render_summary(summary)
    }

    fn render_food_description(&mut self, description: &str) {
        (**self).render_food_description(description)
    }

    fn select_meal_type(&mut self, meal_type: MealType) {
        (**self).select_meal_type(meal_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_view_queries() {
        let mut view = RecordingView::new();
        view.show_step(StepId::FoodInfo, &[ProgressState::Current; 4]);
        view.set_loading(StepId::FoodInfo, true);
        view.show_error(StepId::FoodInfo, "Please enter a food name");
        view.set_loading(StepId::FoodInfo, false);
        view.show_reference_notice(Some("Found it"));
        view.show_reference_notice(None);
        view.render_serving_label("60g (2 slices)");

        assert_eq!(view.shown_steps(), vec![StepId::FoodInfo]);
        assert_eq!(view.errors(), vec!["Please enter a food name"]);
        assert_eq!(
            view.loading(),
            vec![(StepId::FoodInfo, true), (StepId::FoodInfo, false)]
        );
        assert_eq!(view.last_reference_notice(), Some(None));
        assert_eq!(view.last_serving_label(), Some("60g (2 slices)"));

        view.clear();
        assert!(view.events.is_empty());
        assert_eq!(view.last_reference_notice(), None);
    }

    #[test]
    fn test_mut_ref_forwards_to_view() {
        fn select_lunch<V: WizardView>(mut view: V) {
            view.select_meal_type(MealType::Lunch);
        }

        let mut view = RecordingView::new();
        select_lunch(&mut view);
        assert_eq!(view.events, vec![ViewEvent::MealType(MealType::Lunch)]);
    }
}
