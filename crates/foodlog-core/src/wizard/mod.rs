//! The four-step food entry wizard.
//!
//! [`Wizard`] owns the whole state of one entry in progress (the
//! [`StepSequence`], the [`FoodDraft`], the nutrition mode) together with
//! the backend service and the view it reports to. Handlers take raw form
//! values, validate them, call the backend, merge the response into the
//! draft and move to the next step.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │  Wizard state   │    │    Service /    │
//! │ (food_info,     │───▶│ (StepSequence,  │───▶│      View       │
//! │  serving, ...)  │    │  FoodDraft)     │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    Form input            Pure decisions         Side effects
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Wizard`] instances
//! - `food_info`, `serving`, `nutrition`, `confirmation`: one submit
//!   handler per step
//! - `navigation`: back, jump and reset
//!
//! ## Outcomes
//!
//! Handlers return [`StepOutcome`]. Anything the user can fix or retry
//! (bad input, a backend error, a dropped connection) is a
//! [`StepOutcome::Rejected`] carrying a [`StepFailure`], after the error has
//! been shown through the view. `Err` is reserved for driving the wizard out
//! of order, such as submitting a step that is not displayed.
//!
//! Every handler borrows the wizard mutably until its backend call has
//! resolved, so navigation cannot interleave with a pending request and a
//! response always lands on the step that issued it.
//!
//! # Examples
//!
//! ```rust
//! use foodlog_core::{
//!     forms::FoodInfoForm,
//!     models::{FoodInfoResponse, StepId},
//!     service::{ScriptedFoodService, ServiceFailure},
//!     wizard::{StepOutcome, WizardBuilder},
//! };
//!
//! # async fn example() -> foodlog_core::Result<()> {
//! let service = ScriptedFoodService::new();
//! service.push_food_info(Ok(FoodInfoResponse {
//!     formatted_description: "Sourdough bread".to_string(),
//!     ..Default::default()
//! }));
//! service.push_serving_size(Err(ServiceFailure::service(500, None)));
//!
//! let mut wizard = WizardBuilder::new(service).build();
//! let outcome = wizard
//!     .submit_food_info(FoodInfoForm {
//!         name: "Sourdough".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // A failed serving size prefetch does not block the first step.
//! assert_eq!(outcome, StepOutcome::Advanced(StepId::ServingSize));
//! assert!(!wizard.steps().is_complete(StepId::ServingSize));
//! # Ok(())
//! # }
//! ```

pub mod builder;
mod confirmation;
mod food_info;
mod navigation;
mod nutrition;
mod serving;


use log::{info, warn};
use serde::{Deserialize, Serialize};

pub use builder::WizardBuilder;
pub use confirmation::SAVE_SUCCESS;

use crate::{
    display::manual_serving_caption,
    error::{Result, WizardError},
    forms::ManualNutritionForm,
    models::{FoodDraft, ServingOptionValue, StepId, StepSequence},
    nutrition::{NutritionMode, NutritionSummary},
    service::{FoodService, ServiceFailure},
    view::WizardView,
};

/// Category of a step failure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// Input rejected before any backend call
    Validation,
    /// The backend answered with an error status
    Service,
    /// The request failed in transit or the answer was unreadable
    Network,
}

/// A recoverable, step-scoped failure. The step stays current.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepFailure {
    pub step: StepId,
    pub kind: FailureKind,
    /// Message shown to the user
    pub message: String,
}

impl StepFailure {
    pub fn validation(step: StepId, error: &WizardError) -> Self {
        Self {
            step,
            kind: FailureKind::Validation,
            message: error.user_message(),
        }
    }

    pub fn from_service(step: StepId, failure: &ServiceFailure, fallback: &str) -> Self {
        let kind = if failure.is_network() {
            FailureKind::Network
        } else {
            FailureKind::Service
        };
        Self {
            step,
            kind,
            message: failure.user_message(fallback),
        }
    }
}

/// Result of a step handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The wizard moved on; carries the step now displayed
    Advanced(StepId),
    /// The step stays current; the error has been shown
    Rejected(StepFailure),
    /// The entry was saved and the wizard reset to the first step
    Saved,
}

impl StepOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, StepOutcome::Rejected(_))
    }

    /// The failure, for rejected outcomes.
    pub fn failure(&self) -> Option<&StepFailure> {
        match self {
            StepOutcome::Rejected(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Interactive food entry workflow.
pub struct Wizard<S, V> {
    service: S,
    view: V,
    steps: StepSequence,
    draft: FoodDraft,
    mode: NutritionMode,
    manual_defaults: ManualNutritionForm,
    summary: Option<NutritionSummary>,
    serving_label: Option<String>,
}

impl<S, V> Wizard<S, V>
where
    S: FoodService,
    V: WizardView,
{
    /// Creates a wizard positioned on the first step. Use
    /// [`WizardBuilder`] instead of calling this directly.
    pub(crate) fn new(service: S, view: V) -> Self {
        let mut wizard = Self {
            service,
            view,
            steps: StepSequence::new(),
            draft: FoodDraft::default(),
            mode: NutritionMode::default(),
            manual_defaults: ManualNutritionForm::default(),
            summary: None,
            serving_label: None,
        };
        wizard.show(StepId::FoodInfo);
        wizard
    }

    /// The entry being built.
    pub fn draft(&self) -> &FoodDraft {
        &self.draft
    }

    pub fn steps(&self) -> &StepSequence {
        &self.steps
    }

    pub fn current_step(&self) -> StepId {
        self.steps.current()
    }

    pub fn nutrition_mode(&self) -> NutritionMode {
        self.mode
    }

    /// Manual nutrition form defaults shown on the current visit to the
    /// nutrition step.
    pub fn manual_defaults(&self) -> &ManualNutritionForm {
        &self.manual_defaults
    }

    /// Nutrition summary for the confirmation step, once nutrition is known.
    pub fn summary(&self) -> Option<&NutritionSummary> {
        self.summary.as_ref()
    }

    /// Serving label shown on the confirmation step.
    pub fn serving_label(&self) -> Option<&str> {
        self.serving_label.as_deref()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Fails unless `step` is the displayed step.
    fn ensure_current(&self, step: StepId) -> Result<()> {
        let current = self.steps.current();
        if current == step {
            Ok(())
        } else {
            Err(WizardError::StepNotCurrent {
                requested: step,
                current,
            })
        }
    }

    /// Displays `step` and applies the entry side effects of that step.
    fn show(&mut self, step: StepId) {
        info!("Showing step '{step}'");
        self.steps.show(step);
        self.view.show_step(step, &self.steps.progress());

        match step {
            StepId::ServingSize => {
                if let Some(serving) = self.steps.serving_size() {
                    self.view.render_serving_options(
                        &serving.options,
                        Some(ServingOptionValue::Grams(self.draft.quantity)),
                    );
                }
            }
            StepId::NutritionInfo => {
                self.mode = NutritionMode::Automatic;
                self.manual_defaults = ManualNutritionForm::defaults(self.steps.serving_size());
                let caption = manual_serving_caption(
                    self.draft.quantity,
                    self.manual_defaults.unit(),
                    Some(self.manual_defaults.weight()),
                );
                self.view.render_nutrition_mode(self.mode);
                self.view
                    .render_manual_defaults(&self.manual_defaults, &caption);
            }
            StepId::Confirmation => {
                if let Some(meal_type) = self.draft.meal_type {
                    self.view.select_meal_type(meal_type);
                }
            }
            StepId::FoodInfo => {}
        }
    }

    /// Moves to the step after the current one, if there is one.
    fn advance(&mut self) -> StepOutcome {
        let next = self.steps.current().next().unwrap_or(StepId::Confirmation);
        self.show(next);
        StepOutcome::Advanced(next)
    }

    /// Shows a failure next to its step and turns it into an outcome.
    fn reject(&mut self, failure: StepFailure) -> StepOutcome {
        warn!(
            "Step '{}' rejected ({:?}): {}",
            failure.step, failure.kind, failure.message
        );
        self.view.show_error(failure.step, &failure.message);
        StepOutcome::Rejected(failure)
    }
}
