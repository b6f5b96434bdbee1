//! Interactive wizard session.
//!
//! Drives a [`Wizard`] from terminal prompts until the user quits. Rejected
//! steps stay put so the user can correct the input and try again.

use anyhow::Result;
use foodlog_core::{
    display::manual_serving_hint,
    forms::{NutritionForm, ServingSelection},
    models::StepId,
    FoodService, StepOutcome, Wizard,
};
use log::{debug, info};

use crate::{
    prompts::{NutritionChoice, Prompter, StepAction},
    view::TerminalView,
};

/// Whether the session keeps going after a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session<S: FoodService> {
    wizard: Wizard<S, TerminalView>,
    prompter: Prompter,
    selection: Option<ServingSelection>,
}

impl<S: FoodService> Session<S> {
    pub fn new(wizard: Wizard<S, TerminalView>, prompter: Prompter) -> Self {
        Self {
            wizard,
            prompter,
            selection: None,
        }
    }

    /// Runs prompts for the current step until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let flow = match self.wizard.current_step() {
                StepId::FoodInfo => self.food_info().await?,
                StepId::ServingSize => self.serving_size().await?,
                StepId::NutritionInfo => self.nutrition().await?,
                StepId::Confirmation => self.confirmation().await?,
            };
            if flow == Flow::Quit {
                info!("Session ended");
                return Ok(());
            }
        }
    }

    async fn food_info(&mut self) -> Result<Flow> {
        match self.prompter.food_info(self.wizard.draft())? {
            StepAction::Submit(form) => {
                let outcome = self.wizard.submit_food_info(form).await?;
                self.log_outcome(&outcome);
                if !outcome.is_rejected() {
                    self.selection = None;
                }
                Ok(Flow::Continue)
            }
            StepAction::Back => Ok(Flow::Continue),
            StepAction::Quit => Ok(Flow::Quit),
        }
    }

    async fn serving_size(&mut self) -> Result<Flow> {
        let options = self
            .wizard
            .steps()
            .serving_size()
            .map(|serving| serving.options.clone())
            .unwrap_or_default();

        if let Some(selection) = self
            .prompter
            .serving(&options, self.wizard.draft().quantity)?
        {
            if self.wizard.select_serving(selection.clone()) {
                self.selection = Some(selection);
            }
        }

        match self.prompter.serving_action(!options.is_empty())? {
            StepAction::Submit(()) => {
                let outcome = self.wizard.submit_serving_size().await?;
                self.log_outcome(&outcome);
                Ok(Flow::Continue)
            }
            StepAction::Back => {
                self.wizard.go_back();
                Ok(Flow::Continue)
            }
            StepAction::Quit => Ok(Flow::Quit),
        }
    }

    async fn nutrition(&mut self) -> Result<Flow> {
        let mode = self.wizard.nutrition_mode();
        match self.prompter.nutrition_choice(mode)? {
            NutritionChoice::ToggleMode => {
                self.wizard.toggle_nutrition_mode();
                Ok(Flow::Continue)
            }
            NutritionChoice::Back => {
                self.wizard.go_back();
                Ok(Flow::Continue)
            }
            NutritionChoice::Quit => Ok(Flow::Quit),
            NutritionChoice::Submit => {
                let quantity = self.wizard.draft().quantity;
                let manual = if mode.is_manual() {
                    self.wizard
                        .view()
                        .renderer()
                        .hint(&manual_serving_hint(quantity));
                    Some(
                        self.prompter
                            .manual_nutrition(self.wizard.manual_defaults())?,
                    )
                } else {
                    None
                };
                let form = NutritionForm {
                    serving: self
                        .selection
                        .clone()
                        .unwrap_or(ServingSelection::Grams(quantity)),
                    is_shared: self.prompter.shared(self.wizard.draft().is_shared)?,
                    manual,
                };
                let outcome = self.wizard.submit_nutrition(form).await?;
                self.log_outcome(&outcome);
                Ok(Flow::Continue)
            }
        }
    }

    async fn confirmation(&mut self) -> Result<Flow> {
        match self.prompter.confirmation(self.wizard.draft())? {
            StepAction::Submit(form) => {
                let outcome = self.wizard.submit_confirmation(form).await?;
                self.log_outcome(&outcome);
                if outcome == StepOutcome::Saved {
                    self.selection = None;
                    if !self.prompter.another_entry()? {
                        return Ok(Flow::Quit);
                    }
                }
                Ok(Flow::Continue)
            }
            StepAction::Back => {
                self.wizard.go_back();
                Ok(Flow::Continue)
            }
            StepAction::Quit => Ok(Flow::Quit),
        }
    }

    fn log_outcome(&self, outcome: &StepOutcome) {
        match outcome {
            StepOutcome::Rejected(failure) => {
                debug!("{} rejected: {}", failure.step, failure.message)
            }
            other => debug!("Step outcome: {other:?}"),
        }
    }
}
