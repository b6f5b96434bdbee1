//! The ordered step sequence and its navigation bookkeeping.

use serde::{Deserialize, Serialize};

use super::{FoodInfoResponse, NutritionResponse, ServingSizeResponse, Step, StepData, StepId};

/// Visual state of a step in the progress indicator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProgressState {
    Completed,
    Current,
    Upcoming,
}

/// Fixed, ordered list of the four wizard steps plus the current position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepSequence {
    steps: [Step; 4],
    current: StepId,
}

impl StepSequence {
    /// Creates a fresh sequence positioned on the first step.
    pub fn new() -> Self {
        Self {
            steps: StepId::ALL.map(Step::new),
            current: StepId::FoodInfo,
        }
    }

    pub fn current(&self) -> StepId {
        self.current
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step(&self, id: StepId) -> &Step {
        &self.steps[id.index()]
    }

    pub fn is_complete(&self, id: StepId) -> bool {
        self.step(id).is_complete
    }

    /// Cached food verification response, if step one succeeded.
    pub fn food_info(&self) -> Option<&FoodInfoResponse> {
        match &self.step(StepId::FoodInfo).data {
            Some(StepData::FoodInfo(response)) => Some(response),
            _ => None,
        }
    }

    /// Cached serving size suggestion, if one was fetched.
    pub fn serving_size(&self) -> Option<&ServingSizeResponse> {
        match &self.step(StepId::ServingSize).data {
            Some(StepData::ServingSize(response)) => Some(response),
            _ => None,
        }
    }

    /// Cached nutrition response, if one was fetched.
    pub fn nutrition(&self) -> Option<&NutritionResponse> {
        match &self.step(StepId::NutritionInfo).data {
            Some(StepData::Nutrition(response)) => Some(response),
            _ => None,
        }
    }

    /// True when the food was resolved from the catalog during step one.
    pub fn found_in_catalog(&self) -> bool {
        self.food_info().is_some_and(|info| info.found_in_db)
    }

    /// Stores a response on its step and marks that step complete.
    ///
    /// The target step does not need to be the current one; the catalog
    /// shortcut completes the nutrition step without ever displaying it.
    pub fn complete(&mut self, data: StepData) {
        let step = &mut self.steps[data.step().index()];
        step.is_complete = true;
        step.data = Some(data);
    }

    /// Clears the flags and cached responses of every step after `id`.
    pub fn clear_after(&mut self, id: StepId) {
        for step in self.steps.iter_mut().skip(id.index() + 1) {
            *step = Step::new(step.id);
        }
    }

    /// Makes `id` the current step.
    pub fn show(&mut self, id: StepId) {
        self.current = id;
    }

    /// Clears every completion flag and cached response and returns to step
    /// one.
    pub fn reset(&mut self) {
        self.steps = StepId::ALL.map(Step::new);
        self.current = StepId::FoodInfo;
    }

    /// Progress indicator state for every step, in order.
    ///
    /// Steps before the current one always count as completed, as does any
    /// step whose flag is set (even ahead of the current position).
    pub fn progress(&self) -> [ProgressState; 4] {
        let current = self.current.index();
        StepId::ALL.map(|id| {
            if id.index() < current || self.is_complete(id) {
                ProgressState::Completed
            } else if id.index() == current {
                ProgressState::Current
            } else {
                ProgressState::Upcoming
            }
        })
    }
}

impl Default for StepSequence {
    fn default() -> Self {
        Self::new()
    }
}
