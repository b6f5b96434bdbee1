//! Data models for the food entry wizard.
//!
//! This module contains the state the wizard owns (the [`StepSequence`] and
//! the [`FoodDraft`]) and the wire types exchanged with the backend. Display
//! implementations for these models live in [`crate::display::models`] to
//! keep data structures separate from presentation.
//!
//! # Overview
//!
//! - [`StepId`] / [`Step`] / [`StepSequence`]: the four fixed steps, their
//!   completion flags, cached responses and the current position
//! - [`FoodDraft`]: the record being built, reset to its defaults after a
//!   successful save
//! - [`Nutrients`], [`NutriScore`], [`MealType`]: value types shared by the
//!   draft and the wire types
//! - [`wire`]: request and response bodies of the four backend endpoints
//!
//! # Examples
//!
//! ```rust
//! use foodlog_core::models::{FoodDraft, ProgressState, StepId, StepSequence};
//!
//! let mut steps = StepSequence::new();
//! steps.show(StepId::ServingSize);
//! assert_eq!(
//!     steps.progress(),
//!     [
//!         ProgressState::Completed,
//!         ProgressState::Current,
//!         ProgressState::Upcoming,
//!         ProgressState::Upcoming,
//!     ]
//! );
//!
//! let draft = FoodDraft::default();
//! assert_eq!(draft.quantity, 100.0);
//! assert_eq!(draft.unit, "g");
//! ```

pub mod draft;
pub mod meal;
pub mod nutrients;
pub mod sequence;
pub mod step;
pub mod wire;

#[cfg(test)]
mod tests;

pub use draft::{FoodDraft, DEFAULT_QUANTITY, DEFAULT_UNIT};
pub use meal::MealType;
pub use nutrients::{NutriGrade, NutriScore, Nutrients};
pub use sequence::{ProgressState, StepSequence};
pub use step::{Step, StepData, StepId};
pub use wire::{
    DefaultServing, ErrorBody, FoodIdentity, FoodInfoResponse, ManualNutrition, NutritionRequest,
    NutritionResponse, ReferenceMatch, SaveFoodRequest, ServingOption, ServingOptionValue,
    ServingSizeResponse,
};
