//! Step identifiers and per-step records.

use serde::{Deserialize, Serialize};

use super::{FoodInfoResponse, NutritionResponse, ServingSizeResponse};

/// The four fixed steps of the food entry wizard, in display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    /// Name, brand and description of the food
    FoodInfo,
    /// Quantity and serving unit
    ServingSize,
    /// Nutrition values, computed or entered by hand
    NutritionInfo,
    /// Review, meal type and save
    Confirmation,
}

impl StepId {
    /// All steps in wizard order.
    pub const ALL: [StepId; 4] = [
        StepId::FoodInfo,
        StepId::ServingSize,
        StepId::NutritionInfo,
        StepId::Confirmation,
    ];

    /// Zero-based position of the step.
    pub fn index(self) -> usize {
        match self {
            StepId::FoodInfo => 0,
            StepId::ServingSize => 1,
            StepId::NutritionInfo => 2,
            StepId::Confirmation => 3,
        }
    }

    /// Step at the given position, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human readable step title.
    pub fn title(self) -> &'static str {
        match self {
            StepId::FoodInfo => "Food Information",
            StepId::ServingSize => "Serving Size",
            StepId::NutritionInfo => "Nutrition Information",
            StepId::Confirmation => "Confirmation",
        }
    }

    /// Identifier of the element that hosts this step in the web front end.
    pub fn element_id(self) -> &'static str {
        match self {
            StepId::FoodInfo => "food-info-step",
            StepId::ServingSize => "serving-size-step",
            StepId::NutritionInfo => "nutrition-info-step",
            StepId::Confirmation => "confirmation-step",
        }
    }

    /// The following step, or `None` on the last one.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, or `None` on the first one.
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

/// Server response cached on the step that requested it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "response", rename_all = "snake_case")]
pub enum StepData {
    FoodInfo(FoodInfoResponse),
    ServingSize(ServingSizeResponse),
    Nutrition(NutritionResponse),
}

impl StepData {
    /// The step this response belongs to.
    pub fn step(&self) -> StepId {
        match self {
            StepData::FoodInfo(_) => StepId::FoodInfo,
            StepData::ServingSize(_) => StepId::ServingSize,
            StepData::Nutrition(_) => StepId::NutritionInfo,
        }
    }
}

/// One entry of the step sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    pub id: StepId,

    pub title: String,

    /// Set once the step's backend call succeeded; survives back-navigation
    pub is_complete: bool,

    /// Last successful response for this step, `None` until one arrives
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<StepData>,
}

impl Step {
    /// Creates the initial, incomplete record for a step.
    pub fn new(id: StepId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            is_complete: false,
            data: None,
        }
    }
}
