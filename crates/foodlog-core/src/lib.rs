//! Core library for the Foodlog food entry wizard.
//!
//! This crate provides the business logic for logging a food entry in four
//! steps (food identity, serving size, nutrition, confirmation) against a
//! food backend, without depending on any particular front end.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): the step sequence, the draft entry and the
//!   backend's request and response bodies
//! - **Forms** ([`forms`]): raw form input and its validation
//! - **Wizard** ([`wizard`]): the step state machine and its handlers
//! - **Service** ([`service`]): the backend, over HTTP or scripted
//! - **View** ([`view`]): the capability trait a front end implements to
//!   show what the wizard reports
//! - **Display** ([`display`]): serving labels and markdown output for the
//!   terminal renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use foodlog_core::{
//!     forms::{FoodInfoForm, NutritionForm, ServingSelection},
//!     service::HttpFoodServiceBuilder,
//!     WizardBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = HttpFoodServiceBuilder::new()
//!     .with_base_url("http://127.0.0.1:5000")
//!     .build()?;
//! let mut wizard = WizardBuilder::new(service).build();
//!
//! wizard
//!     .submit_food_info(FoodInfoForm {
//!         name: "Sourdough".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! wizard.submit_serving_size().await?;
//! wizard
//!     .submit_nutrition(NutritionForm {
//!         serving: ServingSelection::Grams(60.0),
//!         is_shared: false,
//!         manual: None,
//!     })
//!     .await?;
//!
//! println!("{}", wizard.draft());
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod forms;
pub mod models;
pub mod nutrition;
pub mod service;
pub mod view;
pub mod wizard;

// Re-export commonly used types
pub use display::{format_serving_size, OperationStatus, ServingSize};
pub use error::{Result, WizardError};
pub use models::{FoodDraft, MealType, NutriGrade, StepId, StepSequence};
pub use nutrition::{NutritionMode, NutritionSource, NutritionSummary};
pub use service::{FoodService, HttpFoodService, HttpFoodServiceBuilder, ServiceFailure};
pub use view::{NullView, RecordingView, WizardView};
pub use wizard::{FailureKind, StepFailure, StepOutcome, Wizard, WizardBuilder};
