//! Display formatting functions and wrapper types.
//!
//! Domain models implement `Display` directly (see [`models`]); groups of
//! values and step feedback go through small wrapper types, and serving size
//! labels have their own formatter.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Format Functions│    │   Formatted     │
//! │ (Draft, Summary)│───▶│ & Wrapper Types │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`serving`]: Serving size labels (`"60g (2 slices)"`)
//! - [`collections`]: Progress indicator and serving option list
//! - [`status`]: Step feedback messages (OperationStatus)
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use foodlog_core::display::{format_serving_size, OperationStatus};
//!
//! assert_eq!(format_serving_size(Some(30.0), Some("tbsp"), Some(15.0)), "30g (2 tablespoons)");
//!
//! let status = OperationStatus::success("Food entry saved successfully!");
//! assert!(status.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod models;
pub mod serving;
pub mod status;

pub use collections::{ServingOptions, StepProgress};
pub use serving::{format_serving_size, manual_serving_caption, manual_serving_hint, ServingSize};
pub use status::OperationStatus;
