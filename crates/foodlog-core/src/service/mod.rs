//! Backend food service.
//!
//! The wizard talks to the backend through the [`FoodService`] trait. Two
//! implementations ship with the crate:
//!
//! - [`HttpFoodService`]: JSON over HTTP against a running backend
//! - [`ScriptedFoodService`]: replays queued responses and records every
//!   request, for tests and offline demos
//!
//! Calls fail with a [`ServiceFailure`], which is step-scoped and
//! recoverable: the wizard shows it and lets the user retry.

pub mod http;
pub mod scripted;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    FoodIdentity, FoodInfoResponse, NutritionRequest, NutritionResponse, SaveFoodRequest,
    ServingSizeResponse,
};

pub use http::{
    HttpFoodService, HttpFoodServiceBuilder, DEFAULT_BASE_URL, LOGIN_REQUIRED, SESSION_COOKIE_NAME,
};
pub use scripted::{RecordedRequest, ScriptedFoodService};

/// Message shown for any transport failure.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Why a backend call failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceFailure {
    /// The backend answered with a non-2xx status
    #[error("Backend returned HTTP {status}{}", detail(.message))]
    Service {
        status: u16,
        /// The body's `error` field, when the body could be parsed
        message: Option<String>,
    },
    /// The request could not be sent, or the response could not be decoded
    #[error("Network error: {message}")]
    Network { message: String },
}

impl ServiceFailure {
    pub fn service(status: u16, message: Option<String>) -> Self {
        Self::Service { status, message }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Message to show the user: the backend's own message when it sent
    /// one, the step's `fallback` otherwise. Transport failures always use
    /// [`NETWORK_ERROR_MESSAGE`].
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Service {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            Self::Service { .. } => fallback.to_string(),
            Self::Network { .. } => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

/// Result type alias for backend calls
pub type ServiceResult<T> = std::result::Result<T, ServiceFailure>;

/// The four backend calls the wizard makes.
#[async_trait]
pub trait FoodService: Send + Sync {
    /// Checks a food against the catalog and formats its description.
    async fn verify_food_info(&self, identity: &FoodIdentity) -> ServiceResult<FoodInfoResponse>;

    /// Suggests a default serving and a list of serving options.
    async fn serving_size(&self, identity: &FoodIdentity) -> ServiceResult<ServingSizeResponse>;

    /// Computes nutrition for a quantity, or scores manual values.
    async fn nutrition(&self, request: &NutritionRequest) -> ServiceResult<NutritionResponse>;

    /// Looks up nutrition of a catalog match. The backend serves both from
    /// the same endpoint, so this defaults to [`nutrition`](Self::nutrition).
    async fn reference_nutrition(
        &self,
        request: &NutritionRequest,
    ) -> ServiceResult<NutritionResponse> {
        self.nutrition(request).await
    }

    /// Persists the finished entry.
    async fn save_food(&self, request: &SaveFoodRequest) -> ServiceResult<()>;
}
