//! In-memory [`FoodService`] that replays queued responses.
//!
//! Each call pops the next queued result for its endpoint and records the
//! request it was given. A call with nothing queued fails with a network
//! failure, so an unexpected request shows up as a failed step rather than a
//! panic.

use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use log::debug;

use super::{FoodService, ServiceFailure, ServiceResult};
use crate::models::{
    FoodIdentity, FoodInfoResponse, NutritionRequest, NutritionResponse, SaveFoodRequest,
    ServingSizeResponse,
};

/// A request received by a [`ScriptedFoodService`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedRequest {
    VerifyFoodInfo(FoodIdentity),
    ServingSize(FoodIdentity),
    Nutrition(NutritionRequest),
    ReferenceNutrition(NutritionRequest),
    SaveFood(SaveFoodRequest),
}

#[derive(Debug, Default)]
struct Script {
    food_info: VecDeque<ServiceResult<FoodInfoResponse>>,
    serving_size: VecDeque<ServiceResult<ServingSizeResponse>>,
    nutrition: VecDeque<ServiceResult<NutritionResponse>>,
    save: VecDeque<ServiceResult<()>>,
    requests: Vec<RecordedRequest>,
}

/// Food service that answers from queues filled in advance.
#[derive(Debug, Default)]
pub struct ScriptedFoodService {
    script: Mutex<Script>,
}

impl ScriptedFoodService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the next verification result.
    pub fn push_food_info(&self, result: ServiceResult<FoodInfoResponse>) -> &Self {
        self.lock().food_info.push_back(result);
        self
    }

    pub fn push_serving_size(&self, result: ServiceResult<ServingSizeResponse>) -> &Self {
        self.lock().serving_size.push_back(result);
        self
    }

    /// Queues the next nutrition result, shared by computed, manual and
    /// catalog lookups.
    pub fn push_nutrition(&self, result: ServiceResult<NutritionResponse>) -> &Self {
        self.lock().nutrition.push_back(result);
        self
    }

    pub fn push_save(&self, result: ServiceResult<()>) -> &Self {
        self.lock().save.push_back(result);
        self
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        // A poisoned script only means a test panicked mid-call.
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn next<T>(queue: &mut VecDeque<ServiceResult<T>>, endpoint: &str) -> ServiceResult<T> {
    queue.pop_front().unwrap_or_else(|| {
        debug!("No scripted response left for {endpoint}");
        Err(ServiceFailure::network(format!(
            "no scripted response for {endpoint}"
        )))
    })
}

#[async_trait]
impl FoodService for ScriptedFoodService {
    async fn verify_food_info(&self, identity: &FoodIdentity) -> ServiceResult<FoodInfoResponse> {
        let mut script = self.lock();
        script
            .requests
            .push(RecordedRequest::VerifyFoodInfo(identity.clone()));
        next(&mut script.food_info, "verify")
    }

    async fn serving_size(&self, identity: &FoodIdentity) -> ServiceResult<ServingSizeResponse> {
        let mut script = self.lock();
        script
            .requests
            .push(RecordedRequest::ServingSize(identity.clone()));
        next(&mut script.serving_size, "serving-size")
    }

    async fn nutrition(&self, request: &NutritionRequest) -> ServiceResult<NutritionResponse> {
        let mut script = self.lock();
        script
            .requests
            .push(RecordedRequest::Nutrition(request.clone()));
        next(&mut script.nutrition, "nutrition")
    }

    async fn reference_nutrition(
        &self,
        request: &NutritionRequest,
    ) -> ServiceResult<NutritionResponse> {
        let mut script = self.lock();
        script
            .requests
            .push(RecordedRequest::ReferenceNutrition(request.clone()));
        next(&mut script.nutrition, "nutrition")
    }

    async fn save_food(&self, request: &SaveFoodRequest) -> ServiceResult<()> {
        let mut script = self.lock();
        script.requests.push(RecordedRequest::SaveFood(request.clone()));
        next(&mut script.save, "food")
    }
}
