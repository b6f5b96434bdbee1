//! JSON-over-HTTP implementation of [`FoodService`].

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};

use super::{FoodService, ServiceFailure, ServiceResult};
use crate::{
    error::{Result, WizardError},
    models::{
        ErrorBody, FoodIdentity, FoodInfoResponse, NutritionRequest, NutritionResponse,
        SaveFoodRequest, ServingSizeResponse,
    },
};

/// Backend address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

const VERIFY_PATH: &str = "api/food-info/verify";
const SERVING_SIZE_PATH: &str = "api/food-info/serving-size";
const NUTRITION_PATH: &str = "api/food-info/nutrition";
const SAVE_PATH: &str = "api/food";

/// Cookie name the backend keeps its login session under.
pub const SESSION_COOKIE_NAME: &str = "session";

/// Message for a redirect to the login page.
pub const LOGIN_REQUIRED: &str =
    "Not signed in to the food backend. Pass a session cookie with --session-cookie.";

/// Food service backed by the HTTP API.
#[derive(Debug, Clone)]
pub struct HttpFoodService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFoodService {
    /// Creates a client for `base_url` with no request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        HttpFoodServiceBuilder::new().with_base_url(base_url).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn post<B>(&self, path: &str, body: &B) -> ServiceResult<reqwest::Response>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = self.endpoint(path);
        debug!("POST {url}");

        let response = self.client.post(&url).json(body).send().await.map_err(|e| {
            warn!("Request to {url} failed: {e}");
            ServiceFailure::network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status.is_redirection() {
            warn!("{url} redirected (HTTP {status}), session missing or expired");
            return Err(ServiceFailure::service(
                status.as_u16(),
                Some(LOGIN_REQUIRED.to_string()),
            ));
        }

        // Any non-2xx is a failure; the body only contributes a message.
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.error);
        warn!("{url} returned HTTP {status}");
        Err(ServiceFailure::service(status.as_u16(), message))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ServiceResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.post(path, body).await?;
        response.json::<T>().await.map_err(|e| {
            warn!("Could not decode response from {path}: {e}");
            ServiceFailure::network(e.to_string())
        })
    }
}

#[async_trait]
impl FoodService for HttpFoodService {
    async fn verify_food_info(&self, identity: &FoodIdentity) -> ServiceResult<FoodInfoResponse> {
        self.post_json(VERIFY_PATH, identity).await
    }

    async fn serving_size(&self, identity: &FoodIdentity) -> ServiceResult<ServingSizeResponse> {
        self.post_json(SERVING_SIZE_PATH, identity).await
    }

    async fn nutrition(&self, request: &NutritionRequest) -> ServiceResult<NutritionResponse> {
        self.post_json(NUTRITION_PATH, request).await
    }

    async fn save_food(&self, request: &SaveFoodRequest) -> ServiceResult<()> {
        self.post(SAVE_PATH, request).await.map(|_| ())
    }
}

/// Builder for creating and configuring [`HttpFoodService`] instances.
#[derive(Debug, Clone)]
pub struct HttpFoodServiceBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    session_cookie: Option<String>,
}

impl HttpFoodServiceBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            session_cookie: None,
        }
    }

    /// Sets the backend address. Defaults to [`DEFAULT_BASE_URL`].
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets a per-request timeout. No timeout is applied by default.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the login session sent with every request.
    ///
    /// Takes either a full `name=value` pair or a bare value, which is sent
    /// under [`SESSION_COOKIE_NAME`]. Blank values are ignored.
    pub fn with_session_cookie(mut self, cookie: Option<String>) -> Self {
        self.session_cookie = cookie
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self
    }

    /// Builds the configured service.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Configuration` if the base URL is not an http(s)
    /// URL or the timeout is zero.
    /// Returns `WizardError::Http` if the HTTP client cannot be created.
    ///
    /// Redirects are not followed, so an expired session surfaces as a
    /// failure instead of the login page.
    pub fn build(self) -> Result<HttpFoodService> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(WizardError::configuration(format!(
                "Base URL must start with http:// or https://, got '{base_url}'"
            )));
        }

        let url = reqwest::Url::parse(&base_url).map_err(|e| {
            WizardError::configuration(format!("Invalid base URL '{base_url}': {e}"))
        })?;

        let jar = Arc::new(reqwest::cookie::Jar::default());
        if let Some(cookie) = &self.session_cookie {
            let pair = if cookie.contains('=') {
                cookie.clone()
            } else {
                format!("{SESSION_COOKIE_NAME}={cookie}")
            };
            jar.add_cookie_str(&pair, &url);
            debug!("Using session cookie for {url}");
        }

        let mut client = reqwest::Client::builder()
            .cookie_provider(jar)
            .redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = self.timeout {
            if timeout.is_zero() {
                return Err(WizardError::configuration("Timeout must be greater than zero"));
            }
            client = client.timeout(timeout);
        }

        Ok(HttpFoodService {
            client: client.build()?,
            base_url,
        })
    }
}

impl Default for HttpFoodServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::models::FoodDraft;

    fn toast() -> FoodIdentity {
        FoodIdentity {
            name: "Toast".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_builder_defaults() {
        let service = HttpFoodServiceBuilder::new().build().unwrap();
        assert_eq!(service.base_url(), DEFAULT_BASE_URL);
        assert_eq!(
            service.endpoint(VERIFY_PATH),
            "http://127.0.0.1:5000/api/food-info/verify"
        );
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let service = HttpFoodService::new("https://food.example.com/app/").unwrap();
        assert_eq!(service.endpoint("/api/food"), "https://food.example.com/app/api/food");
    }

    #[test]
    fn test_builder_rejects_bad_configuration() {
        let err = HttpFoodService::new("food.example.com").unwrap_err();
        assert!(matches!(err, WizardError::Configuration { .. }));

        let err = HttpFoodServiceBuilder::new()
            .with_timeout(Some(Duration::ZERO))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Timeout"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_failure() {
        // Port 9 (discard) on loopback is not expected to be listening.
        let service = HttpFoodServiceBuilder::new()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Some(Duration::from_secs(5)))
            .build()
            .unwrap();

        let failure = service
            .verify_food_info(&toast())
            .await
            .unwrap_err();
        assert!(failure.is_network());
    }

    #[tokio::test]
    async fn test_session_cookie_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/food-info/verify"))
            .and(header("cookie", "session=abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "formatted_description": "Toast",
                "found_in_db": false
            })))
            .expect(1)
            .mount(&server)
            .await;

        let service = HttpFoodServiceBuilder::new()
            .with_base_url(server.uri())
            .with_session_cookie(Some("abc123".to_string()))
            .build()
            .unwrap();

        let response = service.verify_food_info(&toast()).await.unwrap();
        assert_eq!(response.formatted_description, "Toast");
    }

    #[tokio::test]
    async fn test_named_session_cookie_is_sent_as_given() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/food"))
            .and(header("cookie", "remember_token=xyz"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let service = HttpFoodServiceBuilder::new()
            .with_base_url(server.uri())
            .with_session_cookie(Some(" remember_token=xyz ".to_string()))
            .build()
            .unwrap();

        service
            .save_food(&FoodDraft::default().save_request())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_login_redirect_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/food-info/verify"))
            .respond_with(ResponseTemplate::new(302).insert_header("location", "/login"))
            .mount(&server)
            .await;

        let service = HttpFoodService::new(server.uri()).unwrap();
        let failure = service.verify_food_info(&toast()).await.unwrap_err();

        assert!(!failure.is_network());
        assert_eq!(failure.user_message("Failed to verify food information"), LOGIN_REQUIRED);
    }

    #[tokio::test]
    async fn test_error_body_message_is_kept() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/food-info/nutrition"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": "Unknown food"})),
            )
            .mount(&server)
            .await;

        let service = HttpFoodService::new(server.uri()).unwrap();
        let failure = service
            .nutrition(&NutritionRequest::automatic(toast(), 50.0))
            .await
            .unwrap_err();
        assert_eq!(failure, ServiceFailure::service(400, Some("Unknown food".to_string())));
    }
}
