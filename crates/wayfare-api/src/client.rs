//! HTTP client for the trip-planning service.
//!
//! Wraps `reqwest` with bearer-key handling, retry on transient failures, and
//! normalization of every trip payload the service returns.

use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, Method, StatusCode, Url};
use serde_json::Value;
use wayfare_core::{AppConfig, TripFormInput, TripRecord};

use crate::error::ApiError;
use crate::retry::retry_with_backoff;
use crate::types::TripRequest;

const DEFAULT_USER_AGENT: &str = "wayfare/0.1 (trip-planner)";

/// Destination shown for stored trips that come back without one.
const UNKNOWN_DESTINATION: &str = "Unknown destination";

/// Client for the planning service's `/api/v1` surface.
///
/// Use [`PlannerClient::from_config`] in the binary or
/// [`PlannerClient::with_base_url`] to point at a mock server in tests.
pub struct PlannerClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl PlannerClient {
    /// Creates a client with no retries and no API key.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url` does not
    /// parse as an http(s) URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ApiError> {
        let user_agent = if user_agent.trim().is_empty() {
            DEFAULT_USER_AGENT
        } else {
            user_agent
        };
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `Url::join` appends to the path
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: format!("expected an http(s) URL, got scheme '{}'", parsed.scheme()),
            });
        }
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            api_key: None,
            max_retries: 0,
            backoff_base_ms: 0,
        })
    }

    /// Builds a client from the application config.
    ///
    /// # Errors
    ///
    /// Same as [`PlannerClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        let client = Self::with_base_url(
            &config.api_base_url,
            config.api_timeout_secs,
            &config.api_user_agent,
        )?
        .with_retry(config.api_max_retries, config.api_retry_backoff_base_ms);

        Ok(match &config.api_key {
            Some(key) => client.with_api_key(key),
            None => client,
        })
    }

    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Sends `key` as a bearer token on every request. A blank key is ignored.
    #[must_use]
    pub fn with_api_key(mut self, key: &str) -> Self {
        let key = key.trim();
        self.api_key = (!key.is_empty()).then(|| key.to_owned());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Asks the service to plan a trip and normalizes the answer against
    /// `form`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] / [`ApiError::UnexpectedStatus`] on transport or
    ///   HTTP failure after retries.
    /// - [`ApiError::Deserialize`] if the body is not JSON.
    /// - [`ApiError::Normalize`] if the body is JSON but not an object.
    pub async fn plan_trip(&self, form: &TripFormInput) -> Result<TripRecord, ApiError> {
        let raw = self.plan_trip_raw(form).await?;
        Ok(wayfare_planner::normalize(&raw, form)?)
    }

    /// Like [`Self::plan_trip`] but returns the service's JSON untouched.
    ///
    /// # Errors
    ///
    /// See [`Self::plan_trip`], minus normalization.
    pub async fn plan_trip_raw(&self, form: &TripFormInput) -> Result<Value, ApiError> {
        let body = TripRequest::from(form);
        let url = self.endpoint("plan/trip")?;
        self.send_json(Method::POST, &url, Some(&body)).await
    }

    /// Lists stored trips on the service, oldest first as the service returns
    /// them.
    ///
    /// Entries that fail to normalize are skipped.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] / [`ApiError::UnexpectedStatus`] on HTTP failure.
    /// - [`ApiError::Deserialize`] if the body is not a JSON array.
    pub async fn list_trips(&self, skip: u32, limit: u32) -> Result<Vec<TripRecord>, ApiError> {
        let mut url = self.endpoint("trips/")?;
        url.query_pairs_mut()
            .append_pair("skip", &skip.to_string())
            .append_pair("limit", &limit.to_string());

        let body = self.send_json::<()>(Method::GET, &url, None).await?;
        let entries: Vec<Value> =
            serde_json::from_value(body).map_err(|e| ApiError::Deserialize {
                context: format!("list_trips(skip={skip}, limit={limit})"),
                source: e,
            })?;

        let form = stored_trip_form();
        let trips = entries
            .iter()
            .enumerate()
            .filter_map(
                |(index, entry)| match wayfare_planner::normalize(entry, &form) {
                    Ok(trip) => Some(trip),
                    Err(error) => {
                        tracing::debug!(index, %error, "skipping malformed trip entry");
                        None
                    }
                },
            )
            .collect();
        Ok(trips)
    }

    /// Fetches one stored trip.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`] if the service has no trip with that id.
    /// - [`ApiError::Normalize`] if the body is not a JSON object.
    /// - Transport errors as for [`Self::plan_trip`].
    pub async fn get_trip(&self, id: &str) -> Result<TripRecord, ApiError> {
        let url = self.trip_url(id)?;
        let body = self.send_json::<()>(Method::GET, &url, None).await?;
        Ok(wayfare_planner::normalize(&body, &stored_trip_form())?)
    }

    /// Deletes one stored trip.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] if the id is unknown; transport errors as for
    /// [`Self::plan_trip`].
    pub async fn delete_trip(&self, id: &str) -> Result<(), ApiError> {
        let url = self.trip_url(id)?;
        self.send_json::<()>(Method::DELETE, &url, None).await?;
        Ok(())
    }

    /// Returns the service's health document as-is.
    ///
    /// # Errors
    ///
    /// Transport and decode errors as for [`Self::plan_trip`].
    pub async fn health(&self) -> Result<Value, ApiError> {
        let url = self.endpoint("health")?;
        self.send_json::<()>(Method::GET, &url, None).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join '{path}': {e}"),
            })
    }

    fn trip_url(&self, id: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint("trips/")?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_owned(),
            })?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    async fn send_json<B: serde::Serialize + Sync>(
        &self,
        method: Method,
        url: &Url,
        body: Option<&B>,
    ) -> Result<Value, ApiError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.send_once(method.clone(), url, body)
        })
        .await
    }

    /// One request: 404 maps to [`ApiError::NotFound`], any other non-2xx to
    /// [`ApiError::UnexpectedStatus`], an empty body to `Value::Null`.
    async fn send_once<B: serde::Serialize + Sync>(
        &self,
        method: Method,
        url: &Url,
        body: Option<&B>,
    ) -> Result<Value, ApiError> {
        let mut request = self.client.request(method, url.clone());
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

/// Fallback form for trips fetched without the request that created them.
fn stored_trip_form() -> TripFormInput {
    let today = Utc::now().date_naive();
    TripFormInput::new(UNKNOWN_DESTINATION, today, today, 0.0, Vec::new())
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
