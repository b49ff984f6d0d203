// ABOUTME: HTTP seam to remote generation endpoints: health probe and generate call
// ABOUTME: One pooled reqwest client shared process-wide behind a OnceLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

//! # Generation Transport
//!
//! [`GenerationTransport`] is the seam the remote tier talks through; tests
//! substitute doubles for it. The production implementation wraps a single
//! pooled [`reqwest::Client`] so connection reuse survives across endpoint
//! attempts.

use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::GenerationEndpoint;
use crate::errors::{PlanError, PlanResult};
use crate::models::UserProfile;

/// Generation request path
const GENERATE_PATH: &str = "/generate-workout-plan";
/// Health probe path
const HEALTH_PATH: &str = "/health";

static HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

fn shared_client() -> &'static reqwest::Client {
    HTTP_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("fitplan-engine/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default()
    })
}

/// Async seam to a remote generation service
#[async_trait]
pub trait GenerationTransport: Send + Sync {
    /// Fast liveness probe; `Ok(())` means the endpoint is worth a full request
    async fn probe_health(&self, endpoint: &GenerationEndpoint, timeout: Duration)
        -> PlanResult<()>;

    /// Request a generated plan, returning the raw JSON response body
    async fn generate(
        &self,
        endpoint: &GenerationEndpoint,
        profile: &UserProfile,
        timeout: Duration,
    ) -> PlanResult<Value>;
}

/// Production transport over the shared pooled HTTP client
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpGenerationTransport;

impl HttpGenerationTransport {
    fn classify(endpoint: &GenerationEndpoint, timeout: Duration, err: &reqwest::Error) -> PlanError {
        if err.is_timeout() {
            PlanError::EndpointTimeout {
                endpoint: endpoint.base_url.clone(),
                timeout_secs: timeout.as_secs(),
            }
        } else {
            PlanError::EndpointUnavailable {
                endpoint: endpoint.base_url.clone(),
                reason: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl GenerationTransport for HttpGenerationTransport {
    async fn probe_health(
        &self,
        endpoint: &GenerationEndpoint,
        timeout: Duration,
    ) -> PlanResult<()> {
        let url = format!("{}{HEALTH_PATH}", endpoint.base_url);
        debug!(url = %url, "probing endpoint health");

        let response = shared_client()
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| Self::classify(endpoint, timeout, &e))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(PlanError::EndpointUnavailable {
                endpoint: endpoint.base_url.clone(),
                reason: format!("health probe returned {}", response.status()),
            })
        }
    }

    async fn generate(
        &self,
        endpoint: &GenerationEndpoint,
        profile: &UserProfile,
        timeout: Duration,
    ) -> PlanResult<Value> {
        let url = format!("{}{GENERATE_PATH}", endpoint.base_url);
        debug!(url = %url, timeout_secs = timeout.as_secs(), "requesting plan generation");

        let response = shared_client()
            .post(&url)
            .timeout(timeout)
            .json(profile)
            .send()
            .await
            .map_err(|e| Self::classify(endpoint, timeout, &e))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            // The host is up but does not implement generation
            return Err(PlanError::EndpointUnavailable {
                endpoint: endpoint.base_url.clone(),
                reason: "generation capability missing (404)".into(),
            });
        }
        if !status.is_success() {
            return Err(PlanError::EndpointUnavailable {
                endpoint: endpoint.base_url.clone(),
                reason: format!("generation returned {status}"),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| PlanError::MalformedResponse {
                endpoint: endpoint.base_url.clone(),
                reason: format!("response body is not JSON: {e}"),
            })
    }
}
