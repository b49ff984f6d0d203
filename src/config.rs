// ABOUTME: Environment-driven engine configuration: endpoints, timeouts, environment
// ABOUTME: Explicit config structs passed into constructors so tests can inject doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

//! # Engine Configuration
//!
//! The remote-generation tier walks an ordered list of candidate endpoints.
//! Timeouts scale with endpoint locality: remote AI inference is slow, so
//! production endpoints get a long generation timeout, while local
//! development servers fail fast.

use std::env;
use std::time::Duration;

/// Default production generation endpoint
pub const DEFAULT_PRODUCTION_URL: &str = "https://fitplan-engine-production.up.railway.app";

/// Environment variable that injects an additional endpoint ahead of the
/// development fallbacks
pub const API_URL_ENV: &str = "FITPLAN_API_URL";

/// Health probe timeout
const PROBE_TIMEOUT_SECS: u64 = 5;
/// Generation timeout for local/development endpoints
const LOCAL_GENERATE_TIMEOUT_SECS: u64 = 20;
/// Generation timeout for remote production endpoints
const REMOTE_GENERATE_TIMEOUT_SECS: u64 = 120;

/// Whether an endpoint is on the local machine or out on the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointLocality {
    /// localhost / loopback / emulator-host addresses
    Local,
    /// Anything else
    Remote,
}

/// One candidate generation endpoint
#[derive(Debug, Clone)]
pub struct GenerationEndpoint {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Locality, drives probe skipping and timeout scaling
    pub locality: EndpointLocality,
}

impl GenerationEndpoint {
    /// Build an endpoint, recognizing locality from the host
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_owned();
        let locality = if ["localhost", "127.0.0.1", "0.0.0.0", "10.0.2.2"]
            .iter()
            .any(|host| base_url.contains(host))
        {
            EndpointLocality::Local
        } else {
            EndpointLocality::Remote
        };
        Self { base_url, locality }
    }

    /// Local endpoints skip the health probe; they either answer fast or not at all
    #[must_use]
    pub const fn skip_probe(&self) -> bool {
        matches!(self.locality, EndpointLocality::Local)
    }
}

/// Configuration for the generation orchestrator
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Candidate endpoints, in the order the remote tier will try them
    pub endpoints: Vec<GenerationEndpoint>,
    /// Timeout for the fast health probe
    pub probe_timeout: Duration,
    /// Generation timeout for local endpoints
    pub local_generate_timeout: Duration,
    /// Generation timeout for remote endpoints
    pub remote_generate_timeout: Duration,
    /// Deployment environment name ("development", "production", ...)
    pub environment: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            endpoints: vec![GenerationEndpoint::new(DEFAULT_PRODUCTION_URL)],
            probe_timeout: Duration::from_secs(PROBE_TIMEOUT_SECS),
            local_generate_timeout: Duration::from_secs(LOCAL_GENERATE_TIMEOUT_SECS),
            remote_generate_timeout: Duration::from_secs(REMOTE_GENERATE_TIMEOUT_SECS),
            environment: "production".into(),
        }
    }
}

impl EngineConfig {
    /// Build configuration from environment variables.
    ///
    /// Endpoint order: the primary production endpoint, then an optional
    /// `FITPLAN_API_URL` override, then development-only localhost servers.
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "development".into());

        let mut endpoints = vec![GenerationEndpoint::new(DEFAULT_PRODUCTION_URL)];
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() && !endpoints.iter().any(|e| e.base_url == url.trim_end_matches('/')) {
                endpoints.push(GenerationEndpoint::new(url));
            }
        }
        if environment != "production" {
            endpoints.push(GenerationEndpoint::new("http://localhost:4000"));
            endpoints.push(GenerationEndpoint::new("http://127.0.0.1:4000"));
        }

        let probe_timeout = env_duration("FITPLAN_PROBE_TIMEOUT_SECS", PROBE_TIMEOUT_SECS);
        let local_generate_timeout =
            env_duration("FITPLAN_LOCAL_TIMEOUT_SECS", LOCAL_GENERATE_TIMEOUT_SECS);
        let remote_generate_timeout =
            env_duration("FITPLAN_REMOTE_TIMEOUT_SECS", REMOTE_GENERATE_TIMEOUT_SECS);

        Self {
            endpoints,
            probe_timeout,
            local_generate_timeout,
            remote_generate_timeout,
            environment,
        }
    }

    /// Generation timeout for the given endpoint
    #[must_use]
    pub const fn generate_timeout(&self, endpoint: &GenerationEndpoint) -> Duration {
        match endpoint.locality {
            EndpointLocality::Local => self.local_generate_timeout,
            EndpointLocality::Remote => self.remote_generate_timeout,
        }
    }
}

fn env_duration(var: &str, default_secs: u64) -> Duration {
    env::var(var)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map_or(Duration::from_secs(default_secs), Duration::from_secs)
}
