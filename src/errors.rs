// ABOUTME: Unified error taxonomy for plan generation and persistence
// ABOUTME: Only InvalidProfile is fatal; everything else drives fallback decisions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

//! # Error Handling
//!
//! Error classification follows the engine's resilience contract: network and
//! data-quality failures are recoverable and drive tier/endpoint progression
//! inside the generator; persistence anomalies are self-healed and logged.
//! The only error a caller of [`crate::generator::PlanGenerator::generate`]
//! ever sees is [`PlanError::InvalidProfile`].

use thiserror::Error;

/// Result type alias used throughout the engine
pub type PlanResult<T> = Result<T, PlanError>;

/// Unified error type for the plan engine
#[derive(Debug, Error)]
pub enum PlanError {
    /// The caller supplied a profile the engine cannot process (missing owner id).
    /// This is the only error that escapes plan generation.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    /// A generation endpoint could not be reached or refused the request
    #[error("endpoint unavailable: {endpoint}: {reason}")]
    EndpointUnavailable {
        /// Base URL of the failed endpoint
        endpoint: String,
        /// Human-readable failure reason
        reason: String,
    },

    /// A generation request exceeded its configured timeout
    #[error("endpoint timed out after {timeout_secs}s: {endpoint}")]
    EndpointTimeout {
        /// Base URL of the endpoint that timed out
        endpoint: String,
        /// The timeout that was exceeded, in seconds
        timeout_secs: u64,
    },

    /// A remote response could not be normalized into a structurally valid plan
    #[error("malformed response from {endpoint}: {reason}")]
    MalformedResponse {
        /// Base URL of the endpoint that produced the response
        endpoint: String,
        /// What the normalizer or validator rejected
        reason: String,
    },

    /// The store observed an inconsistent state (e.g. duplicate active plans).
    /// Self-healed by deterministic resolution; surfaced only in logs.
    #[error("persistence anomaly for owner {owner_id}: {detail}")]
    PersistenceAnomaly {
        /// Owner whose plan list was inconsistent
        owner_id: String,
        /// Description of the anomaly
        detail: String,
    },

    /// The underlying key-value store failed
    #[error("storage error: {0}")]
    Storage(String),

    /// JSON (de)serialization failed while reading or writing the store
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The supplied plan identifier matches neither the local nor the remote format
    #[error("unrecognized plan id format: {0}")]
    InvalidPlanId(String),
}

impl PlanError {
    /// Invalid profile shorthand
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        Self::InvalidProfile(message.into())
    }

    /// Storage failure shorthand
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// True when this failure should advance the generator to the next
    /// endpoint or tier instead of aborting
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidProfile(_) | Self::InvalidPlanId(_))
    }
}
