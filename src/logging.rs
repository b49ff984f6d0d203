// ABOUTME: Structured logging setup built on tracing and tracing-subscriber
// ABOUTME: Env-driven filter and format selection, pretty for dev and JSON for prod
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

//! # Logging
//!
//! The engine emits structured events through [`tracing`]; the embedding
//! application may install its own subscriber instead of calling
//! [`init_logging`]. Tier fallbacks and persistence anomalies are logged at
//! `warn`, endpoint attempts at `debug`.

use std::env;

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration resolved from the environment
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "fitplan_engine=debug"
    pub filter: String,
    /// Emit newline-delimited JSON instead of human-readable lines
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".into(),
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG` and `LOG_FORMAT` from the environment
    #[must_use]
    pub fn from_env() -> Self {
        let filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let json_format =
            env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
        Self {
            filter,
            json_format,
        }
    }
}

/// Install a global tracing subscriber.
///
/// # Errors
///
/// Returns an error when a subscriber is already installed or the filter
/// directive fails to parse.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)?;

    if config.json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init()?;
    }
    Ok(())
}
