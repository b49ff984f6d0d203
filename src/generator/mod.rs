// ABOUTME: Generation orchestrator: ordered strategy chain with guaranteed output
// ABOUTME: Template emulation, then remote AI endpoints, then offline synthesis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

//! # Plan Generation
//!
//! [`PlanGenerator`] walks its strategies in order and returns the first
//! plan produced. Strategies decline by returning `None`; they never abort
//! the chain. The offline tier never declines, so a structurally valid
//! profile always yields a plan. The only error a caller can see is
//! [`PlanError::InvalidProfile`].
//!
//! The generator does not persist anything. Callers hand the returned plan
//! to [`crate::plan_store::PlanStore`] and commit exercise usage through
//! [`crate::usage::UsageTracker`] themselves.

pub mod offline_tier;
pub mod remote_tier;
pub mod template_tier;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::errors::PlanResult;
use crate::models::{Plan, PlanId, PlanSource, PlanStatus, TrainingDay, UserProfile};
use crate::transport::{GenerationTransport, HttpGenerationTransport};

pub use offline_tier::OfflineTier;
pub use remote_tier::RemoteTier;
pub use template_tier::TemplateTier;

/// One tier in the generation chain
#[async_trait]
pub trait GenerationStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Produce a plan, or decline so the next tier runs
    async fn attempt(&self, profile: &UserProfile) -> Option<Plan>;
}

/// Assemble a complete plan around a generated schedule
#[must_use]
pub(crate) fn assemble_plan(
    profile: &UserProfile,
    name: String,
    schedule: Vec<TrainingDay>,
    source: PlanSource,
) -> Plan {
    let now = Utc::now();
    Plan {
        id: PlanId::new_local(source),
        owner_id: profile.owner_id.clone(),
        name,
        training_level: profile.training_level,
        goal_fat_loss: profile.fat_loss_goal,
        goal_muscle_gain: profile.muscle_gain_goal,
        mesocycle_length_weeks: 8,
        schedule,
        status: PlanStatus::Active,
        source,
        created_at: now,
        updated_at: now,
    }
}

/// The tiered plan generator
pub struct PlanGenerator {
    strategies: Vec<Arc<dyn GenerationStrategy>>,
}

impl PlanGenerator {
    /// Production chain: template emulation, remote endpoints, offline synthesis
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpGenerationTransport))
    }

    /// Production chain over an injected transport
    #[must_use]
    pub fn with_transport(config: EngineConfig, transport: Arc<dyn GenerationTransport>) -> Self {
        Self {
            strategies: vec![
                Arc::new(TemplateTier),
                Arc::new(RemoteTier::new(config, transport)),
                Arc::new(OfflineTier),
            ],
        }
    }

    /// Build a generator from an explicit strategy chain
    #[must_use]
    pub fn with_strategies(strategies: Vec<Arc<dyn GenerationStrategy>>) -> Self {
        Self { strategies }
    }

    /// Generate a plan for the given profile.
    ///
    /// # Errors
    ///
    /// Only [`crate::errors::PlanError::InvalidProfile`]; every downstream
    /// failure is absorbed by tier fallback.
    pub async fn generate(&self, profile: &UserProfile) -> PlanResult<Plan> {
        profile.validate()?;

        for strategy in &self.strategies {
            debug!(tier = strategy.name(), "attempting generation tier");
            if let Some(plan) = strategy.attempt(profile).await {
                info!(
                    tier = strategy.name(),
                    plan_id = %plan.id,
                    training_days = plan.training_day_count(),
                    "plan generated"
                );
                return Ok(plan);
            }
        }

        // The offline tier never declines; this only runs for a custom
        // chain that exhausted itself.
        Ok(offline_tier::build_plan(profile))
    }
}
