// ABOUTME: Single-active plan persistence over the key-value store seam
// ABOUTME: Whole-list JSON read-modify-write per owner, with remote mirroring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

//! # Plan Store
//!
//! Each owner's plans live as one JSON array under `workout_plans:{owner_id}`.
//! Every mutation is a read-modify-write of the whole list, which keeps the
//! single-active invariant enforceable in one place: activating any plan
//! first archives whatever was active.
//!
//! The remote mirror is best effort. Remote failures are logged and never
//! block local operations, so the app keeps working through an outage.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::errors::{PlanError, PlanResult};
use crate::models::{Plan, PlanId, PlanStatus};
use crate::storage::{KeyValueStore, RemotePlanStore};

/// Storage key prefix for per-owner plan lists
const PLAN_LIST_KEY_PREFIX: &str = "workout_plans";

/// Persistence facade enforcing the single-active invariant
pub struct PlanStore {
    local: Arc<dyn KeyValueStore>,
    remote: Arc<dyn RemotePlanStore>,
}

impl PlanStore {
    /// Build a store over the given local and remote backends
    #[must_use]
    pub fn new(local: Arc<dyn KeyValueStore>, remote: Arc<dyn RemotePlanStore>) -> Self {
        Self { local, remote }
    }

    fn list_key(owner_id: &str) -> String {
        format!("{PLAN_LIST_KEY_PREFIX}:{owner_id}")
    }

    async fn load_plans(&self, owner_id: &str) -> PlanResult<Vec<Plan>> {
        let key = Self::list_key(owner_id);
        match self.local.get(&key).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save_plans(&self, owner_id: &str, plans: &[Plan]) -> PlanResult<()> {
        let key = Self::list_key(owner_id);
        let raw = serde_json::to_string(plans)?;
        self.local.set(&key, raw).await
    }

    /// Insert a plan for its owner. An active plan archives whatever was
    /// active before, in the same write. Archived or completed plans are
    /// stored as given and never displace the current active plan, so sync
    /// backfills can land without side effects.
    pub async fn add_plan(&self, mut plan: Plan) -> PlanResult<()> {
        let owner_id = plan.owner_id.clone();
        let mut plans = self.load_plans(&owner_id).await?;

        let now = Utc::now();
        if plan.status == PlanStatus::Active {
            for existing in plans.iter_mut().filter(|p| p.status == PlanStatus::Active) {
                existing.status = PlanStatus::Archived;
                existing.updated_at = now;
            }
        }

        plan.updated_at = now;
        debug!(owner_id = %owner_id, plan_id = %plan.id, status = ?plan.status, "storing plan");
        plans.push(plan);

        self.save_plans(&owner_id, &plans).await
    }

    /// The owner's single active plan, if any.
    ///
    /// When the stored list somehow contains more than one active plan, the
    /// most recently updated one wins; the rest are archived in place and the
    /// repaired list is written back.
    pub async fn get_active_plan(&self, owner_id: &str) -> PlanResult<Option<Plan>> {
        let mut plans = self.load_plans(owner_id).await?;

        let active_count = plans.iter().filter(|p| p.status == PlanStatus::Active).count();
        if active_count > 1 {
            let anomaly = PlanError::PersistenceAnomaly {
                owner_id: owner_id.to_owned(),
                detail: format!("{active_count} active plans, keeping most recent"),
            };
            warn!(owner_id = %owner_id, error = %anomaly, "repairing plan list");

            let winner_id = plans
                .iter()
                .filter(|p| p.status == PlanStatus::Active)
                .max_by_key(|p| p.updated_at)
                .map(|p| p.id.clone());
            if let Some(winner_id) = winner_id {
                for plan in plans
                    .iter_mut()
                    .filter(|p| p.status == PlanStatus::Active && p.id != winner_id)
                {
                    plan.status = PlanStatus::Archived;
                    plan.updated_at = Utc::now();
                }
                self.save_plans(owner_id, &plans).await?;
            }
        }

        Ok(plans.into_iter().find(|p| p.status == PlanStatus::Active))
    }

    /// All of the owner's plans, active and archived, newest first
    pub async fn get_all_plans(&self, owner_id: &str) -> PlanResult<Vec<Plan>> {
        let mut plans = self.load_plans(owner_id).await?;
        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(plans)
    }

    /// Look up one plan by id.
    ///
    /// Locally issued ids resolve against the owner's stored list. Remote
    /// ids fall back to the remote store when the local copy is missing; a
    /// successful remote fetch is backfilled into local storage so the next
    /// lookup is offline-capable.
    pub async fn get_plan_by_id(&self, owner_id: &str, plan_id: &str) -> PlanResult<Option<Plan>> {
        let plans = self.load_plans(owner_id).await?;
        if let Some(plan) = plans.iter().find(|p| p.id == plan_id) {
            return Ok(Some(plan.clone()));
        }

        if !PlanId::is_remote(plan_id) {
            return Ok(None);
        }

        match self.remote.fetch_plan(plan_id).await {
            Ok(Some(plan)) => {
                debug!(owner_id = %owner_id, plan_id = %plan_id, "backfilling remote plan locally");
                let mut plans = plans;
                plans.push(plan.clone());
                self.save_plans(owner_id, &plans).await?;
                Ok(Some(plan))
            }
            Ok(None) => Ok(None),
            Err(err) => {
                warn!(plan_id = %plan_id, error = %err, "remote plan fetch failed");
                Ok(None)
            }
        }
    }

    /// Make the given stored plan the owner's active plan.
    ///
    /// For remote-issued ids the remote mirror is updated first, best
    /// effort; the local switch then happens unconditionally so activation
    /// works offline.
    pub async fn set_active_plan(&self, owner_id: &str, plan_id: &str) -> PlanResult<()> {
        if PlanId::is_remote(plan_id) {
            if let Err(err) = self.remote.activate_plan(owner_id, plan_id).await {
                warn!(plan_id = %plan_id, error = %err, "remote activation failed, applying locally only");
            }
        }

        let mut plans = self.load_plans(owner_id).await?;
        if !plans.iter().any(|p| p.id == plan_id) {
            return Err(PlanError::storage(format!(
                "plan {plan_id} not found for owner {owner_id}"
            )));
        }

        let now = Utc::now();
        for plan in &mut plans {
            let target_status = if plan.id == plan_id {
                PlanStatus::Active
            } else if plan.status == PlanStatus::Active {
                PlanStatus::Archived
            } else {
                continue;
            };
            plan.status = target_status;
            plan.updated_at = now;
        }

        self.save_plans(owner_id, &plans).await
    }

    /// Delete a plan, routing on id provenance.
    ///
    /// Locally issued ids are removed from local storage only. Remote ids
    /// are deleted from the remote store (best effort) and any backfilled
    /// local copy is removed too. Ids matching neither format are rejected
    /// with [`PlanError::InvalidPlanId`].
    pub async fn delete_plan(&self, owner_id: &str, plan_id: &str) -> PlanResult<()> {
        if PlanId::is_remote(plan_id) {
            if let Err(err) = self.remote.delete_plan(plan_id).await {
                warn!(plan_id = %plan_id, error = %err, "remote deletion failed, removing local copy only");
            }
        } else if !PlanId::is_local(plan_id) {
            return Err(PlanError::InvalidPlanId(plan_id.to_owned()));
        }

        let mut plans = self.load_plans(owner_id).await?;
        let before = plans.len();
        plans.retain(|p| p.id != plan_id);
        if plans.len() != before {
            debug!(owner_id = %owner_id, plan_id = %plan_id, "deleted plan");
        }
        self.save_plans(owner_id, &plans).await
    }

    /// Remove every plan the owner has, local only
    pub async fn clear_all(&self, owner_id: &str) -> PlanResult<()> {
        self.local.remove(&Self::list_key(owner_id)).await
    }
}
