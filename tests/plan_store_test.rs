// ABOUTME: Integration tests for single-active plan persistence and remote mirroring
// ABOUTME: Covers anomaly self-healing, id-routed deletion, and outage tolerance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan
#![allow(missing_docs)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use fitplan_engine::errors::{PlanError, PlanResult};
use fitplan_engine::models::{
    Plan, PlanId, PlanSource, PlanStatus, PlannedExercise, TrainingDay, TrainingLevel,
};
use fitplan_engine::plan_store::PlanStore;
use fitplan_engine::storage::{KeyValueStore, MemoryKeyValueStore, NullRemoteStore, RemotePlanStore};

const OWNER: &str = "user-1";

fn sample_plan(id: String) -> Plan {
    Plan {
        id,
        owner_id: OWNER.into(),
        name: "Test Plan".into(),
        training_level: TrainingLevel::Intermediate,
        goal_fat_loss: 3,
        goal_muscle_gain: 3,
        mesocycle_length_weeks: 8,
        schedule: vec![TrainingDay {
            label: "Monday".into(),
            focus: "Chest".into(),
            exercises: vec![PlannedExercise {
                name: "Bench Press".into(),
                sets: 4,
                reps: "8-10".into(),
                rest_between_sets: "90s".into(),
            }],
            notes: None,
            estimated_calories_burned: None,
        }],
        status: PlanStatus::Active,
        source: PlanSource::OfflineFallback,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn local_plan() -> Plan {
    sample_plan(PlanId::new_local(PlanSource::OfflineFallback))
}

fn memory_store() -> (PlanStore, Arc<MemoryKeyValueStore>) {
    let kv = Arc::new(MemoryKeyValueStore::new());
    let store = PlanStore::new(kv.clone(), Arc::new(NullRemoteStore));
    (store, kv)
}

#[tokio::test]
async fn adding_a_plan_archives_the_previous_active() {
    let (store, _) = memory_store();

    let first = local_plan();
    let first_id = first.id.clone();
    store.add_plan(first).await.unwrap();

    let second = local_plan();
    let second_id = second.id.clone();
    store.add_plan(second).await.unwrap();

    let active = store.get_active_plan(OWNER).await.unwrap().unwrap();
    assert_eq!(active.id, second_id);

    let all = store.get_all_plans(OWNER).await.unwrap();
    assert_eq!(all.len(), 2);
    let first_stored = all.iter().find(|p| p.id == first_id).unwrap();
    assert_eq!(first_stored.status, PlanStatus::Archived);
}

#[tokio::test]
async fn non_active_insert_keeps_the_current_active() {
    let (store, _) = memory_store();

    let active = local_plan();
    let active_id = active.id.clone();
    store.add_plan(active).await.unwrap();

    // A backfilled archived plan must land without displacing anything
    let mut backfill = local_plan();
    backfill.status = PlanStatus::Archived;
    let backfill_id = backfill.id.clone();
    store.add_plan(backfill).await.unwrap();

    let current = store.get_active_plan(OWNER).await.unwrap().unwrap();
    assert_eq!(current.id, active_id);

    let all = store.get_all_plans(OWNER).await.unwrap();
    assert_eq!(all.len(), 2);
    let stored = all.iter().find(|p| p.id == backfill_id).unwrap();
    assert_eq!(stored.status, PlanStatus::Archived);
}

#[tokio::test]
async fn duplicate_actives_are_healed_by_recency() {
    let (store, kv) = memory_store();

    // Write a corrupted list with two active plans directly
    let mut stale = local_plan();
    stale.updated_at = Utc::now() - Duration::hours(2);
    let fresh = local_plan();
    let fresh_id = fresh.id.clone();
    let raw = serde_json::to_string(&vec![stale, fresh]).unwrap();
    kv.set(&format!("workout_plans:{OWNER}"), raw).await.unwrap();

    let active = store.get_active_plan(OWNER).await.unwrap().unwrap();
    assert_eq!(active.id, fresh_id);

    // The repair must be persisted, not just computed
    let all = store.get_all_plans(OWNER).await.unwrap();
    let actives = all.iter().filter(|p| p.status == PlanStatus::Active).count();
    assert_eq!(actives, 1);
}

#[tokio::test]
async fn set_active_switches_exactly_one_plan() {
    let (store, _) = memory_store();

    let first = local_plan();
    let first_id = first.id.clone();
    store.add_plan(first).await.unwrap();
    store.add_plan(local_plan()).await.unwrap();

    store.set_active_plan(OWNER, &first_id).await.unwrap();

    let all = store.get_all_plans(OWNER).await.unwrap();
    for plan in &all {
        let expected = if plan.id == first_id {
            PlanStatus::Active
        } else {
            PlanStatus::Archived
        };
        assert_eq!(plan.status, expected);
    }
}

#[tokio::test]
async fn set_active_rejects_unknown_plan() {
    let (store, _) = memory_store();
    store.add_plan(local_plan()).await.unwrap();

    let missing = PlanId::new_local(PlanSource::AiGenerated);
    assert!(store.set_active_plan(OWNER, &missing).await.is_err());
}

#[tokio::test]
async fn delete_rejects_unclassifiable_ids() {
    let (store, _) = memory_store();
    store.add_plan(local_plan()).await.unwrap();

    let result = store.delete_plan(OWNER, "plan-42").await;
    assert!(matches!(result, Err(PlanError::InvalidPlanId(_))));

    // Nothing was removed
    assert_eq!(store.get_all_plans(OWNER).await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_removes_local_plans() {
    let (store, _) = memory_store();
    let plan = local_plan();
    let id = plan.id.clone();
    store.add_plan(plan).await.unwrap();

    store.delete_plan(OWNER, &id).await.unwrap();
    assert!(store.get_all_plans(OWNER).await.unwrap().is_empty());
}

#[tokio::test]
async fn clear_all_empties_the_owner() {
    let (store, _) = memory_store();
    store.add_plan(local_plan()).await.unwrap();
    store.add_plan(local_plan()).await.unwrap();

    store.clear_all(OWNER).await.unwrap();
    assert!(store.get_all_plans(OWNER).await.unwrap().is_empty());
    assert!(store.get_active_plan(OWNER).await.unwrap().is_none());
}

/// Remote double that can serve one plan and record deletions
struct FakeRemote {
    plan: Plan,
    deleted: AtomicBool,
}

#[async_trait]
impl RemotePlanStore for FakeRemote {
    async fn fetch_plan(&self, plan_id: &str) -> PlanResult<Option<Plan>> {
        if plan_id == self.plan.id {
            Ok(Some(self.plan.clone()))
        } else {
            Ok(None)
        }
    }

    async fn activate_plan(&self, _owner_id: &str, _plan_id: &str) -> PlanResult<()> {
        Ok(())
    }

    async fn delete_plan(&self, plan_id: &str) -> PlanResult<()> {
        if plan_id == self.plan.id {
            self.deleted.store(true, Ordering::SeqCst);
        }
        Ok(())
    }
}

/// Remote double where every call fails
struct DownRemote;

#[async_trait]
impl RemotePlanStore for DownRemote {
    async fn fetch_plan(&self, _plan_id: &str) -> PlanResult<Option<Plan>> {
        Err(PlanError::storage("remote unreachable"))
    }

    async fn activate_plan(&self, _owner_id: &str, _plan_id: &str) -> PlanResult<()> {
        Err(PlanError::storage("remote unreachable"))
    }

    async fn delete_plan(&self, _plan_id: &str) -> PlanResult<()> {
        Err(PlanError::storage("remote unreachable"))
    }
}

#[tokio::test]
async fn remote_plans_are_backfilled_on_fetch() {
    let remote_id = Uuid::new_v4().to_string();
    let remote = Arc::new(FakeRemote {
        plan: sample_plan(remote_id.clone()),
        deleted: AtomicBool::new(false),
    });
    let kv = Arc::new(MemoryKeyValueStore::new());
    let store = PlanStore::new(kv, remote);

    let fetched = store.get_plan_by_id(OWNER, &remote_id).await.unwrap();
    assert!(fetched.is_some());

    // Second fetch must be answerable from local storage alone
    let all = store.get_all_plans(OWNER).await.unwrap();
    assert!(all.iter().any(|p| p.id == remote_id));
}

#[tokio::test]
async fn remote_delete_also_removes_backfilled_copy() {
    let remote_id = Uuid::new_v4().to_string();
    let remote = Arc::new(FakeRemote {
        plan: sample_plan(remote_id.clone()),
        deleted: AtomicBool::new(false),
    });
    let kv = Arc::new(MemoryKeyValueStore::new());
    let store = PlanStore::new(kv, remote.clone());

    store.get_plan_by_id(OWNER, &remote_id).await.unwrap();
    store.delete_plan(OWNER, &remote_id).await.unwrap();

    assert!(remote.deleted.load(Ordering::SeqCst));
    assert!(store.get_all_plans(OWNER).await.unwrap().is_empty());
}

#[tokio::test]
async fn remote_outage_never_blocks_local_operations() {
    let kv = Arc::new(MemoryKeyValueStore::new());
    let store = PlanStore::new(kv, Arc::new(DownRemote));

    let plan = local_plan();
    let id = plan.id.clone();
    store.add_plan(plan).await.unwrap();

    // Activation of a remote-format id mirrors best effort; here we use a
    // stored local plan, the local switch must succeed regardless
    store.set_active_plan(OWNER, &id).await.unwrap();

    // Fetch of an unknown remote id degrades to None instead of erroring
    let missing = Uuid::new_v4().to_string();
    assert!(store.get_plan_by_id(OWNER, &missing).await.unwrap().is_none());

    // Deleting a remote-format id still clears any local copy
    store.delete_plan(OWNER, &missing).await.unwrap();
}
