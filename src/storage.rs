// ABOUTME: Async storage seams: string key-value store and remote plan backend
// ABOUTME: Ships a concurrent in-memory store and a null remote backend for offline use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

//! # Storage Abstractions
//!
//! Persistence is split across two seams. [`KeyValueStore`] is the local
//! device store the engine must always be able to reach; the plan store and
//! usage tracker serialize whole JSON documents into it under well-known
//! keys. [`RemotePlanStore`] is the best-effort cloud mirror; every method on
//! it may fail without affecting local correctness.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::errors::PlanResult;
use crate::models::Plan;

/// Device-local string key-value storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, if any
    async fn get(&self, key: &str) -> PlanResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: String) -> PlanResult<()>;

    /// Remove `key` and its value; removing a missing key is not an error
    async fn remove(&self, key: &str) -> PlanResult<()>;
}

/// Thread-safe in-memory [`KeyValueStore`], the default backend and the
/// test double
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: DashMap<String, String>,
}

impl MemoryKeyValueStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> PlanResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: String) -> PlanResult<()> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> PlanResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Best-effort remote mirror for plans.
///
/// The plan store treats every failure from this trait as tolerable: it logs
/// and carries on with local state. Implementations should not retry
/// internally for longer than a request timeout.
#[async_trait]
pub trait RemotePlanStore: Send + Sync {
    /// Fetch a plan by its remote identifier
    async fn fetch_plan(&self, plan_id: &str) -> PlanResult<Option<Plan>>;

    /// Mark the given plan active for its owner
    async fn activate_plan(&self, owner_id: &str, plan_id: &str) -> PlanResult<()>;

    /// Delete a plan by its remote identifier
    async fn delete_plan(&self, plan_id: &str) -> PlanResult<()>;
}

/// A [`RemotePlanStore`] for fully offline deployments: fetches find
/// nothing, mutations succeed as no-ops.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRemoteStore;

#[async_trait]
impl RemotePlanStore for NullRemoteStore {
    async fn fetch_plan(&self, _plan_id: &str) -> PlanResult<Option<Plan>> {
        Ok(None)
    }

    async fn activate_plan(&self, _owner_id: &str, _plan_id: &str) -> PlanResult<()> {
        Ok(())
    }

    async fn delete_plan(&self, _plan_id: &str) -> PlanResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_round_trips_values() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);

        store.set("k", "v1".into()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v1"));

        store.set("k", "v2".into()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v2"));

        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn removing_missing_key_is_ok() {
        let store = MemoryKeyValueStore::new();
        assert!(store.remove("absent").await.is_ok());
    }

    #[tokio::test]
    async fn null_remote_store_finds_nothing() {
        let remote = NullRemoteStore;
        assert!(remote.fetch_plan("any").await.unwrap().is_none());
        assert!(remote.activate_plan("u", "any").await.is_ok());
        assert!(remote.delete_plan("any").await.is_ok());
    }
}
