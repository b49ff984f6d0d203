// ABOUTME: Rolling exercise usage history driving variety-aware selection
// ABOUTME: 30-day retention, 7-day repeat exclusion, 14-day variety scoring window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

//! # Usage Tracker
//!
//! Records which exercises a user's committed plans prescribe, then feeds
//! that history back into selection so consecutive plans do not repeat the
//! same movements. History is device-local and bounded: records older than
//! 30 days are pruned on every write.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::debug;

use crate::errors::PlanResult;
use crate::models::{UsageRecord, WorkoutHistoryEntry};
use crate::storage::KeyValueStore;

/// Storage key for per-exercise usage records
const USAGE_KEY: &str = "exercise_usage_history";
/// Storage key for the rolling committed-workout log
const HISTORY_KEY: &str = "workout_history";

/// History retention in days
const RETENTION_DAYS: i64 = 30;
/// Exercises used within this window are excluded from selection
const EXCLUSION_DAYS: i64 = 7;
/// Variety scoring looks at this many trailing days
const VARIETY_WINDOW_DAYS: i64 = 14;

/// Tracks exercise usage over the key-value store seam
pub struct UsageTracker {
    store: Arc<dyn KeyValueStore>,
}

impl UsageTracker {
    /// Build a tracker over the given store
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn load_usage(&self) -> PlanResult<HashMap<String, UsageRecord>> {
        match self.store.get(USAGE_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(HashMap::new()),
        }
    }

    async fn save_usage(&self, usage: &HashMap<String, UsageRecord>) -> PlanResult<()> {
        self.store.set(USAGE_KEY, serde_json::to_string(usage)?).await
    }

    async fn load_history(&self) -> PlanResult<Vec<WorkoutHistoryEntry>> {
        match self.store.get(HISTORY_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save_history(&self, history: &[WorkoutHistoryEntry]) -> PlanResult<()> {
        self.store.set(HISTORY_KEY, serde_json::to_string(history)?).await
    }

    /// Commit one workout's exercises: upsert per-exercise records, append a
    /// history entry, and prune everything older than the retention window.
    pub async fn record_usage(&self, exercises: &[(String, Vec<String>)]) -> PlanResult<()> {
        if exercises.is_empty() {
            return Ok(());
        }
        let now = Utc::now();
        let cutoff = now - Duration::days(RETENTION_DAYS);

        let mut usage = self.load_usage().await?;
        for (name, muscle_groups) in exercises {
            let key = name.to_lowercase();
            usage
                .entry(key)
                .and_modify(|record| {
                    record.last_used_at = now;
                    record.usage_count += 1;
                })
                .or_insert_with(|| UsageRecord {
                    exercise_name: name.clone(),
                    last_used_at: now,
                    usage_count: 1,
                    muscle_groups: muscle_groups.clone(),
                });
        }
        usage.retain(|_, record| record.last_used_at >= cutoff);
        self.save_usage(&usage).await?;

        let mut history = self.load_history().await?;
        let mut entry_groups: Vec<String> = Vec::new();
        for (_, muscle_groups) in exercises {
            for mg in muscle_groups {
                if !entry_groups.iter().any(|g| g.eq_ignore_ascii_case(mg)) {
                    entry_groups.push(mg.clone());
                }
            }
        }
        history.push(WorkoutHistoryEntry {
            workout_date: now,
            exercise_names: exercises.iter().map(|(n, _)| n.clone()).collect(),
            muscle_groups: entry_groups,
        });
        history.retain(|entry| entry.workout_date >= cutoff);
        self.save_history(&history).await?;

        debug!(count = exercises.len(), "recorded exercise usage");
        Ok(())
    }

    /// Pick up to `count` candidates targeting the given muscle groups,
    /// preferring least-used and least-recent. Exercises used within the
    /// last 7 days are excluded; fewer than `count` survivors is not an
    /// error, whatever remains is returned.
    pub async fn select_underused(
        &self,
        target_muscle_groups: &[String],
        candidates: &[String],
        count: usize,
    ) -> PlanResult<Vec<String>> {
        let usage = self.load_usage().await?;
        let exclusion_cutoff = Utc::now() - Duration::days(EXCLUSION_DAYS);

        let matches_target = |name: &str| -> bool {
            if target_muscle_groups.is_empty() {
                return true;
            }
            let groups = usage.get(&name.to_lowercase()).map_or_else(
                || crate::catalog::infer_muscle_groups(name),
                |r| r.muscle_groups.clone(),
            );
            // A candidate with no resolvable groups cannot match an
            // explicit target
            if groups.is_empty() {
                return false;
            }
            target_muscle_groups.iter().any(|target| {
                let target = target.to_lowercase();
                groups.iter().any(|g| {
                    let g = g.to_lowercase();
                    g.contains(&target) || target.contains(&g)
                })
            })
        };

        let mut pool: Vec<&String> = candidates
            .iter()
            .filter(|name| matches_target(name))
            .filter(|name| {
                usage
                    .get(&name.to_lowercase())
                    .is_none_or(|r| r.last_used_at < exclusion_cutoff)
            })
            .collect();

        pool.sort_by_key(|name| {
            usage
                .get(&name.to_lowercase())
                .map_or((0, None), |r| (r.usage_count, Some(r.last_used_at)))
        });
        Ok(pool.into_iter().take(count).cloned().collect())
    }

    /// Variety score for one muscle group: how many distinct exercises hit
    /// it in the last 14 days, bucketed into a 2..=10 score.
    pub async fn variety_score(&self, muscle_group: &str) -> PlanResult<u8> {
        let history = self.load_history().await?;
        let cutoff = Utc::now() - Duration::days(VARIETY_WINDOW_DAYS);
        let target = muscle_group.to_lowercase();

        let mut distinct: Vec<String> = Vec::new();
        for entry in history.iter().filter(|e| e.workout_date >= cutoff) {
            let touches_group = entry.muscle_groups.iter().any(|g| {
                let g = g.to_lowercase();
                g.contains(&target) || target.contains(&g)
            });
            if !touches_group {
                continue;
            }
            for name in &entry.exercise_names {
                let key = name.to_lowercase();
                if !distinct.contains(&key) {
                    distinct.push(key);
                }
            }
        }

        let score = match distinct.len() {
            n if n >= 8 => 10,
            n if n >= 6 => 8,
            n if n >= 4 => 6,
            n if n >= 2 => 4,
            _ => 2,
        };
        Ok(score)
    }

    /// Drop everything older than the retention window. Pruning also happens
    /// on every write; this entry point exists for account maintenance flows.
    pub async fn cleanup_old_history(&self) -> PlanResult<()> {
        let cutoff = Utc::now() - Duration::days(RETENTION_DAYS);

        let mut usage = self.load_usage().await?;
        usage.retain(|_, record| record.last_used_at >= cutoff);
        self.save_usage(&usage).await?;

        let mut history = self.load_history().await?;
        history.retain(|entry| entry.workout_date >= cutoff);
        self.save_history(&history).await
    }
}
