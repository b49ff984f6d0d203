// ABOUTME: Maps raw generation responses onto the canonical schedule shape
// ABOUTME: Tolerates every field variant remote generators have shipped so far
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

//! # Response Normalization
//!
//! Remote generators have produced several schedule dialects over time:
//! snake_case and camelCase keys, numeric day indexes, legacy
//! warm-up/main/cool-down sections, rest given in seconds or prose. This
//! module folds all of them into `Vec<TrainingDay>` so nothing downstream
//! ever sees a raw response. Canonical input passes through unchanged,
//! which makes the mapping idempotent.

use serde_json::Value;

use crate::errors::{PlanError, PlanResult};
use crate::models::{PlannedExercise, TrainingDay};

/// Extract and normalize the weekly schedule from a raw generation response.
///
/// # Errors
///
/// Returns [`PlanError::MalformedResponse`] when no schedule array can be
/// located or it is empty.
pub fn normalize_schedule(raw: &Value) -> PlanResult<Vec<TrainingDay>> {
    let days = schedule_array(raw).ok_or_else(|| PlanError::MalformedResponse {
        endpoint: String::new(),
        reason: "response carries no weekly schedule".into(),
    })?;

    if days.is_empty() {
        return Err(PlanError::MalformedResponse {
            endpoint: String::new(),
            reason: "weekly schedule is empty".into(),
        });
    }

    Ok(days
        .iter()
        .enumerate()
        .map(|(index, day)| normalize_day(day, index))
        .collect())
}

fn schedule_array(raw: &Value) -> Option<&Vec<Value>> {
    if let Some(days) = raw.as_array() {
        return Some(days);
    }
    for key in ["weekly_schedule", "weeklySchedule", "schedule"] {
        if let Some(days) = raw.get(key).and_then(Value::as_array) {
            return Some(days);
        }
    }
    // Some responses wrap the plan one level down
    raw.get("plan").and_then(schedule_array)
}

fn normalize_day(day: &Value, index: usize) -> TrainingDay {
    let label = day_label(day, index);
    // A present-but-empty focus is canonical rest-day output and must
    // survive re-normalization; only an absent focus falls back to the label
    let focus = ["focus", "muscle_groups", "target"]
        .iter()
        .find_map(|key| day.get(key).and_then(Value::as_str))
        .map_or_else(|| label.clone(), |s| s.trim().to_owned());

    // A rest focus overrides whatever exercises the generator attached
    if focus.to_lowercase().contains("rest") {
        let mut rest = TrainingDay::rest(label);
        rest.notes = string_field(day, &["notes", "note"]);
        return rest;
    }

    let exercises = exercise_array(day)
        .into_iter()
        .map(normalize_exercise)
        .collect();

    TrainingDay {
        label,
        focus,
        exercises,
        notes: string_field(day, &["notes", "note"]),
        estimated_calories_burned: day
            .get("estimated_calories_burned")
            .or_else(|| day.get("estimatedCaloriesBurned"))
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok()),
    }
}

fn day_label(day: &Value, index: usize) -> String {
    for key in ["day", "day_name", "dayName", "label"] {
        match day.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return s.trim().to_owned(),
            Some(Value::Number(n)) => return format!("Day {n}"),
            _ => {}
        }
    }
    format!("Day {}", index + 1)
}

fn exercise_array(day: &Value) -> Vec<&Value> {
    if let Some(list) = day.get("exercises").and_then(Value::as_array) {
        return list.iter().collect();
    }
    // Legacy sectioned format
    let mut combined = Vec::new();
    for section in ["warm_up", "warmUp", "main_workout", "mainWorkout", "cool_down", "coolDown"] {
        if let Some(list) = day.get(section).and_then(Value::as_array) {
            combined.extend(list.iter());
        }
    }
    combined
}

fn normalize_exercise(exercise: &Value) -> PlannedExercise {
    let name = string_field(exercise, &["name", "exercise"])
        .unwrap_or_else(|| "Unknown Exercise".to_owned());

    let sets = match exercise.get("sets") {
        Some(Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()).unwrap_or(3),
        Some(Value::String(s)) => s.trim().parse::<u32>().unwrap_or(3),
        _ => 3,
    }
    .max(1);

    let reps = match exercise.get("reps").or_else(|| exercise.get("duration")) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_owned(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "8-12".to_owned(),
    };

    PlannedExercise {
        name,
        sets,
        reps,
        rest_between_sets: rest_field(exercise),
    }
}

fn rest_field(exercise: &Value) -> String {
    for key in [
        "rest_between_sets",
        "restBetweenSets",
        "rest",
        "rest_seconds",
        "restSeconds",
        "rest_period",
        "restPeriod",
    ] {
        match exercise.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return s.trim().to_owned(),
            Some(Value::Number(n)) => return format!("{n}s"),
            _ => {}
        }
    }
    "90s".to_owned()
}

fn string_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        value
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    })
}
