// ABOUTME: Pure schedule adaptation: fit a template week to a target frequency
// ABOUTME: Priority-ranked day selection plus alternating Monday-Sunday relayout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

//! # Frequency Adapter
//!
//! Pure functions, no I/O. [`adapt`] shrinks a schedule to a target number
//! of training days by keeping the most important muscle-group days;
//! [`rebuild_week`] lays the survivors back over a full Monday to Sunday
//! week with rest days between sessions where the count allows.

use tracing::warn;

use crate::models::TrainingDay;

/// Focus keywords in descending importance. Lower index wins; a focus
/// matching none ranks last.
const PRIORITY_ORDER: &[&str] = &[
    "chest",
    "back",
    "legs",
    "shoulders",
    "arms",
    "chest and back",
    "upper body",
    "lower body",
    "full body",
];

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn focus_priority(focus: &str) -> usize {
    let focus = focus.to_lowercase();
    PRIORITY_ORDER
        .iter()
        .position(|keyword| focus.contains(keyword))
        .unwrap_or(999)
}

/// Fit `schedule` to `target_days` training days.
///
/// Matching counts return the schedule unchanged. A surplus is resolved by
/// ranking training days on [`PRIORITY_ORDER`] (stable, so ties keep their
/// original order), keeping the top `target_days`, and rebuilding the week.
/// A deficit is left alone; inventing sessions is not this layer's job.
#[must_use]
pub fn adapt(schedule: Vec<TrainingDay>, target_days: usize) -> Vec<TrainingDay> {
    let training_count = schedule.iter().filter(|d| !d.is_rest_day()).count();

    if training_count == target_days {
        return schedule;
    }

    if training_count < target_days {
        warn!(
            have = training_count,
            want = target_days,
            "schedule has fewer training days than requested, keeping as is"
        );
        return schedule;
    }

    let mut training_days: Vec<TrainingDay> =
        schedule.into_iter().filter(|d| !d.is_rest_day()).collect();
    training_days.sort_by_key(|d| focus_priority(&d.focus));
    training_days.truncate(target_days);

    rebuild_week(training_days)
}

/// Lay the given training days over Monday to Sunday, alternating training
/// and rest slots. When more days remain than alternation can place, the
/// tail of the week fills in consecutively so nothing is dropped.
#[must_use]
pub fn rebuild_week(training_days: Vec<TrainingDay>) -> Vec<TrainingDay> {
    let mut remaining = training_days.into_iter();
    let mut pending = remaining.len();
    let mut week = Vec::with_capacity(WEEKDAYS.len());

    for (slot, weekday) in WEEKDAYS.iter().enumerate() {
        let slots_left = WEEKDAYS.len() - slot;
        let must_place = pending == slots_left;
        let alternating_slot = slot % 2 == 0 && pending > 0;

        if must_place || alternating_slot {
            if let Some(mut day) = remaining.next() {
                day.label = (*weekday).to_owned();
                week.push(day);
                pending -= 1;
                continue;
            }
        }
        week.push(TrainingDay::rest(*weekday));
    }

    week
}
