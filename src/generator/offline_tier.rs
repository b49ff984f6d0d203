// ABOUTME: Terminal generation tier: deterministic on-device plan synthesis
// ABOUTME: Level-ranged day counts, goal-driven splits, catalog-order exercise picks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

use async_trait::async_trait;
use tracing::debug;

use crate::catalog;
use crate::generator::{assemble_plan, GenerationStrategy};
use crate::models::{
    ExerciseCategory, Plan, PlanSource, PlannedExercise, PrimaryGoal, TrainingDay, TrainingLevel,
    UserProfile,
};

/// Training-day range each level can sustain
const fn level_day_range(level: TrainingLevel) -> (u8, u8) {
    match level {
        TrainingLevel::Beginner => (2, 3),
        TrainingLevel::Intermediate => (3, 5),
        TrainingLevel::Advanced => (4, 6),
    }
}

const fn level_default_days(level: TrainingLevel) -> u8 {
    match level {
        TrainingLevel::Beginner => 3,
        TrainingLevel::Intermediate => 4,
        TrainingLevel::Advanced => 5,
    }
}

/// Target training days: the stated frequency clamped into the level's
/// sustainable range, or the level default when no preference was given.
fn target_days(profile: &UserProfile) -> u8 {
    let (min, max) = level_day_range(profile.training_level);
    profile
        .workout_frequency
        .map_or(level_default_days(profile.training_level), |f| {
            f.days().clamp(min, max)
        })
}

/// Rep range, rest prescription, and working sets for a goal and level
const fn goal_defaults(goal: PrimaryGoal, level: TrainingLevel) -> (&'static str, &'static str, u32) {
    let sets = match level {
        TrainingLevel::Beginner | TrainingLevel::Intermediate => 3,
        TrainingLevel::Advanced => 4,
    };
    match goal {
        PrimaryGoal::FatLoss => ("12-15", "45s", sets),
        PrimaryGoal::Hypertrophy | PrimaryGoal::MuscleGain => ("8-12", "90s", sets),
        PrimaryGoal::AthleticPerformance => ("6-10", "120s", sets),
        PrimaryGoal::GeneralFitness => ("10-12", "60s", sets),
    }
}

const fn exercises_per_day(level: TrainingLevel) -> usize {
    match level {
        TrainingLevel::Beginner => 4,
        TrainingLevel::Intermediate => 5,
        TrainingLevel::Advanced => 6,
    }
}

/// Split layout for a weekly day count: focus label plus the movement
/// categories that day draws from
fn split_for(days: u8) -> Vec<(&'static str, &'static [ExerciseCategory])> {
    const FULL: &[ExerciseCategory] = &[
        ExerciseCategory::Push,
        ExerciseCategory::Pull,
        ExerciseCategory::Legs,
        ExerciseCategory::Core,
    ];
    const UPPER: &[ExerciseCategory] = &[ExerciseCategory::Push, ExerciseCategory::Pull];
    const LOWER: &[ExerciseCategory] = &[ExerciseCategory::Legs, ExerciseCategory::Core];
    const PUSH: &[ExerciseCategory] = &[ExerciseCategory::Push];
    const PULL: &[ExerciseCategory] = &[ExerciseCategory::Pull, ExerciseCategory::Core];
    const LEGS: &[ExerciseCategory] = &[ExerciseCategory::Legs];

    match days {
        0 | 1 => vec![("Full Body", FULL)],
        2 => vec![("Upper Body", UPPER), ("Lower Body", LOWER)],
        3 => vec![("Push", PUSH), ("Pull", PULL), ("Legs", LEGS)],
        4 => vec![
            ("Upper Body", UPPER),
            ("Lower Body", LOWER),
            ("Upper Body", UPPER),
            ("Lower Body", LOWER),
        ],
        5 => vec![
            ("Push", PUSH),
            ("Pull", PULL),
            ("Legs", LEGS),
            ("Upper Body", UPPER),
            ("Lower Body", LOWER),
        ],
        _ => vec![
            ("Push", PUSH),
            ("Pull", PULL),
            ("Legs", LEGS),
            ("Push", PUSH),
            ("Pull", PULL),
            ("Legs", LEGS),
        ],
    }
}

/// What a weekly slot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Training,
    ActiveRecovery,
    Rest,
}

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Goal-specific distribution of the seven weekly slots.
///
/// Muscle-building and strength goals space sessions out with full rest
/// between them wherever the count allows. Fat loss packs sessions
/// consecutively and turns the gaps into active recovery so most days keep
/// the user moving. General fitness alternates with plain rest.
fn week_pattern(goal: PrimaryGoal, days: u8) -> [Slot; 7] {
    let days = usize::from(days.min(6));
    let mut pattern = [Slot::Rest; 7];

    match goal {
        PrimaryGoal::FatLoss => {
            for slot in &mut pattern[..days] {
                *slot = Slot::Training;
            }
            // Sunday stays a full rest day
            for slot in &mut pattern[days..6] {
                *slot = Slot::ActiveRecovery;
            }
        }
        PrimaryGoal::Hypertrophy
        | PrimaryGoal::MuscleGain
        | PrimaryGoal::AthleticPerformance
        | PrimaryGoal::GeneralFitness => {
            let mut pending = days;
            for slot in 0..pattern.len() {
                let slots_left = pattern.len() - slot;
                if pending > 0 && (pending == slots_left || slot % 2 == 0) {
                    pattern[slot] = Slot::Training;
                    pending -= 1;
                }
            }
        }
    }
    pattern
}

fn active_recovery(label: &str) -> TrainingDay {
    TrainingDay {
        label: label.to_owned(),
        focus: "Active Recovery".to_owned(),
        exercises: Vec::new(),
        notes: Some("20-30 minutes of easy cardio, stretching, or a walk".to_owned()),
        estimated_calories_burned: None,
    }
}

fn split_name(days: u8) -> &'static str {
    match days {
        0 | 1 => "Full Body",
        2 => "Upper Lower",
        3 => "Push Pull Legs",
        4 => "Upper Lower Split",
        5 => "Hybrid Split",
        _ => "Push Pull Legs Split",
    }
}

/// Build a complete offline plan for the profile. Pure and deterministic:
/// the same profile always produces the same schedule.
#[must_use]
pub fn build_plan(profile: &UserProfile) -> Plan {
    let days = target_days(profile);
    let (reps, rest, sets) = goal_defaults(profile.primary_goal, profile.training_level);
    let per_day = exercises_per_day(profile.training_level);
    let pool = catalog::exercises_for(profile.primary_goal, profile.training_level);

    let mut training_days = Vec::with_capacity(days as usize);
    for (day_index, (focus, categories)) in split_for(days).into_iter().enumerate() {
        let candidates: Vec<_> = pool
            .iter()
            .filter(|e| categories.contains(&e.category))
            .collect();

        // Rotate the starting point per day so repeated focuses get variety
        // while staying reproducible
        let offset = if candidates.is_empty() {
            0
        } else {
            (day_index * per_day) % candidates.len()
        };
        let mut exercises: Vec<PlannedExercise> = candidates
            .iter()
            .cycle()
            .skip(offset)
            .take(per_day.min(candidates.len()))
            .map(|e| PlannedExercise {
                name: e.name.to_owned(),
                sets,
                reps: reps.to_owned(),
                rest_between_sets: rest.to_owned(),
            })
            .collect();

        if profile.primary_goal == PrimaryGoal::FatLoss {
            if let Some(cardio) = pool
                .iter()
                .find(|e| e.category == ExerciseCategory::Cardio)
            {
                if !exercises.iter().any(|e| e.name == cardio.name) {
                    exercises.push(PlannedExercise {
                        name: cardio.name.to_owned(),
                        sets: 1,
                        reps: "10 min".to_owned(),
                        rest_between_sets: "0s".to_owned(),
                    });
                }
            }
        }

        training_days.push(TrainingDay {
            label: focus.to_owned(),
            focus: focus.to_owned(),
            exercises,
            notes: None,
            estimated_calories_burned: None,
        });
    }

    let mut sessions = training_days.into_iter();
    let mut schedule = Vec::with_capacity(WEEKDAYS.len());
    for (slot, weekday) in week_pattern(profile.primary_goal, days).iter().zip(WEEKDAYS) {
        match slot {
            Slot::Training => {
                if let Some(mut day) = sessions.next() {
                    day.label = weekday.to_owned();
                    schedule.push(day);
                } else {
                    schedule.push(TrainingDay::rest(weekday));
                }
            }
            Slot::ActiveRecovery => schedule.push(active_recovery(weekday)),
            Slot::Rest => schedule.push(TrainingDay::rest(weekday)),
        }
    }

    debug!(
        training_days = days,
        split = split_name(days),
        goal = %profile.primary_goal,
        "synthesized offline plan"
    );
    assemble_plan(
        profile,
        format!("{} Plan for {}", split_name(days), profile.full_name),
        schedule,
        PlanSource::OfflineFallback,
    )
}

/// Last-resort tier, always produces a plan
pub struct OfflineTier;

#[async_trait]
impl GenerationStrategy for OfflineTier {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn attempt(&self, profile: &UserProfile) -> Option<Plan> {
        Some(build_plan(profile))
    }
}
