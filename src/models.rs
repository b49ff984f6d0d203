// ABOUTME: Canonical domain models for training plans, profiles, and usage history
// ABOUTME: One internal schema regardless of which generation tier produced the plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

//! # Data Models
//!
//! These models are the single internal representation of a training plan.
//! Remote responses are mapped into them by the normalization layer
//! ([`crate::normalize`]) before any other component sees them, so every
//! consumer can rely on the same shape whether a plan came from a curated
//! template, a remote AI endpoint, or the offline generator.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{PlanError, PlanResult};

/// High-level movement category for an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseCategory {
    /// Pressing movements (chest, shoulders, triceps)
    Push,
    /// Pulling movements (back, biceps)
    Pull,
    /// Lower-body movements
    Legs,
    /// Trunk and stability work
    Core,
    /// Conditioning work
    Cardio,
}

/// Difficulty rating for an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// Suitable for new trainees
    Beginner,
    /// Requires some training history
    Intermediate,
    /// Requires significant training history
    Advanced,
}

/// Equipment required to perform an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Equipment {
    /// No equipment
    Bodyweight,
    /// Dumbbells
    Dumbbell,
    /// Barbell and plates
    Barbell,
    /// Kettlebell
    Kettlebell,
    /// Cable stack
    CableMachine,
    /// Fixed-path machine
    Machine,
    /// Resistance band
    ResistanceBand,
    /// Jump rope
    JumpRope,
    /// Anything else (ab wheel, sled, ...)
    Other,
}

/// Immutable exercise metadata from the static catalog
#[derive(Debug, Clone)]
pub struct ExerciseDescriptor {
    /// Display name; also the unique case-insensitive catalog key
    pub name: &'static str,
    /// Movement category
    pub category: ExerciseCategory,
    /// Difficulty rating
    pub difficulty: Difficulty,
    /// Primary muscle groups, most significant first
    pub muscle_groups: &'static [&'static str],
    /// Required equipment, if any
    pub equipment: Option<Equipment>,
}

/// A single prescribed exercise inside a training day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedExercise {
    /// Exercise name; resolves to a catalog entry or is treated as free text
    pub name: String,
    /// Number of working sets, always at least 1
    pub sets: u32,
    /// Free-form rep prescription, e.g. "8-10" or "30 sec"
    pub reps: String,
    /// Free-form rest prescription between sets, e.g. "90s"
    pub rest_between_sets: String,
}

/// One day of a weekly schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingDay {
    /// Day label, e.g. "Monday" or "Day 3"
    pub label: String,
    /// Muscle-group summary; empty string denotes a rest day
    pub focus: String,
    /// Prescribed exercises; empty for rest days
    pub exercises: Vec<PlannedExercise>,
    /// Optional coaching notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Optional estimated calories burned for the session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_calories_burned: Option<u32>,
}

impl TrainingDay {
    /// A rest day for the given label
    #[must_use]
    pub fn rest(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            focus: String::new(),
            exercises: Vec::new(),
            notes: None,
            estimated_calories_burned: None,
        }
    }

    /// A day with no exercises is a rest day regardless of its focus text
    #[must_use]
    pub fn is_rest_day(&self) -> bool {
        self.exercises.is_empty()
    }
}

/// Lifecycle status of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// The single plan currently in effect for its owner
    Active,
    /// Superseded by a newer plan
    Archived,
    /// Finished by the user
    Completed,
}

/// Which generation tier produced a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    /// Produced by a remote generation endpoint
    AiGenerated,
    /// Converted from a curated static template
    StaticTemplate,
    /// Produced by the offline deterministic generator
    OfflineFallback,
}

impl PlanSource {
    /// Provenance prefix embedded in locally issued plan ids
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::AiGenerated => "ai",
            Self::StaticTemplate => "tpl",
            Self::OfflineFallback => "off",
        }
    }
}

/// Helpers for classifying plan identifiers.
///
/// Locally issued ids carry a provenance prefix (`ai-`, `tpl-`, `off-`)
/// followed by a UUID; remote-issued ids are canonical bare UUIDs. The store
/// routes delete and fetch operations on this distinction.
pub struct PlanId;

impl PlanId {
    /// Mint a new local id for the given source
    #[must_use]
    pub fn new_local(source: PlanSource) -> String {
        format!("{}-{}", source.id_prefix(), Uuid::new_v4())
    }

    /// True when `id` was issued locally (carries a provenance prefix)
    #[must_use]
    pub fn is_local(id: &str) -> bool {
        ["ai-", "tpl-", "off-"]
            .iter()
            .any(|prefix| id.strip_prefix(prefix).is_some_and(Self::is_remote))
    }

    /// True when `id` is a canonical remote identifier (bare UUID)
    #[must_use]
    pub fn is_remote(id: &str) -> bool {
        Uuid::try_parse(id).is_ok() && id.len() == 36
    }
}

/// A complete training plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Opaque globally unique identifier; encodes provenance (see [`PlanId`])
    pub id: String,
    /// Identity of the plan's owner
    pub owner_id: String,
    /// Display name
    pub name: String,
    /// Training level the plan was built for
    pub training_level: TrainingLevel,
    /// Fat-loss emphasis, 1–5
    pub goal_fat_loss: u8,
    /// Muscle-gain emphasis, 1–5
    pub goal_muscle_gain: u8,
    /// Mesocycle length in weeks
    pub mesocycle_length_weeks: u8,
    /// One conceptual week of training days, in order
    pub schedule: Vec<TrainingDay>,
    /// Lifecycle status
    pub status: PlanStatus,
    /// Which tier produced this plan
    pub source: PlanSource,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    /// Check the structural contract every generated plan must satisfy:
    /// a non-empty schedule in which every training day's exercises all
    /// prescribe at least one set.
    pub fn validate_structure(&self) -> PlanResult<()> {
        if self.schedule.is_empty() {
            return Err(PlanError::MalformedResponse {
                endpoint: String::new(),
                reason: "plan has an empty schedule".into(),
            });
        }
        for day in &self.schedule {
            for exercise in &day.exercises {
                if exercise.sets < 1 {
                    return Err(PlanError::MalformedResponse {
                        endpoint: String::new(),
                        reason: format!(
                            "exercise '{}' on '{}' prescribes zero sets",
                            exercise.name, day.label
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of days in the schedule that contain exercises
    #[must_use]
    pub fn training_day_count(&self) -> usize {
        self.schedule.iter().filter(|d| !d.is_rest_day()).count()
    }
}

/// Self-reported training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingLevel {
    /// Less than a year of consistent training
    Beginner,
    /// One to three years
    Intermediate,
    /// More than three years
    Advanced,
}

impl FromStr for TrainingLevel {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(PlanError::invalid_profile(format!(
                "unknown training level '{other}'"
            ))),
        }
    }
}

impl Display for TrainingLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let text = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };
        f.write_str(text)
    }
}

/// Primary training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGoal {
    /// Balanced strength and conditioning
    GeneralFitness,
    /// Muscle size
    Hypertrophy,
    /// Sport performance
    AthleticPerformance,
    /// Body-fat reduction
    FatLoss,
    /// Lean mass gain
    MuscleGain,
}

impl FromStr for PrimaryGoal {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "general_fitness" => Ok(Self::GeneralFitness),
            "hypertrophy" => Ok(Self::Hypertrophy),
            "athletic_performance" => Ok(Self::AthleticPerformance),
            "fat_loss" => Ok(Self::FatLoss),
            "muscle_gain" => Ok(Self::MuscleGain),
            other => Err(PlanError::invalid_profile(format!(
                "unknown primary goal '{other}'"
            ))),
        }
    }
}

impl Display for PrimaryGoal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let text = match self {
            Self::GeneralFitness => "general_fitness",
            Self::Hypertrophy => "hypertrophy",
            Self::AthleticPerformance => "athletic_performance",
            Self::FatLoss => "fat_loss",
            Self::MuscleGain => "muscle_gain",
        };
        f.write_str(text)
    }
}

/// User-preferred weekly training frequency, carried on the app's wire
/// format (`"2_3"`, `"4_5"`, `"6"`, ...). Ranges resolve to their upper
/// bound so a stated preference is always honored at full volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutFrequency(u8);

impl WorkoutFrequency {
    /// Target training days per week
    #[must_use]
    pub const fn days(self) -> u8 {
        self.0
    }

    /// Parse the app's frequency strings; unknown strings yield `None`
    /// so callers can fall back to a level default.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let days = match s {
            "1" => 1,
            "2" => 2,
            "2_3" | "3" => 3,
            "3_4" | "4" => 4,
            "4_5" | "5" => 5,
            "5_6" | "6" => 6,
            "6_7" | "7" => 7,
            _ => return None,
        };
        Some(Self(days))
    }

    /// Build from an explicit day count, clamped to 1..=7
    #[must_use]
    pub fn from_days(days: u8) -> Self {
        Self(days.clamp(1, 7))
    }
}

/// Everything the generator needs to know about a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identity of the requesting user; must be non-empty
    pub owner_id: String,
    /// Display name used in generated plan names
    pub full_name: String,
    /// Age in years, when known
    #[serde(default)]
    pub age: Option<u32>,
    /// Height in centimeters, when known
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Weight in kilograms, when known
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Self-reported gender, free text
    #[serde(default)]
    pub gender: Option<String>,
    /// Training experience
    pub training_level: TrainingLevel,
    /// Primary training goal
    pub primary_goal: PrimaryGoal,
    /// Fat-loss emphasis, 1–5
    pub fat_loss_goal: u8,
    /// Muscle-gain emphasis, 1–5
    pub muscle_gain_goal: u8,
    /// Preferred weekly training frequency, when stated
    #[serde(default)]
    pub workout_frequency: Option<WorkoutFrequency>,
    /// Key of a curated template to emulate, when requested
    #[serde(default)]
    pub emulate_template_key: Option<String>,
    /// Preserve the template's historical split verbatim, skipping
    /// frequency adaptation. Only meaningful for template-driven requests.
    #[serde(default)]
    pub authentic_mode: bool,
}

impl UserProfile {
    /// Reject profiles the engine cannot process. Missing owner identity is
    /// the only hard failure in the whole generation path.
    pub fn validate(&self) -> PlanResult<()> {
        if self.owner_id.trim().is_empty() {
            return Err(PlanError::invalid_profile("owner id is required"));
        }
        Ok(())
    }
}

/// Per-exercise usage history maintained by the usage tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Exercise name as committed
    pub exercise_name: String,
    /// Timestamp of the most recent use
    pub last_used_at: DateTime<Utc>,
    /// Total number of committed uses
    pub usage_count: u32,
    /// Denormalized muscle-group snapshot taken at record time
    pub muscle_groups: Vec<String>,
}

/// One committed workout in the rolling history window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutHistoryEntry {
    /// When the workout's plan was committed
    pub workout_date: DateTime<Utc>,
    /// All exercise names in the workout
    pub exercise_names: Vec<String>,
    /// All muscle groups touched by the workout
    pub muscle_groups: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_day(exercises: usize) -> TrainingDay {
        TrainingDay {
            label: "Monday".into(),
            focus: "Chest".into(),
            exercises: (0..exercises)
                .map(|i| PlannedExercise {
                    name: format!("Exercise {i}"),
                    sets: 3,
                    reps: "8-10".into(),
                    rest_between_sets: "90s".into(),
                })
                .collect(),
            notes: None,
            estimated_calories_burned: None,
        }
    }

    fn sample_plan(schedule: Vec<TrainingDay>) -> Plan {
        Plan {
            id: PlanId::new_local(PlanSource::OfflineFallback),
            owner_id: "user-1".into(),
            name: "Test Plan".into(),
            training_level: TrainingLevel::Intermediate,
            goal_fat_loss: 3,
            goal_muscle_gain: 3,
            mesocycle_length_weeks: 8,
            schedule,
            status: PlanStatus::Active,
            source: PlanSource::OfflineFallback,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_schedule_fails_structural_validation() {
        let plan = sample_plan(vec![]);
        assert!(plan.validate_structure().is_err());
    }

    #[test]
    fn zero_set_exercise_fails_structural_validation() {
        let mut day = sample_day(2);
        day.exercises[1].sets = 0;
        let plan = sample_plan(vec![day]);
        assert!(plan.validate_structure().is_err());
    }

    #[test]
    fn rest_day_is_determined_by_exercises_not_focus() {
        let mut day = sample_day(0);
        day.focus = "Legs".into();
        assert!(day.is_rest_day());

        let day = sample_day(1);
        assert!(!day.is_rest_day());
    }

    #[test]
    fn local_ids_carry_provenance_prefix() {
        let id = PlanId::new_local(PlanSource::AiGenerated);
        assert!(id.starts_with("ai-"));
        assert!(PlanId::is_local(&id));
        assert!(!PlanId::is_remote(&id));
    }

    #[test]
    fn remote_ids_are_bare_uuids() {
        let id = Uuid::new_v4().to_string();
        assert!(PlanId::is_remote(&id));
        assert!(!PlanId::is_local(&id));
    }

    #[test]
    fn garbage_ids_match_neither_format() {
        assert!(!PlanId::is_local("plan-42"));
        assert!(!PlanId::is_remote("plan-42"));
    }

    #[test]
    fn frequency_ranges_resolve_to_upper_bound() {
        assert_eq!(WorkoutFrequency::parse("2_3").map(WorkoutFrequency::days), Some(3));
        assert_eq!(WorkoutFrequency::parse("4_5").map(WorkoutFrequency::days), Some(5));
        assert_eq!(WorkoutFrequency::parse("6").map(WorkoutFrequency::days), Some(6));
        assert_eq!(WorkoutFrequency::parse("someday"), None);
    }

    #[test]
    fn profile_without_owner_is_rejected() {
        let profile = UserProfile {
            owner_id: "  ".into(),
            full_name: "Test".into(),
            age: None,
            height_cm: None,
            weight_kg: None,
            gender: None,
            training_level: TrainingLevel::Beginner,
            primary_goal: PrimaryGoal::GeneralFitness,
            fat_loss_goal: 3,
            muscle_gain_goal: 3,
            workout_frequency: None,
            emulate_template_key: None,
            authentic_mode: false,
        };
        assert!(matches!(
            profile.validate(),
            Err(PlanError::InvalidProfile(_))
        ));
    }
}
