// ABOUTME: Curated weekly splits from famous bodybuilding programs, keyed by slug
// ABOUTME: Static data converted into TrainingDays for the template generation tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

//! # Template Library
//!
//! Each template is a complete historical weekly split, rest days included.
//! Set prescriptions are stored as range strings (`"3-4"`); conversion takes
//! the upper bound, matching how frequency ranges resolve elsewhere.

use crate::models::{PlannedExercise, TrainingDay};

/// One exercise inside a template day
#[derive(Debug, Clone, Copy)]
pub struct TemplateExercise {
    /// Exercise name
    pub name: &'static str,
    /// Set prescription, a number or a range like "3-4"
    pub sets: &'static str,
    /// Rep prescription
    pub reps: &'static str,
    /// Rest between sets
    pub rest: &'static str,
}

/// One day of a template split
#[derive(Debug, Clone, Copy)]
pub struct TemplateDay {
    /// Day label
    pub day: &'static str,
    /// Body parts trained; empty means a rest day
    pub body_parts: &'static [&'static str],
    /// Prescribed exercises; empty for rest days
    pub exercises: &'static [TemplateExercise],
    /// Session notes
    pub notes: Option<&'static str>,
}

/// A complete curated weekly split
#[derive(Debug, Clone, Copy)]
pub struct WorkoutTemplate {
    /// Stable lookup key
    pub key: &'static str,
    /// Display name used in generated plan names
    pub display_name: &'static str,
    /// One-line description of the program
    pub description: &'static str,
    /// The full week, Monday first, rest days included
    pub days: &'static [TemplateDay],
}

macro_rules! tex {
    ($name:literal, $sets:literal, $reps:literal, $rest:literal) => {
        TemplateExercise {
            name: $name,
            sets: $sets,
            reps: $reps,
            rest: $rest,
        }
    };
}

const REST: TemplateDay = TemplateDay {
    day: "Sunday",
    body_parts: &[],
    exercises: &[],
    notes: Some("Full rest"),
};

const ARNOLD: WorkoutTemplate = WorkoutTemplate {
    key: "arnold",
    display_name: "Arnold Golden Era Split",
    description: "High-volume six-day split alternating chest/back, shoulders/arms, and legs",
    days: &[
        TemplateDay {
            day: "Monday",
            body_parts: &["Chest", "Back"],
            exercises: &[
                tex!("Bench Press", "4-5", "8-12", "90s"),
                tex!("Incline Bench Press", "4", "8-12", "90s"),
                tex!("Dumbbell Pullover", "3-4", "10-12", "60s"),
                tex!("Pull Up", "4-5", "to failure", "90s"),
                tex!("Bent Over Row", "4", "8-12", "90s"),
                tex!("Deadlift", "3", "6-10", "120s"),
            ],
            notes: Some("Superset chest and back pairs where possible"),
        },
        TemplateDay {
            day: "Tuesday",
            body_parts: &["Shoulders", "Arms"],
            exercises: &[
                tex!("Overhead Press", "4", "8-12", "90s"),
                tex!("Dumbbell Lateral Raise", "4", "10-15", "60s"),
                tex!("Barbell Curl", "4", "8-12", "60s"),
                tex!("Dumbbell Curl", "3", "10-12", "60s"),
                tex!("Close Grip Bench Press", "4", "8-12", "90s"),
                tex!("Cable Tricep Pushdown", "3", "10-15", "60s"),
            ],
            notes: None,
        },
        TemplateDay {
            day: "Wednesday",
            body_parts: &["Legs"],
            exercises: &[
                tex!("Back Squat", "5", "8-12", "120s"),
                tex!("Romanian Deadlift", "4", "8-12", "90s"),
                tex!("Walking Lunge", "3-4", "12-16 steps", "60s"),
                tex!("Leg Curl", "4", "10-15", "60s"),
                tex!("Standing Calf Raise", "5", "15-20", "45s"),
            ],
            notes: None,
        },
        TemplateDay {
            day: "Thursday",
            body_parts: &["Chest", "Back"],
            exercises: &[
                tex!("Dumbbell Bench Press", "4", "8-12", "90s"),
                tex!("Cable Crossover", "4", "12-15", "60s"),
                tex!("Chin Up", "4", "to failure", "90s"),
                tex!("Seated Cable Row", "4", "10-12", "90s"),
            ],
            notes: None,
        },
        TemplateDay {
            day: "Friday",
            body_parts: &["Shoulders", "Arms"],
            exercises: &[
                tex!("Dumbbell Shoulder Press", "4", "8-12", "90s"),
                tex!("Face Pull", "4", "12-15", "60s"),
                tex!("Hammer Curl", "4", "10-12", "60s"),
                tex!("Dip", "4", "to failure", "90s"),
            ],
            notes: None,
        },
        TemplateDay {
            day: "Saturday",
            body_parts: &["Legs"],
            exercises: &[
                tex!("Front Squat", "4", "8-10", "120s"),
                tex!("Leg Press", "4", "12-15", "90s"),
                tex!("Leg Extension", "4", "12-15", "60s"),
                tex!("Standing Calf Raise", "5", "15-20", "45s"),
            ],
            notes: None,
        },
        REST,
    ],
};

const DORIAN: WorkoutTemplate = WorkoutTemplate {
    key: "dorian",
    display_name: "Dorian Blood and Guts",
    description: "Low-volume, high-intensity four-day split with one all-out working set",
    days: &[
        TemplateDay {
            day: "Monday",
            body_parts: &["Shoulders", "Arms"],
            exercises: &[
                tex!("Dumbbell Shoulder Press", "2-3", "6-8", "120s"),
                tex!("Dumbbell Lateral Raise", "2", "8-10", "90s"),
                tex!("Close Grip Bench Press", "2", "6-8", "120s"),
                tex!("Barbell Curl", "2", "6-8", "90s"),
            ],
            notes: Some("Take the final set of each movement to failure"),
        },
        TemplateDay {
            day: "Tuesday",
            body_parts: &["Back"],
            exercises: &[
                tex!("Lat Pulldown", "2-3", "8-10", "120s"),
                tex!("Bent Over Row", "2", "8-10", "120s"),
                tex!("Seated Cable Row", "2", "8-10", "120s"),
                tex!("Deadlift", "2", "6-8", "180s"),
            ],
            notes: None,
        },
        TemplateDay {
            day: "Wednesday",
            body_parts: &[],
            exercises: &[],
            notes: Some("Full rest"),
        },
        TemplateDay {
            day: "Thursday",
            body_parts: &["Chest", "Abs"],
            exercises: &[
                tex!("Incline Bench Press", "2-3", "6-8", "120s"),
                tex!("Dumbbell Bench Press", "2", "8-10", "120s"),
                tex!("Cable Crossover", "2", "10-12", "90s"),
                tex!("Cable Crunch", "3", "12-15", "60s"),
            ],
            notes: None,
        },
        TemplateDay {
            day: "Friday",
            body_parts: &["Legs"],
            exercises: &[
                tex!("Leg Extension", "2-3", "10-12", "90s"),
                tex!("Leg Press", "2", "10-12", "120s"),
                tex!("Back Squat", "2", "8-10", "180s"),
                tex!("Leg Curl", "2", "8-10", "90s"),
                tex!("Standing Calf Raise", "2", "10-12", "60s"),
            ],
            notes: None,
        },
        TemplateDay {
            day: "Saturday",
            body_parts: &[],
            exercises: &[],
            notes: Some("Full rest"),
        },
        REST,
    ],
};

const RONNIE: WorkoutTemplate = WorkoutTemplate {
    key: "ronnie",
    display_name: "Ronnie Power Building Week",
    description: "Heavy five-day split built around the big barbell lifts",
    days: &[
        TemplateDay {
            day: "Monday",
            body_parts: &["Back"],
            exercises: &[
                tex!("Deadlift", "4-5", "4-6", "180s"),
                tex!("Bent Over Row", "4", "8-10", "120s"),
                tex!("Lat Pulldown", "4", "10-12", "90s"),
                tex!("Dumbbell Row", "3", "10-12", "90s"),
            ],
            notes: None,
        },
        TemplateDay {
            day: "Tuesday",
            body_parts: &["Shoulders"],
            exercises: &[
                tex!("Overhead Press", "4-5", "6-8", "120s"),
                tex!("Dumbbell Shoulder Press", "4", "8-10", "90s"),
                tex!("Dumbbell Lateral Raise", "4", "12-15", "60s"),
                tex!("Face Pull", "3", "12-15", "60s"),
            ],
            notes: None,
        },
        TemplateDay {
            day: "Wednesday",
            body_parts: &["Legs"],
            exercises: &[
                tex!("Back Squat", "5", "4-6", "180s"),
                tex!("Front Squat", "4", "8-10", "120s"),
                tex!("Hip Thrust", "4", "8-12", "90s"),
                tex!("Leg Curl", "4", "10-12", "60s"),
                tex!("Standing Calf Raise", "4", "15-20", "45s"),
            ],
            notes: None,
        },
        TemplateDay {
            day: "Thursday",
            body_parts: &["Chest"],
            exercises: &[
                tex!("Bench Press", "4-5", "4-6", "180s"),
                tex!("Incline Bench Press", "4", "8-10", "120s"),
                tex!("Dip", "4", "to failure", "90s"),
                tex!("Cable Crossover", "3", "12-15", "60s"),
            ],
            notes: None,
        },
        TemplateDay {
            day: "Friday",
            body_parts: &["Arms", "Abs"],
            exercises: &[
                tex!("Barbell Curl", "4", "8-10", "90s"),
                tex!("Hammer Curl", "3", "10-12", "60s"),
                tex!("Close Grip Bench Press", "4", "8-10", "90s"),
                tex!("Cable Tricep Pushdown", "3", "12-15", "60s"),
                tex!("Hanging Leg Raise", "3", "10-15", "60s"),
            ],
            notes: None,
        },
        TemplateDay {
            day: "Saturday",
            body_parts: &[],
            exercises: &[],
            notes: Some("Full rest"),
        },
        REST,
    ],
};

const PLATZ: WorkoutTemplate = WorkoutTemplate {
    key: "platz",
    display_name: "Platz Leg Priority Split",
    description: "Leg-dominant four-day split with brutal high-rep squatting",
    days: &[
        TemplateDay {
            day: "Monday",
            body_parts: &["Legs"],
            exercises: &[
                tex!("Back Squat", "6-8", "10-20", "180s"),
                tex!("Leg Press", "4", "15-20", "120s"),
                tex!("Leg Extension", "4", "15-20", "90s"),
                tex!("Leg Curl", "4", "10-15", "90s"),
                tex!("Standing Calf Raise", "5", "20-30", "45s"),
            ],
            notes: Some("Squat volume comes first, everything else supports it"),
        },
        TemplateDay {
            day: "Tuesday",
            body_parts: &[],
            exercises: &[],
            notes: Some("Full rest"),
        },
        TemplateDay {
            day: "Wednesday",
            body_parts: &["Chest", "Back"],
            exercises: &[
                tex!("Bench Press", "4", "8-12", "90s"),
                tex!("Incline Bench Press", "3", "10-12", "90s"),
                tex!("Pull Up", "4", "to failure", "90s"),
                tex!("Bent Over Row", "4", "8-12", "90s"),
            ],
            notes: None,
        },
        TemplateDay {
            day: "Thursday",
            body_parts: &[],
            exercises: &[],
            notes: Some("Full rest"),
        },
        TemplateDay {
            day: "Friday",
            body_parts: &["Shoulders", "Arms"],
            exercises: &[
                tex!("Overhead Press", "4", "8-12", "90s"),
                tex!("Dumbbell Lateral Raise", "4", "12-15", "60s"),
                tex!("Barbell Curl", "3-4", "8-12", "60s"),
                tex!("Cable Tricep Pushdown", "3-4", "10-15", "60s"),
            ],
            notes: None,
        },
        TemplateDay {
            day: "Saturday",
            body_parts: &["Legs"],
            exercises: &[
                tex!("Front Squat", "5", "8-12", "120s"),
                tex!("Walking Lunge", "4", "16-20 steps", "90s"),
                tex!("Romanian Deadlift", "4", "10-12", "90s"),
                tex!("Standing Calf Raise", "5", "20-30", "45s"),
            ],
            notes: None,
        },
        REST,
    ],
};

const TEMPLATES: &[WorkoutTemplate] = &[ARNOLD, DORIAN, RONNIE, PLATZ];

/// All curated templates
#[must_use]
pub fn all() -> &'static [WorkoutTemplate] {
    TEMPLATES
}

/// Look up a template by slug, case-insensitive
#[must_use]
pub fn find(key: &str) -> Option<&'static WorkoutTemplate> {
    TEMPLATES.iter().find(|t| t.key.eq_ignore_ascii_case(key))
}

/// Resolve a set-range string to a concrete count. Ranges take their upper
/// bound; unparseable strings default to 3.
#[must_use]
pub fn resolve_sets(sets: &str) -> u32 {
    sets.rsplit('-')
        .next()
        .and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|&n| n >= 1)
        .unwrap_or(3)
}

/// Convert a template week into canonical training days
#[must_use]
pub fn to_training_days(template: &WorkoutTemplate) -> Vec<TrainingDay> {
    template
        .days
        .iter()
        .map(|day| TrainingDay {
            label: day.day.to_owned(),
            focus: day.body_parts.join(" and "),
            exercises: day
                .exercises
                .iter()
                .map(|e| PlannedExercise {
                    name: e.name.to_owned(),
                    sets: resolve_sets(e.sets),
                    reps: e.reps.to_owned(),
                    rest_between_sets: e.rest.to_owned(),
                })
                .collect(),
            notes: day.notes.map(str::to_owned),
            estimated_calories_burned: None,
        })
        .collect()
}
