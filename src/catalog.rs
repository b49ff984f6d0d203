// ABOUTME: Immutable in-memory exercise reference table loaded once at process start
// ABOUTME: Every other component validates and selects exercises against this catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

//! # Exercise Catalog
//!
//! A static table of exercise metadata keyed by case-insensitive name. The
//! table order is stable and meaningful: the offline generator selects
//! exercises in catalog order, which is what makes it deterministic.

use std::sync::OnceLock;

use crate::models::{
    Difficulty, Equipment, ExerciseCategory, ExerciseDescriptor, PrimaryGoal, TrainingLevel,
};

static CATALOG: OnceLock<Vec<ExerciseDescriptor>> = OnceLock::new();

macro_rules! exercise {
    ($name:literal, $cat:ident, $diff:ident, [$($mg:literal),+], $eq:ident) => {
        ExerciseDescriptor {
            name: $name,
            category: ExerciseCategory::$cat,
            difficulty: Difficulty::$diff,
            muscle_groups: &[$($mg),+],
            equipment: Some(Equipment::$eq),
        }
    };
    ($name:literal, $cat:ident, $diff:ident, [$($mg:literal),+]) => {
        ExerciseDescriptor {
            name: $name,
            category: ExerciseCategory::$cat,
            difficulty: Difficulty::$diff,
            muscle_groups: &[$($mg),+],
            equipment: None,
        }
    };
}

fn build_catalog() -> Vec<ExerciseDescriptor> {
    vec![
        // Push
        exercise!("Push Up", Push, Beginner, ["Chest", "Shoulders", "Triceps"], Bodyweight),
        exercise!("Incline Push Up", Push, Beginner, ["Chest", "Shoulders"], Bodyweight),
        exercise!("Bench Press", Push, Intermediate, ["Chest", "Shoulders", "Triceps"], Barbell),
        exercise!("Incline Bench Press", Push, Intermediate, ["Upper Chest", "Shoulders", "Triceps"], Barbell),
        exercise!("Dumbbell Bench Press", Push, Beginner, ["Chest", "Shoulders", "Triceps"], Dumbbell),
        exercise!("Dumbbell Shoulder Press", Push, Beginner, ["Shoulders", "Triceps"], Dumbbell),
        exercise!("Overhead Press", Push, Intermediate, ["Shoulders", "Triceps"], Barbell),
        exercise!("Dumbbell Lateral Raise", Push, Beginner, ["Shoulders"], Dumbbell),
        exercise!("Dip", Push, Intermediate, ["Chest", "Triceps", "Shoulders"], Bodyweight),
        exercise!("Cable Crossover", Push, Intermediate, ["Chest"], CableMachine),
        exercise!("Close Grip Bench Press", Push, Intermediate, ["Triceps", "Chest"], Barbell),
        exercise!("Cable Tricep Pushdown", Push, Beginner, ["Triceps"], CableMachine),
        exercise!("Diamond Push Up", Push, Intermediate, ["Triceps", "Chest"], Bodyweight),
        exercise!("Handstand Push Up", Push, Advanced, ["Shoulders", "Triceps"], Bodyweight),
        // Pull
        exercise!("Pull Up", Pull, Intermediate, ["Lats", "Biceps", "Back"], Bodyweight),
        exercise!("Chin Up", Pull, Intermediate, ["Biceps", "Lats", "Back"], Bodyweight),
        exercise!("Lat Pulldown", Pull, Beginner, ["Lats", "Biceps"], CableMachine),
        exercise!("Bent Over Row", Pull, Intermediate, ["Back", "Lats", "Biceps"], Barbell),
        exercise!("Dumbbell Row", Pull, Beginner, ["Back", "Lats", "Biceps"], Dumbbell),
        exercise!("Seated Cable Row", Pull, Beginner, ["Back", "Lats"], CableMachine),
        exercise!("Deadlift", Pull, Advanced, ["Back", "Hamstrings", "Glutes"], Barbell),
        exercise!("Face Pull", Pull, Beginner, ["Rear Delts", "Upper Back"], CableMachine),
        exercise!("Barbell Curl", Pull, Beginner, ["Biceps"], Barbell),
        exercise!("Dumbbell Curl", Pull, Beginner, ["Biceps"], Dumbbell),
        exercise!("Hammer Curl", Pull, Beginner, ["Biceps", "Forearms"], Dumbbell),
        exercise!("Dumbbell Pullover", Pull, Intermediate, ["Lats", "Chest"], Dumbbell),
        // Legs
        exercise!("Bodyweight Squat", Legs, Beginner, ["Quads", "Glutes"], Bodyweight),
        exercise!("Goblet Squat", Legs, Beginner, ["Quads", "Glutes", "Core"], Dumbbell),
        exercise!("Back Squat", Legs, Intermediate, ["Quads", "Glutes", "Hamstrings"], Barbell),
        exercise!("Front Squat", Legs, Advanced, ["Quads", "Core", "Glutes"], Barbell),
        exercise!("Romanian Deadlift", Legs, Intermediate, ["Hamstrings", "Glutes"], Barbell),
        exercise!("Walking Lunge", Legs, Beginner, ["Quads", "Glutes"], Bodyweight),
        exercise!("Bulgarian Split Squat", Legs, Intermediate, ["Quads", "Glutes"], Dumbbell),
        exercise!("Leg Press", Legs, Beginner, ["Quads", "Glutes"], Machine),
        exercise!("Leg Curl", Legs, Beginner, ["Hamstrings"], Machine),
        exercise!("Leg Extension", Legs, Beginner, ["Quads"], Machine),
        exercise!("Hip Thrust", Legs, Intermediate, ["Glutes", "Hamstrings"], Barbell),
        exercise!("Standing Calf Raise", Legs, Beginner, ["Calves"], Bodyweight),
        exercise!("Box Jump", Legs, Intermediate, ["Quads", "Glutes", "Calves"], Bodyweight),
        // Core
        exercise!("Plank", Core, Beginner, ["Core", "Abs"], Bodyweight),
        exercise!("Side Plank", Core, Beginner, ["Obliques", "Core"], Bodyweight),
        exercise!("Crunch", Core, Beginner, ["Abs"], Bodyweight),
        exercise!("Hanging Leg Raise", Core, Advanced, ["Abs", "Hip Flexors"], Bodyweight),
        exercise!("Russian Twist", Core, Beginner, ["Obliques", "Abs"], Bodyweight),
        exercise!("Cable Crunch", Core, Intermediate, ["Abs"], CableMachine),
        exercise!("Ab Wheel Rollout", Core, Advanced, ["Abs", "Core"], Other),
        exercise!("Dead Bug", Core, Beginner, ["Core", "Abs"], Bodyweight),
        // Cardio
        exercise!("Jumping Jacks", Cardio, Beginner, ["Full Body"], Bodyweight),
        exercise!("High Knees", Cardio, Beginner, ["Legs", "Core"], Bodyweight),
        exercise!("Burpee", Cardio, Intermediate, ["Full Body"], Bodyweight),
        exercise!("Mountain Climber", Cardio, Beginner, ["Core", "Legs"], Bodyweight),
        exercise!("Jump Rope", Cardio, Beginner, ["Calves", "Full Body"], JumpRope),
        exercise!("Kettlebell Swing", Cardio, Intermediate, ["Glutes", "Hamstrings", "Core"], Kettlebell),
        exercise!("Rowing Machine", Cardio, Beginner, ["Back", "Legs", "Full Body"], Machine),
        exercise!("Sprint Interval", Cardio, Advanced, ["Legs", "Full Body"], Bodyweight),
    ]
}

/// The full catalog in stable order
#[must_use]
pub fn all() -> &'static [ExerciseDescriptor] {
    CATALOG.get_or_init(build_catalog)
}

/// Case-insensitive lookup by exercise name
#[must_use]
pub fn find(name: &str) -> Option<&'static ExerciseDescriptor> {
    all().iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

/// Filter the catalog; `None` criteria match everything. Difficulty is a
/// ceiling: an `Intermediate` ceiling admits Beginner and Intermediate.
#[must_use]
pub fn filter(
    category: Option<ExerciseCategory>,
    max_difficulty: Option<Difficulty>,
    muscle_group: Option<&str>,
    equipment: Option<Equipment>,
) -> Vec<&'static ExerciseDescriptor> {
    all()
        .iter()
        .filter(|e| category.is_none_or(|c| e.category == c))
        .filter(|e| max_difficulty.is_none_or(|d| e.difficulty <= d))
        .filter(|e| {
            muscle_group.is_none_or(|mg| {
                e.muscle_groups
                    .iter()
                    .any(|g| g.eq_ignore_ascii_case(mg) || g.to_ascii_lowercase().contains(&mg.to_ascii_lowercase()))
            })
        })
        .filter(|e| equipment.is_none_or(|eq| e.equipment == Some(eq)))
        .collect()
}

/// Catalog entries suitable for the given goal and level, in catalog order.
/// The goal selects movement categories; the level caps difficulty.
#[must_use]
pub fn exercises_for(goal: PrimaryGoal, level: TrainingLevel) -> Vec<&'static ExerciseDescriptor> {
    let categories: &[ExerciseCategory] = match goal {
        PrimaryGoal::FatLoss => &[
            ExerciseCategory::Cardio,
            ExerciseCategory::Legs,
            ExerciseCategory::Core,
            ExerciseCategory::Push,
            ExerciseCategory::Pull,
        ],
        PrimaryGoal::Hypertrophy | PrimaryGoal::MuscleGain => &[
            ExerciseCategory::Push,
            ExerciseCategory::Pull,
            ExerciseCategory::Legs,
            ExerciseCategory::Core,
        ],
        PrimaryGoal::AthleticPerformance => &[
            ExerciseCategory::Legs,
            ExerciseCategory::Cardio,
            ExerciseCategory::Push,
            ExerciseCategory::Pull,
            ExerciseCategory::Core,
        ],
        PrimaryGoal::GeneralFitness => &[
            ExerciseCategory::Push,
            ExerciseCategory::Pull,
            ExerciseCategory::Legs,
            ExerciseCategory::Core,
            ExerciseCategory::Cardio,
        ],
    };
    let ceiling = difficulty_ceiling(level);
    all()
        .iter()
        .filter(|e| categories.contains(&e.category) && e.difficulty <= ceiling)
        .collect()
}

/// Difficulty ceiling visible to a training level: beginners see beginner
/// movements only, intermediates add intermediate, advanced sees everything.
#[must_use]
pub const fn difficulty_ceiling(level: TrainingLevel) -> Difficulty {
    match level {
        TrainingLevel::Beginner => Difficulty::Beginner,
        TrainingLevel::Intermediate => Difficulty::Intermediate,
        TrainingLevel::Advanced => Difficulty::Advanced,
    }
}

/// Infer muscle groups from a free-text exercise name. Used to tag usage
/// records for exercises that arrive from remote generation and do not
/// resolve to a catalog entry.
#[must_use]
pub fn infer_muscle_groups(name: &str) -> Vec<String> {
    const KEYWORDS: &[(&str, &[&str])] = &[
        ("bench", &["Chest", "Triceps"]),
        ("chest", &["Chest"]),
        ("fly", &["Chest"]),
        ("push up", &["Chest", "Shoulders", "Triceps"]),
        ("push-up", &["Chest", "Shoulders", "Triceps"]),
        ("dip", &["Chest", "Triceps"]),
        ("row", &["Back", "Lats"]),
        ("pull", &["Lats", "Back"]),
        ("lat", &["Lats"]),
        ("deadlift", &["Back", "Hamstrings", "Glutes"]),
        ("curl", &["Biceps"]),
        ("squat", &["Quads", "Glutes"]),
        ("lunge", &["Quads", "Glutes"]),
        ("leg press", &["Quads", "Glutes"]),
        ("hamstring", &["Hamstrings"]),
        ("calf", &["Calves"]),
        ("hip thrust", &["Glutes"]),
        ("shoulder", &["Shoulders"]),
        ("press", &["Shoulders", "Triceps"]),
        ("raise", &["Shoulders"]),
        ("tricep", &["Triceps"]),
        ("extension", &["Triceps"]),
        ("crunch", &["Abs"]),
        ("plank", &["Core", "Abs"]),
        ("ab ", &["Abs"]),
        ("twist", &["Obliques"]),
        ("run", &["Legs", "Full Body"]),
        ("sprint", &["Legs", "Full Body"]),
        ("bike", &["Legs"]),
        ("burpee", &["Full Body"]),
        ("jump", &["Legs", "Full Body"]),
    ];

    let lower = name.to_ascii_lowercase();
    let mut groups: Vec<String> = Vec::new();
    for (keyword, mapped) in KEYWORDS {
        if lower.contains(keyword) {
            for mg in *mapped {
                if !groups.iter().any(|g| g == mg) {
                    groups.push((*mg).to_owned());
                }
            }
            break;
        }
    }
    groups
}
