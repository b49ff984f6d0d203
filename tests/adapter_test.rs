// ABOUTME: Integration tests for frequency adaptation of weekly schedules
// ABOUTME: Covers priority selection, week relayout, and the no-op cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan
#![allow(missing_docs)]

use fitplan_engine::adapter::{adapt, rebuild_week};
use fitplan_engine::models::{PlannedExercise, TrainingDay};
use fitplan_engine::templates;

fn training_day(focus: &str) -> TrainingDay {
    TrainingDay {
        label: focus.to_owned(),
        focus: focus.to_owned(),
        exercises: vec![PlannedExercise {
            name: format!("{focus} Main Lift"),
            sets: 4,
            reps: "8-10".into(),
            rest_between_sets: "90s".into(),
        }],
        notes: None,
        estimated_calories_burned: None,
    }
}

fn training_focuses(schedule: &[TrainingDay]) -> Vec<String> {
    schedule
        .iter()
        .filter(|d| !d.is_rest_day())
        .map(|d| d.focus.clone())
        .collect()
}

#[test]
fn six_day_split_shrinks_to_the_three_most_important() {
    let schedule = vec![
        training_day("Arms"),
        training_day("Chest"),
        training_day("Cardio"),
        training_day("Back"),
        training_day("Legs"),
        training_day("Shoulders"),
    ];
    let adapted = adapt(schedule, 3);
    assert_eq!(training_focuses(&adapted), vec!["Chest", "Back", "Legs"]);
}

#[test]
fn adapted_week_spans_monday_to_sunday() {
    let schedule = vec![
        training_day("Chest"),
        training_day("Back"),
        training_day("Legs"),
        training_day("Shoulders"),
        training_day("Arms"),
    ];
    let adapted = adapt(schedule, 2);
    assert_eq!(adapted.len(), 7);
    assert_eq!(adapted[0].label, "Monday");
    assert_eq!(adapted[6].label, "Sunday");
    assert_eq!(adapted.iter().filter(|d| !d.is_rest_day()).count(), 2);
}

#[test]
fn compound_focus_labels_still_rank() {
    let schedule = vec![
        training_day("Conditioning"),
        training_day("Chest and Back"),
        training_day("Upper Body"),
    ];
    // "Chest and Back" matches the "chest" keyword first, ahead of "upper body"
    let adapted = adapt(schedule, 2);
    assert_eq!(
        training_focuses(&adapted),
        vec!["Chest and Back", "Upper Body"]
    );
}

#[test]
fn matching_target_is_identity() {
    let schedule = vec![
        training_day("Chest"),
        TrainingDay::rest("Wednesday"),
        training_day("Back"),
    ];
    assert_eq!(adapt(schedule.clone(), 2), schedule);
}

#[test]
fn shorter_schedule_than_target_is_kept() {
    let schedule = vec![training_day("Full Body")];
    assert_eq!(adapt(schedule.clone(), 4), schedule);
}

#[test]
fn rebuild_preserves_exercise_content() {
    let week = rebuild_week(vec![training_day("Chest"), training_day("Back")]);
    let chest = week.iter().find(|d| d.focus == "Chest").unwrap();
    assert_eq!(chest.exercises[0].name, "Chest Main Lift");
    assert_eq!(chest.exercises[0].sets, 4);
}

#[test]
fn template_week_adapts_cleanly() {
    let arnold = templates::find("arnold").unwrap();
    let days = templates::to_training_days(arnold);
    let adapted = adapt(days, 4);
    assert_eq!(adapted.len(), 7);
    assert_eq!(adapted.iter().filter(|d| !d.is_rest_day()).count(), 4);
    // All surviving days still carry their full prescriptions
    for day in adapted.iter().filter(|d| !d.is_rest_day()) {
        assert!(!day.exercises.is_empty());
        assert!(day.exercises.iter().all(|e| e.sets >= 1));
    }
}
