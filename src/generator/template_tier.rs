// ABOUTME: First generation tier: emulate a curated bodybuilder template
// ABOUTME: Adapts the historical split to the profile's frequency unless authentic mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::adapter;
use crate::generator::{assemble_plan, GenerationStrategy};
use crate::models::{Plan, PlanSource, UserProfile};
use crate::templates;

/// Converts curated templates into plans when the profile asks for one
pub struct TemplateTier;

#[async_trait]
impl GenerationStrategy for TemplateTier {
    fn name(&self) -> &'static str {
        "template"
    }

    async fn attempt(&self, profile: &UserProfile) -> Option<Plan> {
        let key = profile.emulate_template_key.as_deref()?;
        let Some(template) = templates::find(key) else {
            warn!(key = %key, "unknown template key, falling through");
            return None;
        };

        let mut schedule = templates::to_training_days(template);

        if profile.authentic_mode {
            debug!(template = template.key, "authentic mode, keeping historical split verbatim");
        } else if let Some(frequency) = profile.workout_frequency {
            schedule = adapter::adapt(schedule, frequency.days() as usize);
        }

        Some(assemble_plan(
            profile,
            template.display_name.to_owned(),
            schedule,
            PlanSource::StaticTemplate,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PrimaryGoal, TrainingLevel, WorkoutFrequency};

    fn profile(key: Option<&str>, frequency: Option<u8>, authentic: bool) -> UserProfile {
        UserProfile {
            owner_id: "user-1".into(),
            full_name: "Test User".into(),
            age: None,
            height_cm: None,
            weight_kg: None,
            gender: None,
            training_level: TrainingLevel::Advanced,
            primary_goal: PrimaryGoal::MuscleGain,
            fat_loss_goal: 2,
            muscle_gain_goal: 5,
            workout_frequency: frequency.map(WorkoutFrequency::from_days),
            emulate_template_key: key.map(str::to_owned),
            authentic_mode: authentic,
        }
    }

    #[tokio::test]
    async fn no_template_key_declines() {
        assert!(TemplateTier.attempt(&profile(None, None, false)).await.is_none());
    }

    #[tokio::test]
    async fn unknown_key_declines() {
        assert!(TemplateTier.attempt(&profile(Some("mystery"), None, false)).await.is_none());
    }

    #[tokio::test]
    async fn frequency_adapts_the_split() {
        let plan = TemplateTier
            .attempt(&profile(Some("arnold"), Some(3), false))
            .await
            .unwrap();
        assert_eq!(plan.training_day_count(), 3);
        assert_eq!(plan.source, PlanSource::StaticTemplate);
        assert!(plan.id.starts_with("tpl-"));
    }

    #[tokio::test]
    async fn authentic_mode_keeps_native_day_count() {
        let plan = TemplateTier
            .attempt(&profile(Some("arnold"), Some(3), true))
            .await
            .unwrap();
        assert_eq!(plan.training_day_count(), 6);
    }
}
