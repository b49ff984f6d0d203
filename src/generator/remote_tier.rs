// ABOUTME: Second generation tier: walk remote AI endpoints in configured order
// ABOUTME: Probe, request, normalize, validate; any failure advances to the next endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::generator::{assemble_plan, GenerationStrategy};
use crate::models::{Plan, PlanSource, UserProfile};
use crate::normalize;
use crate::transport::GenerationTransport;

/// Requests plans from remote generation endpoints, first valid response wins
pub struct RemoteTier {
    config: EngineConfig,
    transport: Arc<dyn GenerationTransport>,
}

impl RemoteTier {
    /// Build the tier over a transport seam
    #[must_use]
    pub fn new(config: EngineConfig, transport: Arc<dyn GenerationTransport>) -> Self {
        Self { config, transport }
    }

    fn plan_name(response: &Value, profile: &UserProfile) -> String {
        ["plan_name", "planName", "name"]
            .iter()
            .find_map(|key| response.get(key).and_then(Value::as_str))
            .map_or_else(
                || format!("Personalized Plan for {}", profile.full_name),
                str::to_owned,
            )
    }
}

#[async_trait]
impl GenerationStrategy for RemoteTier {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn attempt(&self, profile: &UserProfile) -> Option<Plan> {
        for endpoint in &self.config.endpoints {
            if !endpoint.skip_probe() {
                if let Err(err) = self
                    .transport
                    .probe_health(endpoint, self.config.probe_timeout)
                    .await
                {
                    warn!(endpoint = %endpoint.base_url, error = %err, "health probe failed");
                    continue;
                }
            }

            let timeout = self.config.generate_timeout(endpoint);
            let response = match self.transport.generate(endpoint, profile, timeout).await {
                Ok(response) => response,
                Err(err) => {
                    warn!(endpoint = %endpoint.base_url, error = %err, "generation request failed");
                    continue;
                }
            };

            let schedule = match normalize::normalize_schedule(&response) {
                Ok(schedule) => schedule,
                Err(err) => {
                    warn!(endpoint = %endpoint.base_url, error = %err, "response failed normalization");
                    continue;
                }
            };

            let plan = assemble_plan(
                profile,
                Self::plan_name(&response, profile),
                schedule,
                PlanSource::AiGenerated,
            );
            if let Err(err) = plan.validate_structure() {
                warn!(endpoint = %endpoint.base_url, error = %err, "generated plan failed validation");
                continue;
            }

            debug!(endpoint = %endpoint.base_url, "remote generation succeeded");
            return Some(plan);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use serde_json::json;

    use crate::config::GenerationEndpoint;
    use crate::errors::{PlanError, PlanResult};
    use crate::models::{PrimaryGoal, TrainingLevel};

    struct ScriptedTransport {
        calls: AtomicUsize,
        responses: Vec<PlanResult<Value>>,
    }

    impl ScriptedTransport {
        fn new(responses: Vec<PlanResult<Value>>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                responses,
            }
        }
    }

    #[async_trait]
    impl GenerationTransport for ScriptedTransport {
        async fn probe_health(
            &self,
            _endpoint: &GenerationEndpoint,
            _timeout: Duration,
        ) -> PlanResult<()> {
            Ok(())
        }

        async fn generate(
            &self,
            endpoint: &GenerationEndpoint,
            _profile: &UserProfile,
            _timeout: Duration,
        ) -> PlanResult<Value> {
            let index = self.calls.fetch_add(1, Ordering::SeqCst);
            match self.responses.get(index) {
                Some(Ok(value)) => Ok(value.clone()),
                Some(Err(_)) | None => Err(PlanError::EndpointUnavailable {
                    endpoint: endpoint.base_url.clone(),
                    reason: "scripted failure".into(),
                }),
            }
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            owner_id: "user-1".into(),
            full_name: "Test User".into(),
            age: None,
            height_cm: None,
            weight_kg: None,
            gender: None,
            training_level: TrainingLevel::Intermediate,
            primary_goal: PrimaryGoal::GeneralFitness,
            fat_loss_goal: 3,
            muscle_gain_goal: 3,
            workout_frequency: None,
            emulate_template_key: None,
            authentic_mode: false,
        }
    }

    fn config(urls: &[&str]) -> EngineConfig {
        EngineConfig {
            endpoints: urls.iter().map(|url| GenerationEndpoint::new(*url)).collect(),
            ..EngineConfig::default()
        }
    }

    fn valid_response() -> Value {
        json!({
            "plan_name": "Remote Plan",
            "weekly_schedule": [
                { "day": "Monday", "focus": "Chest", "exercises": [
                    { "name": "Bench Press", "sets": 4, "reps": "8-10", "rest": "90s" }
                ]}
            ]
        })
    }

    #[tokio::test]
    async fn first_valid_endpoint_wins() {
        let transport = Arc::new(ScriptedTransport::new(vec![Ok(valid_response())]));
        let tier = RemoteTier::new(config(&["https://a.example.com"]), transport);
        let plan = tier.attempt(&profile()).await.unwrap();
        assert_eq!(plan.name, "Remote Plan");
        assert_eq!(plan.source, PlanSource::AiGenerated);
        assert!(plan.id.starts_with("ai-"));
    }

    #[tokio::test]
    async fn failed_endpoint_advances_to_the_next() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Err(PlanError::storage("unused")),
            Ok(valid_response()),
        ]));
        let tier = RemoteTier::new(
            config(&["https://a.example.com", "https://b.example.com"]),
            transport,
        );
        assert!(tier.attempt(&profile()).await.is_some());
    }

    #[tokio::test]
    async fn malformed_response_counts_as_endpoint_failure() {
        let transport = Arc::new(ScriptedTransport::new(vec![Ok(json!({"message": "hi"}))]));
        let tier = RemoteTier::new(config(&["https://a.example.com"]), transport);
        assert!(tier.attempt(&profile()).await.is_none());
    }

    #[tokio::test]
    async fn all_endpoints_down_declines() {
        let transport = Arc::new(ScriptedTransport::new(vec![]));
        let tier = RemoteTier::new(
            config(&["https://a.example.com", "https://b.example.com"]),
            transport,
        );
        assert!(tier.attempt(&profile()).await.is_none());
    }
}
