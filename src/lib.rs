// ABOUTME: Main library entry point for the FitPlan plan generation engine
// ABOUTME: Tiered plan generation with template, remote AI, and offline fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan

#![deny(unsafe_code)]

//! # FitPlan Engine
//!
//! Plan generation and resilience engine for a consumer fitness app. The
//! engine guarantees that a structurally valid user profile always yields a
//! usable training plan, no matter which backends are reachable.
//!
//! ## Features
//!
//! - **Tiered generation**: curated template emulation, remote AI endpoints,
//!   deterministic offline synthesis, in that order
//! - **Single-active persistence**: one active plan per owner, enforced at
//!   the store with self-healing anomaly resolution
//! - **Frequency adaptation**: fit any weekly split to the user's stated
//!   training frequency without losing the important sessions
//! - **Variety tracking**: rolling exercise usage history keeps consecutive
//!   plans from repeating the same movements
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use fitplan_engine::config::EngineConfig;
//! use fitplan_engine::generator::PlanGenerator;
//! use fitplan_engine::models::{PrimaryGoal, TrainingLevel, UserProfile};
//! use fitplan_engine::plan_store::PlanStore;
//! use fitplan_engine::storage::{MemoryKeyValueStore, NullRemoteStore};
//!
//! #[tokio::main]
//! async fn main() -> fitplan_engine::errors::PlanResult<()> {
//!     let generator = PlanGenerator::new(EngineConfig::from_env());
//!     let store = PlanStore::new(
//!         Arc::new(MemoryKeyValueStore::new()),
//!         Arc::new(NullRemoteStore),
//!     );
//!
//!     let profile = UserProfile {
//!         owner_id: "user-1".into(),
//!         full_name: "Alex".into(),
//!         age: None,
//!         height_cm: None,
//!         weight_kg: None,
//!         gender: None,
//!         training_level: TrainingLevel::Beginner,
//!         primary_goal: PrimaryGoal::GeneralFitness,
//!         fat_loss_goal: 3,
//!         muscle_gain_goal: 3,
//!         workout_frequency: None,
//!         emulate_template_key: None,
//!         authentic_mode: false,
//!     };
//!
//!     let plan = generator.generate(&profile).await?;
//!     store.add_plan(plan).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Generator**: strategy chain orchestrating the three tiers
//! - **Normalize**: folds remote response dialects into one schedule shape
//! - **Plan store**: whole-list read-modify-write persistence per owner
//! - **Adapter**: pure frequency adaptation over template weeks
//! - **Catalog / Usage**: static exercise metadata and rolling usage history

/// Frequency adaptation for weekly schedules
pub mod adapter;
/// Static exercise metadata table
pub mod catalog;
/// Endpoint and timeout configuration
pub mod config;
/// Error taxonomy and result alias
pub mod errors;
/// Tiered plan generation
pub mod generator;
/// Structured logging bootstrap
pub mod logging;
/// Domain models
pub mod models;
/// Remote response normalization
pub mod normalize;
/// Single-active plan persistence
pub mod plan_store;
/// Key-value and remote store seams
pub mod storage;
/// Curated bodybuilder template library
pub mod templates;
/// HTTP transport to remote generation endpoints
pub mod transport;
/// Exercise usage history and variety scoring
pub mod usage;
