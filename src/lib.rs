//! Prompt Seeder Library
//!
//! This library seeds an MLflow Prompt Registry with a fixed catalog of
//! starter prompts, including domain types, the registry port, the MLflow
//! REST adapter and the idempotent reconcile procedure.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod seeder;
