//! Health Compass - Diet approach recommendations and wellness likelihood checks
//!
//! This crate implements goal-aware diet suggestions guarded by a BMI safety
//! gate, and a ten-questionnaire wellness aggregator.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod startup;
pub mod telemetry;
