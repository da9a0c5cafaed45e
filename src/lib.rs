//! Stack Planner - Guided intake wizard for first-time builders
//!
//! Walks a user through a short interview (vision, users, features, timeline,
//! budget, comfort level) and recommends a beginner-friendly tech stack with
//! cost and complexity estimates, an explanation, and a deployment guide.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
