//! oncosym-web: HTTP front end for the Oncosym classifier.
//! Provides:
//!   - Liveness and health endpoints
//!   - Symptom → cancer-type prediction
//!   - Symptom vocabulary listing for client pick-lists
//!   - The interactive terminal session

pub mod cli;
pub mod config;
pub mod error;
pub mod router;
pub mod handlers;
pub mod state;
