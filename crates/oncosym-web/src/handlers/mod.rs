//! HTTP handlers for all web routes.

pub mod system;
pub mod predict;
pub mod symptoms;
