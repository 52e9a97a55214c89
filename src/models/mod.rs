//! Request/response models for the analytics API.

pub mod filters;
pub mod kpi;
