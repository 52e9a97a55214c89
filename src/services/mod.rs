//! Analytical query services.

pub mod balance;
pub mod filters;
pub mod kpi;
