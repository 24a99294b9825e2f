//! Partial-date values and date ranges.

pub mod partial;
pub mod patterns;
pub mod range;
