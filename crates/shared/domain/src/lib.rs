//! # Domain Models
//!
//! Pure lesson types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O or printing, just data and simple helpers.

pub mod cast;
pub mod config;
pub mod weapon;
