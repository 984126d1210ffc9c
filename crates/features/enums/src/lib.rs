//! Enumeration lesson.
//!
//! [`catalog`] wraps the [`CastMember`](primer_domain::cast::CastMember) enumeration in
//! fallible lookups; [`lesson::run`] walks through them and prints the results.

pub mod catalog;
mod error;
pub mod lesson;

pub use crate::error::{EnumError, EnumErrorExt};
pub use crate::lesson::run;
