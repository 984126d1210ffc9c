//! Dictionary lesson.
//!
//! - [`princesses`]: the She-Ra data sets, built both from literal pairs and by assignment.
//! - [`armory`]: weapons handed out on demand and the dice that drive the attacks.
//! - [`derived`]: new containers computed from existing ones.
//! - [`lesson::run`]: prints the walkthrough.

pub mod armory;
pub mod derived;
mod error;
pub mod lesson;
pub mod princesses;

pub use crate::error::{DictionaryError, DictionaryErrorExt};
pub use crate::lesson::run;
