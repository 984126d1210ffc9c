//! Facade crate for the primer lessons and shared modules.
//! Re-exports domain/kernel primitives and dispatches to the lesson crates.
//! Keep this crate thin: it should compose other crates, not implement lessons.
//!
//! ## Usage
//! - Pick a [`Lesson`] (or parse one from its name) and call [`run`].
//! - [`run_all`] plays every lesson in order, separated by a blank line.

use primer_dictionaries::DictionaryError;
pub use primer_dictionaries as dictionaries;
pub use primer_domain as domain;
use primer_domain::config::ArmoryConfig;
use primer_enums::EnumError;
pub use primer_enums as enums;
pub use primer_kernel as kernel;
pub use primer_store as store;
use std::borrow::Cow;
use std::io::Write;
use strum::IntoEnumIterator;
use tracing::debug;

/// Lessons in the order [`run_all`] plays them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Lesson {
    Enums,
    Dictionaries,
}

/// Failure of a lesson that could not be caught inside it.
#[primer_derive::primer_error]
pub enum LessonError {
    #[error("Enumeration lesson failed{}: {source}", format_context(.context))]
    Enums { source: EnumError, context: Option<Cow<'static, str>> },

    #[error("Dictionary lesson failed{}: {source}", format_context(.context))]
    Dictionaries { source: DictionaryError, context: Option<Cow<'static, str>> },

    #[error("Lesson output error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

/// Plays one lesson into `out`.
///
/// # Errors
/// Whatever the lesson itself could not recover from (output or configuration errors).
pub fn run<W: Write>(lesson: Lesson, out: &mut W, armory: &ArmoryConfig) -> Result<(), LessonError> {
    debug!(%lesson, "Dispatching lesson");
    match lesson {
        Lesson::Enums => primer_enums::run(out)?,
        Lesson::Dictionaries => primer_dictionaries::run(out, armory)?,
    }
    Ok(())
}

/// Plays every [`Lesson`] in order.
///
/// # Errors
/// Stops at the first lesson that fails; see [`run`].
pub fn run_all<W: Write>(out: &mut W, armory: &ArmoryConfig) -> Result<(), LessonError> {
    for (i, lesson) in Lesson::iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        run(lesson, out, armory)?;
    }
    Ok(())
}
