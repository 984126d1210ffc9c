//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use primer::Lesson;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "primer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Enum and dictionary lessons, starring the Fab Five and the Princess Alliance")]
pub(crate) struct Cli {
    /// Configuration file (TOML, JSON or YAML); `./primer.*` is used when present
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Seed for the armory's attack rolls, overriding `armory.seed`
    #[arg(long, global = true)]
    pub(crate) seed: Option<u64>,

    /// Lesson to run (all of them by default)
    #[command(subcommand)]
    pub(crate) command: Option<LessonCommand>,
}

#[derive(Debug, Clone, Copy, Default, Subcommand)]
pub(crate) enum LessonCommand {
    /// The Queer Eye enumeration lesson
    Enums,
    /// The She-Ra dictionary lesson
    Dictionaries,
    /// Every lesson, in order
    #[default]
    All,
}

impl LessonCommand {
    /// The single lesson to run, or `None` for all of them.
    pub(crate) const fn lesson(self) -> Option<Lesson> {
        match self {
            Self::Enums => Some(Lesson::Enums),
            Self::Dictionaries => Some(Lesson::Dictionaries),
            Self::All => None,
        }
    }
}
