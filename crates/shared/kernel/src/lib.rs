//! Kernel utilities shared across the lesson crates.
//! Keep this crate lightweight; it re-exports the domain models and owns config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use primer_kernel::config::load_config;
//! use primer_kernel::domain::config::PrimerConfig;
//!
//! // Reads ./primer.{toml,json,yaml} when present, then PRIMER__* overrides.
//! let cfg: PrimerConfig = load_config(None::<&str>).unwrap_or_default();
//! assert!(cfg.armory.min_attacks <= cfg.armory.max_attacks);
//! ```

pub mod config;

pub use primer_domain as domain;
