//! An insertion-ordered, string-keyed store for the dictionary lessons.
//!
//! # Core Features
//!
//! - **Ordered**: iteration follows insertion order, and overwrites keep their slot.
//! - **Three lookup policies**: raising ([`Mapping::get`]), defaulting
//!   ([`Mapping::get_or`]) and autovivifying ([`Mapping::get_or_insert_with`]).
//! - **Derived containers**: [`Mapping::filter_map`] and [`Mapping::filter_keys`] build
//!   new containers and leave the source alone.
//! - **Heterogeneous values**: [`Value`] covers text, integers, flags, string lists and
//!   nested mappings, with [`Mapping::lookup`] for chained access.
//!
//! # Examples
//!
//! ```rust
//! use primer_store::{Mapping, StoreError, Value};
//!
//! let frosta = Mapping::from([("location", Value::from("Kingdom of the Snows"))]);
//! let princesses = Mapping::from([("Frosta", Value::from(frosta))]);
//!
//! let location = princesses.lookup(&["Frosta", "location"])?;
//! assert_eq!(location.as_text(), Some("Kingdom of the Snows"));
//!
//! let missing = princesses.lookup(&["Catra", "location"]);
//! assert!(matches!(missing, Err(StoreError::KeyNotFound { .. })));
//! # Ok::<(), StoreError>(())
//! ```

mod error;
mod mapping;
mod value;

pub use crate::error::{StoreError, StoreErrorExt};
pub use crate::mapping::{Iter, Mapping};
pub use crate::value::Value;
