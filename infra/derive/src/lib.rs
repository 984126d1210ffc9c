#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! primer-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use itself.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// Turns a plain enum into a `thiserror` error with context support.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling `?` on upstream errors.
/// * **Variant Names**: Adds `kind()`, returning the identifier of the raised variant
///   (e.g. `"KeyNotFound"`).
/// * **Internal Fallback**: Provides `From<&str>` and `From<String>` if an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. A `context` field, where present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source must also carry a `context` field.
/// 4. Tuple and unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use primer_derive::primer_error;
/// use std::borrow::Cow;
///
/// #[primer_error]
/// pub enum LessonError {
///     #[error("Output error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Key not found{}: {key}", format_context(.context))]
///     KeyNotFound { key: String, context: Option<Cow<'static, str>> },
/// }
///
/// fn greet(out: &mut impl std::io::Write) -> Result<(), LessonError> {
///     writeln!(out, "Hello Gorgeous").context("Writing the greeting")
/// }
/// ```
#[proc_macro_attribute]
pub fn primer_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
