use std::borrow::Cow;

/// A specialized [`StoreError`] enum of this crate.
#[primer_derive::primer_error]
pub enum StoreError {
    /// The requested key is absent and no default was supplied.
    #[error("Key not found{}: {key}", format_context(.context))]
    KeyNotFound { key: String, context: Option<Cow<'static, str>> },

    /// A nested lookup reached a value that is not a mapping.
    #[error("Type mismatch{}: expected {expected}, found {found}", format_context(.context))]
    TypeMismatch { expected: &'static str, found: &'static str, context: Option<Cow<'static, str>> },
}

impl StoreError {
    pub(crate) fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into(), context: None }
    }
}
