use std::borrow::Cow;

/// A specialized [`EnumError`] enum of this crate.
#[primer_derive::primer_error]
pub enum EnumError {
    /// No declared name (alias or canonical) matches.
    #[error("Key not found{}: {name}", format_context(.context))]
    KeyNotFound { name: String, context: Option<Cow<'static, str>> },

    /// No member carries the requested value.
    #[error("Value not found{}: {value}", format_context(.context))]
    ValueNotFound { value: i64, context: Option<Cow<'static, str>> },

    /// Something other than a cast member was handed to a cast-only consumer.
    #[error("Type mismatch{}: expected {expected}, found {found}", format_context(.context))]
    TypeMismatch { expected: &'static str, found: &'static str, context: Option<Cow<'static, str>> },

    /// Writing the lesson output failed.
    #[error("Lesson output error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}
