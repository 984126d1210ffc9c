use primer_store::StoreError;
use std::borrow::Cow;

/// A specialized [`DictionaryError`] enum of this crate.
#[primer_derive::primer_error]
pub enum DictionaryError {
    /// A lookup that was expected to succeed did not.
    #[error("Store error{}: {source}", format_context(.context))]
    Store { source: StoreError, context: Option<Cow<'static, str>> },

    /// Writing the lesson output failed.
    #[error("Lesson output error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
