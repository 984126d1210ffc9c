//! Fallible construction, iteration and type checks over [`CastMember`].

use crate::error::EnumError;
use primer_domain::cast::{CastMember, NAME_TABLE};
use std::any::{Any, type_name};
use strum::IntoEnumIterator;
use tracing::trace;

const EXPECTED_TYPE: &str = "CastMember";

/// Resolves a member from any declared name, aliases included.
///
/// # Errors
/// [`EnumError::KeyNotFound`] when no declared name matches exactly.
pub fn from_name(name: &str) -> Result<CastMember, EnumError> {
    trace!(name, "Resolving cast member by name");
    CastMember::from_name(name)
        .ok_or_else(|| EnumError::KeyNotFound { name: name.to_owned(), context: None })
}

/// Resolves a member from its value; aliased values yield the first-declared name.
///
/// # Errors
/// [`EnumError::ValueNotFound`] when no member carries `value`.
pub fn from_value(value: i64) -> Result<CastMember, EnumError> {
    trace!(value, "Resolving cast member by value");
    CastMember::from_value(value).ok_or(EnumError::ValueNotFound { value, context: None })
}

/// Canonical members in declaration order. Aliases are skipped.
pub fn members() -> impl ExactSizeIterator<Item = CastMember> + DoubleEndedIterator + Clone {
    CastMember::iter()
}

/// Every declared name with its member, aliases included, in declaration order.
pub fn name_table() -> impl ExactSizeIterator<Item = (&'static str, CastMember)> + Clone {
    NAME_TABLE.into_iter()
}

/// Accepts only cast members and returns the one it was given.
///
/// # Errors
/// [`EnumError::TypeMismatch`] for any other type, naming the offending type.
pub fn stan<T: Any>(candidate: &T) -> Result<CastMember, EnumError> {
    (candidate as &dyn Any).downcast_ref::<CastMember>().copied().ok_or_else(|| {
        EnumError::TypeMismatch {
            expected: EXPECTED_TYPE,
            found: type_name::<T>(),
            context: Some("Um, Excuse Me, that param is not a CastMember".into()),
        }
    })
}

/// The line printed for a successfully stanned member.
#[must_use]
pub fn praise(member: CastMember) -> String {
    format!("OMG {member} is the BEST!!!1!")
}
