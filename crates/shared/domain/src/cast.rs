//! The fab five, as a closed enumeration with one alias.

use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// A cast member. Variants are the canonical identities; `JVN` is an alias of
/// [`CastMember::Jonathan`] and only exists in [`NAME_TABLE`] and in name parsing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumIter,
    strum_macros::EnumCount,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u8)]
pub enum CastMember {
    Karamo = 1,
    #[strum(to_string = "JONATHAN", serialize = "JVN")]
    Jonathan = 2,
    Antoni = 3,
    Tan = 4,
    Bobby = 5,
}

/// Every declared name in declaration order, aliases included.
pub const NAME_TABLE: [(&str, CastMember); 6] = [
    ("KARAMO", CastMember::Karamo),
    ("JONATHAN", CastMember::Jonathan),
    ("JVN", CastMember::Jonathan),
    ("ANTONI", CastMember::Antoni),
    ("TAN", CastMember::Tan),
    ("BOBBY", CastMember::Bobby),
];

impl CastMember {
    /// Canonical (first-declared) name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self as i64
    }

    /// Resolves any declared name, aliases included. Case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name).ok()
    }

    /// Resolves a value to the first-declared member carrying it.
    #[must_use]
    pub fn from_value(value: i64) -> Option<Self> {
        Self::iter().find(|member| member.value() == value)
    }
}

impl fmt::Display for CastMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn canonical_members_exclude_the_alias() {
        let names: Vec<_> = CastMember::iter().map(CastMember::name).collect();
        assert_eq!(names, ["KARAMO", "JONATHAN", "ANTONI", "TAN", "BOBBY"]);
        assert_eq!(CastMember::COUNT, 5);
    }

    #[test]
    fn name_table_agrees_with_parsing() {
        for (name, member) in NAME_TABLE {
            assert_eq!(CastMember::from_name(name), Some(member), "{name}");
        }
    }

    #[test]
    fn alias_resolves_to_canonical_member() {
        let jvn = CastMember::from_name("JVN");
        assert_eq!(jvn, Some(CastMember::Jonathan));
        assert_eq!(jvn.map(CastMember::name), Some("JONATHAN"));
        assert_eq!(CastMember::from_value(2), Some(CastMember::Jonathan));
    }

    #[test]
    fn unknown_names_and_values_are_absent() {
        assert_eq!(CastMember::from_name("bobby"), None);
        assert_eq!(CastMember::from_name("Eminem"), None);
        assert_eq!(CastMember::from_value(0), None);
        assert_eq!(CastMember::from_value(6), None);
    }
}
