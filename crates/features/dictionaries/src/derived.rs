//! Containers computed from other containers. Sources are never modified.

use crate::princesses::ELEMENTAL;
use primer_domain::weapon::Weapon;
use primer_store::{Mapping, Value};

const POINTS_PER_ATTACK: u32 = 10;

/// Names whose nested `elemental` flag is set, in source order.
///
/// Entries without the flag, or whose value is not a mapping, do not qualify.
#[must_use]
pub fn elemental_names(princesses: &Mapping<Value>) -> Vec<String> {
    princesses.filter_keys(|_, princess| {
        princess.get(ELEMENTAL).ok().and_then(Value::as_flag).unwrap_or(false)
    })
}

/// Number of residents per location. Locations without a resident list are skipped.
#[must_use]
pub fn headcount(locations: &Mapping<Value>) -> Mapping<usize> {
    locations.filter_map(|_, residents| residents.as_list().map(<[String]>::len))
}

/// Ten points per attack, only for combatants that attacked at least once.
#[must_use]
pub fn score(weapons: &Mapping<Weapon>) -> Mapping<u32> {
    weapons.filter_map(|_, weapon| match weapon.attack_count() {
        0 => None,
        attacks => Some(attacks.saturating_mul(POINTS_PER_ATTACK)),
    })
}
