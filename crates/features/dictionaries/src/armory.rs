//! Weapons handed out on demand, and the dice that decide how often they fire.

use crate::error::DictionaryError;
use primer_domain::config::ArmoryConfig;
use primer_domain::weapon::Weapon;
use primer_store::Mapping;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use tracing::{debug, trace};

/// Combatants who march in the lesson, in order.
pub const ARMY: [&str; 6] = ["She-Ra", "Bow", "Soldier1", "Soldier2", "Soldier3", "Soldier4"];

/// Upper bound for a single roll; each attack prints a "pew".
pub const ATTACK_CAP: u32 = 100;

/// A weapon registry that equips unknown combatants with the default weapon.
///
/// # Example
///
/// ```rust
/// use primer_dictionaries::armory::Armory;
///
/// let mut armory = Armory::new("Swordy McSword");
/// armory.equip("She-Ra", "Sword of Protection");
///
/// assert_eq!(armory.charge("She-Ra", 2), "Sword of Protection attacks: pewpew");
/// assert_eq!(armory.charge("Soldier1", 1), "Swordy McSword attacks: pew");
/// assert_eq!(armory.weapons().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Armory {
    weapons: Mapping<Weapon>,
    default_weapon: String,
}

impl Armory {
    #[must_use]
    pub fn new(default_weapon: impl Into<String>) -> Self {
        Self { weapons: Mapping::new(), default_weapon: default_weapon.into() }
    }

    /// Hands `combatant` a weapon called `weapon`, replacing any previous one.
    pub fn equip(&mut self, combatant: &str, weapon: &str) {
        debug!(combatant, weapon, "Equipping combatant");
        self.weapons.insert(combatant, Weapon::new(weapon));
    }

    /// The combatant's weapon, created from the default on first use.
    pub fn weapon_for(&mut self, combatant: &str) -> &mut Weapon {
        let default_weapon = &self.default_weapon;
        self.weapons.get_or_insert_with(combatant, || Weapon::new(default_weapon.as_str()))
    }

    /// Attacks `times` with the combatant's weapon and returns the battle line.
    pub fn charge(&mut self, combatant: &str, times: u32) -> String {
        let weapon = self.weapon_for(combatant);
        let cry = weapon.attack(times);
        trace!(combatant, times, total = weapon.attack_count(), "Attacked");
        format!("{} attacks: {cry}", weapon.name())
    }

    #[must_use]
    pub const fn weapons(&self) -> &Mapping<Weapon> {
        &self.weapons
    }
}

/// Rolls attack counts within a configured inclusive range.
#[derive(Debug)]
pub struct AttackDice {
    rng: StdRng,
    range: RangeInclusive<u32>,
}

impl AttackDice {
    /// Seeded dice produce the same rolls on every run.
    ///
    /// # Errors
    /// [`DictionaryError::InvalidConfiguration`] if the range is empty, starts at zero
    /// or ends above [`ATTACK_CAP`].
    pub fn seeded(seed: u64, min: u32, max: u32) -> Result<Self, DictionaryError> {
        Self::with_rng(StdRng::seed_from_u64(seed), min, max)
    }

    /// Builds dice from the armory settings, falling back to OS entropy without a seed.
    ///
    /// # Errors
    /// See [`AttackDice::seeded`].
    pub fn from_config(config: &ArmoryConfig) -> Result<Self, DictionaryError> {
        let rng = config.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::with_rng(rng, config.min_attacks, config.max_attacks)
    }

    fn with_rng(rng: StdRng, min: u32, max: u32) -> Result<Self, DictionaryError> {
        if min == 0 {
            return Err(DictionaryError::InvalidConfiguration {
                message: "min_attacks must be greater than zero".into(),
                context: None,
            });
        }
        if min > max {
            return Err(DictionaryError::InvalidConfiguration {
                message: format!("min_attacks ({min}) exceeds max_attacks ({max})").into(),
                context: None,
            });
        }
        if max > ATTACK_CAP {
            return Err(DictionaryError::InvalidConfiguration {
                message: format!("max_attacks ({max}) exceeds the cap of {ATTACK_CAP}").into(),
                context: None,
            });
        }
        Ok(Self { rng, range: min..=max })
    }

    pub fn roll(&mut self) -> u32 {
        self.rng.random_range(self.range.clone())
    }
}
