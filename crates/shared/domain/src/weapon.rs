/// Name given to weapons handed out on demand.
pub const DEFAULT_WEAPON_NAME: &str = "Swordy McSword";

const BATTLE_CRY: &str = "pew";

/// A named weapon that counts how many times it has attacked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weapon {
    name: String,
    attack_count: u32,
}

impl Weapon {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attack_count: 0 }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn attack_count(&self) -> u32 {
        self.attack_count
    }

    /// Attacks `times` times and returns the battle cry, one "pew" per attack.
    pub fn attack(&mut self, times: u32) -> String {
        self.attack_count = self.attack_count.saturating_add(times);
        BATTLE_CRY.repeat(times as usize)
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::new(DEFAULT_WEAPON_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attacks_accumulate() {
        let mut sword = Weapon::new("Sword of Protection");
        assert_eq!(sword.attack(3), "pewpewpew");
        assert_eq!(sword.attack(1), "pew");
        assert_eq!(sword.attack_count(), 4);
        assert_eq!(sword.name(), "Sword of Protection");
    }

    #[test]
    fn default_weapon_is_swordy() {
        let weapon = Weapon::default();
        assert_eq!(weapon.name(), DEFAULT_WEAPON_NAME);
        assert_eq!(weapon.attack_count(), 0);
    }
}
