//! Princesses, their kingdoms and who lives where.

use primer_store::{Mapping, Value};

pub const LOCATION: &str = "location";
pub const POWER_SOURCE: &str = "power_source";
pub const ELEMENTAL: &str = "elemental";

/// Glimmer, written out as literal pairs.
#[must_use]
pub fn glimmer() -> Mapping<Value> {
    Mapping::from([(LOCATION, Value::from("Bright Moon")), (POWER_SOURCE, Value::from("Moonstone"))])
}

/// Frosta, assembled one assignment at a time.
#[must_use]
pub fn frosta() -> Mapping<Value> {
    let mut frosta = Mapping::new();
    frosta.insert(LOCATION, Value::from("Kingdom of the Snows"));
    frosta.insert(POWER_SOURCE, Value::from("Fractal Flake"));
    frosta
}

/// A mapping of mappings, keyed by princess.
#[must_use]
pub fn elemental_princesses(glimmer: Mapping<Value>, frosta: Mapping<Value>) -> Mapping<Value> {
    Mapping::from([("Glimmer", Value::from(glimmer)), ("Frosta", Value::from(frosta))])
}

/// Residents per location.
#[must_use]
pub fn locations() -> Mapping<Value> {
    Mapping::from([
        ("Crimson Waste", Value::from(vec!["Huntara", "Tung Lashor"])),
        ("Beast Island", Value::from(vec!["Micah", "Entrapta"])),
        ("Mystacor", Value::from(vec!["Castaspella"])),
    ])
}

/// Princess Alliance members, each tagged with an `elemental` flag.
#[must_use]
pub fn alliance() -> Mapping<Value> {
    let member = |location: &str, power_source: &str, elemental: bool| {
        Value::from(Mapping::from([
            (LOCATION, Value::from(location)),
            (POWER_SOURCE, Value::from(power_source)),
            (ELEMENTAL, Value::from(elemental)),
        ]))
    };

    Mapping::from([
        ("Glimmer", member("Bright Moon", "Moonstone", true)),
        ("Entrapta", member("Dryl", "Tech", false)),
        ("Frosta", member("Kingdom of the Snows", "Fractal Flake", true)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_and_assigned_builds_agree_on_shape() {
        let glimmer = glimmer();
        let frosta = frosta();
        assert_eq!(glimmer.keys().collect::<Vec<_>>(), frosta.keys().collect::<Vec<_>>());
        assert_eq!(glimmer.to_string(), "{'location': 'Bright Moon', 'power_source': 'Moonstone'}");
    }

    #[test]
    fn nested_access_reaches_frosta() {
        let princesses = elemental_princesses(glimmer(), frosta());
        let location = princesses.lookup(&["Frosta", LOCATION]).ok().and_then(Value::as_text);
        assert_eq!(location, Some("Kingdom of the Snows"));
    }

    #[test]
    fn locations_keep_insertion_order() {
        assert_eq!(
            locations().keys().collect::<Vec<_>>(),
            ["Crimson Waste", "Beast Island", "Mystacor"]
        );
    }
}
