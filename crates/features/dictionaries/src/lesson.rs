use crate::armory::{ARMY, Armory, AttackDice};
use crate::derived::{elemental_names, headcount, score};
use crate::error::{DictionaryError, DictionaryErrorExt};
use crate::princesses::{LOCATION, POWER_SOURCE, alliance, elemental_princesses, frosta, glimmer, locations};
use primer_domain::config::ArmoryConfig;
use primer_store::Value;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Runs the dictionary lesson, writing it to `out`.
///
/// The missing-key lookup is caught and printed. Only output and dice
/// configuration errors escape.
///
/// # Errors
/// [`DictionaryError::InvalidConfiguration`] for an unusable attack range,
/// [`DictionaryError::Io`] if `out` cannot be written.
#[instrument(name = "dictionaries_lesson", skip_all, fields(seed = ?config.seed))]
pub fn run<W: Write>(out: &mut W, config: &ArmoryConfig) -> Result<(), DictionaryError> {
    let mut dice = AttackDice::from_config(config)?;
    info!("Dictionary lesson started");

    let glimmer = glimmer();
    let frosta = frosta();

    writeln!(out, "Print Test!").context("Writing the print test")?;
    writeln!(out, "glimmer_dict: {glimmer}")?;
    writeln!(out, "frosta_dict: ")?;
    writeln!(out, "{frosta}")?;

    writeln!(out, "Glimmer's location: {}", bare(glimmer.get(LOCATION)?))?;

    let elemental_princesses = elemental_princesses(glimmer, frosta);
    let frosta_home = elemental_princesses
        .lookup(&["Frosta", LOCATION])
        .context("Frosta's location")?;
    writeln!(out, "Frosta's location: {}", bare(frosta_home))?;

    for name in ["Glimmer", "Catra"] {
        let verdict = if elemental_princesses.contains_key(name) { "is" } else { "is not" };
        writeln!(out, "{name} {verdict} an elemental princess")?;
    }

    writeln!(out, "For Loop Example:")?;
    for name in elemental_princesses.keys() {
        let power_source = elemental_princesses.lookup(&[name, POWER_SOURCE])?;
        writeln!(out, "The power source for {name} is {}", bare(power_source))?;
    }

    writeln!(out, "Items Example:")?;
    let locations = locations();
    for (location, residents) in &locations {
        writeln!(out, "The residents in {location} is (are) {residents}.")?;
    }
    let location_string = locations.keys().collect::<Vec<_>>().join(" ");
    writeln!(out, "The locations in She-Ra are: {location_string}")?;

    writeln!(out, "Looking for Krytis")?;
    match locations.get("Krytis") {
        Ok(home) => writeln!(out, "Melog's home is {}", bare(home))?,
        Err(err) => {
            debug!(kind = err.kind(), "Caught expected lookup failure");
            writeln!(out, "Oops, caught a {}: {err}", err.kind())?;
        },
    }
    let unknown = Value::from("Unknown");
    writeln!(out, "Melog's home is {}", bare(locations.get_or("Krytis", &unknown)))?;

    let mut armory = Armory::new(config.default_weapon.as_str());
    armory.equip("She-Ra", "Sword of Protection");
    armory.equip("Bow", "Bow");

    for combatant in ARMY {
        writeln!(out, "Get 'em {combatant}!")?;
        let line = armory.charge(combatant, dice.roll());
        writeln!(out, "{line}")?;
    }

    writeln!(out, "Elemental princesses: {}", elemental_names(&alliance()).join(", "))?;
    writeln!(out, "Residents per location: {}", headcount(&locations))?;
    let score = score(armory.weapons());
    writeln!(out, "Score: {score}")?;

    info!(combatants = armory.weapons().len(), "Dictionary lesson finished");
    Ok(())
}

/// Text without the literal quotes; everything else as displayed.
fn bare(value: &Value) -> String {
    value.as_text().map_or_else(|| value.to_string(), str::to_owned)
}
