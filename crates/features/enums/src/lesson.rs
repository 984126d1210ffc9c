use crate::catalog::{from_name, from_value, members, name_table, praise, stan};
use crate::error::{EnumError, EnumErrorExt};
use primer_domain::cast::CastMember;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Runs the enumeration lesson, writing it to `out`.
///
/// Lookups that are meant to fail are caught and printed; only output errors
/// escape.
///
/// # Errors
/// [`EnumError::Io`] if `out` cannot be written.
#[instrument(name = "enums_lesson", skip_all)]
pub fn run<W: Write>(out: &mut W) -> Result<(), EnumError> {
    info!("Enumeration lesson started");

    writeln!(out, "Hello Gorgeous").context("Writing the greeting")?;

    let my_bestie = stan(&CastMember::Karamo)?;
    writeln!(out, "{}", praise(my_bestie))?;

    for member in members() {
        writeln!(out, "So {member} is number {}, which is SO PERFECT!", member.value())?;
    }

    writeln!(out, "But honestly they are all so great.")?;
    for (name, _) in name_table() {
        writeln!(out, "{name} is so great!")?;
    }

    let least_screen_time = CastMember::Bobby;
    let works_the_most_hours = from_name("BOBBY")?;
    if least_screen_time == works_the_most_hours {
        writeln!(out, "Ugh Bobby works so hard but they don't show it!")?;
    }

    let most_underrated = from_value(5)?;
    if most_underrated == least_screen_time {
        writeln!(out, "Maybe if they would give him more camera time...")?;
    }

    caught(out, stan(&"Eminem"))?;
    caught(out, from_name("FAB"))?;
    caught(out, from_value(6))?;

    info!("Enumeration lesson finished");
    Ok(())
}

/// Prints a deliberately triggered lookup failure, or the member if it succeeded.
fn caught<W: Write>(out: &mut W, result: Result<CastMember, EnumError>) -> Result<(), EnumError> {
    match result {
        Ok(member) => writeln!(out, "{}", praise(member))?,
        Err(err) => {
            debug!(kind = err.kind(), "Caught expected lookup failure");
            writeln!(
                out,
                "Um, Honey, I don't want to tell you how to write your code but... you just got a {}:",
                err.kind()
            )?;
            writeln!(out, "    {err}")?;
        },
    }
    Ok(())
}
