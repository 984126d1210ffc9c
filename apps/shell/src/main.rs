mod args;

use crate::args::Cli;
use anyhow::Context;
use clap::Parser;
use primer::domain::config::PrimerConfig;
use primer::kernel::config::load_config;
use primer_logger::Logger;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg: PrimerConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    if let Some(seed) = cli.seed {
        cfg.armory.seed = Some(seed);
    }

    let _log = Logger::from_config(env!("CARGO_BIN_NAME"), &cfg.log)
        .context("Critical: Logger could not be initialized")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command.unwrap_or_default().lesson() {
        Some(lesson) => primer::run(lesson, &mut out, &cfg.armory)?,
        None => primer::run_all(&mut out, &cfg.armory)?,
    }
    out.flush()?;

    Ok(())
}
