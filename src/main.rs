use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use portfolio_assets::cli::{Cli, run};
use portfolio_assets::logging::init_logging;

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let report = run(&cli)?;
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;
    Ok(())
}
