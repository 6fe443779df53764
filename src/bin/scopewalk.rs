use anyhow::Result;
use clap::Parser;
use std::io::{IsTerminal, Write};

use scopewalk::cli::args::CliArgs;
use scopewalk::cli::driver;

fn main() -> Result<()> {
    // Initialize tracing if SCOPEWALK_LOG or RUST_LOG is set (zero cost otherwise).
    scopewalk::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let color = std::io::stdout().is_terminal();
    let output = driver::run(&args, color)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
