//! CLI entry point for grid-sliced image reconstruction

use clap::Parser;
use gridstitch::io::cli::{Cli, ReconstructionJob};

fn main() -> gridstitch::Result<()> {
    let cli = Cli::parse();
    let job = ReconstructionJob::new(cli);
    job.run()?;
    Ok(())
}
