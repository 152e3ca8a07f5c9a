use anyhow::Result;
use revlist::cli::Cli;
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    revlist::run(&cli, &mut out)
}
