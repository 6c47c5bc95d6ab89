use anyhow::Result;
use paramgen::cli;

fn main() -> Result<()> {
    cli::run()
}
