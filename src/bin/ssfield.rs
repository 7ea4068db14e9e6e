use anyhow::Result;
use sstextfield::cli;

fn main() -> Result<()> {
    let code = cli::run()?;
    std::process::exit(code)
}
