use clap::Parser;
mod cli;

fn main() -> anyhow::Result<()> {
    cli::init_logging();
    let cli = cli::Cli::parse();
    cli.execute()?;
    Ok(())
}
