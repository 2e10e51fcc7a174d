use clap::Parser;

fn main() -> anyhow::Result<()> {
    noughts::cli::run(noughts::cli::Args::parse())
}
