use anyhow::Result;
use clap::Parser;
use construction_patterns::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // RUST_LOG でログレベルを指定（既定は warn）。出力は標準エラーへ
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(cli.command)?;
    println!("{output}");

    Ok(())
}
