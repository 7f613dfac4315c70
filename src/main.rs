use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use upload_recording::args::Args;

fn main() {
    // Respect RUST_LOG if set, otherwise log progress at info
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    if let Err(e) = run() {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Exits with a usage error before anything is touched
    let args = Args::from_env();

    let config = args.into_config()?;

    upload_recording::run(&config)?;

    Ok(())
}
