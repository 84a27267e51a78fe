use anyhow::{Context, Result};
use clap::Parser;
use tinylink::{config, server};
use tracing_subscriber::EnvFilter;

/// URL shortener service.
#[derive(Parser)]
#[command(name = "tinylink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind, overrides `LISTEN` together with PORT
    #[arg(requires = "port")]
    address: Option<String>,

    /// Port to bind
    port: Option<u16>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::Config::from_env()?;
    if let (Some(address), Some(port)) = (&cli.address, cli.port) {
        config = config.with_listen(address, port);
    }
    config.validate()?;

    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &config::Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
