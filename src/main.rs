use std::io::Write;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use trendcolors::config::Config;
use trendcolors::errors::Result;
use trendcolors::fetch::HttpFetcher;
use trendcolors::scrape::ColorScraper;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let config = Config::default();
    let fetcher = HttpFetcher::new(&config)?;
    let colors = ColorScraper::new(config, fetcher).run().await?;

    let json = colors
        .to_pretty_json()
        .inspect_err(|e| tracing::error!("Could not convert to JSON, {}", e))?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;

    Ok(())
}
