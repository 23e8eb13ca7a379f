use clap::Parser;
use lineup_cards::{FetchConfig, Layout, LineupPipeline, RunOptions, TemplateStyle};
use std::path::PathBuf;
use tracing::{debug, info};

/// Generate social-media lineup cards for a set of conference sessions.
#[derive(Debug, Parser)]
#[command(name = "lineup-cards", version)]
struct Cli {
    /// The sessionize session ids
    #[arg(required = true)]
    session_ids: Vec<String>,

    /// The sessionize "All data" URL
    #[arg(long, env = "SESSIONIZE_URL")]
    sessionize_url: String,

    /// Number of permutations to do to have multiple options to choose from
    #[arg(long, default_value_t = 10)]
    permutations: u64,

    /// Use the virtual (black) template instead of the regular one
    #[arg(long = "virtual")]
    is_virtual: bool,

    /// Force re-downloading the payload and pictures even if they are cached
    #[arg(long)]
    force: bool,

    /// Label used in the output file names
    #[arg(long, default_value = "toto")]
    name: String,

    #[arg(long, default_value = "tmp")]
    cache_dir: PathBuf,

    #[arg(long, default_value = "Twitter_AM")]
    template_dir: PathBuf,

    #[arg(long, default_value = "out")]
    output_dir: PathBuf,

    /// Log every cache hit and slot binding
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let layout = Layout {
        cache_dir: cli.cache_dir,
        template_dir: cli.template_dir,
        output_dir: cli.output_dir,
    };
    let fetch_config = FetchConfig::default();
    debug!("Layout: {:?}, user agent: {}", layout, fetch_config.user_agent);

    let pipeline = LineupPipeline::new(layout, fetch_config)?;
    let options = RunOptions {
        name: cli.name,
        sessionize_url: cli.sessionize_url,
        session_ids: cli.session_ids,
        permutations: cli.permutations,
        style: TemplateStyle::from_virtual_flag(cli.is_virtual),
        force_refresh: cli.force,
    };

    let written = pipeline.run(&options).await?;
    info!("Generated {} cards", written.len());
    Ok(())
}
