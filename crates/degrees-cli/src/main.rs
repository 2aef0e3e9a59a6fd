//! `degrees` - degrees of separation between two actors.
//!
//! ```text
//! degrees amitabh-bachchan robert-de-niro
//! ```

mod output;
mod progress;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use degrees_core::config::{DegreesConfig, FrontierPolicy, DEFAULT_CONFIG_FILE};
use degrees_core::search::{SearchOutcome, SeparationSearch};
use degrees_core::source::HttpDataSource;
use degrees_core::ActorId;

use output::OutputFormat;
use progress::SpinnerProgress;

/// Degrees of separation between two actors
#[derive(Parser, Debug)]
#[command(name = "degrees")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Identifier of the actor to start from
    start: String,

    /// Identifier of the actor to reach
    end: String,

    /// Configuration file (defaults to ./degrees.toml when present)
    #[arg(short, long, env = "DEGREES_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL actor and movie identifiers are resolved against
    #[arg(long, env = "DEGREES_BASE_URL")]
    base_url: Option<String>,

    /// Stop after this many degrees (0 = unlimited)
    #[arg(long)]
    max_degrees: Option<usize>,

    /// Queue each actor at most once instead of skipping duplicates on dequeue
    #[arg(long)]
    dedupe_frontier: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print search statistics
    #[arg(long)]
    stats: bool,

    /// Hide the progress spinner
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn load_config(&self) -> anyhow::Result<DegreesConfig> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let mut config = DegreesConfig::extract_from(&path)
            .with_context(|| format!("loading {}", path.display()))?;

        if let Some(base_url) = &self.base_url {
            config.source.base_url.clone_from(base_url);
        }
        if let Some(max_degrees) = self.max_degrees {
            config.search.max_degrees = max_degrees;
        }
        if self.dedupe_frontier {
            config.search.frontier_policy = FrontierPolicy::Deduplicate;
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let config = args.load_config()?;
    init_tracing(&config.logging.level);

    let source = HttpDataSource::new(&config.source)?;
    tracing::debug!("Resolving records against {}", source.base_url());

    let start = ActorId::new(args.start.as_str());
    let end = ActorId::new(args.end.as_str());

    let mut progress = SpinnerProgress::new(args.quiet || args.format == OutputFormat::Json);
    let result = SeparationSearch::with_config(&source, config.search)
        .run_observed(&start, &end, &mut progress)
        .await;
    progress.finish();
    let outcome = result?;

    let path = match &outcome {
        SearchOutcome::Connected(sep) => sep.path()?,
        _ => Vec::new(),
    };
    print!(
        "{}",
        output::render(args.format, &outcome, &path, &start, &end, args.stats)?
    );

    Ok(match outcome {
        SearchOutcome::Connected(_) => ExitCode::SUCCESS,
        _ => ExitCode::from(1),
    })
}
