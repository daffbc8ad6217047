use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use promo_carousel::config::CarouselConfig;
use promo_carousel::replay::{self, ReplayOptions};
use promo_carousel::script::Script;
#[cfg(feature = "gui")]
use promo_carousel::viewer;

/// Auto-advancing promotions carousel.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    timing: TimingArgs,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct TimingArgs {
    /// Milliseconds between automatic advances
    #[arg(long, global = true, default_value_t = 5000)]
    interval_ms: u64,

    /// Milliseconds before autoplay restarts after navigation
    #[arg(long, global = true, default_value_t = 100)]
    reset_delay_ms: u64,

    /// Milliseconds before autoplay is first armed
    #[arg(long, global = true, default_value_t = 500)]
    initial_delay_ms: u64,

    /// Minimum horizontal swipe distance in pixels
    #[arg(long, global = true, default_value_t = 50.0)]
    swipe_threshold: f32,
}

impl TimingArgs {
    fn config(&self) -> Result<CarouselConfig> {
        let config = CarouselConfig {
            autoplay_interval: Duration::from_millis(self.interval_ms),
            reset_delay: Duration::from_millis(self.reset_delay_ms),
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            swipe_threshold: self.swipe_threshold,
        };
        Ok(config.validate()?)
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a timestamped event script against an in-memory page
    Replay(ReplayArgs),
    /// Show a directory of images as a carousel
    #[cfg(feature = "gui")]
    View(ViewArgs),
}

#[derive(Debug, Args)]
struct ReplayArgs {
    /// Event script, one "<ms> <event> [arg]" per line
    script: PathBuf,

    /// Number of slides on the page
    #[arg(long, default_value_t = 4)]
    slides: usize,

    /// Slide marked active in the initial markup
    #[arg(long)]
    active: Option<usize>,

    /// Number of indicators, when it differs from the slide count
    #[arg(long)]
    indicators: Option<usize>,

    /// The page has no prev/next buttons
    #[arg(long)]
    no_controls: bool,

    /// Stop the clock at this time (ms); defaults to one interval past the last event
    #[arg(long)]
    until_ms: Option<u64>,
}

#[cfg(feature = "gui")]
#[derive(Debug, Args)]
struct ViewArgs {
    /// Directory containing the slide images
    directory: PathBuf,

    /// Show images in random order instead of by file name
    #[arg(long)]
    shuffle: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.timing.config()?;

    match cli.command {
        Command::Replay(args) => run_replay(args, config),
        #[cfg(feature = "gui")]
        Command::View(args) => viewer::run(&args.directory, args.shuffle, config),
    }
}

fn run_replay(args: ReplayArgs, config: CarouselConfig) -> Result<()> {
    let source = fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read script {}", args.script.display()))?;
    let script: Script = source
        .parse()
        .with_context(|| format!("failed to parse script {}", args.script.display()))?;

    let options = ReplayOptions {
        slides: args.slides,
        active: args.active,
        indicators: args.indicators,
        controls: !args.no_controls,
        until: args.until_ms.map(Duration::from_millis),
        config,
    };

    let report = replay::run(&script, &options);
    print!("{report}");
    Ok(())
}
