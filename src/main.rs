use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grunge::models::{BotConfig, StyleConfig};
use grunge::services::bot::JPEG_QUALITY;
use grunge::services::{Bot, DirectoryPublisher, HttpImageSource};
use grunge_style::{render_swatch, PixelBuffer};

/// Rounds `run --once` tries before giving up
const ONCE_MAX_ROUNDS: usize = 20;

#[derive(Parser)]
#[command(name = "grunge")]
#[command(about = "Soft grunge image bot")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the posting loop
    Run {
        /// Config file (falls back to GRUNGE_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Publish a single post and exit
        #[arg(long)]
        once: bool,
    },
    /// Stylize a local image file
    Stylize {
        /// Input image (JPEG, PNG, GIF, WebP, BMP)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file; PNG when the extension is .png, JPEG otherwise
        #[arg(short, long)]
        output: PathBuf,

        /// Seed for the palette draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Config file whose style section is used
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Render a random palette as a PNG strip
    Swatch {
        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Seed for the palette draw
        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(long, default_value_t = 256)]
        width: u32,

        #[arg(long, default_value_t = 32)]
        height: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { config, once }) => run_bot(config, once),
        Some(Commands::Stylize {
            input,
            output,
            seed,
            config,
        }) => run_stylize_command(&input, &output, seed, config),
        Some(Commands::Swatch {
            output,
            seed,
            width,
            height,
        }) => run_swatch_command(&output, seed, width, height),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grunge=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run the bot loop (or a single post with `--once`)
fn run_bot(config: Option<PathBuf>, once: bool) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grunge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = BotConfig::resolve_path(config)?;
    let config = BotConfig::load(&path)?;

    let source = HttpImageSource::new(&config.http)?;
    let publisher = DirectoryPublisher::new(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;

    tracing::info!(
        words = config.words.len(),
        output_dir = %config.output_dir.display(),
        seeded = config.seed.is_some(),
        "Starting bot"
    );

    let mut bot = Bot::new(&config, source, publisher)?;
    if once {
        let post = bot.post_once(ONCE_MAX_ROUNDS)?;
        println!("{}", post.caption);
    } else {
        bot.run(None);
    }
    Ok(())
}

/// Stylize one image file (no network needed)
fn run_stylize_command(
    input: &Path,
    output: &Path,
    seed: Option<u64>,
    config: Option<PathBuf>,
) -> anyhow::Result<()> {
    init_cli_logging();

    let style = match config {
        Some(path) => BotConfig::load(&path)?.style,
        None => StyleConfig::default(),
    };
    let stylizer = style.stylizer()?;

    let bytes = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let image = PixelBuffer::decode(&bytes)?;
    tracing::info!(
        width = image.width(),
        height = image.height(),
        "Decoded input"
    );

    let styled = stylizer.stylize(image, &mut rng_from_seed(seed))?;
    let encoded = if has_png_extension(output) {
        styled.encode_png()?
    } else {
        styled.encode_jpeg(JPEG_QUALITY)?
    };

    std::fs::write(output, &encoded).with_context(|| format!("writing {}", output.display()))?;
    println!(
        "Stylized {} -> {} ({}x{}, {} bytes)",
        input.display(),
        output.display(),
        styled.width(),
        styled.height(),
        encoded.len()
    );
    Ok(())
}

fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

/// Render a random palette preview strip
fn run_swatch_command(
    output: &Path,
    seed: Option<u64>,
    width: u32,
    height: u32,
) -> anyhow::Result<()> {
    init_cli_logging();

    let stylizer = StyleConfig::default().stylizer()?;
    let palette = stylizer
        .palette_factory()
        .random_palette(&mut rng_from_seed(seed))?;

    let swatch = render_swatch(&palette, width, height)?;
    let png = swatch.encode_png()?;
    std::fs::write(output, &png).with_context(|| format!("writing {}", output.display()))?;

    let anchors: Vec<String> = palette.anchors().iter().map(|c| c.to_hex()).collect();
    println!("Rendered {} ({} bytes)", output.display(), png.len());
    println!("Anchors: {}", anchors.join(" "));
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var(BotConfig::ENV_VAR).ok();

    println!("Grunge v{VERSION}");
    println!("Soft grunge image bot\n");

    println!("Environment Variables:");
    println!(
        "  {}  = {}",
        BotConfig::ENV_VAR,
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG       = {}",
        std::env::var("RUST_LOG").as_deref().unwrap_or("(not set)")
    );

    if let Some(path) = config_file {
        println!("\nConfig:");
        match BotConfig::load(Path::new(&path)) {
            Ok(config) => {
                println!("  Words:    {}", config.words.len());
                println!("  Output:   {}", config.output_dir.display());
                println!("  Interval: {}s", config.interval_secs);
            }
            Err(e) => println!("  {e}"),
        }
    }

    println!("\nCommands:");
    println!("  grunge run       Run the posting loop");
    println!("  grunge stylize   Stylize a local image file");
    println!("  grunge swatch    Render a random palette strip");
    println!("\nRun 'grunge --help' for more details.");
}
