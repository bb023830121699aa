use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sharecard::{
    CardConfig, CardGenerator, CardKind, CpuSurfaceFactory, FontBook, RecordingSurfaceFactory,
    ShareablePost,
};

#[derive(Parser, Debug)]
#[command(name = "sharecard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the share cards of a post as PNG files.
    Render(RenderArgs),
    /// Print the draw operations of one card as JSON (no fonts needed).
    Plan(PlanArgs),
    /// List the available color palettes.
    Palettes,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Post JSON.
    #[arg(long)]
    post: PathBuf,

    /// Canonical article URL encoded in the QR code.
    #[arg(long)]
    url: String,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Font file to register (repeatable).
    #[arg(long = "font")]
    fonts: Vec<PathBuf>,

    /// Directory whose .ttf/.otf/.ttc files are registered.
    #[arg(long)]
    fonts_dir: Option<PathBuf>,

    /// Renderer configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render a single card instead of the full set.
    #[arg(long)]
    only: Option<CardKind>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Post JSON.
    #[arg(long)]
    post: PathBuf,

    /// Canonical article URL encoded in the QR code.
    #[arg(long)]
    url: String,

    /// Card to lay out.
    #[arg(long, default_value = "hero")]
    kind: CardKind,

    /// Renderer configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args).await,
        Command::Plan(args) => cmd_plan(args).await,
        Command::Palettes => cmd_palettes(),
    }
}

fn load_post(path: &Path) -> anyhow::Result<ShareablePost> {
    let bytes = std::fs::read(path).with_context(|| format!("read post '{}'", path.display()))?;
    ShareablePost::from_json(&bytes).with_context(|| format!("parse post '{}'", path.display()))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CardConfig> {
    let cfg = match path {
        Some(p) => CardConfig::from_path(p).with_context(|| format!("load config '{}'", p.display()))?,
        None => CardConfig::default(),
    };
    let cfg = cfg.with_env_overrides();
    cfg.validate().context("validate config")?;
    Ok(cfg)
}

async fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let post = load_post(&args.post)?;
    let config = load_config(args.config.as_deref())?;

    let mut fonts = FontBook::new();
    if let Some(dir) = &args.fonts_dir {
        fonts
            .register_dir(dir)
            .with_context(|| format!("register fonts in '{}'", dir.display()))?;
    }
    for path in &args.fonts {
        fonts
            .register_file(path)
            .with_context(|| format!("register font '{}'", path.display()))?;
    }
    if fonts.is_empty() {
        anyhow::bail!("no fonts registered; pass --font or --fonts-dir");
    }
    tracing::info!(families = ?fonts.families(), "fonts registered");

    let stagger = config.download_stagger();
    let generator = CardGenerator::new(CpuSurfaceFactory::new(fonts), config)?;

    match args.only {
        Some(kind) => {
            let card = generator.generate(kind, &post, &args.url).await?;
            let path = sharecard::save_card(&card, &args.out)
                .with_context(|| format!("write card to '{}'", args.out.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let set = generator.generate_all(&post, &args.url).await?;
            let paths = sharecard::save_all(&set, &args.out, stagger)
                .await
                .with_context(|| format!("write cards to '{}'", args.out.display()))?;
            for p in paths {
                eprintln!("wrote {}", p.display());
            }
        }
    }
    Ok(())
}

async fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let post = load_post(&args.post)?;
    let config = load_config(args.config.as_deref())?;
    let generator = CardGenerator::new(RecordingSurfaceFactory::default(), config)?;
    let card = generator.generate(args.kind, &post, &args.url).await?;
    let plan = String::from_utf8(card.bytes).context("draw plan is not utf-8")?;
    println!("{plan}");
    Ok(())
}

fn cmd_palettes() -> anyhow::Result<()> {
    for key in sharecard::palette::palette_keys() {
        let p = sharecard::palette::resolve(Some(key));
        println!(
            "{key:<16} primary {} secondary {} background {}",
            p.primary.to_hex(),
            p.secondary.to_hex(),
            p.background.to_hex()
        );
    }
    Ok(())
}
