use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use swatchdesk::{OutputFormat, ParseOptions, RenderConfig, Rng64, Variant};

#[derive(Parser, Debug)]
#[command(name = "swatchdesk", version, about)]
struct Cli {
    /// Log at debug level (RUST_LOG still wins when set).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every scheme plus the summary sheets into a directory.
    Render(RenderArgs),
    /// Print the parsed document and its diagnostics as JSON.
    Parse(ParseArgs),
    /// Print the laid-out scene of one scheme variant as JSON.
    Scene(SceneArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Render configuration JSON. Flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base random seed (overrides SWATCHDESK_SEED).
    #[arg(long)]
    seed: Option<u64>,

    /// Canvas width of one mockup, in logical pixels.
    #[arg(long)]
    width: Option<f64>,

    /// Canvas height of one mockup, in logical pixels.
    #[arg(long)]
    height: Option<f64>,

    /// Fail on parse diagnostics and missing tokens.
    #[arg(long)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scheme document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Raster pixels per logical pixel (PNG only).
    #[arg(long)]
    scale: Option<f64>,

    /// Render schemes in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct ParseArgs {
    /// Input scheme document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Exit with an error if the document has problems.
    #[arg(long)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Input scheme document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scheme name as written in its header.
    #[arg(long)]
    scheme: String,

    #[arg(long, value_enum, default_value_t = VariantChoice::Light)]
    variant: VariantChoice,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantChoice {
    Light,
    Dark,
}

impl From<VariantChoice> for Variant {
    fn from(choice: VariantChoice) -> Self {
        match choice {
            VariantChoice::Light => Variant::Light,
            VariantChoice::Dark => Variant::Dark,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Parse(args) => cmd_parse(args),
        Command::Scene(args) => cmd_scene(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the config file, then SWATCHDESK_SEED, then flags.
fn load_config(args: &ConfigArgs) -> anyhow::Result<RenderConfig> {
    let mut cfg = match &args.config {
        Some(path) => RenderConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => RenderConfig::default(),
    }
    .with_env();

    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if let Some(width) = args.width {
        cfg.canvas.width = width;
    }
    if let Some(height) = args.height {
        cfg.canvas.height = height;
    }
    cfg.strict |= args.strict;
    Ok(cfg)
}

fn read_document(path: &Path, strict: bool) -> anyhow::Result<swatchdesk::Parsed> {
    let parsed = swatchdesk::parse_path(path, ParseOptions { strict })
        .with_context(|| format!("parse scheme document '{}'", path.display()))?;
    Ok(parsed)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.config)?;
    if let Some(format) = args.format {
        cfg.format = format;
    }
    if let Some(scale) = args.scale {
        cfg.scale = scale;
    }
    if args.threads.is_some() {
        cfg.threads = args.threads;
    }
    cfg.parallel |= args.parallel;
    cfg.validate().context("invalid render configuration")?;

    let parsed = read_document(&args.in_path, cfg.strict)?;
    let doc = parsed.document;
    if doc.is_empty() {
        tracing::warn!(path = %args.in_path.display(), "document has no schemes");
    }

    let outputs = swatchdesk::render_document(&doc, &cfg)?;
    let written = swatchdesk::write_outputs(&outputs, &args.out, cfg.format, cfg.scale)?;
    for path in &written {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_parse(args: ParseArgs) -> anyhow::Result<()> {
    let parsed = read_document(&args.in_path, args.strict)?;
    print_json(&parsed)
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    cfg.validate().context("invalid render configuration")?;

    let parsed = read_document(&args.in_path, cfg.strict)?;
    let doc = parsed.document;
    let Some(scheme) = doc.scheme(&args.scheme) else {
        let known: Vec<&str> = doc.scheme_names().collect();
        anyhow::bail!(
            "no scheme named '{}' (known: {})",
            args.scheme,
            known.join(", ")
        );
    };

    let rng = Rng64::new(swatchdesk::derive_seed(cfg.seed, &scheme.name));
    let scene = swatchdesk::render(
        scheme.variant(args.variant.into()),
        cfg.canvas_size(),
        rng,
        &cfg.layout_options(),
    );
    print_json(&scene)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).context("write JSON to stdout")?;
    writeln!(out).context("write JSON to stdout")?;
    Ok(())
}
