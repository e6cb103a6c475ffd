use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use favicloud::{CloudSurface, FaviconConfig, SimulationPlan};

#[derive(Parser, Debug)]
#[command(name = "favicloud", version)]
struct Cli {
    /// Optional animator configuration JSON.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log animator decisions to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Print the icon data URI for a single frame.
    Uri(UriArgs),
    /// Drive the animation loop against a headless page and report what it published.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Clock value in milliseconds.
    #[arg(long, default_value_t = 0.0)]
    time_ms: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct UriArgs {
    /// Clock value in milliseconds.
    #[arg(long, default_value_t = 0.0)]
    time_ms: f64,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Simulated run length in milliseconds.
    #[arg(long)]
    duration_ms: f64,

    /// Display refresh interval in milliseconds.
    #[arg(long, default_value_t = 1000.0 / 60.0)]
    frame_ms: f64,

    /// Hide the page at this time.
    #[arg(long)]
    hide_at: Option<f64>,

    /// Show the page again at this time.
    #[arg(long)]
    show_at: Option<f64>,

    /// Write every published icon as `icon_<n>_<time>ms.png` into this directory.
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let cfg = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Frame(args) => cmd_frame(&cfg, args),
        Command::Uri(args) => cmd_uri(&cfg, args),
        Command::Simulate(args) => cmd_simulate(&cfg, args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<FaviconConfig> {
    match path {
        Some(p) => FaviconConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(FaviconConfig::default()),
    }
}

fn render_at(cfg: &FaviconConfig, time_ms: f64) -> anyhow::Result<CloudSurface> {
    let mut surface = CloudSurface::new(cfg.canvas()?);
    surface
        .render_frame(time_ms)
        .with_context(|| format!("render frame at {time_ms}ms"))?;
    Ok(surface)
}

fn write_png(path: &Path, png: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, png).with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_frame(cfg: &FaviconConfig, args: FrameArgs) -> anyhow::Result<()> {
    let surface = render_at(cfg, args.time_ms)?;
    let png = favicloud::encode_png(surface.pixels(), surface.canvas())?;
    write_png(&args.out, &png)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_uri(cfg: &FaviconConfig, args: UriArgs) -> anyhow::Result<()> {
    use favicloud::IconEncoder as _;

    let surface = render_at(cfg, args.time_ms)?;
    let uri = favicloud::PngDataUriEncoder.encode(&surface)?;
    println!("{uri}");
    Ok(())
}

fn cmd_simulate(cfg: &FaviconConfig, args: SimulateArgs) -> anyhow::Result<()> {
    let plan = SimulationPlan {
        duration_ms: args.duration_ms,
        frame_interval_ms: args.frame_ms,
        hide_at_ms: args.hide_at,
        show_at_ms: args.show_at,
    };
    let report = favicloud::simulate(cfg, &plan)?;

    if let Some(dir) = &args.out_dir {
        for (i, publication) in report.publications.iter().enumerate() {
            let png = favicloud::decode_png_data_uri(&publication.href)?;
            let name = format!("icon_{i:04}_{:.0}ms.png", publication.time_ms);
            write_png(&dir.join(name), &png)?;
        }
        eprintln!(
            "wrote {} icons to {}",
            report.publications.len(),
            dir.display()
        );
    }

    let summary = serde_json::json!({
        "final_state": report.final_state,
        "frames_delivered": report.frames_delivered,
        "stats": report.stats,
        "publication_times_ms": report
            .publications
            .iter()
            .map(|p| p.time_ms)
            .collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
