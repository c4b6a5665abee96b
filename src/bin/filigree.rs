use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use filigree::{
    BorderSession, BorderStyleParams, CpuRenderer, GridState, MotifAssets, MotifStyle, Rgb8,
    Rng64, Symmetry, Tool, Viewport,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "filigree", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one border frame as a PNG.
    Render(RenderArgs),
    /// Render a numbered PNG sequence of an animated border.
    Animate(AnimateArgs),
    /// Print a randomized parameter file.
    RandomParams(RandomParamsArgs),
    /// Edit a symmetry grid and export it as PNG, SVG or JSON.
    Grid(GridArgs),
}

#[derive(Args, Debug)]
struct BorderArgs {
    /// Parameter JSON; defaults are used for missing fields.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Draw random parameters from this seed instead of reading a file.
    #[arg(long, conflicts_with = "in_path")]
    seed: Option<u64>,

    /// Override the motif style, e.g. "Circles" or "fleur-de-lis".
    #[arg(long)]
    style: Option<MotifStyle>,

    /// Viewport the canvas is fitted into, as WIDTHxHEIGHT.
    #[arg(long, default_value = "1280x800", value_parser = parse_viewport)]
    viewport: Viewport,

    /// Buffer pixels per canvas pixel.
    #[arg(long, default_value_t = 2)]
    supersample: u32,

    /// Image (PNG or SVG) for the "Vintage Scroll" style.
    #[arg(long)]
    vintage_scroll: Option<PathBuf>,

    /// Image (PNG or SVG) for the "Shape 13" style.
    #[arg(long)]
    shape13: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    border: BorderArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    border: BorderArgs,

    /// Directory receiving frame_0000.png, frame_0001.png, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of frames.
    #[arg(long, default_value_t = 20)]
    frames: u32,

    /// Simulated time between frames.
    #[arg(long, default_value_t = 110)]
    frame_ms: u64,

    /// Enable scrolling.
    #[arg(long)]
    scroll: bool,

    /// Oscillate the element size.
    #[arg(long)]
    animate_size: bool,

    /// Oscillate the element spacing.
    #[arg(long)]
    animate_spacing: bool,

    /// Oscillate the layer count.
    #[arg(long)]
    animate_layers: bool,
}

#[derive(Args, Debug)]
struct RandomParamsArgs {
    /// Seed; taken from the clock when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GridFormat {
    Png,
    Svg,
    Json,
}

#[derive(Args, Debug)]
struct GridArgs {
    /// Saved grid JSON to start from.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Edge length of a new grid.
    #[arg(long, default_value_t = filigree::DEFAULT_GRID_SIZE, conflicts_with = "in_path")]
    size: u32,

    /// Mirror rows.
    #[arg(long)]
    horizontal: bool,

    /// Mirror columns.
    #[arg(long)]
    vertical: bool,

    /// Mirror through the center.
    #[arg(long)]
    diagonal: bool,

    /// Edits applied in order, as TOOL:X,Y (tools: pen, eraser, fill).
    #[arg(long = "op", value_parser = parse_grid_op)]
    ops: Vec<(Tool, u32, u32)>,

    /// Output path.
    #[arg(long)]
    out: PathBuf,

    /// Output format; guessed from the extension when omitted.
    #[arg(long, value_enum)]
    format: Option<GridFormat>,

    /// Pixels per cell in PNG/SVG output.
    #[arg(long, default_value_t = 20)]
    cell_px: u32,

    /// Cell color in PNG/SVG output.
    #[arg(long, default_value = "#000000")]
    ink: Rgb8,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Animate(args) => cmd_animate(args),
        Command::RandomParams(args) => cmd_random_params(args),
        Command::Grid(args) => cmd_grid(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut sess = open_session(&args.border, |_| {})?;
    sess.export_png(&args.out)
        .with_context(|| format!("export '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let mut sess = open_session(&args.border, |p| {
        p.animation.scroll |= args.scroll;
        p.animation.size |= args.animate_size;
        p.animation.spacing |= args.animate_spacing;
        p.animation.layers |= args.animate_layers;
    })?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for i in 0..args.frames {
        sess.tick(u64::from(i) * args.frame_ms);
        let path = args.out_dir.join(format!("frame_{i:04}.png"));
        sess.export_png(&path)
            .with_context(|| format!("export '{}'", path.display()))?;
    }
    eprintln!("wrote {} frames to {}", args.frames, args.out_dir.display());
    Ok(())
}

fn cmd_random_params(args: RandomParamsArgs) -> anyhow::Result<()> {
    let seed = args.seed.unwrap_or_else(clock_seed);
    let params = filigree::randomize(&mut Rng64::new(seed));
    let json = params.to_json_pretty()?;
    match args.out {
        Some(path) => {
            write_text(&path, &json)?;
            eprintln!("wrote {} (seed {seed})", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_grid(args: GridArgs) -> anyhow::Result<()> {
    let mut grid = match &args.in_path {
        Some(path) => GridState::from_path(path)?,
        None => GridState::new(args.size)?,
    };
    if args.horizontal || args.vertical || args.diagonal {
        grid.symmetry = Symmetry {
            horizontal: args.horizontal,
            vertical: args.vertical,
            diagonal: args.diagonal,
        };
    }
    for &(tool, x, y) in &args.ops {
        grid.apply(tool, x, y)
            .with_context(|| format!("apply {tool:?} at ({x}, {y})"))?;
    }

    let format = match args.format {
        Some(f) => f,
        None => guess_grid_format(&args.out)?,
    };
    match format {
        GridFormat::Png => {
            let frame = grid.to_rgba(args.cell_px, args.ink)?;
            filigree::write_png(&frame, &args.out)?;
        }
        GridFormat::Svg => write_text(&args.out, &grid.to_svg(args.cell_px, args.ink)?)?,
        GridFormat::Json => write_text(&args.out, &grid.to_json_pretty()?)?,
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn open_session(
    args: &BorderArgs,
    tweak: impl FnOnce(&mut BorderStyleParams),
) -> anyhow::Result<BorderSession> {
    let mut params = match (&args.in_path, args.seed) {
        (Some(path), _) => BorderStyleParams::from_path(path)
            .with_context(|| format!("load params '{}'", path.display()))?,
        (None, Some(seed)) => filigree::randomize(&mut Rng64::new(seed)),
        (None, None) => BorderStyleParams::default(),
    };
    if let Some(style) = args.style {
        params.style = style;
    }
    tweak(&mut params);

    let assets =
        MotifAssets::load_from_paths(args.vintage_scroll.as_deref(), args.shape13.as_deref())?;
    let sess = BorderSession::new(params, args.viewport, assets)?
        .with_renderer(CpuRenderer::new(args.supersample));
    Ok(sess)
}

fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))
}

fn guess_grid_format(path: &Path) -> anyhow::Result<GridFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => Ok(GridFormat::Png),
        Some("svg") => Ok(GridFormat::Svg),
        Some("json") => Ok(GridFormat::Json),
        _ => anyhow::bail!(
            "cannot infer grid format from '{}'; pass --format",
            path.display()
        ),
    }
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok(Viewport::new(w, h))
}

fn parse_grid_op(s: &str) -> Result<(Tool, u32, u32), String> {
    let (tool, xy) = s
        .split_once(':')
        .ok_or_else(|| format!("expected TOOL:X,Y, got '{s}'"))?;
    let tool: Tool = tool.parse().map_err(|e| format!("{e}"))?;
    let (x, y) = xy
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y after the tool, got '{xy}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok((tool, x, y))
}
