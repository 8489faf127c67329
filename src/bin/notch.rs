use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use notch::{
    CpuRenderer, FrameRGBA, HoverScript, Millis, NotchConfig, NotchShapes, interpolate, play,
};

#[derive(Parser, Debug)]
#[command(name = "notch", version)]
struct Cli {
    /// Optional JSON config (missing fields use defaults).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single morph frame as a PNG.
    Frame(FrameArgs),
    /// Replay a hover session and write repainted frames as PNGs.
    Play(PlayArgs),
    /// Print the bounds of both endpoint outlines.
    Bounds,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Direction {
    /// Collapsed toward expanded (pointer enter).
    Expand,
    /// Expanded toward collapsed (pointer leave).
    Collapse,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Linear progress in [0, 1]; easing is applied on top.
    #[arg(long)]
    progress: f64,

    /// Which run to sample.
    #[arg(long, value_enum, default_value_t = Direction::Expand)]
    direction: Direction,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Pointer-enter time in ms.
    #[arg(long, default_value_t = 0)]
    enter_at: u64,

    /// Pointer-leave time in ms.
    #[arg(long)]
    leave_at: Option<u64>,

    /// Session end in ms.
    #[arg(long, default_value_t = 1200)]
    until: u64,

    /// Write every n-th painted frame.
    #[arg(long, default_value_t = 1)]
    every: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let config = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Frame(args) => cmd_frame(&config, args),
        Command::Play(args) => cmd_play(&config, args),
        Command::Bounds => cmd_bounds(),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<NotchConfig> {
    let config = match path {
        Some(p) => NotchConfig::from_path(p)?,
        None => NotchConfig::default(),
    }
    .with_env_overrides();
    config.validate()?;
    Ok(config)
}

fn cmd_frame(config: &NotchConfig, args: FrameArgs) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&args.progress) {
        anyhow::bail!("--progress must be within [0, 1], got {}", args.progress);
    }
    let shapes = NotchShapes::load()?;
    let (from, to) = match args.direction {
        Direction::Expand => (&shapes.collapsed, &shapes.expanded),
        Direction::Collapse => (&shapes.expanded, &shapes.collapsed),
    };
    let eased = config.ease.apply(args.progress);
    let path = interpolate(from, to, eased)?;

    let mut surface = FrameRGBA::new(config.surface)?;
    CpuRenderer::new(config.fill_rgba).render(&path, &mut surface)?;
    write_png(&args.out, &surface)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_play(config: &NotchConfig, args: PlayArgs) -> anyhow::Result<()> {
    if args.every == 0 {
        anyhow::bail!("--every must be > 0");
    }
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let script = HoverScript {
        enter_at: Some(Millis(args.enter_at)),
        leave_at: args.leave_at.map(Millis),
        until: Millis(args.until),
    };
    let mut painted = 0u64;
    let mut written = 0u64;
    let stats = play(config, script, |now, surface| {
        if painted % args.every == 0 {
            let out = args.out_dir.join(format!("frame_{written:05}.png"));
            write_png(&out, surface)?;
            tracing::debug!(t_ms = now.0, path = %out.display(), "frame written");
            written += 1;
        }
        painted += 1;
        Ok(())
    })?;

    eprintln!(
        "wrote {written} frames ({} painted, {} ticks) to {}",
        stats.frames,
        stats.ticks,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_bounds() -> anyhow::Result<()> {
    let shapes = NotchShapes::load()?;
    for (name, path) in [
        ("collapsed", &shapes.collapsed),
        ("expanded", &shapes.expanded),
    ] {
        let b = path.bounds();
        println!(
            "{name}: x {:.6}..{:.6} y {:.6}..{:.6} ({} segments)",
            b.x0,
            b.x1,
            b.y0,
            b.y1,
            path.len()
        );
    }
    Ok(())
}

fn write_png(out: &Path, surface: &FrameRGBA) -> notch::NotchResult<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let mut rgba = surface.data.clone();
    if surface.premultiplied {
        unpremultiply_rgba8_in_place(&mut rgba);
    }
    image::save_buffer_with_format(
        out,
        &rgba,
        surface.width,
        surface.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}
