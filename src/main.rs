// src/main.rs

//! Command-line front end: emits the reference SVG and the PNG mask.

use std::fs;
use std::path::PathBuf;

use anyhow::{ensure, Context};
use clap::Parser;
use log::info;

use osd_logo::{logo, png, raster, svg, GradientSpec, Path, Rgb};

/// Generate the logo OSD mask PNG and its SVG reference from the fixed
/// vector data.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output path for the reference SVG
    #[arg(long, default_value = "res/faceter.svg")]
    out_svg: PathBuf,

    /// Output path for the RGBA mask PNG
    #[arg(long, default_value = "res/faceter_mask.png")]
    out_png: PathBuf,

    /// Target image width in pixels
    #[arg(long, default_value_t = 256)]
    width: u32,

    /// Padding on every side, in pixels
    #[arg(long, default_value_t = 10)]
    pad: u32,

    /// Three comma-separated #RRGGBB gradient stops
    #[arg(long, default_value = logo::DEFAULT_COLORS)]
    colors: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = Args::parse();
    ensure!(args.width > 0, "width must be positive");
    ensure!(
        u64::from(args.width) > 2 * u64::from(args.pad),
        "padding of {} leaves no drawable width at {} pixels",
        args.pad,
        args.width
    );

    let stops: Vec<&str> = args
        .colors
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    ensure!(stops.len() == 3, "expected exactly 3 colors, got {}", stops.len());
    let gradient = GradientSpec::new([
        Rgb::parse(stops[0])?,
        Rgb::parse(stops[1])?,
        Rgb::parse(stops[2])?,
    ]);

    for out in [&args.out_svg, &args.out_png] {
        if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
    }

    let svg_text = svg::reference_svg(&gradient);
    fs::write(&args.out_svg, svg_text)
        .with_context(|| format!("failed to write {}", args.out_svg.display()))?;
    info!("wrote reference SVG to {}", args.out_svg.display());

    let mut path = Path::parse(logo::PATH_DATA).context("failed to interpret logo path data")?;
    path.transform(&logo::TRANSFORM);
    let mask = raster::render_mask(&path, args.width, args.pad, &gradient)?;
    let bytes = png::encode_rgba(mask.width, mask.height, mask.as_bytes())?;
    fs::write(&args.out_png, &bytes)
        .with_context(|| format!("failed to write {}", args.out_png.display()))?;
    info!(
        "wrote {}x{} mask PNG to {} ({} bytes)",
        mask.width,
        mask.height,
        args.out_png.display(),
        bytes.len()
    );

    Ok(())
}
