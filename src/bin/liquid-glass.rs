use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "liquid-glass", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the displacement, specular and (optional) magnifying maps as PNGs.
    Maps(MapsArgs),
    /// Write an SVG `<filter>` element with the maps inlined.
    Filter(FilterArgs),
    /// Print the 1-D refraction samples for a bezel profile as JSON.
    Samples(SamplesArgs),
}

#[derive(Parser, Debug)]
struct MapsArgs {
    /// Glass parameters JSON.
    #[arg(long)]
    config: PathBuf,

    /// Output directory for the PNG files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct FilterArgs {
    /// Glass parameters JSON.
    #[arg(long)]
    config: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Filter element id.
    #[arg(long, default_value = "liquid-glass")]
    id: String,
}

#[derive(Parser, Debug)]
struct SamplesArgs {
    /// Bezel profile (convex_circle, convex_squircle, concave, lip).
    #[arg(long, default_value = "convex_squircle")]
    profile: liquid_glass::SurfaceProfile,

    /// Glass thickness in logical pixels.
    #[arg(long, default_value_t = 200.0)]
    thickness: f64,

    /// Bezel width in logical pixels.
    #[arg(long, default_value_t = 50.0)]
    bezel_width: f64,

    /// Refractive index of the glass.
    #[arg(long, default_value_t = 1.5)]
    refractive_index: f64,

    /// Number of samples across the bezel.
    #[arg(long, default_value_t = liquid_glass::DEFAULT_SAMPLE_COUNT)]
    samples: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Maps(args) => cmd_maps(args),
        Command::Filter(args) => cmd_filter(args),
        Command::Samples(args) => cmd_samples(args),
    }
}

fn read_params(path: &Path) -> anyhow::Result<liquid_glass::GlassParams> {
    let params = liquid_glass::GlassParams::from_json_file(path)
        .with_context(|| format!("load glass parameters '{}'", path.display()))?;
    params.validate()?;
    Ok(params)
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_maps(args: MapsArgs) -> anyhow::Result<()> {
    let params = read_params(&args.config)?;
    let maps = liquid_glass::generate_glass_maps(&params)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut outputs = vec![
        ("displacement.png", &maps.displacement),
        ("specular.png", &maps.specular),
    ];
    if let Some(mag) = &maps.magnifying {
        outputs.push(("magnifying.png", mag));
    }

    for (name, buf) in outputs {
        let path = args.out_dir.join(name);
        buf.save_png(&path)?;
        tracing::info!(path = %path.display(), width = buf.width, height = buf.height, "wrote map");
    }
    Ok(())
}

fn cmd_filter(args: FilterArgs) -> anyhow::Result<()> {
    let params = read_params(&args.config)?;
    let maps = liquid_glass::generate_glass_maps(&params)?;
    let svg = liquid_glass::assemble_filter(&maps, &params).to_svg(&maps, &args.id)?;

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    tracing::info!(path = %args.out.display(), "wrote filter");
    Ok(())
}

fn cmd_samples(args: SamplesArgs) -> anyhow::Result<()> {
    if args.samples == 0 {
        anyhow::bail!("--samples must be > 0");
    }
    let samples = liquid_glass::precompute_refraction(&liquid_glass::RefractionParams {
        thickness: args.thickness,
        bezel_width: args.bezel_width,
        profile: args.profile,
        refractive_index: args.refractive_index,
        sample_count: args.samples,
    });

    let out = serde_json::json!({
        "profile": args.profile,
        "max_displacement": samples.max_abs(),
        "samples": samples.as_slice(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
