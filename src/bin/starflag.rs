use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "starflag", version)]
struct Cli {
    /// Log resolved geometry (DEBUG level) to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one flag as SVG.
    Render(RenderArgs),
    /// Write the standard set of US flag variants into a directory.
    Batch(BatchArgs),
    /// Rasterize the static frame of a flag to PNG.
    Preview(PreviewArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DatasetChoice {
    Uniform,
    Population,
    Area,
    ElectoralVotes,
}

impl From<DatasetChoice> for starflag::Dataset {
    fn from(choice: DatasetChoice) -> Self {
        match choice {
            DatasetChoice::Uniform => starflag::Dataset::Uniform,
            DatasetChoice::Population => starflag::Dataset::Population,
            DatasetChoice::Area => starflag::Dataset::Area,
            DatasetChoice::ElectoralVotes => starflag::Dataset::ElectoralVotes,
        }
    }
}

#[derive(Args, Debug)]
struct WeightsArgs {
    /// Built-in weight table.
    #[arg(long, value_enum, default_value_t = DatasetChoice::Uniform, conflicts_with = "weights")]
    dataset: DatasetChoice,

    /// JSON object of `{ "region": weight }` covering all 50 states.
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Canton width: `standard`, a fraction of the fly, or `-n` for n stripes tall.
    #[arg(long, default_value = "standard", allow_hyphen_values = true)]
    canton: starflag::CantonSelector,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    weights: WeightsArgs,

    /// Animate against the default flag: `proportional,transition,default` seconds.
    #[arg(long)]
    animate: Option<starflag::Durations>,

    /// Built-in table for the animation's default end instead of the canonical flag.
    #[arg(long, value_enum, conflicts_with = "alt_weights")]
    alt_dataset: Option<DatasetChoice>,

    /// JSON weight table for the animation's default end.
    #[arg(long)]
    alt_weights: Option<PathBuf>,

    /// Canton for the animation's default end; omitted keeps the proportional canton.
    #[arg(long, allow_hyphen_values = true)]
    alt_canton: Option<starflag::CantonSelector>,

    /// Only rescale stars at the default end; stripes stay equal.
    #[arg(long, default_value_t = false)]
    alt_stars_only: bool,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Output directory (created if missing).
    #[arg(long, default_value = "flags")]
    out_dir: PathBuf,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    weights: WeightsArgs,

    /// Output height in pixels; width follows the 19:10 ratio.
    #[arg(long, default_value_t = 650)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_weights(path: &Path) -> anyhow::Result<starflag::WeightTable> {
    let f = File::open(path).with_context(|| format!("open weights '{}'", path.display()))?;
    let table = starflag::WeightTable::from_json_reader(BufReader::new(f))
        .with_context(|| format!("parse weights '{}'", path.display()))?;
    Ok(table)
}

fn load_table(
    dataset: DatasetChoice,
    weights: Option<&Path>,
) -> anyhow::Result<starflag::WeightTable> {
    match weights {
        Some(path) => read_weights(path),
        None => Ok(starflag::Dataset::from(dataset).table()?),
    }
}

fn base_spec(
    args: &WeightsArgs,
    order: &starflag::RegionOrder,
) -> anyhow::Result<starflag::FlagSpec> {
    let table = load_table(args.dataset, args.weights.as_deref())?;
    Ok(starflag::FlagSpec::proportional(&table, order)?.with_canton(args.canton))
}

fn alternate_default(
    args: &RenderArgs,
    order: &starflag::RegionOrder,
) -> anyhow::Result<Option<starflag::AlternateDefault>> {
    let table = match (args.alt_dataset, &args.alt_weights) {
        (_, Some(path)) => read_weights(path)?,
        (Some(ds), None) => starflag::Dataset::from(ds).table()?,
        (None, None) => {
            if args.alt_canton.is_some() || args.alt_stars_only {
                anyhow::bail!("--alt-canton and --alt-stars-only need --alt-dataset or --alt-weights");
            }
            return Ok(None);
        }
    };

    if args.alt_stars_only {
        if args.alt_canton.is_some() {
            anyhow::bail!("--alt-stars-only cannot be combined with --alt-canton");
        }
        let stars = starflag::StarScales::from_table(&table, order)?;
        return Ok(Some(starflag::AlternateDefault::stars_only(stars)));
    }
    Ok(Some(starflag::AlternateDefault::from_table(
        &table,
        order,
        args.alt_canton,
    )?))
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote");
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let order = starflag::RegionOrder::united_states();
    let mut spec = base_spec(&args.weights, &order)?;
    spec.animation = args.animate;
    spec.alternate_default = alternate_default(&args, &order)?;

    let svg = starflag::render_svg(&spec)?;
    write_output(&args.out, svg.as_bytes())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let variants = starflag::standard_variants()?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let run = || {
        variants
            .par_iter()
            .map(|v| {
                let svg = starflag::render_svg(&v.spec)
                    .with_context(|| format!("render variant '{}'", v.name))?;
                write_output(&args.out_dir.join(&v.file_name), svg.as_bytes())
            })
            .collect::<anyhow::Result<Vec<()>>>()
    };

    match args.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads.max(1))
                .build()
                .context("build rayon pool")?;
            pool.install(run)?;
        }
        None => {
            run()?;
        }
    }

    tracing::info!(count = variants.len(), dir = %args.out_dir.display(), "batch complete");
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let order = starflag::RegionOrder::united_states();
    let spec = base_spec(&args.weights, &order)?;
    let svg = starflag::render_svg(&spec)?;
    let raster = starflag::rasterize(&svg, starflag::Canvas::with_height(args.height))?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &raster.data,
        raster.width,
        raster.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    tracing::info!(path = %args.out.display(), "wrote preview");
    Ok(())
}
