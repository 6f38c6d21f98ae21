use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use textloc::viz::{self, Figure};
use textloc::{Label, LabelOptions, Location, Unit, place_labels, resolve_with};

#[derive(Parser, Debug)]
#[command(
    name = "textloc",
    version,
    about = "Place text labels at named positions inside or around plot axes"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the anchor (position and alignment) of a location as JSON.
    Resolve(ResolveArgs),
    /// List every recognized location keyword.
    Locations,
    /// Lay out a grid of axes, label each one and render the figure.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct ResolveArgs {
    /// Location keyword (e.g., northeast, SouthWestOutside) or legacy code (1, 2, 3, 4, -1)
    #[arg(allow_hyphen_values = true)]
    location: String,
    /// Horizontal buffer as a fraction of the axis width.
    #[arg(long, default_value_t = textloc::DEFAULT_BUFFER)]
    hbuffer: f64,
    /// Vertical buffer as a fraction of the axis height.
    #[arg(long, default_value_t = textloc::DEFAULT_BUFFER)]
    vbuffer: f64,
    /// Seed for the `random` location.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Output file (.svg or .png).
    #[arg(long)]
    out: PathBuf,
    /// One label per axes, separated by commas; lines within a label separated by '|'.
    #[arg(long)]
    labels: String,
    /// Location keyword or legacy code shared by all labels.
    #[arg(long, default_value = "northeast", allow_hyphen_values = true)]
    location: String,
    /// Grid rows.
    #[arg(long, default_value_t = 1)]
    rows: usize,
    /// Grid columns (default: enough to hold every label).
    #[arg(long)]
    cols: Option<usize>,
    /// JSON file with label options; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    hbuffer: Option<f64>,
    /// normalized, inches, centimeters, characters, points or pixels
    #[arg(long)]
    hbuffer_unit: Option<String>,
    #[arg(long)]
    vbuffer: Option<f64>,
    /// normalized, inches, centimeters, characters, points or pixels
    #[arg(long)]
    vbuffer_unit: Option<String>,
    /// Seed for the `random` location.
    #[arg(long)]
    seed: Option<u64>,
    /// Text property as key=value (e.g., fontsize=18, color=#4472C4); repeatable.
    #[arg(long = "style")]
    style: Vec<String>,
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 900)]
    width: u32,
    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Canvas resolution used for physical units.
    #[arg(long, default_value_t = viz::DEFAULT_DPI)]
    dpi: f64,
    /// Font file to register (needed for PNG output).
    #[arg(long)]
    font: Option<PathBuf>,
}

fn parse_labels(s: &str) -> Vec<Label> {
    s.split(',')
        .map(|item| {
            let lines: Vec<String> = item.split('|').map(|l| l.trim().to_string()).collect();
            match <[String; 1]>::try_from(lines) {
                Ok([single]) => Label::Line(single),
                Err(lines) => Label::Lines(lines),
            }
        })
        .collect()
}

/// `key=value`; the value is read as JSON when it parses, as a plain string otherwise.
fn parse_style(kv: &str) -> Result<(String, Value)> {
    let (k, v) = kv
        .split_once('=')
        .with_context(|| format!("invalid --style {kv:?}, expected key=value"))?;
    let k = k.trim();
    if k.is_empty() {
        bail!("invalid --style {kv:?}, empty key");
    }
    let v = v.trim();
    let value = serde_json::from_str(v).unwrap_or_else(|_| Value::String(v.to_string()));
    Ok((k.to_string(), value))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Locations => cmd_locations(),
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_resolve(args: ResolveArgs) -> Result<()> {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let location: Location = args.location.parse()?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let anchor = resolve_with(location, args.hbuffer, args.vbuffer, &mut rng);
    println!("{}", serde_json::to_string_pretty(&anchor)?);
    Ok(())
}

fn cmd_locations() -> Result<()> {
    println!(
        "{:<24} {:>4}  {:<8} {:<8} {:<7} {:<7}",
        "keyword", "code", "x", "y", "halign", "valign"
    );
    for loc in Location::ALL {
        let (x, y) = loc.formula();
        let anchor = textloc::resolve(loc, 0.0, 0.0);
        let code = loc.code().map(|c| c.to_string()).unwrap_or_default();
        println!(
            "{:<24} {:>4}  {:<8} {:<8} {:<7} {:<7}",
            loc.keyword(),
            code,
            x,
            y,
            format!("{:?}", anchor.halign).to_lowercase(),
            format!("{:?}", anchor.valign).to_lowercase()
        );
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let mut opts = match &args.config {
        Some(path) => LabelOptions::from_json_file(path)?,
        None => LabelOptions::default(),
    };
    if let Some(b) = args.hbuffer {
        opts.hbuffer = b;
    }
    if let Some(u) = &args.hbuffer_unit {
        opts.hbuffer_unit = u.parse::<Unit>()?;
    }
    if let Some(b) = args.vbuffer {
        opts.vbuffer = b;
    }
    if let Some(u) = &args.vbuffer_unit {
        opts.vbuffer_unit = u.parse::<Unit>()?;
    }
    if args.seed.is_some() {
        opts.seed = args.seed;
    }
    for kv in &args.style {
        let (k, v) = parse_style(kv)?;
        opts.style.insert(k, v);
    }

    let location: Location = args.location.parse()?;
    let labels = parse_labels(&args.labels);
    let rows = args.rows.max(1);
    let cols = args.cols.unwrap_or_else(|| labels.len().div_ceil(rows));

    if let Some(font) = &args.font {
        viz::register_font_file(font)
            .with_context(|| format!("registering font {}", font.display()))?;
    }

    let (fig, mut axes) = Figure::grid(args.width, args.height, rows, cols);
    if args.cols.is_none() {
        // The last row may be partially filled; its surplus cells stay unlabelled.
        axes.truncate(labels.len());
    }
    let mut fig = fig.with_dpi(args.dpi);
    place_labels(&mut fig, &axes, &labels, location, &opts)?;
    fig.render(&args.out)
        .with_context(|| format!("rendering {}", args.out.display()))?;
    eprintln!(
        "Placed {} label(s) at {} and wrote {}",
        labels.len(),
        location,
        args.out.display()
    );
    Ok(())
}
