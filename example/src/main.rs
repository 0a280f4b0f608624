use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use pinlayout::{
    ColumnStrategy, ContainerMetrics, LayoutContext, PinterestLayout, PinterestLayoutArgs,
    geometry::{EdgeInsets, Rect},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Photo heights used when none are given on the command line.
const SAMPLE_HEIGHTS: [f64; 10] = [
    180.0, 120.0, 240.0, 90.0, 200.0, 150.0, 130.0, 210.0, 160.0, 110.0,
];

#[derive(Parser)]
#[command(name = "pinlayout-example")]
#[command(version, about = "Lay out items in masonry columns and print the result as JSON", long_about = None)]
struct Cli {
    /// Number of columns
    #[arg(short, long, default_value_t = pinlayout::args::DEFAULT_COLUMNS)]
    columns: usize,
    /// Padding inset around every cell
    #[arg(short, long, default_value_t = pinlayout::args::DEFAULT_CELL_PADDING)]
    padding: f64,
    /// Width of the container bounds
    #[arg(short, long, default_value_t = 375.0)]
    width: f64,
    /// Left and right content insets, as `LEFT,RIGHT`
    #[arg(long, value_parser = parse_pair)]
    inset: Option<(f64, f64)>,
    /// How the column for each item is picked
    #[arg(long, value_enum, default_value_t = Strategy::RoundRobin)]
    strategy: Strategy,
    /// Also list the items intersecting the vertical band `Y0..Y1`
    #[arg(long, value_parser = parse_band)]
    query: Option<(f64, f64)>,
    /// Intrinsic item heights; a built-in sample is used when omitted
    heights: Vec<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    RoundRobin,
    Shortest,
}

impl From<Strategy> for ColumnStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::RoundRobin => ColumnStrategy::RoundRobin,
            Strategy::Shortest => ColumnStrategy::Shortest,
        }
    }
}

fn parse_pair(value: &str) -> Result<(f64, f64), String> {
    let (left, right) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `LEFT,RIGHT`, got `{value}`"))?;
    Ok((parse_number(left)?, parse_number(right)?))
}

fn parse_band(value: &str) -> Result<(f64, f64), String> {
    let (start, end) = value
        .split_once("..")
        .ok_or_else(|| format!("expected `Y0..Y1`, got `{value}`"))?;
    Ok((parse_number(start)?, parse_number(end)?))
}

fn parse_number(value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse()
        .map_err(|err| format!("invalid number `{value}`: {err}"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let heights = if cli.heights.is_empty() {
        SAMPLE_HEIGHTS.to_vec()
    } else {
        cli.heights
    };
    if let Some(height) = heights.iter().find(|height| !height.is_finite()) {
        bail!("item heights must be finite numbers, got {height}");
    }

    let args = PinterestLayoutArgs::default()
        .columns(cli.columns)
        .cell_padding(cli.padding)
        .column_strategy(cli.strategy.into());
    let mut layout = PinterestLayout::new(args).context("invalid layout arguments")?;

    let (left, right) = cli.inset.unwrap_or((0.0, 0.0));
    let container = ContainerMetrics::new(cli.width, heights.len())
        .with_insets(EdgeInsets::horizontal(left, right));
    let context = LayoutContext::new(&container, &heights);

    let outcome = layout
        .prepare(&context)
        .context("failed to compute the layout")?;
    let extent = layout.content_extent(&context);
    info!(
        ?outcome,
        width = extent.width,
        height = extent.height,
        "layout ready"
    );

    let snapshot = layout.snapshot(&context);
    let json = serde_json::to_string_pretty(&snapshot).context("failed to encode the layout")?;
    println!("{json}");

    if let Some((start, end)) = cli.query {
        let band = Rect::vertical_band(start, end);
        let hits: Vec<usize> = layout
            .attributes_in_rect(band)
            .map(|item| item.index)
            .collect();
        info!(start, end, range = ?layout.visible_range(band, 0), "queried band");
        println!("items intersecting {start}..{end}: {hits:?}");
    }

    Ok(())
}
