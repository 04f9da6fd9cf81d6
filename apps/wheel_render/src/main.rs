use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use urania::{load_chart_from_json, ChartSession, ChartSpecGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Full ChartSpec JSON for a rendering surface
    Spec,
    /// Only the aspect edges derived from the chart's patterns
    Edges,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a birth-chart wheel description from chart JSON")]
struct Args {
    #[arg(help = "Path to chart JSON (bodies, ascendant, patterns)")]
    chart: PathBuf,

    /// Wheel settings file; defaults to configs/wheel.toml when present
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    height: Option<f64>,

    #[arg(long, value_enum, default_value_t = Format::Spec)]
    format: Format,

    /// Write output here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = urania_config::load_wheel_settings(args.config.as_deref())?;
    let json = fs::read_to_string(&args.chart)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", args.chart.display()))?;
    let chart = load_chart_from_json(&json)?;
    log::info!(
        "Loaded {} bodies and {} patterns from {}",
        chart.bodies.len(),
        chart.patterns.len(),
        args.chart.display()
    );

    let generator = ChartSpecGenerator::with_config(settings.visual);
    let rendered = match args.format {
        Format::Edges => {
            let edges = chart.edges(generator.visual_config().accept_legacy_patterns);
            log::info!("Derived {} aspect edges", edges.len());
            serde_json::to_string_pretty(&edges)?
        }
        Format::Spec => {
            let width = args.width.unwrap_or(settings.width);
            let height = args.height.unwrap_or(settings.height);
            let mut session = ChartSession::new(generator);
            session.load(chart);
            let spec = session
                .render(width, height)
                .ok_or_else(|| anyhow::anyhow!("No chart loaded"))?;
            log::info!("Generated {} shapes", spec.shapes.len());
            serde_json::to_string_pretty(spec)?
        }
    };

    match args.output {
        Some(path) => fs::write(&path, rendered)
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", path.display()))?,
        None => println!("{}", rendered),
    }
    Ok(())
}
