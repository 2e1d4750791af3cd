//! CLI entry point for the regional airlines report.
//!
//! Builds the airline table, computes the notes grouping, phrase filters and
//! average delay, and renders the overview and delay charts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use regional_airlines::{
    analysis::Analysis,
    charts::render_all,
    output::{append_record, log_records, print_json, print_pretty},
    table::AirlineTable,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_CHART_DIR: &str = "charts";

#[derive(Parser)]
#[command(name = "regional_airlines")]
#[command(about = "Summaries and charts for Australian regional airlines", long_about = None)]
struct Cli {
    /// CSV file to use instead of the built-in airline table
    #[arg(long, global = true, value_name = "CSV")]
    dataset: Option<String>,

    /// Average delay values (minutes), assigned to the first rows in order.
    /// Defaults to the sample delays for the built-in table; a --dataset
    /// keeps its own AverageDelay column unless this is given
    #[arg(long, global = true, value_delimiter = ',')]
    delays: Option<Vec<f64>>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the summary and render every chart
    Run {
        /// Directory to write chart images to
        #[arg(short, long, default_value = DEFAULT_CHART_DIR)]
        output_dir: String,
    },
    /// Compute and log the summary
    Summary {
        /// CSV file to append the summary row to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Render the charts only
    Charts {
        /// Directory to write chart images to
        #[arg(short, long, default_value = DEFAULT_CHART_DIR)]
        output_dir: String,
    },
    /// Log every airline record
    List,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/regional_airlines.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("regional_airlines.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let table = AirlineTable::load(cli.dataset.as_deref(), cli.delays.as_deref())?;

    match cli.command.unwrap_or(Commands::Run {
        output_dir: DEFAULT_CHART_DIR.to_string(),
    }) {
        Commands::Run { output_dir } => {
            let analysis = Analysis::run(&table)?;
            let summary = analysis.summary();
            print_pretty(&summary);
            print_json(&summary)?;

            let paths = render_all(&analysis, Path::new(&output_dir))?;
            for path in &paths {
                info!(path = %path.display(), "Chart ready");
            }
        }
        Commands::Summary { output } => {
            let summary = Analysis::run(&table)?.summary();
            print_pretty(&summary);
            print_json(&summary)?;

            if let Some(path) = output {
                append_record(&path, &summary)?;
                info!(path = %path, "Summary row appended");
            }
        }
        Commands::Charts { output_dir } => {
            let analysis = Analysis::run(&table)?;
            render_all(&analysis, Path::new(&output_dir))?;
        }
        Commands::List => {
            log_records(table.records());
            info!(total = table.len(), "Airline list summary");
        }
    }

    Ok(())
}
