use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use daily_summary::cli::Args;
use daily_summary::constants::INSPECT_SAMPLE_ROWS;
use daily_summary::summary::{HeadlineMetrics, classify_branches, region_groups};
use daily_summary::{NormalizedRecord, SummaryConfig, SummaryProcessor};
use std::process;
use tracing::debug;

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    match run(&args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = load_configuration(args)?;
    let processor = SummaryProcessor::new(args.input_path.clone(), args.get_output_path())
        .with_config(config);

    if args.inspect {
        processor
            .inspect(INSPECT_SAMPLE_ROWS)
            .context("Failed to inspect report")?;
        return Ok(());
    }

    let report = processor
        .process()
        .context("Failed to normalize report")?;
    println!(
        "\n{} {} records.",
        "Successfully processed".bright_green().bold(),
        report.records.len()
    );

    if args.summary {
        print_headlines(&report.records);
    }

    Ok(())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("daily_summary={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration (file, then command-line overrides)
fn load_configuration(args: &Args) -> Result<SummaryConfig> {
    let mut config = match &args.config {
        Some(path) => SummaryConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => SummaryConfig::default(),
    };

    if let Some(sheet) = &args.sheet {
        config = config.with_sheet(sheet.clone());
    }
    if args.require_header {
        config = config.with_required_header();
    }

    Ok(config)
}

fn print_headlines(records: &[NormalizedRecord]) {
    let overall = HeadlineMetrics::compute(records, None);
    println!("\n{}", "Headline Metrics".bright_green().bold());
    print_metrics("All regions", &overall);

    for region in region_groups(records) {
        print_metrics(region, &HeadlineMetrics::compute(records, Some(region)));
    }

    println!("\n{}", "Branch Status".bright_green().bold());
    for (status, names) in classify_branches(records) {
        let shown: Vec<&str> = names.iter().take(5).copied().collect();
        println!(
            "  {} {} {}",
            format!("{:?}:", status).bright_cyan(),
            names.len().to_string().bright_white().bold(),
            format!("({})", shown.join(", ")).bright_black()
        );
    }
}

fn print_metrics(label: &str, metrics: &HeadlineMetrics) {
    println!(
        "  {} {:.0} kg, verbals {:.1}%, PODs {:.1}%, {} fails",
        format!("{}:", label).bright_cyan(),
        metrics.total_kgs,
        metrics.verbals_collected_pct,
        metrics.pods_collected_pct,
        metrics.total_fails
    );
}
