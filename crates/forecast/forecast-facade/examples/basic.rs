//! Basic example comparing the three forecasting methods on a small table
//!
//! Run with: cargo run --example basic -p forecast-facade
//! Set RUST_LOG=forecast_core=debug to see step inference.

use forecast_facade::prelude::*;
use forecast_facade::{clean, read_observations, Phase};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const TABLE: &str = "\
date,sales
2024-01-01,100
2024-01-02,102
2024-01-03,105
2024-01-04,103
2024-01-05,108
2024-01-08,110
2024-01-09,107
2024-01-10,112
2024-01-11,115
2024-01-12,113
";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forecast_api=info".into()),
        )
        .init();

    println!("=== Forecast Basic Examples ===\n");

    // 1. Single request straight from table text
    let config = ForecastConfig::default();
    let report = run_table(TABLE.as_bytes(), "sales", &config)?;
    println!("1. {}", report.title());
    println!(
        "   Step: {}s ({})",
        report.step.interval_seconds(),
        report.step.source()
    );
    for record in report.assembled.phase(Phase::Forecast).take(3) {
        println!("   {} -> {:.2}", record.timestamp.date(), record.value);
    }
    println!();

    // 2. Compare methods in one batch
    println!("2. Batch comparison (+5)");
    let series = clean(read_observations(TABLE.as_bytes(), "sales")?)?;
    let configs = [
        ForecastConfig::linear_trend(5),
        ForecastConfig::naive(5),
        ForecastConfig::rolling_mean(5, 3),
    ];
    for report in run_batch("sales", &series, &configs) {
        let report = report?;
        let values: Vec<String> = report
            .result
            .future_values()
            .iter()
            .map(|v| format!("{:.1}", v))
            .collect();
        println!("   {:<24} {:?}", report.result.method().label(), values);
    }
    println!();

    // 3. Export
    let config = ForecastConfig::from_json(r#"{"method":"rolling","horizon":3,"window":4}"#)?;
    let report = run_table(TABLE.as_bytes(), "sales", &config)?;
    println!("3. Export to {}", report.file_name());
    print!("{}", report.to_csv()?);

    Ok(())
}
