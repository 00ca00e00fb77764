//! # carecost-cli
//!
//! Command-line companion to the carecost server: patient estimates,
//! service forecasts, statistics and trend comparisons over a dataset file.

use chrono::Local;
use clap::{Parser, Subcommand};
use costing_facade::numeric::round2;
use costing_facade::{
    CostingService, ForecastConfig, PatientRecord, ServiceForecastPoint, TrendForecast,
    TrendForecaster,
};
use data_facade::{DatasetConfig, HistoricalDataset};
use std::fs::File;
use std::path::{Path, PathBuf};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "carecost")]
#[command(about = "Healthcare cost estimation and forecasting CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate cost, stay length and risk for one patient
    Estimate {
        #[arg(long, default_value = "45", allow_hyphen_values = true)]
        age: i64,

        #[arg(long, default_value = "M")]
        gender: String,

        /// Diagnosis (Hypertension, Diabetes, Heart Disease, Cancer, Asthma, General)
        #[arg(long, default_value = "General")]
        diagnosis: String,

        #[arg(long, default_value = "5", allow_hyphen_values = true)]
        duration_days: i64,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        previous_admissions: i64,
    },

    /// Forecast daily costs for a service starting tomorrow
    Forecast {
        /// Dataset CSV file
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long, default_value = "Urgences")]
        service: String,

        #[arg(short, long, default_value = "30")]
        days: u32,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Project a service's recent linear trend past its last recorded day
    Trend {
        /// Dataset CSV file
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long, default_value = "Urgences")]
        service: String,

        #[arg(short, long, default_value = "30")]
        days: u32,

        /// Number of most recent records used for the fit
        #[arg(short, long, default_value = "30")]
        window: usize,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Descriptive statistics per service
    Stats {
        /// Dataset CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Limit to one service
        #[arg(short, long)]
        service: Option<String>,
    },

    /// Rank every service by projected cost
    Compare {
        /// Dataset CSV file
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long, default_value = "30")]
        days: u32,
    },
}

fn load_dataset(path: &Path) -> CliResult<HistoricalDataset> {
    let dataset = DatasetConfig::new(path)
        .load()
        .map_err(|e| format!("Failed to load dataset: {}", e))?;

    match dataset.date_range() {
        Some((first, last)) => println!(
            "Loaded {} records from {:?} ({} to {})",
            dataset.len(),
            path.file_name().unwrap_or_default(),
            first,
            last
        ),
        None => println!("Loaded {} records", dataset.len()),
    }

    Ok(dataset)
}

/// Write a JSON document to `path`.
fn write_json(path: &Path, json: &serde_json::Value) -> CliResult<()> {
    let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
    serde_json::to_writer_pretty(&mut file, json)
        .map_err(|e| format!("Failed to write JSON: {}", e))?;
    println!("\nResults written to {:?}", path);
    Ok(())
}

fn points_json(points: &[ServiceForecastPoint]) -> Vec<serde_json::Value> {
    points
        .iter()
        .map(|p| {
            serde_json::json!({
                "date": p.date.to_string(),
                "predicted_cost": p.predicted_cost,
                "confidence_interval": {
                    "min": p.confidence.min,
                    "max": p.confidence.max
                }
            })
        })
        .collect()
}

fn trend_json(trend: &TrendForecast) -> serde_json::Value {
    serde_json::json!({
        "service": trend.service,
        "slope_per_day": round2(trend.slope),
        "direction": trend.direction,
        "mean_predicted_cost": round2(trend.mean_predicted_cost),
        "predictions": points_json(&trend.points)
    })
}

fn print_points(points: &[ServiceForecastPoint], limit: usize) {
    for p in points.iter().take(limit) {
        println!(
            "  {}: {:.2} (interval: {:.2} - {:.2})",
            p.date, p.predicted_cost, p.confidence.min, p.confidence.max
        );
    }
    if points.len() > limit {
        println!("  ... {} more days", points.len() - limit);
    }
}

/// Run estimate command
fn run_estimate(patient: PatientRecord) -> CliResult<()> {
    let service = CostingService::new(None);
    let prediction = service.estimate(&patient);

    println!("Patient: age {}, {}, {}", patient.age, patient.gender, patient.diagnosis);
    println!("Estimated cost: {:.2}", prediction.estimated_cost);
    println!(
        "Confidence interval: {:.2} - {:.2}",
        prediction.confidence.min, prediction.confidence.max
    );
    println!("Predicted length of stay: {} days", prediction.predicted_length_of_stay);
    println!(
        "Risk: {} (score {:.2})",
        prediction.risk_level, prediction.risk_score
    );

    Ok(())
}

/// Run forecast command
fn run_forecast(
    input: PathBuf,
    service: String,
    days: u32,
    seed: Option<u64>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let dataset = load_dataset(&input)?;
    let costing = CostingService::builder()
        .dataset(Some(dataset))
        .config(ForecastConfig {
            seed,
            ..ForecastConfig::default()
        })
        .build();

    let forecast = costing
        .forecast(Some(&service), Some(days), Local::now().date_naive())
        .map_err(|e| e.to_string())?;

    println!("Service: {}", forecast.service);
    println!("Historical average: {:.2}", forecast.average_predicted_cost);
    println!("Forecast {} days:", forecast.horizon_days);
    print_points(&forecast.points, 7);

    if let Some(path) = output {
        let json = serde_json::json!({
            "service": forecast.service,
            "prediction_period_days": forecast.horizon_days,
            "average_predicted_cost": forecast.average_predicted_cost,
            "seed": seed,
            "predictions": points_json(&forecast.points)
        });
        write_json(&path, &json)?;
    }

    Ok(())
}

/// Run trend command
fn run_trend(
    input: PathBuf,
    service: String,
    days: u32,
    window: usize,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let dataset = load_dataset(&input)?;
    let trend = TrendForecaster::new()
        .with_window(window)
        .project(&dataset, &service, days)
        .map_err(|e| e.to_string())?;

    println!("Service: {}", trend.service);
    println!(
        "Trend: {} {:+.2} per day",
        trend.direction.arrow(),
        trend.slope
    );
    println!("Mean projected cost: {:.2}", trend.mean_predicted_cost);
    print_points(&trend.points, 7);

    if let Some(path) = output {
        write_json(&path, &trend_json(&trend))?;
    }

    Ok(())
}

/// Run stats command
fn run_stats(input: PathBuf, service: Option<String>) -> CliResult<()> {
    let dataset = load_dataset(&input)?;
    let costing = CostingService::new(Some(dataset));
    let all = costing
        .stats(service.as_deref())
        .map_err(|e| e.to_string())?;

    for s in &all {
        println!("\n{}:", s.service);
        println!("  Records:          {}", s.records);
        println!("  Period:           {} to {}", s.first_date, s.last_date);
        println!("  Mean cost:        {:.2} (std {:.2})", s.cost_mean, s.cost_std);
        println!("  Cost min/max:     {:.2} - {:.2}", s.cost_min, s.cost_max);
        println!("  Mean patients:    {:.1} (std {:.1})", s.patients_mean, s.patients_std);
        println!("  Mean occupancy:   {:.2}%", s.occupancy_mean * 100.0);
    }

    Ok(())
}

/// Run compare command
fn run_compare(input: PathBuf, days: u32) -> CliResult<()> {
    let dataset = load_dataset(&input)?;
    let costing = CostingService::new(Some(dataset));
    let ranked = costing.compare(Some(days)).map_err(|e| e.to_string())?;

    if ranked.is_empty() {
        return Err("No service has enough records for a trend".to_string());
    }

    println!("\n{:<15} {:>20} {:<10} {}", "Service", "Mean projected cost", "Trend", "Slope");
    println!("{}", "-".repeat(60));
    for t in &ranked {
        println!(
            "{:<15} {:>20.2} {} {:<8} {:>+8.2}/day",
            t.service,
            t.mean_predicted_cost,
            t.direction.arrow(),
            t.direction,
            t.slope
        );
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Estimate {
            age,
            gender,
            diagnosis,
            duration_days,
            previous_admissions,
        } => run_estimate(PatientRecord::new(
            age,
            &gender,
            &diagnosis,
            duration_days,
            previous_admissions,
        )),

        Commands::Forecast {
            input,
            service,
            days,
            seed,
            output,
        } => run_forecast(input, service, days, seed, output),

        Commands::Trend {
            input,
            service,
            days,
            window,
            output,
        } => run_trend(input, service, days, window, output),

        Commands::Stats { input, service } => run_stats(input, service),

        Commands::Compare { input, days } => run_compare(input, days),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
