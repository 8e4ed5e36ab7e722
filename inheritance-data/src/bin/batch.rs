use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use inheritance_core::format::{format_rate, format_won};
use inheritance_core::{DeductionSchedule, InheritanceTaxCalculator, TaxResult, TaxSchedule};
use inheritance_data::{ScheduleLoader, declaration_csv};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Calculate inheritance tax for every declaration in a CSV file.
///
/// See the `declaration_csv` module for the column layout. Results are
/// printed in file order.
#[derive(Parser, Debug)]
#[command(name = "inheritance-batch")]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file with one declaration per row
    #[arg(short, long)]
    file: PathBuf,

    /// Rate schedule CSV to use instead of the built-in 2025 schedule
    #[arg(short, long)]
    schedule: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn print_table(results: &[TaxResult]) {
    println!(
        "{:>4}  {:>18}  {:>18}  {:>7}  {:>18}  {:>18}",
        "row", "net assets", "taxable", "rate", "final tax", "per heir"
    );
    for (idx, r) in results.iter().enumerate() {
        println!(
            "{:>4}  {:>18}  {:>18}  {:>7}  {:>18}  {:>18}",
            idx + 1,
            format_won(r.net_assets),
            format_won(r.taxable_amount),
            format_rate(r.tax_rate),
            format_won(r.final_tax),
            format_won(r.tax_per_heir),
        );
    }
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let schedule = match &args.schedule {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
            ScheduleLoader::load(file)
                .with_context(|| format!("Failed to load schedule: {}", path.display()))?
        }
        None => TaxSchedule::korea_2025().clone(),
    };
    debug!(brackets = schedule.brackets().len(), "rate schedule ready");

    let declarations = declaration_csv::load_from_file(&args.file)
        .with_context(|| format!("Failed to load declarations: {}", args.file.display()))?;
    info!(count = declarations.len(), "declarations parsed");

    let deductions = DeductionSchedule::korea_2025();
    let calculator = InheritanceTaxCalculator::new(&schedule, &deductions);
    let results: Vec<TaxResult> = declarations.iter().map(|d| calculator.calculate(d)).collect();

    match args.format {
        OutputFormat::Table => print_table(&results),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
    }

    Ok(())
}
