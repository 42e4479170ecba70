use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Args, Parser, Subcommand};

mod dataset;
mod fields;
mod filter;
mod models;
mod normalize;
mod report;
mod sample;
mod stats;
mod tabular;

use dataset::Dataset;
use filter::PeriodSelection;

#[derive(Parser)]
#[command(name = "course-panel")]
#[command(about = "Occupancy panel over academy course spreadsheets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("source")
        .args(["csv", "demo"])
        .required(true)
))]
struct SourceArgs {
    /// Course spreadsheet exported as CSV
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Use the built-in sample dataset
    #[arg(long)]
    demo: bool,
}

#[derive(Args)]
struct FilterArgs {
    /// Restrict to one period (YYYY-MM)
    #[arg(long)]
    period: Option<String>,
    /// Restrict to a campus; repeat the flag for several. All campuses
    /// in the file are selected when omitted.
    #[arg(long)]
    campus: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print overall and per-campus occupancy
    Summary {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Write a markdown occupancy report
    Report {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// List the selectable periods found in the data
    Periods {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List the campuses found in the data
    Campuses {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Write records, filter options and aggregates as JSON
    Export {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long, default_value = "panel.json")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { source, filters } => {
            let dataset = load_dataset(&source)?;
            let (period, selected) = active_filters(&dataset, &filters);
            let records = filter::apply_filters(&dataset.records, &period, &selected);
            print_summary(&selected, &records);
        }
        Commands::Report {
            source,
            filters,
            out,
        } => {
            let dataset = load_dataset(&source)?;
            let (period, selected) = active_filters(&dataset, &filters);
            let records = filter::apply_filters(&dataset.records, &period, &selected);
            let report = report::build_report(&period, &selected, &records);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Periods { source } => {
            let dataset = load_dataset(&source)?;
            let periods = filter::available_periods(&dataset.records);
            if periods.is_empty() {
                println!("No dated periods found.");
            } else {
                for option in periods {
                    println!("- {} ({})", option.value, option.label);
                }
            }
        }
        Commands::Campuses { source } => {
            let dataset = load_dataset(&source)?;
            if dataset.campuses.is_empty() {
                println!("No campuses found.");
            } else {
                for campus in &dataset.campuses {
                    println!("- {campus}");
                }
            }
        }
        Commands::Export {
            source,
            filters,
            out,
        } => {
            let dataset = load_dataset(&source)?;
            let (period, selected) = active_filters(&dataset, &filters);
            let records = filter::apply_filters(&dataset.records, &period, &selected);

            #[derive(serde::Serialize)]
            struct PanelExport {
                records: Vec<models::CourseRecord>,
                periods: Vec<models::PeriodOption>,
                campuses: Vec<String>,
                total_students: u32,
                total_capacity: u32,
                occupancy_rate: f64,
                campus_totals: Vec<models::CampusTotals>,
                students_by_shift: Vec<models::ShiftStudents>,
                subjects: Vec<models::SubjectSummary>,
            }

            let payload = PanelExport {
                periods: filter::available_periods(&dataset.records),
                campuses: dataset.campuses.clone(),
                total_students: stats::total_students(&records),
                total_capacity: stats::total_capacity(&records),
                occupancy_rate: stats::occupancy_rate(&records),
                campus_totals: stats::campus_totals(&records),
                students_by_shift: stats::students_by_shift(&records),
                subjects: stats::subject_summaries(&records),
                records,
            };

            let json = serde_json::to_string_pretty(&payload)?;
            std::fs::write(&out, json)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Export written to {}.", out.display());
        }
    }

    Ok(())
}

fn load_dataset(source: &SourceArgs) -> anyhow::Result<Dataset> {
    if source.demo {
        return Ok(dataset::build_dataset(&sample::sample_rows()));
    }
    let path = source
        .csv
        .as_ref()
        .context("either --csv or --demo is required")?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(dataset::from_csv_text(&text))
}

/// The active selections: an explicit period or the whole history, and
/// the explicit campus flags or the dataset's default all-campuses
/// selection.
fn active_filters(dataset: &Dataset, filters: &FilterArgs) -> (PeriodSelection, Vec<String>) {
    let period = match &filters.period {
        Some(key) => PeriodSelection::Period(key.clone()),
        None => PeriodSelection::All,
    };
    let selected = if filters.campus.is_empty() {
        dataset.campuses.clone()
    } else {
        filters.campus.clone()
    };
    (period, selected)
}

fn print_summary(selected: &[String], records: &[models::CourseRecord]) {
    if records.is_empty() {
        if selected.is_empty() {
            println!("No campuses selected.");
        } else {
            println!("No courses match the selected period and campuses.");
        }
        return;
    }

    println!(
        "{} courses, {} students / {} seats ({:.1}% occupancy)",
        records.len(),
        stats::total_students(records),
        stats::total_capacity(records),
        stats::occupancy_rate(records)
    );

    println!("Campuses by headcount:");
    for totals in stats::campus_totals(records) {
        println!(
            "- {}: {} students / {} seats",
            totals.campus, totals.students, totals.capacity
        );
    }

    println!("Students by shift:");
    for bucket in stats::students_by_shift(records) {
        println!("- {}: {}", bucket.shift, bucket.students);
    }
}
