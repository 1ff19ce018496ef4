use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::{HOUR_FIRST, HOUR_LAST};
use crate::core::analyze::analyze_table;
use crate::errors::{AppError, AppResult};
use crate::export::SummaryExport;
use crate::input;
use crate::models::summary::AnalysisReport;
use crate::models::table::RawTable;
use crate::ui::messages::{header, info};
use crate::utils::formatting::format_duration_hhmm;
use crate::utils::table::Table;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        files,
        employees,
        breaks,
        hourly,
    } = cmd
    {
        let report = run_analysis(files, employees.as_deref(), cfg)?;

        print_summary(&report);

        if *breaks {
            print_breaks(&report);
        }
        if *hourly {
            print_hourly(&report);
        }
    }
    Ok(())
}

/// Read and merge the input files, load the reference mapping if any, and
/// run the engine. Shared by `analyze` and `export`.
pub(crate) fn run_analysis(
    files: &[String],
    employees_flag: Option<&str>,
    cfg: &Config,
) -> AppResult<AnalysisReport> {
    let mut merged: Option<RawTable> = None;
    for file in files {
        let table = input::csv::read_table(Path::new(file), cfg)?;
        match merged.as_mut() {
            Some(m) => m.merge(table),
            None => merged = Some(table),
        }
    }
    let table = merged.ok_or(AppError::EmptyInput)?;

    let employees = match employees_flag.or(cfg.employees_file.as_deref()) {
        Some(path) => Some(input::employees::load_employee_map(Path::new(path))?),
        None => None,
    };

    analyze_table(&table, employees.as_ref())
}

fn print_summary(report: &AnalysisReport) {
    let with_company = report.summary.iter().any(|s| s.company.is_some());
    let headers = crate::export::get_headers(with_company);

    let mut table = Table::new(headers.iter().map(|h| h.to_string()).collect());
    for summary in &report.summary {
        let row = SummaryExport::from_summary(summary);
        table.add_row(crate::export::summary_to_row(&row, with_company));
    }

    println!("{}", table.render());
    info(format!("{} worker(s) in report", report.summary.len()));
}

fn print_breaks(report: &AnalysisReport) {
    if report.breaks_by_approver.is_empty() {
        info("No breaks longer than 10 minutes detected.");
        return;
    }

    for (approver, events) in &report.breaks_by_approver {
        header(format!("Breaks: {}", approver));
        for ev in events {
            let from = ev.before.get("timestamp").map(String::as_str).unwrap_or("?");
            let to = ev.after.get("timestamp").map(String::as_str).unwrap_or("?");
            let tier = if ev.bucket == 0 {
                "under 15 min".to_string()
            } else {
                format!("{} min tier", ev.bucket)
            };
            println!(
                "  {} → {}  {}  ({})",
                from,
                to,
                format_duration_hhmm(ev.duration),
                tier
            );
        }
    }
}

fn print_hourly(report: &AnalysisReport) {
    if report.hourly_by_approver.is_empty() {
        info("No records with a usable hour of day.");
        return;
    }

    header("Tasks per hour");
    let mut headers: Vec<String> = vec!["Утвердил".to_string()];
    headers.extend((HOUR_FIRST..=HOUR_LAST).map(|h| format!("{:02}", h)));

    let mut table = Table::new(headers);
    for (approver, slots) in &report.hourly_by_approver {
        let mut row = vec![approver.clone()];
        row.extend(
            (HOUR_FIRST..=HOUR_LAST).map(|h| slots.get(&h).copied().unwrap_or(0).to_string()),
        );
        table.add_row(row);
    }
    println!("{}", table.render());
}
