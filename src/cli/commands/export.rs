use crate::cli::commands::analyze::run_analysis;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::export_report;
use std::io;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        files,
        format,
        file,
        employees,
        force,
    } = cmd
    {
        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        let report = run_analysis(files, employees.as_deref(), cfg)?;
        export_report(&report, format.clone(), path, *force)?;
    }
    Ok(())
}
