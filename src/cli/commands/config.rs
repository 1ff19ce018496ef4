use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                print!("{}", fs::read_to_string(&path)?);
            } else {
                warning(format!(
                    "No configuration file at {} (using defaults)",
                    path.display()
                ));
            }
        }

        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                success("Configuration is valid.");
            } else {
                for p in problems {
                    warning(p);
                }
            }
        }

        if !*print_config && !*check {
            info("Use --print or --check.");
        }
    }
    Ok(())
}
