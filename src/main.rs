use anyhow::{Context, Result};
use colored::Colorize;
use human_panic::setup_panic;
use log::{debug, error, info};

use model_filelist::cli::{
    get_config_path, get_log_file, get_matches, get_overrides, get_verbosity, is_dry_run,
};
use model_filelist::config::read_or_default;
use model_filelist::logging::{format_message, init_logger};
use model_filelist::workflow::{ListingReport, PathLister};

fn main() -> Result<()> {
    setup_panic!();

    let matches = get_matches();
    let log_file = get_log_file(&matches)?;
    init_logger(get_verbosity(&matches), &log_file).context("Failed to initialise logging")?;

    let (config_path, explicit) = get_config_path(&matches)?;
    let mut config = read_or_default(&config_path, explicit)?;
    get_overrides(&matches).apply(&mut config);
    config.validate()?;
    debug!("Effective configuration: {config:?}");

    let lister = PathLister::local(config);
    let result = if is_dry_run(&matches) {
        lister.preview()
    } else {
        lister.run()
    };

    match result {
        Ok(report) => {
            print_summary(&report);
            Ok(())
        }
        Err(e) => {
            error!("{e}");
            Err(e.into())
        }
    }
}

fn print_summary(report: &ListingReport) {
    if report.is_dry_run() {
        for line in &report.lines {
            println!("{line}");
        }
    }

    let message = format!(
        "{} directories listed, {} entries skipped{}",
        report.directories,
        report.skipped(),
        if report.is_dry_run() { " (dry run)" } else { "" }
    );
    let colored_message = format!(
        "{} directories listed, {} entries skipped{}",
        report.directories.to_string().bold().green(),
        report.skipped().to_string().bold(),
        if report.is_dry_run() { " (dry run)" } else { "" }
    );
    info!("{}", format_message(&message, &colored_message));
}
