use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version, value_parser,
};

use crate::config::ConfigOverrides;
use crate::constants::{
    CONFIG_HELP, DEFAULT_CONFIG_PATH, DRY_RUN_HELP, INCLUDE_HIDDEN_HELP, LOCAL_LOGGING_HELP,
    LOG_FILE_DEFAULT, LOG_FILE_HELP, OFFSET_HELP, OUTPUT_HELP, PREFIX_HELP, SORT_HELP,
    SOURCE_ROOT_HELP, SUFFIX_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::utils::{find_project_folder, path_to_string};

/// Defines the command-line interface
///
/// Every option is optional; without any the tool lists the default source
/// root into the default output file.
pub fn build_command() -> Command {
    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .default_value(DEFAULT_CONFIG_PATH);

    let arg_source_root = Arg::new("source_root")
        .short('s')
        .long("source-root")
        .help(SOURCE_ROOT_HELP)
        .value_parser(value_parser!(PathBuf));

    let arg_output = Arg::new("output")
        .short('o')
        .long("output")
        .help(OUTPUT_HELP)
        .value_parser(value_parser!(PathBuf));

    let arg_offset = Arg::new("offset")
        .long("offset")
        .help(OFFSET_HELP)
        .value_parser(value_parser!(usize));

    let arg_prefix = Arg::new("prefix")
        .long("prefix")
        .help(PREFIX_HELP)
        .allow_hyphen_values(true);

    let arg_suffix = Arg::new("suffix")
        .long("suffix")
        .help(SUFFIX_HELP)
        .allow_hyphen_values(true);

    let arg_sort = Arg::new("sort")
        .long("sort")
        .help(SORT_HELP)
        .action(ArgAction::SetTrue);

    let arg_include_hidden = Arg::new("include_hidden")
        .long("include-hidden")
        .help(INCLUDE_HIDDEN_HELP)
        .action(ArgAction::SetTrue);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_config)
        .arg(arg_source_root)
        .arg(arg_output)
        .arg(arg_offset)
        .arg(arg_prefix)
        .arg(arg_suffix)
        .arg(arg_sort)
        .arg(arg_include_hidden)
        .arg(arg_dry)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the configuration file path and whether the user named it
///
/// # Errors
/// Returns an error if the config option is missing
pub fn get_config_path(matches: &ArgMatches) -> Result<(PathBuf, bool)> {
    let path = matches
        .get_one::<String>("config")
        .ok_or_else(|| generic_error("Configuration file option not found"))?;
    let explicit = matches.value_source("config") == Some(ValueSource::CommandLine);
    Ok((PathBuf::from(path), explicit))
}

/// Collects the listing parameters given on the command line
pub fn get_overrides(matches: &ArgMatches) -> ConfigOverrides {
    ConfigOverrides {
        source_root: matches.get_one::<PathBuf>("source_root").cloned(),
        output_path: matches.get_one::<PathBuf>("output").cloned(),
        suffix: matches.get_one::<String>("suffix").cloned(),
        offset: matches.get_one::<usize>("offset").copied(),
        prefix: matches.get_one::<String>("prefix").cloned(),
        sort: matches.get_flag("sort"),
        include_hidden: matches.get_flag("include_hidden"),
    }
}

/// Whether the list should only be printed
pub fn is_dry_run(matches: &ArgMatches) -> bool {
    matches.get_flag("dry")
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Resolves where the log file goes, an empty string meaning nowhere
///
/// # Errors
/// Returns an error if the user config directory cannot be created
pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if filename.is_empty() || matches.get_flag("log_locally") {
        Ok(filename)
    } else {
        let folder = find_project_folder()?;
        path_to_string(&folder.config_dir().join(filename))
    }
}
