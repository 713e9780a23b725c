//! Constants used throughout the application
//!
//! This module centralises the default listing parameters, help texts and
//! application identifiers.

/// Default directory whose subdirectories are listed
pub const DEFAULT_SOURCE_ROOT: &str = "/home/ruixuan/03001627";

/// Model file location appended to every subdirectory path
pub const DEFAULT_SUFFIX: &str = "/models/model_normalized.obj";

/// Number of leading characters dropped from `<entry><suffix>`
///
/// Equal to the character length of `/home/ruixuan`, the part of the default
/// source root that is replaced by [`DEFAULT_PREFIX`].
pub const DEFAULT_OFFSET: usize = 13;

/// Literal prepended after the leading characters are dropped
pub const DEFAULT_PREFIX: &str = "/data";

/// Default path of the generated list
pub const DEFAULT_OUTPUT_PATH: &str = "public/assets/filelist.txt";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "filelist.yaml";

/// Default log file name, empty meaning no log file
pub const LOG_FILE_DEFAULT: &str = "";

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// Used to locate the per-user directory that receives log files.
pub const APPLICATION: &str = "model_filelist";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read listing parameters from a specific YAML config file";

/// Help text for the source root command-line option
pub const SOURCE_ROOT_HELP: &str = "Directory whose subdirectories are listed";

/// Help text for the output command-line option
pub const OUTPUT_HELP: &str = "File that receives the list, overwritten on every run";

/// Help text for the offset command-line option
pub const OFFSET_HELP: &str = "Number of leading characters dropped from each <entry><suffix>";

/// Help text for the prefix command-line option
pub const PREFIX_HELP: &str = "Literal prepended to each listed path";

/// Help text for the suffix command-line option
pub const SUFFIX_HELP: &str = "Model file path appended to each subdirectory";

/// Help text for the sort command-line option
pub const SORT_HELP: &str = "Sort subdirectories by path instead of using directory listing order";

/// Help text for the include-hidden command-line option
pub const INCLUDE_HIDDEN_HELP: &str = "Also list subdirectories whose names start with a dot";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Print the list instead of writing the output file";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Place the log file in the working directory instead of the user config directory";
