use std::fs::create_dir_all;
use std::path::Path;

use directories::ProjectDirs;
use shellexpand::{full, tilde};

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, generic_error, invalid_path_error};

/// Expands `~` and `$VAR` references in a configured path
///
/// Unknown variables leave the string untouched apart from tilde expansion.
pub fn expand_path(path: &str) -> String {
    match full(path) {
        Ok(expanded) => expanded.to_string(),
        Err(_) => tilde(path).to_string(),
    }
}

/// Returns the path as UTF-8 text or an [`invalid_path_error`]
pub fn path_to_string(path: &Path) -> Result<String> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| invalid_path_error(path.to_path_buf()))
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir()).map_err(|e| {
            generic_error(&format!(
                "Failed to create {}: {e}",
                folder.config_dir().display()
            ))
        })?;
    }
    Ok(folder)
}

/// Whether a shell `*` glob would skip this entry
pub fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
