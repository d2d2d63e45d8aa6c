use std::path::{Path, PathBuf};

use crate::shell::split_command_line;

/// Check whether the program of a command line can be started.
///
/// Programs given with a path are checked directly; bare names are looked
/// up in PATH.
pub fn program_available(command_line: &str) -> bool {
    let Ok((program, _)) = split_command_line(command_line) else {
        return false;
    };
    if program.contains(std::path::MAIN_SEPARATOR) || program.contains('/') {
        return is_executable(Path::new(&program));
    }
    find_command_path(&program).is_some()
}

/// Find the full path of a command in PATH.
/// Returns the first matching executable path, or None if not found.
pub fn find_command_path(cmd: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;

    std::env::split_paths(&path_var)
        .map(|dir| dir.join(cmd))
        .find(|path| is_executable(path))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.is_file()
        && path
            .metadata()
            .map(|m| m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
