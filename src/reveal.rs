use std::path::Path;
use std::process::Command;

/// Open `path` in the host file manager. Failures are logged and swallowed;
/// revealing the folder is a courtesy, never part of the build contract.
pub fn open_in_file_manager(path: &Path) {
    let status = if cfg!(target_os = "windows") {
        Command::new("explorer").arg(path).status()
    } else if cfg!(target_os = "macos") {
        Command::new("open").arg(path).status()
    } else if cfg!(target_os = "linux") {
        Command::new("xdg-open").arg(path).status()
    } else {
        log::info!("open this folder manually: {}", path.display());
        return;
    };

    match status {
        Ok(exit) if !exit.success() => {
            log::warn!("file manager exited with {} for {}", exit, path.display());
        }
        Ok(_) => {}
        Err(error) => {
            log::warn!("could not open {}: {}", path.display(), error);
        }
    }
}
