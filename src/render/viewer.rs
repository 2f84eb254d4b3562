//! Launching the platform's default image viewer.

use std::io;
use std::path::Path;
use std::process::Command;

/// Opens a file in the platform's default viewer, fire-and-forget.
///
/// The spawned process is not waited on; a launch failure is returned so the
/// caller can report it, but it should not fail the run.
pub fn open_viewer(path: &Path) -> io::Result<()> {
    let mut command = platform_opener(path);
    command.spawn()?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn platform_opener(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn platform_opener(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg("start").arg("").arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_opener(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
