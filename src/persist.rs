//! Writing the sorted document, with backup for in-place runs.
//!
//! When no explicit output path is given the tool overwrites its input. That
//! makes write ordering matter: the original text goes to `<input>.bak` and
//! is synced to disk *before* the input is touched, so a crash between the
//! two writes leaves the original recoverable from either the still-intact
//! input or the backup, never from neither.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write `sorted` to the output path, backing up `original` first when the
/// run is in-place. Returns the path actually written.
///
/// An existing `.bak` from a previous run is overwritten.
pub fn write_output(
    input: &Path,
    output: Option<&Path>,
    original: &str,
    sorted: &str,
) -> io::Result<PathBuf> {
    let target = output.unwrap_or(input);
    if target == input {
        let mut backup = File::create(backup_path(input))?;
        backup.write_all(original.as_bytes())?;
        // Backup must hit the disk before the input is overwritten.
        backup.sync_all()?;
    }
    fs::write(target, sorted)?;
    Ok(target.to_path_buf())
}

/// Backup path: the input path with `.bak` appended (`index.html.bak`, not
/// `index.bak`).
pub fn backup_path(input: &Path) -> PathBuf {
    let mut os = input.as_os_str().to_os_string();
    os.push(".bak");
    PathBuf::from(os)
}
