//! File helpers for CLI operations.

use crate::error::{AutopgpError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::warn;
use zeroize::Zeroizing;

/// Read a whole file into a buffer that is wiped on drop
pub fn read_file(path: &Path) -> Result<Zeroizing<Vec<u8>>> {
    let contents = fs::read(path).map_err(|e| AutopgpError::io_at(path, e))?;
    Ok(Zeroizing::new(contents))
}

/// Write `contents` to a file only its owner can read.
///
/// The file ends up with mode `0400` on Unix (read-only elsewhere), whether
/// it is created or an existing regular file is overwritten. Anything that
/// is not a regular file is refused. If writing fails, a file created by
/// this call is removed; a pre-existing file is left in place.
pub fn write_private_file(path: &Path, contents: &[u8]) -> Result<()> {
    let (mut file, created) = open_private(path).map_err(|e| AutopgpError::io_at(path, e))?;

    let result = file.write_all(contents).and_then(|_| file.sync_all());
    drop(file);

    finish_write(path, created, result)
}

/// Maps the outcome of a write, cleaning up a file this run created.
fn finish_write(path: &Path, created: bool, result: io::Result<()>) -> Result<()> {
    if let Err(e) = result {
        if created {
            if let Err(remove_err) = fs::remove_file(path) {
                warn!(file = %path.display(), error = %remove_err, "Failed to remove partial output");
            }
        }
        return Err(AutopgpError::io_at(path, e));
    }
    Ok(())
}

/// Opens `path` for writing and restricts its permissions.
///
/// Returns the file and whether it was created by this call.
fn open_private(path: &Path) -> io::Result<(File, bool)> {
    let (file, created) = match fs::metadata(path) {
        Ok(metadata) if !metadata.is_file() => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "output exists and is not a regular file",
            ));
        }
        Ok(_) => {
            let file = OpenOptions::new().write(true).truncate(true).open(path)?;
            (file, false)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => (create_private(path)?, true),
        Err(e) => return Err(e),
    };

    restrict_permissions(&file)?;
    Ok((file, created))
}

#[cfg(unix)]
fn create_private(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o400)
        .open(path)
}

#[cfg(not(unix))]
fn create_private(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

#[cfg(unix)]
fn restrict_permissions(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(0o400))
}

#[cfg(not(unix))]
fn restrict_permissions(file: &File) -> io::Result<()> {
    let mut permissions = file.metadata()?.permissions();
    permissions.set_readonly(true);
    file.set_permissions(permissions)
}
