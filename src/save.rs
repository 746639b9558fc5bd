//! Shared file output for calendars and archives.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::types::errors::SaveError;

/// Writes `bytes` to `path`, which must end in `.<extension>` (any case).
///
/// Missing parent directories are created. An existing file is overwritten.
pub(crate) fn write_output(
    path: &str,
    extension: &'static str,
    bytes: &[u8],
) -> Result<(), SaveError> {
    let has_extension: bool = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
    if !has_extension {
        return Err(SaveError::InvalidExtension {
            path: path.to_string(),
            expected: extension,
        });
    }

    let path_ref: &Path = Path::new(path);
    if let Some(parent) = path_ref.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| SaveError::CreateDirectory {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let file = File::create(path_ref).map_err(|source| SaveError::CreateFile {
        path: path.to_string(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .and_then(|_| writer.flush())
        .map_err(|source| SaveError::Write {
            path: path.to_string(),
            source,
        })?;

    debug!("wrote {} bytes to {}", bytes.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_bytes_and_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("out.ics");
        let path = path.to_str().unwrap();
        write_output(path, "ics", b"BEGIN:VCALENDAR\n").unwrap();
        assert_eq!(fs::read(path).unwrap(), b"BEGIN:VCALENDAR\n");
    }

    #[test]
    fn extension_check_ignores_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("FLIGHTS.ZIP");
        assert!(write_output(path.to_str().unwrap(), "zip", b"").is_ok());
    }

    #[test]
    fn rejects_other_extensions() {
        for path in ["out.txt", "out", "ics", "out.ics.bak"] {
            let err = write_output(path, "ics", b"").unwrap_err();
            assert!(matches!(
                err,
                SaveError::InvalidExtension { expected: "ics", .. }
            ));
        }
    }

    #[test]
    fn reports_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"x").unwrap();
        let path = blocker.join("out.ics");
        let err = write_output(path.to_str().unwrap(), "ics", b"").unwrap_err();
        assert!(matches!(err, SaveError::CreateDirectory { .. }));
    }
}
