use std::{fs, path::Path};

use anyhow::Context;

use crate::error::AppError;

/// The name a client-supplied file is stored under: its final path component.
pub fn stored_name(filename: &str) -> Result<String, AppError> {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid file name '{}'", filename)))
}

/// Writes an uploaded report under its client-supplied file name and returns
/// the stored name. Existing files with the same name are overwritten.
pub fn save_report(dir: &Path, filename: &str, content: &[u8]) -> Result<String, AppError> {
    let filename = stored_name(filename)?;

    fs::create_dir_all(dir).context("Failed to create upload directory")?;
    fs::write(dir.join(&filename), content)
        .with_context(|| format!("Failed to save report '{}'", filename))?;

    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_under_client_name() {
        let dir = tempfile::tempdir().unwrap();
        let stored = save_report(dir.path(), "xray.png", b"bytes").unwrap();
        assert_eq!(stored, "xray.png");
        assert_eq!(fs::read(dir.path().join("xray.png")).unwrap(), b"bytes");
    }

    #[test]
    fn same_name_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        save_report(dir.path(), "report.pdf", b"first").unwrap();
        save_report(dir.path(), "report.pdf", b"second").unwrap();
        assert_eq!(fs::read(dir.path().join("report.pdf")).unwrap(), b"second");
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("static").join("uploads");
        save_report(&nested, "a.txt", b"a").unwrap();
        assert!(nested.join("a.txt").exists());
    }

    #[test]
    fn directory_parts_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let stored = save_report(dir.path(), "../../etc/notes.txt", b"x").unwrap();
        assert_eq!(stored, "notes.txt");
        assert!(dir.path().join("notes.txt").exists());

        assert!(matches!(
            save_report(dir.path(), "..", b"x"),
            Err(AppError::BadRequest(_))
        ));
    }
}
