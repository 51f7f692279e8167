use crate::infrastructure::error::InfrastructureError;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Write a snapshot as pretty-printed JSON, replacing whatever was there.
///
/// This function:
/// 1. Serializes the payload in memory (2-space indent, non-ASCII kept literal, trailing newline).
/// 2. Creates the parent directory if it is missing.
/// 3. Truncates the target and writes the buffer in one call.
///
/// Nothing is touched if serialization fails. There is no temp-file-and-rename:
/// a crash during step 3 can leave a truncated file.
pub fn write_snapshot<P: AsRef<Path>, T: Serialize + ?Sized>(
    path: P,
    payload: &T,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();

    let mut body = serde_json::to_vec_pretty(payload)?;
    body.push(b'\n');

    let write_err = |source| InfrastructureError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(&body).map_err(write_err)?;

    debug!(path = ?path, bytes = body.len(), "snapshot written");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_write_snapshot_creates_file() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("snapshot.json");

        write_snapshot(&file_path, &json!({"name": "Oslo GK", "items": [1, 2]}))?;

        let content = fs::read_to_string(file_path)?;
        assert_eq!(
            content,
            "{\n  \"name\": \"Oslo GK\",\n  \"items\": [\n    1,\n    2\n  ]\n}\n"
        );
        Ok(())
    }

    #[test]
    fn test_write_snapshot_keeps_non_ascii_literal() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("snapshot.json");

        write_snapshot(&file_path, &json!({"status": "Åpen for spill på Bærum"}))?;

        let content = fs::read_to_string(file_path)?;
        assert!(content.contains("Åpen for spill på Bærum"));
        assert!(!content.contains("\\u"));
        Ok(())
    }

    #[test]
    fn test_write_snapshot_overwrites_existing() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("snapshot.json");

        fs::write(&file_path, "x".repeat(4096))?;
        write_snapshot(&file_path, &json!({"v": 2}))?;

        let content = fs::read_to_string(file_path)?;
        assert_eq!(content, "{\n  \"v\": 2\n}\n");
        Ok(())
    }

    #[test]
    fn test_write_snapshot_creates_parent_dirs() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("data").join("nested").join("out.json");

        write_snapshot(&file_path, &json!([]))?;

        assert!(file_path.exists());
        Ok(())
    }

    #[test]
    fn test_write_snapshot_reports_path_on_failure() -> Result<()> {
        let dir = tempdir()?;
        // A directory where the file should go
        let file_path = dir.path().join("taken");
        fs::create_dir(&file_path)?;

        let err = write_snapshot(&file_path, &json!({})).unwrap_err();
        assert!(matches!(err, InfrastructureError::Write { .. }));
        Ok(())
    }
}
