//! File I/O utilities with atomic writes
//!
//! Data files, settings and delivered attachments all go through the same
//! write-to-temp-then-rename path so a crash never leaves a half-written file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ReportError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, ReportError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| ReportError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ReportError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ReportError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path.as_ref(), |writer| {
        serde_json::to_writer_pretty(writer, data)
            .map_err(|e| ReportError::Storage(format!("Failed to serialize data: {}", e)))
    })
}

/// Write raw bytes to a file atomically
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), ReportError> {
    write_atomic(path.as_ref(), |writer| {
        writer
            .write_all(bytes)
            .map_err(|e| ReportError::Storage(format!("Failed to write data: {}", e)))
    })
}

fn write_atomic<F>(path: &Path, fill: F) -> Result<(), ReportError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), ReportError>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ReportError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| ReportError::Storage(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    let written = fill(&mut writer).and_then(|_| {
        writer
            .flush()
            .map_err(|e| ReportError::Storage(format!("Failed to flush data: {}", e)))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| ReportError::Storage(format!("Failed to sync data: {}", e)))
    });

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ReportError::Storage(format!("Failed to rename temp file: {}", e))
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let data: TestData = read_json(temp_dir.path().join("missing.json")).unwrap();
        assert_eq!(data, TestData::default());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json_atomic(&path, &data).unwrap();
        let loaded: TestData = read_json(&path).unwrap();
        assert_eq!(data, loaded);
        assert!(!temp_dir.path().join("nested").join("test.json.tmp").exists());
    }

    #[test]
    fn test_write_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.xlsx");

        write_bytes_atomic(&path, b"PK\x03\x04").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"PK\x03\x04");
        assert!(!temp_dir.path().join("report.xlsx.tmp").exists());
    }

    #[test]
    fn test_read_invalid_json_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "not json at all").unwrap();

        let result: Result<TestData, _> = read_json(&path);
        assert!(matches!(result, Err(ReportError::Storage(_))));
    }
}
