//! File and stream reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::CliError;

/// Reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a whole stream as UTF-8 text
    pub fn read_all<R: Read>(mut reader: R) -> Result<String> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read input stream")?;

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "你好world\n第二行";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let err = FileReader::read_text(path).unwrap_err();

        assert!(err.to_string().contains("File not found"));
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let err = FileReader::read_text(&file_path).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        let content = FileReader::read_text(&file_path).unwrap();
        assert_eq!(content, "");
    }

    #[test]
    fn test_read_all_stream() {
        let content = FileReader::read_all(Cursor::new("流 stream".as_bytes())).unwrap();
        assert_eq!(content, "流 stream");
    }

    #[test]
    fn test_read_all_invalid_utf8() {
        let err = FileReader::read_all(Cursor::new(vec![0xffu8, 0xfe])).unwrap_err();
        assert!(err.to_string().contains("Failed to read input stream"));
    }
}
