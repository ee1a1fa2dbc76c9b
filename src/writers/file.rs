//! File writer

use super::Format;
use crate::core::{Event, LogError, Result, Writer};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Appends rendered lines to a single file. Rotation is out of scope; pair
/// this with external rotation tooling if the file must not grow unbounded.
pub struct FileWriter {
    inner: Mutex<BufWriter<File>>,
    format: Format,
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::file_writer(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            inner: Mutex::new(BufWriter::new(file)),
            format: Format::Text,
            path,
        })
    }

    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }
}

impl Writer for FileWriter {
    fn write(&self, event: &Event) {
        let line = self.format.render(event);
        let mut writer = self.inner.lock();
        if let Err(e) = writer.write_all(&line) {
            // Write failures stay this writer's concern; report and drop.
            eprintln!("[fanlog] file writer '{}': {}", self.path.display(), e);
        }
    }

    fn close(&self) {
        if let Err(e) = self.inner.lock().flush() {
            eprintln!(
                "[fanlog] file writer '{}': flush failed: {}",
                self.path.display(),
                e
            );
        }
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        let _ = self.inner.get_mut().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, Severity};
    use std::fs;
    use tempfile::tempdir;

    fn sample_event() -> Event {
        Event {
            severity: Severity::Info,
            created: chrono::DateTime::UNIX_EPOCH,
            source: "app.rs:12".to_string(),
            message: "started".to_string(),
            structured: true,
            fields: vec![Field::int32("port", 8080)],
        }
    }

    #[test]
    fn test_appends_text_lines() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("out.log");

        let writer = FileWriter::new(&path).expect("create writer");
        writer.write(&sample_event());
        writer.write(&sample_event());
        writer.close();

        let content = fs::read_to_string(&path).expect("read log");
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("started port:8080"));
    }

    #[test]
    fn test_json_lines_parse() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("out.jsonl");

        let writer = FileWriter::new(&path)
            .expect("create writer")
            .with_format(Format::Json);
        writer.write(&sample_event());
        writer.close();

        let content = fs::read_to_string(&path).expect("read log");
        let parsed: serde_json::Value =
            serde_json::from_str(content.trim_end()).expect("valid json");
        assert_eq!(parsed["message"], "started");
        assert_eq!(parsed["port"], 8080);
    }

    #[test]
    fn test_new_rejects_bad_path() {
        let result = FileWriter::new("/definitely/not/a/real/dir/out.log");
        assert!(matches!(result, Err(LogError::FileWriter { .. })));
    }
}
