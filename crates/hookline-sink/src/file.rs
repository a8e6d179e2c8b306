//! JSON-lines file sink.
//!
//! The file is reopened in append mode for every record so external log
//! rotation is picked up. A process-wide lock serialises writers, and each
//! record goes out in a single `write_all`, so concurrent appends never
//! interleave.

use hookline_core::error::SinkError;
use hookline_core::sink::{encode_line, EventSink};
use hookline_core::StructuredEvent;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSink {
    /// Open (creating if needed) the log at `path`. With `create_dirs`,
    /// missing parent directories are created first.
    pub fn open(path: impl AsRef<Path>, create_dirs: bool) -> Result<Self, SinkError> {
        let path = path.as_ref().to_path_buf();
        if create_dirs {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|source| SinkError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        // Fail at startup rather than on the first request.
        open_append(&path)?;
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSink for FileSink {
    fn append(&self, event: &StructuredEvent) -> Result<(), SinkError> {
        let line = encode_line(event)?;
        let _guard = self.lock.lock().map_err(|_| SinkError::Poisoned)?;
        let mut file = open_append(&self.path)?;
        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| SinkError::Io {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(id = %event.id, path = %self.path.display(), "appended event");
        Ok(())
    }
}

fn open_append(path: &Path) -> Result<File, SinkError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| SinkError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookline_core::{RelatedSubject, Subject};
    use pretty_assertions::assert_eq;

    fn event(id: &str) -> StructuredEvent {
        StructuredEvent {
            id: id.into(),
            kind: "deploy".into(),
            subtype: "merge".into(),
            description: "ship".into(),
            subject: Subject::new("repo", "acme/widgets"),
            related_subjects: vec![RelatedSubject::flag("has_migration", false)],
            timestamp: "2024-01-15T10:00:00Z".into(),
        }
    }

    #[test]
    fn appends_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::open(dir.path().join("message.log"), false).unwrap();
        sink.append(&event("a")).unwrap();
        sink.append(&event("b")).unwrap();

        let text = std::fs::read_to_string(sink.path()).unwrap();
        let ids: Vec<String> = text
            .lines()
            .map(|l| serde_json::from_str::<StructuredEvent>(l).unwrap().id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("message.log");
        std::fs::write(&path, "previous\n").unwrap();
        let sink = FileSink::open(&path, false).unwrap();
        sink.append(&event("a")).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("previous\n{"));
    }

    #[test]
    fn creates_parent_directories_on_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs/nested/message.log");
        assert!(FileSink::open(&path, false).is_err());
        let sink = FileSink::open(&path, true).unwrap();
        sink.append(&event("a")).unwrap();
        assert!(path.exists());
    }
}
