//! Shared fixtures: an in-memory filesystem and recording sinks.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use cclean::{AuditEvent, AuditSink, CleanError, CleanupEngine, FileSystemProvider, PathConfig};

#[derive(Debug, Clone, Default)]
struct FakeFile {
    size: u64,
    locked: bool,
    delete_error: Option<String>,
}

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, FakeFile>,
    dirs: BTreeSet<PathBuf>,
    unreadable: BTreeSet<PathBuf>,
    bin: Option<PathBuf>,
    bin_size: u64,
    bin_error: Option<String>,
    bin_emptied: bool,
    deleted: Vec<PathBuf>,
}

/// In-memory [`FileSystemProvider`]. Clones share the same state, so a test
/// can keep a handle after giving one to the engine.
#[derive(Debug, Clone, Default)]
pub struct FakeFs(Arc<Mutex<State>>);

impl FakeFs {
    pub fn new() -> Self {
        let fs = Self::default();
        fs.state().bin = Some(PathBuf::from("/bin-store"));
        fs
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.0.lock().unwrap()
    }

    fn insert(&self, path: &str, file: FakeFile) -> &Self {
        self.state().files.insert(PathBuf::from(path), file);
        self
    }

    pub fn file(&self, path: &str, size: u64) -> &Self {
        self.insert(
            path,
            FakeFile {
                size,
                ..FakeFile::default()
            },
        )
    }

    pub fn locked_file(&self, path: &str, size: u64) -> &Self {
        self.insert(
            path,
            FakeFile {
                size,
                locked: true,
                ..FakeFile::default()
            },
        )
    }

    pub fn undeletable_file(&self, path: &str, size: u64, error: &str) -> &Self {
        self.insert(
            path,
            FakeFile {
                size,
                delete_error: Some(error.to_string()),
                ..FakeFile::default()
            },
        )
    }

    pub fn dir(&self, path: &str) -> &Self {
        self.state().dirs.insert(PathBuf::from(path));
        self
    }

    /// A directory that exists but cannot be listed.
    pub fn unreadable_dir(&self, path: &str) -> &Self {
        self.state().unreadable.insert(PathBuf::from(path));
        self
    }

    pub fn recycle_bin(&self, size: u64) -> &Self {
        self.state().bin_size = size;
        self
    }

    pub fn failing_recycle_bin(&self, error: &str) -> &Self {
        self.state().bin_error = Some(error.to_string());
        self
    }

    pub fn without_recycle_bin(&self) -> &Self {
        self.state().bin = None;
        self
    }

    pub fn deleted(&self) -> Vec<PathBuf> {
        self.state().deleted.clone()
    }

    pub fn remaining(&self) -> Vec<PathBuf> {
        self.state().files.keys().cloned().collect()
    }

    pub fn bin_emptied(&self) -> bool {
        self.state().bin_emptied
    }
}

impl FileSystemProvider for FakeFs {
    fn expand(&self, pattern: &str) -> PathBuf {
        PathBuf::from(pattern.replace("%DATA%", "/data"))
    }

    fn enumerate(&self, pattern: &Path) -> Result<Vec<PathBuf>, CleanError> {
        let state = self.state();
        if state.unreadable.contains(pattern) {
            return Err(CleanError::Access {
                path: pattern.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
            });
        }
        Ok(state
            .files
            .keys()
            .filter(|path| path.starts_with(pattern))
            .cloned()
            .collect())
    }

    fn size(&self, path: &Path) -> u64 {
        self.state().files.get(path).map(|f| f.size).unwrap_or(0)
    }

    fn directory_size(&self, path: &Path) -> u64 {
        let state = self.state();
        if state.bin.as_deref() == Some(path) {
            return state.bin_size;
        }
        state
            .files
            .iter()
            .filter(|(p, _)| p.starts_with(path))
            .map(|(_, f)| f.size)
            .sum()
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state();
        state.dirs.contains(path)
            || state.unreadable.contains(path)
            || state.files.keys().any(|p| p.starts_with(path))
    }

    fn is_locked(&self, path: &Path) -> bool {
        self.state().files.get(path).is_some_and(|f| f.locked)
    }

    fn delete(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state();
        let Some(file) = state.files.get(path) else {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        };
        if let Some(error) = &file.delete_error {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, error.clone()));
        }
        state.files.remove(path);
        state.deleted.push(path.to_path_buf());
        Ok(())
    }

    fn recycle_bin_path(&self) -> Option<PathBuf> {
        self.state().bin.clone()
    }

    fn empty_recycle_bin(&self) -> io::Result<()> {
        let mut state = self.state();
        if let Some(error) = &state.bin_error {
            return Err(io::Error::other(error.clone()));
        }
        state.bin_size = 0;
        state.bin_emptied = true;
        Ok(())
    }
}

/// Keeps every audit event for inspection.
#[derive(Debug, Default)]
pub struct RecordingAudit(Mutex<Vec<AuditEvent>>);

impl RecordingAudit {
    pub fn events(&self) -> Vec<AuditEvent> {
        self.0.lock().unwrap().clone()
    }
}

impl AuditSink for RecordingAudit {
    fn record(&self, event: AuditEvent) {
        self.0.lock().unwrap().push(event);
    }
}

pub type ProgressLog = Arc<Mutex<Vec<(String, u8)>>>;

/// Attach a progress sink that records every event.
pub fn record_progress(engine: &mut CleanupEngine) -> ProgressLog {
    let log = ProgressLog::default();
    let sink = Arc::clone(&log);
    engine.set_progress_sink(move |label: &str, percent: u8| {
        sink.lock().unwrap().push((label.to_string(), percent));
    });
    log
}

pub fn percents(log: &ProgressLog) -> Vec<u8> {
    log.lock().unwrap().iter().map(|(_, p)| *p).collect()
}

pub fn paths(temp: &[&str], browser: &[&str], system: &[&str]) -> PathConfig {
    let owned = |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };
    PathConfig::new(owned(temp), owned(browser), owned(system))
}

pub fn engine(fs: &FakeFs, paths: PathConfig) -> (CleanupEngine, Arc<RecordingAudit>) {
    let audit = Arc::new(RecordingAudit::default());
    let engine = CleanupEngine::new(Box::new(fs.clone()), audit.clone(), paths);
    (engine, audit)
}
