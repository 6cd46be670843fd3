//! Filesystem capability used by the cleanup engine.
//!
//! The engine never touches the disk directly: it goes through a
//! [`FileSystemProvider`], so tests can substitute an in-memory fake and the
//! real implementation can stay platform-specific.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::CleanError;
use crate::utils;

/// Everything the engine needs from the filesystem.
pub trait FileSystemProvider: Send + Sync {
    /// Resolve environment-style tokens in a configured pattern.
    fn expand(&self, pattern: &str) -> PathBuf;

    /// All regular files matched by an expanded pattern, directories walked
    /// recursively.
    fn enumerate(&self, pattern: &Path) -> Result<Vec<PathBuf>, CleanError>;

    fn size(&self, path: &Path) -> u64;

    /// Aggregate size of every file below `path`.
    fn directory_size(&self, path: &Path) -> u64;

    fn exists(&self, path: &Path) -> bool;

    /// Whether another process currently holds the file open exclusively.
    fn is_locked(&self, path: &Path) -> bool;

    fn delete(&self, path: &Path) -> io::Result<()>;

    /// Location of the recycle bin, if this platform has one we can find.
    fn recycle_bin_path(&self) -> Option<PathBuf>;

    fn empty_recycle_bin(&self) -> io::Result<()>;
}

/// [`FileSystemProvider`] backed by the real filesystem.
#[derive(Debug, Default, Clone)]
pub struct LocalFileSystem {
    recycle_bin: Option<PathBuf>,
}

impl LocalFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `path` as the recycle bin instead of the platform location.
    pub fn with_recycle_bin(path: impl Into<PathBuf>) -> Self {
        Self {
            recycle_bin: Some(path.into()),
        }
    }

    fn walk_files(root: &Path, files: &mut Vec<PathBuf>) -> Result<(), CleanError> {
        for entry in WalkDir::new(root).follow_links(false) {
            match entry {
                Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                Ok(_) => {}
                Err(err) if err.depth() == 0 => {
                    let source = err
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("filesystem loop"));
                    return Err(CleanError::Access {
                        path: root.to_path_buf(),
                        source,
                    });
                }
                Err(err) => {
                    tracing::debug!(root = %root.display(), error = %err, "skipping unreadable entry");
                }
            }
        }
        Ok(())
    }
}

impl FileSystemProvider for LocalFileSystem {
    fn expand(&self, pattern: &str) -> PathBuf {
        PathBuf::from(expand_tokens(pattern, |name| std::env::var(name).ok()))
    }

    fn enumerate(&self, pattern: &Path) -> Result<Vec<PathBuf>, CleanError> {
        let mut files = Vec::new();

        if !has_wildcard(pattern) {
            if pattern.is_dir() {
                Self::walk_files(pattern, &mut files)?;
            } else if pattern.is_file() {
                files.push(pattern.to_path_buf());
            }
            return Ok(files);
        }

        let text = pattern.to_string_lossy();
        let matches = glob::glob(&text).map_err(|source| CleanError::Pattern {
            pattern: text.to_string(),
            source,
        })?;

        for matched in matches {
            match matched {
                Ok(path) if path.is_dir() => Self::walk_files(&path, &mut files)?,
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(err) => {
                    tracing::debug!(path = %err.path().display(), error = %err.error(), "skipping unreadable match");
                }
            }
        }
        Ok(files)
    }

    fn size(&self, path: &Path) -> u64 {
        path.metadata().map(|m| m.len()).unwrap_or(0)
    }

    fn directory_size(&self, path: &Path) -> u64 {
        utils::dir_size(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_locked(&self, path: &Path) -> bool {
        locked(path)
    }

    fn delete(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn recycle_bin_path(&self) -> Option<PathBuf> {
        self.recycle_bin.clone().or_else(default_recycle_bin)
    }

    fn empty_recycle_bin(&self) -> io::Result<()> {
        let Some(bin) = self.recycle_bin_path() else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "recycle bin location is unknown",
            ));
        };

        // A freedesktop trash keeps its `files` and `info` folders.
        let targets = if bin.join("files").is_dir() {
            vec![bin.join("files"), bin.join("info")]
        } else {
            vec![bin]
        };

        let mut first_error = None;
        for dir in &targets {
            if let Err(e) = clear_dir(dir) {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Remove everything inside `dir`, keeping `dir` itself. A missing `dir` is
/// already empty.
fn clear_dir(dir: &Path) -> io::Result<()> {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    let mut first_error = None;
    for entry in read_dir {
        let removed = entry.and_then(|entry| {
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                std::fs::remove_dir_all(&path)
            } else {
                std::fs::remove_file(&path)
            }
        });
        if let Err(e) = removed {
            tracing::debug!(dir = %dir.display(), error = %e, "failed to remove recycle bin entry");
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Replace `%NAME%`, `$NAME`, `${NAME}` and a leading `~` using `lookup`.
///
/// Tokens that cannot be resolved are kept verbatim.
pub fn expand_tokens(pattern: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    if let Some(tail) = rest.strip_prefix('~') {
        if tail.is_empty() || tail.starts_with('/') || tail.starts_with('\\') {
            match utils::home_dir() {
                Some(home) => out.push_str(&home.to_string_lossy()),
                None => out.push('~'),
            }
            rest = tail;
        }
    }

    while let Some(pos) = rest.find(['%', '$']) {
        out.push_str(&rest[..pos]);
        let token = &rest[pos..];

        let (name, consumed) = if let Some(body) = token.strip_prefix('%') {
            match body.find('%') {
                Some(end) if end > 0 => (&body[..end], end + 2),
                _ => ("", 1),
            }
        } else if let Some(body) = token.strip_prefix("${") {
            match body.find('}') {
                Some(end) if end > 0 => (&body[..end], end + 3),
                _ => ("", 1),
            }
        } else {
            let body = &token[1..];
            let end = body
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(body.len());
            (&body[..end], end + 1)
        };

        match (name.is_empty(), lookup(name)) {
            (false, Some(value)) => out.push_str(&value),
            _ => out.push_str(&token[..consumed]),
        }
        rest = &token[consumed..];
    }

    out.push_str(rest);
    out
}

pub(crate) fn is_wildcard_segment(segment: &str) -> bool {
    segment.contains(['*', '?', '['])
}

fn has_wildcard(path: &Path) -> bool {
    path.components()
        .any(|c| is_wildcard_segment(&c.as_os_str().to_string_lossy()))
}

/// The literal directory a pattern searches from: every component before the
/// first wildcard segment.
pub fn search_root(pattern: &Path) -> PathBuf {
    pattern
        .components()
        .take_while(|c| !is_wildcard_segment(&c.as_os_str().to_string_lossy()))
        .collect()
}

#[cfg(unix)]
fn locked(path: &Path) -> bool {
    use std::os::unix::io::AsRawFd;

    let file = match std::fs::OpenOptions::new().read(true).write(true).open(path) {
        Ok(file) => file,
        Err(e) => return e.kind() == io::ErrorKind::PermissionDenied,
    };

    let fd = file.as_raw_fd();
    // SAFETY: fd stays valid for the lifetime of `file`.
    let rc = unsafe { libc::flock(fd, libc::LOCK_EX | libc::LOCK_NB) };
    if rc != 0 {
        return io::Error::last_os_error().raw_os_error() == Some(libc::EWOULDBLOCK);
    }
    // SAFETY: as above; releases the lock taken just now.
    unsafe { libc::flock(fd, libc::LOCK_UN) };
    false
}

#[cfg(windows)]
fn locked(path: &Path) -> bool {
    use std::os::windows::fs::OpenOptionsExt;

    const ERROR_ACCESS_DENIED: i32 = 5;
    const ERROR_SHARING_VIOLATION: i32 = 32;

    match std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .share_mode(0)
        .open(path)
    {
        Ok(_) => false,
        Err(e) => matches!(
            e.raw_os_error(),
            Some(ERROR_SHARING_VIOLATION) | Some(ERROR_ACCESS_DENIED)
        ),
    }
}

#[cfg(not(any(unix, windows)))]
fn locked(_path: &Path) -> bool {
    false
}

#[cfg(windows)]
fn default_recycle_bin() -> Option<PathBuf> {
    let drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
    Some(PathBuf::from(format!(r"{drive}\$Recycle.Bin")))
}

#[cfg(target_os = "macos")]
fn default_recycle_bin() -> Option<PathBuf> {
    utils::home_dir().map(|home| home.join(".Trash"))
}

#[cfg(not(any(windows, target_os = "macos")))]
fn default_recycle_bin() -> Option<PathBuf> {
    dirs::data_dir().map(|data| data.join("Trash"))
}
