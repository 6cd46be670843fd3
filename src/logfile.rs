use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "cclean.log";

/// Logs above this size are moved aside before a new session appends.
pub const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

/// Open `path` for appending, first rotating it to `<path>.old` when it has
/// grown past `max_size`.
pub fn open(path: &Path, max_size: u64) -> io::Result<File> {
    rotate(path, max_size);
    OpenOptions::new().create(true).append(true).open(path)
}

/// Where a rotated log ends up.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".old");
    PathBuf::from(name)
}

fn rotate(path: &Path, max_size: u64) {
    let Ok(meta) = std::fs::metadata(path) else {
        return;
    };
    if meta.len() <= max_size {
        return;
    }

    let backup = backup_path(path);
    // A failed rotation just means the current log keeps growing.
    let _ = std::fs::remove_file(&backup);
    let _ = std::fs::rename(path, &backup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn small_log_is_appended_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cclean.log");
        std::fs::write(&path, b"old line\n").unwrap();

        let mut file = open(&path, 1024).unwrap();
        file.write_all(b"new line\n").unwrap();
        drop(file);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old line\nnew line\n");
        assert!(!backup_path(&path).exists());
    }

    #[test]
    fn oversized_log_is_rotated_replacing_previous_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cclean.log");
        std::fs::write(&path, vec![b'x'; 64]).unwrap();
        std::fs::write(backup_path(&path), b"ancient").unwrap();

        let file = open(&path, 16).unwrap();
        drop(file);

        assert_eq!(std::fs::read(backup_path(&path)).unwrap(), vec![b'x'; 64]);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("logs/cclean.log")),
            PathBuf::from("logs/cclean.log.old")
        );
    }
}
