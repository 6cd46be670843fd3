use std::path::Path;

use crate::provider::FileSystemProvider;

/// File names that are never deleted, compared case-insensitively.
const PROTECTED_NAMES: &[&str] = &["desktop.ini", "thumbs.db"];

/// Decides whether a discovered file may be counted and deleted.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityPolicy {
    protected: &'static [&'static str],
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            protected: PROTECTED_NAMES,
        }
    }
}

impl EligibilityPolicy {
    pub fn is_eligible(&self, fs: &dyn FileSystemProvider, path: &Path) -> bool {
        if fs.is_locked(path) {
            return false;
        }
        !self.is_protected(path)
    }

    fn is_protected(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        self.protected
            .iter()
            .any(|protected| name.eq_ignore_ascii_case(protected))
    }
}
