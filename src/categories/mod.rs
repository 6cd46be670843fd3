mod browser_caches;
mod system_files;
mod temp_files;
pub(crate) mod trash;

use crate::cleaner::Mode;

/// A named class of reclaimable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    TempFiles,
    BrowserCache,
    SystemFiles,
    RecycleBin,
}

impl Category {
    /// Every category, in the order a full run visits them.
    pub const ALL: [Category; 4] = [
        Category::TempFiles,
        Category::BrowserCache,
        Category::SystemFiles,
        Category::RecycleBin,
    ];

    /// Machine-readable name (e.g. "browser").
    pub fn name(self) -> &'static str {
        match self {
            Category::TempFiles => "temp",
            Category::BrowserCache => "browser",
            Category::SystemFiles => "system",
            Category::RecycleBin => "recycle-bin",
        }
    }

    /// Human-readable label for display (e.g. "Browser Cache").
    pub fn label(self) -> &'static str {
        match self {
            Category::TempFiles => "Temp Files",
            Category::BrowserCache => "Browser Cache",
            Category::SystemFiles => "System Files",
            Category::RecycleBin => "Recycle Bin",
        }
    }

    /// Label of the progress event that opens a run over this category.
    pub fn progress_label(self, mode: Mode) -> &'static str {
        match (self, mode) {
            (Category::TempFiles, Mode::Scan) => "Scanning temporary files...",
            (Category::TempFiles, Mode::Clean) => "Cleaning temporary files...",
            (Category::BrowserCache, Mode::Scan) => "Scanning browser cache...",
            (Category::BrowserCache, Mode::Clean) => "Cleaning browser cache...",
            (Category::SystemFiles, Mode::Scan) => "Scanning system files...",
            (Category::SystemFiles, Mode::Clean) => "Cleaning system files...",
            (Category::RecycleBin, Mode::Scan) => "Scanning Recycle Bin...",
            (Category::RecycleBin, Mode::Clean) => "Cleaning Recycle Bin...",
        }
    }

    /// Lower-case noun used in full-run milestone labels.
    pub(crate) fn milestone_noun(self) -> &'static str {
        match self {
            Category::TempFiles => "temp files",
            Category::BrowserCache => "browser cache",
            Category::SystemFiles => "system files",
            Category::RecycleBin => "recycle bin",
        }
    }
}

/// How a category is worked through.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    /// Ordered path patterns, processed one location at a time.
    Paths(&'a [String]),
    /// The recycle bin, handled as one opaque unit.
    RecycleBin,
}

/// Ordered path patterns for every file-based category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathConfig {
    temp_files: Vec<String>,
    browser_cache: Vec<String>,
    system_files: Vec<String>,
}

impl PathConfig {
    pub fn new(
        temp_files: Vec<String>,
        browser_cache: Vec<String>,
        system_files: Vec<String>,
    ) -> Self {
        Self {
            temp_files,
            browser_cache,
            system_files,
        }
    }

    /// The locations built into this platform's build.
    pub fn builtin() -> Self {
        Self {
            temp_files: to_owned(temp_files::PATTERNS),
            browser_cache: to_owned(browser_caches::PATTERNS),
            system_files: to_owned(system_files::PATTERNS),
        }
    }

    pub fn target(&self, category: Category) -> Target<'_> {
        match category {
            Category::TempFiles => Target::Paths(&self.temp_files),
            Category::BrowserCache => Target::Paths(&self.browser_cache),
            Category::SystemFiles => Target::Paths(&self.system_files),
            Category::RecycleBin => Target::RecycleBin,
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

fn to_owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lists_are_populated() {
        let config = PathConfig::builtin();
        for category in [Category::TempFiles, Category::BrowserCache, Category::SystemFiles] {
            match config.target(category) {
                Target::Paths(patterns) => assert!(!patterns.is_empty(), "{category:?}"),
                Target::RecycleBin => panic!("{category:?} should be path based"),
            }
        }
        assert!(matches!(config.target(Category::RecycleBin), Target::RecycleBin));
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
        names.dedup();
        assert_eq!(names.len(), Category::ALL.len());
    }
}
