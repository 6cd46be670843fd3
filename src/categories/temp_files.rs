//! Temporary file locations.

#[cfg(windows)]
pub(super) const PATTERNS: &[&str] = &[
    "%TEMP%",
    "%LOCALAPPDATA%\\Temp",
    "%WINDIR%\\Temp",
    "%WINDIR%\\SoftwareDistribution\\Download",
    "%WINDIR%\\Logs",
    "%LOCALAPPDATA%\\Microsoft\\Windows\\WebCache",
    "%WINDIR%\\Prefetch",
];

#[cfg(target_os = "macos")]
pub(super) const PATTERNS: &[&str] = &[
    "$TMPDIR",
    "/private/var/tmp",
    "~/Library/Caches/com.apple.QuickLook.thumbnailcache",
];

#[cfg(not(any(windows, target_os = "macos")))]
pub(super) const PATTERNS: &[&str] = &["$TMPDIR", "/tmp", "/var/tmp", "~/.cache/tmp"];
