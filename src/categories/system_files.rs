//! OS log, dump and report locations.

#[cfg(windows)]
pub(super) const PATTERNS: &[&str] = &[
    "%WINDIR%\\Logs\\CBS",
    "%WINDIR%\\Logs\\DISM",
    "%WINDIR%\\Logs\\DPX",
    "%WINDIR%\\Logs\\MoSetup",
    "%WINDIR%\\Panther",
    "%WINDIR%\\SoftwareDistribution\\DataStore\\Logs",
    "%LOCALAPPDATA%\\Microsoft\\Windows\\Explorer\\thumbcache_*.db",
    "%WINDIR%\\LiveKernelReports",
    "%WINDIR%\\Minidump",
];

#[cfg(target_os = "macos")]
pub(super) const PATTERNS: &[&str] = &[
    "~/Library/Logs",
    "/Library/Logs/DiagnosticReports",
    "~/Library/Logs/DiagnosticReports",
    "/private/var/log/*.gz",
    "~/Library/Application Support/CrashReporter",
];

#[cfg(not(any(windows, target_os = "macos")))]
pub(super) const PATTERNS: &[&str] = &[
    "/var/log/*.gz",
    "/var/log/*.old",
    "/var/log/*.[0-9]",
    "/var/crash",
    "/var/lib/systemd/coredump",
    "~/.cache/thumbnails",
    "~/.xsession-errors.old",
];
