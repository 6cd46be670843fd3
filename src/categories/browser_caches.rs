//! Browser cache locations.
//!
//! Chrome and Edge keep caches per profile; Firefox profile directories have
//! random names, so they are matched with a wildcard segment.

#[cfg(windows)]
pub(super) const PATTERNS: &[&str] = &[
    "%LOCALAPPDATA%\\Google\\Chrome\\User Data\\Default\\Cache",
    "%LOCALAPPDATA%\\Google\\Chrome\\User Data\\Default\\Code Cache",
    "%LOCALAPPDATA%\\Microsoft\\Edge\\User Data\\Default\\Cache",
    "%APPDATA%\\Mozilla\\Firefox\\Profiles\\*\\cache2",
    "%LOCALAPPDATA%\\Mozilla\\Firefox\\Profiles\\*\\cache2",
];

#[cfg(target_os = "macos")]
pub(super) const PATTERNS: &[&str] = &[
    "~/Library/Caches/Google/Chrome/*/Cache",
    "~/Library/Caches/Google/Chrome/*/Code Cache",
    "~/Library/Caches/Microsoft Edge/*/Cache",
    "~/Library/Caches/com.apple.Safari",
    "~/Library/Caches/Firefox/Profiles/*/cache2",
];

#[cfg(not(any(windows, target_os = "macos")))]
pub(super) const PATTERNS: &[&str] = &[
    "~/.cache/google-chrome/*/Cache",
    "~/.cache/google-chrome/*/Code Cache",
    "~/.cache/chromium/*/Cache",
    "~/.cache/microsoft-edge/*/Cache",
    "~/.cache/mozilla/firefox/*/cache2",
];
