use std::path::Path;

pub struct DiskInfo {
    pub total: u64,
    pub available: u64,
    pub used: u64,
}

impl DiskInfo {
    pub fn usage_percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.used as f32 / self.total as f32 * 100.0
    }
}

/// Capacity of the volume holding `path`.
#[cfg(unix)]
pub fn get_disk_info(path: &Path) -> Option<DiskInfo> {
    use std::ffi::CString;
    use std::mem::MaybeUninit;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes()).ok()?;
    let mut stat = MaybeUninit::<libc::statvfs>::uninit();
    // SAFETY: c_path is NUL-terminated and stat points to writable memory.
    let ret = unsafe { libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) };
    if ret != 0 {
        return None;
    }
    // SAFETY: statvfs returned 0, so it filled the struct.
    let stat = unsafe { stat.assume_init() };
    let block_size = stat.f_frsize as u64;
    let total = stat.f_blocks as u64 * block_size;
    let available = stat.f_bavail as u64 * block_size;
    let used = total.saturating_sub(available);
    Some(DiskInfo {
        total,
        available,
        used,
    })
}

#[cfg(not(unix))]
pub fn get_disk_info(_path: &Path) -> Option<DiskInfo> {
    None
}

/// The volume cleaned by default: the system drive on Windows, `/` elsewhere.
pub fn system_volume() -> std::path::PathBuf {
    if cfg!(windows) {
        let drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
        std::path::PathBuf::from(format!("{drive}\\"))
    } else {
        std::path::PathBuf::from("/")
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn root_volume_reports_consistent_numbers() {
        let info = get_disk_info(Path::new("/")).expect("statvfs on / should work");
        assert!(info.total >= info.available);
        assert_eq!(info.used, info.total - info.available);
        assert!((0.0..=100.0).contains(&info.usage_percent()));
    }

    #[test]
    fn missing_path_has_no_info() {
        assert!(get_disk_info(Path::new("/no/such/volume/cclean")).is_none());
    }
}
