// statvfs(3) usage, split the way df reports it: reserved blocks are neither used nor free.

use std::ffi::CString;
use std::io;
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::models::DiskUsage;

/// Usage of the filesystem mounted at `mount_point`.
///
/// `used` is total minus all free blocks, `free` is what an unprivileged user may still
/// allocate. Fails with `PermissionDenied` when the mount point cannot be searched.
pub(super) fn statvfs_usage(mount_point: &Path) -> io::Result<DiskUsage> {
    let c_path = CString::new(mount_point.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut st = MaybeUninit::<libc::statvfs>::uninit();
    // SAFETY: c_path is NUL-terminated and st points to writable memory of the right size.
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), st.as_mut_ptr()) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: statvfs returned 0, so the struct is initialised.
    let st = unsafe { st.assume_init() };

    let frsize = st.f_frsize as u64;
    let blocks = st.f_blocks as u64;
    let bfree = st.f_bfree as u64;
    let bavail = st.f_bavail as u64;
    Ok(DiskUsage {
        total: blocks.saturating_mul(frsize),
        used: blocks.saturating_sub(bfree).saturating_mul(frsize),
        free: bavail.saturating_mul(frsize),
    })
}
