//! The container lock (`spec.md` §4.4): exclusive, process-safe, bounded by
//! a 30s timeout.
//!
//! Grounded directly on the teacher's `acquire_config_lock`
//! (`src/config/user.rs`): a `.lock` file opened/created alongside the thing
//! being protected, locked via `fs2::FileExt`. The teacher calls the
//! blocking `lock_exclusive()`, which waits forever; the spec requires a
//! bounded wait, so this polls `try_lock_exclusive()` instead.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::time::{Duration, Instant};

use fs2::FileExt;

use crate::error::Error;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// An exclusive hold on a container's `.wt/lock` file. Releases on `Drop`,
/// which covers every exit path — success, error, or panic — per
/// `spec.md` §4.4.
pub struct ContainerLock {
    file: File,
}

impl ContainerLock {
    /// Acquire the lock, blocking the caller (with short polling sleeps) up
    /// to the default 30s timeout.
    pub fn acquire(control_dir: &Path) -> Result<ContainerLock, Error> {
        Self::acquire_with_timeout(control_dir, DEFAULT_TIMEOUT)
    }

    /// Same as [`acquire`](Self::acquire) with an explicit timeout, for
    /// tests that want to observe `LockTimeout` without waiting 30 real
    /// seconds.
    pub fn acquire_with_timeout(control_dir: &Path, timeout: Duration) -> Result<ContainerLock, Error> {
        std::fs::create_dir_all(control_dir).map_err(|e| Error::io(control_dir, e))?;
        let lock_path = control_dir.join("lock");

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| Error::io(&lock_path, e))?;

        let deadline = Instant::now() + timeout;
        loop {
            match file.try_lock_exclusive() {
                Ok(()) => {
                    log::debug!("acquired container lock at {}", lock_path.display());
                    return Ok(ContainerLock { file });
                }
                Err(_) if Instant::now() < deadline => {
                    std::thread::sleep(POLL_INTERVAL);
                }
                Err(_) => return Err(Error::LockTimeout),
            }
        }
    }
}

impl Drop for ContainerLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}
