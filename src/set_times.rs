use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{Error, Result};
use crate::times::Utimes;

/// Set timestamps on a file, directory, or other filesystem object,
/// following a trailing symlink.
///
/// Timestamps the update doesn't set keep their current values. An update
/// which sets nothing succeeds without touching the filesystem at all, even
/// if `path` doesn't exist.
#[inline]
pub fn set_times<P: AsRef<Path>>(path: P, times: Utimes) -> Result<()> {
    apply(path.as_ref(), times, true)
}

/// Like [`set_times`], but a trailing symlink is updated itself rather than
/// followed.
#[inline]
pub fn set_symlink_times<P: AsRef<Path>>(path: P, times: Utimes) -> Result<()> {
    apply(path.as_ref(), times, false)
}

/// Set the creation timestamp of a file or other filesystem object.
///
/// On platforms whose kernel interface has no creation-time slot, the call
/// succeeds and changes nothing.
#[inline]
pub fn set_btime<P: AsRef<Path>>(path: P, millis: i64) -> Result<()> {
    apply(path.as_ref(), Utimes::new().set_btime(millis), true)
}

/// Set the last modification timestamp of a file or other filesystem object.
#[inline]
pub fn set_mtime<P: AsRef<Path>>(path: P, millis: i64) -> Result<()> {
    apply(path.as_ref(), Utimes::new().set_mtime(millis), true)
}

/// Set the last access timestamp of a file or other filesystem object.
#[inline]
pub fn set_atime<P: AsRef<Path>>(path: P, millis: i64) -> Result<()> {
    apply(path.as_ref(), Utimes::new().set_atime(millis), true)
}

/// Set timestamps without blocking the calling thread.
///
/// The update runs on the blocking thread pool, and the returned future
/// resolves exactly once with the result. The filesystem effect and the
/// error classification are the same as [`set_times`] with the same
/// arguments.
pub async fn set_times_async<P: Into<PathBuf>>(path: P, times: Utimes) -> Result<()> {
    let path = path.into();
    asyncify(move || apply(&path, times, true)).await
}

/// Like [`set_times_async`], but a trailing symlink is updated itself rather
/// than followed.
pub async fn set_symlink_times_async<P: Into<PathBuf>>(path: P, times: Utimes) -> Result<()> {
    let path = path.into();
    asyncify(move || apply(&path, times, false)).await
}

fn apply(path: &Path, times: Utimes, resolve_links: bool) -> Result<()> {
    if times.is_empty() {
        trace!(path = %path.display(), "empty update, nothing to do");
        return Ok(());
    }
    trace!(
        path = %path.display(),
        fields = ?times.fields(),
        resolve_links,
        "setting timestamps"
    );
    crate::sys::set_times(path, times, resolve_links)
}

async fn asyncify<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()> + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(_) => Err(Error::from(io::Error::new(
            io::ErrorKind::Other,
            "background task failed",
        ))),
    }
}
