//! Fallback for platforms without a timestamp-setting implementation.

use std::path::Path;

use crate::error::{Error, Result};
use crate::times::Utimes;

pub(crate) fn set_times(_path: &Path, _times: Utimes, _resolve_links: bool) -> Result<()> {
    Err(Error::PlatformUnsupported)
}
