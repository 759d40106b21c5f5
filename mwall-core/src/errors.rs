//! Error types for `mwall_core`.
//!
//! All failures are funnelled through [`WallpaperError`], which uses
//! `thiserror` for `Display` and `Error` derives.  Only the two
//! initialisation variants ever reach the user; the rest are consumed by
//! the resolver and dispatcher.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the `mwall_core` library.
#[derive(Debug, Error)]
pub enum WallpaperError {
    /// The platform subsystem (COM apartment) could not be initialised.
    #[error("failed to initialize platform service: {0}")]
    SubsystemInit(String),

    /// The desktop wallpaper service could not be created.
    #[error("failed to initialize wallpaper interface: {0}")]
    ServiceAcquisition(String),

    /// The filesystem status lookup for an image path failed.
    #[error("{}: {source}", path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path exists but is neither a regular file nor a symbolic link.
    #[error("{}: not a regular file or symbolic link", path.display())]
    NotAFile { path: PathBuf },

    /// A monitor index token that is not a valid `u32`.
    #[error("malformed monitor index: {0:?}")]
    MalformedIndex(String),

    /// A wallpaper service call failed.
    #[error("wallpaper service error: {0}")]
    Platform(String),
}

/// Convert a `windows::core::Error` (COM HRESULT failure) into a
/// `WallpaperError::Platform`.
#[cfg(windows)]
impl From<windows::core::Error> for WallpaperError {
    fn from(err: windows::core::Error) -> Self {
        WallpaperError::Platform(format!("Windows COM error: {err}"))
    }
}
