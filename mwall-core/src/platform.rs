//! The seam between the dispatcher and the desktop shell.
//!
//! [`WallpaperService`] exposes the three primitives the shell offers
//! (handle lookup, geometry query, wallpaper assignment).  Everything the
//! dispatcher needs on top of them (checked and fast per-monitor
//! assignment, enumeration) is provided here so every implementation
//! shares one enumeration algorithm.

use std::fmt;
use std::path::Path;

use crate::errors::WallpaperError;

/// Upper bound on monitors enumerated or targeted by a multi-list.
pub const MAX_MONITORS: u32 = 99;

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// Opaque per-monitor identifier returned by the platform for an ordinal.
///
/// Only valid for the dispatch call that obtained it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorHandle(String);

impl MonitorHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MonitorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display rectangle in virtual-screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonitorRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl MonitorRect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// One attached monitor as seen during a single enumeration pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorInfo {
    pub ordinal: u32,
    pub handle: MonitorHandle,
    pub rect: MonitorRect,
}

// ---------------------------------------------------------------------------
// Service trait
// ---------------------------------------------------------------------------

/// Desktop wallpaper service.
///
/// Implementors supply the three primitives; the provided methods compose
/// them.  No method retries.
pub trait WallpaperService {
    /// Identifier of the monitor at `ordinal`.
    fn monitor_at(&self, ordinal: u32) -> Result<MonitorHandle, WallpaperError>;

    /// Display rectangle of `handle`, or `None` when the platform reports
    /// that no such monitor is attached.
    fn monitor_rect(&self, handle: &MonitorHandle) -> Result<Option<MonitorRect>, WallpaperError>;

    /// Assign `path` to `monitor`, or to every monitor when `monitor` is
    /// `None`.
    fn set_wallpaper(
        &self,
        monitor: Option<&MonitorHandle>,
        path: &Path,
    ) -> Result<(), WallpaperError>;

    /// Assign `path` to the monitor at `ordinal` after confirming it has
    /// geometry.  A detached monitor is silently left alone.
    fn set_monitor_wallpaper(&self, ordinal: u32, path: &Path) -> Result<(), WallpaperError> {
        let handle = self.monitor_at(ordinal)?;
        match self.monitor_rect(&handle)? {
            Some(_) => self.set_wallpaper(Some(&handle), path),
            None => {
                log::debug!("monitor {ordinal} ({handle}) reports no geometry, skipping");
                Ok(())
            }
        }
    }

    /// Assign `path` to the monitor at `ordinal` without the geometry check.
    ///
    /// Acts on whatever identifier the platform returns for `ordinal`, even
    /// if the monitor set changed since it was last enumerated.
    fn set_monitor_wallpaper_fast(&self, ordinal: u32, path: &Path) -> Result<(), WallpaperError> {
        let handle = self.monitor_at(ordinal)?;
        self.set_wallpaper(Some(&handle), path)
    }

    /// Assign `path` to every attached monitor in one call.
    fn set_all_wallpapers(&self, path: &Path) -> Result<(), WallpaperError> {
        self.set_wallpaper(None, path)
    }

    /// Probe ordinals from 0 upward until one has no geometry.
    ///
    /// Two platform calls per ordinal; the first failure of either ends the
    /// walk.  Capped at [`MAX_MONITORS`].
    fn enumerate_monitors(&self) -> Vec<MonitorInfo> {
        let mut monitors = Vec::new();
        for ordinal in 0..MAX_MONITORS {
            let handle = match self.monitor_at(ordinal) {
                Ok(handle) => handle,
                Err(e) => {
                    log::debug!("monitor {ordinal}: handle lookup failed: {e}");
                    break;
                }
            };
            match self.monitor_rect(&handle) {
                Ok(Some(rect)) => {
                    log::debug!(
                        "monitor {ordinal}: {handle} {}x{} at ({},{})",
                        rect.width(),
                        rect.height(),
                        rect.left,
                        rect.top
                    );
                    monitors.push(MonitorInfo {
                        ordinal,
                        handle,
                        rect,
                    });
                }
                Ok(None) => break,
                Err(e) => {
                    log::debug!("monitor {ordinal}: geometry query failed: {e}");
                    break;
                }
            }
        }
        monitors
    }

    /// Number of monitors attached right now.  May be stale immediately.
    fn attached_monitor_count(&self) -> u32 {
        self.enumerate_monitors().len() as u32
    }
}

// ---------------------------------------------------------------------------
// Platform entry points
// ---------------------------------------------------------------------------

/// Guard that keeps the platform subsystem alive until dropped.
#[cfg(windows)]
pub type SubsystemGuard = crate::com::ComGuard;

/// The wallpaper service for this target.
#[cfg(windows)]
pub type DefaultService = crate::desktop::DesktopWallpaper;

/// Initialise the platform subsystem for this thread.
#[cfg(windows)]
pub fn init_subsystem() -> Result<SubsystemGuard, WallpaperError> {
    crate::com::ComGuard::init()
}

/// Create the desktop wallpaper service.  Requires [`init_subsystem`].
#[cfg(windows)]
pub fn acquire_service() -> Result<DefaultService, WallpaperError> {
    crate::desktop::DesktopWallpaper::acquire()
}

#[cfg(not(windows))]
pub use unsupported::{acquire_service, init_subsystem, DefaultService, SubsystemGuard};

#[cfg(not(windows))]
mod unsupported {
    use std::path::Path;

    use super::{MonitorHandle, MonitorRect, WallpaperService};
    use crate::errors::WallpaperError;

    const UNSUPPORTED: &str = "desktop wallpaper service is only available on Windows";

    /// Never constructed: the subsystem cannot be initialised here.
    #[derive(Debug)]
    pub struct SubsystemGuard(());

    /// Never constructed: there is no wallpaper service on this target.
    #[derive(Debug)]
    pub struct DefaultService(());

    impl WallpaperService for DefaultService {
        fn monitor_at(&self, _ordinal: u32) -> Result<MonitorHandle, WallpaperError> {
            Err(WallpaperError::Platform(UNSUPPORTED.to_owned()))
        }

        fn monitor_rect(
            &self,
            _handle: &MonitorHandle,
        ) -> Result<Option<MonitorRect>, WallpaperError> {
            Err(WallpaperError::Platform(UNSUPPORTED.to_owned()))
        }

        fn set_wallpaper(
            &self,
            _monitor: Option<&MonitorHandle>,
            _path: &Path,
        ) -> Result<(), WallpaperError> {
            Err(WallpaperError::Platform(UNSUPPORTED.to_owned()))
        }
    }

    pub fn init_subsystem() -> Result<SubsystemGuard, WallpaperError> {
        Err(WallpaperError::SubsystemInit(UNSUPPORTED.to_owned()))
    }

    pub fn acquire_service() -> Result<DefaultService, WallpaperError> {
        Err(WallpaperError::ServiceAcquisition(UNSUPPORTED.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Test support
// ---------------------------------------------------------------------------
