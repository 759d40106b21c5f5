//! `IDesktopWallpaper` adapter.
//!
//! Requires a live COM apartment on the calling thread (see
//! [`crate::com::ComGuard`]).  The shell object is created out of process
//! (`CLSCTX_LOCAL_SERVER`) and released when [`DesktopWallpaper`] drops.

use std::path::Path;

use windows::core::{Interface, HSTRING, PCWSTR};
use windows::Win32::Foundation::{RECT, S_FALSE};
use windows::Win32::System::Com::{CoCreateInstance, CoTaskMemFree, CLSCTX_LOCAL_SERVER};
use windows::Win32::UI::Shell::{DesktopWallpaper as DesktopWallpaperClass, IDesktopWallpaper};

use crate::errors::WallpaperError;
use crate::platform::{MonitorHandle, MonitorRect, WallpaperService};

/// Owned `IDesktopWallpaper` interface pointer.
pub struct DesktopWallpaper {
    inner: IDesktopWallpaper,
}

impl DesktopWallpaper {
    /// Create the shell's desktop wallpaper object.
    pub fn acquire() -> Result<Self, WallpaperError> {
        let inner: IDesktopWallpaper =
            unsafe { CoCreateInstance(&DesktopWallpaperClass, None, CLSCTX_LOCAL_SERVER) }
                .map_err(|e| WallpaperError::ServiceAcquisition(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl WallpaperService for DesktopWallpaper {
    fn monitor_at(&self, ordinal: u32) -> Result<MonitorHandle, WallpaperError> {
        let raw = unsafe { self.inner.GetMonitorDevicePathAt(ordinal) }?;
        let id = unsafe { raw.to_string() };
        unsafe { CoTaskMemFree(Some(raw.0 as *const _)) };
        let id = id.map_err(|e| {
            WallpaperError::Platform(format!("monitor {ordinal} device path: {e}"))
        })?;
        Ok(MonitorHandle::new(id))
    }

    fn monitor_rect(&self, handle: &MonitorHandle) -> Result<Option<MonitorRect>, WallpaperError> {
        let id = HSTRING::from(handle.as_str());
        let mut rect = RECT::default();
        // The projected GetMonitorRECT folds S_FALSE into Ok, so go through
        // the vtable to tell "not attached" apart from success.
        let hr = unsafe {
            (Interface::vtable(&self.inner).GetMonitorRECT)(
                Interface::as_raw(&self.inner),
                PCWSTR(id.as_ptr()),
                &mut rect,
            )
        };
        hr.ok()?;
        if hr == S_FALSE {
            return Ok(None);
        }
        Ok(Some(MonitorRect {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        }))
    }

    fn set_wallpaper(
        &self,
        monitor: Option<&MonitorHandle>,
        path: &Path,
    ) -> Result<(), WallpaperError> {
        let id = monitor.map(|h| HSTRING::from(h.as_str()));
        let id_ptr = id
            .as_ref()
            .map_or(PCWSTR::null(), |h| PCWSTR(h.as_ptr()));
        let wallpaper = HSTRING::from(path.as_os_str());
        unsafe {
            self.inner
                .SetWallpaper(id_ptr, PCWSTR(wallpaper.as_ptr()))
        }?;
        Ok(())
    }
}
