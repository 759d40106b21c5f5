//! COM apartment RAII guard.
//!
//! [`ComGuard`] wraps `CoInitializeEx` / `CoUninitialize` so the apartment
//! opened for the wallpaper service is torn down exactly once, on every
//! exit path.
//!
//! The shell's `DesktopWallpaper` object is apartment-threaded, so the
//! guard joins an STA with OLE1 DDE disabled.  The `PhantomData<*const ()>`
//! field keeps the guard `!Send` + `!Sync`.

use windows::Win32::System::Com::{
    CoInitializeEx, CoUninitialize, COINIT, COINIT_APARTMENTTHREADED, COINIT_DISABLE_OLE1DDE,
};

use crate::errors::WallpaperError;

/// `RPC_E_CHANGED_MODE`: the thread already has an MTA.
const RPC_E_CHANGED_MODE: u32 = 0x8001_0106;

/// RAII wrapper that calls `CoUninitialize` on `Drop` when appropriate.
#[must_use = "ComGuard must be kept alive for the duration of COM usage"]
pub struct ComGuard {
    should_uninit: bool,
    _not_send: std::marker::PhantomData<*const ()>,
}

impl ComGuard {
    /// Initialise (or join) the thread's STA COM apartment.
    ///
    /// `S_OK` and `S_FALSE` both require a balancing `CoUninitialize`.
    /// `RPC_E_CHANGED_MODE` leaves COM usable but must not be balanced.
    pub fn init() -> Result<Self, WallpaperError> {
        let flags = COINIT(COINIT_APARTMENTTHREADED.0 | COINIT_DISABLE_OLE1DDE.0);
        let hr = unsafe { CoInitializeEx(None, flags) };

        let hresult_value = hr.0 as u32;
        match hresult_value {
            0x0 | 0x1 => Ok(Self {
                should_uninit: true,
                _not_send: std::marker::PhantomData,
            }),
            RPC_E_CHANGED_MODE => {
                log::warn!(
                    "CoInitializeEx: RPC_E_CHANGED_MODE -- thread already has MTA apartment, \
                     using existing apartment instead of STA"
                );
                Ok(Self {
                    should_uninit: false,
                    _not_send: std::marker::PhantomData,
                })
            }
            _ => Err(WallpaperError::SubsystemInit(format!(
                "CoInitializeEx failed: HRESULT 0x{hresult_value:08X}"
            ))),
        }
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        if self.should_uninit {
            log::debug!("CoUninitialize");
            unsafe { CoUninitialize() };
        }
    }
}
