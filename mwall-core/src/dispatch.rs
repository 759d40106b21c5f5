//! Monitor dispatch.
//!
//! Executes a resolved [`OperationMode`] against a [`WallpaperService`].
//! Individual assignment failures are not surfaced: they are counted in
//! the returned [`DispatchReport`] and logged at debug level.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::errors::WallpaperError;
use crate::platform::{WallpaperService, MAX_MONITORS};
use crate::resolve::{is_valid_path, OperationMode, SKIP_TOKEN};

/// One image bound to one monitor ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorAssignment {
    pub monitor: u32,
    pub path: PathBuf,
}

/// Tally of the assignment calls issued by one [`dispatch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub issued: usize,
    pub failed: usize,
}

impl DispatchReport {
    fn record(&mut self, what: &str, result: Result<(), WallpaperError>) {
        self.issued += 1;
        if let Err(e) = result {
            self.failed += 1;
            log::debug!("{what}: {e}");
        }
    }
}

/// Map multi-list tokens to monitor assignments.
///
/// A token's position is its monitor ordinal.  [`SKIP_TOKEN`] and invalid
/// paths are dropped; so is every position at or past `max_monitors`.
pub fn parse_multiple(tokens: &[OsString], max_monitors: u32) -> Vec<MonitorAssignment> {
    let cap = max_monitors.min(MAX_MONITORS) as usize;
    let mut assignments = Vec::with_capacity(tokens.len().min(cap));

    for (monitor, token) in tokens.iter().take(cap).enumerate() {
        if token == SKIP_TOKEN {
            continue;
        }
        if is_valid_path(token) {
            assignments.push(MonitorAssignment {
                monitor: monitor as u32,
                path: PathBuf::from(token),
            });
        }
    }

    assignments
}

/// Execute `mode` against `service`.  `Noop` makes no call.
pub fn dispatch<W: WallpaperService>(mode: &OperationMode, service: &W) -> DispatchReport {
    let mut report = DispatchReport::default();

    match mode {
        OperationMode::Single { monitor, path } => {
            log::info!("monitor {monitor} <- {}", path.display());
            report.record(
                "set wallpaper",
                service.set_monitor_wallpaper(*monitor, path),
            );
        }
        OperationMode::AllMonitors { path } => {
            log::info!("all monitors <- {}", path.display());
            report.record("set wallpaper on all monitors", service.set_all_wallpapers(path));
        }
        OperationMode::MultiList { tokens } => {
            let attached = service.attached_monitor_count();
            log::debug!("{attached} monitor(s) attached");
            for MonitorAssignment { monitor, path } in parse_multiple(tokens, attached) {
                log::info!("monitor {monitor} <- {}", path.display());
                report.record(
                    "set wallpaper",
                    service.set_monitor_wallpaper_fast(monitor, &path),
                );
            }
        }
        OperationMode::Noop => {}
    }

    report
}
