//! One invocation, from resolved mode to exit status.
//!
//! The subsystem guard and the service are plain RAII values: the service
//! is dropped before the guard on every path, including a failed
//! acquisition.

use std::io::{self, Write};

use crate::dispatch::{dispatch, DispatchReport};
use crate::errors::WallpaperError;
use crate::platform::WallpaperService;
use crate::resolve::OperationMode;
use crate::usage::USAGE;

/// How an invocation ended, short of a fatal subsystem failure.
#[derive(Debug)]
pub enum Outcome {
    /// Usage was printed; the platform was never touched.
    Usage,
    /// The wallpaper service could not be acquired.
    ServiceUnavailable(WallpaperError),
    /// Dispatch ran.
    Applied(DispatchReport),
}

impl Outcome {
    /// Process exit status.
    ///
    /// An unavailable wallpaper service still exits 0; only a subsystem
    /// failure (the `Err` side of [`execute`]) exits 1.
    pub fn exit_code(&self) -> u8 {
        0
    }
}

/// Run `mode`, bracketing dispatch with the subsystem and service
/// lifetimes produced by `init_subsystem` and `acquire_service`.
pub fn execute<G, W, I, A>(
    mode: &OperationMode,
    init_subsystem: I,
    acquire_service: A,
    out: &mut impl Write,
) -> Result<Outcome, WallpaperError>
where
    W: WallpaperService,
    I: FnOnce() -> Result<G, WallpaperError>,
    A: FnOnce() -> Result<W, WallpaperError>,
{
    if matches!(mode, OperationMode::Noop) {
        print_usage(out);
        return Ok(Outcome::Usage);
    }

    let _subsystem = init_subsystem()?;

    let service = match acquire_service() {
        Ok(service) => service,
        Err(e) => return Ok(Outcome::ServiceUnavailable(e)),
    };

    let report = dispatch(mode, &service);
    log::debug!(
        "{} assignment call(s), {} rejected by the platform",
        report.issued,
        report.failed
    );
    drop(service);

    Ok(Outcome::Applied(report))
}

fn print_usage(out: &mut impl Write) {
    if let Err(e) = writeln!(out, "{USAGE}").and_then(|()| out.flush()) {
        if e.kind() != io::ErrorKind::BrokenPipe {
            log::warn!("failed to write usage: {e}");
        }
    }
}
