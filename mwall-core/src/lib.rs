//! `mwall_core` -- monitor targeting for the `mwall` wallpaper tool.
//!
//! Resolves a command line into one [`resolve::OperationMode`] and
//! dispatches it against a [`platform::WallpaperService`].  The Windows
//! shell implementation lives behind `cfg(windows)`; everything else is
//! portable and tested against an in-memory service.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`errors`] | `WallpaperError` enum via `thiserror` |
//! | [`resolve`] | Argument Resolver: mode selection, path and digit checks |
//! | [`dispatch`] | Monitor Dispatcher: multi-list parsing, assignment calls |
//! | [`platform`] | `WallpaperService` trait, monitor enumeration, platform entry points |
//! | [`session`] | Subsystem / service lifetimes around one dispatch |
//! | [`usage`] | Usage text |
//! | `com` | `ComGuard` RAII wrapper for the STA apartment (Windows) |
//! | `desktop` | `IDesktopWallpaper` adapter (Windows) |

#[cfg(windows)]
pub mod com;
#[cfg(windows)]
pub mod desktop;
pub mod dispatch;
pub mod errors;
pub mod platform;
pub mod resolve;
pub mod session;
pub mod usage;
