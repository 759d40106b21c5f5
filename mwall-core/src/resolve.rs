//! Command-line resolution.
//!
//! [`resolve`] turns the positional tokens into exactly one
//! [`OperationMode`] before any platform call is made.  Image paths for
//! `Single` and `AllMonitors` are validated here; multi-list tokens are
//! carried through raw and validated by the dispatcher.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::WallpaperError;

/// Flag selecting one image for every attached monitor.
pub const ALL_FLAG: &str = "/A";

/// Flag selecting a positional per-monitor list.
pub const MULTI_FLAG: &str = "/M";

/// Multi-list token that leaves its monitor slot untouched.
pub const SKIP_TOKEN: &str = "N";

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationMode {
    /// One image on one monitor, addressed by ordinal.
    Single { monitor: u32, path: PathBuf },
    /// One image on every monitor.
    AllMonitors { path: PathBuf },
    /// Positional image list; tokens are unvalidated.
    MultiList { tokens: Vec<OsString> },
    /// Print usage.
    Noop,
}

/// Resolve the positional tokens (program name excluded).
pub fn resolve(tokens: &[OsString]) -> OperationMode {
    let [control, target, rest @ ..] = tokens else {
        return OperationMode::Noop;
    };

    if is_digit(control) && is_valid_path(target) {
        match parse_monitor_index(control) {
            Ok(monitor) => {
                return OperationMode::Single {
                    monitor,
                    path: PathBuf::from(target),
                }
            }
            Err(e) => log::debug!("{e}"),
        }
    }

    if control == ALL_FLAG && is_valid_path(target) {
        return OperationMode::AllMonitors {
            path: PathBuf::from(target),
        };
    }

    if control == MULTI_FLAG {
        let mut list = Vec::with_capacity(rest.len() + 1);
        list.push(target.clone());
        list.extend(rest.iter().cloned());
        return OperationMode::MultiList { tokens: list };
    }

    OperationMode::Noop
}

/// True iff every character is an ASCII decimal digit.
///
/// The empty token counts as digits; it is rejected later by
/// [`parse_monitor_index`].
pub fn is_digit(token: &OsStr) -> bool {
    token
        .to_str()
        .is_some_and(|s| s.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse a digit token into a monitor ordinal.
pub fn parse_monitor_index(token: &OsStr) -> Result<u32, WallpaperError> {
    let lossy = token.to_string_lossy();
    lossy
        .parse::<u32>()
        .map_err(|_| WallpaperError::MalformedIndex(lossy.into_owned()))
}

/// Check that `path` exists and is a regular file or a symbolic link.
pub fn check_path(path: &Path) -> Result<(), WallpaperError> {
    let meta = fs::metadata(path).map_err(|source| WallpaperError::InvalidPath {
        path: path.to_path_buf(),
        source,
    })?;
    if meta.is_file() || meta.file_type().is_symlink() {
        Ok(())
    } else {
        Err(WallpaperError::NotAFile {
            path: path.to_path_buf(),
        })
    }
}

/// [`check_path`] as a predicate; failures are logged as warnings.
pub fn is_valid_path(path: impl AsRef<Path>) -> bool {
    match check_path(path.as_ref()) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::TempDir;

    use super::*;

    fn toks(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    fn image(dir: &TempDir, name: &str) -> String {
        let path = dir.path().join(name);
        File::create(&path).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_is_digit() {
        assert!(is_digit(OsStr::new("0")));
        assert!(is_digit(OsStr::new("0123456789")));
        assert!(is_digit(OsStr::new("")));
        assert!(!is_digit(OsStr::new("-1")));
        assert!(!is_digit(OsStr::new("1a")));
        assert!(!is_digit(OsStr::new("١")));
        assert!(!is_digit(OsStr::new("/A")));
    }

    #[test]
    fn test_parse_monitor_index() {
        assert_eq!(parse_monitor_index(OsStr::new("007")).unwrap(), 7);
        assert!(matches!(
            parse_monitor_index(OsStr::new("")),
            Err(WallpaperError::MalformedIndex(_))
        ));
        assert!(matches!(
            parse_monitor_index(OsStr::new("99999999999")),
            Err(WallpaperError::MalformedIndex(_))
        ));
    }

    #[test]
    fn test_check_path_kinds() {
        let dir = TempDir::new().unwrap();
        let file = image(&dir, "bg.jpg");
        assert!(check_path(Path::new(&file)).is_ok());
        assert!(matches!(
            check_path(dir.path()),
            Err(WallpaperError::NotAFile { .. })
        ));
        let missing = dir.path().join("missing.jpg");
        match check_path(&missing) {
            Err(WallpaperError::InvalidPath { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_file_is_valid() {
        let dir = TempDir::new().unwrap();
        let file = image(&dir, "real.png");
        let link = dir.path().join("link.png");
        std::os::unix::fs::symlink(&file, &link).unwrap();
        assert!(is_valid_path(&link));
    }

    #[test]
    fn test_fewer_than_two_tokens_is_noop() {
        let dir = TempDir::new().unwrap();
        let file = image(&dir, "bg.jpg");
        assert_eq!(resolve(&[]), OperationMode::Noop);
        assert_eq!(resolve(&toks(&["0"])), OperationMode::Noop);
        assert_eq!(resolve(&toks(&["/A"])), OperationMode::Noop);
        assert_eq!(resolve(&toks(&["/M"])), OperationMode::Noop);
        assert_eq!(resolve(&toks(&[&file])), OperationMode::Noop);
    }

    #[test]
    fn test_single_mode() {
        let dir = TempDir::new().unwrap();
        let file = image(&dir, "bg.jpg");
        assert_eq!(
            resolve(&toks(&["0", &file])),
            OperationMode::Single {
                monitor: 0,
                path: PathBuf::from(&file)
            }
        );
        assert_eq!(
            resolve(&toks(&["12", &file, "ignored"])),
            OperationMode::Single {
                monitor: 12,
                path: PathBuf::from(&file)
            }
        );
    }

    #[test]
    fn test_single_with_missing_path_is_noop() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.jpg");
        let missing = missing.to_string_lossy();
        assert_eq!(resolve(&toks(&["1", &missing])), OperationMode::Noop);
    }

    #[test]
    fn test_single_with_directory_is_noop() {
        let dir = TempDir::new().unwrap();
        let d = dir.path().to_string_lossy();
        assert_eq!(resolve(&toks(&["1", &d])), OperationMode::Noop);
    }

    #[test]
    fn test_unparseable_index_falls_through() {
        let dir = TempDir::new().unwrap();
        let file = image(&dir, "bg.jpg");
        assert_eq!(
            resolve(&toks(&["4294967296", &file])),
            OperationMode::Noop
        );
        assert_eq!(resolve(&toks(&["", &file])), OperationMode::Noop);
    }

    #[test]
    fn test_all_monitors_mode() {
        let dir = TempDir::new().unwrap();
        let file = image(&dir, "bg.jpg");
        assert_eq!(
            resolve(&toks(&["/A", &file])),
            OperationMode::AllMonitors {
                path: PathBuf::from(&file)
            }
        );
    }

    #[test]
    fn test_all_monitors_with_missing_path_is_noop() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.jpg");
        assert_eq!(
            resolve(&toks(&["/A", &missing.to_string_lossy()])),
            OperationMode::Noop
        );
    }

    #[test]
    fn test_flags_are_case_sensitive() {
        let dir = TempDir::new().unwrap();
        let file = image(&dir, "bg.jpg");
        assert_eq!(resolve(&toks(&["/a", &file])), OperationMode::Noop);
        assert_eq!(resolve(&toks(&["/m", &file])), OperationMode::Noop);
        assert_eq!(resolve(&toks(&["/All", &file])), OperationMode::Noop);
    }

    #[test]
    fn test_multi_list_passes_tokens_unvalidated() {
        assert_eq!(
            resolve(&toks(&["/M", "a.jpg", "N", "does/not/exist.png"])),
            OperationMode::MultiList {
                tokens: toks(&["a.jpg", "N", "does/not/exist.png"])
            }
        );
    }

    #[test]
    fn test_unknown_control_is_noop() {
        let dir = TempDir::new().unwrap();
        let file = image(&dir, "bg.jpg");
        assert_eq!(resolve(&toks(&["--all", &file])), OperationMode::Noop);
        assert_eq!(resolve(&toks(&[&file, &file])), OperationMode::Noop);
    }
}
