//! Usage text printed for the no-op mode.

pub const USAGE: &str = "\
Usage:
  mwall <monitor> <image>        Set <image> on monitor number <monitor> (0-based)
  mwall /A <image>               Set <image> on every attached monitor
  mwall /M <image|N> [<image|N> ...]
                                 Set one image per monitor, in monitor order;
                                 N leaves that monitor unchanged

Options:
  -v, --verbose                  Log each monitor and platform call to stderr

Examples:
  mwall 0 C:\\Wallpapers\\left.jpg
  mwall /A C:\\Wallpapers\\wide.png
  mwall /M C:\\a.jpg N C:\\c.jpg";
