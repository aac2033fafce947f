use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "OSMIUM_CONFIG";

/// File name of the per-user configuration, relative to `$HOME`.
pub const RC_FILE_NAME: &str = ".osmiumrc";

/// Locate the configuration file.
///
/// A non-blank `$OSMIUM_CONFIG` is taken as given, whether or not the file
/// exists, so a typo surfaces as a warning instead of a silent fallback. The
/// rc file in `$HOME` is only used when present.
pub fn resolve_config_path() -> Option<PathBuf> {
    override_path(env::var_os(CONFIG_PATH_ENV)).or_else(|| {
        let rc = home()?.join(RC_FILE_NAME);
        rc.is_file().then_some(rc)
    })
}

fn override_path(raw: Option<OsString>) -> Option<PathBuf> {
    let raw = raw?;
    let text = raw.to_string_lossy();
    if text.trim().is_empty() {
        return None;
    }
    Some(expand_path(&text))
}

/// Expand a leading `~` or `~/` to `$HOME`. `~user` forms are left alone.
pub fn expand_path(input: &str) -> PathBuf {
    let rest = match input.strip_prefix('~') {
        Some("") => Some(Path::new("")),
        Some(rest) => rest.strip_prefix('/').map(Path::new),
        None => None,
    };

    match (rest, home()) {
        (Some(rest), Some(home)) if rest.as_os_str().is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(input),
    }
}

fn home() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}
