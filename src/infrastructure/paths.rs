//! Path resolution for data, log and config files.
//!
//! Everything lives in one data directory, by default
//! `$XDG_DATA_HOME/radar-motu` or `~/.local/share/radar-motu`.

use std::env;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "radar-motu";

/// Returns the default data directory from the environment.
///
/// Uses `$XDG_DATA_HOME/radar-motu` when set and non-empty, else
/// `$HOME/.local/share/radar-motu`, else `.radar-motu` in the working
/// directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(
        env::var("XDG_DATA_HOME").ok().as_deref(),
        env::var("HOME").ok().as_deref(),
    )
}

fn data_dir_from(xdg_data_home: Option<&str>, home: Option<&str>) -> PathBuf {
    if let Some(xdg) = xdg_data_home.filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }

    home.filter(|v| !v.is_empty()).map_or_else(
        || PathBuf::from(format!(".{APP_DIR}")),
        |home| PathBuf::from(home).join(".local").join("share").join(APP_DIR),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, or with no `HOME` set, are returned unchanged.
///
/// # Examples
///
/// ```
/// use radar_motu::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, env::var("HOME").ok().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> PathBuf {
    let Some(home) = home.filter(|h| !h.is_empty()) else {
        return PathBuf::from(path);
    };

    if path == "~" {
        PathBuf::from(home)
    } else if let Some(rest) = path.strip_prefix("~/") {
        Path::new(home).join(rest)
    } else {
        PathBuf::from(path)
    }
}

/// JSON storage file holding the registry.
#[must_use]
pub fn registry_file(data_dir: &Path) -> PathBuf {
    data_dir.join("registry.json")
}

/// Log file written by the tracing subscriber.
#[must_use]
pub fn log_file(data_dir: &Path) -> PathBuf {
    data_dir.join("radar-motu.log")
}

/// Default configuration file location.
#[must_use]
pub fn config_file(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xdg_wins_over_home() {
        assert_eq!(
            data_dir_from(Some("/xdg"), Some("/home/u")),
            PathBuf::from("/xdg/radar-motu")
        );
        assert_eq!(
            data_dir_from(Some(""), Some("/home/u")),
            PathBuf::from("/home/u/.local/share/radar-motu")
        );
        assert_eq!(data_dir_from(None, None), PathBuf::from(".radar-motu"));
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde_with("~", Some("/home/u")), PathBuf::from("/home/u"));
        assert_eq!(
            expand_tilde_with("~/moto/config.toml", Some("/home/u")),
            PathBuf::from("/home/u/moto/config.toml")
        );
        assert_eq!(expand_tilde_with("~other/x", Some("/home/u")), PathBuf::from("~other/x"));
        assert_eq!(expand_tilde_with("~/x", None), PathBuf::from("~/x"));
    }

    #[test]
    fn files_live_in_the_data_dir() {
        let dir = Path::new("/data");
        assert_eq!(registry_file(dir), PathBuf::from("/data/registry.json"));
        assert_eq!(log_file(dir), PathBuf::from("/data/radar-motu.log"));
        assert_eq!(config_file(dir), PathBuf::from("/data/config.toml"));
    }
}
