//! Platform abstraction layer
//!
//! Resolves where per-user game files live:
//! - `STARCALL_DATA_DIR` if set
//! - `%APPDATA%\starcall` on Windows
//! - `$XDG_DATA_HOME/starcall`, then `~/.local/share/starcall` elsewhere
//! - the working directory as a last resort

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "starcall";

pub const HIGH_SCORE_FILE: &str = "highscores.txt";
pub const SETTINGS_FILE: &str = "settings.json";
pub const TUNING_FILE: &str = "tuning.json";

/// Directory holding the high score record and config files
pub fn data_dir() -> PathBuf {
    data_dir_from(|key| env::var_os(key).map(PathBuf::from))
}

/// Resolution logic over an arbitrary environment lookup
pub fn data_dir_from(var: impl Fn(&str) -> Option<PathBuf>) -> PathBuf {
    if let Some(dir) = var("STARCALL_DATA_DIR") {
        return dir;
    }
    if let Some(appdata) = var("APPDATA") {
        return appdata.join(APP_DIR);
    }
    if let Some(xdg) = var("XDG_DATA_HOME") {
        return xdg.join(APP_DIR);
    }
    if let Some(home) = var("HOME") {
        return home.join(".local").join("share").join(APP_DIR);
    }
    PathBuf::from(".")
}

pub fn high_score_path() -> PathBuf {
    data_dir().join(HIGH_SCORE_FILE)
}

pub fn settings_path() -> PathBuf {
    data_dir().join(SETTINGS_FILE)
}

pub fn tuning_path() -> PathBuf {
    data_dir().join(TUNING_FILE)
}
