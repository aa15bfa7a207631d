use std::env;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

pub fn get_exe_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the base path for config assets depending on the build mode
pub fn get_assets_path() -> PathBuf {
    if cfg!(debug_assertions) {
        // Development mode
        PathBuf::from("./src/config/")
    } else {
        // Release mode: use path relative to the executable
        let exe_dir = get_exe_dir();
        exe_dir.join("config")
    }
}

static START_FROM_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"[?&]startFrom=([^&#]*)")
        .case_insensitive(true)
        .build()
        .expect("startFrom regex is invalid")
});

/// Raw `startFrom` value from the query part of a pagination link.
///
/// The parameter name matches case-insensitively; the value is returned undecoded.
pub fn start_from_value(url: &str) -> Option<&str> {
    START_FROM_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
