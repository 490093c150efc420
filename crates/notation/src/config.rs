//! Process-wide configuration, read once per top-level render call.
//!
//! Four environment variables tune the renderer: `TABWIDTH`, `LINEWIDTH`,
//! `LINEWIDTH1` and `MAPSORT`. Parse failures fall back to the default
//! silently — a malformed override should never abort a debug print.

use std::env;

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

/// Resolved configuration for a single top-level render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Config {
    pub tab: usize,
    pub c0: usize,
    pub c1: usize,
    pub sort_maps: bool,
}

impl Config {
    /// Read `TABWIDTH`, `LINEWIDTH`, `LINEWIDTH1` and `MAPSORT` from the
    /// process environment, falling back to the spec defaults for any
    /// variable that is unset or fails to parse.
    pub fn from_env() -> Self {
        let tab = read_usize("TABWIDTH").unwrap_or(8);
        let c0 = read_usize("LINEWIDTH").unwrap_or_else(|| 80usize.saturating_sub(tab));
        let c1 = read_usize("LINEWIDTH1").unwrap_or_else(|| (c0 + tab) * 3 / 2 - tab);
        let sort_maps = read_usize("MAPSORT").map(|v| v != 0).unwrap_or(true);
        Config { tab, c0, c1, sort_maps }
    }
}

/// Looks up `name`, then `name` lower-cased, and parses the first hit as
/// a `usize`. Returns `None` on any miss or parse failure.
fn read_usize(name: &str) -> Option<usize> {
    let raw = env::var(name)
        .or_else(|_| env::var(name.to_lowercase()))
        .ok()?;
    raw.trim().parse().ok()
}
