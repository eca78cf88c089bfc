use std::env;
use std::path::PathBuf;

use crate::profile::DEFAULT_PLAYER;

pub const DEFAULT_CSV_PATH: &str = "player_data.csv";
pub const DEFAULT_HTML_PATH: &str = "dashboard.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub default_player: String,
    pub csv_path: PathBuf,
    pub html_path: PathBuf,
    pub xlsx_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_player: DEFAULT_PLAYER.to_string(),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            html_path: PathBuf::from(DEFAULT_HTML_PATH),
            xlsx_path: None,
        }
    }
}

impl DashboardConfig {
    /// Reads `DASHBOARD_*` overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let opt = |key: &str| {
            lookup(key).and_then(|val| {
                let trimmed = val.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
        };

        let defaults = Self::default();
        Self {
            default_player: opt("DASHBOARD_PLAYER").unwrap_or(defaults.default_player),
            csv_path: opt("DASHBOARD_CSV_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.csv_path),
            html_path: opt("DASHBOARD_HTML_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.html_path),
            xlsx_path: opt("DASHBOARD_XLSX_PATH").map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_map(pairs: &[(&str, &str)]) -> DashboardConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DashboardConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_env_gives_defaults() {
        assert_eq!(from_map(&[]), DashboardConfig::default());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let cfg = from_map(&[("DASHBOARD_PLAYER", "  "), ("DASHBOARD_XLSX_PATH", "")]);
        assert_eq!(cfg.default_player, DEFAULT_PLAYER);
        assert!(cfg.xlsx_path.is_none());
    }

    #[test]
    fn overrides_are_trimmed() {
        let cfg = from_map(&[
            ("DASHBOARD_PLAYER", " Virat Kohli "),
            ("DASHBOARD_CSV_PATH", "out/data.csv"),
            ("DASHBOARD_HTML_PATH", "out/index.html"),
            ("DASHBOARD_XLSX_PATH", "out/data.xlsx"),
        ]);
        assert_eq!(cfg.default_player, "Virat Kohli");
        assert_eq!(cfg.csv_path, PathBuf::from("out/data.csv"));
        assert_eq!(cfg.html_path, PathBuf::from("out/index.html"));
        assert_eq!(cfg.xlsx_path, Some(PathBuf::from("out/data.xlsx")));
    }
}
