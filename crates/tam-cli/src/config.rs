//! Configuration loading and management.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use tam_core::{ThresholdOverrides, Thresholds, Tracker, TrackerProfile};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the treatments log file.
    pub treatments_path: PathBuf,

    /// Per-tracker threshold overrides, keyed by tracker id.
    #[serde(default)]
    pub trackers: BTreeMap<String, ThresholdOverrides>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            treatments_path: data_dir.join("treatments.json"),
            trackers: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TAM_*)
        figment = figment.merge(Env::prefixed("TAM_").split("__"));

        figment.extract()
    }

    /// Builds the tracker set: every built-in profile with its
    /// configured overrides resolved against the defaults.
    #[must_use]
    pub fn build_trackers(&self) -> Vec<Tracker> {
        [TrackerProfile::long_acting(), TrackerProfile::reservoir()]
            .into_iter()
            .map(|profile| {
                let overrides = self.trackers.get(&profile.id).copied().unwrap_or_default();
                Tracker::new(profile, Thresholds::resolve(&overrides))
            })
            .collect()
    }
}

/// Returns the platform-specific config directory for tam.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tam"))
}

/// Returns the platform-specific data directory for tam.
///
/// On Linux: `~/.local/share/tam`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("tam"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_dirs_data_path_ends_with_tam() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "tam");
    }

    #[test]
    fn test_default_config_uses_data_dir_for_treatments() {
        let config = Config::default();
        let data_dir = dirs_data_path().unwrap();
        assert_eq!(config.treatments_path, data_dir.join("treatments.json"));
    }

    #[test]
    fn test_default_trackers_use_default_thresholds() {
        let trackers = Config::default().build_trackers();
        assert_eq!(trackers.len(), 2);
        assert_eq!(trackers[0].profile().id, "long_acting");
        assert_eq!(trackers[1].profile().id, "reservoir");
        for tracker in &trackers {
            assert_eq!(*tracker.thresholds(), Thresholds::default());
        }
    }

    #[test]
    fn test_config_file_overrides_tracker_thresholds() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
treatments_path = "/var/lib/tam/log.json"

[trackers.long_acting]
info = 44
warn = 48
urgent = 70
enable_alerts = true
"#
        )
        .unwrap();

        let config = Config::load_from(Some(file.path())).unwrap();
        assert_eq!(config.treatments_path, PathBuf::from("/var/lib/tam/log.json"));

        let trackers = config.build_trackers();
        let long_acting = &trackers[0];
        assert_eq!(long_acting.thresholds().info_hours, 44);
        assert_eq!(long_acting.thresholds().warn_hours, 48);
        assert_eq!(long_acting.thresholds().urgent_hours, 70);
        assert!(long_acting.thresholds().alerts_enabled);

        // The other tracker keeps its defaults.
        assert_eq!(*trackers[1].thresholds(), Thresholds::default());
    }

    #[test]
    fn test_unknown_tracker_keys_are_ignored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[trackers.sensor]
urgent = 240
"#
        )
        .unwrap();

        let config = Config::load_from(Some(file.path())).unwrap();
        let trackers = config.build_trackers();
        assert_eq!(trackers.len(), 2);
        assert_eq!(*trackers[0].thresholds(), Thresholds::default());
    }
}
