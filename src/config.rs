// Application configuration, read from a JSON file next to the binary.
// Missing file or unreadable fields fall back to defaults; the app should
// start with zero setup on a standard install.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Directories searched for the client lockfile. The process command line
  /// fallback runs regardless, so this list is best-effort.
  pub league_dirs: Vec<PathBuf>,

  /// Label used in created rune page names ("U.GG - Ahri Middle").
  pub provider_label: String,

  /// Role used when the session reports no assigned position. Normal
  /// matchmaking always assigns one; this mostly matters for Practice Tool
  /// style sessions. The original behavior differed between entry points
  /// ("middle" headless, "top" in the visual build), so it is configurable.
  pub default_role: String,

  /// Treat a hovered (pick-intent) champion as a selection before lock-in.
  pub act_on_hover: bool,

  /// Patch tag used when the provider's patch endpoint is unreachable.
  pub pinned_patch: String,

  /// Seconds between bootstrap attempts while the client is not running.
  pub connect_poll_secs: u64,

  /// Default timeout for one-shot event waits, in seconds.
  pub wait_for_timeout_secs: u64,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      league_dirs: vec![
        PathBuf::from("C:/Riot Games/League of Legends"),
        PathBuf::from("C:/Program Files/Riot Games/League of Legends"),
        PathBuf::from("C:/Program Files (x86)/Riot Games/League of Legends"),
      ],
      provider_label: "U.GG".to_string(),
      default_role: "middle".to_string(),
      act_on_hover: true,
      pinned_patch: "14_1".to_string(),
      connect_poll_secs: 5,
      wait_for_timeout_secs: 30,
    }
  }
}

impl Config {
  pub fn load(path: &Path) -> Config {
    match fs::read_to_string(path) {
      Ok(contents) => match serde_json::from_str::<Config>(&contents) {
        Ok(cfg) => cfg,
        Err(e) => {
          warn!("config file {} is invalid ({}), using defaults", path.display(), e);
          Config::default()
        }
      },
      Err(_) => Config::default(),
    }
  }
}
