// Presentation sink interface. The core pushes human-readable status and
// resolved builds through this trait and does not care how they render;
// the default sink just logs.

use crate::builds::Build;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  Info,
  Working,
  Success,
  Error,
}

pub trait StatusSink: Send + Sync {
  fn update_status(&self, message: &str, severity: Severity);

  fn display_build(&self, champion: &str, role: &str, build: &Build);
}

/// Sink used when no GUI/tray frontend is attached.
pub struct LogSink;

impl StatusSink for LogSink {
  fn update_status(&self, message: &str, severity: Severity) {
    match severity {
      Severity::Error => error!("{}", message),
      _ => info!("{}", message),
    }
  }

  fn display_build(&self, champion: &str, role: &str, build: &Build) {
    info!(
      "{} ({}): runes {}/{} keystone {}, core items {:?}, spells {:?}",
      champion,
      role,
      build.runes.primary_style,
      build.runes.sub_style,
      build.runes.keystone(),
      build.items.core,
      build.summoner_spells
    );
  }
}
