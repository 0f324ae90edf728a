// Build resolution: given a champion and role, produce a Build - always.
// The resolver degrades in fidelity, never in availability: live provider
// data first, then the curated per-champion table, then a generic page.

pub mod champions;
pub mod curated;
pub mod fallback;
pub mod provider;
pub mod ugg;

pub use provider::BuildProvider;
pub use ugg::UggProvider;

use tracing::{debug, warn};

/// A complete rune page: both tree ids plus exactly 9 perks. Position 0 is
/// the keystone, positions 6-8 the stat shards. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuneSelection {
  pub primary_style: i32,
  pub sub_style: i32,
  perks: [i32; 9],
}

impl RuneSelection {
  pub const PERK_COUNT: usize = 9;

  pub fn new(primary_style: i32, sub_style: i32, perks: [i32; 9]) -> Self {
    RuneSelection {
      primary_style,
      sub_style,
      perks,
    }
  }

  /// Build from provider data of unknown length; anything but 9 perks is a
  /// parse failure.
  pub fn from_perks(primary_style: i32, sub_style: i32, perks: &[i32]) -> Option<Self> {
    let perks: [i32; 9] = perks.try_into().ok()?;
    Some(RuneSelection::new(primary_style, sub_style, perks))
  }

  pub fn perks(&self) -> &[i32; 9] {
    &self.perks
  }

  pub fn keystone(&self) -> i32 {
    self.perks[0]
  }

  pub fn shards(&self) -> &[i32] {
    &self.perks[6..9]
  }
}

/// Ordered item recommendations. `core` is non-empty whenever a build was
/// resolved through any tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPlan {
  pub starting: Vec<i32>,
  pub core: Vec<i32>,
  pub situational: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Build {
  pub runes: RuneSelection,
  pub items: ItemPlan,
  pub summoner_spells: [i32; 2],
}

/// Ordered fallback chain over build sources. Total: any champion id and any
/// role string yields a Build.
pub struct BuildResolver {
  provider: Option<Box<dyn BuildProvider>>,
}

impl BuildResolver {
  pub fn new(provider: Box<dyn BuildProvider>) -> Self {
    BuildResolver {
      provider: Some(provider),
    }
  }

  /// Resolver with the live tier disabled; used offline and in tests.
  pub fn without_live() -> Self {
    BuildResolver { provider: None }
  }

  pub async fn resolve(&self, champion_id: i64, role: &str, patch: &str) -> Build {
    if let Some(provider) = &self.provider {
      match provider.fetch_build(champion_id, role, patch).await {
        Ok(build) => {
          debug!("{} supplied a build for champion {}", provider.label(), champion_id);
          return build;
        }
        Err(e) => {
          warn!("live tier failed, falling back: {}", e);
        }
      }
    }

    if let Some(build) = curated::lookup(champion_id, role) {
      debug!("curated table supplied a build for champion {}", champion_id);
      return build;
    }

    fallback::generic_build(role)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::Error;
  use async_trait::async_trait;

  struct FailingProvider;

  #[async_trait]
  impl BuildProvider for FailingProvider {
    fn label(&self) -> &str {
      "failing"
    }

    async fn fetch_build(
      &self,
      _champion_id: i64,
      _role: &str,
      _patch: &str,
    ) -> crate::Result<Build> {
      Err(Error::Provider {
        provider: "failing".to_string(),
        reason: "HTTP 500".to_string(),
      })
    }
  }

  #[test]
  fn rune_selection_rejects_wrong_perk_counts() {
    assert!(RuneSelection::from_perks(8100, 8200, &[8112; 8]).is_none());
    assert!(RuneSelection::from_perks(8100, 8200, &[8112; 10]).is_none());
    assert!(RuneSelection::from_perks(8100, 8200, &[8112; 9]).is_some());
  }

  #[test]
  fn keystone_and_shards_positions() {
    let runes =
      RuneSelection::new(8100, 8200, [8112, 8143, 8140, 8135, 8226, 8237, 5008, 5008, 5002]);
    assert_eq!(runes.keystone(), 8112);
    assert_eq!(runes.shards(), &[5008, 5008, 5002]);
  }

  /// Scenario from the curated path: live tier forced to fail, champion 103
  /// is in the curated table, so its rune page comes back with the middle
  /// item bucket.
  #[tokio::test]
  async fn live_failure_falls_back_to_curated() {
    let resolver = BuildResolver::new(Box::new(FailingProvider));
    let build = resolver.resolve(103, "middle", "14_1").await;
    assert_eq!(build.runes.primary_style, 8100);
    assert_eq!(build.runes.perks().len(), 9);
    assert_eq!(build.items, fallback::role_items("middle"));
    assert!(!build.items.core.is_empty());
  }

  #[tokio::test]
  async fn unknown_champion_gets_generic_build() {
    let resolver = BuildResolver::without_live();
    let build = resolver.resolve(999_999, "top", "14_1").await;
    assert_eq!(build.runes.keystone(), 8010);
    assert!(!build.items.core.is_empty());
  }

  #[tokio::test]
  async fn garbage_role_still_resolves() {
    let resolver = BuildResolver::without_live();
    for role in ["", "???", "JuNgLe", "feed"] {
      let build = resolver.resolve(-5, role, "whatever").await;
      assert_eq!(build.runes.perks().len(), 9);
      assert!(!build.items.core.is_empty());
    }
  }
}
