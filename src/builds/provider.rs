// Strategy seam for build data sources. The fallback chain composes
// instances of this trait; a provider either returns a complete Build or
// fails, and partial data counts as failure.

use async_trait::async_trait;

use super::Build;
use crate::Result;

#[async_trait]
pub trait BuildProvider: Send + Sync {
  /// Short source label, also used in rune page names.
  fn label(&self) -> &str;

  /// Fetch a build for champion+role at the given patch. The patch tag is
  /// advisory; providers may serve newer data.
  async fn fetch_build(&self, champion_id: i64, role: &str, patch: &str) -> Result<Build>;
}
