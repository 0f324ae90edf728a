// Rune page application against the client.
//
// The account has a hard ceiling on stored pages, so before creating a page
// we prune the pages this tool (or its siblings) created earlier, recognized
// by naming prefix. Pages the user made, default pages, and the account's
// last remaining page are never touched.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::builds::champions;
use crate::builds::RuneSelection;
use crate::lcu::rest::{LcuRestClient, RunePage, RunePageRequest};
use crate::Result;

/// Prefixes that mark a page as auto-created and safe to prune.
pub const OWN_PAGE_PREFIXES: [&str; 4] = ["U.GG", "OP.GG", "Lolalytics", "Auto"];

pub struct RunePageManager {
  rest: Arc<LcuRestClient>,
  label: String,
}

impl RunePageManager {
  pub fn new(rest: Arc<LcuRestClient>, label: &str) -> Self {
    RunePageManager {
      rest,
      label: label.to_string(),
    }
  }

  /// Replace-and-activate: prune our old pages, then create the new one
  /// flagged current so the client switches immediately. Any remote failure
  /// aborts the remaining steps; pages already deleted stay deleted.
  pub async fn apply(&self, runes: &RuneSelection, champion_id: i64, role: &str) -> Result<()> {
    let name = self.page_name(champion_id, role);

    let pruned = self.cleanup_own_pages().await?;
    if pruned > 0 {
      debug!("pruned {} old auto-created rune page(s)", pruned);
    }

    let request = RunePageRequest {
      name: name.clone(),
      primary_style_id: runes.primary_style,
      sub_style_id: runes.sub_style,
      selected_perk_ids: runes.perks().to_vec(),
      current: true,
    };
    let created = self.rest.create_rune_page(&request).await?;
    info!("applied rune page: {}", name);

    // The request carried `current: true`; confirm the client switched.
    // Failure to confirm is not failure to apply, so it only logs.
    match self.rest.current_rune_page().await {
      Ok(active) if page_became_active(&created, &active) => {}
      Ok(active) => warn!("client kept page \"{}\" active instead of \"{}\"", active.name, name),
      Err(e) => debug!("could not read back active rune page: {}", e),
    }
    Ok(())
  }

  /// Delete every page we recognize as our own, except default pages and
  /// the account's sole remaining page (the client forbids zero pages).
  /// Returns the number of pages deleted.
  pub async fn cleanup_own_pages(&self) -> Result<usize> {
    let pages = self.rest.rune_pages().await?;
    let doomed = removable_page_ids(&pages);
    let count = doomed.len();
    for id in doomed {
      self.rest.delete_rune_page(id).await?;
    }
    Ok(count)
  }

  fn page_name(&self, champion_id: i64, role: &str) -> String {
    format!(
      "{} - {} {}",
      self.label,
      champions::display_name(champion_id),
      capitalize(role)
    )
  }
}

/// Which page ids the cleanup pass may delete, in order. Keeps the account
/// non-empty at every intermediate step.
pub(crate) fn removable_page_ids(pages: &[RunePage]) -> Vec<i64> {
  let mut remaining = pages.len();
  let mut doomed = Vec::new();

  for page in pages {
    if remaining <= 1 {
      break;
    }
    if page.is_default_page {
      continue;
    }
    if !is_own_page(&page.name) {
      continue;
    }
    doomed.push(page.id);
    remaining -= 1;
  }
  doomed
}

// Ids are assigned on create; some client versions renumber pages on
// activation, hence the name fallback.
pub(crate) fn page_became_active(created: &RunePage, active: &RunePage) -> bool {
  active.id == created.id || active.name == created.name
}

fn is_own_page(name: &str) -> bool {
  OWN_PAGE_PREFIXES
    .iter()
    .any(|prefix| name.starts_with(prefix))
}

fn capitalize(role: &str) -> String {
  let mut chars = role.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}
