// U.GG structured stats endpoint. Responses rank candidate rune pages and
// item builds by popularity; we always take the first entry and never
// re-rank. A response missing runes or core items fails the whole tier.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::provider::BuildProvider;
use super::{Build, ItemPlan, RuneSelection};
use crate::error::{Error, Result};
use crate::picks::normalize_role;

const BASE_URL: &str = "https://stats2.u.gg/lol/1.5";
const DEFAULT_SPELLS: [i32; 2] = [4, 14]; // Flash + Ignite

pub struct UggProvider {
  http: reqwest::Client,
  base_url: String,
}

impl UggProvider {
  pub fn new() -> Self {
    UggProvider::with_base_url(BASE_URL)
  }

  pub fn with_base_url(base_url: &str) -> Self {
    let http = reqwest::Client::builder()
      .timeout(Duration::from_secs(10))
      .build()
      .unwrap_or_default();
    UggProvider {
      http,
      base_url: base_url.to_string(),
    }
  }

  /// Current patch tag ("14_1" style). Falls back to `pinned` when the
  /// endpoint is unreachable; the tag is advisory anyway.
  pub async fn current_patch(&self, pinned: &str) -> String {
    let url = format!("{}/current_patch.json", self.base_url);
    let fetched = async {
      let resp = self.http.get(&url).send().await.ok()?;
      if !resp.status().is_success() {
        return None;
      }
      let value = resp.json::<Value>().await.ok()?;
      value.get("patch")?.as_str().map(|s| s.to_string())
    }
    .await;

    fetched.unwrap_or_else(|| pinned.to_string())
  }

  fn fail(&self, reason: impl Into<String>) -> Error {
    Error::Provider {
      provider: self.label().to_string(),
      reason: reason.into(),
    }
  }
}

impl Default for UggProvider {
  fn default() -> Self {
    UggProvider::new()
  }
}

#[async_trait]
impl BuildProvider for UggProvider {
  fn label(&self) -> &str {
    "U.GG"
  }

  async fn fetch_build(&self, champion_id: i64, role: &str, patch: &str) -> Result<Build> {
    let role = normalize_role(role);
    let url = format!(
      "{}/overview/{}/ranked_solo_5x5/{}/{}/1.5.0.json",
      self.base_url, patch, champion_id, role
    );
    debug!("fetching build overview: {}", url);

    let resp = self.http.get(&url).send().await?;
    if !resp.status().is_success() {
      return Err(self.fail(format!("HTTP {}", resp.status())));
    }

    let data = resp.json::<Value>().await?;
    parse_overview(&data).ok_or_else(|| self.fail("overview payload unparseable or incomplete"))
  }
}

/// Parse a ranked overview document into a Build. Requires a full 9-perk
/// rune page and a non-empty core item list; partial documents yield None.
pub(crate) fn parse_overview(data: &Value) -> Option<Build> {
  let runes = extract_runes(data)?;
  let items = extract_items(data)?;
  let summoner_spells = extract_spells(data).unwrap_or(DEFAULT_SPELLS);

  Some(Build {
    runes,
    items,
    summoner_spells,
  })
}

fn extract_runes(data: &Value) -> Option<RuneSelection> {
  // Highest-popularity page is first in the source's own ordering.
  let best = data.get("runes")?.as_array()?.first()?;
  let primary = best.get("primaryStyle")?.as_i64()? as i32;
  let sub = best.get("subStyle")?.as_i64()? as i32;
  let perks: Vec<i32> = best
    .get("perks")?
    .as_array()?
    .iter()
    .filter_map(|v| v.as_i64().map(|n| n as i32))
    .collect();
  if primary == 0 || sub == 0 {
    return None;
  }
  RuneSelection::from_perks(primary, sub, &perks)
}

fn extract_items(data: &Value) -> Option<ItemPlan> {
  let best = data
    .get("items")?
    .get("item_builds")?
    .as_array()?
    .first()?;

  let ids = |key: &str| -> Vec<i32> {
    best
      .get(key)
      .and_then(|v| v.as_array())
      .map(|arr| arr.iter().filter_map(|v| v.as_i64().map(|n| n as i32)).collect())
      .unwrap_or_default()
  };

  let plan = ItemPlan {
    starting: ids("starting_items"),
    core: ids("core_items"),
    situational: ids("item_options"),
  };
  if plan.core.is_empty() {
    return None;
  }
  Some(plan)
}

fn extract_spells(data: &Value) -> Option<[i32; 2]> {
  let best = data.get("summoner_spells")?.as_array()?.first()?;
  let spells: Vec<i32> = best
    .get("spells")?
    .as_array()?
    .iter()
    .filter_map(|v| v.as_i64().map(|n| n as i32))
    .collect();
  spells.as_slice().try_into().ok()
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn full_overview() -> Value {
    json!({
      "runes": [
        {
          "primaryStyle": 8200,
          "subStyle": 8300,
          "perks": [8229, 8226, 8210, 8237, 8304, 8345, 5008, 5008, 5002],
          "pickRate": 0.61
        },
        {
          "primaryStyle": 8100,
          "subStyle": 8200,
          "perks": [8112, 8143, 8140, 8135, 8226, 8237, 5008, 5008, 5002],
          "pickRate": 0.22
        }
      ],
      "items": {
        "item_builds": [
          {
            "starting_items": [1056, 2003, 2003],
            "core_items": [3020, 6653, 3135],
            "item_options": [3157, 3165, 3089]
          }
        ]
      },
      "summoner_spells": [{"spells": [4, 12]}]
    })
  }

  #[test]
  fn parses_full_overview_taking_most_popular_entries() {
    let build = parse_overview(&full_overview()).unwrap();
    // First ranked page wins, no re-ranking.
    assert_eq!(build.runes.primary_style, 8200);
    assert_eq!(build.runes.keystone(), 8229);
    assert_eq!(build.items.core, vec![3020, 6653, 3135]);
    assert_eq!(build.summoner_spells, [4, 12]);
  }

  #[test]
  fn runes_without_items_is_tier_failure() {
    let mut data = full_overview();
    data["items"]["item_builds"][0]["core_items"] = json!([]);
    assert!(parse_overview(&data).is_none());
  }

  #[test]
  fn items_without_runes_is_tier_failure() {
    let mut data = full_overview();
    data["runes"] = json!([]);
    assert!(parse_overview(&data).is_none());
  }

  #[test]
  fn short_perk_list_is_tier_failure() {
    let mut data = full_overview();
    data["runes"][0]["perks"] = json!([8229, 8226, 8210]);
    assert!(parse_overview(&data).is_none());
  }

  #[test]
  fn missing_spells_fall_back_to_flash_ignite() {
    let mut data = full_overview();
    data["summoner_spells"] = json!([]);
    let build = parse_overview(&data).unwrap();
    assert_eq!(build.summoner_spells, DEFAULT_SPELLS);
  }
}
