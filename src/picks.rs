// Pick detection over champ-select session snapshots.
//
// Every session update arrives wholesale, so this resolver diffs for itself:
// it extracts the local participant's champion and role, and accepts the
// tuple only when it differs from the last accepted one. The accept step
// (read, compare, store) runs under one lock so concurrent snapshots cannot
// double-trigger the downstream action.

use std::sync::Mutex;

use serde_json::Value;

/// What the local participant currently has: a positive champion id (locked
/// or, policy permitting, hovered) and a normalized role token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
  pub champion_id: i64,
  pub role: String,
}

pub struct PickResolver {
  last_accepted: Mutex<Option<Selection>>,
  act_on_hover: bool,
  default_role: String,
}

impl PickResolver {
  pub fn new(act_on_hover: bool, default_role: &str) -> Self {
    PickResolver {
      last_accepted: Mutex::new(None),
      act_on_hover,
      default_role: default_role.to_string(),
    }
  }

  /// Feed one session snapshot. Returns the newly accepted selection, or
  /// None when the event carries nothing actionable (not joined yet, no
  /// champion chosen, or a duplicate of the last accepted tuple).
  pub fn observe(&self, session: &Value) -> Option<Selection> {
    let cell_id = session.get("localPlayerCellId")?.as_i64()?;

    let my_team = session.get("myTeam")?.as_array()?;
    let player = my_team
      .iter()
      .find(|p| p.get("cellId").and_then(|v| v.as_i64()) == Some(cell_id))?;

    let mut champion_id = player
      .get("championId")
      .and_then(|v| v.as_i64())
      .unwrap_or(0);
    if champion_id == 0 && self.act_on_hover {
      champion_id = player
        .get("championPickIntent")
        .and_then(|v| v.as_i64())
        .unwrap_or(0);
    }
    if champion_id <= 0 {
      return None;
    }

    let assigned = player
      .get("assignedPosition")
      .and_then(|v| v.as_str())
      .unwrap_or("");
    let role = if assigned.is_empty() {
      self.default_role.clone()
    } else {
      normalize_role(assigned)
    };

    let selection = Selection { champion_id, role };
    self.accept(selection)
  }

  // Indivisible read-compare-store; returns the selection only on change.
  fn accept(&self, selection: Selection) -> Option<Selection> {
    let mut last = self.last_accepted.lock().unwrap();
    if last.as_ref() == Some(&selection) {
      return None;
    }
    *last = Some(selection.clone());
    Some(selection)
  }
}

/// Collapse the client's position labels onto the five role tokens the
/// providers understand. Unknown labels pass through lowercased; the item
/// bucket lookup treats those as "middle".
pub fn normalize_role(role: &str) -> String {
  let lower = role.to_lowercase();
  match lower.as_str() {
    "top" => "top",
    "jungle" => "jungle",
    "middle" | "mid" => "middle",
    "bottom" | "adc" => "bottom",
    "utility" | "support" => "support",
    _ => return lower,
  }
  .to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn snapshot(cell_id: i64, champion_id: i64, intent: i64, position: &str) -> Value {
    json!({
      "localPlayerCellId": cell_id,
      "myTeam": [
        {"cellId": 0, "championId": 51, "assignedPosition": "bottom"},
        {
          "cellId": cell_id,
          "championId": champion_id,
          "championPickIntent": intent,
          "assignedPosition": position
        }
      ]
    })
  }

  #[test]
  fn accepts_locked_champion_with_role() {
    let resolver = PickResolver::new(true, "middle");
    let selection = resolver.observe(&snapshot(3, 103, 0, "middle")).unwrap();
    assert_eq!(selection.champion_id, 103);
    assert_eq!(selection.role, "middle");
  }

  #[test]
  fn repeated_snapshots_trigger_once() {
    let resolver = PickResolver::new(true, "middle");
    let snap = snapshot(3, 103, 0, "middle");
    assert!(resolver.observe(&snap).is_some());
    for _ in 0..5 {
      assert!(resolver.observe(&snap).is_none());
    }
  }

  #[test]
  fn champion_change_is_a_new_acceptance() {
    let resolver = PickResolver::new(true, "middle");
    assert!(resolver.observe(&snapshot(3, 103, 0, "middle")).is_some());
    let next = resolver.observe(&snapshot(3, 238, 0, "middle")).unwrap();
    assert_eq!(next.champion_id, 238);
  }

  #[test]
  fn role_change_alone_is_a_new_acceptance() {
    let resolver = PickResolver::new(true, "middle");
    assert!(resolver.observe(&snapshot(3, 103, 0, "middle")).is_some());
    let next = resolver.observe(&snapshot(3, 103, 0, "top")).unwrap();
    assert_eq!(next.role, "top");
  }

  #[test]
  fn hover_is_used_when_policy_allows() {
    let resolver = PickResolver::new(true, "middle");
    let selection = resolver.observe(&snapshot(3, 0, 84, "middle")).unwrap();
    assert_eq!(selection.champion_id, 84);
  }

  #[test]
  fn hover_is_ignored_when_policy_forbids() {
    let resolver = PickResolver::new(false, "middle");
    assert!(resolver.observe(&snapshot(3, 0, 84, "middle")).is_none());
    // Lock-in still goes through.
    assert!(resolver.observe(&snapshot(3, 84, 0, "middle")).is_some());
  }

  #[test]
  fn no_selection_yet_is_ignored() {
    let resolver = PickResolver::new(true, "middle");
    assert!(resolver.observe(&snapshot(3, 0, 0, "middle")).is_none());
  }

  #[test]
  fn missing_local_cell_id_is_ignored() {
    let resolver = PickResolver::new(true, "middle");
    let snap = json!({"myTeam": [{"cellId": 1, "championId": 103}]});
    assert!(resolver.observe(&snap).is_none());
  }

  #[test]
  fn local_seat_absent_from_team_is_ignored() {
    let resolver = PickResolver::new(true, "middle");
    let snap = json!({
      "localPlayerCellId": 9,
      "myTeam": [{"cellId": 1, "championId": 103, "assignedPosition": "middle"}]
    });
    assert!(resolver.observe(&snap).is_none());
  }

  #[test]
  fn empty_role_uses_configured_default() {
    let resolver = PickResolver::new(true, "top");
    let selection = resolver.observe(&snapshot(3, 86, 0, "")).unwrap();
    assert_eq!(selection.role, "top");
  }

  #[test]
  fn role_labels_normalize() {
    assert_eq!(normalize_role("UTILITY"), "support");
    assert_eq!(normalize_role("adc"), "bottom");
    assert_eq!(normalize_role("Mid"), "middle");
    assert_eq!(normalize_role("jungle"), "jungle");
    assert_eq!(normalize_role("weird"), "weird");
  }
}
