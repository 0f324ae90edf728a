// Last-resort tier: one rune page that works on most champions plus
// role-indexed generic item buckets. This tier cannot fail.

use super::{Build, ItemPlan, RuneSelection};
use crate::picks::normalize_role;

/// Role-appropriate generic items. Unknown roles get the middle bucket.
pub fn role_items(role: &str) -> ItemPlan {
  match normalize_role(role).as_str() {
    "top" => ItemPlan {
      starting: vec![1054, 2003], // Doran's Shield + Pot
      core: vec![3078, 3153, 3742], // Trinity, BotRK, Hullbreaker
      situational: vec![3065, 3156, 3143],
    },
    "jungle" => ItemPlan {
      starting: vec![1039, 2003, 2003],
      core: vec![6693, 3074, 3153],
      situational: vec![3065, 3143, 6333],
    },
    "bottom" => ItemPlan {
      starting: vec![1055, 2003], // Doran's Blade + Pot
      core: vec![3006, 6672, 3031], // Zerker's, Kraken, IE
      situational: vec![3139, 3046, 3036],
    },
    "support" => ItemPlan {
      starting: vec![3854, 2003, 2003],
      core: vec![3107, 3222, 3190], // Redemption, Crucible, Locket
      situational: vec![3109, 3504, 3050],
    },
    _ => ItemPlan {
      starting: vec![1056, 2003, 2003], // Doran's Ring + Pots
      core: vec![3020, 6653, 3135], // Sorc Shoes, Luden's, Void Staff
      situational: vec![3157, 3165, 3089],
    },
  }
}

/// Bruiser-style Conqueror page usable on nearly any champion.
pub fn generic_build(role: &str) -> Build {
  Build {
    runes: RuneSelection::new(
      8000, // Precision
      8400, // Resolve
      [
        8010, // Conqueror
        9101, // Overheal
        9104, // Legend: Alacrity
        8014, // Coup de Grace
        8473, // Bone Plating
        8451, // Overgrowth
        5008, 5008, 5002,
      ],
    ),
    items: role_items(role),
    summoner_spells: [4, 14],
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_role_bucket_has_core_items() {
    for role in ["top", "jungle", "middle", "bottom", "support"] {
      assert!(!role_items(role).core.is_empty(), "empty core for {}", role);
      assert!(!role_items(role).starting.is_empty());
    }
  }

  #[test]
  fn unknown_role_maps_to_middle_bucket() {
    assert_eq!(role_items("???"), role_items("middle"));
    assert_eq!(role_items(""), role_items("middle"));
  }

  #[test]
  fn unnormalized_labels_hit_the_right_bucket() {
    assert_eq!(role_items("UTILITY"), role_items("support"));
    assert_eq!(role_items("adc"), role_items("bottom"));
  }

  #[test]
  fn generic_build_is_complete() {
    let build = generic_build("jungle");
    assert_eq!(build.runes.keystone(), 8010);
    assert_eq!(build.runes.perks().len(), 9);
    assert_eq!(build.runes.shards().len(), 3);
    assert!(!build.items.core.is_empty());
  }
}
