// Curated per-champion rune pages, keyed by champion id. This is the tier
// between live provider data and the generic page: hand-checked keystones
// and spell pairs for commonly played champions, merged with the generic
// role item buckets.

use super::{fallback, Build, RuneSelection};

struct CuratedBuild {
  champion_id: i64,
  primary_style: i32,
  sub_style: i32,
  perks: [i32; 9],
  spells: [i32; 2],
}

// Tree ids: 8000 Precision, 8100 Domination, 8200 Sorcery, 8300 Inspiration,
// 8400 Resolve. Perk order: keystone, 3 primary, 2 secondary, 3 shards.
#[rustfmt::skip]
static CURATED: &[CuratedBuild] = &[
  // Mages
  CuratedBuild { champion_id: 103, primary_style: 8100, sub_style: 8200, // Ahri
    perks: [8112, 8143, 8140, 8135, 8226, 8237, 5008, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 34, primary_style: 8200, sub_style: 8300, // Anivia
    perks: [8214, 8226, 8210, 8236, 8304, 8347, 5008, 5008, 5002], spells: [4, 12] },
  CuratedBuild { champion_id: 99, primary_style: 8200, sub_style: 8300, // Lux
    perks: [8229, 8226, 8210, 8237, 8304, 8345, 5008, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 112, primary_style: 8200, sub_style: 8300, // Viktor
    perks: [8229, 8226, 8210, 8236, 8304, 8345, 5008, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 61, primary_style: 8200, sub_style: 8300, // Orianna
    perks: [8229, 8226, 8210, 8236, 8304, 8345, 5008, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 142, primary_style: 8200, sub_style: 8300, // Zoe
    perks: [8229, 8226, 8233, 8237, 8304, 8345, 5008, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 69, primary_style: 8200, sub_style: 8000, // Cassiopeia
    perks: [8230, 8226, 8210, 8237, 9101, 9104, 5008, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 268, primary_style: 8200, sub_style: 8300, // Azir
    perks: [8229, 8226, 8210, 8236, 8304, 8347, 5008, 5008, 5002], spells: [4, 12] },
  CuratedBuild { champion_id: 711, primary_style: 8200, sub_style: 8100, // Vex
    perks: [8229, 8226, 8210, 8237, 8143, 8135, 5008, 5008, 5002], spells: [4, 14] },
  // Tanks / junglers
  CuratedBuild { champion_id: 154, primary_style: 8400, sub_style: 8300, // Zac
    perks: [8439, 8446, 8473, 8451, 8304, 8347, 5005, 5008, 5002], spells: [4, 11] },
  CuratedBuild { champion_id: 32, primary_style: 8400, sub_style: 8000, // Amumu
    perks: [8439, 8446, 8473, 8451, 8009, 8014, 5005, 5008, 5002], spells: [4, 11] },
  CuratedBuild { champion_id: 20, primary_style: 8400, sub_style: 8300, // Nunu & Willump
    perks: [8439, 8446, 8473, 8451, 8304, 8347, 5005, 5008, 5002], spells: [4, 11] },
  CuratedBuild { champion_id: 64, primary_style: 8000, sub_style: 8100, // Lee Sin
    perks: [8010, 9101, 9104, 8014, 8143, 8135, 5005, 5008, 5002], spells: [4, 11] },
  CuratedBuild { champion_id: 104, primary_style: 8000, sub_style: 8100, // Graves
    perks: [8021, 9101, 9104, 8014, 8143, 8135, 5005, 5008, 5002], spells: [4, 11] },
  CuratedBuild { champion_id: 254, primary_style: 8000, sub_style: 8400, // Vi
    perks: [8010, 9101, 9104, 8014, 8473, 8451, 5005, 5008, 5002], spells: [4, 11] },
  CuratedBuild { champion_id: 245, primary_style: 8100, sub_style: 8000, // Ekko
    perks: [8112, 8139, 8140, 8135, 9104, 8014, 5008, 5008, 5002], spells: [4, 11] },
  CuratedBuild { champion_id: 120, primary_style: 8000, sub_style: 8400, // Hecarim
    perks: [8010, 9101, 9104, 8014, 8473, 8451, 5005, 5008, 5002], spells: [4, 11] },
  CuratedBuild { champion_id: 28, primary_style: 8100, sub_style: 8200, // Evelynn
    perks: [8128, 8143, 8140, 8135, 8226, 8236, 5008, 5008, 5002], spells: [4, 11] },
  CuratedBuild { champion_id: 141, primary_style: 8000, sub_style: 8100, // Kayn
    perks: [8010, 9101, 9104, 8014, 8143, 8135, 5005, 5008, 5002], spells: [4, 11] },
  CuratedBuild { champion_id: 234, primary_style: 8000, sub_style: 8100, // Viego
    perks: [8010, 9101, 9104, 8014, 8143, 8135, 5005, 5008, 5002], spells: [4, 11] },
  CuratedBuild { champion_id: 876, primary_style: 8200, sub_style: 8300, // Lillia
    perks: [8230, 8226, 8210, 8236, 8304, 8347, 5008, 5008, 5002], spells: [4, 11] },
  // Fighters / top laners
  CuratedBuild { champion_id: 266, primary_style: 8000, sub_style: 8400, // Aatrox
    perks: [8010, 9101, 9104, 8014, 8473, 8451, 5005, 5008, 5002], spells: [4, 12] },
  CuratedBuild { champion_id: 24, primary_style: 8000, sub_style: 8400, // Jax
    perks: [8010, 9101, 9104, 8014, 8473, 8451, 5005, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 122, primary_style: 8000, sub_style: 8400, // Darius
    perks: [8010, 9101, 9104, 8014, 8473, 8451, 5005, 5008, 5002], spells: [4, 6] },
  CuratedBuild { champion_id: 86, primary_style: 8000, sub_style: 8400, // Garen
    perks: [8010, 9101, 9104, 8014, 8473, 8451, 5005, 5008, 5002], spells: [4, 6] },
  CuratedBuild { champion_id: 54, primary_style: 8400, sub_style: 8200, // Malphite
    perks: [8439, 8446, 8473, 8451, 8229, 8236, 5008, 5008, 5002], spells: [4, 12] },
  CuratedBuild { champion_id: 114, primary_style: 8000, sub_style: 8400, // Fiora
    perks: [8010, 9101, 9104, 8014, 8473, 8451, 5005, 5008, 5002], spells: [4, 12] },
  CuratedBuild { champion_id: 164, primary_style: 8000, sub_style: 8400, // Camille
    perks: [8010, 9101, 9104, 8014, 8473, 8451, 5005, 5008, 5002], spells: [4, 12] },
  CuratedBuild { champion_id: 98, primary_style: 8400, sub_style: 8000, // Shen
    perks: [8437, 8446, 8473, 8451, 9101, 9104, 5008, 5008, 5002], spells: [4, 12] },
  CuratedBuild { champion_id: 39, primary_style: 8000, sub_style: 8400, // Irelia
    perks: [8010, 9101, 9104, 8014, 8473, 8451, 5005, 5008, 5002], spells: [4, 12] },
  CuratedBuild { champion_id: 58, primary_style: 8000, sub_style: 8400, // Renekton
    perks: [8010, 9101, 9104, 8014, 8473, 8451, 5005, 5008, 5002], spells: [4, 12] },
  CuratedBuild { champion_id: 17, primary_style: 8200, sub_style: 8100, // Teemo
    perks: [8230, 8226, 8234, 8237, 8143, 8135, 5008, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 875, primary_style: 8000, sub_style: 8400, // Sett
    perks: [8010, 9101, 9104, 8014, 8473, 8451, 5005, 5008, 5002], spells: [4, 12] },
  CuratedBuild { champion_id: 887, primary_style: 8000, sub_style: 8400, // Gwen
    perks: [8010, 9101, 9104, 8014, 8473, 8451, 5005, 5008, 5002], spells: [4, 12] },
  CuratedBuild { champion_id: 92, primary_style: 8000, sub_style: 8400, // Riven
    perks: [8010, 9101, 9104, 8014, 8473, 8451, 5005, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 516, primary_style: 8400, sub_style: 8000, // Ornn
    perks: [8437, 8446, 8473, 8451, 9101, 9104, 5008, 5008, 5002], spells: [4, 12] },
  // Assassins
  CuratedBuild { champion_id: 238, primary_style: 8100, sub_style: 8200, // Zed
    perks: [8112, 8143, 8140, 8135, 8226, 8237, 5008, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 121, primary_style: 8100, sub_style: 8200, // Kha'Zix
    perks: [8128, 8143, 8140, 8135, 8226, 8236, 5008, 5008, 5002], spells: [4, 11] },
  CuratedBuild { champion_id: 84, primary_style: 8100, sub_style: 8000, // Akali
    perks: [8112, 8143, 8140, 8135, 8009, 8014, 5008, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 55, primary_style: 8100, sub_style: 8000, // Katarina
    perks: [8112, 8139, 8140, 8135, 9104, 8014, 5008, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 517, primary_style: 8100, sub_style: 8200, // Sylas
    perks: [8112, 8139, 8140, 8135, 8226, 8237, 5008, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 76, primary_style: 8100, sub_style: 8200, // Nidalee
    perks: [8128, 8143, 8140, 8135, 8226, 8236, 5008, 5008, 5002], spells: [4, 11] },
  CuratedBuild { champion_id: 107, primary_style: 8100, sub_style: 8200, // Rengar
    perks: [8128, 8143, 8140, 8135, 8226, 8236, 5008, 5008, 5002], spells: [4, 11] },
  // Marksmen
  CuratedBuild { champion_id: 222, primary_style: 8000, sub_style: 8100, // Jinx
    perks: [8021, 9101, 9104, 8014, 8143, 8135, 5005, 5008, 5002], spells: [4, 7] },
  CuratedBuild { champion_id: 22, primary_style: 8000, sub_style: 8300, // Ashe
    perks: [8005, 9101, 9104, 8014, 8304, 8347, 5005, 5008, 5002], spells: [4, 7] },
  CuratedBuild { champion_id: 51, primary_style: 8000, sub_style: 8100, // Caitlyn
    perks: [8021, 9101, 9104, 8014, 8143, 8135, 5005, 5008, 5002], spells: [4, 7] },
  CuratedBuild { champion_id: 166, primary_style: 8000, sub_style: 8100, // Akshan
    perks: [8005, 9101, 9104, 8014, 8143, 8135, 5005, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 81, primary_style: 8000, sub_style: 8300, // Ezreal
    perks: [8021, 9101, 9104, 8014, 8304, 8347, 5005, 5008, 5002], spells: [4, 7] },
  CuratedBuild { champion_id: 21, primary_style: 8000, sub_style: 8100, // Miss Fortune
    perks: [8008, 9101, 9104, 8014, 8143, 8135, 5005, 5008, 5002], spells: [4, 7] },
  CuratedBuild { champion_id: 67, primary_style: 8000, sub_style: 8100, // Vayne
    perks: [8021, 9101, 9104, 8014, 8143, 8135, 5005, 5008, 5002], spells: [4, 7] },
  CuratedBuild { champion_id: 202, primary_style: 8000, sub_style: 8200, // Jhin
    perks: [8021, 9101, 9104, 8017, 8233, 8237, 5005, 5008, 5002], spells: [4, 7] },
  CuratedBuild { champion_id: 235, primary_style: 8000, sub_style: 8400, // Senna
    perks: [8021, 9101, 9104, 8014, 8446, 8451, 5008, 5008, 5002], spells: [4, 7] },
  CuratedBuild { champion_id: 236, primary_style: 8000, sub_style: 8100, // Lucian
    perks: [8005, 9101, 9104, 8014, 8143, 8135, 5005, 5008, 5002], spells: [4, 7] },
  CuratedBuild { champion_id: 145, primary_style: 8000, sub_style: 8100, // Kai'Sa
    perks: [8021, 9101, 9104, 8014, 8143, 8135, 5005, 5008, 5002], spells: [4, 7] },
  CuratedBuild { champion_id: 498, primary_style: 8000, sub_style: 8100, // Xayah
    perks: [8021, 9101, 9104, 8014, 8143, 8135, 5005, 5008, 5002], spells: [4, 7] },
  CuratedBuild { champion_id: 360, primary_style: 8000, sub_style: 8100, // Samira
    perks: [8005, 9101, 9104, 8014, 8143, 8135, 5005, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 523, primary_style: 8000, sub_style: 8100, // Aphelios
    perks: [8021, 9101, 9104, 8014, 8143, 8135, 5005, 5008, 5002], spells: [4, 7] },
  // Supports
  CuratedBuild { champion_id: 412, primary_style: 8400, sub_style: 8300, // Thresh
    perks: [8439, 8446, 8473, 8451, 8304, 8347, 5008, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 117, primary_style: 8200, sub_style: 8300, // Lulu
    perks: [8214, 8226, 8210, 8236, 8304, 8347, 5008, 5008, 5002], spells: [4, 3] },
  CuratedBuild { champion_id: 16, primary_style: 8200, sub_style: 8400, // Soraka
    perks: [8214, 8226, 8210, 8236, 8473, 8451, 5008, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 40, primary_style: 8200, sub_style: 8300, // Janna
    perks: [8214, 8226, 8210, 8236, 8304, 8347, 5008, 5008, 5002], spells: [4, 3] },
  CuratedBuild { champion_id: 89, primary_style: 8400, sub_style: 8000, // Leona
    perks: [8439, 8446, 8473, 8451, 9101, 9104, 5008, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 53, primary_style: 8400, sub_style: 8000, // Blitzcrank
    perks: [8439, 8446, 8473, 8451, 9101, 8014, 5008, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 25, primary_style: 8200, sub_style: 8300, // Morgana
    perks: [8229, 8226, 8210, 8237, 8304, 8347, 5008, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 267, primary_style: 8200, sub_style: 8300, // Nami
    perks: [8214, 8226, 8210, 8236, 8304, 8347, 5008, 5008, 5002], spells: [4, 3] },
  // Skirmishers
  CuratedBuild { champion_id: 157, primary_style: 8000, sub_style: 8400, // Yasuo
    perks: [8008, 9101, 9104, 8014, 8473, 8451, 5005, 5008, 5002], spells: [4, 14] },
  CuratedBuild { champion_id: 777, primary_style: 8000, sub_style: 8400, // Yone
    perks: [8008, 9101, 9104, 8014, 8473, 8451, 5005, 5008, 5002], spells: [4, 14] },
];

/// Curated build for a champion, with role-bucket items. None when the
/// champion has no curated entry (the generic tier covers that).
pub fn lookup(champion_id: i64, role: &str) -> Option<Build> {
  let entry = CURATED.iter().find(|b| b.champion_id == champion_id)?;
  Some(Build {
    runes: RuneSelection::new(entry.primary_style, entry.sub_style, entry.perks),
    items: fallback::role_items(role),
    summoner_spells: entry.spells,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_champion_resolves_with_role_items() {
    let build = lookup(103, "middle").unwrap();
    assert_eq!(build.runes.primary_style, 8100);
    assert_eq!(build.runes.keystone(), 8112);
    assert_eq!(build.items, fallback::role_items("middle"));
    assert_eq!(build.summoner_spells, [4, 14]);
  }

  #[test]
  fn unknown_champion_has_no_entry() {
    assert!(lookup(0, "middle").is_none());
    assert!(lookup(424_242, "top").is_none());
  }

  /// The table covers the full curated roster, not just the headliners:
  /// a sample spanning every section must resolve without falling through
  /// to the generic tier.
  #[test]
  fn full_roster_is_covered() {
    assert_eq!(CURATED.len(), 67);
    for id in [61, 86, 81, 202, 145, 875, 268, 516, 523, 876, 267, 245] {
      assert!(lookup(id, "middle").is_some(), "champion {} missing", id);
    }
  }

  #[test]
  fn sampled_rows_carry_their_hand_checked_pages() {
    let orianna = lookup(61, "middle").unwrap();
    assert_eq!(orianna.runes.keystone(), 8229); // Arcane Comet
    assert_eq!(orianna.runes.sub_style, 8300);

    let sett = lookup(875, "top").unwrap();
    assert_eq!(sett.runes.keystone(), 8010); // Conqueror
    assert_eq!(sett.summoner_spells, [4, 12]);

    let jhin = lookup(202, "bottom").unwrap();
    assert_eq!(jhin.runes.keystone(), 8021); // Fleet Footwork
    assert_eq!(jhin.summoner_spells, [4, 7]);
  }

  #[test]
  fn table_has_no_duplicate_champion_ids() {
    let mut ids: Vec<i64> = CURATED.iter().map(|b| b.champion_id).collect();
    ids.sort_unstable();
    let len_before = ids.len();
    ids.dedup();
    assert_eq!(ids.len(), len_before);
  }

  #[test]
  fn every_entry_has_valid_tree_and_shard_slots() {
    for entry in CURATED {
      assert!(entry.primary_style >= 8000 && entry.primary_style <= 8400);
      assert!(entry.sub_style >= 8000 && entry.sub_style <= 8400);
      assert_ne!(entry.primary_style, entry.sub_style);
      // Trailing three slots are stat shards (5xxx range).
      for shard in &entry.perks[6..9] {
        assert!((5000..6000).contains(shard), "bad shard {} for {}", shard, entry.champion_id);
      }
    }
  }
}
