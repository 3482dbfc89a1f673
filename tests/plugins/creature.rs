use bestiary::core::error::BestiaryError;
use bestiary::core::store::{SaveOutcome, Store, StoreConfig};
use bestiary::plugins::creature::Creature;
use std::fs;
use tempfile::tempdir;

fn test_store(dir: &tempfile::TempDir) -> Store {
    Store::new(StoreConfig::new(dir.path().join(".bestiary").join("creatures.json")))
}

#[test]
fn goblin_lifecycle_from_empty_store() {
    let tmp = tempdir().unwrap();
    let store = test_store(&tmp);

    let goblin = Creature::new("Goblin", "Humanoid", "1/4", "Small", "Chaotic Evil", "2d6");
    assert_eq!(goblin.save(&store).unwrap(), SaveOutcome::Inserted { index: 0 });

    let mut found = Creature::find_by_name(&store, "Goblin").unwrap().unwrap();
    assert_eq!(found, goblin);
    assert!(found.attacks().is_empty());
    assert!(found.specials().is_empty());
    assert!(found.defense().is_none());

    found.add_attack("Scimitar", "+2", "1d6");
    assert_eq!(found.save(&store).unwrap(), SaveOutcome::Replaced { index: 0 });

    let reloaded = Creature::find_by_name(&store, "Goblin").unwrap().unwrap();
    assert_eq!(reloaded.attacks().len(), 1);
    assert_eq!(reloaded.attacks()[0].name, "Scimitar");
    assert_eq!(reloaded.attacks()[0].attack_bonus, "+2");
    assert_eq!(reloaded.attacks()[0].damage, "1d6");
    assert_eq!(store.load_all().unwrap().len(), 1);
}

#[test]
fn mutations_stay_in_memory_until_saved() {
    let tmp = tempdir().unwrap();
    let store = test_store(&tmp);

    let mut ogre = Creature::new("Ogre", "Giant", "2", "Large", "Chaotic Evil", "7d10+21");
    ogre.save(&store).unwrap();
    ogre.add_attack("Greatclub", "+6", "2d8+4");
    ogre.set_defense("11", "59", "");
    ogre.add_special("Brute", "Deals extra damage with melee weapons.");

    let stored = Creature::find_by_name(&store, "Ogre").unwrap().unwrap();
    assert!(stored.attacks().is_empty());
    assert!(stored.defense().is_none());

    ogre.save(&store).unwrap();
    let stored = Creature::find_by_name(&store, "Ogre").unwrap().unwrap();
    assert_eq!(stored, ogre);
}

#[test]
fn enriching_keeps_collection_order() {
    let tmp = tempdir().unwrap();
    let store = test_store(&tmp);

    for name in ["Goblin", "Kobold", "Orc"] {
        Creature::new(name, "Humanoid", "1/4", "Small", "Evil", "2d6")
            .register(&store)
            .unwrap();
    }

    let mut kobold = Creature::find_by_name(&store, "Kobold").unwrap().unwrap();
    kobold.set_defense("12", "5", "");
    kobold.set_defense("13", "6", "cold");
    kobold.save(&store).unwrap();

    let all = Creature::load_all(&store).unwrap();
    let names: Vec<&str> = all.iter().map(Creature::name).collect();
    assert_eq!(names, vec!["Goblin", "Kobold", "Orc"]);
    let defense = all[1].defense().unwrap();
    assert_eq!(defense.armor_class, "13");
    assert_eq!(defense.damage_resistance, "cold");
}

#[test]
fn lookup_of_unknown_name_is_none() {
    let tmp = tempdir().unwrap();
    let store = test_store(&tmp);

    assert!(Creature::find_by_name(&store, "Beholder").unwrap().is_none());
    assert!(Creature::load_all(&store).unwrap().is_empty());
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
}

#[test]
fn lookup_is_exact_match() {
    let tmp = tempdir().unwrap();
    let store = test_store(&tmp);
    Creature::new("Goblin", "Humanoid", "1/4", "Small", "Chaotic Evil", "2d6")
        .save(&store)
        .unwrap();

    assert!(Creature::find_by_name(&store, "goblin").unwrap().is_none());
    assert!(Creature::find_by_name(&store, "Goblin ").unwrap().is_none());
}

#[test]
fn record_written_by_hand_without_nested_fields_loads() {
    let tmp = tempdir().unwrap();
    let store = test_store(&tmp);
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(
        store.path(),
        r#"[{"name": "Wolf", "type": "Beast", "challenge_rating": "1/4",
             "size": "Medium", "alignment": "Unaligned", "hit_dice": "2d8+2"}]"#,
    )
    .unwrap();

    let mut wolf = Creature::find_by_name(&store, "Wolf").unwrap().unwrap();
    assert!(wolf.attacks().is_empty());
    wolf.add_special("Pack Tactics", "Advantage when an ally is adjacent to the target.");
    wolf.save(&store).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(raw[0]["type"], "Beast");
    assert_eq!(raw[0]["specials"][0]["name"], "Pack Tactics");
    assert_eq!(raw[0]["attacks"], serde_json::json!([]));
    assert!(raw[0].get("defense").is_none());
}

#[test]
fn hand_edited_numbers_and_nulls_do_not_hide_other_creatures() {
    let tmp = tempdir().unwrap();
    let store = test_store(&tmp);
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(
        store.path(),
        r#"[
  {"name": "Goblin", "type": "Humanoid", "challenge_rating": "1/4", "size": "Small",
   "alignment": "Chaotic Evil", "hit_dice": "2d6", "attacks": null, "specials": null},
  {"name": "Ogre", "type": "Giant", "challenge_rating": 2, "size": "Large",
   "alignment": "Chaotic Evil", "hit_dice": "7d10+21",
   "defense": {"armor_class": 11, "hit_points": 59, "damage_resistance": ""}},
  {"name": "Rat", "type": "Beast", "challenge_rating": 0, "size": "Tiny",
   "alignment": "Unaligned", "hit_dice": "1d4-1"}
]"#,
    )
    .unwrap();

    let goblin = Creature::find_by_name(&store, "Goblin").unwrap().unwrap();
    assert!(goblin.attacks().is_empty());
    assert!(goblin.specials().is_empty());

    let ogre = Creature::find_by_name(&store, "Ogre").unwrap().unwrap();
    let defense = ogre.defense().unwrap();
    assert_eq!(defense.armor_class, "11");
    assert_eq!(defense.hit_points, "59");
    assert_eq!(ogre.base_attributes()[2], ("challenge_rating", "2"));

    let rat = Creature::find_by_name(&store, "Rat").unwrap().unwrap();
    assert_eq!(rat.base_attributes()[2], ("challenge_rating", "0"));

    // Saving rewrites the numbers as text.
    ogre.save(&store).unwrap();
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(raw[1]["defense"]["armor_class"], "11");
    assert_eq!(raw[0]["attacks"], serde_json::json!([]));
}

#[test]
fn malformed_base_record_is_reported() {
    let tmp = tempdir().unwrap();
    let store = test_store(&tmp);
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(store.path(), r#"[{"name": "Shade", "type": "Undead"}]"#).unwrap();

    let err = Creature::find_by_name(&store, "Shade").unwrap_err();
    assert!(matches!(err, BestiaryError::MalformedRecord(_)));
    assert!(format!("{}", err).contains("challenge_rating"));
}
