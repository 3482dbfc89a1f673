use bestiary::core::config::{self, BestiaryConfig};
use bestiary::core::error::BestiaryError;
use bestiary::core::record::{AttackRecord, CreatureRecord, DefenseRecord};
use bestiary::core::store::{SaveOutcome, Store};
use std::fs;
use tempfile::tempdir;

fn record(name: &str) -> CreatureRecord {
    CreatureRecord {
        name: Some(name.to_string()),
        creature_type: Some("Beast".to_string()),
        challenge_rating: Some("1".to_string()),
        size: Some("Medium".to_string()),
        alignment: Some("Unaligned".to_string()),
        hit_dice: Some("3d8".to_string()),
        ..Default::default()
    }
}

#[test]
fn store_resolved_from_config_file_bootstraps_nested_path() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join(".bestiary")).unwrap();
    fs::write(
        config::config_path(tmp.path()),
        "schema_version = \"1.0.0\"\n[store]\ndata_file = \"campaign/monsters.json\"\npretty = false\n",
    )
    .unwrap();

    let loaded = config::load_config(tmp.path()).unwrap();
    let store = Store::new(config::resolve_store_config(tmp.path(), &loaded, None, None));
    assert_eq!(store.path(), tmp.path().join("campaign/monsters.json"));
    assert!(!store.config().pretty);

    assert!(store.load_all().unwrap().is_empty());
    assert!(tmp.path().join("campaign/monsters.json").exists());
}

#[test]
fn upsert_replaces_whole_record() {
    let tmp = tempdir().unwrap();
    let store = Store::new(config::resolve_store_config(
        tmp.path(),
        &BestiaryConfig::default(),
        None,
        None,
    ));

    let mut bear = record("Bear");
    bear.attacks.push(AttackRecord {
        name: "Claw".to_string(),
        attack_bonus: "+5".to_string(),
        damage: "2d6+3".to_string(),
    });
    bear.defense = Some(DefenseRecord {
        armor_class: "11".to_string(),
        hit_points: "34".to_string(),
        damage_resistance: String::new(),
    });
    store.save(record("Boar")).unwrap();
    store.save(bear.clone()).unwrap();

    assert_eq!(store.find_by_name("Bear").unwrap(), Some(bear));

    let outcome = store.save(record("Bear")).unwrap();
    assert_eq!(outcome, SaveOutcome::Replaced { index: 1 });
    let stored = store.find_by_name("Bear").unwrap().unwrap();
    assert!(stored.attacks.is_empty());
    assert!(stored.defense.is_none());
}

#[test]
fn store_path_that_is_a_directory_is_an_io_error() {
    let tmp = tempdir().unwrap();
    let store = Store::new(bestiary::core::store::StoreConfig::new(tmp.path()));

    let err = store.load_all().unwrap_err();
    assert!(matches!(err, BestiaryError::IoError(_)));
}
