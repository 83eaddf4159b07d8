use std::io::Write;

use tempfile::NamedTempFile;

use quick_consume_rs::buffs::{builtin_table, BuffLookup, CsvBuffTable, StaticBuffTable};
use quick_consume_rs::config::{
    load_settings, load_settings_or_default, save_settings, ModifierKey, Settings,
};
use quick_consume_rs::decision::evaluate;
use quick_consume_rs::models::{ConsumableItem, ConsumptionOutcome};
use quick_consume_rs::state::{load_items, save_items, Inventory, PlayerState};

#[test]
fn test_settings_roundtrip() {
    let settings = Settings {
        require_modifier: true,
        modifier_key: ModifierKey::RightAlt,
        allow_when_full: false,
        play_eat_sound: false,
        ..Default::default()
    };

    let file = NamedTempFile::new().unwrap();
    save_settings(file.path(), &settings).unwrap();

    let reloaded = load_settings(file.path()).unwrap();
    assert_eq!(reloaded, settings);
}

#[test]
fn test_settings_degrade_to_defaults() {
    // Missing file.
    assert_eq!(
        load_settings_or_default("definitely_missing_settings.json"),
        Settings::default()
    );

    // Corrupt file.
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    assert_eq!(load_settings_or_default(file.path()), Settings::default());
}

#[test]
fn test_inventory_roundtrip() {
    let items = vec![
        ConsumableItem::new("Parsnip", 18, 3),
        ConsumableItem::new("Fried Mushroom", 20, 1),
    ];

    let file = NamedTempFile::new().unwrap();
    save_items(file.path(), &items).unwrap();

    let reloaded = load_items(file.path()).unwrap();
    assert_eq!(reloaded.len(), 2);

    let inventory = Inventory::new(reloaded);
    assert_eq!(inventory.get("parsnip").unwrap().stack, 3);
    assert_eq!(inventory.get("FRIED MUSHROOM").unwrap().edibility, 20);
}

#[test]
fn test_csv_table_matches_builtin() {
    let file = NamedTempFile::new().unwrap();
    StaticBuffTable.export_csv(file.path()).unwrap();

    let csv_table = CsvBuffTable::from_path(file.path()).unwrap();
    let builtin = builtin_table();

    assert_eq!(csv_table.len(), builtin.len());
    for name in builtin.names() {
        assert_eq!(
            csv_table.lookup(name),
            builtin.lookup(name),
            "CSV entry for {} should match the built-in table",
            name
        );
    }
}

#[test]
fn test_export_uses_active_source() {
    use quick_consume_rs::buffs::BuffSource;

    // A one-entry external table.
    let mut source_file = NamedTempFile::new().unwrap();
    writeln!(
        source_file,
        "Name,Farming,Mining,Foraging,Fishing,Luck,Attack,Defense,Magnetism,Speed,MaxEnergy,HasSpecialBuff,DurationMinutes,DurationSeconds"
    )
    .unwrap();
    writeln!(source_file, "Moss Soup,0,0,2,0,0,0,0,0,0,0,false,5,0").unwrap();

    let source = BuffSource::new(Some(source_file.path())).unwrap();

    // Exporting writes that table, not the built-in one.
    let export_file = NamedTempFile::new().unwrap();
    source.export_csv(export_file.path()).unwrap();

    let reloaded = CsvBuffTable::from_path(export_file.path()).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.lookup("moss soup").unwrap().foraging, 2);
    assert!(reloaded.lookup("Coffee").is_none());
}

#[test]
fn test_consume_pipeline_clamps_and_decrements() {
    let table = builtin_table();
    let mut inventory = Inventory::new(vec![ConsumableItem::new("Parsnip", 30, 2)]);
    let mut player = PlayerState::new(80, 100, 230, 270);

    let item = inventory.get("Parsnip").unwrap();
    let outcome = evaluate(&item.name, item.edibility, player.is_full(), true, &table);
    assert!(outcome.is_applied());

    // Raw gains are 33 health / 75 stamina; both clamp at the maxima.
    let gains = player.apply(&outcome);
    assert_eq!(gains.health, 20);
    assert_eq!(gains.stamina, 40);
    assert_eq!(player.health, 100);
    assert_eq!(player.stamina, 270);

    let remaining = inventory.consume_one("Parsnip").unwrap();
    assert_eq!(remaining, 1);

    // Player is now full: blocked unless eating-when-full is allowed.
    assert!(player.is_full());
    let outcome = evaluate("Parsnip", 30, player.is_full(), false, &table);
    assert!(!outcome.is_applied());
    let outcome = evaluate("Parsnip", 30, player.is_full(), true, &table);
    assert!(outcome.is_applied());

    // A full player gains nothing further.
    let gains = player.apply(&outcome);
    assert_eq!(gains.health, 0);
    assert_eq!(gains.stamina, 0);
}

#[test]
fn test_blocked_outcome_leaves_state_untouched() {
    let table = builtin_table();
    let mut player = PlayerState::new(50, 100, 50, 270);

    let outcome = evaluate("Fried Mushroom", 20, false, true, &table);
    assert_eq!(outcome, ConsumptionOutcome::BlockedHasBuffs);

    let gains = player.apply(&outcome);
    assert_eq!(gains.health, 0);
    assert_eq!(gains.stamina, 0);
    assert_eq!(player.health, 50);
    assert_eq!(player.stamina, 50);
}
