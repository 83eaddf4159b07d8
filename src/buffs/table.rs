use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::buffs::FoodBuffEntry;
use crate::error::Result;

/// Lookup capability over buff knowledge.
///
/// The decision logic only sees this trait, so the data behind it can be the
/// built-in table or any host-synchronized source. Absence of an entry means
/// the food is treated as buff-free; foods this source has never heard of
/// (third-party content in particular) are therefore classified as safe,
/// which is a known gap of the allow-list approach.
pub trait BuffLookup {
    /// Case-insensitive exact-match lookup.
    fn lookup(&self, name: &str) -> Option<&FoodBuffEntry>;

    fn has_buffs(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

/// Buff data for every buff-granting food, keyed by lowercase name.
static FOOD_BUFFS: LazyLock<HashMap<String, FoodBuffEntry>> = LazyLock::new(|| {
    fn e() -> FoodBuffEntry {
        FoodBuffEntry::default()
    }

    let entries: Vec<(&str, FoodBuffEntry)> = vec![
        // Drinks
        ("Coffee", FoodBuffEntry { speed: 1, duration_minutes: 1, ..e() }),
        ("Triple Shot Espresso", FoodBuffEntry { speed: 1, duration_minutes: 4, duration_seconds: 12, ..e() }),
        ("Ginger Ale", FoodBuffEntry { luck: 1, duration_minutes: 5, ..e() }),
        // Breakfast
        ("Complete Breakfast", FoodBuffEntry { farming: 2, max_energy: 50, ..e() }),
        ("Hashbrowns", FoodBuffEntry { farming: 1, duration_minutes: 5, duration_seconds: 35, ..e() }),
        ("Pancakes", FoodBuffEntry { foraging: 2, duration_minutes: 11, duration_seconds: 11, ..e() }),
        // Luck foods
        ("Lucky Lunch", FoodBuffEntry { luck: 3, duration_minutes: 11, duration_seconds: 11, ..e() }),
        ("Spicy Eel", FoodBuffEntry { luck: 1, speed: 1, ..e() }),
        ("Fried Eel", FoodBuffEntry { luck: 1, ..e() }),
        ("Shrimp Cocktail", FoodBuffEntry { fishing: 1, luck: 1, duration_minutes: 10, duration_seconds: 2, ..e() }),
        // Combat foods
        ("Fried Mushroom", FoodBuffEntry { attack: 2, ..e() }),
        ("Roots Platter", FoodBuffEntry { attack: 3, duration_minutes: 5, duration_seconds: 35, ..e() }),
        // Defense foods
        ("Pumpkin Soup", FoodBuffEntry { defense: 2, luck: 2, duration_minutes: 7, duration_seconds: 41, ..e() }),
        ("Autumn's Bounty", FoodBuffEntry { foraging: 2, defense: 2, duration_minutes: 7, duration_seconds: 41, ..e() }),
        ("Eggplant Parmesan", FoodBuffEntry { mining: 1, defense: 3, duration_minutes: 4, duration_seconds: 39, ..e() }),
        ("Stuffing", FoodBuffEntry { defense: 2, duration_minutes: 5, duration_seconds: 35, ..e() }),
        ("Crab Cakes", FoodBuffEntry { speed: 1, defense: 1, duration_minutes: 16, duration_seconds: 47, ..e() }),
        ("Banana Pudding", FoodBuffEntry { mining: 1, luck: 1, defense: 1, duration_minutes: 5, duration_seconds: 1, ..e() }),
        ("Mango Sticky Rice", FoodBuffEntry { defense: 3, duration_minutes: 5, duration_seconds: 1, ..e() }),
        // Skill foods
        ("Farmer's Lunch", FoodBuffEntry { farming: 3, duration_minutes: 5, duration_seconds: 35, ..e() }),
        ("Survival Burger", FoodBuffEntry { foraging: 3, duration_minutes: 5, duration_seconds: 35, ..e() }),
        ("Dish O' The Sea", FoodBuffEntry { fishing: 3, duration_minutes: 5, duration_seconds: 35, ..e() }),
        ("Miner's Treat", FoodBuffEntry { mining: 3, magnetism: 32, duration_minutes: 5, duration_seconds: 35, ..e() }),
        // Fishing foods
        ("Fish Taco", FoodBuffEntry { fishing: 2, ..e() }),
        ("Seafoam Pudding", FoodBuffEntry { fishing: 4, duration_minutes: 3, duration_seconds: 30, ..e() }),
        ("Chowder", FoodBuffEntry { fishing: 1, duration_minutes: 16, duration_seconds: 47, ..e() }),
        ("Fish Stew", FoodBuffEntry { fishing: 3, duration_minutes: 16, duration_seconds: 47, ..e() }),
        ("Escargot", FoodBuffEntry { fishing: 2, duration_minutes: 16, duration_seconds: 47, ..e() }),
        ("Lobster Bisque", FoodBuffEntry { fishing: 3, max_energy: 50, duration_minutes: 16, duration_seconds: 47, ..e() }),
        ("Trout Soup", FoodBuffEntry { fishing: 1, duration_minutes: 4, duration_seconds: 39, ..e() }),
        // Energy and magnetism foods
        ("Bean Hotpot", FoodBuffEntry { max_energy: 30, magnetism: 32, ..e() }),
        ("Crispy Bass", FoodBuffEntry { magnetism: 64, ..e() }),
        ("Red Plate", FoodBuffEntry { max_energy: 50, duration_minutes: 3, duration_seconds: 30, ..e() }),
        ("Super Meal", FoodBuffEntry { max_energy: 40, speed: 1, duration_minutes: 3, duration_seconds: 30, ..e() }),
        // Multi-skill foods
        ("Tom Kha Soup", FoodBuffEntry { farming: 2, max_energy: 30, ..e() }),
        ("Pepper Poppers", FoodBuffEntry { farming: 2, speed: 1, ..e() }),
        ("Maple Bar", FoodBuffEntry { farming: 1, fishing: 1, mining: 1, duration_minutes: 16, duration_seconds: 47, ..e() }),
        ("Tropical Curry", FoodBuffEntry { foraging: 4, duration_minutes: 5, duration_seconds: 1, ..e() }),
        // Mining foods
        ("Cranberry Sauce", FoodBuffEntry { mining: 2, duration_minutes: 3, duration_seconds: 30, ..e() }),
        // Special foods
        ("Squid Ink Ravioli", FoodBuffEntry { mining: 1, has_special_buff: true, duration_minutes: 4, duration_seconds: 39, ..e() }),
    ];

    entries
        .into_iter()
        .map(|(name, entry)| (name.to_lowercase(), entry))
        .collect()
});

/// Display-cased names for the built-in entries, for listings and export.
static FOOD_BUFF_NAMES: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut names = vec![
        "Coffee", "Triple Shot Espresso", "Ginger Ale", "Complete Breakfast",
        "Hashbrowns", "Pancakes", "Lucky Lunch", "Spicy Eel", "Fried Eel",
        "Shrimp Cocktail", "Fried Mushroom", "Roots Platter", "Pumpkin Soup",
        "Autumn's Bounty", "Eggplant Parmesan", "Stuffing", "Crab Cakes",
        "Banana Pudding", "Mango Sticky Rice", "Farmer's Lunch",
        "Survival Burger", "Dish O' The Sea", "Miner's Treat", "Fish Taco",
        "Seafoam Pudding", "Chowder", "Fish Stew", "Escargot",
        "Lobster Bisque", "Trout Soup", "Bean Hotpot", "Crispy Bass",
        "Red Plate", "Super Meal", "Tom Kha Soup", "Pepper Poppers",
        "Maple Bar", "Tropical Curry", "Cranberry Sauce", "Squid Ink Ravioli",
    ];
    names.sort_unstable();
    names
});

/// Look up a food in the built-in table (case-insensitive).
pub fn lookup(name: &str) -> Option<&'static FoodBuffEntry> {
    FOOD_BUFFS.get(&name.to_lowercase())
}

/// The built-in table as a `BuffLookup` source.
pub fn builtin_table() -> StaticBuffTable {
    StaticBuffTable
}

/// The built-in buff table ported from the wiki cooking data.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticBuffTable;

impl StaticBuffTable {
    /// Sorted display names of every entry.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        FOOD_BUFF_NAMES.iter().copied()
    }

    pub fn len(&self) -> usize {
        FOOD_BUFFS.len()
    }

    pub fn is_empty(&self) -> bool {
        FOOD_BUFFS.is_empty()
    }

    /// Write the table as CSV, the format `CsvBuffTable` reads back.
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_csv(path, self.names().filter_map(|n| lookup(n).map(|e| (n, e))))
    }
}

fn write_csv<'a, P, I>(path: P, entries: I) -> Result<()>
where
    P: AsRef<Path>,
    I: Iterator<Item = (&'a str, &'a FoodBuffEntry)>,
{
    let mut writer = csv::Writer::from_path(path)?;
    for (name, entry) in entries {
        writer.serialize(BuffRow::from_entry(name, entry))?;
    }
    writer.flush()?;
    Ok(())
}

impl BuffLookup for StaticBuffTable {
    fn lookup(&self, name: &str) -> Option<&FoodBuffEntry> {
        FOOD_BUFFS.get(&name.to_lowercase())
    }
}

/// One CSV row of buff data.
#[derive(Debug, Serialize, Deserialize)]
struct BuffRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Farming", default)]
    farming: i32,
    #[serde(rename = "Mining", default)]
    mining: i32,
    #[serde(rename = "Foraging", default)]
    foraging: i32,
    #[serde(rename = "Fishing", default)]
    fishing: i32,
    #[serde(rename = "Luck", default)]
    luck: i32,
    #[serde(rename = "Attack", default)]
    attack: i32,
    #[serde(rename = "Defense", default)]
    defense: i32,
    #[serde(rename = "Magnetism", default)]
    magnetism: i32,
    #[serde(rename = "Speed", default)]
    speed: i32,
    #[serde(rename = "MaxEnergy", default)]
    max_energy: i32,
    #[serde(rename = "HasSpecialBuff", default)]
    has_special_buff: bool,
    #[serde(rename = "DurationMinutes", default)]
    duration_minutes: u32,
    #[serde(rename = "DurationSeconds", default)]
    duration_seconds: u32,
}

impl BuffRow {
    fn from_entry(name: &str, entry: &FoodBuffEntry) -> Self {
        Self {
            name: name.to_string(),
            farming: entry.farming,
            mining: entry.mining,
            foraging: entry.foraging,
            fishing: entry.fishing,
            luck: entry.luck,
            attack: entry.attack,
            defense: entry.defense,
            magnetism: entry.magnetism,
            speed: entry.speed,
            max_energy: entry.max_energy,
            has_special_buff: entry.has_special_buff,
            duration_minutes: entry.duration_minutes,
            duration_seconds: entry.duration_seconds,
        }
    }

    fn into_entry(self) -> (String, FoodBuffEntry) {
        (
            self.name,
            FoodBuffEntry {
                farming: self.farming,
                mining: self.mining,
                foraging: self.foraging,
                fishing: self.fishing,
                luck: self.luck,
                attack: self.attack,
                defense: self.defense,
                magnetism: self.magnetism,
                speed: self.speed,
                max_energy: self.max_energy,
                has_special_buff: self.has_special_buff,
                duration_minutes: self.duration_minutes,
                duration_seconds: self.duration_seconds,
            },
        )
    }
}

/// A buff table loaded from a CSV file, for host-synchronized or modded data.
///
/// Duplicate names deduplicate by lowercase key, last occurrence wins.
#[derive(Debug, Clone)]
pub struct CsvBuffTable {
    entries: HashMap<String, FoodBuffEntry>,
    names: Vec<String>,
}

impl CsvBuffTable {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut entries = HashMap::new();
        let mut names: Vec<String> = Vec::new();

        for row in reader.deserialize() {
            let row: BuffRow = row?;
            let (name, entry) = row.into_entry();
            let key = name.to_lowercase();
            if entries.insert(key.clone(), entry).is_some() {
                // Last occurrence wins, display casing included.
                names.retain(|n| n.to_lowercase() != key);
            }
            names.push(name);
        }
        names.sort_unstable();

        Ok(Self { entries, names })
    }

    /// Sorted display names of every entry.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BuffLookup for CsvBuffTable {
    fn lookup(&self, name: &str) -> Option<&FoodBuffEntry> {
        self.entries.get(&name.to_lowercase())
    }
}

/// The buff source a run resolves against: built-in data unless an external
/// CSV table was supplied.
pub enum BuffSource {
    Builtin(StaticBuffTable),
    Csv(CsvBuffTable),
}

impl BuffSource {
    pub fn new(csv_path: Option<&Path>) -> Result<Self> {
        match csv_path {
            Some(path) => Ok(BuffSource::Csv(CsvBuffTable::from_path(path)?)),
            None => Ok(BuffSource::Builtin(StaticBuffTable)),
        }
    }

    pub fn names(&self) -> Vec<String> {
        match self {
            BuffSource::Builtin(table) => table.names().map(str::to_string).collect(),
            BuffSource::Csv(table) => table.names().map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            BuffSource::Builtin(table) => table.len(),
            BuffSource::Csv(table) => table.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write the active table as CSV, the format `CsvBuffTable` reads back.
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let names = self.names();
        write_csv(
            path,
            names
                .iter()
                .filter_map(|n| self.lookup(n).map(|e| (n.as_str(), e))),
        )
    }
}

impl BuffLookup for BuffSource {
    fn lookup(&self, name: &str) -> Option<&FoodBuffEntry> {
        match self {
            BuffSource::Builtin(table) => table.lookup(name),
            BuffSource::Csv(table) => table.lookup(name),
        }
    }
}
