use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};
use thiserror::Error;

use crate::ItemId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct CreatureType(String);

id_wrapper_impl!(CreatureType, String);

/// Quantity of a drop table entry, a bare integer or an inclusive `[min, max]` range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DropQuantity {
    Fixed(u32),
    Range(u32, u32),
}

impl DropQuantity {
    pub fn is_valid(&self) -> bool {
        match *self {
            DropQuantity::Fixed(quantity) => quantity >= 1,
            DropQuantity::Range(min, max) => min >= 1 && min <= max,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DropTier {
    Guaranteed,
    Uncommon,
    Rare,
}

fn default_chance() -> f64 {
    1.0
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropTableEntry {
    pub item_id: ItemId,
    pub quantity: DropQuantity,
    #[serde(default = "default_chance")]
    pub chance: f64,
    pub tier: DropTier,
}

impl DropTableEntry {
    pub fn guaranteed(item_id: impl Into<ItemId>, quantity: DropQuantity) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
            chance: 1.0,
            tier: DropTier::Guaranteed,
        }
    }

    pub fn uncommon(item_id: impl Into<ItemId>, quantity: DropQuantity, chance: f64) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
            chance,
            tier: DropTier::Uncommon,
        }
    }

    pub fn rare(item_id: impl Into<ItemId>, quantity: DropQuantity, chance: f64) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
            chance,
            tier: DropTier::Rare,
        }
    }

    /// Chance actually rolled against, guaranteed entries ignore the configured chance.
    pub fn effective_chance(&self) -> f64 {
        match self.tier {
            DropTier::Guaranteed => 1.0,
            DropTier::Uncommon | DropTier::Rare => self.chance,
        }
    }

    fn validate(&self, creature_type: &CreatureType) -> Result<(), DropTableError> {
        if !self.quantity.is_valid() {
            return Err(DropTableError::InvalidQuantity {
                creature_type: creature_type.clone(),
                item_id: self.item_id.clone(),
            });
        }

        if self.tier != DropTier::Guaranteed && !(self.chance > 0.0 && self.chance <= 1.0) {
            return Err(DropTableError::InvalidChance {
                creature_type: creature_type.clone(),
                item_id: self.item_id.clone(),
                chance: self.chance,
            });
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DropTable {
    pub entries: Vec<DropTableEntry>,
}

impl DropTable {
    pub fn new(entries: Vec<DropTableEntry>) -> Self {
        Self { entries }
    }
}

#[derive(Debug, Error)]
pub enum DropTableError {
    #[error("failed to read drop table file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse drop tables")]
    Json(#[from] serde_json::Error),

    #[error("drop table for {creature_type} has an invalid quantity for item {item_id}")]
    InvalidQuantity {
        creature_type: CreatureType,
        item_id: ItemId,
    },

    #[error("drop table for {creature_type} has chance {chance} for item {item_id}, expected (0, 1]")]
    InvalidChance {
        creature_type: CreatureType,
        item_id: ItemId,
        chance: f64,
    },
}

#[derive(Default)]
pub struct DropTableDatabase {
    tables: HashMap<CreatureType, DropTable>,
}

impl DropTableDatabase {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn register(
        &mut self,
        creature_type: CreatureType,
        table: DropTable,
    ) -> Result<(), DropTableError> {
        for entry in table.entries.iter() {
            entry.validate(&creature_type)?;
        }

        self.tables.insert(creature_type, table);
        Ok(())
    }

    pub fn lookup(&self, creature_type: &CreatureType) -> Option<&DropTable> {
        self.tables.get(creature_type)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DropTableError> {
        let tables: HashMap<CreatureType, DropTable> = serde_json::from_str(json)?;
        let mut database = Self::new();

        for (creature_type, table) in tables {
            database.register(creature_type, table)?;
        }

        Ok(database)
    }

    pub fn load(path: &Path) -> Result<Self, DropTableError> {
        let json = std::fs::read_to_string(path).map_err(|source| DropTableError::Io {
            path: path.to_string_lossy().into_owned(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn creature_types(&self) -> impl Iterator<Item = &CreatureType> {
        self.tables.keys()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const GOBLIN_TABLE: &str = r#"{
        "goblin": [
            { "itemId": "coins", "quantity": [5, 15], "tier": "guaranteed" },
            { "itemId": "goblin_ear", "quantity": 1, "chance": 0.25, "tier": "uncommon" },
            { "itemId": "ruby", "quantity": 1, "chance": 0.01, "tier": "rare" }
        ]
    }"#;

    #[test]
    fn parses_fixed_and_range_quantities() {
        let database = DropTableDatabase::from_json_str(GOBLIN_TABLE).unwrap();
        let table = database.lookup(&CreatureType::from("goblin")).unwrap();

        assert_eq!(table.entries.len(), 3);
        assert_eq!(table.entries[0].quantity, DropQuantity::Range(5, 15));
        assert_eq!(table.entries[0].tier, DropTier::Guaranteed);
        assert_eq!(table.entries[1].quantity, DropQuantity::Fixed(1));
        assert_eq!(table.entries[2].tier, DropTier::Rare);
        assert!(database.lookup(&CreatureType::from("dragon")).is_none());
    }

    #[test]
    fn guaranteed_entries_ignore_chance() {
        let mut entry = DropTableEntry::guaranteed("coins", DropQuantity::Fixed(3));
        entry.chance = 0.1;
        assert_eq!(entry.effective_chance(), 1.0);

        let entry = DropTableEntry::rare("ruby", DropQuantity::Fixed(1), 0.05);
        assert_eq!(entry.effective_chance(), 0.05);
    }

    #[test]
    fn rejects_inverted_range() {
        let result = DropTableDatabase::from_json_str(
            r#"{ "bat": [{ "itemId": "wing", "quantity": [4, 2], "tier": "guaranteed" }] }"#,
        );
        assert!(matches!(result, Err(DropTableError::InvalidQuantity { .. })));
    }

    #[test]
    fn rejects_zero_quantity() {
        let mut database = DropTableDatabase::new();
        let result = database.register(
            CreatureType::from("bat"),
            DropTable::new(vec![DropTableEntry::guaranteed("wing", DropQuantity::Fixed(0))]),
        );
        assert!(matches!(result, Err(DropTableError::InvalidQuantity { .. })));
        assert!(database.is_empty());
    }

    #[test]
    fn rejects_chance_out_of_range() {
        let mut database = DropTableDatabase::new();

        for chance in [0.0, -0.5, 1.5, f64::NAN] {
            let result = database.register(
                CreatureType::from("bat"),
                DropTable::new(vec![DropTableEntry::uncommon(
                    "wing",
                    DropQuantity::Fixed(1),
                    chance,
                )]),
            );
            assert!(matches!(result, Err(DropTableError::InvalidChance { .. })));
        }
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GOBLIN_TABLE.as_bytes()).unwrap();

        let database = DropTableDatabase::load(file.path()).unwrap();
        assert_eq!(database.len(), 1);
        assert_eq!(
            database.creature_types().next(),
            Some(&CreatureType::from("goblin"))
        );
    }

    #[test]
    fn load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ \"goblin\": [ ").unwrap();

        let result = DropTableDatabase::load(file.path());
        assert!(matches!(result, Err(DropTableError::Json(_))));
    }
}
