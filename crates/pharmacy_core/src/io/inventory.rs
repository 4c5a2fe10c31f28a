use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::item::{names, Item};

/// Starting stock for a simulation run, read as a JSON array of items.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Inventory {
    pub items: Vec<Item>,
}

impl Inventory {
    /// Load an inventory JSON document from disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open inventory file {:?}", path))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Deserialize an inventory document from an arbitrary reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).context("invalid inventory json")
    }

    /// The stock used when no inventory file is supplied.
    pub fn starter() -> Self {
        Self {
            items: vec![
                Item::new("Doliprane", 20, 30),
                Item::new(names::HERBAL_TEA, 10, 5),
                Item::new(names::FERVEX, 12, 35),
                Item::new(names::MAGIC_PILL, 15, 40),
            ],
        }
    }
}
