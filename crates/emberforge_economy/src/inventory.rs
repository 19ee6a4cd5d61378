//! # Inventory
//!
//! Flat item-count store backing the simulation's base-resource lookups.
//! Items without an entry report a stock of zero.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{CraftError, CraftResult};
use crate::items::ItemId;

/// A store of item stock counts.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    stock: HashMap<ItemId, u32>,
}

impl Inventory {
    /// Creates a new empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stock count for an item. Missing items report 0.
    #[inline]
    #[must_use]
    pub fn get_count(&self, item: ItemId) -> u32 {
        self.stock.get(&item).copied().unwrap_or(0)
    }

    /// Adds stock for an item, accumulating with any existing count.
    pub fn add_item(&mut self, item: ItemId, amount: u32) {
        *self.stock.entry(item).or_insert(0) += amount;
    }

    /// Loads stock counts from a TOML document.
    ///
    /// Expected shape (keys are item ids):
    ///
    /// ```toml
    /// [stock]
    /// 1 = 20
    /// 5 = 10
    /// ```
    ///
    /// Unknown keys in the document are ignored, so recipe and stock data
    /// can share a file.
    ///
    /// # Errors
    ///
    /// Returns `CraftError::InvalidConfig` if the document does not parse or
    /// a stock key is not a numeric item id.
    pub fn from_toml_str(doc: &str) -> CraftResult<Self> {
        #[derive(Deserialize)]
        struct StockDoc {
            #[serde(default)]
            stock: HashMap<String, u32>,
        }

        let parsed: StockDoc =
            toml::from_str(doc).map_err(|e| CraftError::InvalidConfig(e.to_string()))?;

        let mut inventory = Self::new();
        for (key, amount) in parsed.stock {
            let item: ItemId = key
                .parse()
                .map_err(|_| CraftError::InvalidConfig(format!("bad item id key: {key}")))?;
            inventory.add_item(item, amount);
        }

        Ok(inventory)
    }
}
