//! # Recipe Data Model & Registry
//!
//! Recipes map one output item to the ingredients required per crafted unit.
//! The registry keeps at most one recipe per output item; registering again
//! replaces the previous entry (last write wins).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CraftError, CraftResult};

/// Unique identifier for an item type.
pub type ItemId = u32;

/// One ingredient line of a recipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// The item consumed.
    pub item_id: ItemId,
    /// Amount consumed per crafted unit of the output. Must be positive.
    pub amount_per_unit: u32,
}

impl Ingredient {
    /// Creates a new ingredient line.
    #[inline]
    #[must_use]
    pub const fn new(item_id: ItemId, amount_per_unit: u32) -> Self {
        Self {
            item_id,
            amount_per_unit,
        }
    }
}

/// A crafting recipe: one output item plus its ordered ingredient list.
///
/// Ingredient order is preserved; the simulator visits ingredients in recipe
/// order so results are reproducible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// The item this recipe produces.
    pub output: ItemId,
    /// Items consumed per crafted unit, in registration order.
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Creates a new recipe with registration-time validation.
    ///
    /// # Errors
    ///
    /// - `CraftError::EmptyRecipe` if the ingredient list is empty
    /// - `CraftError::InvalidIngredientAmount` if any per-unit amount is zero
    pub fn new(output: ItemId, ingredients: Vec<Ingredient>) -> CraftResult<Self> {
        if ingredients.is_empty() {
            return Err(CraftError::EmptyRecipe(output));
        }
        for ingredient in &ingredients {
            if ingredient.amount_per_unit == 0 {
                return Err(CraftError::InvalidIngredientAmount {
                    item_id: ingredient.item_id,
                    amount: 0,
                });
            }
        }

        Ok(Self {
            output,
            ingredients,
        })
    }
}

/// Registry mapping each item to at most one recipe.
#[derive(Debug, Default)]
pub struct RecipeBook {
    recipes: HashMap<ItemId, Recipe>,
}

impl RecipeBook {
    /// Creates a new empty recipe book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a recipe under its output item.
    ///
    /// A recipe already registered for the same output is replaced:
    /// last write wins.
    pub fn add_recipe(&mut self, recipe: Recipe) {
        if let Some(previous) = self.recipes.insert(recipe.output, recipe) {
            tracing::debug!(item = previous.output, "recipe replaced on re-registration");
        }
    }

    /// Looks up the recipe for an item, if one is registered.
    #[inline]
    #[must_use]
    pub fn try_get_recipe(&self, item: ItemId) -> Option<&Recipe> {
        self.recipes.get(&item)
    }

    /// Returns the number of registered recipes.
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    /// Loads a recipe book from a TOML document.
    ///
    /// Expected shape:
    ///
    /// ```toml
    /// [[recipes]]
    /// output = 2
    /// ingredients = [{ item_id = 1, amount_per_unit = 2 }]
    /// ```
    ///
    /// Every entry passes through [`Recipe::new`] validation. Unknown keys in
    /// the document are ignored, so recipe and stock data can share a file.
    ///
    /// # Errors
    ///
    /// - `CraftError::InvalidConfig` if the document does not parse
    /// - any [`Recipe::new`] validation error
    pub fn from_toml_str(doc: &str) -> CraftResult<Self> {
        #[derive(Deserialize)]
        struct BookDoc {
            #[serde(default)]
            recipes: Vec<Recipe>,
        }

        let parsed: BookDoc =
            toml::from_str(doc).map_err(|e| CraftError::InvalidConfig(e.to_string()))?;

        let mut book = Self::new();
        for raw in parsed.recipes {
            // Re-validate: deserialization bypasses Recipe::new.
            book.add_recipe(Recipe::new(raw.output, raw.ingredients)?);
        }

        Ok(book)
    }
}
