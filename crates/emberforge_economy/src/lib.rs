//! # EMBERFORGE Economy System
//!
//! Pure Rust craftability logic for the EMBERFORGE simulation.
//!
//! ## Design Principles
//!
//! 1. **Integer arithmetic only** - Availability is counted, never estimated
//! 2. **One arena per simulation pass** - Craft trees share a single
//!    lifetime and are invalidated in bulk
//! 3. **Index handles, not pointers** - Nodes are addressed by [`craft::NodeId`]
//! 4. **External configuration** - All balance data in TOML files
//!
//! ## Thread Safety
//!
//! Simulation is single-threaded by design: one [`craft::CraftArena`] serves
//! exactly one pass between resets.
//!
//! ## Example
//!
//! ```rust,ignore
//! use emberforge_economy::{CraftArena, CraftSimulator, Inventory, RecipeBook};
//!
//! let book = RecipeBook::from_toml_str(include_str!("../data/economy.toml"))?;
//! let stock = Inventory::from_toml_str(include_str!("../data/economy.toml"))?;
//!
//! let mut arena = CraftArena::new(4096)?;
//! let sim = CraftSimulator::new(&book, &stock);
//! let root = sim.simulate(&mut arena, IRON_SWORD, 1)?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod craft;
pub mod error;
pub mod inventory;
pub mod items;

pub use craft::{CraftArena, CraftNode, CraftSimulator, NodeId};
pub use error::{CraftError, CraftResult};
pub use inventory::Inventory;
pub use items::{Ingredient, ItemId, Recipe, RecipeBook};
