//! # Economy Error Types
//!
//! All errors that can occur in the craftability simulation.

use emberforge_core::memory::ArenaError;
use thiserror::Error;

use crate::items::ItemId;

/// Errors that can occur in the economy system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CraftError {
    /// The simulation arena failed, typically by running out of capacity.
    /// A failed allocation aborts the whole simulation pass.
    #[error("simulation arena: {0}")]
    Arena(#[from] ArenaError),

    /// An ingredient with a non-positive per-unit amount was encountered.
    /// Dividing by it would be undefined, so it is rejected up front.
    #[error("invalid ingredient amount for item {item_id}: {amount} per unit")]
    InvalidIngredientAmount {
        /// The offending ingredient item.
        item_id: ItemId,
        /// The rejected per-unit amount.
        amount: u32,
    },

    /// A recipe with no ingredients was submitted for registration.
    #[error("recipe for item {0} has no ingredients")]
    EmptyRecipe(ItemId),

    /// The recipe graph recursed into an item already on the current path.
    #[error("cycle detected in recipe graph at item {0}")]
    CycleDetected(ItemId),

    /// A required amount overflowed during multiplication.
    #[error("arithmetic overflow while computing required amounts")]
    ArithmeticOverflow,

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for economy operations.
pub type CraftResult<T> = Result<T, CraftError>;
