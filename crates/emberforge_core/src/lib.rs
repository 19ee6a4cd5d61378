//! # EMBERFORGE Core
//!
//! Memory primitives for the EMBERFORGE simulation crates:
//! - Fixed-capacity arena allocation with bulk invalidation
//! - Typed region handles instead of raw pointers
//!
//! ## Architecture Rules
//!
//! 1. **One reservation per arena** - Memory is acquired once, released once
//! 2. **No per-allocation frees** - Arenas rewind or die as a whole
//! 3. **No unsafe** - Regions are offsets, never addresses
//!
//! ## Example
//!
//! ```rust,ignore
//! use emberforge_core::memory::ArenaAllocator;
//!
//! let mut arena = ArenaAllocator::new(4096)?;
//! let region = arena.alloc::<u64>(16)?;
//! arena.reset(); // all regions logically invalidated at once
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod memory;

pub use memory::{ArenaAllocator, ArenaError, ArenaResult, Region};
