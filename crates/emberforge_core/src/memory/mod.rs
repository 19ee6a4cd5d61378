//! # Memory Management
//!
//! Pre-sized arena allocation for workloads whose allocations share one
//! lifetime and are freed all at once.
//!
//! ## Design Philosophy
//!
//! All memory is allocated once at construction. After that:
//! - Allocation is a cursor bump
//! - Invalidation is a cursor rewind
//! - Release happens exactly once

mod arena;

pub use arena::{ArenaAllocator, ArenaError, ArenaResult, Region};
