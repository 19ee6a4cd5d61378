//! # Arena Allocator
//!
//! A fixed-capacity bump allocator. Allocation advances a cursor through one
//! contiguous reservation; freeing happens only in bulk, by rewinding the
//! cursor (`reset`) or releasing the whole reservation (`dispose`).
//!
//! Instead of raw pointers, allocations are described by typed [`Region`]
//! handles carrying the generation they were allocated under. A region from
//! before a `reset` or `dispose` is detectably stale rather than dangling.

use std::marker::PhantomData;
use std::mem;

use thiserror::Error;

/// Errors that can occur in the arena allocator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// The backing reservation could not be obtained at construction.
    #[error("failed to reserve {capacity} bytes of arena backing")]
    AllocationFailed {
        /// Requested arena capacity in bytes.
        capacity: usize,
    },

    /// An allocation would exceed the fixed capacity. The arena does not
    /// grow and never hands out partial regions.
    #[error("arena out of memory: requested {requested} bytes, {remaining} remaining")]
    OutOfMemory {
        /// Bytes requested by the failing allocation.
        requested: usize,
        /// Bytes still unallocated at the time of the request.
        remaining: usize,
    },

    /// The arena was disposed and can no longer allocate.
    #[error("arena already disposed")]
    Disposed,
}

/// Result type for arena operations.
pub type ArenaResult<T> = Result<T, ArenaError>;

/// A typed, non-owning handle to a contiguous allocation inside an arena.
///
/// A region is only meaningful for the arena that produced it, and only for
/// as long as that arena has not been reset or disposed. Staleness can be
/// checked with [`ArenaAllocator::is_current`].
pub struct Region<T> {
    offset: usize,
    count: usize,
    generation: u32,
    _marker: PhantomData<T>,
}

// Regions are plain coordinates; they are Copy regardless of T.
impl<T> Clone for Region<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Region<T> {}

impl<T> std::fmt::Debug for Region<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Region")
            .field("offset", &self.offset)
            .field("count", &self.count)
            .field("generation", &self.generation)
            .finish()
    }
}

impl<T> PartialEq for Region<T> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
            && self.count == other.count
            && self.generation == other.generation
    }
}

impl<T> Eq for Region<T> {}

impl<T> Region<T> {
    /// Byte offset of this region from the start of the arena.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of `T` elements in this region.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the region holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Size of this region in bytes.
    #[inline]
    #[must_use]
    pub const fn byte_len(&self) -> usize {
        mem::size_of::<T>() * self.count
    }
}

/// A fixed-capacity bump allocator.
///
/// One contiguous reservation is acquired at construction and released
/// exactly once, either by [`dispose`](Self::dispose) or on drop. Allocation
/// bumps a cursor; [`reset`](Self::reset) rewinds it, logically invalidating
/// every region handed out so far without touching memory.
///
/// # Thread Safety
///
/// This arena is NOT thread-safe. All mutation goes through `&mut self`;
/// use one arena per simulation pass.
///
/// # Example
///
/// ```rust,ignore
/// let mut arena = ArenaAllocator::new(1024)?;
///
/// let a = arena.alloc::<u32>(8)?;   // 32 bytes
/// let b = arena.alloc::<u32>(8)?;   // next 32 bytes, never overlapping `a`
///
/// arena.reset();                    // both regions now stale
/// assert!(!arena.is_current(a));
/// ```
#[derive(Debug)]
pub struct ArenaAllocator {
    /// The backing reservation. `None` once disposed.
    storage: Option<Box<[u8]>>,
    /// Current allocation cursor, `0 <= offset <= capacity`.
    offset: usize,
    /// Total capacity in bytes, immutable after construction.
    capacity: usize,
    /// Bumped on every reset/dispose so stale regions are detectable.
    generation: u32,
}

impl ArenaAllocator {
    /// Creates a new arena with the specified capacity in bytes.
    ///
    /// # Arguments
    ///
    /// * `capacity_bytes` - Total size of the reservation
    ///
    /// # Errors
    ///
    /// Returns `ArenaError::AllocationFailed` if the backing reservation
    /// cannot be obtained.
    pub fn new(capacity_bytes: usize) -> ArenaResult<Self> {
        let mut backing: Vec<u8> = Vec::new();
        backing
            .try_reserve_exact(capacity_bytes)
            .map_err(|_| ArenaError::AllocationFailed {
                capacity: capacity_bytes,
            })?;
        backing.resize(capacity_bytes, 0);

        Ok(Self {
            storage: Some(backing.into_boxed_slice()),
            offset: 0,
            capacity: capacity_bytes,
            generation: 0,
        })
    }

    /// Returns the total capacity in bytes.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current used space in bytes.
    #[inline]
    #[must_use]
    pub const fn used(&self) -> usize {
        self.offset
    }

    /// Returns the remaining free space in bytes.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.capacity - self.offset
    }

    /// Returns true once the backing reservation has been released.
    #[inline]
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.storage.is_none()
    }

    /// Returns true if `region` was allocated under the live generation,
    /// i.e. the arena has not been reset or disposed since.
    #[inline]
    #[must_use]
    pub fn is_current<T>(&self, region: Region<T>) -> bool {
        self.storage.is_some() && region.generation == self.generation
    }

    /// Allocates a region of `count` elements of type `T`.
    ///
    /// The cursor is first aligned up to `T`'s natural alignment, so the
    /// returned region is correctly aligned for any element type. Regions
    /// handed out between resets never overlap.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of elements to reserve space for
    ///
    /// # Errors
    ///
    /// - `ArenaError::Disposed` if the arena has been disposed
    /// - `ArenaError::OutOfMemory` if the region would exceed capacity;
    ///   the cursor is left unchanged
    pub fn alloc<T>(&mut self, count: usize) -> ArenaResult<Region<T>> {
        if self.storage.is_none() {
            return Err(ArenaError::Disposed);
        }

        let size = mem::size_of::<T>()
            .checked_mul(count)
            .ok_or(ArenaError::OutOfMemory {
                requested: usize::MAX,
                remaining: self.remaining(),
            })?;
        let align = mem::align_of::<T>();

        let aligned_offset = (self.offset + align - 1) & !(align - 1);
        let new_offset = aligned_offset
            .checked_add(size)
            .ok_or(ArenaError::OutOfMemory {
                requested: size,
                remaining: self.remaining(),
            })?;

        if new_offset > self.capacity {
            return Err(ArenaError::OutOfMemory {
                requested: size,
                remaining: self.remaining(),
            });
        }

        self.offset = new_offset;

        Ok(Region {
            offset: aligned_offset,
            count,
            generation: self.generation,
            _marker: PhantomData,
        })
    }

    /// Resets the arena, logically invalidating all previous allocations.
    ///
    /// This is a cursor rewind: no memory is freed, zeroed, or reallocated.
    /// Regions from before the reset fail the [`is_current`](Self::is_current)
    /// check afterwards.
    #[inline]
    pub fn reset(&mut self) {
        self.offset = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Releases the backing reservation.
    ///
    /// Idempotent: a second call is a no-op. Any allocation requested after
    /// disposal fails with `ArenaError::Disposed`.
    pub fn dispose(&mut self) {
        if self.storage.take().is_some() {
            self.offset = self.capacity;
            self.generation = self.generation.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_within_capacity() {
        let mut arena = ArenaAllocator::new(1024).unwrap();
        let region = arena.alloc::<f32>(10).unwrap();
        assert_eq!(region.len(), 10);
        assert_eq!(region.byte_len(), 40);
        assert_eq!(arena.used(), 40);
    }

    #[test]
    fn regions_never_overlap() {
        let mut arena = ArenaAllocator::new(1024).unwrap();
        let a = arena.alloc::<u32>(4).unwrap();
        let b = arena.alloc::<u32>(4).unwrap();
        assert!(a.offset() + a.byte_len() <= b.offset());
    }

    #[test]
    fn alloc_sequence_until_out_of_memory() {
        // Capacity fits exactly two 8-byte regions.
        let mut arena = ArenaAllocator::new(16).unwrap();
        arena.alloc::<u32>(2).unwrap();
        arena.alloc::<u32>(2).unwrap();

        let err = arena.alloc::<u32>(2).unwrap_err();
        assert_eq!(
            err,
            ArenaError::OutOfMemory {
                requested: 8,
                remaining: 0
            }
        );

        // Failed allocation must not move the cursor.
        assert_eq!(arena.used(), 16);

        // After reset, allocation restarts from offset 0.
        arena.reset();
        assert_eq!(arena.used(), 0);
        let region = arena.alloc::<u32>(2).unwrap();
        assert_eq!(region.offset(), 0);
    }

    #[test]
    fn alloc_respects_natural_alignment() {
        let mut arena = ArenaAllocator::new(64).unwrap();
        arena.alloc::<u8>(1).unwrap();

        let region = arena.alloc::<u64>(1).unwrap();
        assert_eq!(region.offset() % std::mem::align_of::<u64>(), 0);
        assert_eq!(region.offset(), 8);
    }

    #[test]
    fn zero_count_alloc_succeeds() {
        let mut arena = ArenaAllocator::new(8).unwrap();
        let region = arena.alloc::<u64>(0).unwrap();
        assert!(region.is_empty());
        assert_eq!(arena.used(), 0);
    }

    #[test]
    fn reset_invalidates_regions() {
        let mut arena = ArenaAllocator::new(64).unwrap();
        let region = arena.alloc::<u32>(4).unwrap();
        assert!(arena.is_current(region));

        arena.reset();
        assert!(!arena.is_current(region));

        let fresh = arena.alloc::<u32>(4).unwrap();
        assert!(arena.is_current(fresh));
    }

    #[test]
    fn dispose_is_idempotent() {
        let mut arena = ArenaAllocator::new(64).unwrap();
        let region = arena.alloc::<u32>(1).unwrap();

        arena.dispose();
        assert!(arena.is_disposed());
        assert!(!arena.is_current(region));

        // Second dispose is a no-op, not a double release.
        arena.dispose();
        assert!(arena.is_disposed());
    }

    #[test]
    fn alloc_after_dispose_fails() {
        let mut arena = ArenaAllocator::new(64).unwrap();
        arena.dispose();
        assert_eq!(arena.alloc::<u8>(1).unwrap_err(), ArenaError::Disposed);
    }

    #[test]
    fn absurd_capacity_fails_at_construction() {
        let err = ArenaAllocator::new(usize::MAX).unwrap_err();
        assert!(matches!(err, ArenaError::AllocationFailed { .. }));
    }
}
