//! # Craft Tree Builder
//!
//! Computes craftability: for a requested item and quantity, the recipe
//! graph is expanded into a tree of [`CraftNode`]s, each reporting how many
//! units can actually be produced given recursively computed ingredient
//! availability and base-resource stock.
//!
//! ## Memory Model
//!
//! All nodes and child blocks of one simulation pass live in a single
//! [`CraftArena`] and share one lifetime. Nodes are addressed by [`NodeId`]
//! handles, never by pointer; resetting the arena invalidates the whole
//! tree at once, and stale handles resolve to `None` instead of dangling.
//! Every node and every child block is metered through the core
//! [`ArenaAllocator`], so capacity and out-of-memory semantics are exactly
//! the bump allocator's.

use emberforge_core::memory::ArenaAllocator;

use crate::error::{CraftError, CraftResult};
use crate::inventory::Inventory;
use crate::items::{ItemId, RecipeBook};

/// Handle to a node within one simulation pass.
///
/// Valid only for the [`CraftArena`] that produced it, until that arena is
/// next reset or disposed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Index of the node within its arena.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Placeholder written into a child block before its real ids are known.
/// Never observable through a finalized tree.
const UNFILLED: NodeId = NodeId(u32::MAX);

/// Span of a node's child ids within the arena's child slab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ChildRange {
    start: u32,
    len: u32,
}

impl ChildRange {
    const EMPTY: Self = Self { start: 0, len: 0 };
}

/// One visited item's craftability result within a simulation tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CraftNode {
    /// The item this node represents.
    pub output_item: ItemId,
    /// Quantity requested of this item at this point in the tree.
    pub amount_needed: u32,
    /// Maximum quantity obtainable, computed bottom-up.
    pub amount_available: u32,
    /// Direct ingredient children, contiguous in the owning arena.
    children: ChildRange,
}

impl CraftNode {
    /// Number of direct ingredient children. Zero for base resources.
    #[inline]
    #[must_use]
    pub const fn sub_count(&self) -> u32 {
        self.children.len
    }

    /// Returns true if this node is a base resource (no recipe registered).
    #[inline]
    #[must_use]
    pub const fn is_base_resource(&self) -> bool {
        self.children.len == 0
    }
}

/// Node storage for one simulation pass.
///
/// Nodes and child-id blocks live in index-addressed lists whose byte
/// footprint is drawn from a fixed-capacity [`ArenaAllocator`]: each node
/// costs `size_of::<CraftNode>()` bytes of budget, each child block
/// `size_of::<NodeId>()` per entry. When the budget runs out the pass fails
/// with an arena out-of-memory error; nothing grows.
pub struct CraftArena {
    bytes: ArenaAllocator,
    nodes: Vec<CraftNode>,
    children: Vec<NodeId>,
}

impl CraftArena {
    /// Creates an arena with the given byte capacity.
    ///
    /// # Errors
    ///
    /// Returns an arena error if the backing reservation cannot be obtained.
    pub fn new(capacity_bytes: usize) -> CraftResult<Self> {
        Ok(Self {
            bytes: ArenaAllocator::new(capacity_bytes)?,
            nodes: Vec::new(),
            children: Vec::new(),
        })
    }

    /// Total byte capacity of the pass.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Bytes of budget consumed so far.
    #[inline]
    #[must_use]
    pub fn used(&self) -> usize {
        self.bytes.used()
    }

    /// Number of nodes allocated in the current pass.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Resolves a node handle.
    ///
    /// Returns `None` for handles from before the last reset; a stale handle
    /// never yields stale data.
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&CraftNode> {
        self.nodes.get(id.index())
    }

    /// The direct children of a node, in recipe ingredient order.
    #[must_use]
    pub fn children_of(&self, node: &CraftNode) -> &[NodeId] {
        let start = node.children.start as usize;
        let end = start + node.children.len as usize;
        self.children.get(start..end).unwrap_or(&[])
    }

    /// Invalidates the whole tree and rewinds the byte budget to zero.
    ///
    /// Cheap: no memory is released. Handles from before the reset resolve
    /// to `None` afterwards.
    pub fn reset(&mut self) {
        self.bytes.reset();
        self.nodes.clear();
        self.children.clear();
    }

    /// Releases the byte reservation and drops all nodes.
    ///
    /// Idempotent; any simulation attempted afterwards fails with a
    /// disposed-arena error.
    pub fn dispose(&mut self) {
        self.bytes.dispose();
        self.nodes = Vec::new();
        self.children = Vec::new();
    }

    /// Allocates one node, charging the byte budget.
    fn alloc_node(&mut self, node: CraftNode) -> CraftResult<NodeId> {
        self.bytes.alloc::<CraftNode>(1)?;
        let id = u32::try_from(self.nodes.len()).map_err(|_| CraftError::ArithmeticOverflow)?;
        self.nodes.push(node);
        Ok(NodeId(id))
    }

    /// Reserves a contiguous child block, charging the byte budget.
    fn alloc_child_block(&mut self, len: usize) -> CraftResult<ChildRange> {
        self.bytes.alloc::<NodeId>(len)?;
        let start = u32::try_from(self.children.len()).map_err(|_| CraftError::ArithmeticOverflow)?;
        let len32 = u32::try_from(len).map_err(|_| CraftError::ArithmeticOverflow)?;
        self.children.resize(self.children.len() + len, UNFILLED);
        Ok(ChildRange { start, len: len32 })
    }

    /// Stores a child id at its ingredient position within a block.
    fn set_child(&mut self, block: ChildRange, slot: usize, child: NodeId) {
        let index = block.start as usize + slot;
        if let Some(entry) = self.children.get_mut(index) {
            *entry = child;
        }
    }

    /// Writes a node's children and computed availability.
    fn finalize_node(&mut self, id: NodeId, children: ChildRange, amount_available: u32) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.children = children;
            node.amount_available = amount_available;
        }
    }
}

/// Recursive craftability simulator.
///
/// Binds a recipe registry and an inventory; [`simulate`](Self::simulate) is
/// the sole operation.
pub struct CraftSimulator<'a> {
    recipes: &'a RecipeBook,
    inventory: &'a Inventory,
}

impl<'a> CraftSimulator<'a> {
    /// Creates a simulator over the given collaborators.
    #[inline]
    #[must_use]
    pub const fn new(recipes: &'a RecipeBook, inventory: &'a Inventory) -> Self {
        Self { recipes, inventory }
    }

    /// Builds the craft tree for `item` at the requested quantity and
    /// returns a handle to its root node.
    ///
    /// Traversal is depth-first with pre-order node allocation: a parent's
    /// node is drawn from the arena before any of its children. For an item
    /// with a recipe, availability is the minimum over its ingredients of
    /// `child_available / amount_per_unit` (integer floor division); for a
    /// base resource it is the inventory stock.
    ///
    /// # Errors
    ///
    /// - arena errors (out of memory, disposed): the pass is aborted with no
    ///   partial result; callers discard the arena contents via `reset`
    /// - `CraftError::CycleDetected` if the recipe graph loops back into an
    ///   item already on the current path
    /// - `CraftError::ArithmeticOverflow` if a required amount exceeds `u32`
    /// - `CraftError::InvalidIngredientAmount` for a zero per-unit amount
    ///   that bypassed registration validation
    pub fn simulate(
        &self,
        arena: &mut CraftArena,
        item: ItemId,
        amount_needed: u32,
    ) -> CraftResult<NodeId> {
        tracing::debug!(item, amount_needed, "simulating craft");
        let mut path = Vec::new();
        self.expand(arena, item, amount_needed, &mut path)
    }

    /// Recursive worker. `path` holds the items currently being expanded,
    /// root first; re-entering one of them means the recipe graph is cyclic.
    fn expand(
        &self,
        arena: &mut CraftArena,
        item: ItemId,
        amount_needed: u32,
        path: &mut Vec<ItemId>,
    ) -> CraftResult<NodeId> {
        if path.contains(&item) {
            return Err(CraftError::CycleDetected(item));
        }

        // Pre-order: the parent's node is allocated before any child's.
        let id = arena.alloc_node(CraftNode {
            output_item: item,
            amount_needed,
            amount_available: 0,
            children: ChildRange::EMPTY,
        })?;

        let Some(recipe) = self.recipes.try_get_recipe(item) else {
            // Base resource: availability comes straight from stock.
            let stock = self.inventory.get_count(item);
            arena.finalize_node(id, ChildRange::EMPTY, stock);
            return Ok(id);
        };

        // The child block is reserved before recursing, like the node.
        let block = arena.alloc_child_block(recipe.ingredients.len())?;

        path.push(item);
        // Seeded at MAX so an empty ingredient set reads as unbounded.
        let mut max_craftable = u32::MAX;

        for (slot, ingredient) in recipe.ingredients.iter().enumerate() {
            if ingredient.amount_per_unit == 0 {
                return Err(CraftError::InvalidIngredientAmount {
                    item_id: ingredient.item_id,
                    amount: 0,
                });
            }

            let required = ingredient
                .amount_per_unit
                .checked_mul(amount_needed)
                .ok_or(CraftError::ArithmeticOverflow)?;

            let child = self.expand(arena, ingredient.item_id, required, path)?;
            arena.set_child(block, slot, child);

            let child_available = arena.node(child).map_or(0, |n| n.amount_available);
            let possible = child_available / ingredient.amount_per_unit;
            max_craftable = max_craftable.min(possible);
        }

        path.pop();
        arena.finalize_node(id, block, max_craftable);
        Ok(id)
    }
}
