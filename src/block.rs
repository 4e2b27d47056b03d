use core::ops::{Index, IndexMut};
use std::{boxed::Box, vec::Vec};

use generic_array::GenericArray;

use super::ArrayLength;

/// Identifies a block inside a [`Chain`].
pub(crate) type BlockId = usize;

/// A fixed-capacity run of slots, the unit of allocation in the chain.
///
/// `left` and `right` are navigation links only. The owning [`Chain`] holds
/// the block itself, so unlinking a block never leaves a second owner behind.
pub(crate) struct Block<T, N: ArrayLength> {
  pub(crate) slots: GenericArray<Option<T>, N>,
  pub(crate) left: Option<BlockId>,
  pub(crate) right: Option<BlockId>,
}

impl<T, N: ArrayLength> Block<T, N> {
  #[cfg_attr(not(tarpaulin), inline(always))]
  fn new(left: Option<BlockId>, right: Option<BlockId>) -> Self {
    Self {
      slots: GenericArray::default(),
      left,
      right,
    }
  }
}

/// Owns every block of a deque.
///
/// Blocks are boxed so that releasing one gives its memory back immediately;
/// the vacated id goes on a free list and is handed out again by the next
/// allocation.
pub(crate) struct Chain<T, N: ArrayLength> {
  blocks: Vec<Option<Box<Block<T, N>>>>,
  free: Vec<BlockId>,
}

impl<T, N: ArrayLength> Chain<T, N> {
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub(crate) const fn new() -> Self {
    Self {
      blocks: Vec::new(),
      free: Vec::new(),
    }
  }

  /// Allocates an empty block with the given neighbours and returns its id.
  ///
  /// The caller is responsible for pointing the neighbours back at it.
  pub(crate) fn alloc(&mut self, left: Option<BlockId>, right: Option<BlockId>) -> BlockId {
    let block = Some(Box::new(Block::new(left, right)));
    match self.free.pop() {
      Some(id) => {
        debug_assert!(self.blocks[id].is_none());
        self.blocks[id] = block;
        id
      }
      None => {
        self.blocks.push(block);
        self.blocks.len() - 1
      }
    }
  }

  /// Drops the block and frees its id.
  ///
  /// The block must already be unlinked from its neighbours.
  pub(crate) fn release(&mut self, id: BlockId) {
    if let Some(block) = self.blocks[id].take() {
      debug_assert!(block.slots.iter().all(Option::is_none));
      if id + 1 == self.blocks.len() {
        self.blocks.pop();
      } else {
        self.free.push(id);
      }
    }
  }

  /// Number of blocks currently allocated.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub(crate) fn live(&self) -> usize {
    self.blocks.len() - self.free.len()
  }

  /// Drops every block except `keep` and returns the kept block's new id.
  ///
  /// The kept block is detached from its neighbours; its slots are left as
  /// they are.
  pub(crate) fn retain_only(&mut self, keep: BlockId) -> BlockId {
    let kept = self.blocks[keep].take();
    self.blocks.clear();
    self.free.clear();
    self.blocks.push(kept);
    let block = &mut self[0];
    block.left = None;
    block.right = None;
    0
  }
}

impl<T, N: ArrayLength> Index<BlockId> for Chain<T, N> {
  type Output = Block<T, N>;

  #[inline]
  fn index(&self, id: BlockId) -> &Block<T, N> {
    match self.blocks.get(id) {
      Some(Some(block)) => block,
      _ => panic!("block {id} is not part of the chain"),
    }
  }
}

impl<T, N: ArrayLength> IndexMut<BlockId> for Chain<T, N> {
  #[inline]
  fn index_mut(&mut self, id: BlockId) -> &mut Block<T, N> {
    match self.blocks.get_mut(id) {
      Some(Some(block)) => block,
      _ => panic!("block {id} is not part of the chain"),
    }
  }
}
