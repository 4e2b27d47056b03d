#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs, warnings)]

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error!("`block-deque` allocates its blocks on the heap: enable the `std` or `alloc` feature");

#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc as std;

#[cfg(feature = "std")]
extern crate std;

use core::{
  cmp::Ordering,
  fmt,
  hash::{Hash, Hasher},
};
use std::vec::Vec;

use block::{BlockId, Chain};

pub use error::Error;
pub use generic_array::{typenum, ArrayLength, ConstArrayLength, IntoArrayLength};
pub use into_iter::IntoIter;
pub use iter::{Iter, Values};

mod block;
mod error;
mod into_iter;
mod iter;
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde;

#[cfg(test)]
mod heap_tests;

/// [`BlockDeque`] with a const-generic `usize` block capacity, using the [`ConstArrayLength`]
/// type alias for `N`.
pub type ConstBlockDeque<T, const N: usize> = BlockDeque<T, ConstArrayLength<N>>;

/// A double-ended queue stored as a doubly-linked chain of fixed-capacity blocks.
///
/// Every block holds `N` slots, where `N` is a [`typenum`] unsigned integer
/// (64 by default). Pushing at either end writes into the block at that end;
/// only when that block is full is a new one allocated and linked on. Popping
/// works the same way in reverse: a block that empties is unlinked and freed
/// at once. Elements already in the deque are never moved, so no push ever
/// costs more than one block allocation.
///
/// When the last element is popped the remaining block is kept and both
/// cursors are moved back to its middle, so alternating pushes and pops on an
/// empty deque do not allocate.
///
/// Access to the ends reports failure through [`Error`] rather than
/// [`Option`]; bulk operations check the requested count up front and never
/// modify the deque when they fail.
///
/// ## Examples
///
/// ```rust
/// use block_deque::{BlockDeque, Error};
///
/// let mut deque = BlockDeque::<char>::new();
/// deque.push_back('a');
/// deque.push_front('b');
/// deque.push_back('c');
/// deque.push_front('d');
///
/// assert_eq!(deque, ['d', 'b', 'a', 'c']);
/// assert_eq!(deque.pop_back(), Ok('c'));
/// assert_eq!(deque.pop_front(), Ok('d'));
/// assert_eq!(deque, ['b', 'a']);
///
/// deque.pop_back_k(2).unwrap();
/// assert_eq!(deque.peek_front(), Err(Error::EmptyCollection));
/// ```
///
/// Choosing a block size:
///
/// ```rust
/// use block_deque::{BlockDeque, typenum::U4};
///
/// let mut deque = BlockDeque::<u32, U4>::new();
/// deque.push_all_back(0..10);
///
/// assert_eq!(deque.block_capacity(), 4);
/// assert_eq!(deque.block_count(), 3);
/// ```
pub struct BlockDeque<T, N = typenum::U64>
where
  N: ArrayLength,
{
  chain: Chain<T, N>,
  front: BlockId,
  back: BlockId,
  /// Slot of the first live element in `front`.
  front_index: usize,
  /// One past the slot of the last live element in `back`.
  back_end: usize,
  len: usize,
}

impl<T: Clone, N: ArrayLength> Clone for BlockDeque<T, N> {
  fn clone(&self) -> Self {
    self.iter().cloned().collect()
  }
}

impl<T, N: ArrayLength> Default for BlockDeque<T, N> {
  #[cfg_attr(not(tarpaulin), inline(always))]
  fn default() -> Self {
    Self::new()
  }
}

impl<T: fmt::Debug, N: ArrayLength> fmt::Debug for BlockDeque<T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T: PartialEq, N1: ArrayLength, N2: ArrayLength> PartialEq<BlockDeque<T, N2>>
  for BlockDeque<T, N1>
{
  fn eq(&self, other: &BlockDeque<T, N2>) -> bool {
    self.len == other.len() && self.iter().eq(other.iter())
  }
}

impl<T: Eq, N: ArrayLength> Eq for BlockDeque<T, N> {}

macro_rules! __impl_slice_eq1 {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty, $($constraints:tt)*) => {
        impl<T, U, L: ArrayLength, $($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
            $($constraints)*
        {
            fn eq(&self, other: &$rhs) -> bool {
                self.len() == other.len() && self.iter().eq(other[..].iter())
            }
        }
    }
}
__impl_slice_eq1! { [] BlockDeque<T, L>, Vec<U>, }
__impl_slice_eq1! { [] BlockDeque<T, L>, &[U], }
__impl_slice_eq1! { [] BlockDeque<T, L>, &mut [U], }
__impl_slice_eq1! { [const N: usize] BlockDeque<T, L>, [U; N], }
__impl_slice_eq1! { [const N: usize] BlockDeque<T, L>, &[U; N], }
__impl_slice_eq1! { [const N: usize] BlockDeque<T, L>, &mut [U; N], }

impl<T: PartialOrd, N: ArrayLength> PartialOrd for BlockDeque<T, N> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.iter().partial_cmp(other.iter())
  }
}

impl<T: Ord, N: ArrayLength> Ord for BlockDeque<T, N> {
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    self.iter().cmp(other.iter())
  }
}

impl<T: Hash, N: ArrayLength> Hash for BlockDeque<T, N> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    // Hash the contents only: two deques holding the same elements may
    // split them across blocks differently.
    state.write_usize(self.len);
    self.iter().for_each(|elem| elem.hash(state));
  }
}

impl<T, N: ArrayLength> IntoIterator for BlockDeque<T, N> {
  type Item = T;
  type IntoIter = IntoIter<T, N>;

  /// Consumes the deque into a front-to-back iterator yielding elements by
  /// value.
  fn into_iter(self) -> IntoIter<T, N> {
    IntoIter::new(self)
  }
}

impl<'a, T, N: ArrayLength> IntoIterator for &'a BlockDeque<T, N> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T, N>;

  fn into_iter(self) -> Iter<'a, T, N> {
    self.iter()
  }
}

impl<T, N: ArrayLength> FromIterator<T> for BlockDeque<T, N> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut deque = Self::new();
    deque.push_all_back(iter);
    deque
  }
}

impl<T, N: ArrayLength> Extend<T> for BlockDeque<T, N> {
  #[cfg_attr(not(tarpaulin), inline(always))]
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    self.push_all_back(iter);
  }
}

impl<'a, T: Copy + 'a, N: ArrayLength> Extend<&'a T> for BlockDeque<T, N> {
  #[cfg_attr(not(tarpaulin), inline(always))]
  fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
    self.push_all_back(iter.into_iter().copied());
  }
}

impl<T, N: ArrayLength, const SIZE: usize> From<[T; SIZE]> for BlockDeque<T, N> {
  #[cfg_attr(not(tarpaulin), inline(always))]
  fn from(arr: [T; SIZE]) -> Self {
    Self::from_iter(arr)
  }
}

impl<T, N: ArrayLength> From<Vec<T>> for BlockDeque<T, N> {
  #[cfg_attr(not(tarpaulin), inline(always))]
  fn from(vec: Vec<T>) -> Self {
    Self::from_iter(vec)
  }
}

impl<T, N: ArrayLength> From<BlockDeque<T, N>> for Vec<T> {
  fn from(deque: BlockDeque<T, N>) -> Self {
    let mut vec = Vec::with_capacity(deque.len());
    vec.extend(deque);
    vec
  }
}

impl<T, N> BlockDeque<T, N>
where
  N: ArrayLength,
{
  const CAPACITY: usize = {
    assert!(N::USIZE >= 2, "a block must hold at least two elements");
    N::USIZE
  };

  /// Where both cursors rest in an empty deque. A push at either end fits
  /// in the block without an allocation.
  const MIDPOINT: usize = Self::CAPACITY / 2;

  /// Creates an empty deque.
  ///
  /// A single block is allocated up front and stays allocated for the
  /// lifetime of the deque.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::{BlockDeque, typenum::U8};
  ///
  /// let deque: BlockDeque<u32, U8> = BlockDeque::new();
  /// assert!(deque.is_empty());
  /// assert_eq!(deque.block_count(), 1);
  /// ```
  pub fn new() -> Self {
    let mut chain = Chain::new();
    let block = chain.alloc(None, None);
    Self {
      chain,
      front: block,
      back: block,
      front_index: Self::MIDPOINT,
      back_end: Self::MIDPOINT,
      len: 0,
    }
  }

  /// Returns the number of elements in the deque.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::<u32>::new();
  /// assert_eq!(deque.len(), 0);
  /// deque.push_back(1);
  /// assert_eq!(deque.len(), 1);
  /// ```
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if the deque is empty.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::<u32>::new();
  /// assert!(deque.is_empty());
  /// deque.push_front(1);
  /// assert!(!deque.is_empty());
  /// ```
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the number of elements a single block holds.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub const fn block_capacity(&self) -> usize {
    N::USIZE
  }

  /// Returns the number of blocks currently allocated.
  ///
  /// This is never zero: an empty deque keeps one block.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn block_count(&self) -> usize {
    self.chain.live()
  }

  /// Appends an element to the back of the deque.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::<u32>::new();
  /// deque.push_back(1);
  /// deque.push_back(3);
  /// assert_eq!(deque.peek_back(), Ok(&3));
  /// ```
  pub fn push_back(&mut self, value: T) {
    if self.back_end == Self::CAPACITY {
      let block = self.chain.alloc(Some(self.back), None);
      self.chain[self.back].right = Some(block);
      self.back = block;
      self.back_end = 0;
    }
    self.chain[self.back].slots[self.back_end] = Some(value);
    self.back_end += 1;
    self.len += 1;
  }

  /// Prepends an element to the front of the deque.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::<u32>::new();
  /// deque.push_front(1);
  /// deque.push_front(2);
  /// assert_eq!(deque.peek_front(), Ok(&2));
  /// ```
  pub fn push_front(&mut self, value: T) {
    if self.front_index == 0 {
      let block = self.chain.alloc(None, Some(self.front));
      self.chain[self.front].left = Some(block);
      self.front = block;
      self.front_index = Self::CAPACITY;
    }
    self.front_index -= 1;
    self.chain[self.front].slots[self.front_index] = Some(value);
    self.len += 1;
  }

  /// Appends every element of `iter` to the back, in iteration order.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::<_>::from([1, 2]);
  /// deque.push_all_back([3, 4]);
  /// assert_eq!(deque, [1, 2, 3, 4]);
  /// ```
  pub fn push_all_back<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    iter.into_iter().for_each(|value| self.push_back(value));
  }

  /// Prepends every element of `iter` to the front, one at a time.
  ///
  /// Each element lands in front of the one pushed before it, so the
  /// elements end up in the deque in reverse iteration order.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::<_>::from([4, 5]);
  /// deque.push_all_front([1, 2, 3]);
  /// assert_eq!(deque, [3, 2, 1, 4, 5]);
  /// ```
  pub fn push_all_front<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    iter.into_iter().for_each(|value| self.push_front(value));
  }

  /// Removes the last element and returns it.
  ///
  /// Returns [`Error::EmptyCollection`] if the deque is empty.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::{BlockDeque, Error};
  ///
  /// let mut deque = BlockDeque::<_>::from([1, 3]);
  /// assert_eq!(deque.pop_back(), Ok(3));
  /// assert_eq!(deque.pop_back(), Ok(1));
  /// assert_eq!(deque.pop_back(), Err(Error::EmptyCollection));
  /// ```
  pub fn pop_back(&mut self) -> Result<T, Error> {
    if self.is_empty() {
      return Err(Error::EmptyCollection);
    }

    self.back_end -= 1;
    let value = self.take_slot(self.back, self.back_end);
    self.len -= 1;
    if self.is_empty() {
      self.recenter();
    } else if self.back_end == 0 {
      self.release_back();
    }
    Ok(value)
  }

  /// Removes the first element and returns it.
  ///
  /// Returns [`Error::EmptyCollection`] if the deque is empty.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::{BlockDeque, Error};
  ///
  /// let mut deque = BlockDeque::<_>::from([1, 2]);
  /// assert_eq!(deque.pop_front(), Ok(1));
  /// assert_eq!(deque.pop_front(), Ok(2));
  /// assert_eq!(deque.pop_front(), Err(Error::EmptyCollection));
  /// ```
  pub fn pop_front(&mut self) -> Result<T, Error> {
    if self.is_empty() {
      return Err(Error::EmptyCollection);
    }

    let value = self.take_slot(self.front, self.front_index);
    self.front_index += 1;
    self.len -= 1;
    if self.is_empty() {
      self.recenter();
    } else if self.front_index == Self::CAPACITY {
      self.release_front();
    }
    Ok(value)
  }

  /// Removes `k` elements from the back and returns them in the order they
  /// were popped, last element first.
  ///
  /// Returns [`Error::InsufficientElements`] without touching the deque if
  /// it holds fewer than `k` elements.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::<_>::from(["a", "b", "c", "d"]);
  /// assert_eq!(deque.pop_back_k(3), Ok(vec!["d", "c", "b"]));
  /// assert_eq!(deque, ["a"]);
  /// ```
  pub fn pop_back_k(&mut self, k: usize) -> Result<Vec<T>, Error> {
    self.check_available(k)?;
    let mut popped = Vec::with_capacity(k);
    for _ in 0..k {
      popped.push(self.pop_back()?);
    }
    Ok(popped)
  }

  /// Removes `k` elements from the front and returns them in the order they
  /// were popped, first element first.
  ///
  /// Returns [`Error::InsufficientElements`] without touching the deque if
  /// it holds fewer than `k` elements.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::<_>::from(["a", "b", "c", "d"]);
  /// assert_eq!(deque.pop_front_k(3), Ok(vec!["a", "b", "c"]));
  /// assert_eq!(deque, ["d"]);
  /// ```
  pub fn pop_front_k(&mut self, k: usize) -> Result<Vec<T>, Error> {
    self.check_available(k)?;
    let mut popped = Vec::with_capacity(k);
    for _ in 0..k {
      popped.push(self.pop_front()?);
    }
    Ok(popped)
  }

  /// Returns a reference to the last element.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::{BlockDeque, Error};
  ///
  /// let mut deque = BlockDeque::<u32>::new();
  /// assert_eq!(deque.peek_back(), Err(Error::EmptyCollection));
  ///
  /// deque.push_back(1);
  /// deque.push_back(2);
  /// assert_eq!(deque.peek_back(), Ok(&2));
  /// ```
  #[inline]
  pub fn peek_back(&self) -> Result<&T, Error> {
    self.iter().next_back().ok_or(Error::EmptyCollection)
  }

  /// Returns a reference to the first element.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::{BlockDeque, Error};
  ///
  /// let mut deque = BlockDeque::<u32>::new();
  /// assert_eq!(deque.peek_front(), Err(Error::EmptyCollection));
  ///
  /// deque.push_back(1);
  /// deque.push_back(2);
  /// assert_eq!(deque.peek_front(), Ok(&1));
  /// ```
  #[inline]
  pub fn peek_front(&self) -> Result<&T, Error> {
    self.iter().next().ok_or(Error::EmptyCollection)
  }

  /// Returns a mutable reference to the last element.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::<_>::from([1, 2]);
  /// if let Ok(x) = deque.peek_back_mut() {
  ///     *x = 9;
  /// }
  /// assert_eq!(deque, [1, 9]);
  /// ```
  pub fn peek_back_mut(&mut self) -> Result<&mut T, Error> {
    if self.is_empty() {
      return Err(Error::EmptyCollection);
    }
    self.chain[self.back].slots[self.back_end - 1]
      .as_mut()
      .ok_or(Error::EmptyCollection)
  }

  /// Returns a mutable reference to the first element.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::<_>::from([1, 2]);
  /// if let Ok(x) = deque.peek_front_mut() {
  ///     *x = 9;
  /// }
  /// assert_eq!(deque, [9, 2]);
  /// ```
  pub fn peek_front_mut(&mut self) -> Result<&mut T, Error> {
    if self.is_empty() {
      return Err(Error::EmptyCollection);
    }
    self.chain[self.front].slots[self.front_index]
      .as_mut()
      .ok_or(Error::EmptyCollection)
  }

  /// Returns references to the last `k` elements, walking from the back
  /// towards the front. The deque is not modified.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::BlockDeque;
  ///
  /// let deque = BlockDeque::<_>::from(["a", "b", "c", "d"]);
  /// assert_eq!(deque.peek_back_k(3), Ok(vec![&"d", &"c", &"b"]));
  /// assert_eq!(deque, ["a", "b", "c", "d"]);
  /// ```
  pub fn peek_back_k(&self, k: usize) -> Result<Vec<&T>, Error> {
    self.check_available(k)?;
    Ok(self.iter().rev().take(k).collect())
  }

  /// Returns references to the first `k` elements, walking from the front
  /// towards the back. The deque is not modified.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::BlockDeque;
  ///
  /// let deque = BlockDeque::<_>::from(["a", "b", "c", "d"]);
  /// assert_eq!(deque.peek_front_k(3), Ok(vec![&"a", &"b", &"c"]));
  /// assert_eq!(deque, ["a", "b", "c", "d"]);
  /// ```
  pub fn peek_front_k(&self, k: usize) -> Result<Vec<&T>, Error> {
    self.check_available(k)?;
    Ok(self.iter().take(k).collect())
  }

  /// Returns a front-to-back iterator.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::{BlockDeque, typenum::U2};
  ///
  /// let deque = BlockDeque::<i32, U2>::from([5, 3, 4]);
  /// let collected: Vec<&i32> = deque.iter().collect();
  /// assert_eq!(collected, vec![&5, &3, &4]);
  ///
  /// let reversed: Vec<&i32> = deque.iter().rev().collect();
  /// assert_eq!(reversed, vec![&4, &3, &5]);
  /// ```
  #[inline]
  pub fn iter(&self) -> Iter<'_, T, N> {
    Iter::new(
      &self.chain,
      (self.front, self.front_index),
      (self.back, self.back_end),
      self.len,
    )
  }

  /// Returns an iterator over every element, front to back, or back to
  /// front when `reversed` is `true`.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::BlockDeque;
  ///
  /// let deque = BlockDeque::<_>::from([1, 2, 3]);
  /// assert_eq!(deque.values(false).copied().collect::<Vec<_>>(), [1, 2, 3]);
  /// assert_eq!(deque.values(true).copied().collect::<Vec<_>>(), [3, 2, 1]);
  /// ```
  #[inline]
  pub fn values(&self, reversed: bool) -> Values<'_, T, N> {
    Values::new(self.iter(), reversed)
  }

  /// Returns `true` if the deque contains an element equal to `x`.
  ///
  /// This operation is *O*(*n*).
  #[inline]
  pub fn contains(&self, x: &T) -> bool
  where
    T: PartialEq<T>,
  {
    self.iter().any(|elem| elem == x)
  }

  /// Removes every element.
  ///
  /// All blocks but one are freed; the deque is left as [`new`](Self::new)
  /// would create it.
  ///
  /// ## Examples
  ///
  /// ```
  /// use block_deque::{BlockDeque, typenum::U2};
  ///
  /// let mut deque = BlockDeque::<u32, U2>::from([1, 2, 3, 4, 5]);
  /// deque.clear();
  /// assert!(deque.is_empty());
  /// assert_eq!(deque.block_count(), 1);
  /// ```
  pub fn clear(&mut self) {
    let keep = self.chain.retain_only(self.front);
    self.chain[keep].slots.iter_mut().for_each(|slot| *slot = None);
    self.front = keep;
    self.back = keep;
    self.len = 0;
    self.recenter();
  }
}

impl<T, N> BlockDeque<T, N>
where
  N: ArrayLength,
{
  #[inline]
  fn check_available(&self, requested: usize) -> Result<(), Error> {
    if requested > self.len {
      Err(Error::InsufficientElements {
        requested,
        available: self.len,
      })
    } else {
      Ok(())
    }
  }

  /// Moves a live element out of its slot, leaving the slot empty.
  #[inline]
  fn take_slot(&mut self, block: BlockId, index: usize) -> T {
    match self.chain[block].slots[index].take() {
      Some(value) => value,
      None => unreachable!("slot {index} of block {block} holds no element"),
    }
  }

  /// Resets both cursors of an empty deque to the middle of its only block.
  #[inline]
  fn recenter(&mut self) {
    debug_assert_eq!(self.front, self.back);
    self.front_index = Self::MIDPOINT;
    self.back_end = Self::MIDPOINT;
  }

  /// Unlinks and frees the drained back block; its left neighbour becomes
  /// the back block.
  fn release_back(&mut self) {
    let drained = self.back;
    let Some(left) = self.chain[drained].left.take() else {
      unreachable!("drained back block {drained} has no left neighbour");
    };
    self.chain[left].right = None;
    self.back = left;
    self.back_end = Self::CAPACITY;
    self.chain.release(drained);
  }

  /// Unlinks and frees the drained front block; its right neighbour becomes
  /// the front block.
  fn release_front(&mut self) {
    let drained = self.front;
    let Some(right) = self.chain[drained].right.take() else {
      unreachable!("drained front block {drained} has no right neighbour");
    };
    self.chain[right].left = None;
    self.front = right;
    self.front_index = 0;
    self.chain.release(drained);
  }
}
