use core::{fmt, iter::FusedIterator};

use super::{
  block::{BlockId, Chain},
  ArrayLength,
};

/// An iterator over the elements of a [`BlockDeque`](crate::BlockDeque).
///
/// This `struct` is created by the [`iter`] method on `BlockDeque`. See its
/// documentation for more.
///
/// [`iter`]: crate::BlockDeque::iter
pub struct Iter<'a, T, N: ArrayLength> {
  chain: &'a Chain<T, N>,
  front: BlockId,
  front_index: usize,
  back: BlockId,
  back_end: usize,
  remaining: usize,
}

impl<'a, T, N: ArrayLength> Iter<'a, T, N> {
  pub(super) const fn new(
    chain: &'a Chain<T, N>,
    (front, front_index): (BlockId, usize),
    (back, back_end): (BlockId, usize),
    remaining: usize,
  ) -> Self {
    Self {
      chain,
      front,
      front_index,
      back,
      back_end,
      remaining,
    }
  }
}

impl<T, N: ArrayLength> Clone for Iter<'_, T, N> {
  fn clone(&self) -> Self {
    Self {
      chain: self.chain,
      front: self.front,
      front_index: self.front_index,
      back: self.back,
      back_end: self.back_end,
      remaining: self.remaining,
    }
  }
}

impl<T, N: ArrayLength> fmt::Debug for Iter<'_, T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Iter")
      .field("remaining", &self.remaining)
      .finish()
  }
}

impl<'a, T, N: ArrayLength> Iterator for Iter<'a, T, N> {
  type Item = &'a T;

  #[inline]
  fn next(&mut self) -> Option<&'a T> {
    if self.remaining == 0 {
      return None;
    }

    let chain = self.chain;
    // Cross into the next block lazily, so the cursor never steps past the
    // back block.
    if self.front_index == N::USIZE {
      self.front = chain[self.front].right?;
      self.front_index = 0;
    }
    let item = chain[self.front].slots[self.front_index].as_ref();
    self.front_index += 1;
    self.remaining -= 1;
    item
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }

  #[inline]
  fn count(self) -> usize {
    self.remaining
  }

  #[inline]
  fn last(mut self) -> Option<&'a T> {
    self.next_back()
  }
}

impl<'a, T, N: ArrayLength> DoubleEndedIterator for Iter<'a, T, N> {
  #[inline]
  fn next_back(&mut self) -> Option<&'a T> {
    if self.remaining == 0 {
      return None;
    }

    let chain = self.chain;
    if self.back_end == 0 {
      self.back = chain[self.back].left?;
      self.back_end = N::USIZE;
    }
    self.back_end -= 1;
    self.remaining -= 1;
    chain[self.back].slots[self.back_end].as_ref()
  }
}

impl<T, N: ArrayLength> ExactSizeIterator for Iter<'_, T, N> {
  fn len(&self) -> usize {
    self.remaining
  }
}

impl<T, N: ArrayLength> FusedIterator for Iter<'_, T, N> {}

/// An iterator over the elements of a [`BlockDeque`](crate::BlockDeque) in a
/// direction chosen at construction.
///
/// This `struct` is created by the [`values`] method on `BlockDeque`.
///
/// [`values`]: crate::BlockDeque::values
pub struct Values<'a, T, N: ArrayLength> {
  iter: Iter<'a, T, N>,
  reversed: bool,
}

impl<'a, T, N: ArrayLength> Values<'a, T, N> {
  pub(super) const fn new(iter: Iter<'a, T, N>, reversed: bool) -> Self {
    Self { iter, reversed }
  }

  /// Returns `true` if this iterator walks from the back to the front.
  #[inline]
  pub const fn is_reversed(&self) -> bool {
    self.reversed
  }
}

impl<T, N: ArrayLength> Clone for Values<'_, T, N> {
  fn clone(&self) -> Self {
    Self {
      iter: self.iter.clone(),
      reversed: self.reversed,
    }
  }
}

impl<T, N: ArrayLength> fmt::Debug for Values<'_, T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Values")
      .field("iter", &self.iter)
      .field("reversed", &self.reversed)
      .finish()
  }
}

impl<'a, T, N: ArrayLength> Iterator for Values<'a, T, N> {
  type Item = &'a T;

  #[inline]
  fn next(&mut self) -> Option<&'a T> {
    if self.reversed {
      self.iter.next_back()
    } else {
      self.iter.next()
    }
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.iter.size_hint()
  }
}

impl<'a, T, N: ArrayLength> DoubleEndedIterator for Values<'a, T, N> {
  #[inline]
  fn next_back(&mut self) -> Option<&'a T> {
    if self.reversed {
      self.iter.next()
    } else {
      self.iter.next_back()
    }
  }
}

impl<T, N: ArrayLength> ExactSizeIterator for Values<'_, T, N> {
  fn len(&self) -> usize {
    self.iter.len()
  }
}

impl<T, N: ArrayLength> FusedIterator for Values<'_, T, N> {}
