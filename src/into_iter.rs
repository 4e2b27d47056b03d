use core::{fmt, iter::FusedIterator};

use super::{ArrayLength, BlockDeque};

/// An owning iterator over the elements of a [`BlockDeque`].
///
/// This `struct` is created by the [`into_iter`] method on [`BlockDeque`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: BlockDeque::into_iter
pub struct IntoIter<T, N>
where
  N: ArrayLength,
{
  inner: BlockDeque<T, N>,
}

impl<T, N: ArrayLength> IntoIter<T, N> {
  pub(super) fn new(inner: BlockDeque<T, N>) -> Self {
    IntoIter { inner }
  }
}

impl<T: Clone, N: ArrayLength> Clone for IntoIter<T, N> {
  fn clone(&self) -> Self {
    IntoIter {
      inner: self.inner.clone(),
    }
  }
}

impl<T: fmt::Debug, N: ArrayLength> fmt::Debug for IntoIter<T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("IntoIter").field(&self.inner).finish()
  }
}

impl<T, N: ArrayLength> Iterator for IntoIter<T, N> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> Option<T> {
    self.inner.pop_front().ok()
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.inner.len();
    (len, Some(len))
  }

  #[inline]
  fn count(self) -> usize {
    self.inner.len
  }

  #[inline]
  fn last(mut self) -> Option<Self::Item> {
    self.inner.pop_back().ok()
  }
}

impl<T, N: ArrayLength> DoubleEndedIterator for IntoIter<T, N> {
  #[inline]
  fn next_back(&mut self) -> Option<T> {
    self.inner.pop_back().ok()
  }
}

impl<T, N: ArrayLength> ExactSizeIterator for IntoIter<T, N> {
  #[inline]
  fn len(&self) -> usize {
    self.inner.len()
  }
}

impl<T, N: ArrayLength> FusedIterator for IntoIter<T, N> {}

#[cfg(test)]
mod tests {
  use std::vec::Vec;

  use super::IntoIter;
  use crate::{
    typenum::{U2, U4},
    BlockDeque,
  };

  #[test]
  fn iterator_behaves_like_queue() {
    let deque = BlockDeque::<_, U2>::from_iter(0..5);

    let mut iter = IntoIter::new(deque.clone());
    assert_eq!(iter.size_hint(), (5, Some(5)));
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.last(), Some(3));

    let count = deque.into_iter().count();
    assert_eq!(count, 5);
  }

  #[test]
  fn drains_across_blocks_from_both_ends() {
    let mut deque = BlockDeque::<_, U2>::new();
    deque.push_all_front(0..5);
    deque.push_all_back(5..10);

    let mut iter = deque.into_iter();
    let mut seen = Vec::new();
    while let Some(front) = iter.next() {
      seen.push(front);
      if let Some(back) = iter.next_back() {
        seen.push(back);
      }
    }
    assert_eq!(seen, [4, 9, 3, 8, 2, 7, 1, 6, 0, 5]);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
  }

  #[test]
  fn size_hint_shrinks_as_items_consumed() {
    let deque = BlockDeque::<_, U4>::from([0, 1, 2, 3]);
    let mut iter = IntoIter::new(deque);
    assert_eq!(iter.size_hint(), (4, Some(4)));
    iter.next();
    assert_eq!(iter.size_hint(), (3, Some(3)));
    iter.next_back();
    assert_eq!(iter.size_hint(), (2, Some(2)));
  }

  #[test]
  fn unconsumed_elements_are_dropped_with_the_iterator() {
    use std::rc::Rc;

    let shared = Rc::new(());
    let deque = BlockDeque::<_, U2>::from_iter((0..7).map(|_| Rc::clone(&shared)));
    let mut iter = deque.into_iter();
    iter.next();
    assert_eq!(Rc::strong_count(&shared), 7);
    drop(iter);
    assert_eq!(Rc::strong_count(&shared), 1);
  }
}
