use core::fmt;

/// Errors returned by [`BlockDeque`](crate::BlockDeque) accessors.
///
/// Every failing operation leaves the deque exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
  /// A single-element pop or peek was attempted on an empty deque.
  EmptyCollection,
  /// A bulk pop or peek asked for more elements than the deque holds.
  InsufficientElements {
    /// The number of elements asked for.
    requested: usize,
    /// The number of elements in the deque at the time of the call.
    available: usize,
  },
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::EmptyCollection => f.write_str("deque is empty"),
      Self::InsufficientElements {
        requested,
        available,
      } => write!(
        f,
        "requested {requested} elements from a deque holding {available}"
      ),
    }
  }
}

#[rustversion::since(1.81)]
impl core::error::Error for Error {}

#[rustversion::before(1.81)]
#[cfg(feature = "std")]
impl std::error::Error for Error {}
