use super::*;
use generic_array::typenum::{U2, U3, U4};
use std::{
  string::{String, ToString},
  vec,
  vec::Vec,
};

fn s<T: ToString>(value: T) -> String {
  value.to_string()
}

macro_rules! sarr {
  ($($val:expr),+ $(,)?) => {
    [$(s($val)),+]
  };
}

#[cfg(feature = "std")]
macro_rules! struct_with_counted_drop {
  ($struct_name:ident $(( $( $elt_ty:ty ),+ ))?, $drop_counter:ident) => {
    thread_local! {static $drop_counter: ::core::cell::Cell<u32> = ::core::cell::Cell::new(0);}

    #[derive(Clone, Debug, PartialEq)]
    struct $struct_name $(( $( $elt_ty ),+ ))?;

    impl ::std::ops::Drop for $struct_name {
      fn drop(&mut self) {
        $drop_counter.set($drop_counter.get() + 1);
      }
    }
  };
}

#[test]
fn heap_test_mixed_pushes_and_pops() {
  let mut deque = BlockDeque::<String, U2>::new();
  deque.push_back(s("a"));
  deque.push_front(s("b"));
  deque.push_back(s("c"));
  deque.push_front(s("d"));
  assert_eq!(deque, sarr!["d", "b", "a", "c"]);

  assert_eq!(deque.pop_back(), Ok(s("c")));
  assert_eq!(deque.pop_front(), Ok(s("d")));
  assert_eq!(deque, sarr!["b", "a"]);
}

#[test]
fn heap_test_pop_back_k() {
  let mut deque = BlockDeque::<String, U2>::from(sarr!["Z", "Y", "X", "A", "B", "C"]);
  assert_eq!(deque.pop_back_k(3), Ok(vec![s("C"), s("B"), s("A")]));
  assert_eq!(deque, sarr!["Z", "Y", "X"]);

  assert!(deque.pop_back_k(4).is_err());
  assert_eq!(deque, sarr!["Z", "Y", "X"]);
}

#[test]
fn heap_test_peek_k() {
  let deque = BlockDeque::<String, U3>::from(sarr!["a", "b", "c", "d"]);
  let front: Vec<&str> = deque
    .peek_front_k(3)
    .unwrap()
    .into_iter()
    .map(String::as_str)
    .collect();
  let back: Vec<&str> = deque
    .peek_back_k(3)
    .unwrap()
    .into_iter()
    .map(String::as_str)
    .collect();
  assert_eq!(front, ["a", "b", "c"]);
  assert_eq!(back, ["d", "c", "b"]);
  assert_eq!(deque, sarr!["a", "b", "c", "d"]);
}

#[test]
fn heap_test_round_trip() {
  let count = 4 * 7 / 2;
  let mut deque = BlockDeque::<String, U4>::from_iter((0..count).map(s));
  let drained: Vec<_> = (0..count).map(|_| deque.pop_front().unwrap()).collect();
  assert_eq!(drained, (0..count).map(s).collect::<Vec<_>>());
  assert!(deque.is_empty());

  deque.push_back(s("fresh"));
  assert_eq!(deque, sarr!["fresh"]);
}

#[test]
fn heap_test_clone_is_deep() {
  let original = BlockDeque::<String, U2>::from_iter((0..5).map(s));
  let mut copy = original.clone();
  copy.peek_front_mut().unwrap().push_str("-edited");
  assert_eq!(original.peek_front(), Ok(&s(0)));
  assert_eq!(copy.peek_front(), Ok(&s("0-edited")));
  assert_eq!(original.len(), copy.len());
}

#[cfg(feature = "std")]
#[test]
fn heap_test_popped_elements_are_released() {
  struct_with_counted_drop!(Elem, DROPS);

  const LEN: usize = 9;
  for push_front in 0..=LEN {
    let mut tester = BlockDeque::<Elem, U2>::new();
    for index in 0..LEN {
      if index < push_front {
        tester.push_front(Elem);
      } else {
        tester.push_back(Elem);
      }
    }
    assert_eq!(DROPS.get(), 0);
    drop(tester.pop_back_k(3).unwrap());
    assert_eq!(DROPS.get(), 3);
    drop(tester.pop_front());
    assert_eq!(DROPS.get(), 4);
    drop(tester.peek_front_k(5).unwrap());
    assert_eq!(DROPS.get(), 4);
    drop(tester);
    assert_eq!(DROPS.get(), LEN as u32);
    DROPS.set(0);
  }
}

#[cfg(feature = "std")]
#[test]
fn heap_test_clear_drops_every_element() {
  struct_with_counted_drop!(Elem(u32), DROPS);

  let mut tester = BlockDeque::<Elem, U3>::new();
  tester.push_all_back((0..10).map(Elem));
  tester.push_all_front((10..14).map(Elem));
  tester.clear();
  assert_eq!(DROPS.get(), 14);
  assert_eq!(tester.block_count(), 1);

  tester.push_back(Elem(99));
  assert_eq!(tester.peek_back(), Ok(&Elem(99)));
  drop(tester);
  // Includes the temporary `Elem(99)` built for the comparison above.
  assert_eq!(DROPS.get(), 16);
}

#[cfg(feature = "std")]
#[test]
fn heap_test_failed_bulk_pop_drops_nothing() {
  struct_with_counted_drop!(Elem, DROPS);

  let mut tester = BlockDeque::<Elem, U2>::new();
  tester.push_all_back((0..5).map(|_| Elem));
  assert!(tester.pop_front_k(6).is_err());
  assert!(tester.pop_back_k(6).is_err());
  assert_eq!(DROPS.get(), 0);
  assert_eq!(tester.len(), 5);
}
