use block_deque::{typenum::U4, BlockDeque, Error};
use std::{cell::RefCell, rc::Rc};

#[derive(Debug)]
struct DropTracker {
  id: i32,
  payload: String,
  log: Rc<RefCell<Vec<i32>>>,
}

impl DropTracker {
  fn new(log: &Rc<RefCell<Vec<i32>>>, id: i32) -> Self {
    Self {
      id,
      payload: format!("payload-{id}"),
      log: Rc::clone(log),
    }
  }
}

impl Drop for DropTracker {
  fn drop(&mut self) {
    self.log.borrow_mut().push(self.id);
  }
}

fn main() {
  let drops = Rc::new(RefCell::new(Vec::new()));

  {
    let mut deque = BlockDeque::<DropTracker, U4>::new();

    deque.push_all_back((0..8).map(|id| DropTracker::new(&drops, id)));
    deque.push_all_front((8..16).map(|id| DropTracker::new(&drops, id)));
    assert_eq!(deque.len(), 16);
    assert!(deque.block_count() >= 4);

    let ids: Vec<i32> = deque.iter().map(|elem| elem.id).collect();
    let expected: Vec<i32> = (8..16).rev().chain(0..8).collect();
    assert_eq!(ids, expected);

    if let Ok(front) = deque.peek_front_mut() {
      front.payload.push_str("-front");
    }
    assert_eq!(
      deque.peek_front().map(|elem| elem.payload.as_str()),
      Ok("payload-15-front")
    );

    let popped = deque.pop_back_k(5).expect("deque holds sixteen elements");
    assert_eq!(
      popped.iter().map(|elem| elem.id).collect::<Vec<_>>(),
      [7, 6, 5, 4, 3]
    );
    drop(popped);
    assert_eq!(drops.borrow().len(), 5);

    assert_eq!(
      deque.pop_front_k(12).err(),
      Some(Error::InsufficientElements {
        requested: 12,
        available: 11,
      })
    );
    assert_eq!(drops.borrow().len(), 5);

    let peeked = deque.peek_back_k(3).expect("deque holds eleven elements");
    assert_eq!(
      peeked.iter().map(|elem| elem.id).collect::<Vec<_>>(),
      [2, 1, 0]
    );
    drop(peeked);

    let reversed: Vec<i32> = deque.values(true).map(|elem| elem.id).collect();
    assert_eq!(reversed.first(), Some(&2));
    assert_eq!(reversed.last(), Some(&15));

    while deque.len() > 1 {
      let _ = deque.pop_front();
    }
    assert_eq!(deque.block_count(), 1);
  }

  let mut dropped = drops.borrow().clone();
  dropped.sort();
  assert_eq!(dropped, (0..16).collect::<Vec<_>>());
}
