#![cfg(feature = "serde")]

use block_deque::{typenum::U2, BlockDeque};
use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_tokens, Token};

#[test]
fn serialize_roundtrip() {
  let mut deque = BlockDeque::<u32, U2>::new();
  deque.push_back(20);
  deque.push_back(30);
  deque.push_front(10);

  assert_tokens(
    &deque,
    &[
      Token::Seq { len: Some(3) },
      Token::U32(10),
      Token::U32(20),
      Token::U32(30),
      Token::SeqEnd,
    ],
  );
}

#[test]
fn deserialize_spans_blocks() {
  assert_de_tokens(
    &BlockDeque::<u8, U2>::from([1, 2, 3, 4, 5]),
    &[
      Token::Seq { len: Some(5) },
      Token::U8(1),
      Token::U8(2),
      Token::U8(3),
      Token::U8(4),
      Token::U8(5),
      Token::SeqEnd,
    ],
  );
}

#[test]
fn deserialize_empty() {
  assert_tokens(
    &BlockDeque::<u8, U2>::new(),
    &[Token::Seq { len: Some(0) }, Token::SeqEnd],
  );
}

#[test]
fn deserialize_rejects_non_sequence() {
  assert_de_tokens_error::<BlockDeque<u8, U2>>(
    &[Token::U8(1)],
    "invalid type: integer `1`, expected a sequence",
  );
}
