//! Ordinal comparison matrix across sequence types.

use nio_buffers::{CharBuffer, SharedArray};
use nio_text::{ordinal, CharArraySequence, CharSequence, TextError};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Mixed sequence types
// ---------------------------------------------------------------------------

#[test]
fn every_representation_agrees() {
    let text = "Grüße";
    let string = text.to_string();
    let chars: Vec<char> = text.chars().collect();
    let array = CharArraySequence::from(text);
    let buffer = CharBuffer::wrap_str(text);

    let expected = ordinal::hash_code(Some(text));
    assert_eq!(ordinal::hash_code(Some(&string)), expected);
    assert_eq!(ordinal::hash_code(Some(&chars)), expected);
    assert_eq!(ordinal::hash_code(Some(&array)), expected);
    assert_eq!(ordinal::hash_code(Some(&buffer)), expected);

    assert!(ordinal::equals(Some(&string), Some(&buffer)));
    assert!(ordinal::equals(Some(chars.as_slice()), Some(&array)));
    assert_eq!(ordinal::compare(Some(&buffer), Some(text)), 0);
}

#[test]
fn buffer_sequence_follows_position() {
    let array = SharedArray::from("xxabc".chars().collect::<Vec<_>>());
    let mut buffer = CharBuffer::wrap(&array, 0, 5).unwrap();
    assert!(ordinal::compare(Some(&buffer), Some("abc")) > 0);
    buffer.set_position(2).unwrap();
    assert!(ordinal::equals(Some(&buffer), Some("abc")));
    buffer.set_limit(4).unwrap();
    assert_eq!(ordinal::compare(Some(&buffer), Some("abc")), -1);
}

#[test]
fn buffer_subsequence_is_live_view() {
    let mut buffer = CharBuffer::allocate(4);
    buffer.put_str("abcd").unwrap();
    buffer.flip();
    let view = buffer.subsequence(1, 2).unwrap();
    assert_eq!(view.to_string(), "bc");
    buffer.put_at(1, 'B').unwrap();
    assert_eq!(view.char_at(0), Ok('B'));
}

// ---------------------------------------------------------------------------
// Argument validation
// ---------------------------------------------------------------------------

#[test]
fn subsequence_range_errors() {
    let array = CharArraySequence::from("abc");
    assert_eq!(
        array.subsequence(1, 3).unwrap_err(),
        TextError::ArgumentRange {
            start: 1,
            length: 3,
            len: 3
        }
    );
    assert!("abc".subsequence(usize::MAX, 1).is_err());
    assert!(CharBuffer::wrap_str("abc").subsequence(4, 0).is_err());
    assert_eq!(array.subsequence(3, 0).unwrap(), "");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn sequence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just('a'), Just('b'), Just('é'), any::<char>()], 0..8)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn compare_is_antisymmetric(x in sequence(), y in sequence()) {
        let xy = ordinal::compare(Some(x.as_str()), Some(y.as_str()));
        let yx = ordinal::compare(Some(y.as_str()), Some(x.as_str()));
        prop_assert_eq!(xy.signum(), -yx.signum());
    }

    #[test]
    fn equals_iff_compare_zero(x in sequence(), y in sequence()) {
        let equal = ordinal::equals(Some(x.as_str()), Some(y.as_str()));
        prop_assert_eq!(equal, ordinal::compare(Some(x.as_str()), Some(y.as_str())) == 0);
        prop_assert_eq!(equal, x == y);
    }

    #[test]
    fn equal_sequences_hash_alike(x in sequence()) {
        let array = CharArraySequence::from(x.as_str());
        prop_assert_eq!(ordinal::hash_code(Some(x.as_str())), ordinal::hash_code(Some(&array)));
    }

    #[test]
    fn ordering_matches_char_array_ord(x in sequence(), y in sequence()) {
        let a = CharArraySequence::from(x.as_str());
        let b = CharArraySequence::from(y.as_str());
        prop_assert_eq!(ordinal::ordering(Some(&a), Some(&b)), a.cmp(&b));
    }
}
