//! Arbitrary-value generators for property tests, aligned with
//! [`CborValue`]'s invariants. Gated behind the `proptest` feature so
//! downstream crates can reuse these strategies in their own property
//! tests without pulling `proptest` into default builds.

use num_bigint::BigInt;
use proptest::prelude::*;

use crate::value::CborValue;

/// A strategy over non-recursive ("leaf") [`CborValue`]s.
pub fn leaf() -> impl Strategy<Value = CborValue> {
    prop_oneof![
        any::<u64>().prop_map(CborValue::Uint),
        any::<u64>().prop_map(CborValue::NegInt),
        proptest::collection::vec(any::<u8>(), 0..130).prop_map(CborValue::Bytes),
        ".*".prop_map(CborValue::Text),
        any::<bool>().prop_map(CborValue::Bool),
        Just(CborValue::Null),
        Just(CborValue::Undefined),
        any::<i128>().prop_map(|n| CborValue::BigInt(BigInt::from(n))),
    ]
}

/// A strategy over arbitrarily nested [`CborValue`]s, bounded to keep
/// generated trees small enough for fast shrinking.
pub fn any_cbor_value() -> impl Strategy<Value = CborValue> {
    leaf().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..8).prop_map(CborValue::Array),
            proptest::collection::vec(
                (inner.clone(), inner.clone()),
                0..8
            )
            .prop_map(CborValue::Map),
            (0u64..1400, inner).prop_map(|(tag, v)| CborValue::Tag(tag, Box::new(v))),
        ]
    })
}
