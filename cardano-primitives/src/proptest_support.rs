//! Arbitrary-value generators for the entity types most worth fuzzing:
//! the recursive Plutus `Data` type and the additive `Value`/`MultiAsset`
//! pair. Gated behind the `proptest` feature, same convention as
//! `cardano_codec::proptest_support`.

use num_bigint::BigInt;
use proptest::prelude::*;

use crate::credential::Credential;
use crate::plutus_data::Data;
use crate::value::{MultiAsset, PolicyId, PositiveCoin, Value};
use cardano_crypto::Hash28;

/// A strategy over non-recursive ("leaf") [`Data`] values.
pub fn leaf_data() -> impl Strategy<Value = Data> {
    prop_oneof![
        any::<i64>().prop_map(|n| Data::integer(BigInt::from(n))),
        proptest::collection::vec(any::<u8>(), 0..130).prop_map(Data::bytes),
    ]
}

/// A strategy over arbitrarily nested [`Data`] values, bounded to keep
/// generated trees small enough for fast shrinking.
pub fn any_data() -> impl Strategy<Value = Data> {
    leaf_data().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            (0u64..200, proptest::collection::vec(inner.clone(), 0..6))
                .prop_map(|(index, fields)| Data::constr(index, fields)),
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Data::list),
            proptest::collection::vec((inner.clone(), inner), 0..6).prop_map(Data::map),
        ]
    })
}

/// A 28-byte hash, used as both key hashes and policy ids in these
/// strategies.
pub fn any_hash28() -> impl Strategy<Value = Hash28> {
    proptest::array::uniform28(any::<u8>()).prop_map(Hash28::new)
}

/// A strategy over [`Credential`].
pub fn any_credential() -> impl Strategy<Value = Credential> {
    prop_oneof![
        any_hash28().prop_map(Credential::KeyHash),
        any_hash28().prop_map(Credential::ScriptHash),
    ]
}

/// A strategy over nonempty [`MultiAsset`] bundles, built from a small
/// number of policy/asset-name/amount triples.
pub fn any_multi_asset() -> impl Strategy<Value = MultiAsset> {
    proptest::collection::vec(
        (
            any_hash28(),
            proptest::collection::vec(any::<u8>(), 1..8),
            1u64..=u64::MAX,
        ),
        1..5,
    )
    .prop_map(|entries| {
        MultiAsset::from_entries(entries.into_iter().map(|(policy, name, amount): (PolicyId, _, _)| {
            (policy, name, PositiveCoin::new(amount).expect("amount >= 1"))
        }))
    })
}

/// A strategy over [`Value`], sometimes bare coin, sometimes with assets.
pub fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<u64>().prop_map(Value::OnlyCoin),
        (any::<u64>(), any_multi_asset()).prop_map(|(coin, assets)| {
            if assets.is_empty() {
                Value::OnlyCoin(coin)
            } else {
                Value::WithAssets(coin, assets)
            }
        }),
    ]
}
