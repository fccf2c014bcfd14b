//! `Coin`, `PositiveCoin`, `MultiAsset`, and the additive `Value` sum.

use std::collections::BTreeMap;

use cardano_codec::schema::{expect_tuple, field, FromCbor, ToCbor};
use cardano_codec::{CborValue, Error, Result};
use cardano_crypto::Hash28;

/// A non-negative integer no larger than `2^64 - 1`.
pub type Coin = u64;

/// A `Coin` known to be nonzero, enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositiveCoin(Coin);

impl PositiveCoin {
    pub fn new(amount: Coin) -> Result<Self> {
        if amount == 0 {
            return Err(Error::NumericOutOfRange("PositiveCoin must be > 0".into()));
        }
        Ok(Self(amount))
    }

    pub fn get(&self) -> Coin {
        self.0
    }
}

impl ToCbor for PositiveCoin {
    fn to_cbor(&self) -> CborValue {
        CborValue::Uint(self.0)
    }
}

impl FromCbor for PositiveCoin {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let n = value
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("expected a uint coin amount".into()))?;
        PositiveCoin::new(n)
    }
}

pub type PolicyId = Hash28;
pub type AssetName = Vec<u8>;

/// `PolicyId -> (AssetName -> PositiveCoin)`. Empty inner maps are
/// rejected by every constructor and operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiAsset(BTreeMap<PolicyId, BTreeMap<AssetName, PositiveCoin>>);

impl MultiAsset {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builds a `MultiAsset` from policy/asset/amount triples, dropping any
    /// zero-amount entries and rejecting policies left with no assets.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (PolicyId, AssetName, PositiveCoin)>,
    ) -> Self {
        let mut map: BTreeMap<PolicyId, BTreeMap<AssetName, PositiveCoin>> = BTreeMap::new();
        for (policy, asset, amount) in entries {
            map.entry(policy).or_default().insert(asset, amount);
        }
        map.retain(|_, assets| !assets.is_empty());
        Self(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn policies(&self) -> impl Iterator<Item = &PolicyId> {
        self.0.keys()
    }

    pub fn get(&self, policy: &PolicyId, asset: &[u8]) -> Option<PositiveCoin> {
        self.0.get(policy).and_then(|assets| assets.get(asset)).copied()
    }

    /// Adds matching asset amounts; overflowing an asset's `u64` amount
    /// fails the whole merge.
    pub fn merge(&self, other: &Self) -> Result<Self> {
        let mut map = self.0.clone();
        for (policy, assets) in &other.0 {
            let entry = map.entry(policy.clone()).or_default();
            for (asset, amount) in assets {
                let total = entry.get(asset).map(|c| c.get()).unwrap_or(0);
                let sum = total
                    .checked_add(amount.get())
                    .ok_or_else(|| Error::NumericOutOfRange("multi-asset amount overflow".into()))?;
                entry.insert(asset.clone(), PositiveCoin::new(sum)?);
            }
        }
        map.retain(|_, assets| !assets.is_empty());
        Ok(Self(map))
    }

    /// Subtracts `other` from `self`. Fails with [`Error::StructuralMismatch`]
    /// when `other` names an asset missing from (or exceeding) `self`.
    /// Zero-amount results are removed; policies left empty are removed.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let mut map = self.0.clone();
        for (policy, assets) in &other.0 {
            let entry = map.get_mut(policy).ok_or_else(|| {
                Error::StructuralMismatch(format!("missing policy {policy} in subtrahend"))
            })?;
            for (asset, amount) in assets {
                let current = entry.get(asset).map(|c| c.get()).ok_or_else(|| {
                    Error::StructuralMismatch("missing asset in subtrahend".into())
                })?;
                let diff = current.checked_sub(amount.get()).ok_or_else(|| {
                    Error::StructuralMismatch("asset subtraction would go negative".into())
                })?;
                if diff == 0 {
                    entry.remove(asset);
                } else {
                    entry.insert(asset.clone(), PositiveCoin::new(diff)?);
                }
            }
        }
        map.retain(|_, assets| !assets.is_empty());
        Ok(Self(map))
    }
}

impl ToCbor for MultiAsset {
    fn to_cbor(&self) -> CborValue {
        CborValue::Map(
            self.0
                .iter()
                .map(|(policy, assets)| {
                    let inner = CborValue::Map(
                        assets
                            .iter()
                            .map(|(name, amount)| (CborValue::Bytes(name.clone()), amount.to_cbor()))
                            .collect(),
                    );
                    (policy.to_cbor(), inner)
                })
                .collect(),
        )
    }
}

impl FromCbor for MultiAsset {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let outer = value
            .as_map()
            .ok_or_else(|| Error::StructuralMismatch("expected a multi-asset map".into()))?;
        let mut map = BTreeMap::new();
        for (policy_value, assets_value) in outer {
            let policy = PolicyId::from_cbor(policy_value)?;
            let inner = assets_value
                .as_map()
                .ok_or_else(|| Error::StructuralMismatch("expected an asset-name map".into()))?;
            if inner.is_empty() {
                return Err(Error::StructuralMismatch("empty inner multi-asset map".into()));
            }
            let mut assets = BTreeMap::new();
            for (name_value, amount_value) in inner {
                let name = name_value
                    .as_bytes()
                    .ok_or_else(|| Error::StructuralMismatch("asset name must be bytes".into()))?
                    .to_vec();
                assets.insert(name, PositiveCoin::from_cbor(amount_value)?);
            }
            map.insert(policy, assets);
        }
        Ok(Self(map))
    }
}

/// `OnlyCoin(coin) | WithAssets(coin, multi_asset)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    OnlyCoin(Coin),
    WithAssets(Coin, MultiAsset),
}

impl Value {
    pub fn coin(&self) -> Coin {
        match self {
            Value::OnlyCoin(c) => *c,
            Value::WithAssets(c, _) => *c,
        }
    }

    pub fn multi_asset(&self) -> Option<&MultiAsset> {
        match self {
            Value::OnlyCoin(_) => None,
            Value::WithAssets(_, assets) => Some(assets),
        }
    }

    /// Pointwise addition of coins and multi-assets.
    pub fn add(&self, other: &Value) -> Result<Value> {
        let coin = self
            .coin()
            .checked_add(other.coin())
            .ok_or_else(|| Error::NumericOutOfRange("coin addition overflow".into()))?;
        match (self.multi_asset(), other.multi_asset()) {
            (None, None) => Ok(Value::OnlyCoin(coin)),
            (Some(a), None) => Ok(Value::WithAssets(coin, a.clone())),
            (None, Some(b)) => Ok(Value::WithAssets(coin, b.clone())),
            (Some(a), Some(b)) => {
                let merged = a.merge(b)?;
                Ok(if merged.is_empty() {
                    Value::OnlyCoin(coin)
                } else {
                    Value::WithAssets(coin, merged)
                })
            }
        }
    }

    /// Fails when `other` contains an asset missing from (or exceeding)
    /// `self`, or when the coin amount underflows.
    pub fn subtract(&self, other: &Value) -> Result<Value> {
        let coin = self
            .coin()
            .checked_sub(other.coin())
            .ok_or_else(|| Error::NumericOutOfRange("coin subtraction underflow".into()))?;
        match (self.multi_asset(), other.multi_asset()) {
            (None, None) => Ok(Value::OnlyCoin(coin)),
            (Some(a), None) => Ok(Value::WithAssets(coin, a.clone())),
            (None, Some(b)) => {
                if b.is_empty() {
                    Ok(Value::OnlyCoin(coin))
                } else {
                    Err(Error::StructuralMismatch(
                        "subtrahend names assets absent from the minuend".into(),
                    ))
                }
            }
            (Some(a), Some(b)) => {
                let diff = a.checked_sub(b)?;
                Ok(if diff.is_empty() {
                    Value::OnlyCoin(coin)
                } else {
                    Value::WithAssets(coin, diff)
                })
            }
        }
    }
}

impl ToCbor for Value {
    fn to_cbor(&self) -> CborValue {
        match self {
            Value::OnlyCoin(c) => CborValue::Uint(*c),
            Value::WithAssets(c, assets) => {
                CborValue::Array(vec![CborValue::Uint(*c), assets.to_cbor()])
            }
        }
    }
}

impl FromCbor for Value {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        if let Some(coin) = value.as_uint() {
            return Ok(Value::OnlyCoin(coin));
        }
        let fields = expect_tuple(value, 2)?;
        let coin = field(fields, 0)?
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("value coin must be a uint".into()))?;
        let assets = MultiAsset::from_cbor(field(fields, 1)?)?;
        Ok(Value::WithAssets(coin, assets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardano_codec::schema::Codable;
    use cardano_codec::Options;

    fn policy(byte: u8) -> PolicyId {
        PolicyId::new([byte; 28])
    }

    #[test]
    fn positive_coin_rejects_zero() {
        assert!(PositiveCoin::new(0).is_err());
        assert!(PositiveCoin::new(1).is_ok());
    }

    #[test]
    fn coin_addition_past_u64_max_fails() {
        let a = Value::OnlyCoin(0);
        let b = Value::OnlyCoin(u64::MAX);
        assert_eq!(a.add(&b).unwrap(), Value::OnlyCoin(u64::MAX));

        let c = Value::OnlyCoin(1);
        assert!(c.add(&b).is_err());
    }

    #[test]
    fn value_add_then_subtract_recovers_original() {
        let assets = MultiAsset::from_entries([(policy(1), b"tok".to_vec(), PositiveCoin::new(5).unwrap())]);
        let a = Value::WithAssets(100, assets.clone());
        let b = Value::WithAssets(10, assets);
        let sum = a.add(&b).unwrap();
        let recovered = sum.subtract(&b).unwrap();
        assert_eq!(recovered, a);
    }

    #[test]
    fn subtracting_missing_asset_fails_structural_mismatch() {
        let assets = MultiAsset::from_entries([(policy(1), b"tok".to_vec(), PositiveCoin::new(5).unwrap())]);
        let a = Value::OnlyCoin(10);
        let b = Value::WithAssets(0, assets);
        assert!(matches!(a.subtract(&b), Err(Error::StructuralMismatch(_))));
    }

    #[test]
    fn multi_asset_merge_drops_zeroed_and_empty_policies() {
        let p = policy(9);
        let a = MultiAsset::from_entries([(p.clone(), b"x".to_vec(), PositiveCoin::new(5).unwrap())]);
        let b = MultiAsset::from_entries([(p.clone(), b"x".to_vec(), PositiveCoin::new(5).unwrap())]);
        let merged = a.merge(&b).unwrap();
        assert_eq!(merged.get(&p, b"x").unwrap().get(), 10);

        let diff = merged.checked_sub(&merged).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn value_roundtrips_bare_and_tupled_forms() {
        let opts = Options::canonical();
        let bare = Value::OnlyCoin(42);
        let bytes = bare.to_bytes(&opts);
        assert_eq!(Value::from_bytes(&bytes, &opts).unwrap(), bare);

        let assets = MultiAsset::from_entries([(policy(3), b"a".to_vec(), PositiveCoin::new(1).unwrap())]);
        let full = Value::WithAssets(7, assets);
        let bytes = full.to_bytes(&opts);
        assert_eq!(Value::from_bytes(&bytes, &opts).unwrap(), full);
    }
}
