//! Redeemers: the witness data a Plutus script is invoked with.
//!
//! The catalogue's `RedeemerTag` enumerates four purposes (spend, mint,
//! cert, reward) — the ledger's pre-Conway shape. Conway's `RedeemerTag`
//! widens this to six (adding vote/propose purposes for governance
//! actions), but the catalogue table doesn't mention those, so this follows
//! the four it names; see `DESIGN.md` for the full divergence note.

use cardano_codec::schema::{expect_tuple, field, FromCbor, ToCbor};
use cardano_codec::{CborValue, Error, Result};

use crate::plutus_data::Data;

/// `0=spend, 1=mint, 2=cert, 3=reward`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RedeemerTag {
    Spend,
    Mint,
    Cert,
    Reward,
}

impl ToCbor for RedeemerTag {
    fn to_cbor(&self) -> CborValue {
        let n = match self {
            RedeemerTag::Spend => 0,
            RedeemerTag::Mint => 1,
            RedeemerTag::Cert => 2,
            RedeemerTag::Reward => 3,
        };
        CborValue::Uint(n)
    }
}

impl FromCbor for RedeemerTag {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let n = value
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("redeemer tag must be a uint".into()))?;
        match n {
            0 => Ok(RedeemerTag::Spend),
            1 => Ok(RedeemerTag::Mint),
            2 => Ok(RedeemerTag::Cert),
            3 => Ok(RedeemerTag::Reward),
            other => Err(Error::UnknownDiscriminator(other)),
        }
    }
}

/// `[mem, steps]`, the execution budget a redeemer is allowed to spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExUnits {
    pub mem: u64,
    pub steps: u64,
}

impl ToCbor for ExUnits {
    fn to_cbor(&self) -> CborValue {
        CborValue::Array(vec![CborValue::Uint(self.mem), CborValue::Uint(self.steps)])
    }
}

impl FromCbor for ExUnits {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let fields = expect_tuple(value, 2)?;
        let mem = field(fields, 0)?
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("ex-units mem must be a uint".into()))?;
        let steps = field(fields, 1)?
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("ex-units steps must be a uint".into()))?;
        Ok(ExUnits { mem, steps })
    }
}

/// `[tag, index, data, ex_units]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Redeemer {
    pub tag: RedeemerTag,
    pub index: u32,
    pub data: Data,
    pub ex_units: ExUnits,
}

impl ToCbor for Redeemer {
    fn to_cbor(&self) -> CborValue {
        CborValue::Array(vec![
            self.tag.to_cbor(),
            CborValue::Uint(self.index as u64),
            self.data.to_cbor(),
            self.ex_units.to_cbor(),
        ])
    }
}

impl FromCbor for Redeemer {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let fields = expect_tuple(value, 4)?;
        let tag = RedeemerTag::from_cbor(field(fields, 0)?)?;
        let index = field(fields, 1)?
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("redeemer index must be a uint".into()))?
            as u32;
        let data = Data::from_cbor(field(fields, 2)?)?;
        let ex_units = ExUnits::from_cbor(field(fields, 3)?)?;
        Ok(Redeemer { tag, index, data, ex_units })
    }
}

/// `[tag, index]`, the map key form redeemers use when carried as
/// `{ redeemer_key -> redeemer_value }` rather than a flat list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RedeemerKey {
    pub tag: RedeemerTag,
    pub index: u32,
}

impl ToCbor for RedeemerKey {
    fn to_cbor(&self) -> CborValue {
        CborValue::Array(vec![self.tag.to_cbor(), CborValue::Uint(self.index as u64)])
    }
}

impl FromCbor for RedeemerKey {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let fields = expect_tuple(value, 2)?;
        let tag = RedeemerTag::from_cbor(field(fields, 0)?)?;
        let index = field(fields, 1)?
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("redeemer index must be a uint".into()))?
            as u32;
        Ok(RedeemerKey { tag, index })
    }
}

/// `[data, ex_units]`, the map value paired with a [`RedeemerKey`].
#[derive(Debug, Clone, PartialEq)]
pub struct RedeemerValue {
    pub data: Data,
    pub ex_units: ExUnits,
}

impl ToCbor for RedeemerValue {
    fn to_cbor(&self) -> CborValue {
        CborValue::Array(vec![self.data.to_cbor(), self.ex_units.to_cbor()])
    }
}

impl FromCbor for RedeemerValue {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let fields = expect_tuple(value, 2)?;
        let data = Data::from_cbor(field(fields, 0)?)?;
        let ex_units = ExUnits::from_cbor(field(fields, 1)?)?;
        Ok(RedeemerValue { data, ex_units })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardano_codec::schema::Codable;
    use cardano_codec::Options;

    #[test]
    fn redeemer_tag_roundtrips_all_discriminators() {
        let opts = Options::canonical();
        for tag in [RedeemerTag::Spend, RedeemerTag::Mint, RedeemerTag::Cert, RedeemerTag::Reward] {
            let bytes = tag.to_bytes(&opts);
            assert_eq!(RedeemerTag::from_bytes(&bytes, &opts).unwrap(), tag);
        }
    }

    #[test]
    fn redeemer_tag_rejects_conway_only_discriminators() {
        let opts = Options::canonical();
        let vote_tag = CborValue::Uint(4);
        let encoded = cardano_codec::encode(&vote_tag, &opts);
        assert_eq!(RedeemerTag::from_bytes(&encoded, &opts), Err(Error::UnknownDiscriminator(4)));
    }

    #[test]
    fn redeemer_roundtrips_with_plutus_data_payload() {
        let redeemer = Redeemer {
            tag: RedeemerTag::Spend,
            index: 0,
            data: Data::constr(0, vec![Data::integer(42)]),
            ex_units: ExUnits { mem: 1_000_000, steps: 500_000_000 },
        };
        let opts = Options::canonical();
        let bytes = redeemer.to_bytes(&opts);
        assert_eq!(Redeemer::from_bytes(&bytes, &opts).unwrap(), redeemer);
    }

    #[test]
    fn redeemer_key_value_split_roundtrips() {
        let key = RedeemerKey { tag: RedeemerTag::Mint, index: 2 };
        let value = RedeemerValue {
            data: Data::bytes(vec![1, 2, 3]),
            ex_units: ExUnits { mem: 10, steps: 20 },
        };
        let opts = Options::canonical();
        let key_bytes = key.to_bytes(&opts);
        let value_bytes = value.to_bytes(&opts);
        assert_eq!(RedeemerKey::from_bytes(&key_bytes, &opts).unwrap(), key);
        assert_eq!(RedeemerValue::from_bytes(&value_bytes, &opts).unwrap(), value);
    }
}
