use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use cardano_codec::schema::{FromCbor, ToCbor};
use cardano_codec::{CborValue, Error as CborError};
use serde::{Deserialize, Serialize};

/// A fixed-size, content-addressed hash digest.
///
/// `BYTES` is the digest width in bytes (28 for most ledger hashes, 32 for
/// block/transaction/script-data hashes, 20 for Byron addresses' Blake2b-160
/// root). The value is opaque: this type carries no opinion about which
/// algorithm produced it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash<const BYTES: usize>([u8; BYTES]);

impl<const BYTES: usize> Hash<BYTES> {
    pub fn new(bytes: [u8; BYTES]) -> Self {
        Self(bytes)
    }

    pub const SIZE: usize = BYTES;
}

impl<const BYTES: usize> From<[u8; BYTES]> for Hash<BYTES> {
    fn from(bytes: [u8; BYTES]) -> Self {
        Self(bytes)
    }
}

impl<const BYTES: usize> AsRef<[u8]> for Hash<BYTES> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const BYTES: usize> Deref for Hash<BYTES> {
    type Target = [u8; BYTES];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const BYTES: usize> TryFrom<&[u8]> for Hash<BYTES> {
    type Error = CborError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; BYTES] = value.try_into().map_err(|_| {
            CborError::StructuralMismatch(format!(
                "expected a {BYTES}-byte hash, found {} bytes",
                value.len()
            ))
        })?;
        Ok(Self(array))
    }
}

impl<const BYTES: usize> FromStr for Hash<BYTES> {
    type Err = CborError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = [0u8; BYTES];
        hex::decode_to_slice(s, &mut out).map_err(|_| CborError::InvalidHex)?;
        Ok(Self(out))
    }
}

impl<const BYTES: usize> Debug for Hash<BYTES> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hash<{BYTES}>({})", hex::encode(self.0))
    }
}

impl<const BYTES: usize> Display for Hash<BYTES> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl<const BYTES: usize> Serialize for Hash<BYTES> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, const BYTES: usize> Deserialize<'de> for Hash<BYTES> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Hash::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl<const BYTES: usize> ToCbor for Hash<BYTES> {
    fn to_cbor(&self) -> CborValue {
        CborValue::Bytes(self.0.to_vec())
    }
}

impl<const BYTES: usize> FromCbor for Hash<BYTES> {
    fn from_cbor(value: &CborValue) -> cardano_codec::Result<Self> {
        let bytes = value
            .as_bytes()
            .ok_or_else(|| CborError::StructuralMismatch("expected a cbor byte string".into()))?;
        Hash::try_from(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardano_codec::Options;

    #[test]
    fn roundtrips_through_hex() {
        let h = Hash::<28>::new([0xAB; 28]);
        let s = h.to_string();
        let parsed: Hash<28> = s.parse().unwrap();
        assert_eq!(h, parsed);
    }

    #[test]
    fn rejects_wrong_length_hex() {
        let err = "ab".parse::<Hash<28>>().unwrap_err();
        assert_eq!(err, CborError::InvalidHex);
    }

    #[test]
    fn roundtrips_through_cbor() {
        let h = Hash::<32>::new([0x11; 32]);
        let bytes = cardano_codec::encode(&h.to_cbor(), &Options::canonical());
        let decoded = Hash::<32>::from_cbor(
            &cardano_codec::decode(&bytes, &Options::canonical()).unwrap(),
        )
        .unwrap();
        assert_eq!(h, decoded);
    }

    #[test]
    fn rejects_wrong_length_cbor() {
        let value = CborValue::Bytes(vec![0u8; 10]);
        assert!(Hash::<32>::from_cbor(&value).is_err());
    }
}
