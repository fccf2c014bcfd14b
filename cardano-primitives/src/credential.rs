//! Stake/payment credentials: a key hash or a script hash, tagged.

use cardano_codec::schema::{expect_sum, field, sum_head, FromCbor, ToCbor};
use cardano_codec::{CborValue, Error, Result};
use cardano_crypto::Hash28;

/// `[0, key_hash] | [1, script_hash]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Credential {
    KeyHash(Hash28),
    ScriptHash(Hash28),
}

impl Credential {
    pub fn is_script(&self) -> bool {
        matches!(self, Credential::ScriptHash(_))
    }

    pub fn as_hash(&self) -> &Hash28 {
        match self {
            Credential::KeyHash(h) | Credential::ScriptHash(h) => h,
        }
    }
}

impl ToCbor for Credential {
    fn to_cbor(&self) -> CborValue {
        match self {
            Credential::KeyHash(h) => sum_head(0, vec![h.to_cbor()]),
            Credential::ScriptHash(h) => sum_head(1, vec![h.to_cbor()]),
        }
    }
}

impl FromCbor for Credential {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let (tag, fields) = expect_sum(value)?;
        match tag {
            0 => Ok(Credential::KeyHash(Hash28::from_cbor(field(fields, 0)?)?)),
            1 => Ok(Credential::ScriptHash(Hash28::from_cbor(field(fields, 0)?)?)),
            other => Err(Error::UnknownDiscriminator(other)),
        }
    }
}

pub type StakeCredential = Credential;

#[cfg(test)]
mod tests {
    use super::*;
    use cardano_codec::schema::Codable;
    use cardano_codec::Options;

    #[test]
    fn roundtrips_key_hash_variant() {
        let cred = Credential::KeyHash(Hash28::new([1u8; 28]));
        let opts = Options::canonical();
        let bytes = cred.to_bytes(&opts);
        assert_eq!(Credential::from_bytes(&bytes, &opts).unwrap(), cred);
    }

    #[test]
    fn roundtrips_script_hash_variant() {
        let cred = Credential::ScriptHash(Hash28::new([2u8; 28]));
        let opts = Options::canonical();
        let bytes = cred.to_bytes(&opts);
        assert_eq!(Credential::from_bytes(&bytes, &opts).unwrap(), cred);
    }

    #[test]
    fn rejects_unknown_discriminator() {
        let bytes = CborValue::Array(vec![CborValue::Uint(2), CborValue::Bytes(vec![0; 28])]);
        let opts = Options::canonical();
        let encoded = cardano_codec::encode(&bytes, &opts);
        assert_eq!(
            Credential::from_bytes(&encoded, &opts),
            Err(Error::UnknownDiscriminator(2))
        );
    }
}
