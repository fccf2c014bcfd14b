use cardano_codec::schema::{FromCbor, ToCbor};
use cardano_codec::{CborValue, Error, Result};

/// Declares a fixed-size opaque byte wrapper with a CBOR byte-string shape,
/// the same macro-free pattern used throughout the ledger entity catalogue
/// for "just bytes, exact length" fields.
macro_rules! byte_wrapper {
    ($name:ident, $size:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u8; $size]);

        impl $name {
            pub const SIZE: usize = $size;

            pub fn new(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = Error;

            fn try_from(value: &[u8]) -> Result<Self> {
                let array: [u8; $size] = value.try_into().map_err(|_| {
                    Error::StructuralMismatch(format!(
                        concat!(stringify!($name), " must be exactly {} bytes, found {}"),
                        $size,
                        value.len()
                    ))
                })?;
                Ok(Self(array))
            }
        }

        impl ToCbor for $name {
            fn to_cbor(&self) -> CborValue {
                CborValue::Bytes(self.0.to_vec())
            }
        }

        impl FromCbor for $name {
            fn from_cbor(value: &CborValue) -> Result<Self> {
                let bytes = value
                    .as_bytes()
                    .ok_or_else(|| Error::StructuralMismatch("expected a cbor byte string".into()))?;
                Self::try_from(bytes)
            }
        }
    };
}

byte_wrapper!(VKey, 32, "An Ed25519 verification key.");
byte_wrapper!(Ed25519Signature, 64, "An Ed25519 signature.");
byte_wrapper!(KesVKey, 32, "A KES verification key.");
byte_wrapper!(KesSignature, 448, "A sum-composition KES signature.");
byte_wrapper!(VrfVKey, 32, "A VRF verification key.");
byte_wrapper!(VrfCert, 80, "A VRF certificate (proof bytes).");

#[cfg(test)]
mod tests {
    use super::*;
    use cardano_codec::Options;

    #[test]
    fn vkey_roundtrips_through_cbor() {
        let k = VKey::new([7u8; 32]);
        let bytes = cardano_codec::encode(&k.to_cbor(), &Options::canonical());
        let decoded =
            VKey::from_cbor(&cardano_codec::decode(&bytes, &Options::canonical()).unwrap())
                .unwrap();
        assert_eq!(k, decoded);
    }

    #[test]
    fn signature_rejects_wrong_length() {
        let value = CborValue::Bytes(vec![0u8; 10]);
        assert!(Ed25519Signature::from_cbor(&value).is_err());
    }

    #[test]
    fn kes_signature_roundtrips_through_canonical_cbor() {
        // 448 bytes is well past `bytes_threshold` (64), so this exercises
        // the canonical-mode chunked byte-string path end to end.
        let sig = KesSignature::new([9u8; 448]);
        let bytes = cardano_codec::encode(&sig.to_cbor(), &Options::canonical());
        let decoded =
            KesSignature::from_cbor(&cardano_codec::decode(&bytes, &Options::canonical()).unwrap())
                .unwrap();
        assert_eq!(sig, decoded);
    }

    #[test]
    fn vrf_cert_roundtrips_through_canonical_cbor() {
        let cert = VrfCert::new([3u8; 80]);
        let bytes = cardano_codec::encode(&cert.to_cbor(), &Options::canonical());
        let decoded =
            VrfCert::from_cbor(&cardano_codec::decode(&bytes, &Options::canonical()).unwrap())
                .unwrap();
        assert_eq!(cert, decoded);
    }
}
