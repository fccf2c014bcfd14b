//! Byron-era addresses.
//!
//! Byron addresses predate the header-byte address family and carry no
//! network id in their own format; the ledger treats their payload as
//! opaque, CBOR-wrapped bytes rather than a structured credential.

use crate::Error;

/// A decoded Byron address: a CBOR-wrapped, base58-rendered byte string.
///
/// The payload is kept opaque (bytes in, bytes out) — this type validates
/// that the bytes are well-formed CBOR without interpreting the root hash,
/// attributes, or address-type fields inside it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Hash)]
pub struct ByronAddress(Vec<u8>);

impl ByronAddress {
    /// Wraps `payload`, the CBOR bytes that follow the `0x8_` header byte
    /// on the wire (header not included).
    pub fn new(payload: Vec<u8>) -> Self {
        Self(payload)
    }

    /// Parses the CBOR-wrapped payload following a Byron header byte,
    /// validating that it decodes to a well-formed CBOR value without
    /// interpreting its internal shape. The header byte is itself the first
    /// byte of the CBOR encoding (an array-of-2 head, `0x82`), which is why
    /// address kind `0b1000` is shared between the header scheme and CBOR's
    /// own major-type nibble.
    pub fn from_header_and_payload(header: u8, payload: &[u8]) -> Result<Self, Error> {
        let framed: Vec<u8> = std::iter::once(header).chain(payload.iter().copied()).collect();
        let (_, consumed) = cardano_codec::decode_partial(&framed, &cardano_codec::Options::conway())
            .map_err(|_| Error::InvalidByronCbor)?;
        Ok(Self(framed[..consumed].to_vec()))
    }

    pub fn typeid(&self) -> u8 {
        0b1000_0000
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.clone()
    }

    pub fn to_hex(&self) -> String {
        cardano_codec::hex::encode(&self.0)
    }

    pub fn to_base58(&self) -> String {
        base58::ToBase58::to_base58(self.0.as_slice())
    }

    pub fn from_base58(s: &str) -> Result<Self, Error> {
        let bytes = base58::FromBase58::from_base58(s).map_err(Error::BadBase58)?;
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_base58() {
        let addr = ByronAddress::new(vec![1, 2, 3, 4]);
        let encoded = addr.to_base58();
        let decoded = ByronAddress::from_base58(&encoded).unwrap();
        assert_eq!(addr, decoded);
    }
}
