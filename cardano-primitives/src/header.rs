//! Block header shapes. Kept minimal relative to the ledger's full header:
//! no block-body or transaction assembly lives here, only the header
//! envelope the catalogue names (`HeaderBody`, `OperationalCert`, `Header`,
//! `ProtocolVersion`).

use cardano_codec::schema::{expect_tuple, field, FromCbor, ToCbor};
use cardano_codec::{CborValue, Error, Result};
use cardano_crypto::Hash32;

/// `(major, minor)`.
pub type ProtocolVersion = (u64, u64);

fn protocol_version_to_cbor(version: &ProtocolVersion) -> CborValue {
    CborValue::Array(vec![CborValue::Uint(version.0), CborValue::Uint(version.1)])
}

fn protocol_version_from_cbor(value: &CborValue) -> Result<ProtocolVersion> {
    let fields = expect_tuple(value, 2)?;
    let major = field(fields, 0)?
        .as_uint()
        .ok_or_else(|| Error::StructuralMismatch("protocol version major must be a uint".into()))?;
    let minor = field(fields, 1)?
        .as_uint()
        .ok_or_else(|| Error::StructuralMismatch("protocol version minor must be a uint".into()))?;
    Ok((major, minor))
}

/// VRF certificate: `[output, proof]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VrfCert {
    pub output: Vec<u8>,
    pub proof: Vec<u8>,
}

impl ToCbor for VrfCert {
    fn to_cbor(&self) -> CborValue {
        CborValue::Array(vec![CborValue::Bytes(self.output.clone()), CborValue::Bytes(self.proof.clone())])
    }
}

impl FromCbor for VrfCert {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let fields = expect_tuple(value, 2)?;
        let output = field(fields, 0)?
            .as_bytes()
            .ok_or_else(|| Error::StructuralMismatch("vrf output must be bytes".into()))?
            .to_vec();
        let proof = field(fields, 1)?
            .as_bytes()
            .ok_or_else(|| Error::StructuralMismatch("vrf proof must be bytes".into()))?
            .to_vec();
        Ok(VrfCert { output, proof })
    }
}

/// `[hot_vkey, sequence_number, kes_period, sigma]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationalCert {
    pub hot_vkey: Vec<u8>,
    pub sequence_number: u64,
    pub kes_period: u64,
    pub sigma: Vec<u8>,
}

impl ToCbor for OperationalCert {
    fn to_cbor(&self) -> CborValue {
        CborValue::Array(vec![
            CborValue::Bytes(self.hot_vkey.clone()),
            CborValue::Uint(self.sequence_number),
            CborValue::Uint(self.kes_period),
            CborValue::Bytes(self.sigma.clone()),
        ])
    }
}

impl FromCbor for OperationalCert {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let fields = expect_tuple(value, 4)?;
        let hot_vkey = field(fields, 0)?
            .as_bytes()
            .ok_or_else(|| Error::StructuralMismatch("operational cert hot vkey must be bytes".into()))?
            .to_vec();
        let sequence_number = field(fields, 1)?
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("operational cert sequence number must be a uint".into()))?;
        let kes_period = field(fields, 2)?
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("operational cert kes period must be a uint".into()))?;
        let sigma = field(fields, 3)?
            .as_bytes()
            .ok_or_else(|| Error::StructuralMismatch("operational cert sigma must be bytes".into()))?
            .to_vec();
        Ok(OperationalCert { hot_vkey, sequence_number, kes_period, sigma })
    }
}

/// `[block_number, slot, prev_hash?, issuer_vkey, vrf_vkey, vrf_result,
/// block_body_size, block_body_hash, operational_cert, protocol_version]`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderBody {
    pub block_number: u64,
    pub slot: u64,
    pub prev_hash: Option<Hash32>,
    pub issuer_vkey: Vec<u8>,
    pub vrf_vkey: Vec<u8>,
    pub vrf_result: VrfCert,
    pub block_body_size: u64,
    pub block_body_hash: Hash32,
    pub operational_cert: OperationalCert,
    pub protocol_version: ProtocolVersion,
}

fn hash32_option_to_cbor(value: &Option<Hash32>) -> CborValue {
    match value {
        Some(h) => h.to_cbor(),
        None => CborValue::Null,
    }
}

fn hash32_option_from_cbor(value: &CborValue) -> Result<Option<Hash32>> {
    if value.is_null_like() {
        Ok(None)
    } else {
        Ok(Some(Hash32::from_cbor(value)?))
    }
}

impl ToCbor for HeaderBody {
    fn to_cbor(&self) -> CborValue {
        CborValue::Array(vec![
            CborValue::Uint(self.block_number),
            CborValue::Uint(self.slot),
            hash32_option_to_cbor(&self.prev_hash),
            CborValue::Bytes(self.issuer_vkey.clone()),
            CborValue::Bytes(self.vrf_vkey.clone()),
            self.vrf_result.to_cbor(),
            CborValue::Uint(self.block_body_size),
            self.block_body_hash.to_cbor(),
            self.operational_cert.to_cbor(),
            protocol_version_to_cbor(&self.protocol_version),
        ])
    }
}

impl FromCbor for HeaderBody {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let fields = expect_tuple(value, 10)?;
        let block_number = field(fields, 0)?
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("header block number must be a uint".into()))?;
        let slot = field(fields, 1)?
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("header slot must be a uint".into()))?;
        let prev_hash = hash32_option_from_cbor(field(fields, 2)?)?;
        let issuer_vkey = field(fields, 3)?
            .as_bytes()
            .ok_or_else(|| Error::StructuralMismatch("issuer vkey must be bytes".into()))?
            .to_vec();
        let vrf_vkey = field(fields, 4)?
            .as_bytes()
            .ok_or_else(|| Error::StructuralMismatch("vrf vkey must be bytes".into()))?
            .to_vec();
        let vrf_result = VrfCert::from_cbor(field(fields, 5)?)?;
        let block_body_size = field(fields, 6)?
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("block body size must be a uint".into()))?;
        let block_body_hash = Hash32::from_cbor(field(fields, 7)?)?;
        let operational_cert = OperationalCert::from_cbor(field(fields, 8)?)?;
        let protocol_version = protocol_version_from_cbor(field(fields, 9)?)?;
        Ok(HeaderBody {
            block_number,
            slot,
            prev_hash,
            issuer_vkey,
            vrf_vkey,
            vrf_result,
            block_body_size,
            block_body_hash,
            operational_cert,
            protocol_version,
        })
    }
}

/// `[header_body, body_signature]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub header_body: HeaderBody,
    pub body_signature: Vec<u8>,
}

impl ToCbor for Header {
    fn to_cbor(&self) -> CborValue {
        CborValue::Array(vec![self.header_body.to_cbor(), CborValue::Bytes(self.body_signature.clone())])
    }
}

impl FromCbor for Header {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let fields = expect_tuple(value, 2)?;
        let header_body = HeaderBody::from_cbor(field(fields, 0)?)?;
        let body_signature = field(fields, 1)?
            .as_bytes()
            .ok_or_else(|| Error::StructuralMismatch("header body signature must be bytes".into()))?
            .to_vec();
        Ok(Header { header_body, body_signature })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardano_codec::schema::Codable;
    use cardano_codec::Options;

    fn sample_header_body(prev_hash: Option<Hash32>) -> HeaderBody {
        HeaderBody {
            block_number: 12,
            slot: 99_887_766,
            prev_hash,
            issuer_vkey: vec![1; 32],
            vrf_vkey: vec![2; 32],
            vrf_result: VrfCert { output: vec![3; 64], proof: vec![4; 80] },
            block_body_size: 4096,
            block_body_hash: Hash32::new([5u8; 32]),
            operational_cert: OperationalCert {
                hot_vkey: vec![6; 32],
                sequence_number: 1,
                kes_period: 400,
                sigma: vec![7; 64],
            },
            protocol_version: (9, 0),
        }
    }

    #[test]
    fn header_roundtrips_with_prev_hash() {
        let header = Header {
            header_body: sample_header_body(Some(Hash32::new([8u8; 32]))),
            body_signature: vec![9; 64],
        };
        let opts = Options::canonical();
        let bytes = header.to_bytes(&opts);
        assert_eq!(Header::from_bytes(&bytes, &opts).unwrap(), header);
    }

    #[test]
    fn header_roundtrips_as_genesis_with_no_prev_hash() {
        let header = Header {
            header_body: sample_header_body(None),
            body_signature: vec![0; 64],
        };
        let opts = Options::canonical();
        let bytes = header.to_bytes(&opts);
        assert_eq!(Header::from_bytes(&bytes, &opts).unwrap(), header);
    }

    #[test]
    fn protocol_version_encodes_as_two_element_array() {
        let version: ProtocolVersion = (8, 1);
        let opts = Options::canonical();
        let cbor = protocol_version_to_cbor(&version);
        let bytes = cardano_codec::encode(&cbor, &opts);
        assert_eq!(protocol_version_from_cbor(&cardano_codec::decode(&bytes, &opts).unwrap()).unwrap(), version);
    }
}
