//! Native and Plutus scripts, and the `Script` sum that picks between them.

use cardano_codec::schema::{expect_array, expect_sum, field, sum_head, FromCbor, ToCbor};
use cardano_codec::{CborValue, Error, Result};
use cardano_crypto::Hash28;

pub type KeyHash = Hash28;
pub type Slot = u64;

/// `[0,key_hash]`, `[1,[scripts]]` (all), `[2,[scripts]]` (any),
/// `[3,m,[scripts]]` (at-least-m), `[4,slot]` (before), `[5,slot]` (after).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeScript {
    ScriptPubkey(KeyHash),
    ScriptAll(Vec<NativeScript>),
    ScriptAny(Vec<NativeScript>),
    ScriptNOfK(u32, Vec<NativeScript>),
    InvalidBefore(Slot),
    InvalidHereafter(Slot),
}

impl ToCbor for NativeScript {
    fn to_cbor(&self) -> CborValue {
        match self {
            NativeScript::ScriptPubkey(h) => sum_head(0, vec![h.to_cbor()]),
            NativeScript::ScriptAll(scripts) => sum_head(1, vec![encode_scripts(scripts)]),
            NativeScript::ScriptAny(scripts) => sum_head(2, vec![encode_scripts(scripts)]),
            NativeScript::ScriptNOfK(m, scripts) => {
                sum_head(3, vec![CborValue::Uint(*m as u64), encode_scripts(scripts)])
            }
            NativeScript::InvalidBefore(slot) => sum_head(4, vec![CborValue::Uint(*slot)]),
            NativeScript::InvalidHereafter(slot) => sum_head(5, vec![CborValue::Uint(*slot)]),
        }
    }
}

impl FromCbor for NativeScript {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let (tag, fields) = expect_sum(value)?;
        match tag {
            0 => Ok(NativeScript::ScriptPubkey(KeyHash::from_cbor(field(fields, 0)?)?)),
            1 => Ok(NativeScript::ScriptAll(decode_scripts(field(fields, 0)?)?)),
            2 => Ok(NativeScript::ScriptAny(decode_scripts(field(fields, 0)?)?)),
            3 => {
                let m = field(fields, 0)?
                    .as_uint()
                    .ok_or_else(|| Error::StructuralMismatch("script n-of-k count must be a uint".into()))?
                    as u32;
                Ok(NativeScript::ScriptNOfK(m, decode_scripts(field(fields, 1)?)?))
            }
            4 => Ok(NativeScript::InvalidBefore(
                field(fields, 0)?
                    .as_uint()
                    .ok_or_else(|| Error::StructuralMismatch("slot must be a uint".into()))?,
            )),
            5 => Ok(NativeScript::InvalidHereafter(
                field(fields, 0)?
                    .as_uint()
                    .ok_or_else(|| Error::StructuralMismatch("slot must be a uint".into()))?,
            )),
            other => Err(Error::UnknownDiscriminator(other)),
        }
    }
}

fn encode_scripts(scripts: &[NativeScript]) -> CborValue {
    CborValue::Array(scripts.iter().map(NativeScript::to_cbor).collect())
}

fn decode_scripts(value: &CborValue) -> Result<Vec<NativeScript>> {
    expect_array(value)?.iter().map(NativeScript::from_cbor).collect()
}

/// Plutus scripts are opaque, version-tagged bytes; the ledger does not
/// interpret them here (no script evaluation in this crate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlutusScript(pub Vec<u8>);

impl ToCbor for PlutusScript {
    fn to_cbor(&self) -> CborValue {
        CborValue::Bytes(self.0.clone())
    }
}

impl FromCbor for PlutusScript {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let bytes = value
            .as_bytes()
            .ok_or_else(|| Error::StructuralMismatch("expected plutus script bytes".into()))?;
        Ok(PlutusScript(bytes.to_vec()))
    }
}

/// `[0, native] | [1, v1_bytes] | [2, v2_bytes] | [3, v3_bytes]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Script {
    Native(NativeScript),
    PlutusV1(PlutusScript),
    PlutusV2(PlutusScript),
    PlutusV3(PlutusScript),
}

impl ToCbor for Script {
    fn to_cbor(&self) -> CborValue {
        match self {
            Script::Native(s) => sum_head(0, vec![s.to_cbor()]),
            Script::PlutusV1(s) => sum_head(1, vec![s.to_cbor()]),
            Script::PlutusV2(s) => sum_head(2, vec![s.to_cbor()]),
            Script::PlutusV3(s) => sum_head(3, vec![s.to_cbor()]),
        }
    }
}

impl FromCbor for Script {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let (tag, fields) = expect_sum(value)?;
        match tag {
            0 => Ok(Script::Native(NativeScript::from_cbor(field(fields, 0)?)?)),
            1 => Ok(Script::PlutusV1(PlutusScript::from_cbor(field(fields, 0)?)?)),
            2 => Ok(Script::PlutusV2(PlutusScript::from_cbor(field(fields, 0)?)?)),
            3 => Ok(Script::PlutusV3(PlutusScript::from_cbor(field(fields, 0)?)?)),
            other => Err(Error::UnknownDiscriminator(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardano_codec::schema::Codable;
    use cardano_codec::Options;

    #[test]
    fn native_script_nested_all_roundtrips() {
        let script = NativeScript::ScriptAll(vec![
            NativeScript::ScriptPubkey(KeyHash::new([7u8; 28])),
            NativeScript::InvalidBefore(100),
        ]);
        let opts = Options::canonical();
        let bytes = script.to_bytes(&opts);
        assert_eq!(NativeScript::from_bytes(&bytes, &opts).unwrap(), script);
    }

    #[test]
    fn n_of_k_roundtrips() {
        let script = NativeScript::ScriptNOfK(2, vec![NativeScript::InvalidHereafter(50)]);
        let opts = Options::canonical();
        let bytes = script.to_bytes(&opts);
        assert_eq!(NativeScript::from_bytes(&bytes, &opts).unwrap(), script);
    }

    #[test]
    fn script_sum_dispatches_by_discriminator() {
        let opts = Options::canonical();
        let plutus = Script::PlutusV2(PlutusScript(vec![1, 2, 3]));
        let bytes = plutus.to_bytes(&opts);
        assert_eq!(Script::from_bytes(&bytes, &opts).unwrap(), plutus);
    }

    #[test]
    fn script_rejects_unknown_discriminator() {
        let malformed = CborValue::Array(vec![CborValue::Uint(9), CborValue::Bytes(vec![])]);
        assert_eq!(Script::from_cbor(&malformed), Err(Error::UnknownDiscriminator(9)));
    }
}
