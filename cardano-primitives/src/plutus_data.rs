//! Plutus `Data`: the recursive value type Plutus scripts consume on-chain.
//!
//! The CBOR binding here is not vanilla CBOR — constructor indices map to
//! specific tag ranges, big integers chunk their magnitude, and byte
//! strings chunk past 64 bytes regardless of mode. Each rule is implemented
//! directly against [`CborValue`] rather than through the generic
//! container-threshold machinery most other entities in this crate use,
//! because `Data`'s container shape rules don't match the codec's general
//! defaults (see [`conway_options`]).

use num_bigint::{BigInt, Sign};

use cardano_codec::schema::{expect_array, FromCbor, ToCbor};
use cardano_codec::{CborValue, Error, Mode, Options, Result};

/// The recursive sum type.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    Constr { index: u64, fields: Vec<Data> },
    Map { entries: Vec<(Data, Data)> },
    List { items: Vec<Data> },
    Integer { value: BigInt },
    Bytes { value: Vec<u8> },
}

impl Data {
    pub fn constr(index: u64, fields: Vec<Data>) -> Self {
        Data::Constr { index, fields }
    }

    pub fn map(entries: Vec<(Data, Data)>) -> Self {
        Data::Map { entries }
    }

    pub fn list(items: Vec<Data>) -> Self {
        Data::List { items }
    }

    pub fn integer(value: impl Into<BigInt>) -> Self {
        Data::Integer { value: value.into() }
    }

    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        Data::Bytes { value: value.into() }
    }

    /// `Options` tuned for Plutus Data's own container rules: in
    /// [`Mode::Conway`], `List`/`Map` go indefinite-length whenever they're
    /// non-empty rather than past the generic 23-item threshold.
    pub fn conway_options() -> Options {
        Options {
            mode: Mode::Conway,
            array_threshold: 0,
            map_threshold: 0,
            ..Options::conway()
        }
    }

    /// `Options` for Data's canonical form: definite-length, sorted map
    /// keys — the generic canonical profile already matches Data's rule.
    pub fn canonical_options() -> Options {
        Options::canonical()
    }
}

/// `Constr` tag arithmetic: the inverse pair used by [`Data`]'s CBOR
/// binding. `index` 0..6 maps to tags 121..127, 7..127 to 1280..1400, and
/// anything >= 128 falls back to tag 102 wrapping `[index, fields]`.
fn constr_tag(index: u64) -> u64 {
    match index {
        0..=6 => 121 + index,
        7..=127 => 1280 + (index - 7),
        _ => 102,
    }
}

fn tag_to_index(tag: u64) -> Option<u64> {
    match tag {
        121..=127 => Some(tag - 121),
        1280..=1400 => Some(tag - 1280 + 7),
        _ => None,
    }
}

impl ToCbor for Data {
    fn to_cbor(&self) -> CborValue {
        match self {
            Data::Constr { index, fields } => {
                let tag = constr_tag(*index);
                let items: Vec<CborValue> = fields.iter().map(Data::to_cbor).collect();
                if tag == 102 {
                    CborValue::Tag(
                        102,
                        Box::new(CborValue::Array(vec![
                            CborValue::Uint(*index),
                            CborValue::Array(items),
                        ])),
                    )
                } else {
                    CborValue::Tag(tag, Box::new(CborValue::Array(items)))
                }
            }
            Data::Map { entries } => CborValue::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k.to_cbor(), v.to_cbor()))
                    .collect(),
            ),
            Data::List { items } => CborValue::Array(items.iter().map(Data::to_cbor).collect()),
            Data::Integer { value } => integer_to_cbor(value),
            Data::Bytes { value } => CborValue::Bytes(value.clone()),
        }
    }
}

impl FromCbor for Data {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        match value {
            CborValue::Tag(tag, inner) => {
                if *tag == 102 {
                    let items = expect_array(inner)?;
                    if items.len() != 2 {
                        return Err(Error::StructuralMismatch(
                            "tag 102 constr must wrap a 2-element array".into(),
                        ));
                    }
                    let index = items[0]
                        .as_uint()
                        .ok_or_else(|| Error::StructuralMismatch("constr index must be a uint".into()))?;
                    let fields = expect_array(&items[1])?
                        .iter()
                        .map(Data::from_cbor)
                        .collect::<Result<Vec<_>>>()?;
                    Ok(Data::Constr { index, fields })
                } else if let Some(index) = tag_to_index(*tag) {
                    let fields = expect_array(inner)?
                        .iter()
                        .map(Data::from_cbor)
                        .collect::<Result<Vec<_>>>()?;
                    Ok(Data::Constr { index, fields })
                } else if *tag == 2 || *tag == 3 {
                    Ok(Data::Integer {
                        value: cbor_to_integer(*tag, inner)?,
                    })
                } else {
                    Err(Error::TagMismatch { found: *tag })
                }
            }
            CborValue::Uint(_) | CborValue::NegInt(_) | CborValue::BigInt(_) => Ok(Data::Integer {
                value: cbor_plain_to_integer(value)?,
            }),
            CborValue::Map(entries) => {
                let entries = entries
                    .iter()
                    .map(|(k, v)| Ok((Data::from_cbor(k)?, Data::from_cbor(v)?)))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Data::Map { entries })
            }
            CborValue::Array(items) => {
                let items = items.iter().map(Data::from_cbor).collect::<Result<Vec<_>>>()?;
                Ok(Data::List { items })
            }
            CborValue::Bytes(b) => Ok(Data::Bytes { value: b.clone() }),
            other => Err(Error::StructuralMismatch(format!(
                "{other:?} is not valid plutus data"
            ))),
        }
    }
}

fn integer_to_cbor(value: &BigInt) -> CborValue {
    if let Ok(n) = u64::try_from(value) {
        return CborValue::Uint(n);
    }
    if value.sign() == Sign::Minus {
        let magnitude = -(value + BigInt::from(1));
        if let Ok(n) = u64::try_from(&magnitude) {
            return CborValue::NegInt(n);
        }
    }
    CborValue::BigInt(value.clone())
}

fn cbor_to_integer(tag: u64, inner: &CborValue) -> Result<BigInt> {
    let bytes = inner
        .as_bytes()
        .ok_or_else(|| Error::StructuralMismatch("bignum tag must wrap a byte string".into()))?;
    let magnitude = BigInt::from_bytes_be(Sign::Plus, bytes);
    Ok(if tag == 3 {
        -(magnitude + BigInt::from(1))
    } else {
        magnitude
    })
}

fn cbor_plain_to_integer(value: &CborValue) -> Result<BigInt> {
    match value {
        CborValue::Uint(n) => Ok(BigInt::from(*n)),
        CborValue::NegInt(n) => Ok(-BigInt::from(*n) - BigInt::from(1)),
        CborValue::BigInt(b) => Ok(b.clone()),
        other => Err(Error::StructuralMismatch(format!(
            "{other:?} is not a plutus integer"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardano_codec::schema::Codable;

    #[test]
    fn constr_small_index_roundtrips_canonical_and_conway() {
        let data = Data::constr(0, vec![Data::bytes(hex::decode("beef").unwrap()), Data::integer(19)]);

        let conway_bytes = data.to_bytes(&Data::conway_options());
        // tag 121 (0..6 -> 121..127), indefinite array since non-empty.
        assert_eq!(conway_bytes[0], 0xd8);
        assert_eq!(conway_bytes[1], 121);
        assert_eq!(conway_bytes[2], 0x9f);
        assert_eq!(*conway_bytes.last().unwrap(), 0xff);
        assert_eq!(Data::from_bytes(&conway_bytes, &Data::conway_options()).unwrap(), data);

        let canonical_bytes = data.to_bytes(&Data::canonical_options());
        // same tag, but a definite-length 2-element array.
        assert_eq!(canonical_bytes[0], 0xd8);
        assert_eq!(canonical_bytes[1], 121);
        assert_eq!(canonical_bytes[2], 0x82);
        assert_eq!(
            Data::from_bytes(&canonical_bytes, &Data::canonical_options()).unwrap(),
            data
        );
    }

    #[test]
    fn constr_mid_range_index_uses_1280_plus_tags() {
        let data = Data::constr(7, vec![]);
        let bytes = data.to_bytes(&Data::canonical_options());
        assert_eq!(bytes[0], 0xd9); // 2-byte tag head
        let tag = u16::from_be_bytes([bytes[1], bytes[2]]);
        assert_eq!(tag, 1280);
        assert_eq!(Data::from_bytes(&bytes, &Data::canonical_options()).unwrap(), data);
    }

    #[test]
    fn constr_large_index_falls_back_to_tag_102() {
        let data = Data::constr(128, vec![Data::integer(1)]);
        let bytes = data.to_bytes(&Data::canonical_options());
        assert_eq!(Data::from_bytes(&bytes, &Data::canonical_options()).unwrap(), data);
        let CborValue::Tag(tag, _) = cardano_codec::decode(&bytes, &Data::canonical_options()).unwrap() else {
            panic!("expected a tag")
        };
        assert_eq!(tag, 102);
    }

    #[test]
    fn integer_beyond_64_bits_chunks_the_magnitude() {
        let huge = BigInt::from(u64::MAX) * BigInt::from(1_000_000_000u64);
        let data = Data::integer(huge.clone());
        let bytes = data.to_bytes(&Data::canonical_options());
        assert_eq!(Data::from_bytes(&bytes, &Data::canonical_options()).unwrap(), data);
        let decoded = cardano_codec::decode(&bytes, &Data::canonical_options()).unwrap();
        assert!(matches!(decoded, CborValue::Tag(2, _)));
    }

    #[test]
    fn bytes_beyond_64_chunk_regardless_of_mode() {
        let data = Data::bytes(vec![0xAB; 100]);
        let canonical_bytes = data.to_bytes(&Data::canonical_options());
        assert_eq!(canonical_bytes[0], 0x5F);
        assert_eq!(
            Data::from_bytes(&canonical_bytes, &Data::canonical_options()).unwrap(),
            data
        );
    }

    #[test]
    fn nested_map_sorts_keys_canonically() {
        let data = Data::map(vec![
            (Data::bytes(hex::decode("deadbeef01").unwrap()), Data::integer(1)),
            (Data::bytes(hex::decode("beef").unwrap()), Data::integer(2)),
            (Data::bytes(hex::decode("deadbeef03").unwrap()), Data::integer(3)),
        ]);
        let bytes = data.to_bytes(&Data::canonical_options());
        let decoded = cardano_codec::decode(&bytes, &Data::canonical_options()).unwrap();
        let CborValue::Map(pairs) = decoded else {
            panic!("expected a map")
        };
        let keys: Vec<_> = pairs.iter().map(|(k, _)| k.as_bytes().unwrap().to_vec()).collect();
        assert_eq!(
            keys,
            vec![
                hex::decode("beef").unwrap(),
                hex::decode("deadbeef01").unwrap(),
                hex::decode("deadbeef03").unwrap(),
            ]
        );
    }

    #[test]
    fn rejects_tag_outside_constr_ranges() {
        let malformed = CborValue::Tag(200, Box::new(CborValue::Array(vec![])));
        assert_eq!(Data::from_cbor(&malformed), Err(Error::TagMismatch { found: 200 }));
    }
}
