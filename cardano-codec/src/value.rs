use half::f16;
use num_bigint::BigInt;

/// The union of every CBOR value this codec can encode or decode.
///
/// `Bytes`/`Text`/`Array`/`Map` never carry indefinite-length markers —
/// chunking is purely an encoding-time decision driven by [`crate::Options`];
/// on decode, chunked containers are flattened into their definite-length
/// in-memory shape.
#[derive(Debug, Clone, PartialEq)]
pub enum CborValue {
    Uint(u64),
    /// Major type 1. The represented integer is `-1 - n`.
    NegInt(u64),
    /// An integer outside `[-2^64, 2^64-1]`, or one the caller deliberately
    /// wants wrapped in CBOR tag 2/3 regardless of magnitude.
    BigInt(BigInt),
    Bytes(Vec<u8>),
    Text(String),
    Array(Vec<CborValue>),
    /// Ordered key/value pairs as they appear on the wire. Duplicate keys
    /// are preserved; de-duplication is a caller-layer concern.
    Map(Vec<(CborValue, CborValue)>),
    Tag(u64, Box<CborValue>),
    Bool(bool),
    Null,
    Undefined,
    Float16(f16),
    Float32(f32),
    Float64(f64),
}

impl CborValue {
    pub fn uint(n: u64) -> Self {
        CborValue::Uint(n)
    }

    /// Builds the integer CBOR value for a signed `i128`, choosing the
    /// shortest representation that fits (`Uint`/`NegInt`) and only
    /// falling back to a tagged `BigInt` outside that range.
    pub fn int(n: i128) -> Self {
        if let Ok(n) = u64::try_from(n) {
            CborValue::Uint(n)
        } else if n < 0 {
            let magnitude = (-1 - n) as i128;
            if let Ok(m) = u64::try_from(magnitude) {
                CborValue::NegInt(m)
            } else {
                CborValue::BigInt(BigInt::from(n))
            }
        } else {
            CborValue::BigInt(BigInt::from(n))
        }
    }

    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        CborValue::Bytes(b.into())
    }

    pub fn text(s: impl Into<String>) -> Self {
        CborValue::Text(s.into())
    }

    pub fn array(items: impl Into<Vec<CborValue>>) -> Self {
        CborValue::Array(items.into())
    }

    pub fn is_null_like(&self) -> bool {
        matches!(self, CborValue::Null | CborValue::Undefined)
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            CborValue::Uint(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            CborValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CborValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[CborValue]> {
        match self {
            CborValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(CborValue, CborValue)]> {
        match self {
            CborValue::Map(m) => Some(m),
            _ => None,
        }
    }
}
