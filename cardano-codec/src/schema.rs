//! Bidirectional transformations between typed values and [`CborValue`].
//!
//! Every ledger entity in `cardano-primitives` implements [`ToCbor`] and
//! [`FromCbor`] by hand (one monomorphic pair per type, per the corpus'
//! existing `Encode`/`Decode` impls) using the small helpers below instead
//! of a generic runtime-polymorphic combinator framework.

use crate::error::{Error, Result};
use crate::options::Options;
use crate::value::CborValue;

/// Lowers a typed value into its `CborValue` shape. Infallible: a
/// well-typed in-memory value always has a CBOR representation.
pub trait ToCbor {
    fn to_cbor(&self) -> CborValue;
}

/// Raises a `CborValue` into its typed shape, or fails with the most
/// specific error kind that describes why the shape didn't match.
pub trait FromCbor: Sized {
    fn from_cbor(value: &CborValue) -> Result<Self>;
}

/// The bytes/hex surface every schema-bound type gets for free by
/// composing [`ToCbor`]/[`FromCbor`] with the codec in `crate::codec`.
pub trait Codable: ToCbor + FromCbor {
    fn to_bytes(&self, opts: &Options) -> Vec<u8> {
        crate::codec::encode(&self.to_cbor(), opts)
    }

    fn to_hex(&self, opts: &Options) -> String {
        crate::hex::encode(self.to_bytes(opts))
    }

    fn from_bytes(bytes: &[u8], opts: &Options) -> Result<Self> {
        let value = crate::codec::decode(bytes, opts)?;
        Self::from_cbor(&value)
    }

    fn from_hex(s: &str, opts: &Options) -> Result<Self> {
        let bytes = crate::hex::decode(s)?;
        Self::from_bytes(&bytes, opts)
    }

    /// The throwing sync surface over [`Codable::from_bytes`]: same decode
    /// logic, panics instead of returning a tagged error.
    fn from_bytes_unchecked(bytes: &[u8], opts: &Options) -> Self {
        Self::from_bytes(bytes, opts).expect("cbor decode failed")
    }

    /// The throwing sync surface over [`Codable::from_hex`].
    fn from_hex_unchecked(s: &str, opts: &Options) -> Self {
        Self::from_hex(s, opts).expect("cbor decode failed")
    }
}

impl<T: ToCbor + FromCbor> Codable for T {}

/// Chains two fallible transforms `A -> B -> C` into one `A -> C`.
pub fn compose<A, B, C>(
    f: impl Fn(A) -> Result<B>,
    g: impl Fn(B) -> Result<C>,
) -> impl Fn(A) -> Result<C> {
    move |a| g(f(a)?)
}

/// Expects `value` to be a CBOR array, regardless of how it was encoded
/// (definite or indefinite length collapse to the same shape on decode).
pub fn expect_array(value: &CborValue) -> Result<&[CborValue]> {
    value
        .as_array()
        .ok_or_else(|| Error::StructuralMismatch("expected a cbor array".into()))
}

/// Expects `value` to be a CBOR array of exactly `len` elements (the shape
/// used by fixed product types such as [`CborValue::Array`]-encoded
/// tuples).
pub fn expect_tuple(value: &CborValue, len: usize) -> Result<&[CborValue]> {
    let items = expect_array(value)?;
    if items.len() != len {
        return Err(Error::StructuralMismatch(format!(
            "expected a {len}-element array, found {}",
            items.len()
        )));
    }
    Ok(items)
}

/// Builds a sum-type array: `[discriminator, field0, field1, ...]`, the
/// shape shared by every tagged-sum ledger entity in the catalogue.
pub fn sum_head(tag: u64, fields: Vec<CborValue>) -> CborValue {
    let mut items = Vec::with_capacity(fields.len() + 1);
    items.push(CborValue::Uint(tag));
    items.extend(fields);
    CborValue::Array(items)
}

/// Splits a sum-type array into its small-integer discriminator and the
/// remaining payload fields. Fails with [`Error::UnknownDiscriminator`]
/// only at the call site, once the caller knows which discriminators are
/// valid for the type being decoded.
pub fn expect_sum(value: &CborValue) -> Result<(u64, &[CborValue])> {
    let items = expect_array(value)?;
    let (head, rest) = items
        .split_first()
        .ok_or_else(|| Error::StructuralMismatch("expected a non-empty sum array".into()))?;
    let tag = head
        .as_uint()
        .ok_or_else(|| Error::StructuralMismatch("sum discriminator must be a uint".into()))?;
    Ok((tag, rest))
}

/// Looks up field `idx` in an already-shaped field slice, naming the index
/// in the error when it's missing (malformed/truncated input).
pub fn field(fields: &[CborValue], idx: usize) -> Result<&CborValue> {
    fields
        .get(idx)
        .ok_or_else(|| Error::StructuralMismatch(format!("missing field at index {idx}")))
}

/// Maps `Option<T> -> CborValue | Null`.
pub fn option_to_cbor<T: ToCbor>(value: &Option<T>) -> CborValue {
    match value {
        Some(x) => x.to_cbor(),
        None => CborValue::Null,
    }
}

/// Maps `CborValue | Null -> Option<T>`.
pub fn option_from_cbor<T: FromCbor>(value: &CborValue) -> Result<Option<T>> {
    if value.is_null_like() {
        Ok(None)
    } else {
        Ok(Some(T::from_cbor(value)?))
    }
}
