//! Self-contained CBOR codec for the Cardano ledger's Conway-era wire
//! format, plus the schema transform layer the ledger entity types in
//! `cardano-primitives` bind themselves to CBOR with.
//!
//! This crate has no notion of any particular ledger entity — it only
//! knows about [`CborValue`], the canonical/conway [`Options`], and the
//! small [`schema`] combinators. Everything domain-specific lives upstream.

mod codec;
mod error;
pub mod hex;
mod options;
pub mod schema;
mod value;

#[cfg(feature = "proptest")]
pub mod proptest_support;

pub use codec::{decode, decode_partial, encode};
pub use error::{Error, Result};
pub use options::{Mode, Options};
pub use value::CborValue;

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn roundtrips_small_uint() {
        let v = CborValue::Uint(17);
        let bytes = encode(&v, &Options::canonical());
        assert_eq!(bytes, vec![0x11]);
        assert_eq!(decode(&bytes, &Options::canonical()).unwrap(), v);
    }

    #[test]
    fn shortest_head_widths() {
        assert_eq!(encode(&CborValue::Uint(23), &Options::canonical()), vec![0x17]);
        assert_eq!(
            encode(&CborValue::Uint(24), &Options::canonical()),
            vec![0x18, 24]
        );
        assert_eq!(
            encode(&CborValue::Uint(256), &Options::canonical()),
            vec![0x19, 0x01, 0x00]
        );
        assert_eq!(
            encode(&CborValue::Uint(65536), &Options::canonical()),
            vec![0x1a, 0x00, 0x01, 0x00, 0x00]
        );
    }

    #[test]
    fn rejects_non_minimal_head_in_canonical_mode() {
        // 0x18 0x05 encodes 5 using a 1-byte head, which is non-minimal:
        // 5 fits in the immediate nibble.
        let bytes = [0x18, 0x05];
        assert_eq!(
            decode(&bytes, &Options::canonical()),
            Err(Error::NonCanonicalHead)
        );
        assert_eq!(decode(&bytes, &Options::conway()), Ok(CborValue::Uint(5)));
    }

    #[test]
    fn negative_bignum_roundtrips() {
        let v = CborValue::BigInt(BigInt::from(-300));
        let bytes = encode(&v, &Options::canonical());
        // tag(3) over the magnitude (300 - 1 = 299 = 0x012b)
        assert_eq!(bytes, vec![0xc3, 0x42, 0x01, 0x2b]);
        assert_eq!(decode(&bytes, &Options::canonical()).unwrap(), v);
    }

    #[test]
    fn canonical_map_sorts_keys_by_encoded_bytes() {
        let map = CborValue::Map(vec![
            (CborValue::Text("deadbeef01".into()), CborValue::Uint(1)),
            (CborValue::Text("beef".into()), CborValue::Uint(2)),
            (CborValue::Text("deadbeef03".into()), CborValue::Uint(3)),
        ]);
        let bytes = encode(&map, &Options::canonical());
        let decoded = decode(&bytes, &Options::canonical()).unwrap();
        let CborValue::Map(pairs) = decoded else {
            panic!("expected map")
        };
        let keys: Vec<_> = pairs
            .iter()
            .map(|(k, _)| k.as_text().unwrap().to_string())
            .collect();
        assert_eq!(keys, vec!["beef", "deadbeef01", "deadbeef03"]);
    }

    #[test]
    fn long_byte_strings_chunk_regardless_of_mode() {
        // Byte-string chunking is governed by `bytes_threshold` alone, not
        // by `mode` — only array/map indefinite-ness is mode-gated.
        let long = vec![0xAB; 100];
        let v = CborValue::Bytes(long.clone());
        let bytes = encode(&v, &Options::conway());
        assert_eq!(bytes[0], 0x5F); // indefinite bytes marker
        assert_eq!(decode(&bytes, &Options::conway()).unwrap(), v);

        let canonical_bytes = encode(&v, &Options::canonical());
        assert_eq!(canonical_bytes[0], 0x5F);
        assert_eq!(decode(&canonical_bytes, &Options::canonical()).unwrap(), v);

        let short = CborValue::Bytes(vec![0xAB; 10]);
        let short_bytes = encode(&short, &Options::canonical());
        assert_ne!(short_bytes[0], 0x5F);
    }

    #[test]
    fn conway_mode_uses_indefinite_array_past_threshold() {
        let items: Vec<_> = (0..30).map(CborValue::Uint).collect();
        let v = CborValue::Array(items.clone());
        let bytes = encode(&v, &Options::conway());
        assert_eq!(bytes[0], 0x9F); // indefinite array marker
        assert_eq!(decode(&bytes, &Options::conway()).unwrap(), v);

        let small = CborValue::Array(items[0..5].to_vec());
        let bytes = encode(&small, &Options::conway());
        assert_ne!(bytes[0], 0x9F);
    }

    #[test]
    fn rejects_truncated_input() {
        assert_eq!(
            decode(&[0x19, 0x01], &Options::canonical()),
            Err(Error::UnexpectedEnd)
        );
    }

    #[test]
    fn max_items_bound_rejects_oversized_claimed_length() {
        let opts = Options {
            max_items: 2,
            ..Options::canonical()
        };
        // array head claiming length 5 but with no actual elements
        let bytes = [0x85];
        assert!(matches!(
            decode(&bytes, &opts),
            Err(Error::MaxItemsExceeded { .. })
        ));
    }
}
