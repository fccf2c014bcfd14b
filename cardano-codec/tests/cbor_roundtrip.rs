use cardano_codec::proptest_support::any_cbor_value;
use cardano_codec::{decode, encode, Options};
use proptest::prelude::*;

proptest! {
    #[test]
    fn canonical_roundtrips(value in any_cbor_value()) {
        let opts = Options::canonical();
        let bytes = encode(&value, &opts);
        prop_assert_eq!(decode(&bytes, &opts).unwrap(), value);
    }

    #[test]
    fn conway_roundtrips(value in any_cbor_value()) {
        let opts = Options::conway();
        let bytes = encode(&value, &opts);
        prop_assert_eq!(decode(&bytes, &opts).unwrap(), value);
    }

    #[test]
    fn canonical_bytes_decode_under_conway_too(value in any_cbor_value()) {
        // Conway-mode decoding tolerates non-minimal heads, so anything a
        // canonical encode produces must also decode under conway options.
        let canonical_bytes = encode(&value, &Options::canonical());
        prop_assert_eq!(decode(&canonical_bytes, &Options::conway()).unwrap(), value);
    }
}
