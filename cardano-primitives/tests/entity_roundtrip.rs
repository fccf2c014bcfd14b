use cardano_codec::schema::Codable;
use cardano_codec::Options;
use cardano_primitives::proptest_support::{any_credential, any_data, any_value};
use cardano_primitives::Data;
use proptest::prelude::*;

proptest! {
    #[test]
    fn plutus_data_roundtrips_canonical(data in any_data()) {
        let opts = Data::canonical_options();
        let bytes = data.to_bytes(&opts);
        prop_assert_eq!(Data::from_bytes(&bytes, &opts).unwrap(), data);
    }

    #[test]
    fn plutus_data_roundtrips_conway(data in any_data()) {
        let opts = Data::conway_options();
        let bytes = data.to_bytes(&opts);
        prop_assert_eq!(Data::from_bytes(&bytes, &opts).unwrap(), data);
    }

    #[test]
    fn credential_roundtrips(cred in any_credential()) {
        let opts = Options::canonical();
        let bytes = cred.to_bytes(&opts);
        prop_assert_eq!(cardano_primitives::Credential::from_bytes(&bytes, &opts).unwrap(), cred);
    }

    #[test]
    fn value_roundtrips(value in any_value()) {
        let opts = Options::canonical();
        let bytes = value.to_bytes(&opts);
        prop_assert_eq!(cardano_primitives::Value::from_bytes(&bytes, &opts).unwrap(), value);
    }
}
