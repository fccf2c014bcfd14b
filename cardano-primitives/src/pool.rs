//! Stake pool registration parameters, relays, and pool metadata.

use cardano_codec::schema::{expect_array, expect_sum, expect_tuple, field, option_from_cbor, option_to_cbor, sum_head, FromCbor, ToCbor};
use cardano_codec::{CborValue, Error, Result};
use cardano_crypto::Hash28;

use crate::value::Coin;

pub type PoolKeyHash = Hash28;
pub type VrfKeyHash = Hash28;
pub type RewardAccount = Vec<u8>;

/// A ratio `numerator / denominator`, wire-tagged `[num, den]`. Used for a
/// pool's margin and, elsewhere in the catalogue, for interval bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RationalNumber {
    pub numerator: u64,
    pub denominator: u64,
}

pub type UnitInterval = RationalNumber;

impl ToCbor for RationalNumber {
    fn to_cbor(&self) -> CborValue {
        CborValue::Array(vec![CborValue::Uint(self.numerator), CborValue::Uint(self.denominator)])
    }
}

impl FromCbor for RationalNumber {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let fields = expect_tuple(value, 2)?;
        let numerator = field(fields, 0)?
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("rational numerator must be a uint".into()))?;
        let denominator = field(fields, 1)?
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("rational denominator must be a uint".into()))?;
        Ok(RationalNumber { numerator, denominator })
    }
}

/// `[url, hash]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolMetadata {
    pub url: String,
    pub hash: Hash28,
}

impl ToCbor for PoolMetadata {
    fn to_cbor(&self) -> CborValue {
        CborValue::Array(vec![CborValue::Text(self.url.clone()), self.hash.to_cbor()])
    }
}

impl FromCbor for PoolMetadata {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let fields = expect_tuple(value, 2)?;
        let url = field(fields, 0)?
            .as_text()
            .ok_or_else(|| Error::StructuralMismatch("pool metadata url must be text".into()))?
            .to_string();
        let hash = Hash28::from_cbor(field(fields, 1)?)?;
        Ok(PoolMetadata { url, hash })
    }
}

pub type Port = u16;
pub type Ipv4 = Vec<u8>;
pub type Ipv6 = Vec<u8>;
pub type DnsName = String;

/// `[0, port?, ipv4?, ipv6?]` | `[1, port?, dns]` | `[2, dns]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relay {
    SingleHostAddr(Option<Port>, Option<Ipv4>, Option<Ipv6>),
    SingleHostName(Option<Port>, DnsName),
    MultiHostName(DnsName),
}

// `option_to_cbor`/`option_from_cbor` require `T: ToCbor`/`FromCbor`, which
// can't be implemented here for foreign types like `u64`/`Vec<u8>` (orphan
// rules) — ports and raw IP bytes get their own small option helpers.
fn port_to_cbor(port: Option<Port>) -> CborValue {
    match port {
        Some(p) => CborValue::Uint(p as u64),
        None => CborValue::Null,
    }
}

fn port_from_cbor(value: &CborValue) -> Result<Option<Port>> {
    if value.is_null_like() {
        Ok(None)
    } else {
        let n = value
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("relay port must be a uint".into()))?;
        Ok(Some(n as Port))
    }
}

fn bytes_option_to_cbor(value: &Option<Vec<u8>>) -> CborValue {
    match value {
        Some(b) => CborValue::Bytes(b.clone()),
        None => CborValue::Null,
    }
}

fn bytes_option_from_cbor(value: &CborValue) -> Result<Option<Vec<u8>>> {
    if value.is_null_like() {
        Ok(None)
    } else {
        Ok(Some(
            value
                .as_bytes()
                .ok_or_else(|| Error::StructuralMismatch("expected bytes".into()))?
                .to_vec(),
        ))
    }
}

impl ToCbor for Relay {
    fn to_cbor(&self) -> CborValue {
        match self {
            Relay::SingleHostAddr(port, ipv4, ipv6) => sum_head(
                0,
                vec![port_to_cbor(*port), bytes_option_to_cbor(ipv4), bytes_option_to_cbor(ipv6)],
            ),
            Relay::SingleHostName(port, dns) => {
                sum_head(1, vec![port_to_cbor(*port), CborValue::Text(dns.clone())])
            }
            Relay::MultiHostName(dns) => sum_head(2, vec![CborValue::Text(dns.clone())]),
        }
    }
}

impl FromCbor for Relay {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let (tag, fields) = expect_sum(value)?;
        match tag {
            0 => {
                let port = port_from_cbor(field(fields, 0)?)?;
                let ipv4 = bytes_option_from_cbor(field(fields, 1)?)?;
                let ipv6 = bytes_option_from_cbor(field(fields, 2)?)?;
                Ok(Relay::SingleHostAddr(port, ipv4, ipv6))
            }
            1 => {
                let port = port_from_cbor(field(fields, 0)?)?;
                let dns = field(fields, 1)?
                    .as_text()
                    .ok_or_else(|| Error::StructuralMismatch("relay dns name must be text".into()))?
                    .to_string();
                Ok(Relay::SingleHostName(port, dns))
            }
            2 => {
                let dns = field(fields, 0)?
                    .as_text()
                    .ok_or_else(|| Error::StructuralMismatch("relay dns name must be text".into()))?
                    .to_string();
                Ok(Relay::MultiHostName(dns))
            }
            other => Err(Error::UnknownDiscriminator(other)),
        }
    }
}

/// `[operator, vrfKeyhash, pledge, cost, margin:[num,den], rewardAccount,
/// [owners], [relays], metadata?]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolParams {
    pub operator: PoolKeyHash,
    pub vrf_keyhash: VrfKeyHash,
    pub pledge: Coin,
    pub cost: Coin,
    pub margin: UnitInterval,
    pub reward_account: RewardAccount,
    pub owners: Vec<PoolKeyHash>,
    pub relays: Vec<Relay>,
    pub metadata: Option<PoolMetadata>,
}

impl ToCbor for PoolParams {
    fn to_cbor(&self) -> CborValue {
        CborValue::Array(vec![
            self.operator.to_cbor(),
            self.vrf_keyhash.to_cbor(),
            CborValue::Uint(self.pledge),
            CborValue::Uint(self.cost),
            self.margin.to_cbor(),
            CborValue::Bytes(self.reward_account.clone()),
            CborValue::Array(self.owners.iter().map(PoolKeyHash::to_cbor).collect()),
            CborValue::Array(self.relays.iter().map(Relay::to_cbor).collect()),
            option_to_cbor(&self.metadata),
        ])
    }
}

impl FromCbor for PoolParams {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let fields = expect_tuple(value, 9)?;
        let operator = PoolKeyHash::from_cbor(field(fields, 0)?)?;
        let vrf_keyhash = VrfKeyHash::from_cbor(field(fields, 1)?)?;
        let pledge = field(fields, 2)?
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("pool pledge must be a uint".into()))?;
        let cost = field(fields, 3)?
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("pool cost must be a uint".into()))?;
        let margin = UnitInterval::from_cbor(field(fields, 4)?)?;
        let reward_account = field(fields, 5)?
            .as_bytes()
            .ok_or_else(|| Error::StructuralMismatch("reward account must be bytes".into()))?
            .to_vec();
        let owners = expect_array(field(fields, 6)?)?
            .iter()
            .map(PoolKeyHash::from_cbor)
            .collect::<Result<Vec<_>>>()?;
        let relays = expect_array(field(fields, 7)?)?
            .iter()
            .map(Relay::from_cbor)
            .collect::<Result<Vec<_>>>()?;
        let metadata = option_from_cbor::<PoolMetadata>(field(fields, 8)?)?;
        Ok(PoolParams {
            operator,
            vrf_keyhash,
            pledge,
            cost,
            margin,
            reward_account,
            owners,
            relays,
            metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardano_codec::schema::Codable;
    use cardano_codec::Options;

    fn sample_params() -> PoolParams {
        PoolParams {
            operator: PoolKeyHash::new([1u8; 28]),
            vrf_keyhash: VrfKeyHash::new([2u8; 28]),
            pledge: 1_000_000,
            cost: 340_000_000,
            margin: RationalNumber { numerator: 1, denominator: 50 },
            reward_account: vec![0xE1; 29],
            owners: vec![PoolKeyHash::new([3u8; 28])],
            relays: vec![Relay::SingleHostName(Some(3001), "relay.example".into())],
            metadata: Some(PoolMetadata {
                url: "https://example.com/metadata.json".into(),
                hash: Hash28::new([4u8; 28]),
            }),
        }
    }

    #[test]
    fn pool_params_roundtrips_with_metadata() {
        let params = sample_params();
        let opts = Options::canonical();
        let bytes = params.to_bytes(&opts);
        assert_eq!(PoolParams::from_bytes(&bytes, &opts).unwrap(), params);
    }

    #[test]
    fn pool_params_roundtrips_without_metadata() {
        let mut params = sample_params();
        params.metadata = None;
        let opts = Options::canonical();
        let bytes = params.to_bytes(&opts);
        assert_eq!(PoolParams::from_bytes(&bytes, &opts).unwrap(), params);
    }

    #[test]
    fn relay_variants_roundtrip() {
        let opts = Options::canonical();
        for relay in [
            Relay::SingleHostAddr(Some(3001), Some(vec![127, 0, 0, 1]), None),
            Relay::SingleHostName(None, "relay.example".into()),
            Relay::MultiHostName("relays.example".into()),
        ] {
            let bytes = relay.to_bytes(&opts);
            assert_eq!(Relay::from_bytes(&bytes, &opts).unwrap(), relay);
        }
    }
}
