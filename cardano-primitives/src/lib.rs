//! The ledger entity catalogue: Plutus `Data`, `Value`/`MultiAsset`,
//! scripts, stake pool parameters, certificates, governance actions, and
//! the minimal header/redeemer shapes the catalogue names.
//!
//! Every type here binds itself to CBOR through `cardano_codec`'s
//! [`ToCbor`]/[`FromCbor`] traits rather than through a higher-level
//! transaction/block model — assembling a full transaction body or
//! validating one against ledger rules is out of scope for this crate.
//!
//! [`ToCbor`]: cardano_codec::schema::ToCbor
//! [`FromCbor`]: cardano_codec::schema::FromCbor

mod credential;
mod governance;
mod header;
mod plutus_data;
mod pool;
#[cfg(feature = "proptest")]
pub mod proptest_support;
mod redeemer;
mod script;
mod value;

pub use credential::{Credential, StakeCredential};
pub use governance::{
    Anchor, Certificate, CommitteeColdCredential, CommitteeHotCredential, Constitution, DRep,
    DRepCredential, Epoch, GovActionId, GovernanceAction, GuardrailScript, OpaqueParamUpdate,
    ProposalProcedure, ScriptHash as GovernanceScriptHash, TransactionId,
};
pub use header::{Header, HeaderBody, OperationalCert, ProtocolVersion, VrfCert};
pub use plutus_data::Data;
pub use pool::{
    DnsName, Ipv4, Ipv6, Port, PoolKeyHash, PoolMetadata, PoolParams, RationalNumber, Relay,
    RewardAccount, UnitInterval, VrfKeyHash,
};
pub use redeemer::{ExUnits, Redeemer, RedeemerKey, RedeemerTag, RedeemerValue};
pub use script::{KeyHash, NativeScript, PlutusScript, Script, Slot};
pub use value::{AssetName, Coin, MultiAsset, PolicyId, PositiveCoin, Value};

#[cfg(test)]
mod tests {
    use super::*;
    use cardano_codec::schema::Codable;
    use cardano_codec::Options;
    use cardano_crypto::Hash28;

    /// A certificate carrying a governance `DRep` delegation and a
    /// Plutus-evaluated redeemer both round-trip independently; this just
    /// checks the modules compose without needing a shared wrapper type.
    #[test]
    fn cross_module_entities_all_share_one_codec() {
        let opts = Options::canonical();

        let cert = Certificate::VoteDeleg(Credential::KeyHash(Hash28::new([1u8; 28])), DRep::AlwaysAbstain);
        assert_eq!(Certificate::from_bytes(&cert.to_bytes(&opts), &opts).unwrap(), cert);

        let redeemer = Redeemer {
            tag: RedeemerTag::Spend,
            index: 0,
            data: Data::constr(0, vec![Data::integer(1)]),
            ex_units: ExUnits { mem: 1, steps: 1 },
        };
        assert_eq!(Redeemer::from_bytes(&redeemer.to_bytes(&opts), &opts).unwrap(), redeemer);
    }
}
