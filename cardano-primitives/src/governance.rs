//! Delegation certificates, DReps, governance actions, and proposals.
//!
//! `Certificate`'s discriminator range (0-4, 7-18) is not enumerated in the
//! distilled catalogue table; it's grounded directly on the ledger's own
//! Conway-era certificate list (5/6, the retired genesis-delegation and MIR
//! certificates, are gone as of Conway and intentionally absent here).

use cardano_codec::schema::{expect_sum, expect_tuple, field, option_from_cbor, option_to_cbor, sum_head, FromCbor, ToCbor};
use cardano_codec::{CborValue, Error, Result};
use cardano_crypto::Hash32;

use crate::credential::Credential;
use crate::pool::{PoolKeyHash, PoolParams, RewardAccount, UnitInterval};
use crate::script::Script;
use crate::value::Coin;

pub type Epoch = u64;
pub type DRepCredential = Credential;
pub type CommitteeColdCredential = Credential;
pub type CommitteeHotCredential = Credential;
pub type ScriptHash = cardano_crypto::Hash28;
pub type TransactionId = Hash32;

/// `[url, data_hash]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Anchor {
    pub url: String,
    pub content_hash: Hash32,
}

impl ToCbor for Anchor {
    fn to_cbor(&self) -> CborValue {
        CborValue::Array(vec![CborValue::Text(self.url.clone()), self.content_hash.to_cbor()])
    }
}

impl FromCbor for Anchor {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let fields = expect_tuple(value, 2)?;
        let url = field(fields, 0)?
            .as_text()
            .ok_or_else(|| Error::StructuralMismatch("anchor url must be text".into()))?
            .to_string();
        let content_hash = Hash32::from_cbor(field(fields, 1)?)?;
        Ok(Anchor { url, content_hash })
    }
}

/// `[anchor, script_hash?]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constitution {
    pub anchor: Anchor,
    pub guardrail_script: Option<ScriptHash>,
}

impl ToCbor for Constitution {
    fn to_cbor(&self) -> CborValue {
        CborValue::Array(vec![self.anchor.to_cbor(), option_to_cbor(&self.guardrail_script)])
    }
}

impl FromCbor for Constitution {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let fields = expect_tuple(value, 2)?;
        let anchor = Anchor::from_cbor(field(fields, 0)?)?;
        let guardrail_script = option_from_cbor::<ScriptHash>(field(fields, 1)?)?;
        Ok(Constitution { anchor, guardrail_script })
    }
}

/// Identifies a governance action by the transaction that proposed it and
/// its index within that transaction's proposal list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GovActionId {
    pub transaction_id: TransactionId,
    pub action_index: u32,
}

impl ToCbor for GovActionId {
    fn to_cbor(&self) -> CborValue {
        CborValue::Array(vec![
            self.transaction_id.to_cbor(),
            CborValue::Uint(self.action_index as u64),
        ])
    }
}

impl FromCbor for GovActionId {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let fields = expect_tuple(value, 2)?;
        let transaction_id = TransactionId::from_cbor(field(fields, 0)?)?;
        let action_index = field(fields, 1)?
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("action index must be a uint".into()))?
            as u32;
        Ok(GovActionId { transaction_id, action_index })
    }
}

fn gov_action_id_option_to_cbor(value: &Option<GovActionId>) -> CborValue {
    option_to_cbor(value)
}

fn gov_action_id_option_from_cbor(value: &CborValue) -> Result<Option<GovActionId>> {
    option_from_cbor::<GovActionId>(value)
}

/// `[0,key_hash] | [1,script_hash] | [2] | [3]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DRep {
    Key(cardano_crypto::Hash28),
    Script(ScriptHash),
    AlwaysAbstain,
    AlwaysNoConfidence,
}

impl ToCbor for DRep {
    fn to_cbor(&self) -> CborValue {
        match self {
            DRep::Key(h) => sum_head(0, vec![h.to_cbor()]),
            DRep::Script(h) => sum_head(1, vec![h.to_cbor()]),
            DRep::AlwaysAbstain => sum_head(2, vec![]),
            DRep::AlwaysNoConfidence => sum_head(3, vec![]),
        }
    }
}

impl FromCbor for DRep {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let (tag, fields) = expect_sum(value)?;
        match tag {
            0 => Ok(DRep::Key(cardano_crypto::Hash28::from_cbor(field(fields, 0)?)?)),
            1 => Ok(DRep::Script(ScriptHash::from_cbor(field(fields, 0)?)?)),
            2 => Ok(DRep::AlwaysAbstain),
            3 => Ok(DRep::AlwaysNoConfidence),
            other => Err(Error::UnknownDiscriminator(other)),
        }
    }
}

/// Protocol-parameter updates are out of this catalogue's scope (see the
/// crate's top-level docs); `ParameterChange`/`HardForkInitiation` carry the
/// update opaquely as already-encoded CBOR so the action can still
/// round-trip without modelling every protocol parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueParamUpdate(pub CborValue);

impl ToCbor for OpaqueParamUpdate {
    fn to_cbor(&self) -> CborValue {
        self.0.clone()
    }
}

impl FromCbor for OpaqueParamUpdate {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        Ok(OpaqueParamUpdate(value.clone()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GovernanceAction {
    ParameterChange {
        prior_action: Option<GovActionId>,
        update: OpaqueParamUpdate,
        guardrail_script: Option<ScriptHash>,
    },
    HardForkInitiation {
        prior_action: Option<GovActionId>,
        protocol_version: (u64, u64),
    },
    TreasuryWithdrawals {
        withdrawals: Vec<(RewardAccount, Coin)>,
        guardrail_script: Option<ScriptHash>,
    },
    NoConfidence {
        prior_action: Option<GovActionId>,
    },
    UpdateCommittee {
        prior_action: Option<GovActionId>,
        removed_members: Vec<CommitteeColdCredential>,
        added_members: Vec<(CommitteeColdCredential, Epoch)>,
        quorum: UnitInterval,
    },
    NewConstitution {
        prior_action: Option<GovActionId>,
        constitution: Constitution,
    },
    Information,
}

impl ToCbor for GovernanceAction {
    fn to_cbor(&self) -> CborValue {
        match self {
            GovernanceAction::ParameterChange { prior_action, update, guardrail_script } => sum_head(
                0,
                vec![
                    gov_action_id_option_to_cbor(prior_action),
                    update.to_cbor(),
                    option_to_cbor(guardrail_script),
                ],
            ),
            GovernanceAction::HardForkInitiation { prior_action, protocol_version } => sum_head(
                1,
                vec![
                    gov_action_id_option_to_cbor(prior_action),
                    CborValue::Array(vec![
                        CborValue::Uint(protocol_version.0),
                        CborValue::Uint(protocol_version.1),
                    ]),
                ],
            ),
            GovernanceAction::TreasuryWithdrawals { withdrawals, guardrail_script } => sum_head(
                2,
                vec![
                    CborValue::Map(
                        withdrawals
                            .iter()
                            .map(|(account, coin)| (CborValue::Bytes(account.clone()), CborValue::Uint(*coin)))
                            .collect(),
                    ),
                    option_to_cbor(guardrail_script),
                ],
            ),
            GovernanceAction::NoConfidence { prior_action } => {
                sum_head(3, vec![gov_action_id_option_to_cbor(prior_action)])
            }
            GovernanceAction::UpdateCommittee {
                prior_action,
                removed_members,
                added_members,
                quorum,
            } => sum_head(
                4,
                vec![
                    gov_action_id_option_to_cbor(prior_action),
                    CborValue::Array(removed_members.iter().map(Credential::to_cbor).collect()),
                    CborValue::Map(
                        added_members
                            .iter()
                            .map(|(cred, epoch)| (cred.to_cbor(), CborValue::Uint(*epoch)))
                            .collect(),
                    ),
                    quorum.to_cbor(),
                ],
            ),
            GovernanceAction::NewConstitution { prior_action, constitution } => sum_head(
                5,
                vec![gov_action_id_option_to_cbor(prior_action), constitution.to_cbor()],
            ),
            GovernanceAction::Information => sum_head(6, vec![]),
        }
    }
}

impl FromCbor for GovernanceAction {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let (tag, fields) = expect_sum(value)?;
        match tag {
            0 => Ok(GovernanceAction::ParameterChange {
                prior_action: gov_action_id_option_from_cbor(field(fields, 0)?)?,
                update: OpaqueParamUpdate::from_cbor(field(fields, 1)?)?,
                guardrail_script: option_from_cbor::<ScriptHash>(field(fields, 2)?)?,
            }),
            1 => {
                let version_fields = expect_tuple(field(fields, 1)?, 2)?;
                let major = version_fields[0]
                    .as_uint()
                    .ok_or_else(|| Error::StructuralMismatch("protocol version major must be a uint".into()))?;
                let minor = version_fields[1]
                    .as_uint()
                    .ok_or_else(|| Error::StructuralMismatch("protocol version minor must be a uint".into()))?;
                Ok(GovernanceAction::HardForkInitiation {
                    prior_action: gov_action_id_option_from_cbor(field(fields, 0)?)?,
                    protocol_version: (major, minor),
                })
            }
            2 => {
                let withdrawals = field(fields, 0)?
                    .as_map()
                    .ok_or_else(|| Error::StructuralMismatch("withdrawals must be a map".into()))?
                    .iter()
                    .map(|(k, v)| {
                        let account = k
                            .as_bytes()
                            .ok_or_else(|| Error::StructuralMismatch("reward account must be bytes".into()))?
                            .to_vec();
                        let coin = v
                            .as_uint()
                            .ok_or_else(|| Error::StructuralMismatch("withdrawal amount must be a uint".into()))?;
                        Ok((account, coin))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(GovernanceAction::TreasuryWithdrawals {
                    withdrawals,
                    guardrail_script: option_from_cbor::<ScriptHash>(field(fields, 1)?)?,
                })
            }
            3 => Ok(GovernanceAction::NoConfidence {
                prior_action: gov_action_id_option_from_cbor(field(fields, 0)?)?,
            }),
            4 => {
                let removed_members = fields
                    .get(1)
                    .map(|v| cardano_codec::schema::expect_array(v))
                    .transpose()?
                    .unwrap_or(&[])
                    .iter()
                    .map(Credential::from_cbor)
                    .collect::<Result<Vec<_>>>()?;
                let added_members = field(fields, 2)?
                    .as_map()
                    .ok_or_else(|| Error::StructuralMismatch("added committee members must be a map".into()))?
                    .iter()
                    .map(|(k, v)| {
                        let cred = Credential::from_cbor(k)?;
                        let epoch = v
                            .as_uint()
                            .ok_or_else(|| Error::StructuralMismatch("committee term epoch must be a uint".into()))?;
                        Ok((cred, epoch))
                    })
                    .collect::<Result<Vec<_>>>()?;
                let quorum = UnitInterval::from_cbor(field(fields, 3)?)?;
                Ok(GovernanceAction::UpdateCommittee {
                    prior_action: gov_action_id_option_from_cbor(field(fields, 0)?)?,
                    removed_members,
                    added_members,
                    quorum,
                })
            }
            5 => Ok(GovernanceAction::NewConstitution {
                prior_action: gov_action_id_option_from_cbor(field(fields, 0)?)?,
                constitution: Constitution::from_cbor(field(fields, 1)?)?,
            }),
            6 => Ok(GovernanceAction::Information),
            other => Err(Error::UnknownDiscriminator(other)),
        }
    }
}

/// `[deposit, rewardAccount, governanceAction, anchor?]`. The catalogue
/// marks `anchor` optional, unlike the ledger's historical shape where it
/// is mandatory; this follows the catalogue literally.
#[derive(Debug, Clone, PartialEq)]
pub struct ProposalProcedure {
    pub deposit: Coin,
    pub reward_account: RewardAccount,
    pub gov_action: GovernanceAction,
    pub anchor: Option<Anchor>,
}

impl ToCbor for ProposalProcedure {
    fn to_cbor(&self) -> CborValue {
        CborValue::Array(vec![
            CborValue::Uint(self.deposit),
            CborValue::Bytes(self.reward_account.clone()),
            self.gov_action.to_cbor(),
            option_to_cbor(&self.anchor),
        ])
    }
}

impl FromCbor for ProposalProcedure {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let fields = expect_tuple(value, 4)?;
        let deposit = field(fields, 0)?
            .as_uint()
            .ok_or_else(|| Error::StructuralMismatch("proposal deposit must be a uint".into()))?;
        let reward_account = field(fields, 1)?
            .as_bytes()
            .ok_or_else(|| Error::StructuralMismatch("reward account must be bytes".into()))?
            .to_vec();
        let gov_action = GovernanceAction::from_cbor(field(fields, 2)?)?;
        let anchor = option_from_cbor::<Anchor>(field(fields, 3)?)?;
        Ok(ProposalProcedure { deposit, reward_account, gov_action, anchor })
    }
}

/// Delegation certificates. Discriminators 5 and 6 (historical genesis
/// delegation and the MIR certificate) were retired before Conway and are
/// intentionally absent.
#[derive(Debug, Clone, PartialEq)]
pub enum Certificate {
    StakeRegistration(Credential),
    StakeDeregistration(Credential),
    StakeDelegation(Credential, PoolKeyHash),
    PoolRegistration(PoolParams),
    PoolRetirement(PoolKeyHash, Epoch),
    Reg(Credential, Coin),
    UnReg(Credential, Coin),
    VoteDeleg(Credential, DRep),
    StakeVoteDeleg(Credential, PoolKeyHash, DRep),
    StakeRegDeleg(Credential, PoolKeyHash, Coin),
    VoteRegDeleg(Credential, DRep, Coin),
    StakeVoteRegDeleg(Credential, PoolKeyHash, DRep, Coin),
    AuthCommitteeHot(CommitteeColdCredential, CommitteeHotCredential),
    ResignCommitteeCold(CommitteeColdCredential, Option<Anchor>),
    RegDRepCert(DRepCredential, Coin, Option<Anchor>),
    UnRegDRepCert(DRepCredential, Coin),
    UpdateDRepCert(DRepCredential, Option<Anchor>),
}

impl ToCbor for Certificate {
    fn to_cbor(&self) -> CborValue {
        match self {
            Certificate::StakeRegistration(c) => sum_head(0, vec![c.to_cbor()]),
            Certificate::StakeDeregistration(c) => sum_head(1, vec![c.to_cbor()]),
            Certificate::StakeDelegation(c, pool) => sum_head(2, vec![c.to_cbor(), pool.to_cbor()]),
            Certificate::PoolRegistration(params) => {
                let mut items = if let CborValue::Array(items) = params.to_cbor() {
                    items
                } else {
                    unreachable!("PoolParams::to_cbor always produces an array")
                };
                let mut head = vec![CborValue::Uint(3)];
                head.append(&mut items);
                CborValue::Array(head)
            }
            Certificate::PoolRetirement(pool, epoch) => {
                sum_head(4, vec![pool.to_cbor(), CborValue::Uint(*epoch)])
            }
            Certificate::Reg(c, coin) => sum_head(7, vec![c.to_cbor(), CborValue::Uint(*coin)]),
            Certificate::UnReg(c, coin) => sum_head(8, vec![c.to_cbor(), CborValue::Uint(*coin)]),
            Certificate::VoteDeleg(c, drep) => sum_head(9, vec![c.to_cbor(), drep.to_cbor()]),
            Certificate::StakeVoteDeleg(c, pool, drep) => {
                sum_head(10, vec![c.to_cbor(), pool.to_cbor(), drep.to_cbor()])
            }
            Certificate::StakeRegDeleg(c, pool, coin) => {
                sum_head(11, vec![c.to_cbor(), pool.to_cbor(), CborValue::Uint(*coin)])
            }
            Certificate::VoteRegDeleg(c, drep, coin) => {
                sum_head(12, vec![c.to_cbor(), drep.to_cbor(), CborValue::Uint(*coin)])
            }
            Certificate::StakeVoteRegDeleg(c, pool, drep, coin) => sum_head(
                13,
                vec![c.to_cbor(), pool.to_cbor(), drep.to_cbor(), CborValue::Uint(*coin)],
            ),
            Certificate::AuthCommitteeHot(cold, hot) => sum_head(14, vec![cold.to_cbor(), hot.to_cbor()]),
            Certificate::ResignCommitteeCold(cold, anchor) => {
                sum_head(15, vec![cold.to_cbor(), option_to_cbor(anchor)])
            }
            Certificate::RegDRepCert(drep, coin, anchor) => {
                sum_head(16, vec![drep.to_cbor(), CborValue::Uint(*coin), option_to_cbor(anchor)])
            }
            Certificate::UnRegDRepCert(drep, coin) => {
                sum_head(17, vec![drep.to_cbor(), CborValue::Uint(*coin)])
            }
            Certificate::UpdateDRepCert(drep, anchor) => {
                sum_head(18, vec![drep.to_cbor(), option_to_cbor(anchor)])
            }
        }
    }
}

impl FromCbor for Certificate {
    fn from_cbor(value: &CborValue) -> Result<Self> {
        let (tag, fields) = expect_sum(value)?;
        match tag {
            0 => Ok(Certificate::StakeRegistration(Credential::from_cbor(field(fields, 0)?)?)),
            1 => Ok(Certificate::StakeDeregistration(Credential::from_cbor(field(fields, 0)?)?)),
            2 => Ok(Certificate::StakeDelegation(
                Credential::from_cbor(field(fields, 0)?)?,
                PoolKeyHash::from_cbor(field(fields, 1)?)?,
            )),
            3 => Ok(Certificate::PoolRegistration(PoolParams::from_cbor(&CborValue::Array(
                fields.to_vec(),
            ))?)),
            4 => Ok(Certificate::PoolRetirement(
                PoolKeyHash::from_cbor(field(fields, 0)?)?,
                field(fields, 1)?
                    .as_uint()
                    .ok_or_else(|| Error::StructuralMismatch("pool retirement epoch must be a uint".into()))?,
            )),
            7 => Ok(Certificate::Reg(
                Credential::from_cbor(field(fields, 0)?)?,
                field(fields, 1)?
                    .as_uint()
                    .ok_or_else(|| Error::StructuralMismatch("deposit must be a uint".into()))?,
            )),
            8 => Ok(Certificate::UnReg(
                Credential::from_cbor(field(fields, 0)?)?,
                field(fields, 1)?
                    .as_uint()
                    .ok_or_else(|| Error::StructuralMismatch("deposit must be a uint".into()))?,
            )),
            9 => Ok(Certificate::VoteDeleg(
                Credential::from_cbor(field(fields, 0)?)?,
                DRep::from_cbor(field(fields, 1)?)?,
            )),
            10 => Ok(Certificate::StakeVoteDeleg(
                Credential::from_cbor(field(fields, 0)?)?,
                PoolKeyHash::from_cbor(field(fields, 1)?)?,
                DRep::from_cbor(field(fields, 2)?)?,
            )),
            11 => Ok(Certificate::StakeRegDeleg(
                Credential::from_cbor(field(fields, 0)?)?,
                PoolKeyHash::from_cbor(field(fields, 1)?)?,
                field(fields, 2)?
                    .as_uint()
                    .ok_or_else(|| Error::StructuralMismatch("deposit must be a uint".into()))?,
            )),
            12 => Ok(Certificate::VoteRegDeleg(
                Credential::from_cbor(field(fields, 0)?)?,
                DRep::from_cbor(field(fields, 1)?)?,
                field(fields, 2)?
                    .as_uint()
                    .ok_or_else(|| Error::StructuralMismatch("deposit must be a uint".into()))?,
            )),
            13 => Ok(Certificate::StakeVoteRegDeleg(
                Credential::from_cbor(field(fields, 0)?)?,
                PoolKeyHash::from_cbor(field(fields, 1)?)?,
                DRep::from_cbor(field(fields, 2)?)?,
                field(fields, 3)?
                    .as_uint()
                    .ok_or_else(|| Error::StructuralMismatch("deposit must be a uint".into()))?,
            )),
            14 => Ok(Certificate::AuthCommitteeHot(
                Credential::from_cbor(field(fields, 0)?)?,
                Credential::from_cbor(field(fields, 1)?)?,
            )),
            15 => Ok(Certificate::ResignCommitteeCold(
                Credential::from_cbor(field(fields, 0)?)?,
                option_from_cbor::<Anchor>(field(fields, 1)?)?,
            )),
            16 => Ok(Certificate::RegDRepCert(
                Credential::from_cbor(field(fields, 0)?)?,
                field(fields, 1)?
                    .as_uint()
                    .ok_or_else(|| Error::StructuralMismatch("deposit must be a uint".into()))?,
                option_from_cbor::<Anchor>(field(fields, 2)?)?,
            )),
            17 => Ok(Certificate::UnRegDRepCert(
                Credential::from_cbor(field(fields, 0)?)?,
                field(fields, 1)?
                    .as_uint()
                    .ok_or_else(|| Error::StructuralMismatch("deposit must be a uint".into()))?,
            )),
            18 => Ok(Certificate::UpdateDRepCert(
                Credential::from_cbor(field(fields, 0)?)?,
                option_from_cbor::<Anchor>(field(fields, 1)?)?,
            )),
            other => Err(Error::UnknownDiscriminator(other)),
        }
    }
}

// `Script` is pulled in only so downstream crates building on top of
// governance data (e.g. a future transaction layer) can refer to
// committee/DRep-gated scripts without a second import path.
pub type GuardrailScript = Script;

#[cfg(test)]
mod tests {
    use super::*;
    use cardano_codec::schema::Codable;
    use cardano_codec::Options;
    use cardano_crypto::Hash28;

    fn cred(byte: u8) -> Credential {
        Credential::KeyHash(Hash28::new([byte; 28]))
    }

    #[test]
    fn drep_discriminators_match_catalogue() {
        let opts = Options::canonical();
        assert_eq!(DRep::from_bytes(&DRep::AlwaysAbstain.to_bytes(&opts), &opts).unwrap(), DRep::AlwaysAbstain);
        assert_eq!(
            DRep::from_bytes(&DRep::AlwaysNoConfidence.to_bytes(&opts), &opts).unwrap(),
            DRep::AlwaysNoConfidence
        );

        let unknown = CborValue::Array(vec![CborValue::Uint(4)]);
        let encoded = cardano_codec::encode(&unknown, &opts);
        assert_eq!(DRep::from_bytes(&encoded, &opts), Err(Error::UnknownDiscriminator(4)));
    }

    #[test]
    fn certificate_stake_delegation_roundtrips() {
        let cert = Certificate::StakeDelegation(cred(1), PoolKeyHash::new([2u8; 28]));
        let opts = Options::canonical();
        let bytes = cert.to_bytes(&opts);
        assert_eq!(Certificate::from_bytes(&bytes, &opts).unwrap(), cert);
    }

    #[test]
    fn certificate_pool_registration_roundtrips() {
        let params = PoolParams {
            operator: PoolKeyHash::new([1u8; 28]),
            vrf_keyhash: PoolKeyHash::new([2u8; 28]),
            pledge: 5,
            cost: 1,
            margin: UnitInterval { numerator: 1, denominator: 10 },
            reward_account: vec![0xE1; 29],
            owners: vec![],
            relays: vec![],
            metadata: None,
        };
        let cert = Certificate::PoolRegistration(params);
        let opts = Options::canonical();
        let bytes = cert.to_bytes(&opts);
        assert_eq!(Certificate::from_bytes(&bytes, &opts).unwrap(), cert);
    }

    #[test]
    fn certificate_vote_deleg_roundtrips() {
        let cert = Certificate::VoteDeleg(cred(3), DRep::AlwaysAbstain);
        let opts = Options::canonical();
        let bytes = cert.to_bytes(&opts);
        assert_eq!(Certificate::from_bytes(&bytes, &opts).unwrap(), cert);
    }

    #[test]
    fn proposal_procedure_roundtrips_with_and_without_anchor() {
        let opts = Options::canonical();
        let base = ProposalProcedure {
            deposit: 100_000,
            reward_account: vec![0xE1; 29],
            gov_action: GovernanceAction::Information,
            anchor: Some(Anchor {
                url: "https://example.com/proposal".into(),
                content_hash: Hash32::new([9u8; 32]),
            }),
        };
        let bytes = base.to_bytes(&opts);
        assert_eq!(ProposalProcedure::from_bytes(&bytes, &opts).unwrap(), base);

        let mut no_anchor = base.clone();
        no_anchor.anchor = None;
        let bytes = no_anchor.to_bytes(&opts);
        assert_eq!(ProposalProcedure::from_bytes(&bytes, &opts).unwrap(), no_anchor);
    }

    #[test]
    fn governance_action_no_confidence_roundtrips() {
        let action = GovernanceAction::NoConfidence {
            prior_action: Some(GovActionId {
                transaction_id: Hash32::new([1u8; 32]),
                action_index: 2,
            }),
        };
        let opts = Options::canonical();
        let bytes = action.to_bytes(&opts);
        assert_eq!(GovernanceAction::from_bytes(&bytes, &opts).unwrap(), action);
    }

    #[test]
    fn governance_action_treasury_withdrawals_roundtrips() {
        let action = GovernanceAction::TreasuryWithdrawals {
            withdrawals: vec![(vec![0xE1; 29], 42)],
            guardrail_script: None,
        };
        let opts = Options::canonical();
        let bytes = action.to_bytes(&opts);
        assert_eq!(GovernanceAction::from_bytes(&bytes, &opts).unwrap(), action);
    }
}
