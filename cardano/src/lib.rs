//! Rust-native data modeling and CBOR serialization for the Cardano
//! ledger's Conway era.
//!
//! This crate doesn't provide any particular application — it's a base
//! layer for higher-level use cases (wallets, indexers, tooling) that need
//! a typed, CBOR-codable view of ledger entities without pulling in a
//! transaction builder, a node-to-node network stack, or ledger-rule
//! validation.

#[doc(inline)]
pub use cardano_codec as codec;

#[doc(inline)]
pub use cardano_crypto as crypto;

#[doc(inline)]
pub use cardano_addresses as addresses;

pub mod ledger {
    //! Ledger entity catalogue: Plutus `Data`, `Value`, scripts,
    //! certificates, governance actions, and related CBOR-codable types.

    #[doc(inline)]
    pub use cardano_primitives::*;
}
