//! Typed hash and key-material wrappers shared across the ledger entity
//! catalogue in `cardano-primitives`.
//!
//! No algorithm implementations live here — no hashing, no signing, no
//! verifying. These types exist purely to give fixed-size byte strings a
//! CBOR-codable, doc-carrying shape instead of passing raw `Vec<u8>` around.

mod hash;
mod keys;

pub use hash::Hash;
pub use keys::{Ed25519Signature, KesSignature, KesVKey, VKey, VrfCert, VrfVKey};

/// A 28-byte hash: the width used for `PoolKeyHash`, `AddrKeyHash`,
/// `ScriptHash`, `GenesisHash`, and most other ledger-level identifiers.
pub type Hash28 = Hash<28>;

/// A 32-byte hash: the width used for transaction hashes, block hashes, and
/// Plutus script-data hashes.
pub type Hash32 = Hash<32>;

/// A 20-byte hash: the width of the Blake2b-160 root used inside Byron
/// addresses.
pub type Hash20 = Hash<20>;
