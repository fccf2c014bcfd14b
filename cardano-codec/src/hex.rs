use crate::error::{Error, Result};

/// Encodes `bytes` as a lowercase, unprefixed hex string.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decodes a hex string, tolerating uppercase input; the encoder always
/// emits lowercase. Rejects odd-length strings and non-hex characters.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    hex::decode(s).map_err(|_| Error::InvalidHex)
}
